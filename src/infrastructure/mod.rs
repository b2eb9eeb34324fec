//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a WASI sandbox: `/data` is the plugin's private,
//! persistent data directory and `/host` is the host filesystem as seen from
//! the directory Zellij was started in.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_data_dir};
