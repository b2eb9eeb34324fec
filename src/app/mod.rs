//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain,
//! search, and storage layers. Everything here is host independent, so the
//! whole interaction can be driven from tests.
//!
//! # Architecture
//!
//! ```text
//! Keys/Timers/HTTP → Events → Event Handler → State Mutations → Actions → Host calls
//!                        ↑                                        ↓
//!                        └──── Timer expiry / WebRequestResult ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus, search status, and web access types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, SearchStatus, WebAccess};
pub use state::AppState;
