//! Storage layer for persisted user choices.
//!
//! Two values survive between sessions: the theme index and the nomination
//! list. Each is held by its own [`PersistedCell`] over an injectable
//! [`KeyValueStore`].
//!
//! # Modules
//!
//! - `backend`: Key-value store trait
//! - `json`: One-JSON-file-per-key backend with atomic writes
//! - `memory`: Shared in-memory backend
//! - `persisted`: Load-on-create, save-on-change state cell

pub mod backend;
pub mod json;
pub mod memory;
pub mod persisted;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use persisted::PersistedCell;

/// Storage key for the theme index.
pub const THEME_KEY: &str = "shoppies-theme";

/// Storage key for the nomination list.
pub const NOMINATIONS_KEY: &str = "shoppies-nominations";
