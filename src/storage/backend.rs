//! Key-value store abstraction.
//!
//! The [`KeyValueStore`] trait is the only thing persisted state depends on, so
//! the backend can be swapped without touching the state cells that use it.
//! Values are opaque text; serialization happens in the caller.

use crate::domain::error::Result;

/// Abstraction over persistent key-value backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON file per key (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): shared in-memory map
///
/// # Examples
///
/// ```no_run
/// use shoppies::storage::{JsonFileStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::new(PathBuf::from("/tmp/shoppies"));
/// store.set("shoppies-theme", "2")?;
/// assert_eq!(store.get("shoppies-theme")?.as_deref(), Some("2"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait KeyValueStore: Send + std::fmt::Debug {
    /// Reads the text stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written (e.g. quota or
    /// permission failures).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
