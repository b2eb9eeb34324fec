//! Persisted state cell.
//!
//! [`PersistedCell`] pairs an in-memory value with one key in a
//! [`KeyValueStore`]. The value is loaded once when the cell is created and
//! written back after every mutation. Persistence is best effort: a missing or
//! unreadable entry yields the default, and a failed write is logged and
//! dropped while the in-memory value stays authoritative.

use crate::storage::backend::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value that loads itself from, and saves itself to, a key-value store.
pub struct PersistedCell<T> {
    key: String,
    value: T,
    store: Box<dyn KeyValueStore>,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the value stored under `key`, falling back to `default`.
    ///
    /// # Parameters
    ///
    /// * `key` - Store key, fixed for the cell's lifetime
    /// * `default` - Value used when nothing usable is stored
    /// * `store` - Backend the cell reads from now and writes to on change
    ///
    /// The default is used when the key is absent, when the stored text does
    /// not parse as `T`, or when the store cannot be read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoppies::storage::{MemoryStore, PersistedCell};
    ///
    /// let store = MemoryStore::with_entries([("count", "3")]);
    /// let mut cell = PersistedCell::load("count", 0_u32, Box::new(store.clone()));
    /// assert_eq!(*cell.get(), 3);
    ///
    /// cell.set(4);
    /// let reloaded = PersistedCell::load("count", 0_u32, Box::new(store));
    /// assert_eq!(*reloaded.get(), 4);
    /// ```
    pub fn load(key: impl Into<String>, default: T, store: Box<dyn KeyValueStore>) -> Self {
        let key = key.into();
        let _span = tracing::debug_span!("persisted_cell_load", key = %key).entered();

        let value = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    tracing::debug!("restored persisted value");
                    value
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stored value does not parse, using default");
                    default
                }
            },
            Ok(None) => {
                tracing::debug!("no stored value, using default");
                default
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored value, using default");
                default
            }
        };

        Self { key, value, store }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and writes it back.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.save();
    }

    /// Mutates the value in place and writes it back.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.save();
        out
    }

    fn save(&mut self) {
        let raw = match serde_json::to_string(&self.value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to serialize state");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &raw) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist state");
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PersistedCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedCell")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("store", &self.store)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, ShoppiesError};
    use crate::storage::MemoryStore;

    /// Store whose writes always fail, as if the quota were exceeded.
    #[derive(Debug)]
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ShoppiesError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn absent_key_uses_default() {
        let cell = PersistedCell::load("k", 7_i64, Box::new(MemoryStore::new()));
        assert_eq!(*cell.get(), 7);
    }

    #[test]
    fn unparsable_value_uses_default() {
        let store = MemoryStore::with_entries([("k", "\"seven\"")]);
        let cell = PersistedCell::load("k", 0_i64, Box::new(store));
        assert_eq!(*cell.get(), 0);
    }

    #[test]
    fn mutations_are_written_back() {
        let store = MemoryStore::new();
        let mut cell = PersistedCell::load("k", vec![1_u8], Box::new(store.clone()));

        cell.update(|v| v.push(2));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        cell.set(vec![]);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));

        let reloaded = PersistedCell::load("k", vec![9_u8], Box::new(store));
        assert!(reloaded.get().is_empty());
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut cell = PersistedCell::load("k", 1_i64, Box::new(FullStore));
        cell.set(2);
        assert_eq!(*cell.get(), 2);
    }
}
