//! JSON file-based key-value backend.
//!
//! Each key lives in its own file, `<dir>/<key>.json`, so independent state
//! cells never overwrite each other's data. Writes go to a temporary file that
//! is then renamed over the target, which keeps the file intact if the plugin
//! dies mid-write.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": 1760745600,
//!   "value": "[{\"Title\":\"Batman\",\"Year\":\"1989\",\"imdbID\":\"tt0096895\",\"Poster\":\"N/A\"}]"
//! }
//! ```

use crate::domain::error::{Result, ShoppiesError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current envelope format version.
const FORMAT_VERSION: u32 = 1;

/// On-disk envelope around a stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    version: u32,

    /// Unix timestamp of the last write.
    saved_at: i64,

    value: String,
}

/// Directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`.
    ///
    /// Nothing is touched on disk until the first write, which creates the
    /// directory if needed.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`. Path separators in the key are replaced.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        let _span = tracing::debug_span!("json_store_get", key = %key, path = ?path).entered();

        if !path.exists() {
            tracing::debug!("key not present");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let entry: StoredEntry = serde_json::from_str(&contents)
            .map_err(|e| ShoppiesError::Storage(format!("failed to parse {}: {e}", path.display())))?;

        tracing::debug!(version = entry.version, saved_at = entry.saved_at, "loaded entry");
        Ok(Some(entry.value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let _span = tracing::debug_span!("json_store_set", key = %key, len = value.len()).entered();

        std::fs::create_dir_all(&self.dir)?;

        let entry = StoredEntry {
            version: FORMAT_VERSION,
            saved_at: chrono::Utc::now().timestamp(),
            value: value.to_string(),
        };
        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| ShoppiesError::Storage(format!("failed to serialize entry: {e}")))?;

        let tmp_path = path.with_extension("json.tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("entry saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("shoppies-theme").unwrap(), None);

        store.set("shoppies-theme", "3").unwrap();
        store.set("shoppies-nominations", "[]").unwrap();
        store.set("shoppies-theme", "1").unwrap();

        assert_eq!(store.get("shoppies-theme").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("shoppies-nominations").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/shoppies-theme.json").exists());
        assert!(!dir.path().join("nested/shoppies-theme.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoppies-theme.json"), "{not json").unwrap();

        let store = JsonFileStore::new(dir.path().to_path_buf());
        let err = store.get("shoppies-theme").unwrap_err();
        assert!(matches!(err, ShoppiesError::Storage(_)));
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let store = JsonFileStore::new(PathBuf::from("/data"));
        assert_eq!(store.path_for("../etc/passwd"), PathBuf::from("/data/.._etc_passwd.json"));
    }
}
