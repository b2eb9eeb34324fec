//! The Shoppies: a Zellij plugin for searching movies and curating a shortlist
//! of five nominations.
//!
//! - Debounced search-as-you-type against the OMDb API
//! - Results list with fuzzy-highlighted titles and per-row nominate controls
//! - A nomination shortlist capped at five, persisted between sessions
//! - Four built-in themes cycled from the header, also persisted
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers, HTTP
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Search Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (search/)     │
//! │ - Rendering   │   │ - JSON files  │   │ - Debouncer   │
//! │ - Themes      │   │ - State cells │   │ - Gateway     │
//! │ - Components  │   │ - Backend API │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (movies, nominations, errors)               │
//! │  Infrastructure (sandbox paths)                     │
//! │  Observability (OTLP file export)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shoppies.wasm" {
//!         api_key "abc123"
//!         debounce_ms "500"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use shoppies::storage::MemoryStore;
//! use shoppies::{handle_event, initialize_with_store, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("abc123".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize_with_store(&config, &MemoryStore::new());
//! handle_event(&mut state, &Event::WebAccessResolved { granted: true })?;
//!
//! for c in "batman".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let mut sent = Vec::new();
//! for _ in 0..6 {
//!     let (_, actions) = handle_event(&mut state, &Event::DebounceElapsed)?;
//!     sent.extend(actions);
//! }
//! assert!(matches!(sent.as_slice(), [Action::SendSearch(_)]));
//! # Ok::<(), shoppies::ShoppiesError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, SearchStatus, WebAccess};
pub use domain::{Movie, NominationList, Result, SearchError, ShoppiesError};
pub use ui::Theme;

use search::{DEFAULT_BASE_URL, DEFAULT_DEBOUNCE};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key, sent as `apikey`. Without one the upstream answers
    /// every search with an error, which is shown like any other.
    pub api_key: Option<String>,

    /// Search endpoint. Default: `https://www.omdbapi.com/`
    pub base_url: String,

    /// Quiet period before a query is submitted. Default: 500 ms
    pub debounce: Duration,

    /// Directory holding persisted choices and the trace file.
    ///
    /// `~` maps to the sandbox's `/host`. Default: `/data`
    pub data_dir: PathBuf,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            data_dir: infrastructure::get_data_dir(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; missing, blank, or unparsable values fall
    /// back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use shoppies::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc123".to_string());
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("abc123"));
    /// assert_eq!(config.debounce, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let debounce = non_blank("debounce_ms")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map_or(DEFAULT_DEBOUNCE, Duration::from_millis);

        Self {
            api_key: non_blank("api_key"),
            base_url: non_blank("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            debounce,
            data_dir: infrastructure::resolve_data_dir(config.get("data_dir").map(String::as_str)),
            trace_level: non_blank("trace_level"),
        }
    }
}

/// Initializes the plugin state with file-backed persistence.
///
/// Choices are stored as JSON files in `config.data_dir`. If that directory
/// cannot be created, state is kept in memory for this session only.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(data_dir = %config.data_dir.display(), "initializing shoppies plugin");

    match std::fs::create_dir_all(&config.data_dir) {
        Ok(()) => initialize_with_store(config, &JsonFileStore::new(config.data_dir.clone())),
        Err(e) => {
            tracing::warn!(error = %e, "data directory unavailable, choices will not persist");
            initialize_with_store(config, &MemoryStore::new())
        }
    }
}

/// Initializes the plugin state over an explicit store.
///
/// Each persisted cell receives its own handle to `store`.
pub fn initialize_with_store<S>(config: &Config, store: &S) -> AppState
where
    S: KeyValueStore + Clone + 'static,
{
    let state = AppState::with_store(config, store);
    tracing::debug!(
        nominations = state.nominations.get().len(),
        theme = %state.theme().name,
        "state restored"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.data_dir, PathBuf::from("/data"));
    }

    #[test]
    fn bad_values_fall_back() {
        let map = BTreeMap::from([
            ("debounce_ms".to_string(), "soon".to_string()),
            ("api_key".to_string(), "   ".to_string()),
        ]);
        let config = Config::from_zellij(&map);
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn file_store_persists_between_initializations() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let mut state = initialize(&config);
        state.cycle_theme();
        drop(state);

        let state = initialize(&config);
        assert_eq!(state.theme_index.get().0, 1);
        assert!(dir.path().join("shoppies-theme.json").exists());
    }
}
