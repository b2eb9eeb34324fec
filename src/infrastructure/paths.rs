//! Path utilities for the Zellij sandbox.

use std::path::PathBuf;

/// Plugin-private data directory provided by Zellij.
const SANDBOX_DATA_DIR: &str = "/data";

/// Returns the default directory for persisted choices and trace files.
///
/// ```
/// use shoppies::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(SANDBOX_DATA_DIR)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// ```
/// use shoppies::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/shoppies"), "/host/shoppies");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/shoppies"), "/data/shoppies");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Resolves the configured data directory, falling back to [`get_data_dir`].
///
/// Blank values are treated as unset.
#[must_use]
pub fn resolve_data_dir(configured: Option<&str>) -> PathBuf {
    configured
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map_or_else(get_data_dir, |dir| PathBuf::from(expand_tilde(dir)))
}
