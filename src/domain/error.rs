//! Error types for the Shoppies plugin.
//!
//! [`ShoppiesError`] covers everything that can fail inside the plugin, with a
//! crate-wide [`Result`] alias. [`SearchError`] is the narrower, user-facing
//! failure of a movie search; its `Display` output is exactly the message shown
//! under the search box.

use thiserror::Error;

/// A failed movie search.
///
/// All three kinds are recoverable: the result list is cleared, the message is
/// shown to the user, and nothing is retried until the query changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The HTTP layer failed or returned a non-success status.
    ///
    /// Carries the status text (e.g. `"Service Unavailable"`).
    #[error("{0}")]
    Network(String),

    /// The upstream answered `Response: "False"`.
    ///
    /// Carries the upstream message verbatim (e.g. `"Movie not found!"`).
    #[error("{0}")]
    Query(String),

    /// The response body did not match the expected schema.
    #[error("Invalid response: {0}")]
    Validation(String),
}

/// The main error type for Shoppies operations.
#[derive(Debug, Error)]
pub enum ShoppiesError {
    /// Reading from or writing to a key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A built-in theme could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Shoppies operations.
pub type Result<T> = std::result::Result<T, ShoppiesError>;
