//! Focus and search status state types.
//!
//! # State Machine
//!
//! [`SearchStatus`] tracks the lifecycle of the current query:
//!
//! ```text
//!            debounce fires (empty)
//!   ┌──────────────────────────────────────┐
//!   ▼                                      │
//! Idle ──debounce fires──▶ Loading ──ok──▶ Ready
//!                            │
//!                            └──err──▶ Failed
//! ```
//!
//! Any state moves to `Loading` when a debounced non-empty query fires, and to
//! `Idle` when an empty one does.
//!
//! [`Focus`] decides which keys are typed into the query and which drive the
//! two lists. [`WebAccess`] gates whether a submitted search may be sent.

use crate::domain::SearchError;

/// Which section receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys are typed into the query.
    #[default]
    Search,
    /// j/k move through results, Enter nominates.
    Results,
    /// j/k move through nominations, Enter removes.
    Nominations,
}

impl Focus {
    /// Next section for Tab.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Results => Self::Nominations,
            Self::Nominations => Self::Search,
        }
    }

    /// Previous section for Shift+Tab.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Nominations,
            Self::Results => Self::Search,
            Self::Nominations => Self::Results,
        }
    }
}

/// Lifecycle of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// The query is empty; nothing is shown.
    #[default]
    Idle,
    /// A request for the latest query is outstanding.
    Loading,
    /// The latest search succeeded (possibly with zero movies).
    Ready,
    /// The latest search failed; the result list is empty.
    Failed(SearchError),
}

impl SearchStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error to show under the search box, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&SearchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Whether the host lets the plugin reach the network.
///
/// Starts `Pending` until the host answers the `WebAccess` permission
/// request. While pending, the newest search is held back; once denied, every
/// search fails as a network error without leaving the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebAccess {
    #[default]
    Pending,
    Granted,
    Denied,
}
