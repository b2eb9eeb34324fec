//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. The plugin shim
//! executes them in order against the Zellij host API, which keeps every state
//! transition testable without a host.
//!
//! # Example
//!
//! ```rust
//! use shoppies::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTimer { delay: Duration::from_millis(500) }];
//! ```

use crate::search::SearchRequest;
use std::time::Duration;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Schedules one host timer; its expiry comes back as
    /// [`Event::DebounceElapsed`](crate::app::Event::DebounceElapsed).
    ScheduleTimer {
        delay: Duration,
    },

    /// Issues an HTTP GET; the outcome comes back as
    /// [`Event::SearchResponded`](crate::app::Event::SearchResponded) carrying
    /// the same sequence number.
    SendSearch(SearchRequest),
}
