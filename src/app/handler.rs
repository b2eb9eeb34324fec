//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that can change
//! the application: keys already mapped to intents by the plugin shim, expired
//! debounce timers, and completed HTTP exchanges. It mutates [`AppState`] and
//! returns whether a re-render is needed together with the side effects the
//! shim must run.
//!
//! # Example
//!
//! ```rust
//! use shoppies::app::{handle_event, Action, AppState, Event};
//! use shoppies::storage::MemoryStore;
//! use shoppies::Config;
//!
//! let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
//! handle_event(&mut state, &Event::WebAccessResolved { granted: true })?;
//! let (render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::ScheduleTimer { .. }));
//! # Ok::<(), shoppies::domain::ShoppiesError>(())
//! ```

use crate::app::modes::Focus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Intents produced by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query (search focus only).
    Char(char),
    /// Removes the last character of the query (search focus only).
    Backspace,
    /// Empties the query, like the clear control of the search box.
    ClearQuery,

    FocusNext,
    FocusPrev,
    /// Moves focus back to the search box.
    FocusSearch,
    /// Moves focus from the search box to the results.
    FocusResults,

    /// Moves the cursor of the focused list down (wraps to top).
    KeyDown,
    /// Moves the cursor of the focused list up (wraps to bottom).
    KeyUp,

    /// Presses the control of the selected row: nominate in results, remove
    /// in nominations.
    Activate,
    /// Removes the selected nomination.
    RemoveSelected,
    /// Removes every nomination.
    RemoveAll,

    CycleTheme,

    /// Hides the plugin pane.
    CloseFocus,

    /// One scheduled debounce timer expired.
    DebounceElapsed,

    /// The host answered the `WebAccess` permission request.
    WebAccessResolved { granted: bool },

    /// An HTTP exchange issued by [`Action::SendSearch`] completed.
    SearchResponded {
        sequence: u64,
        query: String,
        /// HTTP status; `0` when the host could not reach the server.
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Application state to mutate
/// * `event` - Intent mapped from a host event
///
/// # Returns
///
/// `(should_render, actions)`. The boolean is `true` when the view changed.
/// The actions must be executed in order by the plugin shim.
///
/// # Errors
///
/// Reserved for failures that must reach the shim. Search and storage
/// failures are absorbed into state and never returned here.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Char(c) => {
            if state.focus != Focus::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.query.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            Ok(schedule(state, query))
        }
        Event::Backspace => {
            if state.focus != Focus::Search || state.query.is_empty() {
                return Ok((false, vec![]));
            }
            let mut query = state.query.clone();
            query.pop();
            Ok(schedule(state, query))
        }
        Event::ClearQuery => {
            if state.query.is_empty() {
                return Ok((false, vec![]));
            }
            tracing::debug!("clearing query");
            Ok(schedule(state, String::new()))
        }
        Event::FocusNext => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus = state.focus.prev();
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.focus = Focus::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Activate => match state.focus {
            Focus::Search => {
                state.focus = Focus::Results;
                Ok((true, vec![]))
            }
            Focus::Results => {
                let Some(movie) = state.selected_result().cloned() else {
                    tracing::debug!("no result selected");
                    return Ok((false, vec![]));
                };
                Ok((state.nominate(&movie), vec![]))
            }
            Focus::Nominations => Ok((remove_selected(state), vec![])),
        },
        Event::RemoveSelected => {
            if state.focus != Focus::Nominations {
                return Ok((false, vec![]));
            }
            Ok((remove_selected(state), vec![]))
        }
        Event::RemoveAll => {
            let removed = state.clear_nominations();
            if removed {
                tracing::debug!("all nominations removed");
            }
            Ok((removed, vec![]))
        }
        Event::CycleTheme => {
            state.cycle_theme();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::DebounceElapsed => match state.on_debounce_elapsed() {
            Some(request) => {
                let actions = state.route_request(request).map(Action::SendSearch);
                Ok((true, actions.into_iter().collect()))
            }
            // Still waiting for quiet, or an empty query cleared the results.
            None => Ok((!state.is_debounce_pending(), vec![])),
        },
        Event::WebAccessResolved { granted } => {
            let actions = state.resolve_web_access(*granted).map(Action::SendSearch);
            // A denial may have failed a held-back search.
            Ok((!*granted, actions.into_iter().collect()))
        }
        Event::SearchResponded {
            sequence,
            query,
            status,
            body,
        } => Ok((state.apply_response(*sequence, query, *status, body), vec![])),
    }
}

/// Records the new query and asks for one debounce timer.
fn schedule(state: &mut AppState, query: String) -> (bool, Vec<Action>) {
    let delay = state.change_query(query);
    (true, vec![Action::ScheduleTimer { delay }])
}

fn remove_selected(state: &mut AppState) -> bool {
    let Some(id) = state.selected_nomination().map(|movie| movie.id.clone()) else {
        tracing::debug!("no nomination selected");
        return false;
    };
    tracing::debug!(movie_id = %id, "removing nomination");
    state.remove_nomination(&id)
}

/// Event name for span fields, without response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearQuery => "ClearQuery",
        Event::FocusNext => "FocusNext",
        Event::FocusPrev => "FocusPrev",
        Event::FocusSearch => "FocusSearch",
        Event::FocusResults => "FocusResults",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::Activate => "Activate",
        Event::RemoveSelected => "RemoveSelected",
        Event::RemoveAll => "RemoveAll",
        Event::CycleTheme => "CycleTheme",
        Event::CloseFocus => "CloseFocus",
        Event::DebounceElapsed => "DebounceElapsed",
        Event::WebAccessResolved { .. } => "WebAccessResolved",
        Event::SearchResponded { .. } => "SearchResponded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::Config;

    fn state() -> AppState {
        let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
        handle_event(&mut state, &Event::WebAccessResolved { granted: true }).unwrap();
        state
    }

    #[test]
    fn typing_schedules_one_timer_per_key() {
        let mut state = state();
        for c in "bat".chars() {
            let (render, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
            assert!(render);
            assert_eq!(actions.len(), 1);
        }
        assert_eq!(state.query, "bat");
    }

    #[test]
    fn chars_are_ignored_outside_search_focus() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.query.is_empty());
    }

    #[test]
    fn only_last_timer_sends_request() {
        let mut state = state();
        for c in "ab".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, first) = handle_event(&mut state, &Event::DebounceElapsed).unwrap();
        assert!(first.is_empty());
        let (_, second) = handle_event(&mut state, &Event::DebounceElapsed).unwrap();
        match second.as_slice() {
            [Action::SendSearch(request)] => assert_eq!(request.query, "ab"),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn clear_with_empty_query_is_noop() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::ClearQuery).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn activate_in_search_moves_to_results() {
        let mut state = state();
        handle_event(&mut state, &Event::Activate).unwrap();
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn request_waits_for_web_access() {
        let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
        handle_event(&mut state, &Event::Char('a')).unwrap();
        let (_, held) = handle_event(&mut state, &Event::DebounceElapsed).unwrap();
        assert!(held.is_empty());

        let (_, actions) =
            handle_event(&mut state, &Event::WebAccessResolved { granted: true }).unwrap();
        match actions.as_slice() {
            [Action::SendSearch(request)] => assert_eq!(request.query, "a"),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn close_emits_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
