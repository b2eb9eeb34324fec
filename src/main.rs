//! Zellij plugin wrapper and entry point.
//!
//! This is the thin layer between the library and the Zellij host. It maps
//! host events to [`Event`]s, runs them through [`handle_event`], and turns
//! the returned [`Action`]s into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, restore persisted state
//! 2. **Permissions**: Request `WebAccess` for search requests
//! 3. **Subscribe**: `Key`, `Timer`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → intent events, depending on focus
//! - `Timer` → `Event::DebounceElapsed` (only debounce timers are scheduled)
//! - `WebRequestResult` → `Event::SearchResponded`, with the sequence number
//!   and query carried through the request context
//! - `PermissionRequestResult` → `Event::WebAccessResolved`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+t`: Cycle theme
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Tab` / `Shift+Tab`: Cycle focus
//!
//! Search box:
//! - Characters: Type into the query
//! - `Backspace`: Delete last character
//! - `Esc`: Clear the query
//! - `Enter` / `Down`: Focus results
//!
//! Results and nominations:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Nominate (results) or remove (nominations)
//! - `d`: Remove selected nomination
//! - `D`: Remove all nominations
//! - `/` / `Esc`: Back to the search box
//! - `t`: Cycle theme
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use shoppies::search::SearchRequest;
use shoppies::storage::MemoryStore;
use shoppies::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

/// Request context key carrying the sequence number.
const CONTEXT_SEQUENCE: &str = "sequence";

/// Request context key carrying the query text.
const CONTEXT_QUERY: &str = "query";

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: shoppies::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: shoppies::initialize_with_store(&Config::default(), &MemoryStore::new()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        shoppies::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            base_url = %config.base_url,
            has_api_key = config.api_key.is_some(),
            debounce_ms = config.debounce.as_millis() as u64,
            "parsed configuration"
        );
        self.app = shoppies::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_result(permissions)
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        shoppies::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('t') => Some(Event::CycleTheme),
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }
        if key.bare_key == BareKey::Tab {
            return Some(if key.has_modifiers(&[KeyModifier::Shift]) {
                Event::FocusPrev
            } else {
                Event::FocusNext
            });
        }

        if self.app.focus == Focus::Search {
            return Some(match key.bare_key {
                BareKey::Enter | BareKey::Down => Event::FocusResults,
                BareKey::Esc => Event::ClearQuery,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Activate,
            BareKey::Char('d') => Event::RemoveSelected,
            BareKey::Char('D') => Event::RemoveAll,
            BareKey::Char('/') | BareKey::Esc => Event::FocusSearch,
            BareKey::Char('t') => Event::CycleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a completed web request back to the search that issued it.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(sequence) = context
            .get(CONTEXT_SEQUENCE)
            .and_then(|s| s.parse::<u64>().ok())
        else {
            tracing::debug!("web request result without a sequence number, ignoring");
            return None;
        };

        tracing::debug!(status = status, sequence = sequence, body_len = body.len(), "web request result");
        Some(Event::SearchResponded {
            sequence,
            query: context.get(CONTEXT_QUERY).cloned().unwrap_or_default(),
            status,
            body,
        })
    }

    fn map_permission_result(permissions: PermissionStatus) -> Event {
        let granted = matches!(permissions, PermissionStatus::Granted);
        if granted {
            tracing::debug!("web access granted");
        } else {
            tracing::warn!("web access denied - searches will fail");
        }
        Event::WebAccessResolved { granted }
    }

    fn send_request(request: &SearchRequest) {
        tracing::debug!(sequence = request.sequence, url = %request.url, "sending search request");
        let context = BTreeMap::from([
            (CONTEXT_SEQUENCE.to_string(), request.sequence.to_string()),
            (CONTEXT_QUERY.to_string(), request.query.clone()),
        ]);
        web_request(&request.url, HttpVerb::Get, BTreeMap::new(), vec![], context);
    }

    /// Executes an action against the host API.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer { delay } => set_timeout(delay.as_secs_f64()),
            Action::SendSearch(request) => Self::send_request(&request),
        }
    }
}
