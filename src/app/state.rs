//! Application state and view model computation.
//!
//! [`AppState`] is the root controller's state: the query being typed, the
//! search lifecycle, the last completed results, both persisted cells (theme
//! index and nominations), list cursors, and the debouncer and gateway that
//! turn keystrokes into requests.
//!
//! # Stale responses
//!
//! Every debounced submission takes a fresh sequence number, including empty
//! submissions that never reach the network. A response is applied only if it
//! carries the latest number, so an old request that arrives late can never
//! overwrite newer results or resurrect results for a cleared query.
//!
//! # Web access
//!
//! Requests are routed through [`AppState::route_request`]. Until the host
//! answers the permission request the newest one is held back; a denial turns
//! held and later requests into `Network request failed` errors, applied like
//! any other failed exchange.
//!
//! # Example
//!
//! ```rust
//! use shoppies::app::AppState;
//! use shoppies::storage::MemoryStore;
//! use shoppies::Config;
//!
//! let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
//! state.change_query("batman".to_string());
//! let request = state.on_debounce_elapsed();
//! assert!(request.is_some());
//! let viewmodel = state.compute_viewmodel(30, 100);
//! ```

use super::modes::{Focus, SearchStatus, WebAccess};
use crate::domain::{Movie, NominationList, SearchResult, MAX_NOMINATIONS};
use crate::search::{Debouncer, SearchGateway, SearchRequest};
use crate::storage::{KeyValueStore, PersistedCell, NOMINATIONS_KEY, THEME_KEY};
use crate::ui::theme::{next_theme_index, Theme, ThemeIndex, ThemeRegistry};
use crate::ui::viewmodel::{
    BannerInfo, DisplayItem, FooterInfo, HeaderInfo, ItemControl, NominationsSection,
    ResultsSection, SearchBarInfo, UIViewModel,
};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Rows used by everything except the result rows.
///
/// Blank line, header, border, search box (3), error line, results title,
/// border, nominations title, nomination rows, banner, border, footer.
pub const CHROME_ROWS: usize = 13 + MAX_NOMINATIONS;

/// Title shown in the header.
pub const APP_TITLE: &str = "The Shoppies";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Query text as typed; updated on every keystroke.
    pub query: String,

    pub focus: Focus,

    pub status: SearchStatus,

    /// Last completed search, replaced wholesale.
    pub results: SearchResult,

    /// Cursor within `results.movies`.
    pub result_cursor: usize,

    /// Cursor within the nomination list.
    pub nomination_cursor: usize,

    pub nominations: PersistedCell<NominationList>,

    /// Raw stored theme index; may be out of range if storage was edited.
    pub theme_index: PersistedCell<ThemeIndex>,

    pub themes: ThemeRegistry,

    pub web_access: WebAccess,

    /// Newest request submitted while web access was pending.
    queued_request: Option<SearchRequest>,

    gateway: SearchGateway,

    debouncer: Debouncer<String>,

    /// Sequence number of the latest submission.
    latest_sequence: u64,
}

impl AppState {
    /// Creates state from its parts.
    #[must_use]
    pub fn new(
        gateway: SearchGateway,
        debounce: Duration,
        nominations: PersistedCell<NominationList>,
        theme_index: PersistedCell<ThemeIndex>,
    ) -> Self {
        Self {
            query: String::new(),
            focus: Focus::Search,
            status: SearchStatus::Idle,
            results: SearchResult::default(),
            result_cursor: 0,
            nomination_cursor: 0,
            nominations,
            theme_index,
            themes: ThemeRegistry::load(),
            web_access: WebAccess::Pending,
            queued_request: None,
            gateway,
            debouncer: Debouncer::new(debounce),
            latest_sequence: 0,
        }
    }

    /// Creates state from configuration, loading both cells from `store`.
    pub fn with_store<S>(config: &Config, store: &S) -> Self
    where
        S: KeyValueStore + Clone + 'static,
    {
        let nominations =
            PersistedCell::load(NOMINATIONS_KEY, NominationList::new(), Box::new(store.clone()));
        let theme_index = PersistedCell::load(THEME_KEY, ThemeIndex::default(), Box::new(store.clone()));

        Self::new(
            SearchGateway::new(config.base_url.clone(), config.api_key.clone()),
            config.debounce,
            nominations,
            theme_index,
        )
    }

    /// Active palette.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.resolve(self.theme_index.get().0)
    }

    /// Whether the nomination cap has been reached.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.nominations.get().is_full()
    }

    /// Updates the query immediately and schedules a debounced submission.
    ///
    /// Returns the delay of the timer the caller must schedule.
    pub fn change_query(&mut self, value: String) -> Duration {
        self.query.clone_from(&value);
        self.debouncer.call(value)
    }

    /// Handles one elapsed debounce timer.
    ///
    /// When the quiet period is over, submits the latest query and returns the
    /// request to send, or `None` if nothing needs the network.
    pub fn on_debounce_elapsed(&mut self) -> Option<SearchRequest> {
        let query = self.debouncer.tick()?;
        self.submit_query(&query)
    }

    /// Whether more debounce timers are still outstanding.
    #[must_use]
    pub fn is_debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Submits `query`, moving to `Idle` (empty) or `Loading`.
    pub fn submit_query(&mut self, query: &str) -> Option<SearchRequest> {
        self.latest_sequence += 1;
        let sequence = self.latest_sequence;

        match self.gateway.request(query, sequence) {
            None => {
                tracing::debug!(sequence = sequence, "empty query, clearing results");
                self.status = SearchStatus::Idle;
                self.queued_request = None;
                self.replace_results(SearchResult::empty(""));
                None
            }
            Some(request) => {
                tracing::debug!(sequence = sequence, query = %query, "submitting search");
                self.status = SearchStatus::Loading;
                Some(request)
            }
        }
    }

    /// Applies a completed HTTP exchange.
    ///
    /// Returns `false` (and changes nothing) when the response belongs to an
    /// older submission.
    pub fn apply_response(&mut self, sequence: u64, query: &str, status: u16, body: &[u8]) -> bool {
        if sequence != self.latest_sequence {
            tracing::debug!(
                sequence = sequence,
                latest = self.latest_sequence,
                "discarding stale search response"
            );
            return false;
        }

        match SearchGateway::parse_response(query, status, body) {
            Ok(results) => {
                tracing::debug!(count = results.movies.len(), total = results.total, "search succeeded");
                self.status = SearchStatus::Ready;
                self.replace_results(results);
            }
            Err(error) => {
                tracing::debug!(error = %error, "search failed");
                self.status = SearchStatus::Failed(error);
                self.replace_results(SearchResult::empty(query));
            }
        }
        true
    }

    /// Decides what happens to a submitted request.
    ///
    /// # Returns
    ///
    /// The request when it may be sent now. `None` when it was held back
    /// because web access is still pending, or when access was denied; a
    /// denied request is applied at once as a failed exchange with status `0`.
    pub fn route_request(&mut self, request: SearchRequest) -> Option<SearchRequest> {
        match self.web_access {
            WebAccess::Granted => Some(request),
            WebAccess::Pending => {
                tracing::debug!(sequence = request.sequence, "web access pending, queueing request");
                self.queued_request = Some(request);
                None
            }
            WebAccess::Denied => {
                self.fail_unsent(&request);
                None
            }
        }
    }

    /// Records the host's answer to the `WebAccess` permission request.
    ///
    /// Returns the held-back request if access was granted. If it was denied,
    /// the held-back request fails instead.
    pub fn resolve_web_access(&mut self, granted: bool) -> Option<SearchRequest> {
        self.web_access = if granted {
            WebAccess::Granted
        } else {
            WebAccess::Denied
        };
        tracing::debug!(web_access = ?self.web_access, "web access resolved");

        let request = self.queued_request.take()?;
        if granted {
            return Some(request);
        }
        self.fail_unsent(&request);
        None
    }

    fn fail_unsent(&mut self, request: &SearchRequest) {
        tracing::debug!(sequence = request.sequence, "web access denied, failing request");
        self.apply_response(request.sequence, &request.query, 0, &[]);
    }

    fn replace_results(&mut self, results: SearchResult) {
        self.results = results;
        self.result_cursor = 0;
    }

    /// Nominates `movie` if its control is enabled.
    pub fn nominate(&mut self, movie: &Movie) -> bool {
        if !self.nominations.get().can_nominate(movie) {
            tracing::debug!(movie_id = %movie.id, "nominate control disabled");
            return false;
        }
        let added = self.nominations.update(|list| list.nominate(movie.clone()));
        tracing::debug!(movie_id = %movie.id, count = self.nominations.get().len(), "movie nominated");
        added
    }

    /// Removes the nomination with `id`; a no-op if absent.
    pub fn remove_nomination(&mut self, id: &str) -> bool {
        if !self.nominations.get().contains(id) {
            return false;
        }
        self.nominations.update(|list| list.remove(id));
        self.clamp_nomination_cursor();
        true
    }

    /// Removes every nomination. Returns `false` if the list was already empty.
    pub fn clear_nominations(&mut self) -> bool {
        if self.nominations.get().is_empty() {
            return false;
        }
        self.nominations.update(NominationList::clear);
        self.nomination_cursor = 0;
        true
    }

    /// Advances to the next theme in the cycle.
    pub fn cycle_theme(&mut self) {
        let next = next_theme_index(self.theme_index.get().0);
        self.theme_index.set(ThemeIndex(next));
        tracing::debug!(theme = %self.theme().name, index = next, "theme changed");
    }

    /// Result rows that can be seen and acted on.
    ///
    /// Empty while a search is loading: the previous rows belong to an older
    /// query and the loading indicator replaces them.
    #[must_use]
    pub fn visible_results(&self) -> &[Movie] {
        if self.status.is_loading() {
            &[]
        } else {
            &self.results.movies
        }
    }

    #[must_use]
    pub fn selected_result(&self) -> Option<&Movie> {
        self.visible_results().get(self.result_cursor)
    }

    #[must_use]
    pub fn selected_nomination(&self) -> Option<&Movie> {
        self.nominations.get().get(self.nomination_cursor)
    }

    /// Moves the cursor of the focused list down, wrapping at the end.
    pub fn move_selection_down(&mut self) {
        let (cursor, len) = self.focused_cursor();
        if let Some(cursor) = cursor {
            if len > 0 {
                *cursor = (*cursor + 1) % len;
            }
        }
    }

    /// Moves the cursor of the focused list up, wrapping at the start.
    pub fn move_selection_up(&mut self) {
        let (cursor, len) = self.focused_cursor();
        if let Some(cursor) = cursor {
            if len > 0 {
                *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
            }
        }
    }

    fn focused_cursor(&mut self) -> (Option<&mut usize>, usize) {
        match self.focus {
            Focus::Search => (None, 0),
            Focus::Results => {
                let len = self.visible_results().len();
                (Some(&mut self.result_cursor), len)
            }
            Focus::Nominations => {
                let len = self.nominations.get().len();
                (Some(&mut self.nomination_cursor), len)
            }
        }
    }

    fn clamp_nomination_cursor(&mut self) {
        let len = self.nominations.get().len();
        self.nomination_cursor = self.nomination_cursor.min(len.saturating_sub(1));
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height; result rows get whatever the chrome leaves
    /// * `cols` - Pane width; titles are truncated to fit
    ///
    /// # Returns
    ///
    /// Every string the renderer prints, with selection, control state and
    /// match highlights already decided.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let done = self.is_done();

        UIViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
                theme_label: self.theme().label.clone(),
            },
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                is_focused: self.focus == Focus::Search,
                can_clear: !self.query.is_empty(),
                error: self.status.error().map(|e| format!("Error: {e}")),
            },
            results: self.compute_results_section(rows.saturating_sub(CHROME_ROWS), cols),
            nominations: self.compute_nominations_section(cols),
            banner: done.then(|| BannerInfo {
                message: format!("Limit of {MAX_NOMINATIONS} nominations reached."),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_results_section(&self, available_rows: usize, cols: usize) -> ResultsSection {
        let title = if self.results.is_empty() {
            "Results".to_string()
        } else {
            format!("Results for \"{}\"", self.results.query)
        };
        let total_label = if self.results.total == 0 {
            "– total results".to_string()
        } else {
            format!("{} total results", self.results.total)
        };

        let movies = self.visible_results();
        let (start, end) = visible_window(self.result_cursor, movies.len(), available_rows);

        let matcher = (!self.results.query.is_empty()).then(SkimMatcherV2::default);
        let nominations = self.nominations.get();

        let items = movies[start..end]
            .iter()
            .enumerate()
            .map(|(offset, movie)| {
                let mut item = compute_display_item(
                    movie,
                    self.focus == Focus::Results && start + offset == self.result_cursor,
                    cols,
                    ItemControl {
                        label: "Nominate",
                        enabled: nominations.can_nominate(movie),
                    },
                );
                if let Some(matcher) = &matcher {
                    item.highlight_ranges = highlight_ranges(&item.title, &self.results.query, matcher);
                }
                item
            })
            .collect();

        ResultsSection {
            title,
            total_label,
            is_loading: self.status.is_loading(),
            is_focused: self.focus == Focus::Results,
            items,
        }
    }

    fn compute_nominations_section(&self, cols: usize) -> NominationsSection {
        let nominations = self.nominations.get();
        let items = nominations
            .iter()
            .enumerate()
            .map(|(index, movie)| {
                compute_display_item(
                    movie,
                    self.focus == Focus::Nominations && index == self.nomination_cursor,
                    cols,
                    ItemControl {
                        label: "Remove",
                        enabled: true,
                    },
                )
            })
            .collect();

        NominationsSection {
            title: format!("Nominations ({}/{MAX_NOMINATIONS})", nominations.len()),
            is_focused: self.focus == Focus::Nominations,
            can_remove_all: !nominations.is_empty(),
            items,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Search => "Type to search  Esc: clear  Tab/Enter: results  Ctrl+t: theme",
            Focus::Results => {
                "j/k: navigate  Enter: nominate  Tab: nominations  /: search  t: theme  q: quit"
            }
            Focus::Nominations => {
                "j/k: navigate  Enter/d: remove  D: remove all  Tab: search  t: theme  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Range `[start, end)` of a list of `len` rows to show in `available` rows,
/// keeping `cursor` roughly centred.
fn visible_window(cursor: usize, len: usize, available: usize) -> (usize, usize) {
    if len <= available {
        return (0, len);
    }
    let start = cursor
        .saturating_sub(available / 2)
        .min(len - available);
    (start, start + available)
}

/// Width reserved on a row for the marker, year and control.
const ITEM_CHROME_COLS: usize = 28;

fn compute_display_item(movie: &Movie, is_selected: bool, cols: usize, control: ItemControl) -> DisplayItem {
    let max_title = cols.saturating_sub(ITEM_CHROME_COLS).max(8);
    let detail = if movie.poster.is_missing() {
        format!("{} · no poster", movie.imdb_url())
    } else {
        movie.imdb_url()
    };

    DisplayItem {
        title: truncate(&movie.title, max_title),
        year: movie.year.clone(),
        detail,
        is_selected,
        control,
        highlight_ranges: Vec::new(),
    }
}

/// Truncates to `max` characters, ending in `...` when shortened.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Coalesces fuzzy match indices into `(start, end)` character ranges.
fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
