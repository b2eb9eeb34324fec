//! Drives the controller through events the way the plugin shim does.

use shoppies::app::{handle_event, Action, AppState, Event, Focus, SearchStatus, WebAccess};
use shoppies::search::SearchRequest;
use shoppies::storage::MemoryStore;
use shoppies::Config;

const BATMAN: &str = r#"{
    "Search": [
        {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Poster": "https://m.media-amazon.com/images/bb.jpg"},
        {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Poster": "N/A"}
    ],
    "totalResults": "2",
    "Response": "True"
}"#;

const NOT_FOUND: &str = r#"{"Response":"False","Error":"Movie not found!"}"#;

/// State as it is once the host has granted web access.
fn new_state() -> AppState {
    let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
    send(&mut state, Event::WebAccessResolved { granted: true });
    state
}

/// Sends one event and returns its actions.
fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

/// Types `text`, then lets every scheduled timer elapse.
///
/// Returns the search requests that were issued.
fn type_and_wait(state: &mut AppState, text: &str) -> Vec<SearchRequest> {
    let mut timers = 0;
    for c in text.chars() {
        for action in send(state, Event::Char(c)) {
            if matches!(action, Action::ScheduleTimer { .. }) {
                timers += 1;
            }
        }
    }
    elapse(state, timers)
}

fn elapse(state: &mut AppState, timers: usize) -> Vec<SearchRequest> {
    (0..timers)
        .flat_map(|_| send(state, Event::DebounceElapsed))
        .filter_map(|action| match action {
            Action::SendSearch(request) => Some(request),
            _ => None,
        })
        .collect()
}

fn respond(state: &mut AppState, request: &SearchRequest, status: u16, body: &str) {
    send(
        state,
        Event::SearchResponded {
            sequence: request.sequence,
            query: request.query.clone(),
            status,
            body: body.as_bytes().to_vec(),
        },
    );
}

#[test]
fn edits_within_interval_collapse_into_one_request() {
    let mut state = new_state();

    let requests = type_and_wait(&mut state, "batman");

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "batman");
    assert!(requests[0].url.ends_with("&s=batman"));
    assert_eq!(state.status, SearchStatus::Loading);
}

#[test]
fn empty_query_clears_results_without_a_request() {
    let mut state = new_state();
    let requests = type_and_wait(&mut state, "batman");
    respond(&mut state, &requests[0], 200, BATMAN);

    let actions = send(&mut state, Event::ClearQuery);
    assert_eq!(actions.len(), 1);
    let requests = elapse(&mut state, 1);

    assert!(requests.is_empty());
    assert_eq!(state.status, SearchStatus::Idle);
    assert!(state.results.movies.is_empty());

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.results.title, "Results");
    assert_eq!(vm.results.total_label, "– total results");
    assert!(!vm.search_bar.can_clear);
}

#[test]
fn backspacing_to_empty_sends_nothing() {
    let mut state = new_state();
    send(&mut state, Event::Char('a'));
    send(&mut state, Event::Backspace);

    assert!(elapse(&mut state, 2).is_empty());
    assert_eq!(state.status, SearchStatus::Idle);
}

#[test]
fn batman_shows_two_results() {
    let mut state = new_state();
    let requests = type_and_wait(&mut state, "batman");
    assert!(state.compute_viewmodel(30, 100).results.is_loading);

    respond(&mut state, &requests[0], 200, BATMAN);

    assert_eq!(state.status, SearchStatus::Ready);
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.results.title, "Results for \"batman\"");
    assert_eq!(vm.results.total_label, "2 total results");
    assert!(!vm.results.is_loading);
    assert_eq!(vm.results.items.len(), 2);
    assert_eq!(vm.results.items[0].title, "Batman Begins");
    assert_eq!(vm.results.items[0].year, "2005");
    assert!(vm.results.items[0].control.enabled);
    assert!(vm.results.items[1].detail.ends_with("no poster"));
    assert_eq!(vm.search_bar.error, None);
}

#[test]
fn not_found_shows_error_and_empty_list() {
    let mut state = new_state();
    let requests = type_and_wait(&mut state, "zzzznotfound");
    respond(&mut state, &requests[0], 200, NOT_FOUND);

    assert!(matches!(state.status, SearchStatus::Failed(_)));
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.search_bar.error.as_deref(), Some("Error: Movie not found!"));
    assert!(vm.results.items.is_empty());
}

#[test]
fn http_failure_shows_status_text() {
    let mut state = new_state();
    let requests = type_and_wait(&mut state, "batman");
    respond(&mut state, &requests[0], 503, "");

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.search_bar.error.as_deref(), Some("Error: Service Unavailable"));
}

#[test]
fn error_is_replaced_by_next_success() {
    let mut state = new_state();
    let requests = type_and_wait(&mut state, "zzzz");
    respond(&mut state, &requests[0], 200, NOT_FOUND);

    send(&mut state, Event::ClearQuery);
    elapse(&mut state, 1);
    let requests = type_and_wait(&mut state, "batman");
    respond(&mut state, &requests[0], 200, BATMAN);

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.search_bar.error, None);
    assert_eq!(vm.results.items.len(), 2);
}

#[test]
fn stale_response_never_replaces_newer_results() {
    let mut state = new_state();
    let first = type_and_wait(&mut state, "bat").remove(0);
    let second = type_and_wait(&mut state, "man").remove(0);
    assert_eq!(second.query, "batman");
    assert!(second.sequence > first.sequence);

    respond(&mut state, &second, 200, BATMAN);
    respond(&mut state, &first, 200, NOT_FOUND);

    assert_eq!(state.status, SearchStatus::Ready);
    assert_eq!(state.results.query, "batman");
    assert_eq!(state.results.movies.len(), 2);
}

#[test]
fn late_response_after_clearing_is_discarded() {
    let mut state = new_state();
    let request = type_and_wait(&mut state, "batman").remove(0);

    send(&mut state, Event::ClearQuery);
    elapse(&mut state, 1);
    respond(&mut state, &request, 200, BATMAN);

    assert_eq!(state.status, SearchStatus::Idle);
    assert!(state.results.movies.is_empty());
}

#[test]
fn result_titles_highlight_the_query() {
    let mut state = new_state();
    let request = type_and_wait(&mut state, "batman").remove(0);
    respond(&mut state, &request, 200, BATMAN);

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.results.items[0].highlight_ranges, vec![(0, 6)]);
}

#[test]
fn results_window_follows_cursor() {
    let body = format!(
        r#"{{"Response":"True","totalResults":"57","Search":[{}]}}"#,
        (0..10)
            .map(|i| format!(r#"{{"Title":"Movie {i}","Year":"2000","imdbID":"tt{i}","Poster":"N/A"}}"#))
            .collect::<Vec<_>>()
            .join(",")
    );
    let mut state = new_state();
    let request = type_and_wait(&mut state, "movie").remove(0);
    respond(&mut state, &request, 200, &body);

    send(&mut state, Event::FocusResults);
    for _ in 0..9 {
        send(&mut state, Event::KeyDown);
    }

    // 22 rows leave room for four results.
    let vm = state.compute_viewmodel(22, 100);
    assert_eq!(vm.results.total_label, "57 total results");
    assert_eq!(vm.results.items.len(), 4);
    assert_eq!(vm.results.items[3].title, "Movie 9");
    assert!(vm.results.items[3].is_selected);
}

#[test]
fn typing_is_ignored_while_a_list_has_focus() {
    let mut state = new_state();
    send(&mut state, Event::FocusNext);
    assert_eq!(state.focus, Focus::Results);

    assert!(send(&mut state, Event::Char('j')).is_empty());
    assert!(state.query.is_empty());
}

#[test]
fn previous_results_are_hidden_while_loading() {
    let mut state = new_state();
    let request = type_and_wait(&mut state, "batman").remove(0);
    respond(&mut state, &request, 200, BATMAN);

    type_and_wait(&mut state, "x");
    assert_eq!(state.status, SearchStatus::Loading);

    let vm = state.compute_viewmodel(30, 100);
    assert!(vm.results.is_loading);
    assert!(vm.results.items.is_empty());

    send(&mut state, Event::FocusResults);
    send(&mut state, Event::Activate);
    assert!(state.selected_result().is_none());
    assert!(state.nominations.get().is_empty());
}

#[test]
fn search_waits_for_web_access_then_sends() {
    let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
    assert_eq!(state.web_access, WebAccess::Pending);

    assert!(type_and_wait(&mut state, "batman").is_empty());
    assert_eq!(state.status, SearchStatus::Loading);

    let sent: Vec<_> = send(&mut state, Event::WebAccessResolved { granted: true })
        .into_iter()
        .filter_map(|action| match action {
            Action::SendSearch(request) => Some(request),
            _ => None,
        })
        .collect();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query, "batman");

    respond(&mut state, &sent[0], 200, BATMAN);
    assert_eq!(state.results.movies.len(), 2);
}

#[test]
fn denied_web_access_fails_searches_as_network_errors() {
    let mut state = AppState::with_store(&Config::default(), &MemoryStore::new());
    type_and_wait(&mut state, "batman");

    assert!(send(&mut state, Event::WebAccessResolved { granted: false }).is_empty());
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.search_bar.error.as_deref(), Some("Error: Network request failed"));
    assert!(!vm.results.is_loading);

    assert!(type_and_wait(&mut state, "robin").is_empty());
    assert!(matches!(state.status, SearchStatus::Failed(_)));
}
