//! End-to-end search flows through the public API: events in, actions and
//! view models out.

use breed_search::app::{Direction, Focus, SearchState};
use breed_search::client::SearchRequest;
use breed_search::domain::{MISSING_FIELD, NO_RESULTS_MESSAGE};
use breed_search::ui::StatusKind;
use breed_search::{handle_event, initialize, Action, AppState, Config, Event};
use std::collections::BTreeMap;

fn ready_state(config: &Config) -> AppState {
    let mut state = initialize(config);
    handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    state
}

fn search(state: &mut AppState, query: &str) -> Vec<Action> {
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::Submit).unwrap().1
}

fn fetched(actions: &[Action]) -> &SearchRequest {
    actions
        .iter()
        .find_map(|action| match action {
            Action::FetchResults(request) => Some(request),
            _ => None,
        })
        .expect("a fetch action")
}

fn deliver(
    state: &mut AppState,
    request: &SearchRequest,
    status: u16,
    headers: BTreeMap<String, String>,
    body: &str,
) -> bool {
    let seq = SearchRequest::sequence_from_context(&request.context).expect("sequence in context");
    handle_event(
        state,
        &Event::SearchCompleted {
            seq,
            status,
            headers,
            body: body.as_bytes().to_vec(),
        },
    )
    .unwrap()
    .0
}

fn complete(state: &mut AppState, request: &SearchRequest, status: u16, body: &str) -> bool {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    deliver(state, request, status, headers, body)
}

#[test]
fn blank_query_makes_no_network_call() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "  ");
    assert!(actions.is_empty());
    assert_eq!(state.search.state(), &SearchState::Idle);
}

#[test]
fn pug_search_renders_one_card() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "pug");
    let request = fetched(&actions).clone();
    assert_eq!(request.url, "http://127.0.0.1:8000/search?q=pug");
    assert_eq!(
        state.compute_viewmodel(24, 80).status.kind,
        StatusKind::Loading
    );

    let body = r#"[{"id":1,"name":"Pug","temperament":"Stubborn"}]"#;
    assert!(complete(&mut state, &request, 200, body));

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.cards.len(), 1);
    assert_eq!(vm.cards[0].name, "Pug");
    assert_eq!(vm.cards[0].temperament, "Stubborn");
    assert!(vm.modal.is_none());
}

#[test]
fn not_found_shows_exact_message() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "unicorn");
    let request = fetched(&actions).clone();
    complete(&mut state, &request, 404, r#"{"detail":"Not Found"}"#);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.status.kind, StatusKind::Error);
    assert_eq!(vm.status.text, NO_RESULTS_MESSAGE);
    assert!(vm.cards.is_empty());
}

#[test]
fn connection_failure_shows_transport_error_text() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "pug");
    let request = fetched(&actions).clone();
    let text = "error sending request: Connection refused (os error 111)";
    assert!(deliver(&mut state, &request, 400, BTreeMap::new(), text));

    assert_eq!(state.search.error_message(), Some(text));
    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.status.kind, StatusKind::Error);
    assert_eq!(vm.status.text, text);
}

#[test]
fn served_bad_request_shows_no_results() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "pug");
    let request = fetched(&actions).clone();
    complete(&mut state, &request, 400, r#"{"detail":"bad query"}"#);

    assert_eq!(state.search.error_message(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn resubmit_after_results_drops_them_while_loading() {
    let mut state = ready_state(&Config::default());
    let request = fetched(&search(&mut state, "pug")).clone();
    complete(&mut state, &request, 200, r#"[{"id":1,"name":"Pug"}]"#);
    assert_eq!(state.search.results().map(<[_]>::len), Some(1));

    let actions = handle_event(&mut state, &Event::Submit).unwrap().1;
    fetched(&actions);
    assert!(state.search.is_loading());
    assert!(state.search.results().is_none());
    assert!(state.compute_viewmodel(24, 80).cards.is_empty());
}

#[test]
fn malformed_body_shows_decoder_message() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "pug");
    let request = fetched(&actions).clone();
    complete(&mut state, &request, 200, "<html>");

    let message = state.search.error_message().unwrap();
    assert_ne!(message, NO_RESULTS_MESSAGE);
    assert!(!message.is_empty());
}

#[test]
fn empty_array_is_success_without_cards() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "zzz");
    let request = fetched(&actions).clone();
    complete(&mut state, &request, 200, "[]");

    assert_eq!(state.search.results().map(<[_]>::len), Some(0));
    assert!(state.search.error_message().is_none());
    assert!(state.compute_viewmodel(24, 80).cards.is_empty());
}

#[test]
fn missing_optional_fields_render_placeholder() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "akita");
    let request = fetched(&actions).clone();
    complete(&mut state, &request, 200, r#"[{"id":"akita","name":"Akita"}]"#);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.cards[0].temperament, MISSING_FIELD);

    handle_event(&mut state, &Event::FocusResults).unwrap();
    handle_event(&mut state, &Event::SelectCursor).unwrap();
    let modal = state.compute_viewmodel(30, 100).modal.unwrap();
    let description = modal
        .lines
        .iter()
        .find(|line| line.label == "Description")
        .unwrap();
    assert_eq!(description.text, MISSING_FIELD);
}

#[test]
fn select_then_dismiss_keeps_results() {
    let mut state = ready_state(&Config::default());
    let actions = search(&mut state, "pug");
    let request = fetched(&actions).clone();
    let body = r#"[{"id":1,"name":"Pug"},{"id":2,"name":"Puggle"},{"id":3,"name":"Pumi"}]"#;
    complete(&mut state, &request, 200, body);

    handle_event(&mut state, &Event::FocusResults).unwrap();
    assert_eq!(state.focus, Focus::Results);
    handle_event(&mut state, &Event::Move(Direction::Right)).unwrap();
    handle_event(&mut state, &Event::SelectCursor).unwrap();
    assert_eq!(
        state.search.selection().map(|item| item.name.as_str()),
        Some("Puggle")
    );

    let before = state.search.state().clone();
    handle_event(&mut state, &Event::Dismiss).unwrap();
    assert!(state.search.selection().is_none());
    assert_eq!(state.search.state(), &before);
    assert_eq!(state.compute_viewmodel(24, 80).cards.len(), 3);
}

#[test]
fn overlapping_searches_keep_latest_by_default() {
    let mut state = ready_state(&Config::default());
    let first = fetched(&search(&mut state, "pu")).clone();
    let second = fetched(&search(&mut state, "g")).clone();

    complete(&mut state, &second, 200, r#"[{"id":1,"name":"Pug"}]"#);
    assert!(!complete(&mut state, &first, 404, ""));
    assert_eq!(state.search.results().map(<[_]>::len), Some(1));
}

#[test]
fn accept_ordering_lets_slow_response_win() {
    let mut map = BTreeMap::new();
    map.insert("stale_responses".to_string(), "accept".to_string());
    let mut state = ready_state(&Config::from_zellij(&map));
    let first = fetched(&search(&mut state, "pu")).clone();
    let second = fetched(&search(&mut state, "g")).clone();

    complete(&mut state, &second, 200, r#"[{"id":1,"name":"Pug"}]"#);
    assert!(complete(&mut state, &first, 404, ""));
    assert_eq!(state.search.error_message(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn late_results_are_labelled_with_their_own_query() {
    let mut map = BTreeMap::new();
    map.insert("stale_responses".to_string(), "accept".to_string());
    let mut state = ready_state(&Config::from_zellij(&map));
    let first = fetched(&search(&mut state, "pu")).clone();
    let second = fetched(&search(&mut state, "g")).clone();

    complete(&mut state, &second, 200, r#"[{"id":1,"name":"Pug"}]"#);
    handle_event(&mut state, &Event::Char('x')).unwrap();
    complete(&mut state, &first, 200, r#"[{"id":2,"name":"Pumi"}]"#);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.cards[0].name, "Pumi");
    assert!(vm.status.text.contains("“pu”"), "{}", vm.status.text);
}

#[test]
fn configured_timeout_schedules_a_timer() {
    let mut map = BTreeMap::new();
    map.insert("request_timeout".to_string(), "12".to_string());
    let mut state = ready_state(&Config::from_zellij(&map));

    let actions = search(&mut state, "pug");
    assert!(actions.contains(&Action::ScheduleTimeout { seconds: 12 }));

    // The timer firing before the deadline leaves the search running.
    let (render, _) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(!render);
    assert!(state.search.is_loading());
}

#[test]
fn search_before_permission_fails() {
    let mut state = initialize(&Config::default());
    let actions = search(&mut state, "pug");
    assert!(actions.is_empty());
    assert_eq!(
        state.compute_viewmodel(24, 80).status.kind,
        StatusKind::Error
    );
}
