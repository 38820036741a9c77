//! Search view controller: the request/response/error/selection state machine.
//!
//! # States
//!
//! ```text
//!            submit (non-blank query)
//!   Idle ─────────────────────────────▶ Loading ──ok──▶ Success
//!    ▲                                    │  ▲            │
//!    │                                    │  └─ submit ───┤
//!  (initial)                            error/timeout     │
//!                                         ▼               │
//!                                       Failed ◀──────────┘ (via Loading)
//! ```
//!
//! The search state is a single tagged [`SearchState`], so "no search yet",
//! "loading", "results shown" and "error shown" cannot overlap. Selection is
//! held separately as an index into the current results and is cleared
//! whenever those results are replaced.
//!
//! Every submit allocates a sequence number. Under
//! [`ResponseOrdering::LatestOnly`] a completion is applied only if it
//! carries the sequence number of the request currently loading.

use super::policy::{ResponseOrdering, TimeoutPolicy};
use crate::client::{SearchClient, SearchRequest};
use crate::domain::{ResultItem, SearchError};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// The search side of the view, exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search has been submitted yet.
    Idle,
    /// A request is in flight.
    Loading {
        seq: u64,
        /// Query text as submitted.
        query: String,
        started_at: DateTime<Utc>,
    },
    /// The service returned a well-formed result array, possibly empty.
    Success {
        query: String,
        results: Vec<ResultItem>,
    },
    /// The search ended with an error message for the user.
    Failed { message: String },
}

/// Whether a completion changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The completion belonged to a superseded or expired request.
    Stale,
}

/// Owns query text, search state, selection and the request counter.
#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    state: SearchState,
    selection: Option<usize>,
    last_seq: u64,
    /// Query text of every request still awaiting its response, by sequence.
    in_flight: BTreeMap<u64, String>,
    client: SearchClient,
    timeout: TimeoutPolicy,
    ordering: ResponseOrdering,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(
            SearchClient::default(),
            TimeoutPolicy::default(),
            ResponseOrdering::default(),
        )
    }
}

impl SearchController {
    #[must_use]
    pub const fn new(client: SearchClient, timeout: TimeoutPolicy, ordering: ResponseOrdering) -> Self {
        Self {
            query: String::new(),
            state: SearchState::Idle,
            selection: None,
            last_seq: 0,
            in_flight: BTreeMap::new(),
            client,
            timeout,
            ordering,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn client(&self) -> &SearchClient {
        &self.client
    }

    #[must_use]
    pub const fn timeout(&self) -> TimeoutPolicy {
        self.timeout
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    /// Results of the last successful search, if that is the current state.
    #[must_use]
    pub fn results(&self) -> Option<&[ResultItem]> {
        match &self.state {
            SearchState::Success { results, .. } => Some(results),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SearchState::Failed { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    /// The item shown in the detail panel, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ResultItem> {
        self.results()?.get(self.selection?)
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Starts a search for the current query.
    ///
    /// Blank queries (empty after trimming) are ignored and return `None`
    /// without touching any state. Otherwise the state moves to `Loading`,
    /// prior results, error and selection are dropped, and the request to
    /// issue is returned. A submit while already loading is allowed; the
    /// earlier request keeps running.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Option<SearchRequest> {
        if self.query.trim().is_empty() {
            tracing::debug!("ignoring blank submit");
            return None;
        }

        self.last_seq += 1;
        let seq = self.last_seq;
        let request = self.client.request(&self.query, seq);

        tracing::debug!(seq = seq, query = %self.query, "search submitted");

        self.in_flight.insert(seq, self.query.clone());
        self.selection = None;
        self.state = SearchState::Loading {
            seq,
            query: self.query.clone(),
            started_at: now,
        };
        Some(request)
    }

    /// Applies the outcome of request `seq`.
    ///
    /// Results are labelled with the query that request `seq` was issued
    /// for, not the text currently being edited. Returns
    /// [`Completion::Stale`] without changing the view when the ordering
    /// policy rejects the completion or `seq` was never issued.
    pub fn complete(&mut self, seq: u64, outcome: Result<Vec<ResultItem>, SearchError>) -> Completion {
        let issued = self.in_flight.remove(&seq);
        let current = matches!(&self.state, SearchState::Loading { seq: loading, .. } if *loading == seq);

        let query = match (issued, current, self.ordering) {
            (Some(query), true, _) | (Some(query), false, ResponseOrdering::LastToResolve) => query,
            _ => {
                tracing::debug!(
                    seq = seq,
                    latest_seq = self.last_seq,
                    "discarding stale search response"
                );
                return Completion::Stale;
            }
        };

        self.selection = None;
        self.state = match outcome {
            Ok(results) => {
                tracing::debug!(seq = seq, result_count = results.len(), "search succeeded");
                SearchState::Success { query, results }
            }
            Err(error) => {
                tracing::debug!(seq = seq, error = %error, "search failed");
                SearchState::Failed {
                    message: error.to_string(),
                }
            }
        };
        Completion::Applied
    }

    /// Fails the in-flight search if the timeout policy says it is overdue.
    ///
    /// Returns `true` if the state changed.
    pub fn expire_overdue(&mut self, now: DateTime<Utc>) -> bool {
        let Some(seconds) = self.timeout.seconds() else {
            return false;
        };
        let SearchState::Loading { seq, started_at, .. } = &self.state else {
            return false;
        };
        if now.signed_duration_since(*started_at).num_seconds() < i64::from(seconds) {
            return false;
        }

        tracing::debug!(seq = *seq, seconds = seconds, "search timed out");
        self.state = SearchState::Failed {
            message: SearchError::TimedOut { seconds }.to_string(),
        };
        true
    }

    /// Selects the result at `index`; a no-op unless results are shown and
    /// the index is in range.
    pub fn select(&mut self, index: usize) -> bool {
        let in_range = self.results().is_some_and(|results| index < results.len());
        if in_range {
            self.selection = Some(index);
        }
        in_range
    }

    /// Clears the selection. Never touches the search state.
    pub fn dismiss(&mut self) -> bool {
        self.selection.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, NO_RESULTS_MESSAGE};
    use chrono::Duration;

    fn item(id: i64, name: &str) -> ResultItem {
        ResultItem {
            id: ItemId::Number(id),
            name: name.to_string(),
            temperament: None,
            description: None,
            life_span: None,
            bred_for: None,
            image: None,
            score: None,
        }
    }

    fn controller_with(query: &str) -> SearchController {
        let mut controller = SearchController::default();
        for c in query.chars() {
            controller.push_char(c);
        }
        controller
    }

    #[test]
    fn blank_submit_changes_nothing() {
        for query in ["", " ", "  \t "] {
            let mut controller = controller_with(query);
            assert!(controller.submit(Utc::now()).is_none());
            assert_eq!(controller.state(), &SearchState::Idle);
        }
    }

    #[test]
    fn blank_submit_keeps_previous_results() {
        let mut controller = controller_with("pug");
        let request = controller.submit(Utc::now()).unwrap();
        controller.complete(request.seq, Ok(vec![item(1, "Pug")]));
        controller.clear_query();
        controller.push_char(' ');

        assert!(controller.submit(Utc::now()).is_none());
        assert_eq!(controller.results().map(<[ResultItem]>::len), Some(1));
    }

    #[test]
    fn submit_clears_error_and_enters_loading() {
        let mut controller = controller_with("pug");
        let first = controller.submit(Utc::now()).unwrap();
        controller.complete(first.seq, Err(SearchError::RequestFailed));
        assert_eq!(controller.error_message(), Some(NO_RESULTS_MESSAGE));

        let second = controller.submit(Utc::now()).unwrap();
        assert!(controller.is_loading());
        assert!(controller.error_message().is_none());
        assert!(controller.results().is_none());
        assert!(second.seq > first.seq);
    }

    #[test]
    fn submit_after_success_drops_results() {
        let mut controller = controller_with("pug");
        let request = controller.submit(Utc::now()).unwrap();
        controller.complete(request.seq, Ok(vec![item(1, "Pug")]));
        assert_eq!(controller.results().map(<[ResultItem]>::len), Some(1));

        controller.submit(Utc::now()).unwrap();
        assert!(controller.is_loading());
        assert!(controller.results().is_none());
        assert!(controller.error_message().is_none());
    }

    #[test]
    fn submit_clears_selection() {
        let mut controller = controller_with("pug");
        let request = controller.submit(Utc::now()).unwrap();
        controller.complete(request.seq, Ok(vec![item(1, "Pug")]));
        assert!(controller.select(0));

        controller.submit(Utc::now()).unwrap();
        assert!(controller.selection().is_none());
    }

    #[test]
    fn empty_results_are_success() {
        let mut controller = controller_with("zzz");
        let request = controller.submit(Utc::now()).unwrap();
        assert_eq!(controller.complete(request.seq, Ok(vec![])), Completion::Applied);
        assert_eq!(controller.results(), Some(&[][..]));
        assert!(controller.error_message().is_none());
    }

    #[test]
    fn stale_response_is_discarded_by_default() {
        let mut controller = controller_with("pug");
        let slow = controller.submit(Utc::now()).unwrap();
        let fast = controller.submit(Utc::now()).unwrap();

        controller.complete(fast.seq, Ok(vec![item(2, "Pug")]));
        let late = controller.complete(slow.seq, Err(SearchError::RequestFailed));

        assert_eq!(late, Completion::Stale);
        assert_eq!(controller.results().unwrap()[0].name, "Pug");
    }

    #[test]
    fn last_to_resolve_lets_late_response_win() {
        let mut controller = SearchController::new(
            SearchClient::default(),
            TimeoutPolicy::NoTimeout,
            ResponseOrdering::LastToResolve,
        );
        controller.push_char('a');
        let slow = controller.submit(Utc::now()).unwrap();
        let fast = controller.submit(Utc::now()).unwrap();

        controller.complete(fast.seq, Ok(vec![item(2, "Akita")]));
        let late = controller.complete(slow.seq, Err(SearchError::RequestFailed));

        assert_eq!(late, Completion::Applied);
        assert_eq!(controller.error_message(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn late_success_keeps_the_query_it_was_issued_for() {
        let mut controller = SearchController::new(
            SearchClient::default(),
            TimeoutPolicy::NoTimeout,
            ResponseOrdering::LastToResolve,
        );
        controller.push_char('a');
        let slow = controller.submit(Utc::now()).unwrap();
        controller.push_char('k');
        let fast = controller.submit(Utc::now()).unwrap();
        controller.push_char('i');

        controller.complete(fast.seq, Ok(vec![item(2, "Akita")]));
        controller.complete(slow.seq, Ok(vec![item(3, "Azawakh")]));

        match controller.state() {
            SearchState::Success { query, .. } => assert_eq!(query, "a"),
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(controller.query(), "aki");
    }

    #[test]
    fn unknown_or_repeated_sequence_is_stale() {
        let mut controller = SearchController::new(
            SearchClient::default(),
            TimeoutPolicy::NoTimeout,
            ResponseOrdering::LastToResolve,
        );
        controller.push_char('a');
        let request = controller.submit(Utc::now()).unwrap();

        assert_eq!(controller.complete(99, Ok(vec![])), Completion::Stale);
        assert_eq!(controller.complete(request.seq, Ok(vec![])), Completion::Applied);
        assert_eq!(controller.complete(request.seq, Ok(vec![])), Completion::Stale);
    }

    #[test]
    fn timeout_expires_only_when_overdue() {
        let mut controller = SearchController::new(
            SearchClient::default(),
            TimeoutPolicy::After { seconds: 10 },
            ResponseOrdering::LatestOnly,
        );
        controller.push_char('x');
        let start = Utc::now();
        let request = controller.submit(start).unwrap();

        assert!(!controller.expire_overdue(start + Duration::seconds(9)));
        assert!(controller.is_loading());

        assert!(controller.expire_overdue(start + Duration::seconds(10)));
        assert_eq!(controller.error_message(), Some("Request timed out after 10s"));

        let late = controller.complete(request.seq, Ok(vec![item(1, "Xolo")]));
        assert_eq!(late, Completion::Stale);
    }

    #[test]
    fn no_timeout_policy_never_expires() {
        let mut controller = controller_with("pug");
        let start = Utc::now();
        controller.submit(start).unwrap();
        assert!(!controller.expire_overdue(start + Duration::days(1)));
        assert!(controller.is_loading());
    }

    #[test]
    fn select_requires_results_and_valid_index() {
        let mut controller = controller_with("pug");
        assert!(!controller.select(0));

        let request = controller.submit(Utc::now()).unwrap();
        assert!(!controller.select(0));

        controller.complete(request.seq, Ok(vec![item(1, "Pug"), item(2, "Puggle")]));
        assert!(!controller.select(2));
        assert!(controller.select(1));
        assert_eq!(controller.selection().map(|i| i.name.as_str()), Some("Puggle"));
    }

    #[test]
    fn dismiss_leaves_results_alone() {
        let mut controller = controller_with("pug");
        let request = controller.submit(Utc::now()).unwrap();
        controller.complete(request.seq, Ok(vec![item(1, "Pug")]));
        controller.select(0);
        let before = controller.state().clone();

        assert!(controller.dismiss());
        assert!(controller.selection().is_none());
        assert_eq!(controller.state(), &before);
        assert!(!controller.dismiss());
    }
}
