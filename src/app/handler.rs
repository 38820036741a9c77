//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes in response to the
//! outside world. It never talks to Zellij directly: side effects come back
//! as [`Action`]s for `main.rs` to execute, and the `bool` in the result
//! tells the runtime whether to re-render.
//!
//! # Event Types
//!
//! - **Query input**: `Char`, `Backspace`, `Submit`, `Escape`
//! - **Grid navigation**: `Move`, `SelectCursor`, `FocusResults`, `FocusQuery`
//! - **Detail panel**: `Dismiss`, `Click`
//! - **Runtime**: `SearchCompleted`, `Tick`, `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use breed_search::app::{handle_event, Action, AppState, Event};
//! use breed_search::ui::Theme;
//!
//! let mut state = AppState::new(Default::default(), Theme::default());
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! for c in "pug".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions[0], Action::FetchResults(_)));
//! # Ok::<(), breed_search::domain::BreedSearchError>(())
//! ```

use super::controller::Completion;
use super::modes::{Direction, Focus};
use crate::app::{Action, AppState};
use crate::domain::{Result, SearchError};
use crate::ui::layout;
use chrono::Utc;
use std::collections::BTreeMap;

/// Events produced by the plugin runtime from keys, mouse, timers and
/// web request results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Submits the current query.
    Submit,
    /// Clears the query, or closes the plugin when it is already empty.
    Escape,

    /// Moves keyboard focus to the result grid.
    FocusResults,
    /// Moves keyboard focus back to the search input.
    FocusQuery,
    /// Moves the grid cursor.
    Move(Direction),
    /// Opens the detail panel for the card under the cursor.
    SelectCursor,
    /// Closes the detail panel.
    Dismiss,

    /// Left click at a 1-indexed terminal cell.
    Click { row: usize, col: usize },

    /// A web request issued by [`Action::FetchResults`] came back.
    SearchCompleted {
        /// Sequence number read back from the request context.
        seq: u64,
        status: u16,
        /// Empty when Zellij synthesised the result for a failed connection.
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
    },

    /// A timer armed by [`Action::ScheduleTimeout`] fired.
    Tick,

    /// Zellij answered the permission request.
    PermissionsResult { granted: bool },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Errors
///
/// None of the current events fail; errors are logged by the runtime.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_kind(event)).entered();

    match event {
        Event::Char(c) => {
            state.search.push_char(*c);
            tracing::trace!(query = %state.search.query(), "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            state.search.pop_char();
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Some(request) = state.search.submit(Utc::now()) else {
                return Ok((false, vec![]));
            };
            state.cursor = 0;

            if !state.web_access {
                tracing::debug!(seq = request.seq, "web access not granted, failing search");
                state
                    .search
                    .complete(request.seq, Err(SearchError::PermissionDenied));
                return Ok((true, vec![]));
            }

            tracing::debug!(seq = request.seq, url = %request.url, "issuing search request");
            let mut actions = vec![Action::FetchResults(request)];
            if let Some(seconds) = state.search.timeout().seconds() {
                actions.push(Action::ScheduleTimeout { seconds });
            }
            Ok((true, actions))
        }
        Event::Escape => {
            if state.search.query().is_empty() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.search.clear_query();
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.result_count() == 0 {
                return Ok((false, vec![]));
            }
            state.focus = Focus::Results;
            state.cursor = state.cursor.min(state.result_count() - 1);
            Ok((true, vec![]))
        }
        Event::FocusQuery => {
            let changed = state.focus != Focus::Query;
            state.focus = Focus::Query;
            Ok((changed, vec![]))
        }
        Event::Move(direction) => {
            if state.focus != Focus::Results {
                return Ok((false, vec![]));
            }
            Ok((state.move_cursor(*direction), vec![]))
        }
        Event::SelectCursor => Ok((state.select_cursor(), vec![])),
        Event::Dismiss => Ok((state.search.dismiss(), vec![])),
        Event::Click { row, col } => Ok((handle_click(state, *row, *col), vec![])),
        Event::SearchCompleted {
            seq,
            status,
            headers,
            body,
        } => {
            let outcome = state.search.client().decode(*status, headers, body);
            match state.search.complete(*seq, outcome) {
                Completion::Applied => {
                    state.cursor = 0;
                    if state.result_count() == 0 {
                        state.focus = Focus::Query;
                    }
                    Ok((true, vec![]))
                }
                Completion::Stale => Ok((false, vec![])),
            }
        }
        Event::Tick => Ok((state.search.expire_overdue(Utc::now()), vec![])),
        Event::PermissionsResult { granted } => {
            tracing::debug!(granted = granted, "web access permission result");
            state.web_access = *granted;
            Ok((false, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Mouse handling, hit-tested against the same view model that was drawn.
///
/// While the detail panel is open it captures all clicks: a click outside it
/// or on its close glyph dismisses it, anything else is ignored.
fn handle_click(state: &mut AppState, row: usize, col: usize) -> bool {
    let (rows, cols) = state.viewport;
    let vm = state.compute_viewmodel(rows, cols);

    if let Some(modal) = &vm.modal {
        let on_close = layout::close_glyph_cell(&modal.rect) == (row, col);
        if on_close || !modal.rect.contains(row, col) {
            tracing::debug!(row = row, col = col, "click dismissed detail panel");
            return state.search.dismiss();
        }
        return false;
    }

    if let Some(index) = vm.card_at(row, col) {
        tracing::debug!(index = index, "card clicked");
        state.cursor = index;
        state.focus = Focus::Results;
        return state.search.select(index);
    }

    if layout::search_bar_rect(cols).contains(row, col) {
        let changed = state.focus != Focus::Query;
        state.focus = Focus::Query;
        return changed;
    }

    false
}

/// Span label without the response body.
fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::Submit => "submit",
        Event::Escape => "escape",
        Event::FocusResults => "focus_results",
        Event::FocusQuery => "focus_query",
        Event::Move(_) => "move",
        Event::SelectCursor => "select_cursor",
        Event::Dismiss => "dismiss",
        Event::Click { .. } => "click",
        Event::SearchCompleted { .. } => "search_completed",
        Event::Tick => "tick",
        Event::PermissionsResult { .. } => "permissions_result",
        Event::CloseFocus => "close_focus",
    }
}
