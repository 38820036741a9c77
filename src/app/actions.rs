//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays pure: it mutates [`AppState`](super::AppState)
//! and returns a `Vec<Action>` that `main.rs` carries out through the Zellij
//! API.
//!
//! # Example
//!
//! ```rust
//! use breed_search::app::Action;
//! use breed_search::client::SearchClient;
//!
//! let request = SearchClient::default().request("pug", 1);
//! let actions = vec![
//!     Action::FetchResults(request),
//!     Action::ScheduleTimeout { seconds: 10 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::client::SearchRequest;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the HTTP GET for a submitted search via `web_request`.
    ///
    /// The response comes back as a `WebRequestResult` carrying the
    /// request's context map.
    FetchResults(SearchRequest),

    /// Arms a one-shot timer so the timeout policy can be checked.
    ScheduleTimeout {
        /// Delay before the timer event fires.
        seconds: u32,
    },
}
