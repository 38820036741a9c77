//! Search service client.
//!
//! The client never performs I/O itself. It builds the GET request that the
//! plugin runtime issues through Zellij's `web_request`, and it classifies
//! the `WebRequestResult` that comes back. Keeping both halves pure lets the
//! whole request/response contract be tested without a runtime.
//!
//! # Contract
//!
//! - One GET per submit to `http://<host>:<port>/search?q=<encoded query>`
//! - 2xx: JSON array of [`ResultItem`](crate::domain::ResultItem)
//! - Any other status: [`SearchError::RequestFailed`]
//! - Connection failure or undecodable body:
//!   [`SearchError::TransportOrDecodeFailed`]
//! - No retry, no timeout at this layer (see `app::controller::TimeoutPolicy`)
//!
//! Zellij surfaces transport failures as a synthetic `400` with no headers
//! whose body is the error text. That shape is told apart from a served `400`
//! by the missing headers.

mod decode;
mod request;

pub use decode::{decode_response, is_success, is_transport_failure, TRANSPORT_FAILURE_STATUS};
pub use request::{
    Endpoint, SearchRequest, DEFAULT_HOST, DEFAULT_PORT, SEARCH_PATH, SEQUENCE_KEY,
};

use crate::domain::{ResultItem, SearchError};
use std::collections::BTreeMap;

/// Thin client bound to one service endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchClient {
    endpoint: Endpoint,
}

impl SearchClient {
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Builds the request for `query` tagged with sequence number `seq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use breed_search::client::SearchClient;
    ///
    /// let client = SearchClient::default();
    /// let request = client.request("pug", 1);
    /// assert_eq!(request.url, "http://127.0.0.1:8000/search?q=pug");
    /// assert_eq!(request.seq, 1);
    /// ```
    #[must_use]
    pub fn request(&self, query: &str, seq: u64) -> SearchRequest {
        let url = self.endpoint.url_for(query);
        tracing::debug!(seq = seq, url = %url, "built search request");
        SearchRequest::new(seq, url)
    }

    /// Classifies a response; see [`decode_response`].
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] for transport failures, non-2xx statuses
    /// and undecodable bodies.
    pub fn decode(
        &self,
        status: u16,
        headers: &BTreeMap<String, String>,
        body: &[u8],
    ) -> Result<Vec<ResultItem>, SearchError> {
        decode_response(status, headers, body)
    }
}
