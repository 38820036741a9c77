//! Outgoing search request construction.
//!
//! A request is a fully built URL plus the context map that Zellij hands back
//! untouched with the matching `WebRequestResult`. The context is how a
//! response finds its way back to the submit that caused it.

use crate::observability::TraceContext;
use std::collections::BTreeMap;
use std::fmt;

/// Context key holding the request sequence number.
pub const SEQUENCE_KEY: &str = "breed_search.seq";

/// Default search service host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default search service port.
pub const DEFAULT_PORT: u16 = 8000;

/// Path of the search route on the service.
pub const SEARCH_PATH: &str = "/search";

/// Location of the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            path: SEARCH_PATH.to_string(),
        }
    }

    /// Builds the full GET URL for a query.
    ///
    /// The query is percent-encoded with `encodeURIComponent` semantics and
    /// sent as typed; leading and trailing whitespace is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use breed_search::client::Endpoint;
    ///
    /// let endpoint = Endpoint::default();
    /// assert_eq!(
    ///     endpoint.url_for("small friendly dogs"),
    ///     "http://127.0.0.1:8000/search?q=small%20friendly%20dogs"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, query: &str) -> String {
        format!("{self}?q={}", urlencoding::encode(query))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}:{}{}", self.host, self.port, self.path)
    }
}

/// A single GET request ready to hand to the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sequence number allocated by the controller at submit time.
    pub seq: u64,
    pub url: String,
    /// Round-tripped by Zellij with the response.
    pub context: BTreeMap<String, String>,
}

impl SearchRequest {
    /// Creates a request whose context carries `seq` and, when a span is
    /// active, the current trace context.
    #[must_use]
    pub fn new(seq: u64, url: String) -> Self {
        let mut context = BTreeMap::new();
        context.insert(SEQUENCE_KEY.to_string(), seq.to_string());
        if let Some(trace) = TraceContext::from_current() {
            trace.write_to(&mut context);
        }
        Self { seq, url, context }
    }

    /// Recovers the sequence number from a response context.
    ///
    /// Returns `None` when the key is missing or malformed, which means the
    /// response did not originate from this plugin's search requests.
    #[must_use]
    pub fn sequence_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(SEQUENCE_KEY)?.parse().ok()
    }
}
