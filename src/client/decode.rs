//! Response classification for the search service.

use crate::domain::{ResultItem, SearchError};
use std::collections::BTreeMap;

/// Status Zellij substitutes when the request never produced a response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 400;

/// Returns `true` for HTTP 2xx statuses.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// A synthetic 400 with no headers: the connection failed and the body is
/// the transport error text. A real response always carries headers.
#[must_use]
pub fn is_transport_failure(status: u16, headers: &BTreeMap<String, String>) -> bool {
    status == TRANSPORT_FAILURE_STATUS && headers.is_empty()
}

/// Classifies a completed response into results or a search error.
///
/// A transport failure becomes [`SearchError::TransportOrDecodeFailed`]
/// carrying the error text. Any other non-2xx status becomes
/// [`SearchError::RequestFailed`] regardless of body. A 2xx body that is not
/// a JSON array of records becomes [`SearchError::TransportOrDecodeFailed`]
/// with the decoder's message.
///
/// # Errors
///
/// See above; these are the only two outcomes besides success.
pub fn decode_response(
    status: u16,
    headers: &BTreeMap<String, String>,
    body: &[u8],
) -> Result<Vec<ResultItem>, SearchError> {
    if is_transport_failure(status, headers) {
        let message = String::from_utf8_lossy(body).trim().to_string();
        tracing::debug!(error = %message, "search request failed in transport");
        return Err(SearchError::TransportOrDecodeFailed(message));
    }

    if !is_success(status) {
        tracing::debug!(
            status = status,
            body = %String::from_utf8_lossy(body),
            "search service returned non-success status"
        );
        return Err(SearchError::RequestFailed);
    }

    serde_json::from_slice::<Vec<ResultItem>>(body).map_err(|e| {
        tracing::debug!(error = %e, body_len = body.len(), "failed to decode search response");
        SearchError::TransportOrDecodeFailed(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_RESULTS_MESSAGE;

    fn served() -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers
    }

    fn decode(status: u16, body: &[u8]) -> Result<Vec<ResultItem>, SearchError> {
        decode_response(status, &served(), body)
    }

    #[test]
    fn empty_array_is_success() {
        let items = decode(200, b"[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn non_success_collapses_to_fixed_message() {
        for status in [400_u16, 404, 500, 503] {
            let err = decode(status, br#"{"detail":"No breeds found"}"#).unwrap_err();
            assert_eq!(err, SearchError::RequestFailed);
            assert_eq!(err.to_string(), NO_RESULTS_MESSAGE);
        }
    }

    #[test]
    fn non_success_wins_over_valid_body() {
        let err = decode(404, b"[]").unwrap_err();
        assert_eq!(err, SearchError::RequestFailed);
    }

    #[test]
    fn malformed_json_reports_decoder_message() {
        let err = decode(200, b"<html>").unwrap_err();
        match err {
            SearchError::TransportOrDecodeFailed(message) => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn object_instead_of_array_is_a_decode_failure() {
        let err = decode(200, br#"{"id":1,"name":"Pug"}"#).unwrap_err();
        assert!(matches!(err, SearchError::TransportOrDecodeFailed(_)));
    }

    #[test]
    fn connection_failure_surfaces_error_text() {
        let body = b"error sending request: Connection refused (os error 111)";
        let err = decode_response(400, &BTreeMap::new(), body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error sending request: Connection refused (os error 111)"
        );
        assert!(matches!(err, SearchError::TransportOrDecodeFailed(_)));
    }

    #[test]
    fn served_bad_request_is_still_request_failed() {
        let err = decode(400, b"bad query").unwrap_err();
        assert_eq!(err, SearchError::RequestFailed);
        assert!(!is_transport_failure(400, &served()));
        assert!(!is_transport_failure(404, &BTreeMap::new()));
    }

    #[test]
    fn status_boundaries() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(300));
    }
}
