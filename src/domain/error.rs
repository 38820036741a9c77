//! Error types for the breed search plugin.
//!
//! Two layers of errors live here. [`SearchError`] describes why a single
//! search ended in the failed state; its `Display` text is exactly what the
//! status line shows. [`BreedSearchError`] is the crate-wide error returned
//! from event handling, configuration and theme loading. Both are built on
//! `thiserror`.

use thiserror::Error;

/// Message shown for any non-success HTTP status from the search service.
pub const NO_RESULTS_MESSAGE: &str = "No Results Found";

/// Terminal outcome of a failed search.
///
/// The `Display` output of each variant is the user-facing message. A failed
/// search stays on screen until the next submit; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The service answered with a non-2xx status.
    ///
    /// The status code is logged but not part of the message.
    #[error("No Results Found")]
    RequestFailed,

    /// The body could not be decoded, or the transport reported a failure.
    ///
    /// Carries the underlying error text verbatim.
    #[error("{0}")]
    TransportOrDecodeFailed(String),

    /// The request outlived the configured timeout policy.
    #[error("Request timed out after {seconds}s")]
    TimedOut {
        /// Configured timeout in seconds.
        seconds: u32,
    },

    /// The user has not granted the plugin web access.
    #[error("Web access permission not granted")]
    PermissionDenied,
}

/// The main error type for plugin operations outside a single search.
///
/// # Examples
///
/// ```
/// use breed_search::domain::BreedSearchError;
///
/// fn validate_port() -> Result<(), BreedSearchError> {
///     Err(BreedSearchError::Config("port must be a number".to_string()))
/// }
/// assert!(validate_port().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BreedSearchError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A search-level failure escaped into the application layer.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, BreedSearchError>;
