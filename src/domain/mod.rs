//! Domain layer for the breed search plugin.
//!
//! Holds the shape of a search-service record and the error vocabulary,
//! independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`breed`]: `ResultItem` record and field display rules
//! - [`error`]: Search and crate error types, result alias
//!
//! # Examples
//!
//! ```
//! use breed_search::domain::{ResultItem, SearchError};
//!
//! fn decode(body: &str) -> Result<Vec<ResultItem>, SearchError> {
//!     serde_json::from_str(body)
//!         .map_err(|e| SearchError::TransportOrDecodeFailed(e.to_string()))
//! }
//! assert_eq!(decode("[]").unwrap().len(), 0);
//! ```

pub mod breed;
pub mod error;

pub use breed::{display_or_placeholder, ItemId, ResultItem, MISSING_FIELD};
pub use error::{BreedSearchError, Result, SearchError, NO_RESULTS_MESSAGE};
