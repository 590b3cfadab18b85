//! Decoder for search responses with Algolia-compatible conventions.
//!
//! [`SearchResults::from_json`] validates a raw response: mandatory fields fail
//! the decode, optional ones degrade to defaults. [`QueryParameters`] converts
//! the `params` query string the backend echoes back to and from its typed form.
//!
//! ```
//! use searchhelper::SearchResults;
//!
//! let raw = serde_json::json!({
//!     "hits": [{"objectID": "1"}],
//!     "nbHits": 1,
//!     "processingTimeMS": 3,
//!     "query": "phone",
//!     "params": "query=phone&facets=%5B%22brand%22%5D",
//!     "facets": {"brand": {"acme": 1}}
//! });
//! let results = SearchResults::from_json(&raw, &["color"]).unwrap();
//! assert_eq!(results.params().query(), "phone");
//! assert_eq!(results.facets("brand").unwrap().len(), 1);
//! assert_eq!(results.facets("color"), Some(vec![]));
//! assert_eq!(results.facets("size"), None);
//! ```

pub mod config;
pub mod error;
pub mod query;
pub mod results;
pub mod types;

#[cfg(test)]
mod integ_tests;

pub use config::DecoderConfig;
pub use error::{DecodeError, Result};
pub use query::geo::{AroundRadius, LatLng};
pub use query::params::QueryParameters;
pub use results::{SearchResults, SearchResultsDecoder};
pub use types::{
    FacetStats, FacetValue, HighlightResult, HighlightValue, Hit, MatchLevel, MatchedGeoLocation,
    RankingInfo,
};

/// Decode a raw response; shorthand for [`SearchResults::from_json`].
pub fn decode<S: AsRef<str>>(
    raw: &serde_json::Value,
    disjunctive_facets: &[S],
) -> Result<SearchResults> {
    SearchResults::from_json(raw, disjunctive_facets)
}
