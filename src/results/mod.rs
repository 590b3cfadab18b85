pub mod decoder;
pub mod facets;
pub(crate) mod fields;
pub mod hits;

use crate::query::geo::LatLng;
use crate::query::params::QueryParameters;
use crate::types::{FacetStats, FacetValue, HighlightValue, Hit, RankingInfo};
use facets::FacetExtractor;

pub use decoder::SearchResultsDecoder;

/// One decoded search response. Built once by
/// [`SearchResults::from_json`] (or a [`SearchResultsDecoder`]) and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub(crate) hits: Vec<Hit>,
    pub(crate) nb_hits: u64,
    pub(crate) processing_time_ms: u64,
    pub(crate) query: String,
    pub(crate) params: QueryParameters,
    pub(crate) page: u64,
    pub(crate) nb_pages: u64,
    pub(crate) hits_per_page: u64,
    pub(crate) exhaustive_facets_count: bool,
    pub(crate) exhaustive_nb_hits: bool,
    pub(crate) timeout_counts: bool,
    pub(crate) timeout_hits: bool,
    pub(crate) message: Option<String>,
    pub(crate) query_after_removal: Option<String>,
    pub(crate) server_used: Option<String>,
    pub(crate) parsed_query: Option<String>,
    pub(crate) index: Option<String>,
    pub(crate) query_id: Option<String>,
    pub(crate) server_time_ms: Option<u64>,
    pub(crate) around_lat_lng: Option<LatLng>,
    pub(crate) automatic_radius: u64,
    pub(crate) user_data: Vec<serde_json::Value>,
    pub(crate) facets: FacetExtractor,
}

impl SearchResults {
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn nb_hits(&self) -> u64 {
        self.nb_hits
    }

    pub fn processing_time_ms(&self) -> u64 {
        self.processing_time_ms
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Parameters echoed back by the backend, decoded from the `params` string.
    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn nb_pages(&self) -> u64 {
        self.nb_pages
    }

    pub fn hits_per_page(&self) -> u64 {
        self.hits_per_page
    }

    pub fn exhaustive_facets_count(&self) -> bool {
        self.exhaustive_facets_count
    }

    pub fn exhaustive_nb_hits(&self) -> bool {
        self.exhaustive_nb_hits
    }

    pub fn timeout_counts(&self) -> bool {
        self.timeout_counts
    }

    pub fn timeout_hits(&self) -> bool {
        self.timeout_hits
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn query_after_removal(&self) -> Option<&str> {
        self.query_after_removal.as_deref()
    }

    pub fn server_used(&self) -> Option<&str> {
        self.server_used.as_deref()
    }

    pub fn parsed_query(&self) -> Option<&str> {
        self.parsed_query.as_deref()
    }

    /// Name of the index that served the query.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Present when the query ran with click analytics.
    pub fn query_id(&self) -> Option<&str> {
        self.query_id.as_deref()
    }

    pub fn server_time_ms(&self) -> Option<u64> {
        self.server_time_ms
    }

    pub fn around_lat_lng(&self) -> Option<LatLng> {
        self.around_lat_lng
    }

    /// Radius in meters the backend picked for an `aroundLatLng` query, 0 when unknown.
    pub fn automatic_radius(&self) -> u64 {
        self.automatic_radius
    }

    /// Payloads injected by query rules.
    pub fn user_data(&self) -> &[serde_json::Value] {
        &self.user_data
    }

    /// Values of facet `name`.
    ///
    /// `None` means the facet is unknown to this response; `Some(vec![])` means
    /// it was requested (explicitly, as disjunctive, or by wildcard) but has no
    /// values to show.
    pub fn facets(&self, name: &str) -> Option<Vec<FacetValue>> {
        self.facets.values(name)
    }

    pub fn facet_stats(&self, name: &str) -> Option<FacetStats> {
        self.facets.stats(name)
    }

    pub fn is_disjunctive_facet(&self, name: &str) -> bool {
        self.facets.is_disjunctive(name)
    }

    pub fn disjunctive_facets(&self) -> impl Iterator<Item = &str> {
        self.facets
            .requested_facet_names()
            .filter(|n| self.facets.is_disjunctive(n))
    }

    /// Every facet name [`facets`](SearchResults::facets) answers for.
    pub fn facet_names(&self) -> Vec<&str> {
        self.facets.available_facet_names()
    }

    /// Facet names carrying a `facets_stats` entry.
    pub fn stats_facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.stats_facet_names()
    }

    pub fn highlight_result(&self, hit: usize, attribute: &str) -> Option<HighlightValue> {
        hits::attribute_highlight(self.hits.get(hit)?, hits::HIGHLIGHT_RESULT, attribute)
    }

    pub fn snippet_result(&self, hit: usize, attribute: &str) -> Option<HighlightValue> {
        hits::attribute_highlight(self.hits.get(hit)?, hits::SNIPPET_RESULT, attribute)
    }

    pub fn ranking_info(&self, hit: usize) -> Option<RankingInfo> {
        hits::ranking_info(self.hits.get(hit)?)
    }
}
