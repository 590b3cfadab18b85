use super::facets::FacetExtractor;
use super::fields::{
    as_count, as_flag, as_numeric_string, as_text, json_type_name, require_hits, FieldReader,
};
use super::SearchResults;
use crate::error::{DecodeError, Result};
use crate::query::geo::parse_around_lat_lng;
use crate::query::params::QueryParameters;
use indexmap::IndexSet;
use serde_json::Value;

impl SearchResults {
    /// Decode a raw search response.
    ///
    /// `hits`, `nbHits`, `processingTimeMS`, `query` and `params` are
    /// mandatory: if any is missing or mistyped the whole decode fails. Every
    /// other field falls back to its default (0, `false` or absent) instead.
    ///
    /// `disjunctive_facets` widens the set of facets [`facets`](Self::facets)
    /// reports as known, on top of those listed in `params`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidPayload`] if `raw` is not a JSON object,
    /// [`DecodeError::MissingField`] or [`DecodeError::TypeMismatch`] for a
    /// mandatory field.
    pub fn from_json<S: AsRef<str>>(raw: &Value, disjunctive_facets: &[S]) -> Result<Self> {
        let result = decode_object(raw, disjunctive_facets);
        if let Err(ref e) = result {
            tracing::debug!(error = %e, "rejecting search response");
        }
        result
    }

    /// Parse `text` as JSON, then decode it like [`from_json`](Self::from_json).
    pub fn from_json_str<S: AsRef<str>>(text: &str, disjunctive_facets: &[S]) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_json(&raw, disjunctive_facets)
    }

    pub fn from_slice<S: AsRef<str>>(bytes: &[u8], disjunctive_facets: &[S]) -> Result<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        Self::from_json(&raw, disjunctive_facets)
    }
}

fn decode_object<S: AsRef<str>>(raw: &Value, disjunctive_facets: &[S]) -> Result<SearchResults> {
    let obj = raw.as_object().ok_or_else(|| {
        DecodeError::InvalidPayload(format!(
            "expected JSON object, got {}",
            json_type_name(raw)
        ))
    })?;
    let fields = FieldReader::new(obj);

    let hits = require_hits(
        fields
            .raw("hits")
            .ok_or_else(|| DecodeError::MissingField("hits".to_string()))?,
    )?;
    let nb_hits = fields.require("nbHits", "non-negative integer", as_count)?;
    let processing_time_ms = fields.require("processingTimeMS", "non-negative integer", as_count)?;
    let query = fields.require("query", "string", as_text)?;
    let params_str = fields.require("params", "string", Value::as_str)?;
    let params = QueryParameters::decode(params_str);

    let around_lat_lng = fields
        .optional("aroundLatLng", Value::as_str)
        .and_then(|s| {
            let parsed = parse_around_lat_lng(s);
            if parsed.is_none() {
                tracing::debug!(value = s, "ignoring malformed aroundLatLng");
            }
            parsed
        });

    let user_data = fields
        .optional("userData", Value::as_array)
        .cloned()
        .unwrap_or_default();

    let disjunctive: IndexSet<String> = disjunctive_facets
        .iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    let mut requested = disjunctive.clone();
    requested.extend(params.facet_names().iter().cloned());

    let facets = FacetExtractor::new(
        fields.raw("facets"),
        fields.raw("facets_stats"),
        requested,
        disjunctive,
    );

    Ok(SearchResults {
        hits,
        nb_hits,
        processing_time_ms,
        query,
        params,
        page: fields.optional("page", as_count).unwrap_or(0),
        nb_pages: fields.optional("nbPages", as_count).unwrap_or(0),
        hits_per_page: fields.optional("hitsPerPage", as_count).unwrap_or(0),
        exhaustive_facets_count: fields
            .optional("exhaustiveFacetsCount", as_flag)
            .unwrap_or(false),
        exhaustive_nb_hits: fields.optional("exhaustiveNbHits", as_flag).unwrap_or(false),
        timeout_counts: fields.optional("timeoutCounts", as_flag).unwrap_or(false),
        timeout_hits: fields.optional("timeoutHits", as_flag).unwrap_or(false),
        message: fields.optional("message", as_text),
        query_after_removal: fields.optional("queryAfterRemoval", as_text),
        server_used: fields.optional("serverUsed", as_text),
        parsed_query: fields.optional("parsedQuery", as_text),
        index: fields.optional("index", as_text),
        query_id: fields.optional("queryID", as_text),
        server_time_ms: fields.optional("serverTimeMS", as_count),
        around_lat_lng,
        automatic_radius: fields
            .optional("automaticRadius", as_numeric_string)
            .unwrap_or(0),
        user_data,
        facets,
    })
}

/// Decoder bound to a fixed list of disjunctive facet names.
#[derive(Debug, Clone, Default)]
pub struct SearchResultsDecoder {
    disjunctive_facets: Vec<String>,
}

impl SearchResultsDecoder {
    pub fn new(disjunctive_facets: Vec<String>) -> Self {
        SearchResultsDecoder { disjunctive_facets }
    }

    pub fn disjunctive_facets(&self) -> &[String] {
        &self.disjunctive_facets
    }

    pub fn decode(&self, raw: &Value) -> Result<SearchResults> {
        SearchResults::from_json(raw, &self.disjunctive_facets)
    }

    pub fn decode_str(&self, text: &str) -> Result<SearchResults> {
        SearchResults::from_json_str(text, &self.disjunctive_facets)
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<SearchResults> {
        SearchResults::from_slice(bytes, &self.disjunctive_facets)
    }
}
