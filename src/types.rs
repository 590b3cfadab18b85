use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single hit: the record exactly as the backend returned it.
pub type Hit = serde_json::Map<String, serde_json::Value>;

/// A single facet value and the number of hits carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
}

impl FacetValue {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        FacetValue {
            value: value.into(),
            count,
        }
    }
}

/// Numeric aggregate over a numeric facet, as reported in `facets_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacetStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub sum: f64,
}

/// How much of an attribute matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    None,
    Partial,
    Full,
}

impl MatchLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(MatchLevel::None),
            "partial" => Some(MatchLevel::Partial),
            "full" => Some(MatchLevel::Full),
            _ => None,
        }
    }
}

/// One highlighted (or snippeted) attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightResult {
    pub value: String,
    pub match_level: MatchLevel,
    #[serde(default)]
    pub matched_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_highlighted: Option<bool>,
}

/// Highlight tree mirroring the shape of the attribute it describes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HighlightValue {
    Single(HighlightResult),
    Array(Vec<HighlightValue>),
    Object(IndexMap<String, HighlightValue>),
}

impl HighlightValue {
    pub fn as_single(&self) -> Option<&HighlightResult> {
        match self {
            HighlightValue::Single(r) => Some(r),
            _ => None,
        }
    }
}

/// Per-hit ranking criteria, returned when `getRankingInfo` was requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingInfo {
    pub nb_typos: u64,
    pub first_matched_word: u64,
    pub proximity_distance: u64,
    pub user_score: u64,
    pub geo_distance: u64,
    pub geo_precision: u64,
    pub nb_exact_words: u64,
    pub words: u64,
    pub filters: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_geo_location: Option<MatchedGeoLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchedGeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub distance: u64,
}
