//! Lenient readers for the per-hit metadata the backend attaches to records:
//! `_highlightResult`, `_snippetResult` and `_rankingInfo`.

use crate::types::{
    Hit, HighlightResult, HighlightValue, MatchLevel, MatchedGeoLocation, RankingInfo,
};
use indexmap::IndexMap;
use serde_json::Value;

pub const HIGHLIGHT_RESULT: &str = "_highlightResult";
pub const SNIPPET_RESULT: &str = "_snippetResult";
pub const RANKING_INFO: &str = "_rankingInfo";

/// Look up `attribute` in the hit's `section` (`_highlightResult` or
/// `_snippetResult`) and parse it.
pub fn attribute_highlight(hit: &Hit, section: &str, attribute: &str) -> Option<HighlightValue> {
    let value = hit.get(section)?.as_object()?.get(attribute)?;
    parse_highlight_value(value)
}

/// Parse a highlight tree. A leaf is an object with a string `value` and a
/// known `matchLevel`; arrays and other objects recurse, dropping malformed
/// children. A container whose children are all malformed is `None`.
pub fn parse_highlight_value(value: &Value) -> Option<HighlightValue> {
    match value {
        Value::Object(obj) if obj.contains_key("matchLevel") => {
            parse_highlight_leaf(obj).map(HighlightValue::Single)
        }
        Value::Object(obj) => {
            let children: IndexMap<String, HighlightValue> = obj
                .iter()
                .filter_map(|(k, v)| parse_highlight_value(v).map(|hv| (k.clone(), hv)))
                .collect();
            (!children.is_empty()).then_some(HighlightValue::Object(children))
        }
        Value::Array(items) => {
            let children: Vec<HighlightValue> =
                items.iter().filter_map(parse_highlight_value).collect();
            (!children.is_empty()).then_some(HighlightValue::Array(children))
        }
        _ => None,
    }
}

fn parse_highlight_leaf(obj: &serde_json::Map<String, Value>) -> Option<HighlightResult> {
    let value = obj.get("value")?.as_str()?.to_string();
    let match_level = MatchLevel::parse(obj.get("matchLevel")?.as_str()?)?;
    let matched_words = obj
        .get("matchedWords")
        .and_then(Value::as_array)
        .map(|words| {
            words
                .iter()
                .filter_map(|w| w.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let fully_highlighted = obj.get("fullyHighlighted").and_then(Value::as_bool);
    Some(HighlightResult {
        value,
        match_level,
        matched_words,
        fully_highlighted,
    })
}

/// Parse `_rankingInfo`. Each counter falls back to 0 on its own; only a
/// missing or non-object `_rankingInfo` yields `None`.
pub fn ranking_info(hit: &Hit) -> Option<RankingInfo> {
    let info = hit.get(RANKING_INFO)?.as_object()?;
    let count = |key: &str| info.get(key).and_then(Value::as_u64).unwrap_or(0);
    let matched_geo_location = info
        .get("matchedGeoLocation")
        .and_then(Value::as_object)
        .and_then(|geo| {
            Some(MatchedGeoLocation {
                lat: geo.get("lat")?.as_f64()?,
                lng: geo.get("lng")?.as_f64()?,
                distance: geo.get("distance")?.as_u64()?,
            })
        });
    Some(RankingInfo {
        nb_typos: count("nbTypos"),
        first_matched_word: count("firstMatchedWord"),
        proximity_distance: count("proximityDistance"),
        user_score: count("userScore"),
        geo_distance: count("geoDistance"),
        geo_precision: count("geoPrecision"),
        nb_exact_words: count("nbExactWords"),
        words: count("words"),
        filters: count("filters"),
        matched_geo_location,
    })
}
