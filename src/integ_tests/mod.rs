//! Response-level tests run in-process via `cargo test --lib`.
//!
//! Each test starts from a response carrying only the mandatory fields and
//! varies one field at a time: missing, mistyped, then nominal.

mod test_mandatory_fields;
mod test_optional_fields;
mod test_params_round_trip;

use crate::SearchResults;
use serde_json::{json, Value};

/// Response with every mandatory field set to a neutral value.
pub(crate) fn base_response() -> Value {
    json!({
        "hits": [],
        "nbHits": 0,
        "processingTimeMS": 66,
        "query": "",
        "params": ""
    })
}

pub(crate) fn decode(raw: &Value) -> crate::Result<SearchResults> {
    SearchResults::from_json(raw, &[] as &[&str])
}

pub(crate) fn without(field: &str) -> Value {
    let mut raw = base_response();
    raw.as_object_mut().unwrap().remove(field);
    raw
}

pub(crate) fn with(field: &str, value: Value) -> Value {
    let mut raw = base_response();
    raw[field] = value;
    raw
}
