use super::{decode, with, without};
use crate::DecodeError;
use serde_json::json;

// ============================================================
// hits
// ============================================================

#[test]
fn hits_missing_fails() {
    assert_eq!(
        decode(&without("hits")).unwrap_err(),
        DecodeError::MissingField("hits".to_string())
    );
}

#[test]
fn hits_scalar_fails() {
    assert!(matches!(
        decode(&with("hits", json!(123))),
        Err(DecodeError::TypeMismatch { .. })
    ));
}

#[test]
fn hits_with_non_object_element_fails() {
    assert!(decode(&with("hits", json!([{"abc": 123}, "def"]))).is_err());
}

#[test]
fn hits_nominal() {
    let r = decode(&with("hits", json!([{"abc": 123}, {"def": 456}]))).unwrap();
    assert_eq!(r.hits().len(), 2);
    assert_eq!(r.hits()[0]["abc"], 123);
}

// ============================================================
// nbHits
// ============================================================

#[test]
fn nb_hits_missing_fails() {
    assert!(decode(&without("nbHits")).is_err());
}

#[test]
fn nb_hits_mistyped_fails() {
    assert!(decode(&with("nbHits", json!("XXX"))).is_err());
}

#[test]
fn nb_hits_negative_fails() {
    assert!(decode(&with("nbHits", json!(-1))).is_err());
}

#[test]
fn nb_hits_nominal() {
    assert_eq!(decode(&with("nbHits", json!(666))).unwrap().nb_hits(), 666);
}

// ============================================================
// processingTimeMS
// ============================================================

#[test]
fn processing_time_missing_fails() {
    assert!(decode(&without("processingTimeMS")).is_err());
}

#[test]
fn processing_time_mistyped_fails() {
    assert!(decode(&with("processingTimeMS", json!("XXX"))).is_err());
}

#[test]
fn processing_time_nominal() {
    let r = decode(&with("processingTimeMS", json!(666))).unwrap();
    assert_eq!(r.processing_time_ms(), 666);
}

// ============================================================
// query
// ============================================================

#[test]
fn query_missing_fails() {
    assert!(decode(&without("query")).is_err());
}

#[test]
fn query_mistyped_fails() {
    assert!(decode(&with("query", json!(666))).is_err());
}

#[test]
fn query_nominal() {
    let r = decode(&with("query", json!("some text"))).unwrap();
    assert_eq!(r.query(), "some text");
}

// ============================================================
// params
// ============================================================

#[test]
fn params_missing_fails() {
    assert!(decode(&without("params")).is_err());
}

#[test]
fn params_mistyped_fails() {
    assert_eq!(
        decode(&with("params", json!(666))).unwrap_err(),
        DecodeError::TypeMismatch {
            field: "params".to_string(),
            expected: "string".to_string(),
            actual: "number".to_string(),
        }
    );
}

#[test]
fn params_nominal() {
    let r = decode(&with(
        "params",
        json!("query=some%20text&facets=%5B%22abc%22,%22def%22%5D"),
    ))
    .unwrap();
    assert_eq!(r.params().query(), "some text");
    assert_eq!(
        r.params().facets,
        Some(vec!["abc".to_string(), "def".to_string()])
    );
}

#[test]
fn params_garbage_is_tolerated() {
    let r = decode(&with("params", json!("%%%&&==facets=[oops"))).unwrap();
    assert_eq!(r.params().facets, None);
}
