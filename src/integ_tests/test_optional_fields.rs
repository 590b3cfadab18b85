use super::{base_response, decode, with};
use crate::LatLng;
use serde_json::json;

// Optional fields: absent and mistyped values decode to the default, never fail.

#[test]
fn counters_default_to_zero() {
    let r = decode(&base_response()).unwrap();
    assert_eq!(r.page(), 0);
    assert_eq!(r.nb_pages(), 0);
    assert_eq!(r.hits_per_page(), 0);
    assert_eq!(r.automatic_radius(), 0);
}

#[test]
fn page_mistyped_and_nominal() {
    assert_eq!(decode(&with("page", json!("XXX"))).unwrap().page(), 0);
    assert_eq!(decode(&with("page", json!(666))).unwrap().page(), 666);
}

#[test]
fn page_negative_is_default() {
    assert_eq!(decode(&with("page", json!(-3))).unwrap().page(), 0);
}

#[test]
fn nb_pages_mistyped_and_nominal() {
    assert_eq!(decode(&with("nbPages", json!("XXX"))).unwrap().nb_pages(), 0);
    assert_eq!(decode(&with("nbPages", json!(666))).unwrap().nb_pages(), 666);
}

#[test]
fn hits_per_page_mistyped_and_nominal() {
    assert_eq!(
        decode(&with("hitsPerPage", json!("XXX")))
            .unwrap()
            .hits_per_page(),
        0
    );
    assert_eq!(
        decode(&with("hitsPerPage", json!(666)))
            .unwrap()
            .hits_per_page(),
        666
    );
}

#[test]
fn flags_default_to_false() {
    let r = decode(&base_response()).unwrap();
    assert!(!r.exhaustive_facets_count());
    assert!(!r.exhaustive_nb_hits());
    assert!(!r.timeout_counts());
    assert!(!r.timeout_hits());
}

#[test]
fn exhaustive_facets_count_mistyped_and_nominal() {
    assert!(!decode(&with("exhaustiveFacetsCount", json!("XXX")))
        .unwrap()
        .exhaustive_facets_count());
    assert!(decode(&with("exhaustiveFacetsCount", json!(true)))
        .unwrap()
        .exhaustive_facets_count());
}

#[test]
fn timeout_counts_mistyped_and_nominal() {
    assert!(!decode(&with("timeoutCounts", json!("XXX")))
        .unwrap()
        .timeout_counts());
    assert!(decode(&with("timeoutCounts", json!(true)))
        .unwrap()
        .timeout_counts());
}

#[test]
fn timeout_hits_mistyped_and_nominal() {
    assert!(!decode(&with("timeoutHits", json!("XXX")))
        .unwrap()
        .timeout_hits());
    assert!(decode(&with("timeoutHits", json!(true)))
        .unwrap()
        .timeout_hits());
}

#[test]
fn flag_given_as_number_is_default() {
    assert!(!decode(&with("timeoutHits", json!(1)))
        .unwrap()
        .timeout_hits());
}

#[test]
fn texts_default_to_none() {
    let r = decode(&base_response()).unwrap();
    assert_eq!(r.message(), None);
    assert_eq!(r.query_after_removal(), None);
    assert_eq!(r.server_used(), None);
    assert_eq!(r.parsed_query(), None);
    assert_eq!(r.index(), None);
    assert_eq!(r.query_id(), None);
}

#[test]
fn message_mistyped_and_nominal() {
    assert_eq!(decode(&with("message", json!(666))).unwrap().message(), None);
    assert_eq!(
        decode(&with("message", json!("You've been warned")))
            .unwrap()
            .message(),
        Some("You've been warned")
    );
}

#[test]
fn query_after_removal_mistyped_and_nominal() {
    assert_eq!(
        decode(&with("queryAfterRemoval", json!(666)))
            .unwrap()
            .query_after_removal(),
        None
    );
    assert_eq!(
        decode(&with("queryAfterRemoval", json!("some text")))
            .unwrap()
            .query_after_removal(),
        Some("some text")
    );
}

#[test]
fn server_used_mistyped_and_nominal() {
    assert_eq!(
        decode(&with("serverUsed", json!(666))).unwrap().server_used(),
        None
    );
    assert_eq!(
        decode(&with("serverUsed", json!("host.com")))
            .unwrap()
            .server_used(),
        Some("host.com")
    );
}

#[test]
fn parsed_query_mistyped_and_nominal() {
    assert_eq!(
        decode(&with("parsedQuery", json!(666))).unwrap().parsed_query(),
        None
    );
    assert_eq!(
        decode(&with("parsedQuery", json!("some text")))
            .unwrap()
            .parsed_query(),
        Some("some text")
    );
}

#[test]
fn index_and_query_id_nominal() {
    let mut raw = base_response();
    raw["index"] = json!("products");
    raw["queryID"] = json!("a1b2c3");
    raw["serverTimeMS"] = json!(4);
    let r = decode(&raw).unwrap();
    assert_eq!(r.index(), Some("products"));
    assert_eq!(r.query_id(), Some("a1b2c3"));
    assert_eq!(r.server_time_ms(), Some(4));
}

// ============================================================
// aroundLatLng
// ============================================================

#[test]
fn around_lat_lng_absent() {
    assert_eq!(decode(&base_response()).unwrap().around_lat_lng(), None);
}

#[test]
fn around_lat_lng_mistyped() {
    assert_eq!(
        decode(&with("aroundLatLng", json!(666)))
            .unwrap()
            .around_lat_lng(),
        None
    );
}

#[test]
fn around_lat_lng_ill_formatted() {
    assert_eq!(
        decode(&with("aroundLatLng", json!("123.456XYZ")))
            .unwrap()
            .around_lat_lng(),
        None
    );
    assert_eq!(
        decode(&with("aroundLatLng", json!("12.34,abc")))
            .unwrap()
            .around_lat_lng(),
        None
    );
}

#[test]
fn around_lat_lng_padded_is_absent() {
    assert_eq!(
        decode(&with("aroundLatLng", json!(" 12.34 , 45.67 ")))
            .unwrap()
            .around_lat_lng(),
        None
    );
}

#[test]
fn around_lat_lng_nominal() {
    assert_eq!(
        decode(&with("aroundLatLng", json!("12.34,45.67")))
            .unwrap()
            .around_lat_lng(),
        Some(LatLng::new(12.34, 45.67))
    );
}

// ============================================================
// automaticRadius (string-encoded by the backend)
// ============================================================

#[test]
fn automatic_radius_number_is_mistyped() {
    assert_eq!(
        decode(&with("automaticRadius", json!(666)))
            .unwrap()
            .automatic_radius(),
        0
    );
}

#[test]
fn automatic_radius_non_numeric_string_is_default() {
    assert_eq!(
        decode(&with("automaticRadius", json!("far")))
            .unwrap()
            .automatic_radius(),
        0
    );
}

#[test]
fn automatic_radius_nominal() {
    assert_eq!(
        decode(&with("automaticRadius", json!("666")))
            .unwrap()
            .automatic_radius(),
        666
    );
}
