use super::{decode, with};
use crate::QueryParameters;
use serde_json::json;

const ECHOED_PARAMS: &[&str] = &[
    "",
    "query=some%20text&facets=%5B%22abc%22,%22def%22%5D",
    "query=&hitsPerPage=20",
    "query=shoes&hitsPerPage=10&page=2&filters=brand%3ANike&facets=%5B%22brand%22%2C%22size%22%5D",
    "facetFilters=%5B%5B%22color%3Ared%22%2C%22color%3Ablue%22%5D%2C%22size%3AM%22%5D&maxValuesPerFacet=50",
    "aroundLatLng=48.8566%2C2.3522&aroundRadius=all&getRankingInfo=true&clickAnalytics=true",
    "query=a+b&unknownKey=ignored&typoTolerance=min",
];

#[test]
fn echoed_params_survive_encode_decode() {
    for original in ECHOED_PARAMS {
        let decoded = QueryParameters::decode(original);
        let encoded = decoded.encode();
        assert_eq!(
            QueryParameters::decode(&encoded),
            decoded,
            "round trip changed {:?} (re-encoded as {:?})",
            original,
            encoded
        );
    }
}

#[test]
fn encoding_is_stable_after_one_pass() {
    for original in ECHOED_PARAMS {
        let once = QueryParameters::decode(original).encode();
        let twice = QueryParameters::decode(&once).encode();
        assert_eq!(once, twice);
    }
}

#[test]
fn results_params_match_direct_decode() {
    let params = "query=shoes&facets=%5B%22brand%22%5D&page=1";
    let r = decode(&with("params", json!(params))).unwrap();
    assert_eq!(r.params(), &QueryParameters::decode(params));
    assert_eq!(r.params().page, Some(1));
}
