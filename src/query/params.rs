use crate::query::geo::{parse_around_lat_lng, AroundRadius, LatLng};
use indexmap::IndexSet;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Typed view of a URL-encoded search parameter string such as
/// `query=some%20text&facets=%5B%22brand%22%5D`.
///
/// Decoding is best-effort: unknown keys and values that fail to parse are
/// dropped, never reported. [`QueryParameters::encode`] produces the canonical
/// string form, and decoding that string yields an equal value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Requested facet names, distinct, in request order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values_per_facet: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_highlight: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_snippet: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_searchable_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_pre_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_post_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typo_tolerance: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_syntax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_words_if_no_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_rules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_synonyms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_contexts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_analytics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_ranking_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around_lat_lng: Option<LatLng>,
    #[serde(rename = "aroundLatLngViaIP", skip_serializing_if = "Option::is_none")]
    pub around_lat_lng_via_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around_radius: Option<AroundRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_around_radius: Option<u64>,
}

impl QueryParameters {
    /// Decode a query string. Never fails; see the type docs for the rules.
    ///
    /// When a key repeats, its first parsable occurrence wins.
    pub fn decode(params: &str) -> Self {
        let mut p = QueryParameters::default();
        if params.is_empty() {
            return p;
        }
        for (key, value) in url::form_urlencoded::parse(params.as_bytes()) {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                "query" => set_once(&mut p.query, key, Some(value.to_string())),
                "hitsPerPage" => set_once(&mut p.hits_per_page, key, value.parse().ok()),
                "page" => set_once(&mut p.page, key, value.parse().ok()),
                "filters" => set_once(&mut p.filters, key, Some(value.to_string())),
                "facets" => set_once(&mut p.facets, key, parse_facet_names(value)),
                "maxValuesPerFacet" => {
                    set_once(&mut p.max_values_per_facet, key, value.parse().ok())
                }
                "facetFilters" => set_once(&mut p.facet_filters, key, parse_json(value)),
                "numericFilters" => {
                    set_once(&mut p.numeric_filters, key, Some(parse_json_or_text(value)))
                }
                "tagFilters" => {
                    set_once(&mut p.tag_filters, key, Some(parse_json_or_text(value)))
                }
                "optionalFilters" => set_once(&mut p.optional_filters, key, parse_json(value)),
                "attributesToRetrieve" => {
                    set_once(&mut p.attributes_to_retrieve, key, parse_string_list(value))
                }
                "attributesToHighlight" => {
                    set_once(&mut p.attributes_to_highlight, key, parse_string_list(value))
                }
                "attributesToSnippet" => {
                    set_once(&mut p.attributes_to_snippet, key, parse_string_list(value))
                }
                "restrictSearchableAttributes" => set_once(
                    &mut p.restrict_searchable_attributes,
                    key,
                    parse_string_list(value),
                ),
                "highlightPreTag" => {
                    set_once(&mut p.highlight_pre_tag, key, Some(value.to_string()))
                }
                "highlightPostTag" => {
                    set_once(&mut p.highlight_post_tag, key, Some(value.to_string()))
                }
                "queryType" => set_once(&mut p.query_type, key, Some(value.to_string())),
                "typoTolerance" => {
                    set_once(&mut p.typo_tolerance, key, Some(parse_json_or_text(value)))
                }
                "advancedSyntax" => set_once(&mut p.advanced_syntax, key, value.parse().ok()),
                "removeWordsIfNoResults" => set_once(
                    &mut p.remove_words_if_no_results,
                    key,
                    Some(value.to_string()),
                ),
                "distinct" => set_once(&mut p.distinct, key, parse_json(value)),
                "enableRules" => set_once(&mut p.enable_rules, key, value.parse().ok()),
                "enableSynonyms" => set_once(&mut p.enable_synonyms, key, value.parse().ok()),
                "ruleContexts" => set_once(&mut p.rule_contexts, key, parse_string_list(value)),
                "analytics" => set_once(&mut p.analytics, key, value.parse().ok()),
                "clickAnalytics" => set_once(&mut p.click_analytics, key, value.parse().ok()),
                "analyticsTags" => {
                    set_once(&mut p.analytics_tags, key, parse_string_list(value))
                }
                "getRankingInfo" => set_once(&mut p.get_ranking_info, key, value.parse().ok()),
                "userToken" => set_once(&mut p.user_token, key, Some(value.to_string())),
                "aroundLatLng" => set_once(&mut p.around_lat_lng, key, parse_around_lat_lng(value)),
                "aroundLatLngViaIP" => {
                    set_once(&mut p.around_lat_lng_via_ip, key, value.parse().ok())
                }
                "aroundRadius" => set_once(&mut p.around_radius, key, AroundRadius::parse(value)),
                "minimumAroundRadius" => {
                    set_once(&mut p.minimum_around_radius, key, value.parse().ok())
                }
                _ => tracing::trace!(key, "ignoring unknown query parameter"),
            }
        }
        p
    }

    /// Encode to the canonical query string: present fields only, in a fixed
    /// key order, values percent-encoded.
    pub fn encode(&self) -> String {
        let mut out = Vec::new();
        push_text(&mut out, "query", &self.query);
        push_display(&mut out, "hitsPerPage", &self.hits_per_page);
        push_display(&mut out, "page", &self.page);
        push_text(&mut out, "filters", &self.filters);
        push_json(&mut out, "facets", &self.facets);
        push_display(&mut out, "maxValuesPerFacet", &self.max_values_per_facet);
        push_json(&mut out, "facetFilters", &self.facet_filters);
        push_json(&mut out, "numericFilters", &self.numeric_filters);
        push_json(&mut out, "tagFilters", &self.tag_filters);
        push_json(&mut out, "optionalFilters", &self.optional_filters);
        push_json(&mut out, "attributesToRetrieve", &self.attributes_to_retrieve);
        push_json(&mut out, "attributesToHighlight", &self.attributes_to_highlight);
        push_json(&mut out, "attributesToSnippet", &self.attributes_to_snippet);
        push_json(
            &mut out,
            "restrictSearchableAttributes",
            &self.restrict_searchable_attributes,
        );
        push_text(&mut out, "highlightPreTag", &self.highlight_pre_tag);
        push_text(&mut out, "highlightPostTag", &self.highlight_post_tag);
        push_text(&mut out, "queryType", &self.query_type);
        push_json(&mut out, "typoTolerance", &self.typo_tolerance);
        push_display(&mut out, "advancedSyntax", &self.advanced_syntax);
        push_text(
            &mut out,
            "removeWordsIfNoResults",
            &self.remove_words_if_no_results,
        );
        push_json(&mut out, "distinct", &self.distinct);
        push_display(&mut out, "enableRules", &self.enable_rules);
        push_display(&mut out, "enableSynonyms", &self.enable_synonyms);
        push_json(&mut out, "ruleContexts", &self.rule_contexts);
        push_display(&mut out, "analytics", &self.analytics);
        push_display(&mut out, "clickAnalytics", &self.click_analytics);
        push_json(&mut out, "analyticsTags", &self.analytics_tags);
        push_display(&mut out, "getRankingInfo", &self.get_ranking_info);
        push_text(&mut out, "userToken", &self.user_token);
        push_display(&mut out, "aroundLatLng", &self.around_lat_lng);
        push_display(&mut out, "aroundLatLngViaIP", &self.around_lat_lng_via_ip);
        push_display(&mut out, "aroundRadius", &self.around_radius);
        push_display(&mut out, "minimumAroundRadius", &self.minimum_around_radius);
        out.join("&")
    }

    /// The query text, or `""` when the string carried none.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Requested facet names, empty when none were requested.
    pub fn facet_names(&self) -> &[String] {
        self.facets.as_deref().unwrap_or(&[])
    }
}

impl FromStr for QueryParameters {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QueryParameters::decode(s))
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &str, parsed: Option<T>) {
    if slot.is_some() {
        return;
    }
    match parsed {
        Some(v) => *slot = Some(v),
        None => tracing::debug!(key, "dropping unparsable query parameter"),
    }
}

fn parse_json(value: &str) -> Option<serde_json::Value> {
    serde_json::from_str(value).ok()
}

/// JSON when it parses, otherwise the raw text. Covers bare forms such as
/// `typoTolerance=min` or `numericFilters=price>10`.
fn parse_json_or_text(value: &str) -> serde_json::Value {
    parse_json(value).unwrap_or_else(|| serde_json::Value::String(value.to_string()))
}

fn parse_string_list(value: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(value).ok()
}

/// Facet names are a JSON array of strings; duplicates collapse onto their
/// first occurrence.
fn parse_facet_names(value: &str) -> Option<Vec<String>> {
    let names = parse_string_list(value)?;
    let distinct: IndexSet<String> = names.into_iter().collect();
    Some(distinct.into_iter().collect())
}

fn push_text(out: &mut Vec<String>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        out.push(format!("{}={}", key, urlencoding::encode(v)));
    }
}

fn push_display<T: fmt::Display>(out: &mut Vec<String>, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        out.push(format!("{}={}", key, urlencoding::encode(&v.to_string())));
    }
}

fn push_json<T: Serialize>(out: &mut Vec<String>, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        match serde_json::to_string(v) {
            Ok(s) => out.push(format!("{}={}", key, urlencoding::encode(&s))),
            Err(e) => tracing::debug!(key, error = %e, "skipping unserializable query parameter"),
        }
    }
}
