use crate::types::{FacetStats, FacetValue};
use indexmap::IndexSet;
use serde_json::{Map, Value};

/// Facet name that requests every facet the index has.
pub const WILDCARD_FACET: &str = "*";

/// Facet counts and statistics for one response.
///
/// Answers three ways for [`values`](FacetExtractor::values): `None` for a
/// facet nobody asked about, `Some(vec![])` for a facet that was requested but
/// has nothing to show, and `Some(values)` otherwise.
#[derive(Debug, Clone, Default)]
pub struct FacetExtractor {
    facets: Map<String, Value>,
    stats: Map<String, Value>,
    requested: IndexSet<String>,
    disjunctive: IndexSet<String>,
}

impl FacetExtractor {
    /// `facets` and `facets_stats` are the raw response sub-objects; anything
    /// other than a JSON object is treated as empty.
    pub fn new(
        facets: Option<&Value>,
        facets_stats: Option<&Value>,
        requested: IndexSet<String>,
        disjunctive: IndexSet<String>,
    ) -> Self {
        FacetExtractor {
            facets: object_or_empty("facets", facets),
            stats: object_or_empty("facets_stats", facets_stats),
            requested,
            disjunctive,
        }
    }

    /// Whether `name` was requested, declared disjunctive, or matched by a
    /// wildcard request.
    pub fn is_requested(&self, name: &str) -> bool {
        self.requested.contains(name)
            || (self.requested.contains(WILDCARD_FACET) && self.facets.contains_key(name))
    }

    pub fn is_disjunctive(&self, name: &str) -> bool {
        self.disjunctive.contains(name)
    }

    /// Values of facet `name`, in the order the backend listed them.
    pub fn values(&self, name: &str) -> Option<Vec<FacetValue>> {
        match self.facets.get(name) {
            Some(entry) => Some(facet_values(name, entry)),
            None if self.is_requested(name) => Some(Vec::new()),
            None => None,
        }
    }

    /// Statistics of facet `name`; `None` unless all of min/avg/max/sum are numbers.
    pub fn stats(&self, name: &str) -> Option<FacetStats> {
        let parsed = parse_stats(self.stats.get(name)?);
        if parsed.is_none() {
            tracing::debug!(facet = name, "ignoring incomplete facet stats");
        }
        parsed
    }

    /// Requested facet names (explicit and disjunctive), in declaration order.
    pub fn requested_facet_names(&self) -> impl Iterator<Item = &str> {
        self.requested
            .iter()
            .map(String::as_str)
            .filter(|n| *n != WILDCARD_FACET)
    }

    /// Every name [`values`](FacetExtractor::values) answers for: requested
    /// names first, then facets the response carries that nobody requested.
    pub fn available_facet_names(&self) -> Vec<&str> {
        let mut names: IndexSet<&str> = self.requested_facet_names().collect();
        names.extend(self.facets.keys().map(String::as_str));
        names.into_iter().collect()
    }

    /// Names with a `facets_stats` entry, whether or not it is well formed.
    pub fn stats_facet_names(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }
}

fn object_or_empty(field: &str, value: Option<&Value>) -> Map<String, Value> {
    match value {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(obj)) => obj.clone(),
        Some(_) => {
            tracing::debug!(field, "ignoring mistyped facet object");
            Map::new()
        }
    }
}

fn parse_stats(entry: &Value) -> Option<FacetStats> {
    let entry = entry.as_object()?;
    let stat = |key: &str| entry.get(key).and_then(Value::as_f64);
    Some(FacetStats {
        min: stat("min")?,
        avg: stat("avg")?,
        max: stat("max")?,
        sum: stat("sum")?,
    })
}

/// Flat `value -> count` pairs; malformed pairs are skipped.
fn facet_values(name: &str, entry: &Value) -> Vec<FacetValue> {
    let Some(counts) = entry.as_object() else {
        tracing::debug!(facet = name, "facet entry is not an object");
        return Vec::new();
    };
    counts
        .iter()
        .filter_map(|(value, count)| match count.as_u64() {
            Some(count) => Some(FacetValue::new(value.clone(), count)),
            None => {
                tracing::debug!(facet = name, value = %value, "skipping malformed facet count");
                None
            }
        })
        .collect()
}
