use crate::results::SearchResultsDecoder;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DISJUNCTIVE_FACETS_ENV: &str = "SEARCHHELPER_DISJUNCTIVE_FACETS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoderConfig {
    #[serde(default)]
    pub disjunctive_facets: Vec<String>,
}

impl DecoderConfig {
    /// Load decoder configuration from a JSON file, or fall back to the
    /// environment.
    ///
    /// The fallback reads `SEARCHHELPER_DISJUNCTIVE_FACETS`, a comma-separated
    /// list of facet names such as `"brand,color"`.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<DecoderConfig>(&content) {
                    Ok(config) => {
                        tracing::info!(
                            "Loaded decoder config from {}: disjunctive_facets={}",
                            path.display(),
                            config.disjunctive_facets.len()
                        );
                        return config;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse {}: {}, using defaults",
                            path.display(),
                            e
                        );
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read {}: {}, using defaults", path.display(), e);
                }
            }
        }

        let disjunctive_facets = std::env::var(DISJUNCTIVE_FACETS_ENV)
            .map(|raw| parse_facet_list(&raw))
            .unwrap_or_default();

        if !disjunctive_facets.is_empty() {
            tracing::info!(
                "Loaded {} disjunctive facet(s) from {}",
                disjunctive_facets.len(),
                DISJUNCTIVE_FACETS_ENV
            );
        }

        DecoderConfig { disjunctive_facets }
    }

    /// Append names not already configured, keeping order.
    pub fn extend_disjunctive_facets<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.disjunctive_facets.contains(&name) {
                self.disjunctive_facets.push(name);
            }
        }
    }

    pub fn decoder(&self) -> SearchResultsDecoder {
        SearchResultsDecoder::new(self.disjunctive_facets.clone())
    }
}

fn parse_facet_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
