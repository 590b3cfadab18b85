use clap::{Parser, Subcommand};
use searchhelper::{DecoderConfig, QueryParameters, SearchResults};
use serde_json::{json, Map, Value};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "searchhelper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a search response and print a JSON summary
    Decode {
        /// Response file; reads stdin when absent or `-`
        file: Option<PathBuf>,

        /// JSON decoder config (`{"disjunctiveFacets": [...]}`)
        #[arg(long, env = "SEARCHHELPER_CONFIG")]
        config: Option<PathBuf>,

        /// Extra disjunctive facet, may be repeated
        #[arg(long = "disjunctive-facet", value_name = "NAME")]
        disjunctive_facets: Vec<String>,
    },
    /// Decode a `params` query string
    Params {
        query_string: String,

        /// Print the canonical re-encoding instead of JSON
        #[arg(long)]
        encode: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Decode {
            file,
            config,
            disjunctive_facets,
        } => run_decode(file, config, disjunctive_facets),
        Command::Params {
            query_string,
            encode,
        } => run_params(&query_string, encode),
    }
}

fn run_decode(
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    disjunctive_facets: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file.as_deref())?;

    let mut config = DecoderConfig::load_or_default(config.as_deref());
    config.extend_disjunctive_facets(disjunctive_facets);
    tracing::debug!(
        disjunctive_facets = ?config.disjunctive_facets,
        "decoding search response"
    );

    match config.decoder().decode_str(&text) {
        Ok(results) => {
            println!("{}", serde_json::to_string_pretty(&summarize(&results))?);
            Ok(())
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_params(query_string: &str, encode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = QueryParameters::decode(query_string);
    if encode {
        println!("{}", params.encode());
    } else {
        println!("{}", serde_json::to_string_pretty(&params)?);
    }
    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn summarize(results: &SearchResults) -> Value {
    let mut facets = Map::new();
    for name in results.facet_names() {
        if let Some(values) = results.facets(name) {
            facets.insert(name.to_string(), json!(values));
        }
    }

    let mut stats = Map::new();
    for name in results.stats_facet_names() {
        if let Some(s) = results.facet_stats(name) {
            stats.insert(name.to_string(), json!(s));
        }
    }

    json!({
        "nbHits": results.nb_hits(),
        "hits": results.hits().len(),
        "processingTimeMS": results.processing_time_ms(),
        "query": results.query(),
        "page": results.page(),
        "nbPages": results.nb_pages(),
        "hitsPerPage": results.hits_per_page(),
        "exhaustiveFacetsCount": results.exhaustive_facets_count(),
        "exhaustiveNbHits": results.exhaustive_nb_hits(),
        "index": results.index(),
        "aroundLatLng": results.around_lat_lng(),
        "automaticRadius": results.automatic_radius(),
        "params": results.params(),
        "disjunctiveFacets": results.disjunctive_facets().collect::<Vec<_>>(),
        "facets": facets,
        "facetsStats": stats,
    })
}
