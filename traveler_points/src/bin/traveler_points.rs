//! Traveler Points command-line entry point
//!
//! Loads one traveler entry, estimates and aggregates the stays, sizes each
//! destination for the map and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! # From a saved API response
//! cargo run --bin traveler-points -- traveler.json
//!
//! # Straight from the entries API
//! cargo run --bin traveler-points --features remote -- --entry 1234
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//! - `TRAVELER_POINTS_CONFIG`: Path to a `traveler_points.toml`
//! - `TRAVELER_POINTS_AVG_STAY_DAYS`, `TRAVELER_POINTS_API_URL`,
//!   `TRAVELER_POINTS_SWEEP_MS`: Per-setting overrides

use std::env;

use anyhow::{bail, Context};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use traveler_points::config::MapConfig;
use traveler_points::services::{build_map_points, load_traveler_file, summarize, TravelerEntry};

enum Source {
    File(String),
    Entry(String),
}

fn parse_args() -> anyhow::Result<Source> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [flag, id] if flag == "--entry" => Ok(Source::Entry(id.clone())),
        [path] if !path.starts_with("--") => Ok(Source::File(path.clone())),
        _ => bail!("usage: traveler-points <traveler.json> | --entry <id>"),
    }
}

#[cfg(feature = "remote")]
async fn fetch_entry(config: &MapConfig, id: &str) -> anyhow::Result<TravelerEntry> {
    traveler_points::services::fetch_traveler(&config.api.base_url, id)
        .await
        .with_context(|| format!("Failed to fetch traveler {}", id))
}

#[cfg(not(feature = "remote"))]
async fn fetch_entry(_config: &MapConfig, id: &str) -> anyhow::Result<TravelerEntry> {
    bail!("Cannot fetch traveler {}: built without the `remote` feature", id)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let source = parse_args()?;
    let config = MapConfig::load().context("Failed to load configuration")?;

    let entry = match source {
        Source::File(path) => load_traveler_file(&path)
            .with_context(|| format!("Failed to load traveler file {}", path))?,
        Source::Entry(id) => fetch_entry(&config, &id).await?,
    };
    info!(
        "Loaded {} travels for {}",
        entry.travels.len(),
        entry.full_name.as_deref().unwrap_or("unnamed traveler")
    );

    let summary = summarize(&entry.travels, &config.estimator());
    let points = build_map_points(&entry, &config);
    info!("{} destinations on the map", points.len());

    let sweep = config.hover_sweep(entry.travels.len());
    info!("Hover sweep: {} frames every {:?}", sweep.len(), sweep.interval());

    let output = json!({
        "fullName": entry.full_name,
        "summary": summary,
        "points": points,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
