//! RouteScout command line entry point.
//!
//! Loads a recorded route and its sector annotations, generates the
//! alternative-route scenarios, and writes the comparison document.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use routescout::alternatives::provider::DirectionsClient;
use routescout::config::{self, AnalysisConfig};
use routescout::generator::AlternativesGenerator;
use routescout::report;
use routescout::route::loader;
use routescout::SectorKind;

#[derive(Parser, Debug)]
#[command(
    name = "routescout",
    version,
    about = "Generate and compare cycling route alternatives"
)]
struct Cli {
    /// Route file: a .json coordinate list or a .gpx track
    #[arg(long)]
    route: PathBuf,

    /// Sector annotation file (.json)
    #[arg(long)]
    segments: PathBuf,

    /// Output document path
    #[arg(long, default_value = "route-alternatives.json")]
    output: PathBuf,

    /// Skip the directions provider and synthesize every alternative
    #[arg(long)]
    synthetic_only: bool,

    /// Analysis settings file (.toml); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directions provider API key; falls back to ORS_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Directions provider base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Route identifier for files that do not embed one
    #[arg(long)]
    route_id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let analysis = match &cli.config {
        Some(path) => config::load_analysis_config(path)
            .with_context(|| format!("failed to load analysis config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    tracing::info!("Loading route from {}", cli.route.display());
    let route = loader::load_route(&cli.route, cli.route_id.as_deref())
        .with_context(|| format!("failed to load route {}", cli.route.display()))?;
    tracing::info!(
        "  {} points, {:.1} km, {:.0} m of recorded climbing",
        route.len(),
        route.total_km(),
        routescout::route::geodesy::ascent_m(route.points())
    );

    tracing::info!("Loading sectors from {}", cli.segments.display());
    let sectors = loader::load_sectors(&cli.segments, route.last_index())
        .with_context(|| format!("failed to load segments {}", cli.segments.display()))?;
    let gravel = sectors
        .iter()
        .filter(|s| s.kind == SectorKind::Gravel)
        .count();
    tracing::info!(
        "  {} sectors ({} named, {} gravel)",
        sectors.len(),
        sectors.len() - gravel,
        gravel
    );

    let mut generator = AlternativesGenerator::new(analysis);
    if cli.synthetic_only {
        tracing::info!("Provider disabled; synthesizing every alternative");
    } else {
        let api_key = cli.api_key.clone().or_else(|| std::env::var("ORS_API_KEY").ok());
        match api_key {
            Some(key) => {
                let client = match &cli.base_url {
                    Some(url) => DirectionsClient::with_url(url, key),
                    None => DirectionsClient::new(key),
                };
                generator = generator.with_provider(client);
            }
            None => {
                tracing::warn!(
                    "No API key (--api-key or ORS_API_KEY); falling back to synthetic geometry"
                );
            }
        }
    }

    let document = generator.generate(&route, &sectors).await;

    report::write_document(&document, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        "Wrote {} alternatives to {}",
        document.alternatives.len(),
        cli.output.display()
    );
    for record in &document.alternatives {
        tracing::info!(
            "  {:<9} {:>3} points, {:>6.1} km, diverges at km {}",
            record.id,
            record.alternative.coordinates.len(),
            record.alternative.distance_m as f64 / 1000.0,
            record.diverge.km_from_start
        );
    }

    Ok(())
}
