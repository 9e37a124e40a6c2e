//! Pipeline orchestration: detect features, select scenarios, resolve
//! each one to geometry, compare against the recorded route.

use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::alternatives::provider::DirectionsClient;
use crate::alternatives::{synthesis, AlternativeGeometry, GeometrySource};
use crate::config::AnalysisConfig;
use crate::report::{self, AlternativesDocument, ComparisonRecord};
use crate::route::{geodesy, Route, Sector};
use crate::scenarios::{selector, AlternativeScenario};

/// Pause after each successful provider call, honoring the service's
/// rate limit.
const PROVIDER_COOLDOWN: Duration = Duration::from_millis(1500);

/// Document label when alternatives come from the live provider.
const SOURCE_PROVIDER: &str = "OpenRouteService";
/// Document label when alternatives are synthesized locally.
const SOURCE_SYNTHETIC: &str = "synthetic geometry";

/// Drives the full alternative-generation pipeline for one route.
pub struct AlternativesGenerator {
    config: AnalysisConfig,
    client: Option<DirectionsClient>,
    cooldown: Duration,
}

impl AlternativesGenerator {
    /// Generator that synthesizes every alternative.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            client: None,
            cooldown: PROVIDER_COOLDOWN,
        }
    }

    /// Attach a directions provider; synthesis remains the fallback.
    pub fn with_provider(mut self, client: DirectionsClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Override the pause between provider calls.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Whether a live provider is configured.
    pub fn has_provider(&self) -> bool {
        self.client.is_some()
    }

    /// Run detection, selection and per-scenario resolution, returning
    /// the assembled output document.
    pub async fn generate(&self, route: &Route, sectors: &[Sector]) -> AlternativesDocument {
        let scenarios = selector::select_scenarios(route, sectors, &self.config);
        info!("Selected {} alternative scenarios", scenarios.len());
        for scenario in &scenarios {
            info!(
                "  {:<9} {:<24} km {:>5.1} -> {:>5.1} (idx {} -> {})",
                scenario.kind,
                scenario.label,
                route.km_from_start(scenario.diverge_index),
                route.km_from_start(scenario.rejoin_index),
                scenario.diverge_index,
                scenario.rejoin_index
            );
        }

        let mut alternatives = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            let record = self.resolve(route, scenario).await;
            info!(
                "[{}] {:.1}km alternative, {:+.1}km vs original ({})",
                scenario.kind,
                record.alternative.distance_m as f64 / 1000.0,
                record.comparison.distance_delta_m as f64 / 1000.0,
                record.source
            );
            alternatives.push(record);
        }

        AlternativesDocument {
            route_id: route.id().to_string(),
            generated_from: if self.client.is_some() {
                SOURCE_PROVIDER.to_string()
            } else {
                SOURCE_SYNTHETIC.to_string()
            },
            generated_at: Utc::now(),
            alternatives,
        }
    }

    /// Resolve one scenario: ask the provider when configured, fall back
    /// to the synthetic arc, then build the comparison record.
    async fn resolve(&self, route: &Route, scenario: &AlternativeScenario) -> ComparisonRecord {
        let diverge = &route.points()[scenario.diverge_index];
        let rejoin = &route.points()[scenario.rejoin_index];

        let (geometry, source) = match &self.client {
            Some(client) => {
                match client.request_alternative(scenario, diverge, rejoin).await {
                    Some(geometry) => {
                        tokio::time::sleep(self.cooldown).await;
                        (geometry, GeometrySource::Provider)
                    }
                    None => {
                        warn!("Using synthetic geometry for {}", scenario.kind);
                        (
                            self.synthesize(route, scenario),
                            GeometrySource::SynthesizedFallback,
                        )
                    }
                }
            }
            None => (
                self.synthesize(route, scenario),
                GeometrySource::Synthesized,
            ),
        };

        report::build_comparison(route, scenario, geometry, source)
    }

    fn synthesize(&self, route: &Route, scenario: &AlternativeScenario) -> AlternativeGeometry {
        let segment = route.segment(scenario.diverge_index, scenario.rejoin_index);
        synthesis::synthesize_arc(
            scenario,
            &route.points()[scenario.diverge_index],
            &route.points()[scenario.rejoin_index],
            geodesy::path_km(segment),
        )
    }
}
