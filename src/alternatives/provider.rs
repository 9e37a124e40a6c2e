//! Directions provider client (OpenRouteService wire format).
//!
//! The provider is a black-box geometry source: one POST per scenario.
//! Any transport, service or decode failure degrades to an absent result
//! so the pipeline can fall back to synthesized geometry.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::route::RoutePoint;
use crate::scenarios::{AlternativeScenario, AvoidFeature, RoutePreference};

use super::{round_alt, round_coord, AlternativeGeometry, GeoPoint};

/// Public OpenRouteService directions endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Directions provider client.
pub struct DirectionsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    /// `[lng, lat]` pairs: diverge, extra waypoints, rejoin
    coordinates: Vec<[f64; 2]>,
    preference: RoutePreference,
    geometry: bool,
    format: &'static str,
    elevation: bool,
    instructions: bool,
    extra_info: [&'static str; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<RequestOptions>,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    avoid_features: Vec<AvoidFeature>,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<RouteFeature>,
}

#[derive(Debug, Deserialize)]
struct RouteFeature {
    geometry: FeatureGeometry,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    /// `[lng, lat, alt]` triples; altitude present when requested
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    summary: RouteSummary,
    #[serde(default)]
    ascent: f64,
    #[serde(default)]
    descent: f64,
    #[serde(default)]
    extras: RouteExtras,
}

#[derive(Debug, Default, Deserialize)]
struct RouteSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RouteExtras {
    #[serde(default)]
    surface: Option<serde_json::Value>,
    #[serde(default)]
    waytypes: Option<serde_json::Value>,
}

impl DirectionsClient {
    /// Client against the public endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_url(DEFAULT_BASE_URL, api_key)
    }

    /// Client against a custom endpoint (self-hosted or test server).
    pub fn with_url(base_url: &str, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Request an alternative between the scenario's endpoints.
    ///
    /// `None` on any failure; the caller decides whether to synthesize
    /// instead.
    pub async fn request_alternative(
        &self,
        scenario: &AlternativeScenario,
        diverge: &RoutePoint,
        rejoin: &RoutePoint,
    ) -> Option<AlternativeGeometry> {
        let request = build_request(scenario, diverge, rejoin);
        let url = format!("{}/{}", self.base_url, scenario.profile.as_str());

        let response = match self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Directions request failed for {}: {e}", scenario.kind);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Directions service returned {} for {}",
                response.status(),
                scenario.kind
            );
            return None;
        }

        let decoded: DirectionsResponse = match response.json().await {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Could not decode directions response for {}: {e}", scenario.kind);
                return None;
            }
        };

        let Some(feature) = decoded.features.into_iter().next() else {
            warn!("No route found for {}", scenario.kind);
            return None;
        };

        if feature.geometry.coordinates.iter().any(|c| c.len() < 2) {
            warn!("Malformed geometry in directions response for {}", scenario.kind);
            return None;
        }

        Some(normalize(feature))
    }
}

fn build_request(
    scenario: &AlternativeScenario,
    diverge: &RoutePoint,
    rejoin: &RoutePoint,
) -> DirectionsRequest {
    let mut coordinates = Vec::with_capacity(scenario.extra_waypoints.len() + 2);
    coordinates.push([diverge.longitude, diverge.latitude]);
    for waypoint in &scenario.extra_waypoints {
        coordinates.push([waypoint.lng, waypoint.lat]);
    }
    coordinates.push([rejoin.longitude, rejoin.latitude]);

    DirectionsRequest {
        coordinates,
        preference: scenario.preference,
        geometry: true,
        format: "geojson",
        elevation: true,
        instructions: false,
        extra_info: ["surface", "waytypes"],
        options: if scenario.avoid_features.is_empty() {
            None
        } else {
            Some(RequestOptions {
                avoid_features: scenario.avoid_features.clone(),
            })
        },
    }
}

/// Flatten a GeoJSON feature into the geometry model, rounding
/// coordinates to storage precision.
fn normalize(feature: RouteFeature) -> AlternativeGeometry {
    let coordinates = feature
        .geometry
        .coordinates
        .iter()
        .map(|c| GeoPoint {
            lat: round_coord(c[1]),
            lng: round_coord(c[0]),
            alt: round_alt(c.get(2).copied().unwrap_or(0.0)),
        })
        .collect();

    let properties = feature.properties;
    AlternativeGeometry {
        coordinates,
        distance_m: properties.summary.distance.round() as u64,
        duration_s: properties.summary.duration.round() as u64,
        ascent_m: properties.ascent.round() as u64,
        descent_m: properties.descent.round() as u64,
        is_synthesized: false,
        surface_info: properties.extras.surface,
        waytype_info: properties.extras.waytypes,
    }
}
