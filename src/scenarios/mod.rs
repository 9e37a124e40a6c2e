//! Alternative-route scenario catalog.
//!
//! A scenario names where an alternative diverges from and rejoins the
//! recorded route, plus the routing preferences the alternative must
//! honor. The catalog is fixed: up to five kinds, each produced only
//! when its prerequisite route feature exists.

pub mod selector;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five alternative kinds, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Bypass the biggest climb through lower terrain
    Flatter,
    /// Cut across where the route loops back near itself
    Shorter,
    /// Ride around the longest annotated sector on surfaced roads
    Paved,
    /// Trade a flat main-road stretch for a hillier detour
    Scenic,
    /// Drop off the most exposed high ground
    Sheltered,
}

impl ScenarioKind {
    /// Stable identifier used in output records and logs.
    pub fn identifier(self) -> &'static str {
        match self {
            ScenarioKind::Flatter => "flatter",
            ScenarioKind::Shorter => "shorter",
            ScenarioKind::Paved => "paved",
            ScenarioKind::Scenic => "scenic",
            ScenarioKind::Sheltered => "sheltered",
        }
    }

    /// Estimated length of a synthesized alternative relative to the
    /// segment it replaces.
    pub fn distance_multiplier(self) -> f64 {
        match self {
            ScenarioKind::Flatter => 1.15,
            ScenarioKind::Shorter => 0.70,
            ScenarioKind::Paved => 1.05,
            ScenarioKind::Scenic => 1.20,
            ScenarioKind::Sheltered => 1.10,
        }
    }

    /// Whether a synthesized profile pulls altitudes toward the endpoint
    /// average instead of interpolating them.
    pub fn flattens_profile(self) -> bool {
        matches!(self, ScenarioKind::Flatter | ScenarioKind::Sheltered)
    }

    /// Lateral bulge of a synthesized arc, in degrees.
    pub fn arc_offset_deg(self) -> f64 {
        match self {
            ScenarioKind::Shorter => 0.005,
            _ => 0.015,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Routing preference passed to the directions provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    Fastest,
    Shortest,
    Recommended,
}

/// Cycling profile selecting the provider's routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclingProfile {
    #[serde(rename = "cycling-regular")]
    Regular,
    #[serde(rename = "cycling-road")]
    Road,
}

impl CyclingProfile {
    /// URL path segment for the provider request.
    pub fn as_str(self) -> &'static str {
        match self {
            CyclingProfile::Regular => "cycling-regular",
            CyclingProfile::Road => "cycling-road",
        }
    }
}

/// Road features an alternative should avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidFeature {
    Ferries,
    Fords,
    Steps,
    Unpaved,
}

/// A bare coordinate used for extra routing waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

/// Where and why an alternative diverges from the recorded route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScenario {
    pub kind: ScenarioKind,
    /// Short display label ("Valley bypass")
    pub label: String,
    /// Route index where the alternative leaves the recorded line
    pub diverge_index: usize,
    /// Route index where the alternative comes back
    pub rejoin_index: usize,
    /// Road features the provider must route around
    pub avoid_features: Vec<AvoidFeature>,
    pub preference: RoutePreference,
    pub profile: CyclingProfile,
    /// One-sentence rider-facing explanation
    pub description: String,
    /// Extra via-points inserted between the endpoints, in order
    pub extra_waypoints: Vec<Waypoint>,
}
