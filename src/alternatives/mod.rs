//! Alternative geometry model and its provenance.

pub mod provider;
pub mod synthesis;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coordinate on an alternative path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    /// Elevation in meters
    pub alt: f64,
}

/// Which machinery produced an alternative's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometrySource {
    /// Routed by the external directions provider
    Provider,
    /// Synthesized locally, no provider configured
    Synthesized,
    /// Synthesized locally after a provider request failed
    SynthesizedFallback,
}

impl GeometrySource {
    /// True for both synthesized variants.
    pub fn is_synthesized(self) -> bool {
        !matches!(self, GeometrySource::Provider)
    }
}

impl fmt::Display for GeometrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GeometrySource::Provider => "provider",
            GeometrySource::Synthesized => "synthesized",
            GeometrySource::SynthesizedFallback => "synthesized (fallback)",
        };
        f.write_str(text)
    }
}

/// An alternative path with its summary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeGeometry {
    /// Path coordinates from diverge to rejoin
    pub coordinates: Vec<GeoPoint>,
    /// Total length in meters
    pub distance_m: u64,
    /// Estimated riding time in seconds
    pub duration_s: u64,
    /// Total climbing in meters
    pub ascent_m: u64,
    /// Total descending in meters
    pub descent_m: u64,
    /// True when the geometry was synthesized rather than routed
    pub is_synthesized: bool,
    /// Provider surface breakdown, when returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_info: Option<serde_json::Value>,
    /// Provider way-type breakdown, when returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waytype_info: Option<serde_json::Value>,
}

impl AlternativeGeometry {
    /// An empty synthesized geometry for degenerate windows.
    pub fn degenerate() -> Self {
        Self {
            coordinates: Vec::new(),
            distance_m: 0,
            duration_s: 0,
            ascent_m: 0,
            descent_m: 0,
            is_synthesized: true,
            surface_info: None,
            waytype_info: None,
        }
    }
}

/// Round to coordinate precision, six decimal places (about 0.1 m).
pub(crate) fn round_coord(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Round to altitude precision, one decimal place.
pub(crate) fn round_alt(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
