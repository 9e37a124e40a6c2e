//! Comparison records and the output document.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alternatives::{AlternativeGeometry, GeometrySource};
use crate::route::{geodesy, Route};
use crate::scenarios::{AlternativeScenario, ScenarioKind};

/// One end of an alternative, annotated on the recorded route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndpointAnnotation {
    pub index: usize,
    pub lat: f64,
    pub lng: f64,
    /// Kilometers from the route start, to 0.1 km
    pub km_from_start: f64,
}

/// Measured statistics of the replaced segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginalSegment {
    pub distance_m: u64,
    pub ascent_m: u64,
    pub duration_s: i64,
}

/// Signed deltas, alternative minus original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDeltas {
    pub distance_delta_m: i64,
    pub ascent_delta_m: i64,
    pub time_delta_s: i64,
}

/// One output record: a scenario, its alternative and the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub id: ScenarioKind,
    pub label: String,
    pub description: String,
    pub source: GeometrySource,
    pub diverge: EndpointAnnotation,
    pub rejoin: EndpointAnnotation,
    pub original_segment: OriginalSegment,
    pub alternative: AlternativeGeometry,
    pub comparison: ComparisonDeltas,
}

/// The complete output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativesDocument {
    pub route_id: String,
    /// Which geometry source the run was configured with
    pub generated_from: String,
    pub generated_at: DateTime<Utc>,
    pub alternatives: Vec<ComparisonRecord>,
}

/// Errors writing the output document.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the comparison record for one resolved scenario.
///
/// Original-segment figures are measured on the recorded points: pairwise
/// great-circle sum for distance, positive elevation deltas for ascent,
/// endpoint timestamps for duration. Km-from-start annotations are
/// constant-time lookups in the route's cumulative table.
pub fn build_comparison(
    route: &Route,
    scenario: &AlternativeScenario,
    alternative: AlternativeGeometry,
    source: GeometrySource,
) -> ComparisonRecord {
    let segment = route.segment(scenario.diverge_index, scenario.rejoin_index);
    let distance_m = (geodesy::path_km(segment) * 1000.0).round() as u64;
    let ascent_m = geodesy::ascent_m(segment).round() as u64;

    let diverge = &route.points()[scenario.diverge_index];
    let rejoin = &route.points()[scenario.rejoin_index];
    let duration_s = (rejoin.elapsed_ms - diverge.elapsed_ms) / 1000;

    let comparison = ComparisonDeltas {
        distance_delta_m: alternative.distance_m as i64 - distance_m as i64,
        ascent_delta_m: alternative.ascent_m as i64 - ascent_m as i64,
        time_delta_s: alternative.duration_s as i64 - duration_s,
    };

    ComparisonRecord {
        id: scenario.kind,
        label: scenario.label.clone(),
        description: scenario.description.clone(),
        source,
        diverge: EndpointAnnotation {
            index: diverge.index,
            lat: diverge.latitude,
            lng: diverge.longitude,
            km_from_start: round_km(route.km_from_start(scenario.diverge_index)),
        },
        rejoin: EndpointAnnotation {
            index: rejoin.index,
            lat: rejoin.latitude,
            lng: rejoin.longitude,
            km_from_start: round_km(route.km_from_start(scenario.rejoin_index)),
        },
        original_segment: OriginalSegment {
            distance_m,
            ascent_m,
            duration_s,
        },
        alternative,
        comparison,
    }
}

/// Serialize the document as pretty JSON and write it to `path`.
pub fn write_document(document: &AlternativesDocument, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| ReportError::Serialize(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
