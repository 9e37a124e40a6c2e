//! Synthesized alternative geometry.
//!
//! Without a directions provider (or after a failed request) an
//! alternative becomes a smooth lateral arc between the diverge and
//! rejoin points: linear interpolation plus a sine bulge along the
//! perpendicular. Both endpoints stay exact while the midpoint swings
//! widest.

use glam::DVec2;

use crate::route::RoutePoint;
use crate::scenarios::AlternativeScenario;

use super::{round_alt, round_coord, AlternativeGeometry, GeoPoint};

/// Interpolation steps along the arc; the arc has one more coordinate.
const ARC_STEPS: usize = 30;

/// Assumed cruising speed for duration estimates, meters per second.
const CRUISE_SPEED_MPS: f64 = 5.5;

/// Fraction of the deviation from the endpoint altitude average that a
/// flattened profile keeps.
const FLATTEN_RESIDUAL: f64 = 0.3;

/// Build the synthetic arc for a scenario.
///
/// `original_km` is the length of the replaced segment; the estimated
/// distance scales it by the scenario kind's multiplier, and the
/// estimated duration assumes a constant cruising speed. Ascent and
/// descent are reported as zero: a synthetic arc has no measured
/// elevation profile.
pub fn synthesize_arc(
    scenario: &AlternativeScenario,
    diverge: &RoutePoint,
    rejoin: &RoutePoint,
    original_km: f64,
) -> AlternativeGeometry {
    let delta = DVec2::new(
        rejoin.latitude - diverge.latitude,
        rejoin.longitude - diverge.longitude,
    );
    let length = delta.length();
    if length == 0.0 {
        return AlternativeGeometry::degenerate();
    }

    let perpendicular = delta.perp() / length;
    let offset = scenario.kind.arc_offset_deg();
    let mid_altitude = (diverge.altitude + rejoin.altitude) / 2.0;

    let mut coordinates = Vec::with_capacity(ARC_STEPS + 1);
    for step in 0..=ARC_STEPS {
        let fraction = step as f64 / ARC_STEPS as f64;
        let bulge = (fraction * std::f64::consts::PI).sin() * offset;

        let lat = diverge.latitude + fraction * delta.x + bulge * perpendicular.x;
        let lng = diverge.longitude + fraction * delta.y + bulge * perpendicular.y;

        let mut alt = diverge.altitude + fraction * (rejoin.altitude - diverge.altitude);
        if scenario.kind.flattens_profile() {
            alt = mid_altitude + (alt - mid_altitude) * FLATTEN_RESIDUAL;
        }

        coordinates.push(GeoPoint {
            lat: round_coord(lat),
            lng: round_coord(lng),
            alt: round_alt(alt),
        });
    }

    let estimated_km = original_km * scenario.kind.distance_multiplier();
    AlternativeGeometry {
        coordinates,
        distance_m: (estimated_km * 1000.0).round() as u64,
        duration_s: (estimated_km * 1000.0 / CRUISE_SPEED_MPS).round() as u64,
        ascent_m: 0,
        descent_m: 0,
        is_synthesized: true,
        surface_info: None,
        waytype_info: None,
    }
}
