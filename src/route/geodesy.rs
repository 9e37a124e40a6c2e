//! Great-circle distance math over raw WGS84 coordinates.

use super::RoutePoint;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}

/// Distance between two route points in kilometers.
pub fn point_distance_km(a: &RoutePoint, b: &RoutePoint) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Cumulative kilometers from the first point to every index.
///
/// Built in one O(n) pass; `table[0]` is always 0 and the values never
/// decrease, so later stages get constant-time "km from start" lookups.
pub fn cumulative_km(points: &[RoutePoint]) -> Vec<f64> {
    let mut table = vec![0.0; points.len()];
    for i in 1..points.len() {
        table[i] = table[i - 1] + point_distance_km(&points[i - 1], &points[i]);
    }
    table
}

/// Path length of a contiguous point slice in kilometers.
pub fn path_km(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| point_distance_km(&pair[0], &pair[1]))
        .sum()
}

/// Sum of positive elevation deltas across a point slice, in meters.
pub fn ascent_m(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].altitude - pair[0].altitude).max(0.0))
        .sum()
}
