//! Wind-exposure proxy: the highest point of the route.

use crate::route::RoutePoint;

/// Index of the globally highest point, or `None` for an empty sequence.
/// The first index wins ties.
pub fn highest_point(points: &[RoutePoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        if best.map_or(true, |(_, altitude)| point.altitude > altitude) {
            best = Some((index, point.altitude));
        }
    }
    best.map(|(index, _)| index)
}
