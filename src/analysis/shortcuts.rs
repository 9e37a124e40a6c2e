//! Shortcut detection: find where the route loops back near itself.

use crate::config::ShortcutSettings;
use crate::route::{geodesy, RoutePoint};

/// A candidate shortcut: two route indices that sit geographically close
/// while being far apart along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shortcut {
    pub from_index: usize,
    pub to_index: usize,
    /// Direct distance between the two points in kilometers
    pub crossing_km: f64,
}

/// Search the middle third of the route for the closest pair of indices
/// at least `min_index_gap` and at most `max_index_gap` apart.
///
/// Pairs are sampled at `stride` to keep the scan tractable on long
/// recordings; only pairs closer than `max_crossing_km` qualify, and the
/// first pair at the minimum distance wins.
pub fn find_shortcut(points: &[RoutePoint], settings: &ShortcutSettings) -> Option<Shortcut> {
    let mid_start = points.len() / 3;
    let mid_end = 2 * points.len() / 3;
    let stride = settings.stride.max(1);

    let mut best: Option<Shortcut> = None;

    let mut i = mid_start;
    while i < mid_end {
        let mut j = i + settings.min_index_gap;
        let j_end = (i + settings.max_index_gap).min(mid_end);
        while j < j_end {
            let crossing_km = geodesy::point_distance_km(&points[i], &points[j]);
            if crossing_km < settings.max_crossing_km
                && best.map_or(true, |b| crossing_km < b.crossing_km)
            {
                best = Some(Shortcut {
                    from_index: i,
                    to_index: j,
                    crossing_km,
                });
            }
            j += stride;
        }
        i += stride;
    }

    best
}
