//! Flattest-stretch detection over the opening third of the route.

use crate::route::RoutePoint;

/// A candidate flat stretch: a window start and its altitude span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatWindow {
    pub start_index: usize,
    /// Max minus min altitude inside the window, meters
    pub altitude_span_m: f64,
}

/// Slide a `window`-point window at `stride` through the first third of
/// the route and return the start minimizing the altitude span.
///
/// `None` when no full window fits in the first third; ties keep the
/// earliest window.
pub fn flattest_window(points: &[RoutePoint], window: usize, stride: usize) -> Option<FlatWindow> {
    if window == 0 {
        return None;
    }
    let first_third = points.len() / 3;
    let stride = stride.max(1);

    let mut best: Option<FlatWindow> = None;

    let mut start = 0;
    while start + window < first_third {
        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;
        for point in &points[start..start + window] {
            lowest = lowest.min(point.altitude);
            highest = highest.max(point.altitude);
        }

        let altitude_span_m = highest - lowest;
        if best.map_or(true, |b| altitude_span_m < b.altitude_span_m) {
            best = Some(FlatWindow {
                start_index: start,
                altitude_span_m,
            });
        }
        start += stride;
    }

    best
}
