//! Sustained climb detection.

use crate::route::RoutePoint;

/// Descents of at most this depth are treated as noise inside one climb.
const DIP_TOLERANCE_M: f64 = 10.0;

/// A detected climb: an inclusive index range and its accumulated gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbSegment {
    pub start_index: usize,
    pub end_index: usize,
    pub gain_m: f64,
}

/// Scan the point sequence for sustained climbs.
///
/// Positive elevation deltas accumulate into the current run. Dips up to
/// [`DIP_TOLERANCE_M`] neither add gain nor end the run; a deeper drop
/// ends it. A run qualifies when it accumulated at least `min_gain_m`
/// over at least `min_length` indices. Qualifying climbs never overlap:
/// the scan resumes right after a qualifying run, and one index further
/// on after a disqualified one.
pub fn detect_climbs(
    points: &[RoutePoint],
    min_gain_m: f64,
    min_length: usize,
) -> Vec<ClimbSegment> {
    let mut climbs = Vec::new();

    let mut i = 0;
    while i + min_length < points.len() {
        let mut gain = 0.0;
        let mut j = i;
        while j + 1 < points.len() {
            let delta = points[j + 1].altitude - points[j].altitude;
            if delta > 0.0 {
                gain += delta;
            } else if -delta > DIP_TOLERANCE_M {
                break;
            }
            j += 1;
        }

        if gain >= min_gain_m && j - i >= min_length {
            climbs.push(ClimbSegment {
                start_index: i,
                end_index: j,
                gain_m: gain,
            });
            i = j + 1;
        } else {
            i += 1;
        }
    }

    climbs
}

/// The climb with the greatest accumulated gain; earlier climbs win ties.
pub fn biggest_climb(climbs: &[ClimbSegment]) -> Option<&ClimbSegment> {
    let mut best: Option<&ClimbSegment> = None;
    for climb in climbs {
        if best.map_or(true, |b| climb.gain_m > b.gain_m) {
            best = Some(climb);
        }
    }
    best
}
