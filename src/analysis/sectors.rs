//! Sector bookkeeping: order and rank the annotated route sectors.

use crate::route::Sector;

/// Order sectors by start index. The sort is stable, so sectors sharing
/// a start keep their input order (named entries before gravel).
pub fn merge_by_start(mut sectors: Vec<Sector>) -> Vec<Sector> {
    sectors.sort_by_key(|s| s.start_index);
    sectors
}

/// The sector covering the most meters; earlier sectors win ties.
pub fn longest_sector(sectors: &[Sector]) -> Option<&Sector> {
    let mut best: Option<&Sector> = None;
    for sector in sectors {
        if best.map_or(true, |b| sector.length_meters > b.length_meters) {
            best = Some(sector);
        }
    }
    best
}
