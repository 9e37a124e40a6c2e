//! Route feature detectors.
//!
//! Each detector is a pure scan over the read-only point sequence (or the
//! sector list) that returns index ranges of interest. Nothing in this
//! module mutates the route or talks to the network.

pub mod climbs;
pub mod exposure;
pub mod flatness;
pub mod sectors;
pub mod shortcuts;

pub use climbs::{biggest_climb, detect_climbs, ClimbSegment};
pub use exposure::highest_point;
pub use flatness::{flattest_window, FlatWindow};
pub use sectors::{longest_sector, merge_by_start};
pub use shortcuts::{find_shortcut, Shortcut};
