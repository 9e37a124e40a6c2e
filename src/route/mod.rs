//! Route data model shared by every analysis stage.
//!
//! A route is an ordered polyline with elevation and elapsed-time data.
//! The point sequence and its cumulative distance table are built once at
//! load time and read-only afterwards; detectors, the scenario selector
//! and the comparison builder all borrow the same data.

pub mod geodesy;
pub mod loader;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recorded point along the route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// GPS latitude in degrees
    pub latitude: f64,
    /// GPS longitude in degrees
    pub longitude: f64,
    /// Elevation in meters
    pub altitude: f64,
    /// Milliseconds elapsed since the route start
    pub elapsed_ms: i64,
    /// Position in the point sequence
    pub index: usize,
}

/// Where a sector annotation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorKind {
    /// Listed under the route's named sectors
    Named,
    /// Listed under the route's gravel sectors
    Gravel,
}

/// An annotated sub-range of the route (gravel stretch, famous sector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// First point index covered by the sector
    pub start_index: usize,
    /// Last point index covered by the sector
    pub end_index: usize,
    /// Display name
    pub name: String,
    /// Which annotation list the sector came from
    pub kind: SectorKind,
    /// Sector length in meters
    pub length_meters: f64,
}

/// A complete recorded route with its precomputed distance table.
///
/// Construction validates the sequence-index invariant and computes the
/// cumulative kilometer table once; every later "km from start" query is
/// a constant-time lookup.
#[derive(Debug, Clone)]
pub struct Route {
    id: String,
    name: Option<String>,
    points: Vec<RoutePoint>,
    cumulative_km: Vec<f64>,
}

impl Route {
    /// Build a route from an ordered point sequence.
    pub fn new(
        id: String,
        name: Option<String>,
        points: Vec<RoutePoint>,
    ) -> Result<Self, RouteError> {
        if points.is_empty() {
            return Err(RouteError::Empty);
        }
        for (position, point) in points.iter().enumerate() {
            if point.index != position {
                return Err(RouteError::IndexMismatch {
                    expected: position,
                    found: point.index,
                });
            }
        }

        let cumulative_km = geodesy::cumulative_km(&points);
        Ok(Self {
            id,
            name,
            points,
            cumulative_km,
        })
    }

    /// Route identifier used in the output document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, when the source file carried one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The ordered point sequence.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction rejects empty routes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest valid point index.
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Kilometers from the route start to `index`, in O(1).
    pub fn km_from_start(&self, index: usize) -> f64 {
        self.cumulative_km[index]
    }

    /// Total route length in kilometers.
    pub fn total_km(&self) -> f64 {
        self.cumulative_km.last().copied().unwrap_or(0.0)
    }

    /// The inclusive point range between two indices.
    pub fn segment(&self, from_index: usize, to_index: usize) -> &[RoutePoint] {
        &self.points[from_index..=to_index]
    }
}

/// Errors in the route data itself.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route has no points")]
    Empty,

    #[error("point at position {expected} carries sequence index {found}")]
    IndexMismatch { expected: usize, found: usize },
}
