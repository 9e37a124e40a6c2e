//! Input adapters for route files and sector annotation files.
//!
//! Routes arrive either as a JSON coordinate list or as a GPX track;
//! sector annotations are always JSON. Format is picked by extension.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use super::{Route, RouteError, RoutePoint, Sector, SectorKind};

/// Raw route file shape: `{ "id"?, "name"?, "coordinates": [...] }`.
#[derive(Debug, Deserialize)]
struct RouteFile {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    coordinates: Vec<RawCoordinate>,
}

#[derive(Debug, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
    #[serde(default)]
    alt: f64,
    /// Milliseconds since the route start
    #[serde(default)]
    t: i64,
}

/// Raw sector annotation file shape.
#[derive(Debug, Default, Deserialize)]
struct SegmentsFile {
    #[serde(default)]
    named_sectors: Vec<RawSector>,
    #[serde(default)]
    gravel_sectors: Vec<RawSector>,
}

#[derive(Debug, Deserialize)]
struct RawSector {
    from_index: usize,
    to_index: usize,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    distance_m: f64,
}

/// Errors loading route or sector files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("unsupported route format: {0}")]
    UnsupportedFormat(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a route from a `.json` coordinate list or a `.gpx` track.
///
/// The route identifier comes from the file itself when it embeds one,
/// then from `id_override`, then from the file stem.
pub fn load_route(path: &Path, id_override: Option<&str>) -> Result<Route, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let fallback_id = id_override
        .map(str::to_string)
        .unwrap_or_else(|| file_stem(path));

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let content = std::fs::read_to_string(path)?;
            parse_route_json(&content, &fallback_id)
        }
        "gpx" => {
            let data = std::fs::read(path)?;
            parse_route_gpx(&data, &fallback_id)
        }
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a JSON coordinate-list route.
pub fn parse_route_json(content: &str, fallback_id: &str) -> Result<Route, LoadError> {
    let file: RouteFile = serde_json::from_str(content)
        .map_err(|e| LoadError::ParseError(format!("route JSON: {e}")))?;

    let points: Vec<RoutePoint> = file
        .coordinates
        .iter()
        .enumerate()
        .map(|(index, c)| RoutePoint {
            latitude: c.lat,
            longitude: c.lng,
            altitude: c.alt,
            elapsed_ms: c.t,
            index,
        })
        .collect();

    let id = file.id.unwrap_or_else(|| fallback_id.to_string());
    Ok(Route::new(id, file.name, points)?)
}

/// Parse a GPX document, preferring track points, then route points,
/// then bare waypoints.
pub fn parse_route_gpx(data: &[u8], fallback_id: &str) -> Result<Route, LoadError> {
    let document =
        gpx::read(data).map_err(|e| LoadError::ParseError(format!("GPX parse error: {e}")))?;

    let mut waypoints: Vec<&gpx::Waypoint> = document
        .tracks
        .iter()
        .flat_map(|t| t.segments.iter())
        .flat_map(|s| s.points.iter())
        .collect();

    if waypoints.is_empty() {
        waypoints = document.routes.iter().flat_map(|r| r.points.iter()).collect();
    }
    if waypoints.is_empty() {
        waypoints = document.waypoints.iter().collect();
    }

    let name = document
        .metadata
        .as_ref()
        .and_then(|m| m.name.clone())
        .or_else(|| document.tracks.first().and_then(|t| t.name.clone()));

    let mut base_time: Option<DateTime<Utc>> = None;
    let mut last_elapsed = 0i64;
    let mut missing_times = 0usize;
    let mut missing_elevations = 0usize;

    let mut points = Vec::with_capacity(waypoints.len());
    for waypoint in waypoints {
        let index = points.len();

        let elapsed_ms = match waypoint_time(waypoint) {
            Some(time) => {
                let base = *base_time.get_or_insert(time);
                (time - base).num_milliseconds()
            }
            None => {
                missing_times += 1;
                last_elapsed
            }
        };
        last_elapsed = elapsed_ms;

        let altitude = match waypoint.elevation {
            Some(elevation) => elevation,
            None => {
                missing_elevations += 1;
                0.0
            }
        };

        let position = waypoint.point();
        points.push(RoutePoint {
            latitude: position.y(),
            longitude: position.x(),
            altitude,
            elapsed_ms,
            index,
        });
    }

    if missing_times > 0 {
        warn!(
            "{missing_times} GPX points have no timestamp; elapsed times are carried forward"
        );
    }
    if missing_elevations > 0 {
        warn!("{missing_elevations} GPX points have no elevation; treated as 0 m");
    }

    Ok(Route::new(fallback_id.to_string(), name, points)?)
}

/// Load and validate sector annotations for a route whose largest point
/// index is `last_index`.
pub fn load_sectors(path: &Path, last_index: usize) -> Result<Vec<Sector>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sectors(&content, last_index)
}

/// Parse sector annotations, dropping entries that do not fit the route.
pub fn parse_sectors(content: &str, last_index: usize) -> Result<Vec<Sector>, LoadError> {
    let file: SegmentsFile = serde_json::from_str(content)
        .map_err(|e| LoadError::ParseError(format!("segments JSON: {e}")))?;

    let mut sectors = Vec::with_capacity(file.named_sectors.len() + file.gravel_sectors.len());
    for (raw, kind) in file
        .named_sectors
        .into_iter()
        .map(|raw| (raw, SectorKind::Named))
        .chain(
            file.gravel_sectors
                .into_iter()
                .map(|raw| (raw, SectorKind::Gravel)),
        )
    {
        if raw.from_index > raw.to_index {
            warn!(
                "Skipping reversed sector {}..{}",
                raw.from_index, raw.to_index
            );
            continue;
        }
        if raw.to_index > last_index {
            warn!(
                "Skipping sector {}..{}: route ends at index {last_index}",
                raw.from_index, raw.to_index
            );
            continue;
        }

        sectors.push(Sector {
            start_index: raw.from_index,
            end_index: raw.to_index,
            name: raw.name.unwrap_or_else(|| "gravel".to_string()),
            kind,
            length_meters: raw.distance_m,
        });
    }

    Ok(sectors)
}

fn waypoint_time(waypoint: &gpx::Waypoint) -> Option<DateTime<Utc>> {
    waypoint
        .time
        .and_then(|t| t.format().ok())
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("route")
        .to_string()
}
