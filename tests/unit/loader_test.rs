//! File-level loading tests: format detection, fixtures, error paths.

use std::path::Path;

use routescout::config::load_analysis_config;
use routescout::route::loader::{load_route, load_sectors, LoadError};
use routescout::route::RouteError;
use routescout::SectorKind;

const ROUTE_JSON: &str = "tests/fixtures/routes/sample_route.json";
const ROUTE_GPX: &str = "tests/fixtures/routes/sample_route.gpx";
const SEGMENTS_JSON: &str = "tests/fixtures/routes/sample_segments.json";

#[test]
fn test_load_json_route_fixture() {
    let route = load_route(Path::new(ROUTE_JSON), None).expect("Failed to load JSON route");

    assert_eq!(route.id(), "strade-bianche-gf");
    assert_eq!(route.name(), Some("Strade Bianche Gran Fondo"));
    assert_eq!(route.len(), 12);

    // Indices follow file order.
    for (position, point) in route.points().iter().enumerate() {
        assert_eq!(point.index, position);
    }

    // Cumulative table starts at zero and never decreases.
    assert_eq!(route.km_from_start(0), 0.0);
    for index in 1..route.len() {
        assert!(route.km_from_start(index) >= route.km_from_start(index - 1));
    }
    assert!(route.total_km() > 0.5);
}

#[test]
fn test_load_gpx_route_fixture() {
    let route = load_route(Path::new(ROUTE_GPX), None).expect("Failed to load GPX route");

    assert_eq!(route.id(), "sample_route");
    assert_eq!(route.name(), Some("Crete Senesi Loop"));
    assert_eq!(route.len(), 6);
    assert_eq!(route.points()[0].elapsed_ms, 0);
    assert_eq!(route.points()[1].elapsed_ms, 14_000);
    assert_eq!(route.points()[5].elapsed_ms, 80_000);
    assert!((route.points()[5].altitude - 344.0).abs() < 1e-9);
}

#[test]
fn test_route_id_override_applies_to_gpx() {
    let route =
        load_route(Path::new(ROUTE_GPX), Some("crete-loop")).expect("Failed to load GPX route");
    assert_eq!(route.id(), "crete-loop");
}

#[test]
fn test_embedded_id_beats_the_override() {
    let route =
        load_route(Path::new(ROUTE_JSON), Some("ignored")).expect("Failed to load JSON route");
    assert_eq!(route.id(), "strade-bianche-gf");
}

#[test]
fn test_missing_file_is_reported() {
    let result = load_route(Path::new("tests/fixtures/routes/no_such.json"), None);
    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("route.kml");
    std::fs::write(&path, "<kml/>").expect("Failed to write file");

    let result = load_route(&path, None);
    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}

#[test]
fn test_empty_route_file_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{"coordinates": []}"#).expect("Failed to write file");

    let result = load_route(&path, None);
    assert!(matches!(
        result,
        Err(LoadError::InvalidRoute(RouteError::Empty))
    ));
}

#[test]
fn test_load_sectors_fixture() {
    let sectors =
        load_sectors(Path::new(SEGMENTS_JSON), 11).expect("Failed to load segments");

    assert_eq!(sectors.len(), 3);
    assert_eq!(
        sectors
            .iter()
            .filter(|s| s.kind == SectorKind::Named)
            .count(),
        2
    );
    assert_eq!(
        sectors
            .iter()
            .filter(|s| s.kind == SectorKind::Gravel)
            .count(),
        1
    );

    let gravel = sectors
        .iter()
        .find(|s| s.kind == SectorKind::Gravel)
        .expect("gravel sector expected");
    assert_eq!(gravel.name, "gravel");
    assert_eq!(gravel.length_meters, 3600.0);
}

#[test]
fn test_load_sectors_drops_entries_beyond_the_route() {
    // Same file against a 6-point route: the Bagnaia sector (to_index
    // 10) and the gravel sector (to_index 7) no longer fit.
    let sectors = load_sectors(Path::new(SEGMENTS_JSON), 5).expect("Failed to load segments");

    assert_eq!(sectors.len(), 1);
    assert_eq!(sectors[0].name, "Vidritta");
}

#[test]
fn test_load_analysis_config_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("analysis.toml");
    std::fs::write(
        &path,
        "[climb]\nmin_gain_m = 120.0\n\n[flatness]\nwindow = 200\n",
    )
    .expect("Failed to write config");

    let config = load_analysis_config(&path).expect("Failed to load config");
    assert_eq!(config.climb.min_gain_m, 120.0);
    assert_eq!(config.climb.min_length, 50);
    assert_eq!(config.flatness.window, 200);
    assert_eq!(config.shortcut.stride, 100);
}
