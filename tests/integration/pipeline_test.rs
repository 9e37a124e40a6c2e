//! End-to-end pipeline tests: detection, selection, synthesis and the
//! output document, run over the shared gran fondo fixture.

use routescout::{
    AlternativesDocument, AlternativesGenerator, AnalysisConfig, GeometrySource, ScenarioKind,
};

use crate::gran_fondo;

#[tokio::test]
async fn test_full_pipeline_produces_the_complete_catalog() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());

    let document = generator.generate(&route, &gran_fondo::sectors()).await;

    assert_eq!(document.route_id, "gran-fondo");
    assert_eq!(document.generated_from, "synthetic geometry");

    let ids: Vec<ScenarioKind> = document.alternatives.iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec![
            ScenarioKind::Flatter,
            ScenarioKind::Shorter,
            ScenarioKind::Paved,
            ScenarioKind::Scenic,
            ScenarioKind::Sheltered,
        ]
    );

    // The climb sits at 600..=1000, the loop legs pass closest at
    // 1300/1700, the gravel sector spans 2100..=2400, the flattest
    // window opens the route and the summit is index 1000.
    let windows: Vec<(usize, usize)> = document
        .alternatives
        .iter()
        .map(|r| (r.diverge.index, r.rejoin.index))
        .collect();
    assert_eq!(
        windows,
        vec![(400, 1200), (1300, 1700), (1950, 2550), (50, 300), (700, 1300)]
    );
}

#[tokio::test]
async fn test_every_record_is_internally_consistent() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());

    let document = generator.generate(&route, &gran_fondo::sectors()).await;

    for record in &document.alternatives {
        assert_eq!(record.source, GeometrySource::Synthesized);
        assert!(record.alternative.is_synthesized);
        assert_eq!(record.alternative.coordinates.len(), 31);

        // The arc starts and ends on the recorded route.
        let first = record.alternative.coordinates[0];
        let last = record.alternative.coordinates[30];
        assert!((first.lat - record.diverge.lat).abs() < 1e-5);
        assert!((first.lng - record.diverge.lng).abs() < 1e-5);
        assert!((last.lat - record.rejoin.lat).abs() < 1e-5);
        assert!((last.lng - record.rejoin.lng).abs() < 1e-5);

        // Deltas are alternative minus original.
        assert_eq!(
            record.comparison.distance_delta_m,
            record.alternative.distance_m as i64 - record.original_segment.distance_m as i64
        );
        assert_eq!(
            record.comparison.time_delta_s,
            record.alternative.duration_s as i64 - record.original_segment.duration_s
        );

        // Synthesized geometry reports no climbing of its own, so the
        // ascent delta is exactly what the original segment gained.
        assert_eq!(record.alternative.ascent_m, 0);
        assert_eq!(
            record.comparison.ascent_delta_m,
            -(record.original_segment.ascent_m as i64)
        );

        // Duration comes from the estimated distance at cruising speed.
        let expected_duration = record.alternative.distance_m as f64 / 5.5;
        assert!((record.alternative.duration_s as f64 - expected_duration).abs() <= 1.0);

        // Km annotations are rounded to one decimal and ordered.
        for km in [record.diverge.km_from_start, record.rejoin.km_from_start] {
            assert_eq!((km * 10.0).round() / 10.0, km);
        }
        assert!(record.diverge.km_from_start <= record.rejoin.km_from_start);
    }
}

#[tokio::test]
async fn test_flatter_scenario_measures_the_climb() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());

    let document = generator.generate(&route, &[]).await;
    let flatter = document
        .alternatives
        .iter()
        .find(|r| r.id == ScenarioKind::Flatter)
        .expect("Failed to find the flatter record");

    // The replaced segment 400..=1200 carries the 12 m spike plus the
    // 200 m climb, and spans 800 points at 2.5 s apiece.
    assert_eq!(flatter.original_segment.ascent_m, 212);
    assert_eq!(flatter.original_segment.duration_s, 2000);
    assert_eq!(flatter.comparison.ascent_delta_m, -212);
    assert!(flatter.description.contains("200m gain"));

    let ratio =
        flatter.alternative.distance_m as f64 / flatter.original_segment.distance_m as f64;
    assert!((ratio - 1.15).abs() < 1e-3);
}

#[tokio::test]
async fn test_shorter_scenario_saves_distance() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());

    let document = generator.generate(&route, &[]).await;
    let shorter = document
        .alternatives
        .iter()
        .find(|r| r.id == ScenarioKind::Shorter)
        .expect("Failed to find the shorter record");

    assert_eq!(shorter.label, "Direct shortcut");
    assert!(shorter.description.contains("doubles back"));
    assert!(shorter.comparison.distance_delta_m < 0);
    assert!(shorter.comparison.time_delta_s < 0);

    let ratio =
        shorter.alternative.distance_m as f64 / shorter.original_segment.distance_m as f64;
    assert!((ratio - 0.70).abs() < 1e-3);
}

#[tokio::test]
async fn test_paved_scenario_targets_the_gravel_sector() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());

    let document = generator.generate(&route, &gran_fondo::sectors()).await;
    let paved = document
        .alternatives
        .iter()
        .find(|r| r.id == ScenarioKind::Paved)
        .expect("Failed to find the paved record");

    assert_eq!(paved.label, "Paved bypass");
    assert!(paved.description.contains("Monte Sante Marie"));
    assert!(paved.description.contains("11.5km"));
    assert_eq!(paved.diverge.index, 1950);
    assert_eq!(paved.rejoin.index, 2550);
}

#[tokio::test]
async fn test_document_survives_a_disk_round_trip() {
    let route = gran_fondo::route();
    let generator = AlternativesGenerator::new(AnalysisConfig::default());
    let document = generator.generate(&route, &gran_fondo::sectors()).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("route-alternatives.json");
    routescout::report::write_document(&document, &path).expect("Failed to write document");

    let json = std::fs::read_to_string(&path).expect("Failed to read document back");
    let back: AlternativesDocument =
        serde_json::from_str(&json).expect("Failed to parse document");

    assert_eq!(back.route_id, document.route_id);
    assert_eq!(back.alternatives.len(), 5);
    assert_eq!(back.alternatives[0].id, ScenarioKind::Flatter);

    // Spot-check the wire names on the raw value as well.
    let value: serde_json::Value =
        serde_json::from_str(&json).expect("Failed to parse raw value");
    assert_eq!(value["alternatives"][0]["id"], "flatter");
    assert_eq!(value["alternatives"][0]["source"], "synthesized");
    assert_eq!(
        value["alternatives"][0]["alternative"]["coordinates"]
            .as_array()
            .map(|a| a.len()),
        Some(31)
    );
    assert!(value["generated_at"].is_string());
}
