//! Provider outage behavior: when every directions request fails, the
//! pipeline still produces a full document from synthesized fallbacks.

use std::time::Duration;

use routescout::alternatives::provider::DirectionsClient;
use routescout::{AlternativesGenerator, AnalysisConfig, GeometrySource};

use crate::gran_fondo;

#[tokio::test]
async fn test_unreachable_provider_falls_back_to_synthesis() {
    // Nothing listens on the discard port, so every request fails fast.
    let client = DirectionsClient::with_url("http://127.0.0.1:9", "test-key".to_string())
        .with_timeout(Duration::from_millis(250));
    let generator = AlternativesGenerator::new(AnalysisConfig::default())
        .with_provider(client)
        .with_cooldown(Duration::ZERO);
    assert!(generator.has_provider());

    let route = gran_fondo::route();
    let document = generator.generate(&route, &gran_fondo::sectors()).await;

    // The document names the configured provider even though every
    // request degraded to a fallback.
    assert_eq!(document.generated_from, "OpenRouteService");
    assert_eq!(document.alternatives.len(), 5);

    for record in &document.alternatives {
        assert_eq!(record.source, GeometrySource::SynthesizedFallback);
        assert!(record.alternative.is_synthesized);
        assert_eq!(record.alternative.coordinates.len(), 31);
        assert_eq!(
            record.comparison.distance_delta_m,
            record.alternative.distance_m as i64 - record.original_segment.distance_m as i64
        );
    }
}

#[tokio::test]
async fn test_fallback_records_match_the_synthetic_run() {
    let client = DirectionsClient::with_url("http://127.0.0.1:9", "test-key".to_string())
        .with_timeout(Duration::from_millis(250));
    let with_provider = AlternativesGenerator::new(AnalysisConfig::default())
        .with_provider(client)
        .with_cooldown(Duration::ZERO);
    let without_provider = AlternativesGenerator::new(AnalysisConfig::default());

    let route = gran_fondo::route();
    let sectors = gran_fondo::sectors();
    let fallback = with_provider.generate(&route, &sectors).await;
    let synthetic = without_provider.generate(&route, &sectors).await;

    assert_eq!(fallback.alternatives.len(), synthetic.alternatives.len());
    for (a, b) in fallback.alternatives.iter().zip(&synthetic.alternatives) {
        // Same scenarios, same windows, same synthesized geometry; only
        // the provenance differs.
        assert_eq!(a.id, b.id);
        assert_eq!(a.diverge, b.diverge);
        assert_eq!(a.rejoin, b.rejoin);
        assert_eq!(a.alternative, b.alternative);
        assert_eq!(a.source, GeometrySource::SynthesizedFallback);
        assert_eq!(b.source, GeometrySource::Synthesized);
    }
}
