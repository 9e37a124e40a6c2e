//! RouteScout library: cycling route alternative generation.
//!
//! Analyzes a recorded route (polyline with elevation and timing) plus
//! its sector annotations, picks diverge/rejoin windows around notable
//! features (the biggest climb, loop-backs, the longest gravel sector,
//! exposed high ground), and resolves each window into an alternative
//! geometry via a directions provider or local synthesis, with a
//! structured original-versus-alternative comparison.

pub mod alternatives;
pub mod analysis;
pub mod config;
pub mod generator;
pub mod report;
pub mod route;
pub mod scenarios;

// Re-export commonly used types
pub use alternatives::{AlternativeGeometry, GeometrySource};
pub use config::AnalysisConfig;
pub use generator::AlternativesGenerator;
pub use report::{AlternativesDocument, ComparisonRecord};
pub use route::{Route, RoutePoint, Sector, SectorKind};
pub use scenarios::{AlternativeScenario, ScenarioKind};
