//! Scenario selection: turn detected route features into the catalog of
//! concrete alternatives.

use tracing::warn;

use crate::analysis;
use crate::config::AnalysisConfig;
use crate::route::{Route, Sector};

use super::{AlternativeScenario, CyclingProfile, RoutePreference, ScenarioKind};

/// Indices bracketed around the biggest climb.
const CLIMB_MARGIN: usize = 200;
/// Indices bracketed around the longest annotated sector.
const SECTOR_MARGIN: usize = 150;
/// Indices bracketed around the highest point.
const EXPOSURE_MARGIN: usize = 300;
/// A scenic detour never diverges before this index.
const SCENIC_MIN_DIVERGE: usize = 50;

/// Build the scenario catalog for a route.
///
/// Each scenario appears only when its prerequisite feature exists, in
/// the fixed order flatter, shorter, paved, scenic, sheltered. Every
/// returned scenario satisfies `diverge_index < rejoin_index <= last`;
/// candidates whose window collapses on a short route are dropped with a
/// warning.
pub fn select_scenarios(
    route: &Route,
    sectors: &[Sector],
    config: &AnalysisConfig,
) -> Vec<AlternativeScenario> {
    let points = route.points();
    let last = route.last_index();
    let merged = analysis::merge_by_start(sectors.to_vec());

    let mut scenarios = Vec::new();

    let climbs = analysis::detect_climbs(points, config.climb.min_gain_m, config.climb.min_length);
    if let Some(climb) = analysis::biggest_climb(&climbs) {
        push_scenario(
            &mut scenarios,
            last,
            AlternativeScenario {
                kind: ScenarioKind::Flatter,
                label: "Valley bypass".to_string(),
                diverge_index: climb.start_index.saturating_sub(CLIMB_MARGIN),
                rejoin_index: (climb.end_index + CLIMB_MARGIN).min(last),
                avoid_features: Vec::new(),
                preference: RoutePreference::Recommended,
                profile: CyclingProfile::Regular,
                description: format!(
                    "Avoids the biggest climb ({:.0}m gain). \
                     Routes through the valley on lower-gradient roads.",
                    climb.gain_m
                ),
                extra_waypoints: Vec::new(),
            },
        );
    }

    match analysis::find_shortcut(points, &config.shortcut) {
        Some(shortcut) => push_scenario(
            &mut scenarios,
            last,
            AlternativeScenario {
                kind: ScenarioKind::Shorter,
                label: "Direct shortcut".to_string(),
                diverge_index: shortcut.from_index,
                rejoin_index: shortcut.to_index,
                avoid_features: Vec::new(),
                preference: RoutePreference::Shortest,
                profile: CyclingProfile::Regular,
                description: "Cuts across the loop where the route doubles back. \
                              Saves distance at the cost of skipping mid-route sectors."
                    .to_string(),
                extra_waypoints: Vec::new(),
            },
        ),
        None => push_scenario(
            &mut scenarios,
            last,
            AlternativeScenario {
                kind: ScenarioKind::Shorter,
                label: "Direct shortcut".to_string(),
                diverge_index: points.len() / 3,
                rejoin_index: 2 * points.len() / 3,
                avoid_features: Vec::new(),
                preference: RoutePreference::Shortest,
                profile: CyclingProfile::Regular,
                description: "Takes the most direct cycling route between these points."
                    .to_string(),
                extra_waypoints: Vec::new(),
            },
        ),
    }

    if let Some(sector) = analysis::longest_sector(&merged) {
        push_scenario(
            &mut scenarios,
            last,
            AlternativeScenario {
                kind: ScenarioKind::Paved,
                label: "Paved bypass".to_string(),
                diverge_index: sector.start_index.saturating_sub(SECTOR_MARGIN),
                rejoin_index: (sector.end_index + SECTOR_MARGIN).min(last),
                // The road profile inherently prefers paved surfaces.
                avoid_features: Vec::new(),
                preference: RoutePreference::Recommended,
                profile: CyclingProfile::Road,
                description: format!(
                    "Avoids the {} sector ({:.1}km unpaved). Uses parallel paved roads.",
                    sector.name,
                    sector.length_meters / 1000.0
                ),
                extra_waypoints: Vec::new(),
            },
        );
    }

    let flat_start = analysis::flattest_window(points, config.flatness.window, config.flatness.stride)
        .map_or(0, |w| w.start_index);
    push_scenario(
        &mut scenarios,
        last,
        AlternativeScenario {
            kind: ScenarioKind::Scenic,
            label: "Hilltop village detour".to_string(),
            diverge_index: flat_start.max(SCENIC_MIN_DIVERGE),
            rejoin_index: (flat_start + config.flatness.window).min(last),
            avoid_features: Vec::new(),
            preference: RoutePreference::Recommended,
            profile: CyclingProfile::Regular,
            description: "Detours through hilltop villages and viewpoints \
                          instead of the main road section."
                .to_string(),
            extra_waypoints: Vec::new(),
        },
    );

    if let Some(peak) = analysis::highest_point(points) {
        push_scenario(
            &mut scenarios,
            last,
            AlternativeScenario {
                kind: ScenarioKind::Sheltered,
                label: "Valley shelter route".to_string(),
                diverge_index: peak.saturating_sub(EXPOSURE_MARGIN),
                rejoin_index: (peak + EXPOSURE_MARGIN).min(last),
                avoid_features: Vec::new(),
                preference: RoutePreference::Recommended,
                profile: CyclingProfile::Regular,
                description: "Routes through the lower valley to avoid the exposed \
                              ridge section. Less wind, more tree cover."
                    .to_string(),
                extra_waypoints: Vec::new(),
            },
        );
    }

    scenarios
}

fn push_scenario(out: &mut Vec<AlternativeScenario>, last: usize, scenario: AlternativeScenario) {
    if scenario.diverge_index < scenario.rejoin_index && scenario.rejoin_index <= last {
        out.push(scenario);
    } else {
        warn!(
            "Skipping {} scenario: window {}..{} collapses on this route",
            scenario.kind, scenario.diverge_index, scenario.rejoin_index
        );
    }
}
