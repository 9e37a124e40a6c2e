//! Tunable analysis parameters, loadable from a TOML file.
//!
//! Every knob has a default matching the detector behavior described in
//! the module docs, so a config file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Climb detector settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimbSettings {
    /// Minimum accumulated gain for a qualifying climb, meters
    pub min_gain_m: f64,
    /// Minimum climb length in indices
    pub min_length: usize,
}

impl Default for ClimbSettings {
    fn default() -> Self {
        Self {
            min_gain_m: 100.0,
            min_length: 50,
        }
    }
}

/// Shortcut detector settings. A smaller stride scans more index pairs
/// and may find closer crossings on dense recordings, at quadratic cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutSettings {
    /// Sampling stride over candidate indices
    pub stride: usize,
    /// Minimum index separation of a candidate pair
    pub min_index_gap: usize,
    /// Maximum index separation of a candidate pair
    pub max_index_gap: usize,
    /// Direct distance ceiling for a qualifying pair, kilometers
    pub max_crossing_km: f64,
}

impl Default for ShortcutSettings {
    fn default() -> Self {
        Self {
            stride: 100,
            min_index_gap: 400,
            max_index_gap: 1000,
            max_crossing_km: 3.0,
        }
    }
}

/// Flattest-window detector settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatnessSettings {
    /// Window length in indices
    pub window: usize,
    /// Sampling stride over window starts
    pub stride: usize,
}

impl Default for FlatnessSettings {
    fn default() -> Self {
        Self {
            window: 300,
            stride: 50,
        }
    }
}

/// All analysis tunables.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub climb: ClimbSettings,
    pub shortcut: ShortcutSettings,
    pub flatness: FlatnessSettings,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Load analysis settings from a TOML file. Missing sections and keys
/// keep their defaults.
pub fn load_analysis_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
