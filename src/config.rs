//! # Configuration
//!
//! Drill settings come from three layers, later ones winning:
//! built-in defaults, an optional YAML file, then command-line flags.
//!
//! ## File Format
//! ```yaml
//! tempo: 60          # beats per minute
//! mode: chord        # note | string | chord
//! color: false
//! beats-per-note: 8  # dots printed between announcements
//! string-pool: 5     # string mode picks among the lowest N strings
//! seed: 1234         # repeatable sessions
//! ```
//!
//! Every key is optional.

use crate::drill::DrillMode;
use crate::error::DrillError;
use crate::pitch::STRING_COUNT;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TEMPO: f64 = 40.0;
pub const DEFAULT_BEATS_PER_NOTE: u32 = 12;

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tempo: Option<f64>,
    pub mode: Option<DrillMode>,
    pub color: Option<bool>,
    pub beats_per_note: Option<u32>,
    pub string_pool: Option<usize>,
    pub seed: Option<u64>,
}

/// Validated drill settings
#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    pub tempo: f64,
    pub mode: DrillMode,
    pub color: bool,
    pub beats_per_note: u32,
    pub string_pool: usize,
    pub seed: Option<u64>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            mode: DrillMode::Note,
            color: true,
            beats_per_note: DEFAULT_BEATS_PER_NOTE,
            string_pool: STRING_COUNT,
            seed: None,
        }
    }
}

impl DrillConfig {
    /// Parse YAML config content on top of the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, DrillError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_str(content)
            .map_err(|e| DrillError::InvalidConfig(e.to_string()))?;
        let mut config = Self::default();
        config.apply(raw)?;
        Ok(config)
    }

    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, DrillError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            DrillError::InvalidConfig(msg) => {
                DrillError::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Overlay any values present in `raw`, validating each one.
    pub fn apply(&mut self, raw: RawConfig) -> Result<(), DrillError> {
        if let Some(tempo) = raw.tempo {
            self.tempo = validate_tempo(tempo)?;
        }
        if let Some(mode) = raw.mode {
            self.mode = mode;
        }
        if let Some(color) = raw.color {
            self.color = color;
        }
        if let Some(beats) = raw.beats_per_note {
            if beats == 0 {
                return Err(DrillError::InvalidConfig(
                    "beats-per-note must be at least 1".to_string(),
                ));
            }
            self.beats_per_note = beats;
        }
        if let Some(pool) = raw.string_pool {
            if !(2..=STRING_COUNT).contains(&pool) {
                return Err(DrillError::InvalidConfig(format!(
                    "string-pool must be between 2 and {}, got {}",
                    STRING_COUNT, pool
                )));
            }
            self.string_pool = pool;
        }
        if raw.seed.is_some() {
            self.seed = raw.seed;
        }
        Ok(())
    }
}

/// Accept only positive, finite tempos.
pub fn validate_tempo(bpm: f64) -> Result<f64, DrillError> {
    if bpm.is_finite() && bpm > 0.0 {
        Ok(bpm)
    } else {
        Err(DrillError::InvalidTempo(bpm))
    }
}
