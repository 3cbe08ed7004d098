//! Flight tuning: geometry, motion durations and the thrust spring.
//!
//! Loaded from ~/.rocket-drop/config.json when present, otherwise the
//! built-in defaults. Ramp presets cover the common ramp heights.

use crate::constants::*;
use crate::motion::SpringConfig;
use crate::utils::persistence::{data_path, read_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Preset ramp heights, measured up from the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampLevel {
    Low,
    Standard,
    High,
}

impl RampLevel {
    pub const ALL: [RampLevel; 3] = [RampLevel::Low, RampLevel::Standard, RampLevel::High];

    pub fn offset(&self) -> f64 {
        match self {
            Self::Low => 70.0,
            Self::Standard => DEFAULT_RAMP_OFFSET,
            Self::High => 450.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Standard => "standard",
            Self::High => "high",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub viewport_height: f64,
    pub rocket_size: f64,
    /// Height of the ramp above the bottom of the viewport.
    pub ramp_offset: f64,
    /// Hover height as a fraction of the viewport height.
    pub hover_ratio: f64,
    pub descent_duration_ms: u64,
    pub fall_duration_ms: u64,
    pub thrust_rise_ms: u64,
    pub thrust_decay_ms: u64,
    pub spring: SpringConfig,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            rocket_size: DEFAULT_ROCKET_SIZE,
            ramp_offset: DEFAULT_RAMP_OFFSET,
            hover_ratio: DEFAULT_HOVER_RATIO,
            descent_duration_ms: DESCENT_DURATION_MS,
            fall_duration_ms: FALL_DURATION_MS,
            thrust_rise_ms: THRUST_RISE_MS,
            thrust_decay_ms: THRUST_DECAY_MS,
            spring: SpringConfig::default(),
        }
    }
}

impl FlightConfig {
    /// Defaults with the given ramp preset.
    pub fn for_ramp(level: RampLevel) -> Self {
        Self {
            ramp_offset: level.offset(),
            ..Default::default()
        }
    }

    /// Position the rocket starts from: just above the top edge.
    pub fn start_y(&self) -> f64 {
        -self.rocket_size
    }

    /// Position the descent and the release-fall head toward.
    pub fn bottom_y(&self) -> f64 {
        self.viewport_height - self.rocket_size
    }

    /// Position the thrust spring pulls toward.
    pub fn hover_y(&self) -> f64 {
        self.viewport_height * self.hover_ratio
    }

    /// Position at which the rocket touches the ramp.
    pub fn collision_threshold(&self) -> f64 {
        self.viewport_height - self.ramp_offset - self.rocket_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.viewport_height > 0.0) {
            return invalid(format!(
                "viewport_height must be positive, got {}",
                self.viewport_height
            ));
        }
        if !(self.rocket_size > 0.0) {
            return invalid(format!(
                "rocket_size must be positive, got {}",
                self.rocket_size
            ));
        }
        if !(self.ramp_offset >= 0.0) {
            return invalid(format!(
                "ramp_offset must not be negative, got {}",
                self.ramp_offset
            ));
        }
        if self.collision_threshold() <= self.start_y() {
            return invalid(format!(
                "ramp_offset {} leaves no room to fly in a viewport of {}",
                self.ramp_offset, self.viewport_height
            ));
        }
        if !(0.0..1.0).contains(&self.hover_ratio) {
            return invalid(format!(
                "hover_ratio must be in [0, 1), got {}",
                self.hover_ratio
            ));
        }
        if self.hover_y() >= self.collision_threshold() {
            return invalid(format!(
                "hover height {} is at or below the ramp threshold {}",
                self.hover_y(),
                self.collision_threshold()
            ));
        }
        let spring = &self.spring;
        if !(spring.mass > 0.0 && spring.stiffness > 0.0 && spring.damping > 0.0) {
            return invalid(format!(
                "spring mass, stiffness and damping must be positive, got {:?}",
                spring
            ));
        }
        Ok(())
    }

    /// Load and validate a config file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: FlightConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load ~/.rocket-drop/config.json, falling back to defaults when it is
    /// missing, unreadable or invalid.
    pub fn load_or_default() -> Self {
        let path = match data_path(CONFIG_FILE_NAME) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("No data directory, using default config: {}", e);
                return Self::default();
            }
        };
        match read_json::<FlightConfig>(&path) {
            Ok(Some(config)) => match config.validate() {
                Ok(()) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
