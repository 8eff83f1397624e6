//! Simulation configuration.
//!
//! The core systems never validate their inputs; `SimConfig::validate` is for
//! the driver layer that loads a configuration from outside.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use auroguard_core::constants::*;

/// Configuration for starting a new simulation.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same debris field and jitter.
    pub seed: u64,
    /// Initial simulation-speed multiplier.
    pub simulation_speed: f64,
    pub danger_radius: f64,
    pub warning_radius: f64,
    /// Debris items created at start.
    pub debris_count: u32,
    /// Collision predictions must fall strictly below this time.
    pub prediction_horizon: f64,
    pub autopilot_period_ms: f64,
    /// Debris velocity jitter amplitude per component per tick.
    pub jitter: f64,
    pub radar_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            simulation_speed: 1.0,
            danger_radius: DEFAULT_DANGER_RADIUS,
            warning_radius: DEFAULT_WARNING_RADIUS,
            debris_count: DEFAULT_DEBRIS_COUNT,
            prediction_horizon: PREDICTION_HORIZON,
            autopilot_period_ms: AUTOPILOT_PERIOD_MS,
            jitter: DEBRIS_JITTER,
            radar_scale: RADAR_SCALE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("danger radius {danger} exceeds warning radius {warning}")]
    RadiusOrder { danger: f64, warning: f64 },
    #[error("simulation speed {0} outside [0.1, 5.0]")]
    SpeedOutOfRange(f64),
    #[error("jitter must be finite and non-negative, got {0}")]
    InvalidJitter(f64),
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("danger_radius", self.danger_radius)?;
        require_positive("warning_radius", self.warning_radius)?;
        require_positive("prediction_horizon", self.prediction_horizon)?;
        require_positive("autopilot_period_ms", self.autopilot_period_ms)?;
        require_positive("radar_scale", self.radar_scale)?;

        if self.danger_radius > self.warning_radius {
            return Err(ConfigError::RadiusOrder {
                danger: self.danger_radius,
                warning: self.warning_radius,
            });
        }
        if !(MIN_SIMULATION_SPEED..=MAX_SIMULATION_SPEED).contains(&self.simulation_speed) {
            return Err(ConfigError::SpeedOutOfRange(self.simulation_speed));
        }
        if !(self.jitter.is_finite() && self.jitter >= 0.0) {
            return Err(ConfigError::InvalidJitter(self.jitter));
        }
        Ok(())
    }
}
