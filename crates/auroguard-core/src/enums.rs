//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Proximity severity of a debris item relative to the aircraft.
///
/// Ordered by severity, so `Danger > Warning > None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    None,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Classify a distance against the two hazard radii.
    ///
    /// Both comparisons are strict: a distance exactly on a radius is outside that zone.
    pub fn for_distance(distance: f64, danger_radius: f64, warning_radius: f64) -> Self {
        if distance < danger_radius {
            AlertLevel::Danger
        } else if distance < warning_radius {
            AlertLevel::Warning
        } else {
            AlertLevel::None
        }
    }
}

/// Autopilot steering heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotMode {
    /// Repulsion blended from every nearby threat.
    #[default]
    Avoid,
    /// Pursuit of one designated debris item.
    Follow,
}

/// Discrete pilot thrust input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustDirection {
    /// +y
    Up,
    /// -y
    Down,
    /// -x
    Left,
    /// +x
    Right,
    /// -z
    Forward,
    /// +z
    Backward,
    /// Zero all velocity components.
    Brake,
}
