//! World state and the snapshot published to the UI layer after each advance.

use serde::{Deserialize, Serialize};

use crate::constants::SCANNING_STATUS;
use crate::enums::*;
use crate::events::{Alert, CollisionPrediction};
use crate::types::{Body, Debris, Position, SimTime};

/// Aircraft plus the current debris field.
///
/// Debris ids are unique within one `WorldState`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub aircraft: Body,
    pub debris: Vec<Debris>,
}

impl WorldState {
    pub fn new(aircraft: Body, debris: Vec<Debris>) -> Self {
        Self { aircraft, debris }
    }

    /// Look up a debris item by id.
    pub fn find_debris(&self, id: u32) -> Option<&Debris> {
        self.debris.iter().find(|d| d.id == id)
    }

    /// Whether every debris id occurs once.
    pub fn has_unique_ids(&self) -> bool {
        let mut ids: Vec<u32> = self.debris.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|w| w[0] != w[1])
    }
}

/// Autopilot settings and its last status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutopilotState {
    pub enabled: bool,
    pub mode: AutopilotMode,
    /// Follow-mode target. Cleared when the target disappears.
    pub target_id: Option<u32>,
    pub status_message: String,
}

impl Default for AutopilotState {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: AutopilotMode::default(),
            target_id: None,
            status_message: SCANNING_STATUS.to_string(),
        }
    }
}

/// One debris item projected onto the 2D radar plane, aircraft at the centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub debris_id: u32,
    /// Scaled x offset from the aircraft.
    pub x: f64,
    /// Scaled z offset from the aircraft (radar "up" axis).
    pub y: f64,
    pub level: AlertLevel,
    pub is_target: bool,
}

/// Predicted collision drawn on the radar as a segment from the debris to the impact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionTrack {
    pub debris_id: u32,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Coarse field-wide risk advisory shown while the autopilot is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 to 100.
    pub collision_risk: f64,
    pub recommended_speed: f64,
    pub suggested_mode: AutopilotMode,
}

/// Complete state handed to the UI layer after each engine advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub simulation_speed: f64,
    pub danger_radius: f64,
    pub warning_radius: f64,
    pub aircraft: Body,
    pub debris: Vec<Debris>,
    pub alerts: Vec<Alert>,
    pub predictions: Vec<CollisionPrediction>,
    pub autopilot: AutopilotState,
    pub radar: Vec<RadarBlip>,
    pub prediction_tracks: Vec<PredictionTrack>,
    pub risk: Option<RiskAssessment>,
}

impl SimulationSnapshot {
    /// Position of the aircraft, for UI convenience.
    pub fn aircraft_position(&self) -> Position {
        self.aircraft.position
    }

    /// Number of alerts at `Danger` level.
    pub fn danger_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.level == AlertLevel::Danger)
            .count()
    }
}
