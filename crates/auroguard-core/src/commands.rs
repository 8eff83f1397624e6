//! Pilot commands sent from the UI layer to the simulation.
//!
//! Commands are queued and processed at the next engine advance, in arrival order.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible pilot and operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PilotCommand {
    // --- Simulation control ---
    /// Start (or resume) the tick timers.
    Start,
    /// Stop the tick timers. The world is kept as-is.
    Pause,
    /// Set the simulation-speed multiplier (physics period = 1000 / speed ms).
    SetSimulationSpeed { speed: f64 },
    /// Replace the whole debris field with `count` fresh items.
    RegenerateDebris { count: u32 },

    // --- Hazard thresholds ---
    SetDangerRadius { radius: f64 },
    SetWarningRadius { radius: f64 },

    // --- Manual flight ---
    /// Add a fixed speed increment along one axis, or brake to a stop.
    Thrust { direction: ThrustDirection },

    // --- Autopilot ---
    SetAutopilot { enabled: bool },
    SetAutopilotMode { mode: AutopilotMode },
    /// Designate (or clear) the Follow-mode target.
    SelectTarget { debris_id: Option<u32> },
}
