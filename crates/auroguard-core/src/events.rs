//! Per-tick hazard outputs consumed by the UI layer.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;
use crate::types::{Position, Velocity};

/// Proximity alert for one debris item inside the warning or danger zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub debris_id: u32,
    /// Always `Warning` or `Danger`; items outside both zones produce no alert.
    pub level: AlertLevel,
    /// Distance from the aircraft at classification time.
    pub distance: f64,
    pub position: Position,
    pub velocity: Velocity,
}

/// Predicted point coincidence between the aircraft and one debris item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionPrediction {
    pub debris_id: u32,
    /// Strictly positive and below the prediction horizon.
    pub time_to_collision: f64,
    /// Debris position extrapolated by its own velocity over `time_to_collision`.
    pub collision_point: Option<Position>,
}
