//! Radar projection: debris and predicted collisions mapped onto the 2D scope.
//!
//! The scope is centred on the aircraft and looks down the y axis, so world x
//! maps to scope x and world z maps to scope y.

use auroguard_core::enums::AlertLevel;
use auroguard_core::events::{Alert, CollisionPrediction};
use auroguard_core::state::{PredictionTrack, RadarBlip, WorldState};
use auroguard_core::types::Position;

fn to_scope(aircraft: &Position, p: &Position, scale: f64) -> (f64, f64) {
    ((p.x - aircraft.x) * scale, (p.z - aircraft.z) * scale)
}

/// One blip per debris item, tagged with its alert level and target flag.
pub fn project(
    world: &WorldState,
    alerts: &[Alert],
    target_id: Option<u32>,
    scale: f64,
) -> Vec<RadarBlip> {
    let aircraft = &world.aircraft.position;
    world
        .debris
        .iter()
        .map(|d| {
            let (x, y) = to_scope(aircraft, &d.body.position, scale);
            let level = alerts
                .iter()
                .find(|a| a.debris_id == d.id)
                .map_or(AlertLevel::None, |a| a.level);
            RadarBlip {
                debris_id: d.id,
                x,
                y,
                level,
                is_target: target_id == Some(d.id),
            }
        })
        .collect()
}

/// Segments from each predicted debris item to its collision point.
///
/// Predictions whose debris is gone or that carry no collision point are skipped.
pub fn prediction_tracks(
    world: &WorldState,
    predictions: &[CollisionPrediction],
    scale: f64,
) -> Vec<PredictionTrack> {
    let aircraft = &world.aircraft.position;
    predictions
        .iter()
        .filter_map(|p| {
            let debris = world.find_debris(p.debris_id)?;
            let point = p.collision_point?;
            Some(PredictionTrack {
                debris_id: p.debris_id,
                start: to_scope(aircraft, &debris.body.position, scale),
                end: to_scope(aircraft, &point, scale),
            })
        })
        .collect()
}
