//! Hazard analysis: proximity classification and closed-form collision prediction.
//!
//! "Collision" means exact point coincidence of the aircraft and a debris item
//! under constant relative velocity. Body sizes are not modelled.

use auroguard_core::enums::AlertLevel;
use auroguard_core::events::{Alert, CollisionPrediction};
use auroguard_core::state::WorldState;
use auroguard_core::types::{Body, Position};

/// Euclidean distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.range_to(b)
}

/// Alerts for every debris item inside the danger or warning radius.
///
/// Items outside both zones are omitted. Order follows the debris order.
pub fn classify(world: &WorldState, danger_radius: f64, warning_radius: f64) -> Vec<Alert> {
    let aircraft = &world.aircraft.position;
    world
        .debris
        .iter()
        .filter_map(|d| {
            let dist = distance(aircraft, &d.body.position);
            match AlertLevel::for_distance(dist, danger_radius, warning_radius) {
                AlertLevel::None => None,
                level => Some(Alert {
                    debris_id: d.id,
                    level,
                    distance: dist,
                    position: d.body.position,
                    velocity: d.body.velocity,
                }),
            }
        })
        .collect()
}

/// Earliest root of `|Δ + v·t|² = 0`, with `Δ` and `v` the debris position and
/// velocity relative to the aircraft.
///
/// Returns `None` when the discriminant is negative. The root may be negative
/// (coincidence in the past). With zero relative velocity the quadratic
/// degenerates to `0/0` and the result is NaN; callers reject it through
/// their time-window check.
pub fn time_to_collision(aircraft: &Body, debris: &Body) -> Option<f64> {
    let rel_vel = debris.velocity.as_dvec3() - aircraft.velocity.as_dvec3();
    let delta = debris.position.as_dvec3() - aircraft.position.as_dvec3();

    let a = rel_vel.length_squared();
    let b = 2.0 * delta.dot(rel_vel);
    let c = delta.length_squared();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t1 = (-b + root) / (2.0 * a);
    let t2 = (-b - root) / (2.0 * a);
    Some(t1.min(t2))
}

/// Predicted collisions with `0 < t < horizon`, in debris order.
pub fn predict(world: &WorldState, horizon: f64) -> Vec<CollisionPrediction> {
    world
        .debris
        .iter()
        .filter_map(|d| {
            let t = time_to_collision(&world.aircraft, &d.body)?;
            // Also rejects NaN and infinities from the zero-relative-velocity case.
            if !(t > 0.0 && t < horizon) {
                return None;
            }
            Some(CollisionPrediction {
                debris_id: d.id,
                time_to_collision: t,
                collision_point: Some(d.body.position.extrapolate(&d.body.velocity, t)),
            })
        })
        .collect()
}
