//! Autopilot steering heuristics.
//!
//! Two modes, both pure functions of the world state:
//! - **Avoid**: escape directions from every nearby threat, weighted by
//!   `(warning_radius / distance)²`, blended and flown at a fixed speed.
//! - **Follow**: pursuit of one debris item at a distance-bracketed speed,
//!   plus a lead term from the target's own velocity.

use glam::DVec3;

use auroguard_core::constants::*;
use auroguard_core::state::WorldState;
use auroguard_core::types::Velocity;

use crate::systems::hazard::distance;

/// New aircraft velocity and the status line describing it.
#[derive(Debug, Clone, PartialEq)]
pub struct AutopilotUpdate {
    pub velocity: Velocity,
    pub status: String,
}

/// Result of one Follow-mode evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum FollowOutcome {
    Steering(AutopilotUpdate),
    /// The target id no longer resolves; the caller must clear it.
    Cancelled,
}

/// Speed and status prefix for one Follow-mode distance bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitBracket {
    pub speed: f64,
    pub prefix: &'static str,
}

/// Compute the avoidance velocity for the current world.
///
/// With no debris inside `1.5 × warning_radius` the aircraft velocity is
/// returned unchanged and only the status reports scanning.
pub fn avoid(world: &WorldState, warning_radius: f64) -> AutopilotUpdate {
    let aircraft = world.aircraft.position;
    let range = warning_radius * AVOID_RANGE_FACTOR;

    let mut threats: Vec<(DVec3, f64)> = world
        .debris
        .iter()
        .filter_map(|d| {
            let dist = distance(&aircraft, &d.body.position);
            (dist < range).then(|| (d.body.position.as_dvec3(), dist))
        })
        .collect();

    if threats.is_empty() {
        return AutopilotUpdate {
            velocity: world.aircraft.velocity,
            status: SCANNING_STATUS.to_string(),
        };
    }

    // Nearest first.
    threats.sort_by(|a, b| a.1.total_cmp(&b.1));

    let origin = aircraft.as_dvec3();
    let mut escape = DVec3::ZERO;
    let mut threat_level = 0.0;
    for (position, dist) in threats {
        let weight = (warning_radius / dist).powi(2);
        // A coincident item has no escape direction; only its weight counts.
        if dist > 0.0 {
            escape += (origin - position) * weight;
        }
        threat_level += weight;
    }

    let status = if threat_level > THREAT_LEVEL_CRITICAL {
        CRITICAL_STATUS
    } else if threat_level > THREAT_LEVEL_ELEVATED {
        ELEVATED_STATUS
    } else {
        AVOIDING_STATUS
    };

    AutopilotUpdate {
        velocity: Velocity::from(escape.normalize_or_zero() * AVOID_SPEED),
        status: status.to_string(),
    }
}

/// Follow-mode bracket for a distance to the target. Closer means slower.
pub fn pursuit_bracket(distance: f64) -> PursuitBracket {
    if distance < FOLLOW_HOLD_RANGE {
        PursuitBracket {
            speed: FOLLOW_HOLD_SPEED,
            prefix: "Maintaining position near",
        }
    } else if distance < FOLLOW_CLOSE_RANGE {
        PursuitBracket {
            speed: FOLLOW_CLOSE_SPEED,
            prefix: "Closely following",
        }
    } else if distance < FOLLOW_MEDIUM_RANGE {
        PursuitBracket {
            speed: FOLLOW_MEDIUM_SPEED,
            prefix: "Following",
        }
    } else {
        PursuitBracket {
            speed: FOLLOW_PURSUIT_SPEED,
            prefix: "Pursuing",
        }
    }
}

/// Compute the pursuit velocity toward debris `target_id`.
pub fn follow(world: &WorldState, target_id: u32) -> FollowOutcome {
    let Some(target) = world.find_debris(target_id) else {
        return FollowOutcome::Cancelled;
    };

    let aircraft = world.aircraft.position;
    let dist = distance(&aircraft, &target.body.position);
    let bracket = pursuit_bracket(dist);

    let direction = (target.body.position.as_dvec3() - aircraft.as_dvec3()).normalize_or_zero();
    let lead = target.body.velocity.as_dvec3() * FOLLOW_LEAD_FACTOR;

    FollowOutcome::Steering(AutopilotUpdate {
        velocity: Velocity::from(direction * bracket.speed + lead),
        status: format!(
            "{} target #{} - Distance: {:.2}m",
            bracket.prefix, target_id, dist
        ),
    })
}
