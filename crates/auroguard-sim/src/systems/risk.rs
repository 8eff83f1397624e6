//! Field-wide risk advisory.
//!
//! A coarse heuristic from debris count and danger radius, independent of
//! actual geometry. Shown next to the autopilot controls.

use auroguard_core::constants::*;
use auroguard_core::enums::AutopilotMode;
use auroguard_core::state::RiskAssessment;

pub fn assess(debris_count: usize, danger_radius: f64) -> RiskAssessment {
    let collision_risk = if debris_count > 0 {
        (debris_count as f64 * danger_radius / RISK_DIVISOR).min(RISK_MAX)
    } else {
        0.0
    };

    let recommended_speed =
        (RISK_MAX_RECOMMENDED_SPEED - collision_risk / RISK_SPEED_STEP).max(RISK_MIN_RECOMMENDED_SPEED);

    let suggested_mode = if collision_risk > RISK_AVOID_THRESHOLD {
        AutopilotMode::Avoid
    } else {
        AutopilotMode::Follow
    };

    RiskAssessment {
        collision_risk,
        recommended_speed,
        suggested_mode,
    }
}
