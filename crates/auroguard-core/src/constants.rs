//! Simulation constants and tuning parameters.

// --- Timing ---

/// Physics timer period at 1x speed (milliseconds).
pub const BASE_PHYSICS_PERIOD_MS: f64 = 1000.0;

/// Autopilot timer period (milliseconds), independent of the speed multiplier.
pub const AUTOPILOT_PERIOD_MS: f64 = 100.0;

/// Allowed simulation-speed multiplier range.
pub const MIN_SIMULATION_SPEED: f64 = 0.1;
pub const MAX_SIMULATION_SPEED: f64 = 5.0;

// --- Debris field ---

/// Debris items created at session start and on regenerate.
pub const DEFAULT_DEBRIS_COUNT: u32 = 10;

/// Half-extent of the cube debris positions are drawn from.
pub const DEBRIS_POSITION_HALF_EXTENT: f64 = 5000.0;

/// Half-extent of each initial debris velocity component.
pub const DEBRIS_VELOCITY_HALF_EXTENT: f64 = 5.0;

/// Maximum per-tick random change to each debris velocity component.
pub const DEBRIS_JITTER: f64 = 0.1;

// --- Hazard thresholds ---

pub const DEFAULT_DANGER_RADIUS: f64 = 500.0;
pub const DEFAULT_WARNING_RADIUS: f64 = 1000.0;

/// Collision predictions at or beyond this time are dropped.
pub const PREDICTION_HORIZON: f64 = 10.0;

// --- Pilot input ---

/// Velocity added per thrust command.
pub const THRUST_INCREMENT: f64 = 100.0;

// --- Autopilot: avoid ---

/// Debris within `warning_radius * AVOID_RANGE_FACTOR` are treated as threats.
pub const AVOID_RANGE_FACTOR: f64 = 1.5;

/// Speed of the avoidance velocity.
pub const AVOID_SPEED: f64 = 100.0;

/// Threat level above which the maneuver is reported as critical.
pub const THREAT_LEVEL_CRITICAL: f64 = 5.0;

/// Threat level above which the maneuver is reported as elevated.
pub const THREAT_LEVEL_ELEVATED: f64 = 2.0;

// --- Autopilot: follow ---

pub const FOLLOW_HOLD_RANGE: f64 = 200.0;
pub const FOLLOW_CLOSE_RANGE: f64 = 500.0;
pub const FOLLOW_MEDIUM_RANGE: f64 = 2000.0;

pub const FOLLOW_HOLD_SPEED: f64 = 50.0;
pub const FOLLOW_CLOSE_SPEED: f64 = 75.0;
pub const FOLLOW_MEDIUM_SPEED: f64 = 100.0;
pub const FOLLOW_PURSUIT_SPEED: f64 = 150.0;

/// Fraction of the target's velocity added as a lead term.
pub const FOLLOW_LEAD_FACTOR: f64 = 0.5;

// --- Status lines ---

pub const SCANNING_STATUS: &str = "Scanning for threats";
pub const AVOIDING_STATUS: &str = "Avoiding collision threat";
pub const ELEVATED_STATUS: &str = "WARNING: Avoiding multiple collision threats";
pub const CRITICAL_STATUS: &str = "CRITICAL: Executing emergency avoidance maneuver";

// --- Display ---

/// World-to-radar scale factor.
pub const RADAR_SCALE: f64 = 0.05;

// --- Risk advisory ---

pub const RISK_MAX: f64 = 100.0;
/// Risk = debris count * danger radius / RISK_DIVISOR, capped at RISK_MAX.
pub const RISK_DIVISOR: f64 = 1000.0;
pub const RISK_MAX_RECOMMENDED_SPEED: f64 = 5.0;
pub const RISK_MIN_RECOMMENDED_SPEED: f64 = 0.5;
/// Recommended speed drops by 1 per this many risk points.
pub const RISK_SPEED_STEP: f64 = 20.0;
/// Risk above which Avoid mode is suggested.
pub const RISK_AVOID_THRESHOLD: f64 = 50.0;
