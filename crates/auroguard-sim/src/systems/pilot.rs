//! Manual flight input: discrete thrust commands applied to the aircraft velocity.

use auroguard_core::constants::THRUST_INCREMENT;
use auroguard_core::enums::ThrustDirection;
use auroguard_core::types::Velocity;

/// Velocity after one thrust command. `Brake` stops the aircraft outright.
pub fn apply_thrust(velocity: Velocity, direction: ThrustDirection) -> Velocity {
    let Velocity { x, y, z } = velocity;
    match direction {
        ThrustDirection::Up => Velocity::new(x, y + THRUST_INCREMENT, z),
        ThrustDirection::Down => Velocity::new(x, y - THRUST_INCREMENT, z),
        ThrustDirection::Left => Velocity::new(x - THRUST_INCREMENT, y, z),
        ThrustDirection::Right => Velocity::new(x + THRUST_INCREMENT, y, z),
        ThrustDirection::Forward => Velocity::new(x, y, z - THRUST_INCREMENT),
        ThrustDirection::Backward => Velocity::new(x, y, z + THRUST_INCREMENT),
        ThrustDirection::Brake => Velocity::default(),
    }
}
