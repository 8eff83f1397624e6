//! Kinematic integration system.
//!
//! Advances every body by `position += velocity * dt` and perturbs debris
//! velocity with a small random jitter drawn from an injected source.

use rand::Rng;

use auroguard_core::state::WorldState;
use auroguard_core::types::{Body, Debris, Velocity};

/// Source of per-component debris velocity perturbations.
pub trait Jitter {
    /// Next perturbation to add to one velocity component.
    fn sample(&mut self) -> f64;
}

/// Uniform jitter in `[-amplitude, amplitude]` drawn from any `Rng`.
pub struct UniformJitter<R> {
    rng: R,
    amplitude: f64,
}

impl<R: Rng> UniformJitter<R> {
    pub fn new(rng: R, amplitude: f64) -> Self {
        Self { rng, amplitude }
    }
}

impl<R: Rng> Jitter for UniformJitter<R> {
    fn sample(&mut self) -> f64 {
        if self.amplitude > 0.0 && self.amplitude.is_finite() {
            self.rng.gen_range(-self.amplitude..=self.amplitude)
        } else {
            0.0
        }
    }
}

/// Advance the world by `dt`.
///
/// Positions move with the velocity held at the start of the step. Debris
/// velocity then receives one jitter sample per component (x, y, z, in debris
/// order). The aircraft velocity is never touched here. `dt` is used as given.
pub fn step<J: Jitter + ?Sized>(world: &WorldState, dt: f64, jitter: &mut J) -> WorldState {
    let aircraft = Body::new(
        world.aircraft.position.extrapolate(&world.aircraft.velocity, dt),
        world.aircraft.velocity,
    );

    let debris = world
        .debris
        .iter()
        .map(|d| {
            let vel = d.body.velocity;
            let position = d.body.position.extrapolate(&vel, dt);
            let velocity = Velocity::new(
                vel.x + jitter.sample(),
                vel.y + jitter.sample(),
                vel.z + jitter.sample(),
            );
            Debris::new(d.id, position, velocity)
        })
        .collect();

    WorldState::new(aircraft, debris)
}
