//! Debris field factories.

use rand::Rng;

use auroguard_core::constants::{DEBRIS_POSITION_HALF_EXTENT, DEBRIS_VELOCITY_HALF_EXTENT};
use auroguard_core::state::WorldState;
use auroguard_core::types::{Body, Debris, Position, Velocity};

/// Generate `count` debris items with sequential ids `0..count`.
///
/// Positions are uniform in a cube of half-extent 5000 around the origin,
/// velocity components uniform in `[-5, 5)`.
pub fn generate_debris<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<Debris> {
    let p = DEBRIS_POSITION_HALF_EXTENT;
    let v = DEBRIS_VELOCITY_HALF_EXTENT;
    (0..count)
        .map(|id| {
            let position = Position::new(
                rng.gen_range(-p..p),
                rng.gen_range(-p..p),
                rng.gen_range(-p..p),
            );
            let velocity = Velocity::new(
                rng.gen_range(-v..v),
                rng.gen_range(-v..v),
                rng.gen_range(-v..v),
            );
            Debris::new(id, position, velocity)
        })
        .collect()
}

/// Session-start world: aircraft at rest at the origin plus a fresh debris field.
pub fn initial_world<R: Rng + ?Sized>(rng: &mut R, debris_count: u32) -> WorldState {
    WorldState::new(Body::at_rest(), generate_debris(rng, debris_count))
}
