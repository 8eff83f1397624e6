//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in simulation space (Cartesian, abstract units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in simulation space (units per tick at 1x speed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Anything with a position and a velocity. The aircraft is a bare `Body`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Position,
    pub velocity: Velocity,
}

/// A debris item: a body plus the id it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub id: u32,
    pub body: Body,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Physics ticks run so far.
    pub tick: u64,
    /// Autopilot steps run so far (both rates count).
    pub autopilot_tick: u64,
    /// Accumulated simulation time: the sum of every `dt` handed to the stepper.
    pub elapsed: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Position after travelling at `velocity` for `t` time units.
    pub fn extrapolate(&self, velocity: &Velocity, t: f64) -> Position {
        Position::new(
            self.x + velocity.x * t,
            self.y + velocity.y * t,
            self.z + velocity.z * t,
        )
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Velocity {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Body {
    pub fn new(position: Position, velocity: Velocity) -> Self {
        Self { position, velocity }
    }

    /// A body at rest at the origin.
    pub fn at_rest() -> Self {
        Self::default()
    }
}

impl Debris {
    pub fn new(id: u32, position: Position, velocity: Velocity) -> Self {
        Self {
            id,
            body: Body::new(position, velocity),
        }
    }
}

impl SimTime {
    /// Record one physics tick that advanced the world by `dt`.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed += dt;
    }
}
