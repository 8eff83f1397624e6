//! Simulation engine for AuroGuard.
//!
//! Owns the authoritative world state, runs the physics and autopilot steps
//! at their two logical rates, and produces `SimulationSnapshot`s for the UI layer.

pub mod autopilot;
pub mod config;
pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use auroguard_core as core;
pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
