//! Core types and definitions for the AuroGuard simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! kinematic types, the world state, commands, alerts, snapshots and constants.
//! It has no dependency on any runtime or UI framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
