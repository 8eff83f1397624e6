//! Headless AuroGuard driver.
//!
//! Runs the simulation engine on a dedicated thread, feeds it pilot commands
//! over a channel and publishes the latest snapshot for polling.

pub mod game_loop;
pub mod state;

pub use auroguard_core as core;
pub use auroguard_sim as sim;
