//! Per-tick computations over the world state.
//!
//! Systems are pure functions: they take `&WorldState` (plus parameters) and
//! return new values. They hold no state between calls.

pub mod hazard;
pub mod physics;
pub mod pilot;
pub mod radar;
pub mod risk;
