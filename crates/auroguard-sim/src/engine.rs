//! Simulation engine: the driver around the pure systems.
//!
//! `SimulationEngine` owns the authoritative `WorldState`, processes pilot
//! commands, runs the physics and autopilot steps at their two rates, and
//! produces `SimulationSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use auroguard_core::commands::PilotCommand;
use auroguard_core::constants::*;
use auroguard_core::enums::{AlertLevel, AutopilotMode};
use auroguard_core::events::{Alert, CollisionPrediction};
use auroguard_core::state::{AutopilotState, SimulationSnapshot, WorldState};
use auroguard_core::types::SimTime;

use crate::autopilot::{self, FollowOutcome};
use crate::config::SimConfig;
use crate::scheduler::{ScheduledStep, TickScheduler};
use crate::systems::physics::{self, UniformJitter};
use crate::systems::{hazard, pilot, radar, risk};
use crate::world_setup;

/// Clamp a requested speed multiplier to the supported range.
fn clamp_speed(speed: f64) -> f64 {
    speed.clamp(MIN_SIMULATION_SPEED, MAX_SIMULATION_SPEED)
}

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    world: WorldState,
    time: SimTime,
    running: bool,
    simulation_speed: f64,
    danger_radius: f64,
    warning_radius: f64,
    autopilot: AutopilotState,
    alerts: Vec<Alert>,
    predictions: Vec<CollisionPrediction>,
    rng: ChaCha8Rng,
    scheduler: TickScheduler,
    command_queue: VecDeque<PilotCommand>,
}

impl SimulationEngine {
    /// Create a new engine with a fresh debris field. The simulation starts paused.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = world_setup::initial_world(&mut rng, config.debris_count);
        let simulation_speed = if config.simulation_speed.is_finite() {
            clamp_speed(config.simulation_speed)
        } else {
            1.0
        };
        let scheduler = TickScheduler::new(
            BASE_PHYSICS_PERIOD_MS / simulation_speed,
            config.autopilot_period_ms,
        );

        Self {
            world,
            time: SimTime::default(),
            running: false,
            simulation_speed,
            danger_radius: config.danger_radius,
            warning_radius: config.warning_radius,
            autopilot: AutopilotState::default(),
            alerts: Vec::new(),
            predictions: Vec::new(),
            rng,
            scheduler,
            command_queue: VecDeque::new(),
            config,
        }
    }

    /// Queue a pilot command for processing at the next advance.
    pub fn queue_command(&mut self, command: PilotCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PilotCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, run every step that falls due within
    /// `elapsed` of wall time, and return the resulting snapshot.
    pub fn advance(&mut self, elapsed: Duration) -> SimulationSnapshot {
        self.process_commands();

        if self.running {
            for step in self.scheduler.advance(elapsed) {
                match step {
                    ScheduledStep::Physics => self.physics_tick(),
                    ScheduledStep::Autopilot => self.autopilot_tick(),
                }
            }
        }

        self.snapshot()
    }

    /// One physics tick: step the world, re-run hazard analysis, then the
    /// autopilot if it is enabled.
    pub fn physics_tick(&mut self) {
        let dt = self.simulation_speed;
        let mut jitter = UniformJitter::new(&mut self.rng, self.config.jitter);
        self.world = physics::step(&self.world, dt, &mut jitter);
        self.time.advance(dt);

        self.refresh_hazards();

        if self.autopilot.enabled {
            self.run_autopilot();
        }
    }

    /// One autopilot-rate tick. Runs the autopilot on the latest world if enabled.
    pub fn autopilot_tick(&mut self) {
        if self.autopilot.enabled {
            self.run_autopilot();
        }
    }

    /// Build the snapshot for the current state without advancing.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let scale = self.config.radar_scale;
        let risk = self
            .autopilot
            .enabled
            .then(|| risk::assess(self.world.debris.len(), self.danger_radius));

        SimulationSnapshot {
            time: self.time,
            running: self.running,
            simulation_speed: self.simulation_speed,
            danger_radius: self.danger_radius,
            warning_radius: self.warning_radius,
            aircraft: self.world.aircraft,
            debris: self.world.debris.clone(),
            alerts: self.alerts.clone(),
            predictions: self.predictions.clone(),
            autopilot: self.autopilot.clone(),
            radar: radar::project(&self.world, &self.alerts, self.autopilot.target_id, scale),
            prediction_tracks: radar::prediction_tracks(&self.world, &self.predictions, scale),
            risk,
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulation_speed(&self) -> f64 {
        self.simulation_speed
    }

    pub fn autopilot(&self) -> &AutopilotState {
        &self.autopilot
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn predictions(&self) -> &[CollisionPrediction] {
        &self.predictions
    }

    /// Wall time until the next step falls due, if the simulation is running.
    pub fn time_until_next_step(&self) -> Option<Duration> {
        if self.running {
            self.scheduler.time_until_next()
        } else {
            None
        }
    }

    /// Replace the world wholesale (for tests needing exact geometry).
    #[cfg(test)]
    pub fn set_world(&mut self, world: WorldState) {
        self.world = world;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single pilot command.
    fn handle_command(&mut self, command: PilotCommand) {
        match command {
            PilotCommand::Start => {
                if !self.running {
                    self.running = true;
                    self.scheduler.start_physics();
                    if self.autopilot.enabled {
                        self.scheduler.start_autopilot();
                    }
                    log::info!("Simulation started at {:.1}x", self.simulation_speed);
                }
            }
            PilotCommand::Pause => {
                if self.running {
                    self.running = false;
                    self.scheduler.stop_all();
                    log::info!("Simulation paused at tick {}", self.time.tick);
                }
            }
            PilotCommand::SetSimulationSpeed { speed } => {
                if !speed.is_finite() {
                    log::warn!("Ignoring non-finite simulation speed {speed}");
                    return;
                }
                self.simulation_speed = clamp_speed(speed);
                self.scheduler
                    .set_physics_period(BASE_PHYSICS_PERIOD_MS / self.simulation_speed);
            }
            PilotCommand::RegenerateDebris { count } => {
                // A stale Follow target is cancelled by the next autopilot step.
                self.world.debris = world_setup::generate_debris(&mut self.rng, count);
                self.refresh_hazards();
                log::info!("Regenerated debris field with {count} items");
            }
            PilotCommand::SetDangerRadius { radius } => {
                self.danger_radius = radius;
            }
            PilotCommand::SetWarningRadius { radius } => {
                self.warning_radius = radius;
            }
            PilotCommand::Thrust { direction } => {
                self.world.aircraft.velocity =
                    pilot::apply_thrust(self.world.aircraft.velocity, direction);
            }
            PilotCommand::SetAutopilot { enabled } => {
                self.autopilot.enabled = enabled;
                if enabled && self.running {
                    self.scheduler.start_autopilot();
                } else {
                    self.scheduler.stop_autopilot();
                }
                log::info!(
                    "Autopilot {} ({:?} mode)",
                    if enabled { "engaged" } else { "disengaged" },
                    self.autopilot.mode
                );
            }
            PilotCommand::SetAutopilotMode { mode } => {
                self.autopilot.mode = mode;
            }
            PilotCommand::SelectTarget { debris_id } => {
                self.autopilot.target_id = debris_id;
            }
        }
    }

    /// Recompute alerts and predictions from the current world.
    fn refresh_hazards(&mut self) {
        let alerts = hazard::classify(&self.world, self.danger_radius, self.warning_radius);

        for alert in alerts.iter().filter(|a| a.level == AlertLevel::Danger) {
            let was_danger = self
                .alerts
                .iter()
                .any(|a| a.debris_id == alert.debris_id && a.level == AlertLevel::Danger);
            if !was_danger {
                log::warn!(
                    "Debris #{} entered danger zone at {:.1}",
                    alert.debris_id,
                    alert.distance
                );
            }
        }

        self.alerts = alerts;
        self.predictions = hazard::predict(&self.world, self.config.prediction_horizon);
    }

    /// Apply the current autopilot mode to the aircraft velocity.
    fn run_autopilot(&mut self) {
        self.time.autopilot_tick += 1;

        match self.autopilot.mode {
            AutopilotMode::Avoid => {
                let update = autopilot::avoid(&self.world, self.warning_radius);
                self.world.aircraft.velocity = update.velocity;
                self.autopilot.status_message = update.status;
            }
            AutopilotMode::Follow => {
                let Some(target_id) = self.autopilot.target_id else {
                    return;
                };
                match autopilot::follow(&self.world, target_id) {
                    FollowOutcome::Steering(update) => {
                        self.world.aircraft.velocity = update.velocity;
                        self.autopilot.status_message = update.status;
                    }
                    FollowOutcome::Cancelled => {
                        log::info!("Follow target #{target_id} lost, clearing target");
                        self.autopilot.target_id = None;
                        self.autopilot.status_message = SCANNING_STATUS.to_string();
                    }
                }
            }
        }
    }
}
