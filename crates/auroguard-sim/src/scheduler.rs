//! Two-rate tick scheduler.
//!
//! One clock drives two logical timers: the physics tick (period `1000 / speed`
//! ms) and the autopilot tick (fixed period). `advance` moves the clock forward
//! and returns every step that fell due, in time order. When both timers are
//! due at the same instant the physics step comes first, so an autopilot step
//! always sees the latest completed physics state.

use std::time::Duration;

/// Periods below this are raised to it (milliseconds).
const MIN_PERIOD_MS: f64 = 1.0;

/// A step the engine must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledStep {
    Physics,
    Autopilot,
}

#[derive(Debug, Clone)]
struct Timer {
    period_ms: f64,
    /// Clock time of the next firing; `None` while stopped.
    next_ms: Option<f64>,
}

impl Timer {
    fn new(period_ms: f64) -> Self {
        Self {
            period_ms: sanitize_period(period_ms),
            next_ms: None,
        }
    }

    fn restart(&mut self, now_ms: f64) {
        self.next_ms = Some(now_ms + self.period_ms);
    }
}

fn sanitize_period(period_ms: f64) -> f64 {
    if period_ms.is_finite() {
        period_ms.max(MIN_PERIOD_MS)
    } else {
        MIN_PERIOD_MS
    }
}

/// Clock plus the physics and autopilot timers.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    clock_ms: f64,
    physics: Timer,
    autopilot: Timer,
}

impl TickScheduler {
    /// Both timers start stopped.
    pub fn new(physics_period_ms: f64, autopilot_period_ms: f64) -> Self {
        Self {
            clock_ms: 0.0,
            physics: Timer::new(physics_period_ms),
            autopilot: Timer::new(autopilot_period_ms),
        }
    }

    /// Current scheduler clock (milliseconds since creation).
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn physics_period_ms(&self) -> f64 {
        self.physics.period_ms
    }

    pub fn is_physics_running(&self) -> bool {
        self.physics.next_ms.is_some()
    }

    pub fn is_autopilot_running(&self) -> bool {
        self.autopilot.next_ms.is_some()
    }

    /// Start (or restart) the physics timer one period from now.
    pub fn start_physics(&mut self) {
        self.physics.restart(self.clock_ms);
    }

    pub fn stop_physics(&mut self) {
        self.physics.next_ms = None;
    }

    /// Change the physics period. A running timer is torn down and restarted.
    pub fn set_physics_period(&mut self, period_ms: f64) {
        self.physics.period_ms = sanitize_period(period_ms);
        if self.is_physics_running() {
            self.start_physics();
        }
    }

    pub fn start_autopilot(&mut self) {
        self.autopilot.restart(self.clock_ms);
    }

    pub fn stop_autopilot(&mut self) {
        self.autopilot.next_ms = None;
    }

    pub fn stop_all(&mut self) {
        self.stop_physics();
        self.stop_autopilot();
    }

    /// Move the clock forward by `elapsed` and return the steps that fell due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledStep> {
        let target_ms = self.clock_ms + elapsed.as_secs_f64() * 1000.0;
        let mut steps = Vec::new();

        loop {
            let physics_due = self.physics.next_ms.filter(|&t| t <= target_ms);
            let autopilot_due = self.autopilot.next_ms.filter(|&t| t <= target_ms);

            let (step, due_ms) = match (physics_due, autopilot_due) {
                (Some(p), Some(a)) if a < p => (ScheduledStep::Autopilot, a),
                (Some(p), _) => (ScheduledStep::Physics, p),
                (None, Some(a)) => (ScheduledStep::Autopilot, a),
                (None, None) => break,
            };

            self.clock_ms = due_ms;
            let timer = match step {
                ScheduledStep::Physics => &mut self.physics,
                ScheduledStep::Autopilot => &mut self.autopilot,
            };
            timer.next_ms = Some(due_ms + timer.period_ms);
            steps.push(step);
        }

        self.clock_ms = target_ms;
        steps
    }

    /// Time until the next step falls due, if any timer is running.
    pub fn time_until_next(&self) -> Option<Duration> {
        let next = match (self.physics.next_ms, self.autopilot.next_ms) {
            (Some(p), Some(a)) => p.min(a),
            (Some(p), None) => p,
            (None, Some(a)) => a,
            (None, None) => return None,
        };
        Some(Duration::from_secs_f64(((next - self.clock_ms) / 1000.0).max(0.0)))
    }
}
