//! Game loop thread. Drives the engine from the wall clock and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc`; the latest snapshot is stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use auroguard_core::state::SimulationSnapshot;
use auroguard_sim::{SimConfig, SimulationEngine};

use crate::state::{LoopCommand, SharedSnapshot, SimulationHandle};

/// Longest sleep between loop iterations.
pub const PACING_INTERVAL: Duration = Duration::from_millis(20);

/// Elapsed time fed to the engine in one iteration is capped at this.
const MAX_CATCH_UP: Duration = Duration::from_secs(1);

/// Spawns the game loop in a new thread with a fresh engine built from `config`.
pub fn spawn_game_loop(config: SimConfig) -> io::Result<SimulationHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("auroguard-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, &shared);
        })?;

    Ok(SimulationHandle::new(cmd_tx, latest_snapshot, thread))
}

/// Wall time to hand the engine, capped so a stalled thread does not
/// trigger a burst of catch-up steps.
fn clamp_elapsed(elapsed: Duration) -> Duration {
    if elapsed > MAX_CATCH_UP {
        log::debug!("Game loop fell {:?} behind, dropping the excess", elapsed - MAX_CATCH_UP);
        MAX_CATCH_UP
    } else {
        elapsed
    }
}

/// How long to sleep before the next iteration.
fn pacing_delay(until_next_step: Option<Duration>) -> Duration {
    until_next_step.map_or(PACING_INTERVAL, |d| d.min(PACING_INTERVAL))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimulationSnapshot>>,
) {
    log::info!("Game loop started");
    let mut last = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Pilot(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("Game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the wall time since the last iteration
        let now = Instant::now();
        let snapshot = engine.advance(clamp_elapsed(now - last));
        last = now;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next step is due, at most one pacing interval
        std::thread::sleep(pacing_delay(engine.time_until_next_step()));
    }
}
