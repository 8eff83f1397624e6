//! `auroguard`: runs a short headless session and logs what the autopilot does.
//!
//! Usage: `auroguard [config.json]`. Set `RUST_LOG=info` (or `debug`) to see
//! the session log; the final snapshot is printed to stdout as JSON.

use std::error::Error;
use std::time::Duration;
use std::{env, fs, thread};

use auroguard_app::game_loop::spawn_game_loop;
use auroguard_core::commands::PilotCommand;
use auroguard_core::constants::MAX_SIMULATION_SPEED;
use auroguard_sim::SimConfig;

/// Length of the demo session in wall-clock seconds.
const DEMO_SECONDS: u64 = 5;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimConfig::from_json_str(&fs::read_to_string(&path)?)?,
        None => SimConfig::default(),
    };
    log::info!(
        "Starting session: seed {}, {} debris, danger {}m, warning {}m",
        config.seed,
        config.debris_count,
        config.danger_radius,
        config.warning_radius
    );

    let handle = spawn_game_loop(config)?;
    handle.send(PilotCommand::SetSimulationSpeed {
        speed: MAX_SIMULATION_SPEED,
    })?;
    handle.send(PilotCommand::SetAutopilot { enabled: true })?;
    handle.send(PilotCommand::Start)?;

    for _ in 0..DEMO_SECONDS {
        thread::sleep(Duration::from_secs(1));
        if let Some(snap) = handle.latest_snapshot()? {
            log::info!(
                "t={:.1}s tick={} alerts={} (danger {}) predictions={} | {}",
                snap.time.elapsed,
                snap.time.tick,
                snap.alerts.len(),
                snap.danger_count(),
                snap.predictions.len(),
                snap.autopilot.status_message
            );
        }
    }

    if let Some(snapshot) = handle.shutdown()? {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
