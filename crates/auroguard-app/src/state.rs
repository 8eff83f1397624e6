//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use auroguard_core::commands::PilotCommand;
use auroguard_core::state::SimulationSnapshot;

/// Latest snapshot, written by the loop thread after each iteration.
pub type SharedSnapshot = Arc<Mutex<Option<SimulationSnapshot>>>;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A pilot command to forward to the simulation engine.
    Pilot(PilotCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Owner's handle on a running game loop.
///
/// Dropping the handle disconnects the channel, which also ends the loop.
pub struct SimulationHandle {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl SimulationHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<LoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a pilot command to the engine.
    pub fn send(&self, command: PilotCommand) -> Result<(), String> {
        self.command_tx
            .send(LoopCommand::Pilot(command))
            .map_err(|e| format!("Failed to send command: {}", e))
    }

    /// Latest published snapshot, if the loop has completed an iteration.
    pub fn latest_snapshot(&self) -> Result<Option<SimulationSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stop the loop, wait for the thread and return the final snapshot.
    pub fn shutdown(mut self) -> Result<Option<SimulationSnapshot>, String> {
        // The loop may already be gone; joining still reports how it ended.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| "Game loop thread panicked".to_string())?;
        }
        self.latest_snapshot()
    }
}
