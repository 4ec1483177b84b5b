//! Shared host state: the command channel into the game loop and the latest
//! snapshot it published.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyblast_core::commands::{InputEvent, PlayerCommand};
use skyblast_core::state::FrameSnapshot;

use crate::error::AppError;
use crate::game_loop::{self, LoopOptions, LoopSummary};

/// Messages for the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Raw input, recorded into the loop's `InputState`.
    Input(InputEvent),
    /// A discrete command forwarded straight to the engine.
    PlayerCommand(PlayerCommand),
    /// Stop after the current frame.
    Shutdown,
}

/// State shared between the host and the game loop thread.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex`.
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Written by the loop after every frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|r| *r).unwrap_or(false)
    }

    /// Start the game loop. Starting twice returns `AlreadyRunning`.
    pub fn start(&self, options: LoopOptions) -> Result<JoinHandle<LoopSummary>, AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::StatePoisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }
        let (tx, handle) = game_loop::spawn_game_loop(options, Arc::clone(&self.latest_snapshot))?;
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        *running = true;
        Ok(handle)
    }

    /// Forward a message to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(slot) = self.command_tx.lock() else {
            return false;
        };
        match slot.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Ask the loop to stop and forget its channel. Returns false if the loop
    /// had already exited.
    pub fn stop(&self) -> bool {
        let delivered = self.send(GameLoopCommand::Shutdown);
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
        delivered
    }

    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn start_stop_cycle() {
        let state = AppState::new();
        let options = LoopOptions {
            sim: skyblast_sim::SimConfig::default(),
            game_loop: crate::config::GameLoopConfig {
                frame_rate: 60,
                frames: None,
                paced: true,
            },
            high_score_path: None,
            autopilot: false,
        };
        let handle = state.start(options.clone()).unwrap();
        assert!(state.is_running());
        assert!(matches!(state.start(options), Err(AppError::AlreadyRunning)));

        assert!(state.stop());
        assert!(!state.is_running());
        handle.join().unwrap();
        assert!(!state.stop());
    }

    #[test]
    fn send_without_a_loop_reports_failure() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::PlayerCommand(PlayerCommand::ResetGame)));
    }
}
