//! Game loop thread: runs the engine at a fixed frame rate and publishes
//! snapshots.
//!
//! The engine lives entirely on the loop thread. Messages arrive over an `mpsc`
//! channel and are drained at the top of every frame; the latest snapshot is
//! stored in shared state for polling.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skyblast_core::commands::{InputEvent, InputState};
use skyblast_core::state::FrameSnapshot;
use skyblast_sim::presentation::Presenter;
use skyblast_sim::score::{HighScoreStore, MemoryHighScore};
use skyblast_sim::{SimConfig, SimulationEngine};

use crate::autopilot::{HunterPilot, Pilot};
use crate::backends::{TracingAudio, TracingRender};
use crate::config::{AppConfig, GameLoopConfig};
use crate::error::AppError;
use crate::persistence::FileHighScoreStore;
use crate::state::GameLoopCommand;

/// Everything the loop thread needs to build its engine.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    pub sim: SimConfig,
    pub game_loop: GameLoopConfig,
    /// `None` keeps the high score in memory.
    pub high_score_path: Option<PathBuf>,
    pub autopilot: bool,
}

impl LoopOptions {
    pub fn from_config(config: AppConfig, autopilot: bool) -> Self {
        Self {
            sim: config.sim,
            game_loop: config.game_loop,
            high_score_path: Some(config.persistence.path),
            autopilot,
        }
    }
}

/// What a finished run amounted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub score: u32,
    pub high_score: u32,
    pub buildings_left: usize,
    pub enemies_left: usize,
    pub buildings_destroyed: usize,
    pub enemies_destroyed: usize,
    pub deaths: usize,
    pub backend_failures: usize,
}

/// Spawns the game loop on its own thread.
///
/// Returns the command sender and a handle that yields the run summary.
pub fn spawn_game_loop(
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyblast-game-loop".into())
        .spawn(move || run_game_loop(options, cmd_rx, &latest_snapshot))
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// Record an input event, queueing whatever command it triggers.
fn apply_input(engine: &mut SimulationEngine, input: &mut InputState, event: InputEvent) {
    if let Some(command) = input.apply(event) {
        engine.queue_command(command);
    }
}

fn tally(summary: &mut LoopSummary, snapshot: &FrameSnapshot) {
    use skyblast_core::events::GameEvent;

    for event in &snapshot.game_events {
        match event {
            GameEvent::BuildingDestroyed { .. } => summary.buildings_destroyed += 1,
            GameEvent::EnemyDestroyed { .. } => summary.enemies_destroyed += 1,
            GameEvent::PlayerDied => summary.deaths += 1,
            GameEvent::NewHighScore { value } => debug!(value, "new high score"),
            _ => {}
        }
    }
}

/// The game loop. Runs until the frame budget is spent, a Shutdown arrives or
/// the channel disconnects.
fn run_game_loop(
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopSummary {
    let high_scores: Box<dyn HighScoreStore> = match &options.high_score_path {
        Some(path) => Box::new(FileHighScoreStore::new(path)),
        None => Box::new(MemoryHighScore::default()),
    };
    let mut engine = SimulationEngine::with_high_score_store(options.sim, high_scores);
    let mut presenter = Presenter::new()
        .with_audio(Box::new(TracingAudio::default()))
        .with_render(Box::new(TracingRender::default()));
    let mut pilot: Option<Box<dyn Pilot>> = options
        .autopilot
        .then(|| Box::new(HunterPilot::new()) as Box<dyn Pilot>);
    if let Some(pilot) = &pilot {
        info!(pilot = pilot.id(), "autopilot engaged");
    }

    let frame_dt = options.game_loop.frame_dt();
    let frame_duration = Duration::from_secs_f32(frame_dt);
    let mut input = InputState::new();
    let mut last: Option<FrameSnapshot> = None;
    let mut summary = LoopSummary::default();
    let mut next_frame_time = Instant::now();

    'frames: loop {
        if options.game_loop.frames.is_some_and(|limit| summary.frames >= limit) {
            break;
        }

        // 1. Drain all pending messages
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => apply_input(&mut engine, &mut input, event),
                Ok(GameLoopCommand::PlayerCommand(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Scripted input
        if let Some(pilot) = pilot.as_mut() {
            for event in pilot.next_input(summary.frames, last.as_ref()) {
                apply_input(&mut engine, &mut input, event);
            }
        }

        // 3. Advance one frame at the nominal step
        let snapshot = engine.tick(frame_dt, &input);
        summary.frames += 1;
        tally(&mut summary, &snapshot);

        // 4. Hand the frame to the back-ends
        summary.backend_failures += presenter.present(&snapshot).failures;

        // 5. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        last = Some(snapshot);

        // 6. Sleep until the next frame
        if options.game_loop.paced {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind: resync instead of spiralling.
                next_frame_time = now;
            }
        }
    }

    let score = engine.score();
    summary.score = score.score;
    summary.high_score = score.high_score;
    summary.buildings_left = engine.store().buildings().count();
    summary.enemies_left = engine.store().enemies().count();
    info!(
        frames = summary.frames,
        score = summary.score,
        high_score = summary.high_score,
        buildings_destroyed = summary.buildings_destroyed,
        enemies_destroyed = summary.enemies_destroyed,
        "game loop stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyblast_core::commands::PlayerCommand;
    use skyblast_core::enums::GamePhase;

    fn quick(frames: Option<u64>, autopilot: bool) -> LoopOptions {
        LoopOptions {
            sim: SimConfig::default(),
            game_loop: GameLoopConfig {
                frame_rate: 60,
                frames,
                paced: false,
            },
            high_score_path: None,
            autopilot,
        }
    }

    #[test]
    fn command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputEvent::MouseDown)).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::ResetGame))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(InputEvent::MouseDown)));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::ResetGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn runs_the_frame_budget_and_publishes() {
        let latest = Arc::new(Mutex::new(None));
        let (_tx, handle) = spawn_game_loop(quick(Some(30), false), Arc::clone(&latest)).unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 30);
        assert_eq!(summary.backend_failures, 0);
        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.time.frame, 30);
        assert_eq!(snap.phase, GamePhase::Idle);
    }

    #[test]
    fn shutdown_stops_an_unbounded_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(quick(None, false), latest).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn dropping_the_sender_stops_the_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(quick(None, false), latest).unwrap();
        drop(tx);
        assert!(handle.join().is_ok());
    }

    #[test]
    fn input_events_reach_the_engine() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(quick(None, false), Arc::clone(&latest)).unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::PointerLock { locked: true }))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut engaged = false;
        while !engaged && Instant::now() < deadline {
            engaged = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|snap: &FrameSnapshot| snap.phase == GamePhase::Engaged);
            std::thread::sleep(Duration::from_millis(1));
        }
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
        assert!(engaged);
    }

    #[test]
    fn autopilot_does_damage() {
        let latest = Arc::new(Mutex::new(None));
        let (_tx, handle) = spawn_game_loop(quick(Some(600), true), latest).unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 600);
        // A death resets the score, never the high score.
        assert!(summary.high_score > 0);
        assert!(summary.high_score >= summary.score);
        assert_eq!(summary.backend_failures, 0);
    }
}
