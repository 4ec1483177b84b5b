//! Simulation engine: the frame orchestrator.
//!
//! `SimulationEngine` owns the simulation context, processes player commands,
//! runs all systems in a fixed order and produces `FrameSnapshot`s. Completely
//! headless (no render or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use skyblast_core::commands::{InputState, PlayerCommand};
use skyblast_core::constants::*;
use skyblast_core::enums::GamePhase;
use skyblast_core::events::{AudioEvent, GameEvent};
use skyblast_core::state::FrameSnapshot;
use skyblast_core::types::SimTime;
use skyblast_procgen::CityLayout;

use crate::combat;
use crate::context::SimContext;
use crate::player::PlayerState;
use crate::score::{HighScoreStore, MemoryHighScore, ScoreBoard};
use crate::store::EntityStore;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub city: CityLayout,
    pub enemy_wave_size: usize,
    pub traffic_cars: usize,
    /// Upper bound on a single frame step (seconds).
    pub max_frame_dt: f32,
}

impl SimConfig {
    /// Replace an unusable frame-step bound with the default.
    pub fn sanitized(mut self) -> Self {
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            warn!(
                max_frame_dt = self.max_frame_dt,
                fallback = MAX_FRAME_DT,
                "invalid max_frame_dt, using default"
            );
            self.max_frame_dt = MAX_FRAME_DT;
        }
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            city: CityLayout::default(),
            enemy_wave_size: ENEMY_WAVE_SIZE,
            traffic_cars: TRAFFIC_CAR_COUNT,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

/// Frames-per-second readout, republished every `FPS_WINDOW_SECS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    accumulated: f32,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn sample(&mut self, dt: f32) {
        self.accumulated += dt;
        self.frames += 1;
        if self.accumulated >= FPS_WINDOW_SECS {
            self.fps = (self.frames as f32 / self.accumulated).round() as u32;
            self.accumulated = 0.0;
            self.frames = 0;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// The simulation engine. Owns the context and all sim state.
pub struct SimulationEngine {
    ctx: SimContext,
    command_queue: VecDeque<PlayerCommand>,
    high_scores: Box<dyn HighScoreStore>,
    persisted_high_score: u32,
    fps: FpsCounter,
}

impl SimulationEngine {
    /// Create an engine backed by an in-memory high score.
    pub fn new(config: SimConfig) -> Self {
        Self::with_high_score_store(config, Box::new(MemoryHighScore::default()))
    }

    /// Create an engine, reading the best score so far from `high_scores`.
    /// An unreadable store starts the high score at zero.
    pub fn with_high_score_store(config: SimConfig, high_scores: Box<dyn HighScoreStore>) -> Self {
        let persisted_high_score = match high_scores.load() {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "could not load high score, starting from zero");
                0
            }
        };

        let mut ctx = SimContext::new(config.sanitized());
        ctx.score.high_score = persisted_high_score;
        world_setup::populate(&mut ctx);
        info!(
            seed = ctx.config.seed,
            buildings = ctx.store.buildings().count(),
            enemies = ctx.store.enemies().count(),
            high_score = persisted_high_score,
            "simulation ready"
        );

        Self {
            ctx,
            command_queue: VecDeque::new(),
            high_scores,
            persisted_high_score,
            fps: FpsCounter::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `raw_dt` is the wall-clock frame time; it is clamped before use so a
    /// stall never produces a huge step.
    pub fn tick(&mut self, raw_dt: f32, input: &InputState) -> FrameSnapshot {
        self.process_commands();

        let dt = if raw_dt.is_finite() {
            raw_dt.max(0.0).min(self.ctx.config.max_frame_dt)
        } else {
            0.0
        };
        self.ctx.time.advance(dt);
        self.run_systems(dt, input);
        self.flush_high_score();

        systems::snapshot::build_snapshot(&mut self.ctx, self.fps.fps())
    }

    /// Reset the game immediately, outside the command queue.
    pub fn reset(&mut self) {
        world_setup::reset_game(&mut self.ctx);
    }

    pub fn phase(&self) -> GamePhase {
        self.ctx.phase
    }

    pub fn time(&self) -> SimTime {
        self.ctx.time
    }

    pub fn player(&self) -> &PlayerState {
        &self.ctx.player
    }

    pub fn score(&self) -> ScoreBoard {
        self.ctx.score
    }

    pub fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    pub fn config(&self) -> &SimConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    /// Direct access to the context, for scenario setup in tests and tools.
    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        let ctx = &mut self.ctx;
        match command {
            PlayerCommand::SelectWeapon { weapon } => {
                ctx.player.weapon = weapon;
                ctx.audio(AudioEvent::WeaponSwitch { weapon });
                ctx.game_event(GameEvent::WeaponSelected { weapon });
                debug!(weapon = weapon.name(), "weapon selected");
            }
            PlayerCommand::ResetGame => {
                world_setup::reset_game(ctx);
            }
            PlayerCommand::LockPointer => {
                if ctx.phase != GamePhase::Engaged {
                    ctx.phase = GamePhase::Engaged;
                    ctx.audio(AudioEvent::EngineStart);
                    ctx.audio(AudioEvent::MusicStart);
                    info!("pointer locked, engaged");
                }
            }
            PlayerCommand::UnlockPointer => {
                if ctx.phase == GamePhase::Engaged {
                    ctx.phase = GamePhase::Idle;
                    ctx.engine_intensity = 0.0;
                    ctx.audio(AudioEvent::EngineStop);
                    ctx.audio(AudioEvent::MusicStop);
                    info!("pointer released, idle");
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &InputState) {
        let ctx = &mut self.ctx;

        // 1. Countdowns: screen pulses, invulnerability
        systems::camera::decay_timers(ctx, dt);
        // 2. FPS readout
        self.fps.sample(dt);
        // 3. Player flight and weapons, only while engaged
        if ctx.is_engaged() {
            ctx.player.look(input.yaw, input.pitch);
            ctx.engine_intensity = ctx.player.integrate(input.move_axes(), input.boost(), dt);
            if input.fire_held {
                let view = ctx.player.view_ray(ctx.shake.offset);
                combat::fire(ctx, view);
            }
        }
        // 4. Enemy behaviour
        systems::enemy_ai::run(ctx);
        // 5. Enemy shots
        systems::enemy_shots::run(ctx);
        // 6. Camera shake
        systems::camera::run(ctx);
        // 7. Traffic
        systems::traffic::run(ctx);
        // 8. Player projectiles
        systems::projectiles::run(ctx);
        // 9. Effects
        systems::effects::run(ctx);
    }

    /// Write the high score through if it rose this frame.
    fn flush_high_score(&mut self) {
        let high = self.ctx.score.high_score;
        if high <= self.persisted_high_score {
            return;
        }
        self.persisted_high_score = high;
        self.ctx.game_event(GameEvent::NewHighScore { value: high });
        if let Err(err) = self.high_scores.store(high) {
            warn!(%err, high_score = high, "could not persist high score");
        }
    }
}
