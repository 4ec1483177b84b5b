//! Explicit simulation context: all mutable game state, passed to every system.

use hecs::{DynamicBundle, Entity};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyblast_core::enums::{GamePhase, VisualKind};
use skyblast_core::events::{AudioEvent, GameEvent, RenderEvent};
use skyblast_core::types::SimTime;
use skyblast_enemy_ai::profiles::PatrolProfile;

use crate::engine::SimConfig;
use crate::player::PlayerState;
use crate::score::ScoreBoard;
use crate::store::EntityStore;
use crate::systems::camera::{CameraShake, ScreenFx};
use crate::systems::traffic::Traffic;

/// Events produced during a tick, drained into the snapshot.
#[derive(Debug, Default)]
pub struct EventQueue {
    pub audio: Vec<AudioEvent>,
    pub render: Vec<RenderEvent>,
    pub game: Vec<GameEvent>,
}

pub struct SimContext {
    pub config: SimConfig,
    pub store: EntityStore,
    pub player: PlayerState,
    pub score: ScoreBoard,
    pub screen: ScreenFx,
    pub shake: CameraShake,
    pub time: SimTime,
    pub phase: GamePhase,
    pub rng: ChaCha8Rng,
    pub events: EventQueue,
    pub patrol: PatrolProfile,
    pub traffic: Traffic,
    /// Engine hum level, 0..1.
    pub engine_intensity: f32,
    /// Scratch buffer for systems that collect handles before removing them.
    pub despawn_buffer: Vec<Entity>,
}

impl SimContext {
    /// An empty context. The world is not populated; see `world_setup::populate`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            store: EntityStore::new(),
            player: PlayerState::default(),
            score: ScoreBoard::default(),
            screen: ScreenFx::default(),
            shake: CameraShake::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            events: EventQueue::default(),
            patrol: PatrolProfile::default(),
            traffic: Traffic::default(),
            engine_intensity: 0.0,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn spawn(&mut self, components: impl DynamicBundle, kind: VisualKind) -> Entity {
        self.store.spawn(components, kind, &mut self.events.render)
    }

    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.store.despawn(entity, &mut self.events.render)
    }

    pub fn audio(&mut self, event: AudioEvent) {
        self.events.audio.push(event);
    }

    pub fn game_event(&mut self, event: GameEvent) {
        self.events.game.push(event);
    }

    pub fn award(&mut self, points: u32) {
        self.score.award(points);
    }

    pub fn is_engaged(&self) -> bool {
        self.phase == GamePhase::Engaged
    }
}
