//! Frame snapshot: the complete visible state handed to presentation each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, EntityId, GameEvent, RenderEvent};
use crate::types::{Color, SimTime};

/// Complete frame state produced by the simulation after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: PlayerView,
    pub screen: ScreenView,
    pub buildings: Vec<BuildingView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ShotView>,
    pub enemy_shots: Vec<ShotView>,
    pub debris: Vec<DebrisView>,
    pub particles: Vec<ParticleView>,
    pub shockwaves: Vec<ShockwaveView>,
    pub beams: Vec<BeamView>,
    pub cars: Vec<CarView>,
    /// Continuous engine hum level, 0..1.
    pub engine_intensity: f32,
    pub audio_events: Vec<AudioEvent>,
    pub render_events: Vec<RenderEvent>,
    pub game_events: Vec<GameEvent>,
}

/// On-screen readouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub high_score: u32,
    /// Health rounded for display.
    pub health: u32,
    pub weapon: String,
    pub fps: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Camera position including shake.
    pub camera: Vec3,
    pub view_direction: Vec3,
    pub weapon: WeaponKind,
    pub invulnerable: bool,
}

/// Full-screen post-processing inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenView {
    /// White flash pulse, 0..1.
    pub flash: f32,
    /// Red damage tint pulse, 0..1.
    pub damage: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: EntityId,
    pub center: Vec3,
    pub size: Vec3,
    pub health01: f32,
    pub color_scale: f32,
    pub emissive: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Vec3,
    pub facing: Vec3,
    pub health01: f32,
    pub emissive: f32,
}

/// A player projectile or enemy shot with its tracer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub id: EntityId,
    pub weapon: Option<WeaponKind>,
    pub position: Vec3,
    pub velocity: Vec3,
    pub tracer_tail: Vec3,
    pub tracer_head: Vec3,
    pub tracer_opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: EntityId,
    pub position: Vec3,
    pub rotation: Vec3,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: EntityId,
    pub positions: Vec<Vec3>,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockwaveView {
    pub id: EntityId,
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamView {
    pub id: EntityId,
    pub from: Vec3,
    pub to: Vec3,
    pub opacity: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarView {
    pub position: Vec3,
    /// Rotation about the y axis (radians).
    pub heading: f32,
    pub color: Color,
}
