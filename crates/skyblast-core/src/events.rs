//! Events emitted by the simulation for audio, render and UI feedback.
//!
//! The simulation only pushes these into queues; presentation adapters drain
//! them after the frame step.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable identifier for a simulated entity, as seen by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Fire-and-forget audio cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    WeaponSwitch { weapon: WeaponKind },
    Cannon,
    RocketLaunch,
    /// Laser struck something.
    Laser,
    /// Laser hit nothing: a lighter zap.
    LaserMiss,
    /// Blast of the given relative size (roughly 0.2 - 1.4).
    Explosion { size: f32 },
    EnemyShot,
    PlayerHit,
    Reset,
    EngineStart,
    EngineStop,
    MusicStart,
    MusicStop,
}

/// Render object lifecycle. Back-ends own whatever resources these map to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    Added { id: EntityId, kind: VisualKind },
    Removed { id: EntityId },
}

/// Gameplay notifications for the HUD and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    BuildingDestroyed { id: EntityId, position: Vec3, award: u32 },
    EnemyDestroyed { id: EntityId, position: Vec3, award: u32 },
    EnemyHit { id: EntityId, award: u32 },
    PlayerDamaged { health: f32 },
    PlayerDied,
    NewHighScore { value: u32 },
    WeaponSelected { weapon: WeaponKind },
    GameReset,
}
