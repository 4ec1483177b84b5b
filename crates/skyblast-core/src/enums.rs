//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player weapon selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Fast single-target projectile.
    #[default]
    Cannon,
    /// Slow splash projectile.
    Rocket,
    /// Instant hitscan beam.
    Laser,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Cannon, WeaponKind::Rocket, WeaponKind::Laser];

    /// Slot used for per-weapon bookkeeping arrays.
    pub fn index(self) -> usize {
        match self {
            WeaponKind::Cannon => 0,
            WeaponKind::Rocket => 1,
            WeaponKind::Laser => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Cannon => "Cannon",
            WeaponKind::Rocket => "Rocket",
            WeaponKind::Laser => "Laser",
        }
    }
}

/// Enemy lifecycle. One-way: Patrolling -> Dead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Patrolling,
    Dead,
}

/// Top-level gameplay gate, driven by pointer lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pointer not locked: the player and weapons are inert, enemies hold fire.
    #[default]
    Idle,
    /// Pointer locked: full gameplay.
    Engaged,
}

/// Keyboard codes the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    Digit1,
    Digit2,
    Digit3,
    KeyR,
}

/// What a render object represents, so a back-end can pick geometry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Building,
    Enemy,
    Projectile(WeaponKind),
    EnemyShot,
    Debris,
    ParticleBurst,
    Shockwave,
    Beam,
}

/// Outcome of applying damage to a building or enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Target missing, already destroyed, or no damage to apply.
    Ignored,
    /// Health reduced, target still alive.
    Damaged,
    /// This hit crossed the lethal threshold.
    Destroyed,
}

/// Outcome of an incoming hit on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerHitOutcome {
    /// Invulnerability window active.
    Ignored,
    Damaged,
    /// Health exhausted; the game was reset.
    Killed,
}
