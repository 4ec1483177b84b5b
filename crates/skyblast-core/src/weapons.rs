//! Weapon configuration table.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;
use crate::types::Color;

/// Static tuning for one weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub kind: WeaponKind,
    /// Minimum time between two shots (seconds).
    pub cooldown_secs: f64,
    /// Projectile speed; zero for hitscan.
    pub speed: f32,
    /// Damage against buildings (and enemies unless `enemy_damage` differs).
    pub damage: f32,
    /// Damage against enemy ships.
    pub enemy_damage: f32,
    /// Area-of-effect radius; zero for single-target weapons.
    pub splash_radius: f32,
    pub color: Color,
    /// Projectile lifetime before burnout (seconds). Unused for hitscan.
    pub lifetime_secs: f32,
    /// Peak tracer opacity.
    pub tracer_opacity: f32,
}

impl WeaponSpec {
    pub fn is_hitscan(&self) -> bool {
        self.speed <= 0.0
    }

    pub fn has_splash(&self) -> bool {
        self.splash_radius > 0.0
    }
}

/// Look up the tuning for a weapon.
pub fn weapon_spec(kind: WeaponKind) -> WeaponSpec {
    match kind {
        WeaponKind::Cannon => WeaponSpec {
            kind,
            cooldown_secs: 0.12,
            speed: 240.0,
            damage: 26.0,
            enemy_damage: 26.0,
            splash_radius: 0.0,
            color: Color::CANNON,
            lifetime_secs: 2.0,
            tracer_opacity: 0.55,
        },
        WeaponKind::Rocket => WeaponSpec {
            kind,
            cooldown_secs: 0.65,
            speed: 140.0,
            damage: 120.0,
            enemy_damage: 120.0,
            splash_radius: 18.0,
            color: Color::ROCKET,
            lifetime_secs: 2.8,
            tracer_opacity: 0.35,
        },
        WeaponKind::Laser => WeaponSpec {
            kind,
            cooldown_secs: 0.05,
            speed: 0.0,
            damage: 10.0,
            enemy_damage: 18.0,
            splash_radius: 0.0,
            color: Color::LASER,
            lifetime_secs: 0.0,
            tracer_opacity: 0.9,
        },
    }
}
