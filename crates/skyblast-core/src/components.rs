//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not components;
//! the few methods here are derived read-outs for presentation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{clamp01, Aabb, Color};

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// A destructible city block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Mesh centre. Immutable after spawn.
    pub anchor: Vec3,
    /// Static bounds, computed at spawn.
    pub bounds: Aabb,
    pub height: f32,
    pub max_health: f32,
    pub health: f32,
    pub alive: bool,
    pub base_color: Color,
}

impl Building {
    pub fn new(anchor: Vec3, size: Vec3, base_color: Color) -> Self {
        let height = size.y;
        let max_health = BUILDING_HEALTH_BASE + height * BUILDING_HEALTH_PER_HEIGHT;
        Self {
            anchor,
            bounds: Aabb::from_center_size(anchor, size),
            height,
            max_health,
            health: max_health,
            alive: true,
            base_color,
        }
    }

    pub fn health01(&self) -> f32 {
        clamp01(self.health / self.max_health)
    }

    /// Albedo multiplier: buildings darken as they take damage.
    pub fn color_scale(&self) -> f32 {
        0.45 + 0.55 * self.health01()
    }

    /// Emissive intensity: damaged buildings glow hotter.
    pub fn emissive(&self) -> f32 {
        0.25 + (1.0 - self.health01()) * 1.2
    }

    /// Points awarded when this building is destroyed.
    pub fn destroy_score(&self) -> u32 {
        (BUILDING_SCORE_BASE + self.height * BUILDING_SCORE_PER_HEIGHT).floor() as u32
    }
}

/// An enemy ship on a patrol orbit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub phase: EnemyPhase,
    /// Current orbit angle (radians).
    pub angle: f32,
    pub radius: f32,
    /// Orbit rate (rad/s before the global orbit scale).
    pub angular_velocity: f32,
    /// Orbit centre; drifts toward the player when in range.
    pub patrol_center: Vec3,
    /// Cruise altitude the bob oscillates around.
    pub altitude: f32,
    pub health: f32,
    pub max_health: f32,
    /// Simulation time at which this enemy may fire again.
    pub next_shot_at: f64,
    /// Most recently drawn shot cooldown (seconds).
    pub shot_cooldown: f64,
    /// Unit vector from the ship toward the player's aim point.
    pub facing: Vec3,
}

impl Enemy {
    pub fn health01(&self) -> f32 {
        clamp01(self.health / self.max_health)
    }

    pub fn emissive(&self) -> f32 {
        1.45 + (1.0 - self.health01()) * 1.25
    }

    pub fn is_alive(&self) -> bool {
        self.phase == EnemyPhase::Patrolling
    }
}

/// Line segment trailing a moving shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracer {
    pub tail: Vec3,
    pub head: Vec3,
    pub opacity: f32,
    pub base_opacity: f32,
}

impl Tracer {
    pub fn new(at: Vec3, base_opacity: f32) -> Self {
        Self {
            tail: at,
            head: at,
            opacity: base_opacity,
            base_opacity,
        }
    }

    /// Stretch the tracer from the previous head to `head`.
    pub fn advance(&mut self, head: Vec3, fade: f32) {
        self.tail = self.head;
        self.head = head;
        self.opacity = self.base_opacity * clamp01(fade);
    }
}

/// A player projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub weapon: WeaponKind,
    /// Remaining life (seconds).
    pub life: f32,
}

/// A shot fired by an enemy at the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot {
    pub damage: f32,
    pub life: f32,
}

/// A tumbling chunk thrown out by an explosion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    pub life: f32,
    pub size: f32,
    /// Accumulated Euler rotation (radians).
    pub spin: Vec3,
    pub opacity: f32,
}

/// A burst of point particles sharing one life countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub life: f32,
    pub color: Color,
    pub opacity: f32,
}

/// An expanding ground ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shockwave {
    pub life: f32,
    pub color: Color,
    pub scale: f32,
    pub opacity: f32,
}

/// Laser tracer line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Beam {
    pub from: Vec3,
    pub to: Vec3,
    pub life: f32,
    pub color: Color,
    pub opacity: f32,
}

/// A cosmetic car cycling along a street lane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Car {
    /// Drives along the z axis when true, the x axis otherwise.
    pub along_z: bool,
    /// Fixed coordinate of the lane on the other axis.
    pub lane_offset: f32,
    pub speed: f32,
    /// +1 or -1.
    pub direction: f32,
    /// Phase offset along the lane, 0..1.
    pub phase: f32,
    pub color: Color,
}
