use glam::Vec3;
use serde::{Deserialize, Serialize};

use skyblast_core::commands::MoveAxes;
use skyblast_core::constants::*;
use skyblast_core::enums::WeaponKind;
use skyblast_core::types::{clamp01, Ray};

/// The player's ship. Not an ECS entity: there is exactly one and every system
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub invulnerable_secs: f32,
    pub weapon: WeaponKind,
    /// Earliest fire time per weapon, indexed by `WeaponKind::index`.
    pub next_fire_at: [f64; 3],
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(PLAYER_START),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invulnerable_secs: 0.0,
            weapon: WeaponKind::default(),
            next_fire_at: [0.0; 3],
        }
    }
}

/// Unit view vector for a yaw/pitch pair. Yaw 0 looks down -Z.
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        -yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}

impl PlayerState {
    pub fn view_direction(&self) -> Vec3 {
        view_direction(self.yaw, self.pitch)
    }

    /// The point enemies aim at and shots must reach.
    pub fn aim_point(&self) -> Vec3 {
        self.position + Vec3::Y * PLAYER_EYE_HEIGHT
    }

    /// Camera ray, offset by the current shake.
    pub fn view_ray(&self, camera_offset: Vec3) -> Ray {
        Ray::new(self.position + camera_offset, self.view_direction())
    }

    pub fn look(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_secs > 0.0
    }

    pub fn tick_invulnerability(&mut self, dt: f32) {
        self.invulnerable_secs = (self.invulnerable_secs - dt).max(0.0);
    }

    /// Restore health after a reset. Position, weapon and cooldowns carry over.
    pub fn reset_vitals(&mut self) {
        self.health = self.max_health;
        self.invulnerable_secs = 0.0;
    }

    /// Integrate one step of flight and return the engine hum intensity.
    ///
    /// Horizontal thrust follows the view heading flattened onto the ground
    /// plane; vertical thrust is world up.
    pub fn integrate(&mut self, axes: MoveAxes, boost: bool, dt: f32) -> f32 {
        let thrust = if boost { PLAYER_BOOST_THRUST } else { PLAYER_THRUST };

        let mut forward = self.view_direction();
        forward.y = 0.0;
        let forward = forward.normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let mut accel = (forward * axes.forward + right * axes.strafe) * thrust;
        accel.y = axes.up * thrust;

        self.velocity += accel * dt;
        self.velocity *= PLAYER_DAMPING_BASE.powf(dt);
        self.position += self.velocity * dt;
        self.position.y = self.position.y.max(PLAYER_MIN_ALTITUDE);

        engine_intensity(self.velocity.length())
    }
}

/// Engine hum level for a given ground speed: quadratic in the normalised excess
/// over idle speed.
pub fn engine_intensity(speed: f32) -> f32 {
    let x = clamp01((speed - ENGINE_IDLE_SPEED) / ENGINE_SPEED_SPAN);
    x * x
}
