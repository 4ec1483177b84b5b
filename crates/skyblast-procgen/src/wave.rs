//! Enemy wave layout.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use skyblast_core::constants::{ENEMY_SHOT_COOLDOWN_MIN, ENEMY_SHOT_COOLDOWN_SPAN};

use crate::city::CityLayout;

/// Initial state for one enemy ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySeed {
    pub angle: f32,
    pub radius: f32,
    pub altitude: f32,
    pub angular_velocity: f32,
    pub patrol_center: Vec3,
    pub shot_cooldown: f64,
}

impl EnemySeed {
    /// Spawn position: on the orbit ring at the seed angle.
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(
            self.patrol_center.x + self.angle.cos() * self.radius,
            self.altitude,
            self.patrol_center.z + self.angle.sin() * self.radius,
        )
    }
}

/// Draw a randomised shot cooldown window.
pub fn shot_cooldown<R: Rng>(rng: &mut R) -> f64 {
    ENEMY_SHOT_COOLDOWN_MIN + rng.gen::<f64>() * ENEMY_SHOT_COOLDOWN_SPAN
}

/// Generate a wave of `count` ships orbiting independent centres near the city core.
pub fn generate_wave<R: Rng>(rng: &mut R, layout: &CityLayout, count: usize) -> Vec<EnemySeed> {
    let half_w = layout.half_width();
    let half_d = layout.half_depth();

    (0..count)
        .map(|_| {
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let radius = 120.0 + rng.gen::<f32>() * 220.0;
            let altitude = 40.0 + rng.gen::<f32>() * 90.0;
            let rate = rng.gen::<f32>() * 0.25 + 0.14;
            let angular_velocity = if rng.gen_bool(0.5) { rate } else { -rate };
            let cx = (rng.gen::<f32>() * 2.0 - 1.0) * half_w * 0.15;
            let cz = (rng.gen::<f32>() * 2.0 - 1.0) * half_d * 0.15;

            EnemySeed {
                angle,
                radius,
                altitude,
                angular_velocity,
                patrol_center: Vec3::new(cx, altitude, cz),
                shot_cooldown: shot_cooldown(rng),
            }
        })
        .collect()
}
