//! Patrol behaviour tuning.

use skyblast_core::constants::{ENEMY_SHOT_MUZZLE, ENEMY_SHOT_SPEED};

/// Tunables for the patrol behaviour. One profile is shared by the whole wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolProfile {
    /// Global multiplier on each ship's angular velocity.
    pub orbit_rate_scale: f32,
    /// Player distance below which the patrol centre drifts toward the player.
    pub aggro_range: f32,
    /// Per-second retention for the aggro drift (`1 - base^dt` toward the player).
    pub aggro_decay_base: f32,
    /// Per-second retention for horizontal steering.
    pub steer_decay_horizontal: f32,
    /// Per-second retention for vertical steering.
    pub steer_decay_vertical: f32,
    pub bob_amplitude: f32,
    pub bob_rate: f32,
    /// Player distance below which the ship opens fire.
    pub fire_range: f32,
    pub shot_speed: f32,
    /// Spawn offset of a shot along its direction.
    pub muzzle_offset: f32,
}

impl Default for PatrolProfile {
    fn default() -> Self {
        Self {
            orbit_rate_scale: 0.45,
            aggro_range: 420.0,
            aggro_decay_base: 0.995,
            steer_decay_horizontal: 0.35,
            steer_decay_vertical: 0.40,
            bob_amplitude: 8.0,
            bob_rate: 0.7,
            fire_range: 520.0,
            shot_speed: ENEMY_SHOT_SPEED,
            muzzle_offset: ENEMY_SHOT_MUZZLE,
        }
    }
}
