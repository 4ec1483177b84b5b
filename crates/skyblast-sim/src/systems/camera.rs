//! Camera shake and full-screen pulses.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use skyblast_core::constants::{DAMAGE_TINT_DECAY_RATE, FLASH_DECAY_RATE, SHAKE_REFERENCE_SECS};

use crate::context::SimContext;

/// White flash and red damage tint, each a 0..1 pulse that decays linearly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenFx {
    pub flash: f32,
    pub damage: f32,
}

impl ScreenFx {
    pub fn pulse_flash(&mut self, amount: f32) {
        self.flash = (self.flash + amount).min(1.0);
    }

    pub fn pulse_damage(&mut self, amount: f32) {
        self.damage = (self.damage + amount).min(1.0);
    }

    pub fn decay(&mut self, dt: f32) {
        self.flash = (self.flash - dt * FLASH_DECAY_RATE).max(0.0);
        self.damage = (self.damage - dt * DAMAGE_TINT_DECAY_RATE).max(0.0);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraShake {
    pub remaining: f32,
    pub magnitude: f32,
    /// Offset applied to the camera this frame.
    pub offset: Vec3,
}

impl CameraShake {
    /// Request a shake. Overlapping requests keep the stronger magnitude and
    /// the longer duration.
    pub fn kick(&mut self, magnitude: f32, duration: f32) {
        self.magnitude = self.magnitude.max(magnitude);
        self.remaining = self.remaining.max(duration);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Decay the frame-rate independent countdowns.
pub fn decay_timers(ctx: &mut SimContext, dt: f32) {
    ctx.screen.decay(dt);
    ctx.player.tick_invulnerability(dt);
}

/// Advance the shake and pick this frame's random camera offset.
pub fn run(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    let shake = &mut ctx.shake;
    shake.offset = Vec3::ZERO;
    if shake.remaining <= 0.0 {
        return;
    }

    shake.remaining -= dt;
    let magnitude = shake.magnitude * (shake.remaining / SHAKE_REFERENCE_SECS);
    let jitter = Vec3::new(
        ctx.rng.gen::<f32>() - 0.5,
        ctx.rng.gen::<f32>() - 0.5,
        ctx.rng.gen::<f32>() - 0.5,
    );
    shake.offset = jitter * magnitude;

    if shake.remaining <= 0.0 {
        shake.remaining = 0.0;
        shake.magnitude = 0.0;
        shake.offset = Vec3::ZERO;
    }
}
