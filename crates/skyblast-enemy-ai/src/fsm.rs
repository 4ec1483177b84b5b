//! Enemy patrol state machine.
//!
//! Pure functions that compute the next orbit state, position, facing and fire
//! decision for one enemy from its current state and the player's situation.
//! No ECS dependency; operates on plain data.

use glam::Vec3;

use skyblast_core::enums::EnemyPhase;
use skyblast_core::types::{lerp, smoothing};

use crate::profiles::PatrolProfile;

/// Input to the patrol FSM for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub phase: EnemyPhase,
    pub position: Vec3,
    pub angle: f32,
    pub radius: f32,
    pub angular_velocity: f32,
    pub patrol_center: Vec3,
    pub altitude: f32,
    pub next_shot_at: f64,
    /// Player rig position.
    pub player_position: Vec3,
    /// Point shots are aimed at (player eye).
    pub aim_point: Vec3,
    /// Current simulation time.
    pub now: f64,
    pub dt: f32,
    /// Whether gameplay is active. Enemies never fire otherwise.
    pub engaged: bool,
}

/// A shot the enemy wants to spawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOrder {
    pub origin: Vec3,
    pub velocity: Vec3,
}

/// Output from the patrol FSM.
#[derive(Debug, Clone, Copy)]
pub struct EnemyUpdate {
    pub angle: f32,
    pub patrol_center: Vec3,
    pub position: Vec3,
    pub facing: Vec3,
    pub shot: Option<ShotOrder>,
}

impl EnemyUpdate {
    fn unchanged(ctx: &EnemyContext) -> Self {
        Self {
            angle: ctx.angle,
            patrol_center: ctx.patrol_center,
            position: ctx.position,
            facing: (ctx.aim_point - ctx.position).normalize_or_zero(),
            shot: None,
        }
    }
}

/// Evaluate one frame of patrol behaviour.
pub fn evaluate(ctx: &EnemyContext, profile: &PatrolProfile) -> EnemyUpdate {
    if ctx.phase == EnemyPhase::Dead {
        return EnemyUpdate::unchanged(ctx);
    }

    let angle = ctx.angle + ctx.angular_velocity * ctx.dt * profile.orbit_rate_scale;

    // Range is measured before this frame's steering step.
    let distance = ctx.position.distance(ctx.player_position);
    let patrol_center = drift_toward_player(ctx, profile, distance);

    let target = orbit_target(patrol_center, angle, ctx.radius, ctx.altitude, ctx.now, profile);
    let position = steer(ctx.position, target, ctx.dt, profile);
    let facing = (ctx.aim_point - position).normalize_or_zero();

    let shot = should_fire(ctx, profile, distance).then(|| ShotOrder {
        origin: position + facing * profile.muzzle_offset,
        velocity: facing * profile.shot_speed,
    });

    EnemyUpdate {
        angle,
        patrol_center,
        position,
        facing,
        shot,
    }
}

/// Nudge the patrol centre's XZ toward the player when within aggro range.
fn drift_toward_player(ctx: &EnemyContext, profile: &PatrolProfile, distance: f32) -> Vec3 {
    let mut center = ctx.patrol_center;
    if distance < profile.aggro_range {
        let t = smoothing(profile.aggro_decay_base, ctx.dt);
        center.x = lerp(center.x, ctx.player_position.x, t);
        center.z = lerp(center.z, ctx.player_position.z, t);
    }
    center
}

/// Point on the orbit ring for `angle`, with a sinusoidal altitude bob.
pub fn orbit_target(
    center: Vec3,
    angle: f32,
    radius: f32,
    altitude: f32,
    now: f64,
    profile: &PatrolProfile,
) -> Vec3 {
    let bob_phase = (now as f32 + angle) * profile.bob_rate;
    Vec3::new(
        center.x + angle.cos() * radius,
        altitude + bob_phase.sin() * profile.bob_amplitude,
        center.z + angle.sin() * radius,
    )
}

/// Ease toward `target` per axis; vertical uses its own rate.
fn steer(position: Vec3, target: Vec3, dt: f32, profile: &PatrolProfile) -> Vec3 {
    let h = smoothing(profile.steer_decay_horizontal, dt);
    let v = smoothing(profile.steer_decay_vertical, dt);
    Vec3::new(
        lerp(position.x, target.x, h),
        lerp(position.y, target.y, v),
        lerp(position.z, target.z, h),
    )
}

fn should_fire(ctx: &EnemyContext, profile: &PatrolProfile, distance: f32) -> bool {
    ctx.engaged && distance < profile.fire_range && ctx.now >= ctx.next_shot_at
}
