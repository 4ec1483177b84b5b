use glam::Vec3;

use skyblast_core::enums::EnemyPhase;

use crate::fsm::{evaluate, orbit_target, EnemyContext};
use crate::profiles::PatrolProfile;

fn patrolling_ctx() -> EnemyContext {
    EnemyContext {
        phase: EnemyPhase::Patrolling,
        position: Vec3::new(200.0, 60.0, 0.0),
        angle: 0.0,
        radius: 200.0,
        angular_velocity: 0.3,
        patrol_center: Vec3::new(0.0, 60.0, 0.0),
        altitude: 60.0,
        next_shot_at: 0.0,
        player_position: Vec3::new(0.0, 22.0, 90.0),
        aim_point: Vec3::new(0.0, 23.6, 90.0),
        now: 1.0,
        dt: 1.0 / 60.0,
        engaged: true,
    }
}

fn far_player(ctx: &mut EnemyContext) {
    ctx.player_position = Vec3::new(5000.0, 22.0, 5000.0);
    ctx.aim_point = ctx.player_position + Vec3::Y * 1.6;
}

#[test]
fn test_dead_enemy_is_frozen() {
    let mut ctx = patrolling_ctx();
    ctx.phase = EnemyPhase::Dead;
    let update = evaluate(&ctx, &PatrolProfile::default());
    assert_eq!(update.angle, ctx.angle);
    assert_eq!(update.position, ctx.position);
    assert_eq!(update.patrol_center, ctx.patrol_center);
    assert!(update.shot.is_none());
}

#[test]
fn test_orbit_angle_advances_with_scaled_rate() {
    let ctx = patrolling_ctx();
    let update = evaluate(&ctx, &PatrolProfile::default());
    let expected = 0.3 * (1.0 / 60.0) * 0.45;
    assert!((update.angle - expected).abs() < 1e-7);
}

#[test]
fn test_aggro_drift_only_in_range() {
    let profile = PatrolProfile::default();

    // In range: centre moves toward the player on XZ, y untouched.
    let ctx = patrolling_ctx();
    let update = evaluate(&ctx, &profile);
    assert!(update.patrol_center.z > 0.0);
    assert_eq!(update.patrol_center.y, ctx.patrol_center.y);
    // Drift is slow: well under a unit per frame.
    assert!(update.patrol_center.z < 0.01);

    // Out of range: centre stays put.
    let mut ctx = patrolling_ctx();
    far_player(&mut ctx);
    let update = evaluate(&ctx, &profile);
    assert_eq!(update.patrol_center, ctx.patrol_center);
}

#[test]
fn test_steering_eases_instead_of_teleporting() {
    let profile = PatrolProfile::default();
    let mut ctx = patrolling_ctx();
    ctx.position = Vec3::new(0.0, 60.0, 0.0);
    far_player(&mut ctx);

    let target = orbit_target(ctx.patrol_center, 0.0, ctx.radius, ctx.altitude, ctx.now, &profile);
    let update = evaluate(&ctx, &profile);

    assert!(update.position.x > 0.0, "moved toward target");
    assert!(update.position.x < target.x * 0.1, "but only a fraction of the way");
}

#[test]
fn test_facing_points_at_aim_point() {
    let ctx = patrolling_ctx();
    let update = evaluate(&ctx, &PatrolProfile::default());
    let expected = (ctx.aim_point - update.position).normalize();
    assert!(update.facing.distance(expected) < 1e-5);
    assert!((update.facing.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_fires_when_in_range_and_ready() {
    let profile = PatrolProfile::default();
    let ctx = patrolling_ctx();
    let update = evaluate(&ctx, &profile);
    let shot = update.shot.expect("should fire");
    assert!((shot.velocity.length() - profile.shot_speed).abs() < 1e-3);
    let offset = shot.origin.distance(update.position);
    assert!((offset - profile.muzzle_offset).abs() < 1e-3);
}

#[test]
fn test_holds_fire_on_cooldown_out_of_range_or_idle() {
    let profile = PatrolProfile::default();

    let mut ctx = patrolling_ctx();
    ctx.next_shot_at = 2.0;
    assert!(evaluate(&ctx, &profile).shot.is_none(), "cooldown");

    let mut ctx = patrolling_ctx();
    far_player(&mut ctx);
    assert!(evaluate(&ctx, &profile).shot.is_none(), "range");

    let mut ctx = patrolling_ctx();
    ctx.engaged = false;
    assert!(evaluate(&ctx, &profile).shot.is_none(), "not engaged");
}

#[test]
fn test_altitude_bob_bounds() {
    let profile = PatrolProfile::default();
    for i in 0..100 {
        let t = orbit_target(Vec3::ZERO, 0.3, 100.0, 50.0, i as f64 * 0.37, &profile);
        assert!(t.y >= 50.0 - profile.bob_amplitude - 1e-4);
        assert!(t.y <= 50.0 + profile.bob_amplitude + 1e-4);
    }
}
