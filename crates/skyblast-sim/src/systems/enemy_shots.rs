//! Enemy shot flight: ground impacts, player contact and expiry.

use glam::Vec3;

use skyblast_core::components::{EnemyShot, Position, Tracer, Velocity};
use skyblast_core::constants::{ENEMY_SHOT_LIFE_SECS, PLAYER_HIT_RADIUS, PROJECTILE_GROUND_Y};
use skyblast_core::enums::PlayerHitOutcome;
use skyblast_core::types::Color;

use crate::combat;
use crate::context::SimContext;
use crate::systems::effects;

pub fn run(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    let target = ctx.player.aim_point();
    let shots: Vec<_> = ctx
        .store
        .world()
        .query::<&EnemyShot>()
        .iter()
        .map(|(e, _)| e)
        .collect();

    for entity in shots {
        let Ok((pos, vel, shot, tracer)) = ctx
            .store
            .world_mut()
            .query_one_mut::<(&mut Position, &Velocity, &mut EnemyShot, &mut Tracer)>(entity)
        else {
            continue;
        };
        shot.life -= dt;
        pos.0 += vel.0 * dt;
        tracer.advance(pos.0, shot.life / ENEMY_SHOT_LIFE_SECS);
        let (position, life, damage) = (pos.0, shot.life, shot.damage);

        if position.y <= PROJECTILE_GROUND_Y {
            effects::spawn_particles(ctx, position, Color::ENEMY_SHOT, 42);
            effects::spawn_shockwave(ctx, position + Vec3::Y * 0.2, Color::ENEMY_SHOT);
            ctx.despawn(entity);
            continue;
        }

        if position.distance(target) < PLAYER_HIT_RADIUS {
            effects::spawn_particles(ctx, position, Color::ENEMY_SHOT, 62);
            ctx.despawn(entity);
            if combat::player_hit(ctx, damage) == PlayerHitOutcome::Killed {
                // The reset already released every remaining shot.
                return;
            }
            continue;
        }

        if life <= 0.0 {
            ctx.despawn(entity);
        }
    }
}
