//! Enemy behaviour system: applies the patrol controller to every live ship and
//! spawns the shots it orders.

use skyblast_core::components::{EnemyShot, Enemy, Position, Tracer, Velocity};
use skyblast_core::constants::{ENEMY_SHOT_DAMAGE, ENEMY_SHOT_LIFE_SECS, ENEMY_SHOT_TRACER_OPACITY};
use skyblast_core::enums::VisualKind;
use skyblast_core::events::AudioEvent;
use skyblast_enemy_ai::fsm::{evaluate, EnemyContext, ShotOrder};
use skyblast_procgen::wave::shot_cooldown;

use crate::context::SimContext;

pub fn run(ctx: &mut SimContext) {
    let profile = ctx.patrol;
    let player_position = ctx.player.position;
    let aim_point = ctx.player.aim_point();
    let now = ctx.time.elapsed_secs;
    let dt = ctx.time.dt;
    let engaged = ctx.is_engaged();

    let mut orders: Vec<ShotOrder> = Vec::new();
    let enemies: Vec<_> = ctx.store.enemies().collect();

    for entity in enemies {
        let Ok((pos, enemy)) = ctx
            .store
            .world_mut()
            .query_one_mut::<(&mut Position, &mut Enemy)>(entity)
        else {
            continue;
        };

        let update = evaluate(
            &EnemyContext {
                phase: enemy.phase,
                position: pos.0,
                angle: enemy.angle,
                radius: enemy.radius,
                angular_velocity: enemy.angular_velocity,
                patrol_center: enemy.patrol_center,
                altitude: enemy.altitude,
                next_shot_at: enemy.next_shot_at,
                player_position,
                aim_point,
                now,
                dt,
                engaged,
            },
            &profile,
        );

        pos.0 = update.position;
        enemy.angle = update.angle;
        enemy.patrol_center = update.patrol_center;
        enemy.facing = update.facing;

        if let Some(order) = update.shot {
            enemy.next_shot_at = now + enemy.shot_cooldown;
            enemy.shot_cooldown = shot_cooldown(&mut ctx.rng);
            orders.push(order);
        }
    }

    for order in orders {
        ctx.spawn(
            (
                Position(order.origin),
                Velocity(order.velocity),
                EnemyShot {
                    damage: ENEMY_SHOT_DAMAGE,
                    life: ENEMY_SHOT_LIFE_SECS,
                },
                Tracer::new(order.origin, ENEMY_SHOT_TRACER_OPACITY),
            ),
            VisualKind::EnemyShot,
        );
        ctx.audio(AudioEvent::EnemyShot);
    }
}
