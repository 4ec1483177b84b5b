//! Player projectile flight and terminal events.
//!
//! Terminal checks run in a fixed order: ground, enemy contact, building
//! containment, then lifetime expiry. Rockets detonate on every terminal event,
//! including a weaker dud blast when they burn out in the air.

use hecs::Entity;

use skyblast_core::components::{Position, Projectile, Tracer, Velocity};
use skyblast_core::constants::*;
use skyblast_core::weapons::{weapon_spec, WeaponSpec};

use crate::combat;
use crate::context::SimContext;
use crate::spatial;

pub fn run(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    let handles: Vec<Entity> = ctx
        .store
        .world()
        .query::<&Projectile>()
        .iter()
        .map(|(e, _)| e)
        .collect();

    for entity in handles {
        let Ok((pos, vel, projectile, tracer)) = ctx
            .store
            .world_mut()
            .query_one_mut::<(&mut Position, &Velocity, &mut Projectile, &mut Tracer)>(entity)
        else {
            continue;
        };
        projectile.life -= dt;
        pos.0 += vel.0 * dt;
        tracer.advance(pos.0, projectile.life / TRACER_FADE_SECS);
        let (position, life, spec) = (pos.0, projectile.life, weapon_spec(projectile.weapon));

        if resolve_terminal(ctx, &spec, position, life) {
            ctx.despawn(entity);
        }
    }
}

/// Apply whatever terminal event the projectile reached this frame.
/// Returns true when the projectile is spent.
fn resolve_terminal(ctx: &mut SimContext, spec: &WeaponSpec, position: glam::Vec3, life: f32) -> bool {
    if position.y <= PROJECTILE_GROUND_Y {
        if spec.has_splash() {
            combat::explode_at(ctx, position, spec.splash_radius, spec.damage, spec.color);
        }
        return true;
    }

    if let Some(enemy) = spatial::enemy_touching(&ctx.store, position, ENEMY_CONTACT_RADIUS) {
        if spec.has_splash() {
            combat::explode_at(ctx, position, spec.splash_radius, spec.damage, spec.color);
            combat::splash_enemies(ctx, position, spec.splash_radius, spec.enemy_damage);
        } else {
            combat::damage_enemy(ctx, enemy, spec.enemy_damage, Some(position));
            ctx.shake.kick(0.18, 0.12);
        }
        return true;
    }

    if let Some(building) = spatial::building_containing(&ctx.store, position) {
        if spec.has_splash() {
            combat::explode_at(ctx, position, spec.splash_radius, spec.damage, spec.color);
        } else {
            combat::damage_building(ctx, building, spec.damage, position, spec.color);
            ctx.shake.kick(0.15, 0.12);
        }
        return true;
    }

    if life <= 0.0 {
        if spec.has_splash() {
            combat::explode_at(
                ctx,
                position,
                spec.splash_radius * DUD_RADIUS_FACTOR,
                spec.damage * DUD_DAMAGE_FACTOR,
                spec.color,
            );
        }
        return true;
    }

    false
}
