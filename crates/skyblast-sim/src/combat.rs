//! Combat resolution: firing, damage, area detonation and player hits.
//!
//! All functions take the explicit `SimContext`. Presentation side effects are
//! queued as spawned effect entities and audio/game events; nothing here talks
//! to a back-end directly.

use glam::Vec3;
use hecs::Entity;
use tracing::debug;

use skyblast_core::components::{Building, Enemy, Position, Projectile, Tracer, Velocity};
use skyblast_core::constants::*;
use skyblast_core::enums::{DamageOutcome, EnemyPhase, PlayerHitOutcome, VisualKind, WeaponKind};
use skyblast_core::events::{AudioEvent, GameEvent};
use skyblast_core::types::{Color, Ray};
use skyblast_core::weapons::{weapon_spec, WeaponSpec};

use crate::context::SimContext;
use crate::spatial::{self, HitTarget};
use crate::store::entity_id;
use crate::systems::effects;
use crate::world_setup;

/// What a trigger pull did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// The selected weapon is still cooling down.
    CoolingDown,
    /// Hitscan resolved against whatever the ray struck first.
    Hitscan { target: Option<HitTarget> },
    /// A projectile entity is now in flight.
    Launched { projectile: Entity },
}

/// Result of an area detonation against buildings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlastReport {
    pub damaged: usize,
    pub destroyed: usize,
}

/// Fire the selected weapon along the view ray, respecting its cooldown.
pub fn fire(ctx: &mut SimContext, view: Ray) -> FireOutcome {
    let now = ctx.time.elapsed_secs;
    let weapon = ctx.player.weapon;
    let spec = weapon_spec(weapon);
    let slot = weapon.index();

    if now < ctx.player.next_fire_at[slot] {
        return FireOutcome::CoolingDown;
    }
    ctx.player.next_fire_at[slot] = now + spec.cooldown_secs;

    if spec.is_hitscan() {
        fire_hitscan(ctx, &spec, view)
    } else {
        launch_projectile(ctx, &spec, view)
    }
}

fn fire_hitscan(ctx: &mut SimContext, spec: &WeaponSpec, view: Ray) -> FireOutcome {
    let hit = spatial::nearest_hit(&ctx.store, &view);
    let to = hit.map_or_else(|| view.at(LASER_MISS_RANGE), |h| h.point);
    effects::spawn_beam(ctx, view.origin, to, spec.color, spec.tracer_opacity);

    let Some(hit) = hit else {
        ctx.audio(AudioEvent::LaserMiss);
        return FireOutcome::Hitscan { target: None };
    };

    match hit.target {
        HitTarget::Enemy(enemy) => {
            damage_enemy(ctx, enemy, spec.enemy_damage, Some(hit.point));
        }
        HitTarget::Building(building) => {
            if damage_building(ctx, building, spec.damage, hit.point, spec.color)
                != DamageOutcome::Ignored
            {
                effects::spawn_particles(ctx, hit.point, spec.color, 28);
            }
        }
    }
    ctx.audio(AudioEvent::Laser);
    FireOutcome::Hitscan {
        target: Some(hit.target),
    }
}

fn launch_projectile(ctx: &mut SimContext, spec: &WeaponSpec, view: Ray) -> FireOutcome {
    let origin = view.origin + view.direction * MUZZLE_OFFSET;
    let velocity = view.direction * spec.speed;

    let projectile = ctx.spawn(
        (
            Position(origin),
            Velocity(velocity),
            Projectile {
                weapon: spec.kind,
                life: spec.lifetime_secs,
            },
            Tracer::new(origin, spec.tracer_opacity),
        ),
        VisualKind::Projectile(spec.kind),
    );

    ctx.audio(match spec.kind {
        WeaponKind::Rocket => AudioEvent::RocketLaunch,
        _ => AudioEvent::Cannon,
    });
    FireOutcome::Launched { projectile }
}

/// Apply damage to a building. Dead or vanished buildings are left alone.
pub fn damage_building(
    ctx: &mut SimContext,
    entity: Entity,
    amount: f32,
    hit_point: Vec3,
    color: Color,
) -> DamageOutcome {
    if amount <= 0.0 {
        return DamageOutcome::Ignored;
    }

    let destroyed = {
        let Ok(mut building) = ctx.store.world().get::<&mut Building>(entity) else {
            return DamageOutcome::Ignored;
        };
        if !building.alive {
            return DamageOutcome::Ignored;
        }
        building.health = (building.health - amount).max(0.0);
        if building.health > 0.0 {
            None
        } else {
            building.alive = false;
            Some((building.anchor, building.height, building.destroy_score()))
        }
    };

    let Some((anchor, height, award)) = destroyed else {
        effects::spawn_particles(ctx, hit_point, color, 18);
        return DamageOutcome::Damaged;
    };

    ctx.despawn(entity);
    effects::spawn_debris(ctx, anchor + Vec3::Y * (height * 0.2), 26);
    effects::spawn_particles(ctx, anchor + Vec3::Y * (height * 0.25), color, 110);
    effects::spawn_shockwave(ctx, anchor + Vec3::Y * 0.25, color);
    ctx.audio(AudioEvent::Explosion { size: 1.05 });
    ctx.shake.kick(0.55, 0.22);
    ctx.screen.pulse_flash(0.45);
    ctx.award(award);
    ctx.game_event(GameEvent::BuildingDestroyed {
        id: entity_id(entity),
        position: anchor,
        award,
    });
    debug!(height, award, "building destroyed");
    DamageOutcome::Destroyed
}

/// Apply damage to an enemy, with an optional impact burst at `hit_point`.
pub fn damage_enemy(
    ctx: &mut SimContext,
    entity: Entity,
    amount: f32,
    hit_point: Option<Vec3>,
) -> DamageOutcome {
    if amount <= 0.0 {
        return DamageOutcome::Ignored;
    }

    let destroyed_at = {
        let Ok(mut q) = ctx.store.world().query_one::<(&mut Enemy, &Position)>(entity) else {
            return DamageOutcome::Ignored;
        };
        let Some((enemy, pos)) = q.get() else {
            return DamageOutcome::Ignored;
        };
        if !enemy.is_alive() {
            return DamageOutcome::Ignored;
        }
        enemy.health = (enemy.health - amount).max(0.0);
        if enemy.health > 0.0 {
            None
        } else {
            enemy.phase = EnemyPhase::Dead;
            Some(pos.0)
        }
    };

    if let Some(point) = hit_point {
        effects::spawn_particles(ctx, point, Color::ENEMY, 22);
    }

    let Some(position) = destroyed_at else {
        ctx.award(ENEMY_HIT_SCORE);
        ctx.game_event(GameEvent::EnemyHit {
            id: entity_id(entity),
            award: ENEMY_HIT_SCORE,
        });
        return DamageOutcome::Damaged;
    };

    effects::spawn_shockwave(ctx, position + Vec3::Y * 0.25, Color::ENEMY);
    effects::spawn_particles(ctx, position, Color::ENEMY, 120);
    effects::spawn_debris(ctx, position, 12);
    ctx.despawn(entity);
    ctx.award(ENEMY_KILL_SCORE);
    ctx.audio(AudioEvent::Explosion { size: 0.75 });
    ctx.game_event(GameEvent::EnemyDestroyed {
        id: entity_id(entity),
        position,
        award: ENEMY_KILL_SCORE,
    });
    debug!(?position, "enemy destroyed");
    DamageOutcome::Destroyed
}

/// Area detonation. Damages every alive building whose surface lies within
/// `radius`, scaled linearly from full damage at the surface to zero at the edge.
pub fn explode_at(
    ctx: &mut SimContext,
    point: Vec3,
    radius: f32,
    damage: f32,
    color: Color,
) -> BlastReport {
    effects::spawn_particles(ctx, point, color, 150);
    effects::spawn_debris(ctx, point, 14);
    effects::spawn_shockwave(ctx, point + Vec3::Y * 0.25, color);
    ctx.shake.kick(0.85, 0.28);
    ctx.screen.pulse_flash(0.65);
    ctx.audio(AudioEvent::Explosion {
        size: (radius / 18.0 * 0.95).clamp(0.5, 1.25),
    });

    let mut report = BlastReport::default();
    if radius <= 0.0 {
        return report;
    }

    for (building, distance) in spatial::buildings_within(&ctx.store, point, radius) {
        let falloff = 1.0 - distance / radius;
        match damage_building(ctx, building, damage * falloff, point, color) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Damaged => report.damaged += 1,
            DamageOutcome::Destroyed => {
                report.damaged += 1;
                report.destroyed += 1;
            }
        }
    }
    report
}

/// Splash against enemies. Uses centre distance, unlike the building
/// falloff in `explode_at` which measures to the surface.
pub fn splash_enemies(ctx: &mut SimContext, point: Vec3, radius: f32, damage: f32) -> usize {
    if radius <= 0.0 {
        return 0;
    }
    let mut hits = 0;
    for (enemy, distance) in spatial::enemies_within(&ctx.store, point, radius) {
        let falloff = 1.0 - distance / radius;
        if damage_enemy(ctx, enemy, damage * falloff, Some(point)) != DamageOutcome::Ignored {
            hits += 1;
        }
    }
    hits
}

/// Damage the player. A lethal hit resets the game on the spot.
pub fn player_hit(ctx: &mut SimContext, damage: f32) -> PlayerHitOutcome {
    if ctx.player.is_invulnerable() {
        return PlayerHitOutcome::Ignored;
    }

    let player = &mut ctx.player;
    player.invulnerable_secs = PLAYER_INVULN_SECS;
    player.health = (player.health - damage).clamp(0.0, player.max_health);
    let health = player.health;

    ctx.shake.kick(0.55, 0.22);
    ctx.screen.pulse_damage(0.85);
    ctx.audio(AudioEvent::PlayerHit);
    ctx.game_event(GameEvent::PlayerDamaged { health });
    debug!(damage, health, "player hit");

    if health > 0.0 {
        return PlayerHitOutcome::Damaged;
    }

    ctx.audio(AudioEvent::Explosion { size: 0.9 });
    ctx.game_event(GameEvent::PlayerDied);
    world_setup::reset_game(ctx);
    PlayerHitOutcome::Killed
}
