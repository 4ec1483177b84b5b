//! World population and full game reset.

use glam::Vec3;
use hecs::Entity;
use tracing::info;

use skyblast_core::components::{Building, Enemy, Position};
use skyblast_core::constants::ENEMY_MAX_HEALTH;
use skyblast_core::enums::{EnemyPhase, VisualKind};
use skyblast_core::events::{AudioEvent, GameEvent};
use skyblast_core::types::Color;
use skyblast_procgen::{generate_city, generate_traffic, generate_wave, EnemySeed};

use crate::context::SimContext;

/// Generate and spawn the city, the enemy wave and the street traffic.
pub fn populate(ctx: &mut SimContext) {
    let plan = generate_city(&mut ctx.rng, &ctx.config.city);
    for lot in &plan.lots {
        spawn_building(ctx, lot.center, lot.size);
    }

    let wave = generate_wave(&mut ctx.rng, &ctx.config.city, ctx.config.enemy_wave_size);
    for seed in &wave {
        spawn_enemy(ctx, seed);
    }

    ctx.traffic.cars = generate_traffic(&mut ctx.rng, &ctx.config.city, ctx.config.traffic_cars);
    ctx.traffic.poses.clear();
}

pub fn spawn_building(ctx: &mut SimContext, center: Vec3, size: Vec3) -> Entity {
    ctx.spawn(
        (Position(center), Building::new(center, size, Color::BUILDING)),
        VisualKind::Building,
    )
}

pub fn spawn_enemy(ctx: &mut SimContext, seed: &EnemySeed) -> Entity {
    ctx.spawn(
        (
            Position(seed.spawn_position()),
            Enemy {
                phase: EnemyPhase::Patrolling,
                angle: seed.angle,
                radius: seed.radius,
                angular_velocity: seed.angular_velocity,
                patrol_center: seed.patrol_center,
                altitude: seed.altitude,
                health: ENEMY_MAX_HEALTH,
                max_health: ENEMY_MAX_HEALTH,
                next_shot_at: 0.0,
                shot_cooldown: seed.shot_cooldown,
                facing: Vec3::ZERO,
            },
        ),
        VisualKind::Enemy,
    )
}

/// Full reset: zero the score, restore player health, release every entity
/// and regenerate the world. The high score, player position, selected weapon
/// and screen effects carry over.
pub fn reset_game(ctx: &mut SimContext) {
    info!(score = ctx.score.score, high_score = ctx.score.high_score, "game reset");

    ctx.score.reset();
    ctx.player.reset_vitals();
    ctx.store.clear(&mut ctx.events.render);
    populate(ctx);

    ctx.audio(AudioEvent::Reset);
    ctx.game_event(GameEvent::GameReset);
}
