//! Snapshot system: reads the context and builds a complete FrameSnapshot.
//!
//! Read-only over the world. The only mutation is draining the event queues,
//! which hands ownership of this frame's events to presentation.

use hecs::World;

use skyblast_core::components::*;
use skyblast_core::state::*;

use crate::context::SimContext;
use crate::store::{entity_id, EntityStore};

pub fn build_snapshot(ctx: &mut SimContext, fps: u32) -> FrameSnapshot {
    let store = &ctx.store;
    let world = store.world();
    let player = &ctx.player;

    FrameSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        hud: HudView {
            score: ctx.score.score,
            high_score: ctx.score.high_score,
            health: player.health.round() as u32,
            weapon: player.weapon.name().to_string(),
            fps,
        },
        player: PlayerView {
            position: player.position,
            velocity: player.velocity,
            camera: player.position + ctx.shake.offset,
            view_direction: player.view_direction(),
            weapon: player.weapon,
            invulnerable: player.is_invulnerable(),
        },
        screen: ScreenView {
            flash: ctx.screen.flash,
            damage: ctx.screen.damage,
        },
        buildings: build_buildings(store),
        enemies: build_enemies(store),
        projectiles: build_projectiles(world),
        enemy_shots: build_enemy_shots(world),
        debris: build_debris(world),
        particles: build_particles(world),
        shockwaves: build_shockwaves(world),
        beams: build_beams(world),
        cars: ctx
            .traffic
            .cars
            .iter()
            .zip(&ctx.traffic.poses)
            .map(|(car, &(position, heading))| CarView {
                position,
                heading,
                color: car.color,
            })
            .collect(),
        engine_intensity: ctx.engine_intensity,
        audio_events: std::mem::take(&mut ctx.events.audio),
        render_events: std::mem::take(&mut ctx.events.render),
        game_events: std::mem::take(&mut ctx.events.game),
    }
}

fn build_buildings(store: &EntityStore) -> Vec<BuildingView> {
    let world = store.world();
    store
        .buildings()
        .filter_map(|e| {
            let b = world.get::<&Building>(e).ok()?;
            Some(BuildingView {
                id: entity_id(e),
                center: b.anchor,
                size: b.bounds.size(),
                health01: b.health01(),
                color_scale: b.color_scale(),
                emissive: b.emissive(),
            })
        })
        .collect()
}

fn build_enemies(store: &EntityStore) -> Vec<EnemyView> {
    let world = store.world();
    store
        .enemies()
        .filter_map(|e| {
            let mut q = world.query_one::<(&Enemy, &Position)>(e).ok()?;
            let (enemy, pos) = q.get()?;
            Some(EnemyView {
                id: entity_id(e),
                position: pos.0,
                facing: enemy.facing,
                health01: enemy.health01(),
                emissive: enemy.emissive(),
            })
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ShotView> {
    let mut shots: Vec<ShotView> = world
        .query::<(&Position, &Velocity, &Projectile, &Tracer)>()
        .iter()
        .map(|(e, (pos, vel, projectile, tracer))| ShotView {
            id: entity_id(e),
            weapon: Some(projectile.weapon),
            position: pos.0,
            velocity: vel.0,
            tracer_tail: tracer.tail,
            tracer_head: tracer.head,
            tracer_opacity: tracer.opacity,
        })
        .collect();
    shots.sort_by_key(|s| s.id);
    shots
}

fn build_enemy_shots(world: &World) -> Vec<ShotView> {
    let mut shots: Vec<ShotView> = world
        .query::<(&Position, &Velocity, &EnemyShot, &Tracer)>()
        .iter()
        .map(|(e, (pos, vel, _shot, tracer))| ShotView {
            id: entity_id(e),
            weapon: None,
            position: pos.0,
            velocity: vel.0,
            tracer_tail: tracer.tail,
            tracer_head: tracer.head,
            tracer_opacity: tracer.opacity,
        })
        .collect();
    shots.sort_by_key(|s| s.id);
    shots
}

fn build_debris(world: &World) -> Vec<DebrisView> {
    let mut views: Vec<DebrisView> = world
        .query::<(&Position, &Debris)>()
        .iter()
        .map(|(e, (pos, debris))| DebrisView {
            id: entity_id(e),
            position: pos.0,
            rotation: debris.spin,
            size: debris.size,
            opacity: debris.opacity,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut views: Vec<ParticleView> = world
        .query::<&ParticleBurst>()
        .iter()
        .map(|(e, burst)| ParticleView {
            id: entity_id(e),
            positions: burst.positions.clone(),
            color: burst.color,
            opacity: burst.opacity,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_shockwaves(world: &World) -> Vec<ShockwaveView> {
    let mut views: Vec<ShockwaveView> = world
        .query::<(&Position, &Shockwave)>()
        .iter()
        .map(|(e, (pos, wave))| ShockwaveView {
            id: entity_id(e),
            position: pos.0,
            scale: wave.scale,
            opacity: wave.opacity,
            color: wave.color,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_beams(world: &World) -> Vec<BeamView> {
    let mut views: Vec<BeamView> = world
        .query::<&Beam>()
        .iter()
        .map(|(e, beam)| BeamView {
            id: entity_id(e),
            from: beam.from,
            to: beam.to,
            opacity: beam.opacity,
            color: beam.color,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}
