//! Transient visual effects: debris, particle bursts, shockwaves, laser beams.
//!
//! Effects never feed back into gameplay. Each one counts its life down and is
//! despawned when it reaches zero.

use glam::Vec3;
use rand::Rng;

use skyblast_core::components::{
    Beam, Debris, ParticleBurst, Position, Shockwave, Velocity,
};
use skyblast_core::constants::*;
use skyblast_core::enums::VisualKind;
use skyblast_core::types::{clamp01, lerp, Color};

use crate::context::SimContext;

pub fn spawn_debris(ctx: &mut SimContext, origin: Vec3, count: usize) {
    for _ in 0..count {
        let rng = &mut ctx.rng;
        let size = 0.6 + rng.gen::<f32>() * 1.4;
        let position = origin
            + Vec3::new(
                (rng.gen::<f32>() - 0.5) * 6.0,
                rng.gen::<f32>() * 3.0 + 1.5,
                (rng.gen::<f32>() - 0.5) * 6.0,
            );
        let velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 26.0,
            12.0 + rng.gen::<f32>() * 22.0,
            (rng.gen::<f32>() - 0.5) * 26.0,
        );
        let life = 2.2 + rng.gen::<f32>() * 1.6;

        ctx.spawn(
            (
                Position(position),
                Velocity(velocity),
                Debris {
                    life,
                    size,
                    spin: Vec3::ZERO,
                    opacity: 1.0,
                },
            ),
            VisualKind::Debris,
        );
    }
}

pub fn spawn_particles(ctx: &mut SimContext, origin: Vec3, color: Color, count: usize) {
    let rng = &mut ctx.rng;
    let velocities: Vec<Vec3> = (0..count)
        .map(|_| {
            let dir = Vec3::new(
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() * 0.9 + 0.15,
                rng.gen::<f32>() - 0.5,
            )
            .normalize_or_zero();
            dir * (8.0 + rng.gen::<f32>() * 26.0)
        })
        .collect();
    let life = 0.75 + rng.gen::<f32>() * 0.35;

    ctx.spawn(
        (
            Position(origin),
            ParticleBurst {
                positions: vec![origin; count],
                velocities,
                life,
                color,
                opacity: 0.95,
            },
        ),
        VisualKind::ParticleBurst,
    );
}

pub fn spawn_shockwave(ctx: &mut SimContext, origin: Vec3, color: Color) {
    ctx.spawn(
        (
            Position(origin),
            Shockwave {
                life: SHOCKWAVE_LIFE_SECS,
                color,
                scale: 1.0,
                opacity: SHOCKWAVE_OPACITY,
            },
        ),
        VisualKind::Shockwave,
    );
}

pub fn spawn_beam(ctx: &mut SimContext, from: Vec3, to: Vec3, color: Color, opacity: f32) {
    ctx.spawn(
        (Beam {
            from,
            to,
            life: BEAM_LIFE_SECS,
            color,
            opacity,
        },),
        VisualKind::Beam,
    );
}

/// Update every effect kind in draw order.
pub fn run(ctx: &mut SimContext) {
    update_beams(ctx);
    update_debris(ctx);
    update_particles(ctx);
    update_shockwaves(ctx);
}

fn update_beams(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    ctx.despawn_buffer.clear();
    for (entity, beam) in ctx.store.world_mut().query_mut::<&mut Beam>() {
        beam.life -= dt;
        beam.opacity = clamp01(beam.life / BEAM_LIFE_SECS);
        if beam.life <= 0.0 {
            ctx.despawn_buffer.push(entity);
        }
    }
    flush(ctx);
}

fn update_debris(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    ctx.despawn_buffer.clear();
    for (entity, (pos, vel, debris)) in ctx
        .store
        .world_mut()
        .query_mut::<(&mut Position, &mut Velocity, &mut Debris)>()
    {
        debris.life -= dt;
        vel.0.y -= DEBRIS_GRAVITY * dt;
        pos.0 += vel.0 * dt;
        debris.spin += Vec3::new(dt * 2.8, 0.0, dt * 3.1);

        if pos.0.y < DEBRIS_FLOOR_Y {
            pos.0.y = DEBRIS_FLOOR_Y;
            vel.0 *= DEBRIS_BOUNCE_DAMPING;
            vel.0.y = vel.0.y.abs() * DEBRIS_BOUNCE_RESTITUTION;
        }

        debris.opacity = clamp01(debris.life / DEBRIS_FADE_SECS);
        if debris.life <= 0.0 {
            ctx.despawn_buffer.push(entity);
        }
    }
    flush(ctx);
}

fn update_particles(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    let drag = PARTICLE_DRAG_BASE.powf(dt);
    ctx.despawn_buffer.clear();
    for (entity, burst) in ctx.store.world_mut().query_mut::<&mut ParticleBurst>() {
        burst.life -= dt;
        for (p, v) in burst.positions.iter_mut().zip(burst.velocities.iter_mut()) {
            *p += *v * dt;
            v.y -= PARTICLE_GRAVITY * dt;
            *v *= drag;
        }
        burst.opacity = clamp01(burst.life / PARTICLE_FADE_SECS);
        if burst.life <= 0.0 {
            ctx.despawn_buffer.push(entity);
        }
    }
    flush(ctx);
}

fn update_shockwaves(ctx: &mut SimContext) {
    let dt = ctx.time.dt;
    ctx.despawn_buffer.clear();
    for (entity, wave) in ctx.store.world_mut().query_mut::<&mut Shockwave>() {
        wave.life -= dt;
        let t = 1.0 - clamp01(wave.life / SHOCKWAVE_LIFE_SECS);
        wave.scale = lerp(1.0, SHOCKWAVE_MAX_SCALE, t);
        wave.opacity = (1.0 - t) * SHOCKWAVE_OPACITY;
        if wave.life <= 0.0 {
            ctx.despawn_buffer.push(entity);
        }
    }
    flush(ctx);
}

fn flush(ctx: &mut SimContext) {
    let mut buffer = std::mem::take(&mut ctx.despawn_buffer);
    for entity in buffer.drain(..) {
        ctx.despawn(entity);
    }
    ctx.despawn_buffer = buffer;
}
