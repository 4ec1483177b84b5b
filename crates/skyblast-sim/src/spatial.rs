//! Spatial queries over the entity store.
//!
//! Linear scans over spawn-order lists. A few hundred buildings and a handful
//! of enemies do not warrant a broadphase.

use glam::Vec3;
use hecs::Entity;

use skyblast_core::components::{Building, Enemy, Position};
use skyblast_core::constants::ENEMY_RAY_RADIUS;
use skyblast_core::types::Ray;

use crate::store::EntityStore;

/// What a ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Building(Entity),
    Enemy(Entity),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub target: HitTarget,
    pub point: Vec3,
    pub distance: f32,
}

/// First alive building whose bounds contain `point`.
pub fn building_containing(store: &EntityStore, point: Vec3) -> Option<Entity> {
    let world = store.world();
    store.buildings().find(|&e| {
        world
            .get::<&Building>(e)
            .map(|b| b.alive && b.bounds.contains_point(point))
            .unwrap_or(false)
    })
}

/// First alive enemy whose centre is strictly closer than `radius`.
pub fn enemy_touching(store: &EntityStore, point: Vec3, radius: f32) -> Option<Entity> {
    alive_enemies(store).find_map(|(e, pos)| (pos.distance(point) < radius).then_some(e))
}

/// Every alive enemy within `radius` of `point` (inclusive), with its centre distance.
pub fn enemies_within(store: &EntityStore, point: Vec3, radius: f32) -> Vec<(Entity, f32)> {
    alive_enemies(store)
        .map(|(e, pos)| (e, pos.distance(point)))
        .filter(|&(_, d)| d <= radius)
        .collect()
}

/// Every alive building whose surface lies within `radius` of `point`, with that distance.
pub fn buildings_within(store: &EntityStore, point: Vec3, radius: f32) -> Vec<(Entity, f32)> {
    let world = store.world();
    store
        .buildings()
        .filter_map(|e| {
            let b = world.get::<&Building>(e).ok()?;
            if !b.alive {
                return None;
            }
            let d = b.bounds.distance_to_point(point);
            (d <= radius).then_some((e, d))
        })
        .collect()
}

/// Nearest ray hit across buildings and enemies.
///
/// An enemy only wins when strictly closer; equal distances go to the building.
pub fn nearest_hit(store: &EntityStore, ray: &Ray) -> Option<RayHit> {
    let world = store.world();

    let mut best: Option<RayHit> = None;
    for e in store.buildings() {
        let Ok(b) = world.get::<&Building>(e) else {
            continue;
        };
        if !b.alive {
            continue;
        }
        if let Some(t) = b.bounds.ray_entry(ray) {
            if best.map_or(true, |h| t < h.distance) {
                best = Some(RayHit {
                    target: HitTarget::Building(e),
                    point: ray.at(t),
                    distance: t,
                });
            }
        }
    }

    for (e, center) in alive_enemies(store) {
        if let Some(t) = ray.sphere_entry(center, ENEMY_RAY_RADIUS) {
            if best.map_or(true, |h| t < h.distance) {
                best = Some(RayHit {
                    target: HitTarget::Enemy(e),
                    point: ray.at(t),
                    distance: t,
                });
            }
        }
    }

    best
}

fn alive_enemies(store: &EntityStore) -> impl Iterator<Item = (Entity, Vec3)> + '_ {
    let world = store.world();
    store.enemies().filter_map(move |e| {
        let mut q = world.query_one::<(&Enemy, &Position)>(e).ok()?;
        let (enemy, pos) = q.get()?;
        enemy.is_alive().then_some((e, pos.0))
    })
}
