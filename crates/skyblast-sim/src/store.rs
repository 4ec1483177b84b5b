//! Entity store: the canonical collections for every simulated object.
//!
//! A thin layer over `hecs::World`. Handles are generation-checked, so a handle
//! to a removed entity simply stops resolving. Buildings and enemies are also
//! kept in spawn-order lists, giving spatial queries a stable iteration order;
//! removal is an O(1) despawn and iteration skips handles that no longer resolve.

use hecs::{Component, DynamicBundle, Entity, World};

use skyblast_core::enums::VisualKind;
use skyblast_core::events::{EntityId, RenderEvent};

/// Presentation-facing id for a hecs handle.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

#[derive(Default)]
pub struct EntityStore {
    world: World,
    buildings: Vec<Entity>,
    enemies: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an entity and announce it to the render collaborator.
    pub fn spawn(
        &mut self,
        components: impl DynamicBundle,
        kind: VisualKind,
        render: &mut Vec<RenderEvent>,
    ) -> Entity {
        let entity = self.world.spawn(components);
        match kind {
            VisualKind::Building => self.buildings.push(entity),
            VisualKind::Enemy => self.enemies.push(entity),
            _ => {}
        }
        render.push(RenderEvent::Added {
            id: entity_id(entity),
            kind,
        });
        entity
    }

    /// Remove an entity. Returns false if the handle no longer resolves.
    pub fn despawn(&mut self, entity: Entity, render: &mut Vec<RenderEvent>) -> bool {
        if self.world.despawn(entity).is_err() {
            return false;
        }
        render.push(RenderEvent::Removed {
            id: entity_id(entity),
        });
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Live buildings in spawn order.
    pub fn buildings(&self) -> impl Iterator<Item = Entity> + '_ {
        self.buildings
            .iter()
            .copied()
            .filter(|e| self.world.contains(*e))
    }

    /// Live enemies in spawn order.
    pub fn enemies(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies
            .iter()
            .copied()
            .filter(|e| self.world.contains(*e))
    }

    /// Number of live entities carrying component `T`.
    pub fn count<T: Component>(&self) -> usize {
        self.world.query::<&T>().iter().count()
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Release every entity, then empty the store.
    /// One `Removed` event is emitted per entity before the world is cleared.
    pub fn clear(&mut self, render: &mut Vec<RenderEvent>) {
        render.extend(self.world.iter().map(|e| RenderEvent::Removed {
            id: entity_id(e.entity()),
        }));
        self.world.clear();
        self.buildings.clear();
        self.enemies.clear();
    }
}
