//! Entity Store
//!
//! An ordered, append-only collection of entities. Creation assigns the next
//! sequential index; entities are never removed, so indices are stable for
//! the life of the store and iteration always visits entities in creation
//! order. Despawning is deliberately absent - this runtime's entity set only
//! grows (see the module docs in `ecs`).

use super::component::{Component, Entity};
use super::error::EcsError;

/// A stable handle to an entity: its 0-based slot in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// The raw index into the store.
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// Owns all entities. Threaded by exclusive reference through each system
/// call; nothing else holds onto entities across frames.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append a new entity initialized from the given components.
    ///
    /// Any subset of the component kinds is accepted, including an empty
    /// list. Component values are taken as-is; no field validation happens
    /// here. Returns the new entity's id (next sequential index).
    pub fn create_entity(&mut self, components: impl IntoIterator<Item = Component>) -> EntityId {
        let mut entity = Entity::empty();
        for component in components {
            entity.attach(component);
        }
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    /// Get the entity at `id`, or `OutOfRange` if no such slot exists.
    pub fn get(&self, id: EntityId) -> Result<&Entity, EcsError> {
        self.entities
            .get(id.0 as usize)
            .ok_or(EcsError::OutOfRange {
                index: id.0,
                len: self.entities.len(),
            })
    }

    /// Mutable access to the entity at `id`.
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity, EcsError> {
        let len = self.entities.len();
        self.entities
            .get_mut(id.0 as usize)
            .ok_or(EcsError::OutOfRange { index: id.0, len })
    }

    /// Iterate over all (id, entity) pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(idx, entity)| (EntityId(idx as u32), entity))
    }

    /// Iterate mutably over all (id, entity) pairs in creation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.entities
            .iter_mut()
            .enumerate()
            .map(|(idx, entity)| (EntityId(idx as u32), entity))
    }

    /// The designated player entity: by convention the first one created.
    pub fn player(&self) -> Option<EntityId> {
        if self.entities.is_empty() {
            None
        } else {
            Some(EntityId(0))
        }
    }

    /// Number of entities in the store.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if no entities have been created.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
