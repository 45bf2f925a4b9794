//! Initial scene
//!
//! Seeds the entity store before the first frame. Entities are created in a
//! fixed order because the first entity is, by convention, the player the
//! input system steers.

use crate::ecs::{Component, EntityStore, Position, Renderable, Rgba, Velocity};

/// Populate the store with the starting entities.
///
/// Besides the player, the scene includes a static prop and a positioned
/// but invisible entity, so both skip paths (no Velocity, no Renderable)
/// are exercised every frame.
pub fn populate(store: &mut EntityStore) {
    // Player: steered by the input system, drawn in red.
    store.create_entity([
        Component::Position(Position::new(100.0, 100.0)),
        Component::Velocity(Velocity::new(0.0, 0.0)),
        Component::Renderable(Renderable(true)),
        Component::Color(Rgba::RED),
    ]);

    // Static prop: drawn but never moves (no Velocity).
    store.create_entity([
        Component::Position(Position::new(300.0, 200.0)),
        Component::Renderable(Renderable(true)),
        Component::Color(Rgba::BLUE),
    ]);

    // Marker: has a position but is never drawn.
    store.create_entity([Component::Position(Position::new(600.0, 450.0))]);
}
