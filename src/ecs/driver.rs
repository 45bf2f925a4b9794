//! Frame Driver
//!
//! Orchestrates one frame of the simulation: an Update pass (input system,
//! then movement system - the passes that mutate the store) followed by a
//! Draw pass (render system, read-only, side-effecting only through the
//! host's canvas). The driver owns the entity store outright and threads it
//! by reference through each system call; there is no global entity table.
//!
//! The surrounding loop - close-request check, background clear, frame
//! pacing - belongs to the host (see `main.rs`). The driver never observes
//! cancellation mid-frame: once `update` or `draw` starts, it runs to
//! completion.

use super::store::EntityStore;
use super::systems::{self, Canvas, InputSource};

/// Owns the entity store and runs the per-frame system schedule.
pub struct FrameDriver {
    store: EntityStore,
    player_speed: f32,
}

impl FrameDriver {
    /// Driver over an empty store, moving the player at `player_speed`
    /// pixels per frame per active axis.
    pub fn new(player_speed: f32) -> Self {
        Self {
            store: EntityStore::new(),
            player_speed,
        }
    }

    /// The Update half of a frame: input system, then movement system.
    pub fn update(&mut self, input: &impl InputSource) {
        systems::input_system(&mut self.store, input, self.player_speed);
        systems::movement_system(&mut self.store);
    }

    /// The Draw half of a frame. Takes `&self`: drawing never mutates the
    /// store.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        systems::render_system(&self.store, canvas);
    }

    /// The entity store, for scene population and inspection.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(systems::PLAYER_SPEED)
    }
}
