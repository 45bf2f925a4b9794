//! Systems
//!
//! The fixed set of per-frame systems: input, movement, render. Each is a
//! plain function over the [`EntityStore`], touching only the component
//! slots relevant to it and skipping entities that lack them. Host
//! facilities (keyboard polling, drawing primitives) come in through the
//! [`InputSource`] and [`Canvas`] traits so the systems stay testable
//! without a window.

use super::component::{Position, Renderable, Rgba, Velocity};
use super::store::EntityStore;

/// Default movement speed in pixels per frame per active axis.
pub const PLAYER_SPEED: f32 = 2.0;

/// Side length of the square drawn for each renderable entity.
pub const SQUARE_SIZE: f32 = 50.0;

/// Per-frame caption drawn by the render system.
pub const CAPTION_TEXT: &str = "ECS in Rust: Input & Rendering!";
pub const CAPTION_X: f32 = 10.0;
pub const CAPTION_Y: f32 = 24.0;
pub const CAPTION_SIZE: f32 = 20.0;
pub const CAPTION_COLOR: Rgba = Rgba::BLACK;

// =============================================================================
// Capability traits (implemented by the host, mocked in tests)
// =============================================================================

/// The directional controls the input system polls each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Right,
    Left,
    Up,
    Down,
}

/// Input-query capability: "is this control currently active?"
pub trait InputSource {
    fn is_active(&self, control: Control) -> bool;
}

/// Drawing capability. Calls are fire-and-forget; the core never reads
/// anything back from the host's renderer.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba);
}

// =============================================================================
// Input System
// =============================================================================

/// Rebuild the player entity's Velocity from the current control state.
///
/// The player is by convention the first entity in the store; with an empty
/// store this is a no-op. The checks run in a fixed order - Right, Left, Up,
/// Down - and each active control overwrites its axis, so simultaneous
/// opposing controls resolve last-checked-wins (Left beats Right, Down
/// beats Up). Y grows downward in screen coordinates, so Up contributes
/// `-speed`. A player without a Velocity slot gets one.
pub fn input_system(store: &mut EntityStore, input: &impl InputSource, speed: f32) {
    let Some(player) = store.player() else {
        return;
    };

    let mut velocity = Velocity::new(0.0, 0.0);
    if input.is_active(Control::Right) {
        velocity.x = speed;
    }
    if input.is_active(Control::Left) {
        velocity.x = -speed;
    }
    if input.is_active(Control::Up) {
        velocity.y = -speed;
    }
    if input.is_active(Control::Down) {
        velocity.y = speed;
    }

    // player() just told us the slot exists
    if let Ok(entity) = store.get_mut(player) {
        entity.velocity = Some(velocity);
    }
}

// =============================================================================
// Movement System
// =============================================================================

/// Integrate Position by Velocity for every entity that has both.
///
/// Plain Euler step with an implicit unit time-step of one frame. Entities
/// missing either slot are left untouched - that is the defined skip
/// policy, not an error.
pub fn movement_system(store: &mut EntityStore) {
    for (_, entity) in store.iter_mut() {
        let (Some(position), Some(velocity)) = (entity.position.as_mut(), entity.velocity) else {
            continue;
        };
        position.x += velocity.x;
        position.y += velocity.y;
    }
}

// =============================================================================
// Render System
// =============================================================================

/// Draw one frame: the fixed caption, then a square per visible entity.
///
/// The caption is drawn exactly once per frame regardless of entity state.
/// An entity is visible when it holds `Renderable(true)` AND a Position;
/// everything else is skipped silently. The square uses the entity's Color
/// when present and [`Rgba::GRAY`] otherwise.
pub fn render_system(store: &EntityStore, canvas: &mut impl Canvas) {
    canvas.draw_text(CAPTION_TEXT, CAPTION_X, CAPTION_Y, CAPTION_SIZE, CAPTION_COLOR);

    for (_, entity) in store.iter() {
        if entity.renderable != Some(Renderable(true)) {
            continue;
        }
        let Some(Position { x, y }) = entity.position else {
            continue;
        };
        let color = entity.color.unwrap_or(Rgba::GRAY);
        canvas.fill_rect(x, y, SQUARE_SIZE, SQUARE_SIZE, color);
    }
}

// =============================================================================
// Test doubles
// =============================================================================


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::ecs::component::Component;

    fn store_with_player() -> EntityStore {
        let mut store = EntityStore::new();
        store.create_entity([
            Component::Position(Position::new(100.0, 100.0)),
            Component::Velocity(Velocity::new(0.0, 0.0)),
            Component::Renderable(Renderable(true)),
            Component::Color(Rgba::RED),
        ]);
        store
    }

    #[test]
    fn test_input_right_sets_positive_x_velocity() {
        let mut store = store_with_player();
        let input = FixedInput::holding(&[Control::Right]);

        input_system(&mut store, &input, PLAYER_SPEED);

        let player = store.get(store.player().unwrap()).unwrap();
        assert_eq!(player.velocity, Some(Velocity::new(2.0, 0.0)));
    }

    #[test]
    fn test_input_no_controls_zeroes_velocity() {
        let mut store = store_with_player();
        store.get_mut(store.player().unwrap()).unwrap().velocity =
            Some(Velocity::new(5.0, -3.0));

        input_system(&mut store, &FixedInput::default(), PLAYER_SPEED);

        let player = store.get(store.player().unwrap()).unwrap();
        assert_eq!(player.velocity, Some(Velocity::new(0.0, 0.0)));
    }

    #[test]
    fn test_input_opposing_controls_last_checked_wins() {
        let mut store = store_with_player();
        let input = FixedInput::holding(&[Control::Right, Control::Left, Control::Up, Control::Down]);

        input_system(&mut store, &input, PLAYER_SPEED);

        // Left is checked after Right, Down after Up.
        let player = store.get(store.player().unwrap()).unwrap();
        assert_eq!(player.velocity, Some(Velocity::new(-2.0, 2.0)));
    }

    #[test]
    fn test_input_creates_missing_velocity_slot() {
        let mut store = EntityStore::new();
        store.create_entity([Component::Position(Position::new(0.0, 0.0))]);

        input_system(&mut store, &FixedInput::holding(&[Control::Down]), PLAYER_SPEED);

        let player = store.get(store.player().unwrap()).unwrap();
        assert_eq!(player.velocity, Some(Velocity::new(0.0, 2.0)));
    }

    #[test]
    fn test_input_on_empty_store_is_noop() {
        let mut store = EntityStore::new();
        input_system(&mut store, &FixedInput::holding(&[Control::Right]), PLAYER_SPEED);
        assert!(store.is_empty());
    }

    #[test]
    fn test_movement_integrates_position() {
        let mut store = EntityStore::new();
        let id = store.create_entity([
            Component::Position(Position::new(100.0, 100.0)),
            Component::Velocity(Velocity::new(2.0, 2.0)),
        ]);

        movement_system(&mut store);

        let entity = store.get(id).unwrap();
        assert_eq!(entity.position, Some(Position::new(102.0, 102.0)));
        // Velocity is read-only here.
        assert_eq!(entity.velocity, Some(Velocity::new(2.0, 2.0)));
    }

    #[test]
    fn test_movement_skips_entity_without_velocity() {
        let mut store = EntityStore::new();
        let id = store.create_entity([Component::Position(Position::new(500.0, 500.0))]);

        movement_system(&mut store);

        assert_eq!(
            store.get(id).unwrap().position,
            Some(Position::new(500.0, 500.0))
        );
    }

    #[test]
    fn test_movement_skips_entity_without_position() {
        let mut store = EntityStore::new();
        let id = store.create_entity([Component::Velocity(Velocity::new(1.0, 1.0))]);

        movement_system(&mut store);

        let entity = store.get(id).unwrap();
        assert!(entity.position.is_none());
        assert_eq!(entity.velocity, Some(Velocity::new(1.0, 1.0)));
    }

    #[test]
    fn test_render_draws_square_at_position_with_color() {
        let store = store_with_player();
        let mut canvas = RecordingCanvas::default();

        render_system(&store, &mut canvas);

        let rects = canvas.rects();
        assert_eq!(rects.len(), 1);
        assert_eq!(
            rects[0],
            &DrawCall::Rect {
                x: 100.0,
                y: 100.0,
                w: SQUARE_SIZE,
                h: SQUARE_SIZE,
                color: Rgba::RED,
            }
        );
    }

    #[test]
    fn test_render_uses_default_color_when_missing() {
        let mut store = EntityStore::new();
        store.create_entity([
            Component::Position(Position::new(10.0, 20.0)),
            Component::Renderable(Renderable(true)),
        ]);
        let mut canvas = RecordingCanvas::default();

        render_system(&store, &mut canvas);

        assert_eq!(
            canvas.rects()[0],
            &DrawCall::Rect {
                x: 10.0,
                y: 20.0,
                w: SQUARE_SIZE,
                h: SQUARE_SIZE,
                color: Rgba::GRAY,
            }
        );
    }

    #[test]
    fn test_render_skips_non_renderable_entities() {
        let mut store = EntityStore::new();
        // Position but no Renderable
        store.create_entity([Component::Position(Position::new(600.0, 600.0))]);
        // Renderable but explicitly off
        store.create_entity([
            Component::Position(Position::new(0.0, 0.0)),
            Component::Renderable(Renderable(false)),
        ]);
        // Renderable but no Position
        store.create_entity([Component::Renderable(Renderable(true))]);

        let mut canvas = RecordingCanvas::default();
        render_system(&store, &mut canvas);

        assert!(canvas.rects().is_empty());
        // The caption still goes out exactly once.
        assert_eq!(canvas.text_count(), 1);
    }

    #[test]
    fn test_render_caption_once_per_frame() {
        let store = store_with_player();
        let mut canvas = RecordingCanvas::default();

        render_system(&store, &mut canvas);

        assert_eq!(canvas.text_count(), 1);
        assert_eq!(
            canvas.calls[0],
            DrawCall::Text {
                text: CAPTION_TEXT.to_string(),
                x: CAPTION_X,
                y: CAPTION_Y,
                size: CAPTION_SIZE,
                color: CAPTION_COLOR,
            }
        );
    }
}
