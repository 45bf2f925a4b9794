//! Component Types
//!
//! Components are plain data attached to entities - behavior lives in systems.
//! The component set is closed and known at compile time: Position, Velocity,
//! Renderable and Color. There is no runtime type registration; an entity is
//! a fixed record with one optional slot per kind (see [`Entity`]).

use serde::{Deserialize, Serialize};

/// Position in screen space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Velocity in pixels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Should this entity be drawn? A `Renderable(false)` entity is treated the
/// same as one without the component: the render system skips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renderable(pub bool);

/// An RGBA color with 8-bit channels.
///
/// Kept as our own type rather than macroquad's `Color` so the core stays
/// independent of the host layer and components stay serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    /// Fallback for renderable entities without a Color component.
    pub const GRAY: Rgba = Rgba::new(130, 130, 130, 255);
}

/// A tagged component value - the currency of entity creation.
///
/// `EntityStore::create_entity` takes any subset of these (possibly empty)
/// and initializes the matching slots on the new entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Position(Position),
    Velocity(Velocity),
    Renderable(Renderable),
    Color(Rgba),
}

/// A single entity: a fixed record of optional component slots.
///
/// Any subset of slots may be occupied, including none - systems check for
/// the slots they need and skip entities that lack them. At most one value
/// per kind is possible by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Option<Position>,
    pub velocity: Option<Velocity>,
    pub renderable: Option<Renderable>,
    pub color: Option<Rgba>,
}

impl Entity {
    /// An entity with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the slot matching the component's kind. Last write wins.
    pub fn attach(&mut self, component: Component) {
        match component {
            Component::Position(p) => self.position = Some(p),
            Component::Velocity(v) => self.velocity = Some(v),
            Component::Renderable(r) => self.renderable = Some(r),
            Component::Color(c) => self.color = Some(c),
        }
    }

    /// Number of occupied component slots.
    pub fn component_count(&self) -> usize {
        self.position.is_some() as usize
            + self.velocity.is_some() as usize
            + self.renderable.is_some() as usize
            + self.color.is_some() as usize
    }
}
