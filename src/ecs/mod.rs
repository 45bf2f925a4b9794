//! ECS Core
//!
//! A deliberately small entity-component-system runtime:
//! - Entity: a fixed record of optional component slots (no runtime type
//!   registration - the four component kinds are known at compile time)
//! - EntityStore: append-only, insertion-ordered storage with stable indices
//! - Systems: plain functions (input, movement, render) run once per frame
//! - FrameDriver: the Update-then-Draw schedule around those systems
//!
//! Design philosophy:
//! - Simple over flexible (the component set is closed on purpose)
//! - Partial entities are normal: every system checks for the slots it
//!   needs and silently skips the rest
//! - Host facilities arrive through small traits, so the whole core runs
//!   headless under test

pub mod component;
pub mod driver;
pub mod error;
pub mod store;
pub mod systems;

// Re-export main types
pub use component::{Component, Entity, Position, Renderable, Rgba, Velocity};
pub use driver::FrameDriver;
pub use error::EcsError;
pub use store::{EntityId, EntityStore};
pub use systems::{Canvas, Control, InputSource};
