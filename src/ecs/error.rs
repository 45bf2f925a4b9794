//! ECS error types.

use thiserror::Error;

/// Failures surfaced by the entity store.
///
/// Missing components on an entity are never an error - systems handle those
/// as the normal partial-entity case. Component field values are not
/// validated either; the only failure the store itself can detect is an
/// index that was never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EcsError {
    /// Indexed an entity slot that does not exist.
    #[error("entity index {index} out of range (store holds {len})")]
    OutOfRange { index: u32, len: usize },
}
