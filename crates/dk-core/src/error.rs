use crate::entity::EntityId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when mutating an entity store.
///
/// Queries never fail: an absent entity or component is reported as `None`
/// or `false`. Only writes through an unknown identifier are errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity ID does not exist in the store.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An entity with the same ID is already in the store.
    #[error("entity already exists: {0}")]
    DuplicateEntity(EntityId),
}
