use dk_core::CoreError;
use dk_mapgen::MapGenError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while running the game.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An entity store operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The cave could not be generated.
    #[error("map generation failed: {0}")]
    MapGen(#[from] MapGenError),

    /// The player entity is gone from the store.
    #[error("the game has no player entity")]
    NoPlayer,
}
