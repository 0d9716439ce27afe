/// Alias for `Result<T, MapGenError>`.
pub type MapGenResult<T> = Result<T, MapGenError>;

/// Errors raised while generating a map.
#[derive(Debug, thiserror::Error)]
pub enum MapGenError {
    /// Either side is shorter than 3 tiles.
    #[error("map must be at least 3x3, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// The map holds more tiles than the generator accepts.
    #[error("map of {width}x{height} exceeds the limit of {max_tiles} tiles")]
    TooLarge {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
        /// The tile limit.
        max_tiles: i64,
    },

    /// A single attempt left no open tile.
    #[error("generated cave has no open tiles")]
    EmptyCavern,

    /// Every retry produced an empty cave.
    #[error("no usable cave after {attempts} attempts")]
    Exhausted {
        /// Attempts made before giving up.
        attempts: u32,
    },
}
