//! Map generation for Delvekeep.
//!
//! The cave generator seeds noise, smooths it with a cellular automaton, seals
//! the border, and keeps only the largest 4-connected region so every open
//! tile is reachable from every other.

/// Arena generator: a walled empty room.
pub mod arena;
/// Cellular-automaton cave generator with region selection.
pub mod cavern;
/// Generation parameters.
pub mod config;
/// Error types for map generation.
pub mod error;

/// Re-export of [`arena::generate_arena`].
pub use arena::generate_arena;
/// Re-exports of the cave generator entry points.
pub use cavern::{Cavern, MAX_MAP_TILES, build_cavern, generate_cavern};
/// Re-export of [`config::CaveConfig`].
pub use config::CaveConfig;
/// Re-exports of [`error::MapGenError`] and [`error::MapGenResult`].
pub use error::{MapGenError, MapGenResult};
