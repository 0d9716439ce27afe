//! Turn-based simulation for Delvekeep: the game systems, the turn scheduler
//! and the world setup that ties the cave generator to the entity store.
//!
//! Everything here is headless. A front end drives a [`Game`] by feeding it
//! [`Intent`]s and reads the results back through its accessors.

/// Entity templates for the player, monsters and items.
pub mod archetype;
/// Game configuration with serde support.
pub mod config;
/// Borrowed state handed to every system.
pub mod context;
/// Error types for the simulation.
pub mod error;
/// Tile inspection cursor.
pub mod examine;
/// The game orchestrator and turn loop.
pub mod game;
/// Inventory hotkey allocation.
pub mod keys;
/// Capped, newest-first message log.
pub mod message;
/// Initial monster and item placement.
pub mod populate;
/// Per-entity game systems.
pub mod systems;
/// Turn phases, UI modes and player intents.
pub mod turn;

/// Re-export configuration.
pub use config::GameConfig;
/// Re-export the system context.
pub use context::SimContext;
/// Re-export error types.
pub use error::{SimError, SimResult};
/// Re-export the examine cursor.
pub use examine::ExamineCursor;
/// Re-export the orchestrator and its view types.
pub use game::{Game, ItemInfo, PlayerStats, Renderable};
/// Re-export the hotkey table.
pub use keys::InventoryKeys;
/// Re-export the message log.
pub use message::MessageLog;
/// Re-export turn types.
pub use turn::{Intent, Mode, Outcome, TurnPhase};
