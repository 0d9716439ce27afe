//! Per-entity systems. Each one reads and rewrites components through a
//! [`SimContext`](crate::context::SimContext) and keeps no state of its own.

/// Basic melee AI.
pub mod ai;
/// Melee attack resolution and death.
pub mod combat;
/// Item pickup and inventory lookups.
pub mod inventory;
/// Player and random movement, plus capability dispatch.
pub mod movement;
/// Self-replication.
pub mod reproduction;

pub use ai::basic_melee;
pub use combat::{AttackOutcome, attack};
pub use inventory::{
    InventoryLine, InventoryView, PickupOutcome, count_item_instances, find_item_with_key,
    inventory_view, pickup,
};
pub use movement::{StepOutcome, movement, random_movement, step};
pub use reproduction::reproduce;
