//! Core types for Delvekeep: entities, components, the tile map, and field of vision.
//!
//! Entities carry no behavior of their own. What an entity *is* follows from
//! which [`ComponentKind`]s it holds, and the systems in `dk-simulation`
//! branch on those capabilities rather than on any type hierarchy.

/// Component kinds and their payloads.
pub mod component;
/// Entity identifiers and the per-entity component container.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Radial ray-cast field of vision.
pub mod fov;
/// The tile grid.
pub mod map;
/// Query builder for filtering entities in a store.
pub mod query;
/// The central entity store.
pub mod store;

/// Re-export component types.
pub use component::{Component, ComponentKind};
/// Re-export entity types.
pub use entity::{Entity, EntityId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the field-of-vision caster.
pub use fov::FieldOfVision;
/// Re-export map types.
pub use map::{GameMap, Point, Tile};
/// Re-export the entity store.
pub use store::EntityStore;
