use std::collections::HashMap;

use crate::component::{Component, ComponentKind};
use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::query::QueryBuilder;

/// Owns every entity in the game. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: HashMap<EntityId, Entity>,
    order: Vec<EntityId>,
}

impl EntityStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Entity lifecycle
    // -----------------------------------------------------------------------

    /// Add an entity to the store. Returns the entity's ID.
    pub fn spawn(&mut self, entity: Entity) -> CoreResult<EntityId> {
        let id = entity.id();
        if self.entities.contains_key(&id) {
            return Err(CoreError::DuplicateEntity(id));
        }
        self.order.push(id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Add several entities in order.
    pub fn extend(&mut self, entities: impl IntoIterator<Item = Entity>) -> CoreResult<()> {
        for entity in entities {
            self.spawn(entity)?;
        }
        Ok(())
    }

    /// Look up an entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    // -----------------------------------------------------------------------
    // Component mutation
    // -----------------------------------------------------------------------

    /// Add (or replace) a component on an entity.
    pub fn add_component(&mut self, id: EntityId, component: Component) -> CoreResult<()> {
        self.entity_mut(id)?.add_component(component);
        Ok(())
    }

    /// Add (or replace) several components at once.
    pub fn add_components(
        &mut self,
        id: EntityId,
        components: impl IntoIterator<Item = Component>,
    ) -> CoreResult<()> {
        self.entity_mut(id)?.add_components(components);
        Ok(())
    }

    /// Remove a component from an entity. Removing an absent kind is not an error.
    pub fn remove_component(
        &mut self,
        id: EntityId,
        kind: ComponentKind,
    ) -> CoreResult<Option<Component>> {
        Ok(self.entity_mut(id)?.remove_component(kind))
    }

    /// Remove several components. Absent kinds are skipped.
    pub fn remove_components(&mut self, id: EntityId, kinds: &[ComponentKind]) -> CoreResult<()> {
        self.entity_mut(id)?.remove_components(kinds);
        Ok(())
    }

    fn entity_mut(&mut self, id: EntityId) -> CoreResult<&mut Entity> {
        self.entities
            .get_mut(&id)
            .ok_or(CoreError::EntityNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Component queries
    // -----------------------------------------------------------------------

    /// False for unknown entities.
    pub fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.get(id).is_some_and(|e| e.has_component(kind))
    }

    /// False for unknown entities, whatever `kinds` holds.
    pub fn has_all(&self, id: EntityId, kinds: &[ComponentKind]) -> bool {
        self.get(id).is_some_and(|e| e.has_all(kinds))
    }

    /// The component of `kind` on `id`, if both exist.
    pub fn component(&self, id: EntityId, kind: ComponentKind) -> Option<&Component> {
        self.get(id).and_then(|e| e.get(kind))
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    /// Snapshot of all IDs in insertion order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Start building a query over this store.
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }

    // -----------------------------------------------------------------------
    // Location helpers
    // -----------------------------------------------------------------------

    /// The player-controlled entity, if any.
    pub fn player(&self) -> Option<&Entity> {
        self.query().with(ComponentKind::Player).first()
    }

    /// The first blocking entity standing at `(x, y)`.
    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        self.query().with(ComponentKind::Blocking).at(x, y).first()
    }

    /// Every entity with an appearance at `(x, y)`, except the player.
    pub fn entities_at(&self, x: i32, y: i32) -> Vec<&Entity> {
        self.query()
            .with(ComponentKind::Appearance)
            .without(ComponentKind::Player)
            .at(x, y)
            .execute()
    }

    /// Display names of every entity at `(x, y)`, player included, comma separated.
    pub fn names_at(&self, x: i32, y: i32) -> String {
        self.query()
            .with(ComponentKind::Appearance)
            .at(x, y)
            .execute()
            .iter()
            .filter_map(|e| e.appearance())
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
