use crate::component::{ComponentKind, Position};
use crate::entity::Entity;
use crate::store::EntityStore;

/// A builder for filtering entities in a store.
///
/// Results come back in store insertion order.
pub struct QueryBuilder<'s> {
    store: &'s EntityStore,
    with: Vec<ComponentKind>,
    without: Vec<ComponentKind>,
    at: Option<Position>,
    limit: Option<usize>,
}

impl<'s> QueryBuilder<'s> {
    /// Start an unfiltered query over `store`.
    pub fn new(store: &'s EntityStore) -> Self {
        Self {
            store,
            with: Vec::new(),
            without: Vec::new(),
            at: None,
            limit: None,
        }
    }

    /// Require a component kind.
    pub fn with(mut self, kind: ComponentKind) -> Self {
        self.with.push(kind);
        self
    }

    /// Require every listed kind.
    pub fn with_all(mut self, kinds: &[ComponentKind]) -> Self {
        self.with.extend_from_slice(kinds);
        self
    }

    /// Exclude entities carrying a component kind.
    pub fn without(mut self, kind: ComponentKind) -> Self {
        self.without.push(kind);
        self
    }

    /// Restrict to entities whose position equals `(x, y)`.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.at = Some(Position::new(x, y));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Execute the query and return matching entities.
    pub fn execute(self) -> Vec<&'s Entity> {
        let limit = self.limit.unwrap_or(usize::MAX);
        self.store
            .iter()
            .filter(|e| self.matches(e))
            .take(limit)
            .collect()
    }

    /// The first match, if any.
    pub fn first(self) -> Option<&'s Entity> {
        self.store.iter().find(|e| self.matches(e))
    }

    /// Count matching entities without collecting them.
    pub fn count(self) -> usize {
        self.store.iter().filter(|e| self.matches(e)).count()
    }

    fn matches(&self, entity: &Entity) -> bool {
        if !entity.has_all(&self.with) {
            return false;
        }

        if self.without.iter().any(|k| entity.has_component(*k)) {
            return false;
        }

        if let Some(at) = self.at
            && entity.position() != Some(at)
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::component::{Component, Position};
    use crate::entity::Entity;
    use crate::store::EntityStore;

    use super::*;

    fn test_store() -> EntityStore {
        let mut store = EntityStore::new();
        store
            .spawn(Entity::with_components([
                Component::Position(Position::new(1, 1)),
                Component::Blocking,
                Component::Movement,
            ]))
            .unwrap();
        store
            .spawn(Entity::with_components([
                Component::Position(Position::new(1, 1)),
                Component::Lootable(Default::default()),
            ]))
            .unwrap();
        store
            .spawn(Entity::with_components([
                Component::Position(Position::new(2, 1)),
                Component::Blocking,
            ]))
            .unwrap();
        store
    }

    #[test]
    fn query_by_kind() {
        let store = test_store();
        assert_eq!(store.query().with(ComponentKind::Blocking).count(), 2);
    }

    #[test]
    fn query_by_location() {
        let store = test_store();
        assert_eq!(store.query().at(1, 1).count(), 2);
        assert_eq!(store.query().at(5, 5).count(), 0);
    }

    #[test]
    fn query_excludes_kind() {
        let store = test_store();
        let results = store
            .query()
            .with(ComponentKind::Position)
            .without(ComponentKind::Blocking)
            .execute();
        assert_eq!(results.len(), 1);
        assert!(results[0].has_component(ComponentKind::Lootable));
    }

    #[test]
    fn query_with_limit() {
        let store = test_store();
        let results = store.query().with(ComponentKind::Position).limit(2).execute();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn query_combined_filters() {
        let store = test_store();
        let hit = store
            .query()
            .with_all(&[ComponentKind::Blocking, ComponentKind::Movement])
            .at(1, 1)
            .first();
        assert!(hit.is_some());
        assert!(store.query().with(ComponentKind::Movement).at(2, 1).first().is_none());
    }
}
