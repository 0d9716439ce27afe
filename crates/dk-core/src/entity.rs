use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::component::{
    Appearance, Attacker, BasicMeleeAi, Component, ComponentKind, Description, HitPoints,
    Inventory, Killable, Lootable, Position, Reproducer,
};

/// Unique identifier for every entity in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An identifier plus a set of components, at most one per kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    components: BTreeMap<ComponentKind, Component>,
}

impl Entity {
    /// Create an entity with a fresh ID and no components.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            components: BTreeMap::new(),
        }
    }

    /// Create an entity with a fresh ID holding `components`.
    pub fn with_components(components: impl IntoIterator<Item = Component>) -> Self {
        let mut entity = Self::new();
        entity.add_components(components);
        entity
    }

    /// This entity's identifier.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Add a component, replacing and returning any component of the same kind.
    pub fn add_component(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component.kind(), component)
    }

    /// Add several components. Later duplicates of a kind win.
    pub fn add_components(&mut self, components: impl IntoIterator<Item = Component>) {
        for component in components {
            self.add_component(component);
        }
    }

    /// Remove a component. Removing an absent kind is a no-op.
    pub fn remove_component(&mut self, kind: ComponentKind) -> Option<Component> {
        self.components.remove(&kind)
    }

    /// Remove every listed kind that is present.
    pub fn remove_components(&mut self, kinds: &[ComponentKind]) {
        for kind in kinds {
            self.components.remove(kind);
        }
    }

    /// Whether a component of `kind` is attached.
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// True iff every listed kind is present. An empty list is vacuously true.
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|k| self.components.contains_key(k))
    }

    /// The component of `kind`, if attached.
    pub fn get(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    /// All components in kind order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// The first AI kind this entity carries, in kind order.
    pub fn ai_kind(&self) -> Option<ComponentKind> {
        self.components.keys().copied().find(|k| k.is_ai())
    }

    /// Whether this entity is the player.
    pub fn is_player(&self) -> bool {
        self.has_component(ComponentKind::Player)
    }

    /// A copy of this entity under a fresh ID.
    pub fn duplicate(&self) -> Self {
        Self {
            id: EntityId::new(),
            components: self.components.clone(),
        }
    }

    // -- typed accessors --

    /// Position, if any.
    pub fn position(&self) -> Option<Position> {
        match self.get(ComponentKind::Position) {
            Some(Component::Position(p)) => Some(*p),
            _ => None,
        }
    }

    /// Appearance, if any.
    pub fn appearance(&self) -> Option<&Appearance> {
        match self.get(ComponentKind::Appearance) {
            Some(Component::Appearance(a)) => Some(a),
            _ => None,
        }
    }

    /// Attack and defense stats, if any.
    pub fn attacker(&self) -> Option<Attacker> {
        match self.get(ComponentKind::Attacker) {
            Some(Component::Attacker(a)) => Some(*a),
            _ => None,
        }
    }

    /// Hit points, if any.
    pub fn hit_points(&self) -> Option<HitPoints> {
        match self.get(ComponentKind::HitPoints) {
            Some(Component::HitPoints(hp)) => Some(*hp),
            _ => None,
        }
    }

    /// Death behavior, if any.
    pub fn killable(&self) -> Option<&Killable> {
        match self.get(ComponentKind::Killable) {
            Some(Component::Killable(k)) => Some(k),
            _ => None,
        }
    }

    /// Melee AI state, if any.
    pub fn basic_melee_ai(&self) -> Option<BasicMeleeAi> {
        match self.get(ComponentKind::BasicMeleeAi) {
            Some(Component::BasicMeleeAi(ai)) => Some(*ai),
            _ => None,
        }
    }

    /// Self-replication parameters, if any.
    pub fn reproducer(&self) -> Option<Reproducer> {
        match self.get(ComponentKind::Reproducer) {
            Some(Component::Reproducer(r)) => Some(*r),
            _ => None,
        }
    }

    /// Held items, if any.
    pub fn inventory(&self) -> Option<&Inventory> {
        match self.get(ComponentKind::Inventory) {
            Some(Component::Inventory(inv)) => Some(inv),
            _ => None,
        }
    }

    /// Pickup state, if this is an item.
    pub fn lootable(&self) -> Option<Lootable> {
        match self.get(ComponentKind::Lootable) {
            Some(Component::Lootable(l)) => Some(*l),
            _ => None,
        }
    }

    /// Flavor text, if any.
    pub fn description(&self) -> Option<&Description> {
        match self.get(ComponentKind::Description) {
            Some(Component::Description(d)) => Some(d),
            _ => None,
        }
    }

    /// Display name, or an empty string without an appearance.
    pub fn name(&self) -> &str {
        self.appearance().map(|a| a.name.as_str()).unwrap_or("")
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::layer;

    fn goblin() -> Entity {
        Entity::with_components([
            Component::Position(Position::new(3, 4)),
            Component::Appearance(Appearance::new('g', "green", layer::ACTOR, "Goblin")),
            Component::HitPoints(HitPoints::full(5)),
            Component::Blocking,
            Component::BasicMeleeAi(BasicMeleeAi::default()),
        ])
    }

    #[test]
    fn add_replaces_same_kind() {
        let mut e = goblin();
        let old = e.add_component(Component::Position(Position::new(9, 9)));
        assert_eq!(old, Some(Component::Position(Position::new(3, 4))));
        assert_eq!(e.position(), Some(Position::new(9, 9)));
        assert_eq!(e.components().count(), 5);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut e = goblin();
        assert!(e.remove_component(ComponentKind::Inventory).is_none());
        e.remove_components(&[ComponentKind::Blocking, ComponentKind::Stackable]);
        assert!(!e.has_component(ComponentKind::Blocking));
        assert_eq!(e.components().count(), 4);
    }

    #[test]
    fn has_all_is_conjunctive() {
        let e = goblin();
        assert!(e.has_all(&[]));
        assert!(e.has_all(&[ComponentKind::Position, ComponentKind::Blocking]));
        assert!(!e.has_all(&[ComponentKind::Position, ComponentKind::Movement]));
    }

    #[test]
    fn ai_kind_picks_first_in_kind_order() {
        let mut e = goblin();
        assert_eq!(e.ai_kind(), Some(ComponentKind::BasicMeleeAi));
        e.add_component(Component::RandomMovement);
        assert_eq!(e.ai_kind(), Some(ComponentKind::RandomMovement));
        e.remove_components(&[ComponentKind::RandomMovement, ComponentKind::BasicMeleeAi]);
        assert_eq!(e.ai_kind(), None);
    }

    #[test]
    fn duplicate_gets_fresh_id() {
        let e = goblin();
        let copy = e.duplicate();
        assert_ne!(e.id(), copy.id());
        assert_eq!(e.position(), copy.position());
        assert_eq!(copy.name(), "Goblin");
    }

    #[test]
    fn entity_id_display_is_short() {
        let id = EntityId::new();
        assert_eq!(id.to_string().len(), 8);
    }
}
