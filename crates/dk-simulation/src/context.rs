use dk_core::{Entity, EntityId, EntityStore, GameMap};
use rand::rngs::StdRng;

use crate::message::MessageLog;

/// Mutable context passed to each system.
///
/// The map is read-only here: systems never change terrain, and visibility is
/// recomputed by the scheduler between the player's action and the mob sweep.
pub struct SimContext<'a> {
    /// Every entity.
    pub store: &'a mut EntityStore,
    /// Terrain.
    pub map: &'a GameMap,
    /// Player-facing messages.
    pub log: &'a mut MessageLog,
    /// Shared game RNG.
    pub rng: &'a mut StdRng,
}

impl SimContext<'_> {
    /// Send a line to the player's message log.
    pub fn say(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    /// Look up an entity.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(id)
    }

    /// Whether `id` is the player.
    pub fn is_player(&self, id: EntityId) -> bool {
        self.store.get(id).is_some_and(Entity::is_player)
    }

    /// The color-tagged display name of an entity, empty if it has no appearance.
    pub fn tagged_name(&self, id: EntityId) -> String {
        self.store
            .get(id)
            .and_then(Entity::appearance)
            .map(|a| a.tagged_name())
            .unwrap_or_default()
    }
}
