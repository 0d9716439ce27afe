use dk_mapgen::CaveConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. The same seed reproduces the same run.
    pub seed: u64,
    /// Map width in tiles.
    pub map_width: i32,
    /// Map height in tiles.
    pub map_height: i32,
    /// Player view distance.
    pub torch_radius: i32,
    /// Monsters placed at world creation.
    pub monster_count: usize,
    /// Items placed at world creation.
    pub item_count: usize,
    /// Tile samples tried per placement before giving up.
    pub placement_attempts: usize,
    /// Maximum message log size (oldest messages dropped when exceeded). 0 = unlimited.
    pub message_log_capacity: usize,
    /// Player inventory capacity.
    pub inventory_capacity: usize,
    /// Cave generator parameters.
    pub cave: CaveConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_width: 100,
            map_height: 100,
            torch_radius: 6,
            monster_count: 10,
            item_count: 15,
            placement_attempts: 50,
            message_log_capacity: 100,
            inventory_capacity: 32,
            cave: CaveConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the map dimensions.
    pub fn with_map_size(mut self, width: i32, height: i32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }

    /// Set the player view distance.
    pub fn with_torch_radius(mut self, radius: i32) -> Self {
        self.torch_radius = radius;
        self
    }

    /// Set how many monsters and items are placed.
    pub fn with_population(mut self, monsters: usize, items: usize) -> Self {
        self.monster_count = monsters;
        self.item_count = items;
        self
    }

    /// Set the number of placement samples per spawn.
    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Set the message log size (0 = unlimited).
    pub fn with_message_log_capacity(mut self, capacity: usize) -> Self {
        self.message_log_capacity = capacity;
        self
    }

    /// Set the player inventory capacity.
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Set the cave generator parameters.
    pub fn with_cave(mut self, cave: CaveConfig) -> Self {
        self.cave = cave;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!((config.map_width, config.map_height), (100, 100));
        assert_eq!(config.torch_radius, 6);
        assert_eq!(config.monster_count, 10);
        assert_eq!(config.item_count, 15);
        assert_eq!(config.placement_attempts, 50);
        assert_eq!(config.message_log_capacity, 100);
        assert_eq!(config.inventory_capacity, 32);
    }

    #[test]
    fn config_builder_chain() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_map_size(40, 30)
            .with_torch_radius(9)
            .with_population(0, 3)
            .with_inventory_capacity(2);
        assert_eq!(config.seed, 7);
        assert_eq!((config.map_width, config.map_height), (40, 30));
        assert_eq!(config.torch_radius, 9);
        assert_eq!((config.monster_count, config.item_count), (0, 3));
        assert_eq!(config.inventory_capacity, 2);
    }

    #[test]
    fn config_from_partial_json() {
        let json = r#"{ "seed": 99, "cave": { "smoothing_passes": 4 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.map_width, 100);
        assert_eq!(config.cave.smoothing_passes, 4);
        assert_eq!(config.cave.wall_chance, 50);
    }
}
