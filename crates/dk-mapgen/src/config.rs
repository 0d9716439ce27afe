use serde::{Deserialize, Serialize};

/// Parameters for the cave generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Percent chance that a tile starts out as wall.
    pub wall_chance: u32,
    /// Passes of the combined distance-1/distance-2 rule.
    pub smoothing_passes: u32,
    /// Passes of the distance-1 rule alone.
    pub cleanup_passes: u32,
    /// Fresh seeds tried before giving up on a degenerate map.
    pub max_attempts: u32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            wall_chance: 50,
            smoothing_passes: 5,
            cleanup_passes: 5,
            max_attempts: 10,
        }
    }
}

impl CaveConfig {
    /// Set the initial wall percentage.
    pub fn with_wall_chance(mut self, percent: u32) -> Self {
        self.wall_chance = percent;
        self
    }

    /// Set the number of smoothing passes.
    pub fn with_smoothing_passes(mut self, passes: u32) -> Self {
        self.smoothing_passes = passes;
        self
    }

    /// Set the number of cleanup passes.
    pub fn with_cleanup_passes(mut self, passes: u32) -> Self {
        self.cleanup_passes = passes;
        self
    }

    /// Set how many seeds are tried before failing.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}
