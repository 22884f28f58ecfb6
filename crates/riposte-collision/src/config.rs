//! Collision system configuration.

use riposte_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Maximum number of objects that may register in one frame by default.
pub const MAX_COLLIDING_OBJECTS: usize = 256;

/// Collision system settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Size of the registration pool (hard per-frame cap)
    pub capacity: usize,
    /// Renderer should outline bounding volumes
    pub draw_bounding_volume: bool,
    /// Renderer should outline attack and vulnerability volumes
    pub draw_collision_volumes: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_COLLIDING_OBJECTS,
            draw_bounding_volume: false,
            draw_collision_volumes: false,
        }
    }
}

impl CollisionConfig {
    /// Checks the settings can build a working system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
