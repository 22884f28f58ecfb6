//! Sandbox configuration.
//!
//! Provides frame stepping and collision system settings.
//! Configuration can be loaded from and saved to a TOML file.

use riposte_collision::CollisionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "riposte.toml";

/// Frame length used when the configured one is unusable.
const DEFAULT_DELTA_TIME: f32 = 1.0 / 60.0;

/// Sandbox configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    // === Stepping ===
    /// Number of frames to simulate
    pub frames: u32,
    /// Seconds per frame
    pub delta_time: f32,

    // === Collision ===
    /// Collision system settings
    pub collision: CollisionConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            delta_time: DEFAULT_DELTA_TIME,
            collision: CollisionConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Load configuration from `riposte.toml` in the working directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp stepping values to sensible ranges.
    pub fn validate(&mut self) {
        self.frames = self.frames.clamp(1, 100_000);

        if !self.delta_time.is_finite() || self.delta_time <= 0.0 {
            warn!(delta_time = self.delta_time, "Unusable delta time, using default");
            self.delta_time = DEFAULT_DELTA_TIME;
        }
        self.delta_time = self.delta_time.clamp(0.0001, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SandboxConfig::default();
        assert_eq!(config.frames, 60);
        assert!((config.delta_time - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(config.collision.capacity, 256);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = SandboxConfig::load_from(dir.path().join("absent.toml"));
        assert_eq!(config, SandboxConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = SandboxConfig::default();
        config.frames = 240;
        config.collision.capacity = 32;
        config.collision.draw_bounding_volume = true;
        config.save_to(&path).expect("save config");

        assert_eq!(SandboxConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "frames = 10\n\n[collision]\ncapacity = 4\n").expect("write config");

        let config = SandboxConfig::load_from(&path);
        assert_eq!(config.frames, 10);
        assert_eq!(config.collision.capacity, 4);
        assert!(!config.collision.draw_collision_volumes);
        assert!((config.delta_time - DEFAULT_DELTA_TIME).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "frames = \"many\"").expect("write config");

        assert_eq!(SandboxConfig::load_from(&path), SandboxConfig::default());
    }

    #[test]
    fn test_validate_clamps() {
        let mut config = SandboxConfig {
            frames: 0,
            delta_time: -1.0,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.frames, 1);
        assert!((config.delta_time - DEFAULT_DELTA_TIME).abs() < f32::EPSILON);

        config.delta_time = 5.0;
        config.validate();
        assert_eq!(config.delta_time, 1.0);
    }
}
