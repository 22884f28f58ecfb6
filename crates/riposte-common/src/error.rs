//! Error types for Riposte.
//!
//! The per-frame collision pass never fails; these errors cover the
//! surrounding setup work (configuration and scene loading).

use thiserror::Error;

/// Top-level error type for Riposte operations.
#[derive(Debug, Error)]
pub enum RiposteError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario errors
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The record pool needs room for at least one object
    #[error("Collision capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Scenario description errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Two objects share an ID
    #[error("Duplicate object ID: {0}")]
    DuplicateObject(u64),

    /// Object has nothing to attack with and nothing to be hit on
    #[error("Object {0} has no attack or vulnerability volumes")]
    NoVolumes(u64),

    /// Scenario contains no objects
    #[error("Scenario contains no objects")]
    Empty,
}

/// Result type alias for Riposte operations.
pub type RiposteResult<T> = Result<T, RiposteError>;
