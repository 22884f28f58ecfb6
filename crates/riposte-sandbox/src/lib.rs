//! Riposte Sandbox - scripted scenes for the Riposte hit detector.
//!
//! Loads a TOML scene of moving objects, registers them with a
//! [`GameObjectCollisionSystem`](riposte_collision::GameObjectCollisionSystem)
//! every frame, and logs the hits they exchange.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

/// Stepping and collision settings
pub mod config;
/// Frame-by-frame scene runner
pub mod sandbox;
/// Scene file format
pub mod scene;

pub use config::SandboxConfig;
pub use sandbox::{Actor, ActorReaction, HitTally, RunSummary, Sandbox};
pub use scene::{ObjectDef, Scene, SceneLoadError, VolumeDef};
