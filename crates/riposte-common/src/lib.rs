//! # Riposte Common
//!
//! Shared types for the Riposte hit-detection workspace.
//!
//! This crate provides the pieces every other Riposte crate leans on:
//! - Entity identifiers for collidable game objects
//! - Common error types and the workspace result alias
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
