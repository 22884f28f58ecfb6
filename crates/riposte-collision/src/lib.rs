//! # Riposte Collision
//!
//! Per-frame dynamic hit detection for 2D action games.
//!
//! Each frame, every collidable object registers a coarse bounding volume
//! plus optional lists of attack and vulnerability volumes. A single
//! [`GameObjectCollisionSystem::update`] then:
//! - Sorts the registrations along X and sweeps them (sweep-and-prune)
//! - Gates candidate pairs on their bounding volumes
//! - Matches attack volumes against vulnerability volumes by [`HitType`]
//! - Notifies both sides through the [`HitReaction`] interface
//!
//! ## Volumes
//!
//! Volumes live in object-local, unflipped space. A [`FlipInfo`] mirrors
//! them at test time so one definition serves both facing directions.
//! [`AaBoxVolume`] and [`SphereVolume`] are the built-in shapes; any other
//! [`CollisionVolume`] implementation is tested against spheres as a
//! bounding circle and against boxes through its bounds.
//!
//! ## Pooling
//!
//! Registration records come from a fixed-size pool allocated up front.
//! After warm-up a frame performs no heap allocation.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use glam::Vec2;
//! use riposte_collision::prelude::*;
//! use riposte_common::EntityId;
//!
//! struct Soak;
//! impl HitReaction for Soak {
//!     fn received_hit(&mut self, _: &CollisionObject, _: &CollisionObject, _: HitType) -> bool {
//!         true
//!     }
//!     fn hit_victim(&mut self, _: &CollisionObject, _: &CollisionObject, _: HitType, _: bool) {}
//! }
//!
//! let bounds: SharedVolume = Rc::new(AaBoxVolume::new(0.0, 0.0, 10.0, 10.0));
//! let attack = volume_list([AaBoxVolume::new(0.0, 0.0, 10.0, 10.0)
//!     .with_hit_type(HitType::HIT)
//!     .into_shared()]);
//! let vulnerable = volume_list([AaBoxVolume::new(0.0, 0.0, 10.0, 10.0).into_shared()]);
//! let reaction: SharedReaction = Rc::new(RefCell::new(Soak));
//!
//! let mut system = GameObjectCollisionSystem::new();
//! let a = CollisionObject::new(EntityId::from_raw(1), Vec2::ZERO);
//! let b = CollisionObject::new(EntityId::from_raw(2), Vec2::new(5.0, 0.0));
//! system.register_for_collisions(a, None, Some(&bounds), Some(&attack), None);
//! system.register_for_collisions(b, Some(&reaction), Some(&bounds), None, Some(&vulnerable));
//!
//! let stats = system.update(1.0 / 60.0);
//! assert_eq!(stats.hits_dispatched, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod aabox;
pub mod config;
pub mod flip;
pub mod hit_type;
pub mod object;
mod pool;
pub mod sphere;
pub mod system;
pub mod volume;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aabox::*;
    pub use crate::config::*;
    pub use crate::flip::*;
    pub use crate::hit_type::*;
    pub use crate::object::*;
    pub use crate::sphere::*;
    pub use crate::system::*;
    pub use crate::volume::*;
}

pub use prelude::*;
