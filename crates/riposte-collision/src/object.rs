//! The slice of a game object the collision system reads and calls.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use riposte_common::EntityId;

use crate::flip::FlipInfo;
use crate::hit_type::HitType;

/// Per-frame snapshot of a collidable game object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionObject {
    /// Object identity, passed back in hit notifications.
    pub id: EntityId,
    /// World position of the object's local origin.
    pub position: Vec2,
    /// Facing direction; negative components mirror the volumes.
    pub facing: Vec2,
    /// Unflipped sprite width.
    pub width: f32,
    /// Unflipped sprite height.
    pub height: f32,
}

impl CollisionObject {
    /// Create an unsized, right-facing object at `position`.
    #[must_use]
    pub const fn new(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            position,
            facing: Vec2::X,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Set the facing direction.
    #[must_use]
    pub const fn with_facing(mut self, facing: Vec2) -> Self {
        self.facing = facing;
        self
    }

    /// Set the unflipped sprite size.
    #[must_use]
    pub const fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mirroring applied to this object's volumes.
    #[must_use]
    pub fn flip_info(&self) -> FlipInfo {
        FlipInfo::from_facing(self.facing, self.width, self.height)
    }
}

/// Hit notifications implemented by game objects.
///
/// For a hit of type `H` from attacker `A` onto victim `V`, the victim's
/// reaction is asked first; its answer is then reported to the attacker's
/// reaction. A victim without a reaction never accepts.
pub trait HitReaction {
    /// The victim was hit. Returns whether the hit was accepted.
    fn received_hit(
        &mut self,
        victim: &CollisionObject,
        attacker: &CollisionObject,
        hit_type: HitType,
    ) -> bool;

    /// The attacker hit something; `accepted` is the victim's answer.
    fn hit_victim(
        &mut self,
        attacker: &CollisionObject,
        victim: &CollisionObject,
        hit_type: HitType,
        accepted: bool,
    );
}

/// A reaction target shared between a game object and its registrations.
pub type SharedReaction = Rc<RefCell<dyn HitReaction>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_facing_is_unflipped() {
        let object = CollisionObject::new(EntityId::from_raw(1), Vec2::ZERO).with_size(32.0, 16.0);
        assert_eq!(object.flip_info(), FlipInfo::new(false, false, 32.0, 16.0));
    }

    #[test]
    fn test_facing_left_flips_x() {
        let object = CollisionObject::new(EntityId::from_raw(1), Vec2::ZERO)
            .with_size(32.0, 16.0)
            .with_facing(Vec2::new(-1.0, 0.0));
        let flip = object.flip_info();
        assert!(flip.flip_x);
        assert!(!flip.flip_y);
        assert_eq!(flip.parent_width, 32.0);
    }
}
