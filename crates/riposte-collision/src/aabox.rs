//! Axis-aligned box volumes.

use std::rc::Rc;

use glam::Vec2;

use crate::flip::FlipInfo;
use crate::hit_type::HitType;
use crate::volume::{CollisionVolume, Extent, SharedVolume, VolumeShape};

/// Axis-aligned rectangle anchored at its bottom-left corner.
///
/// Y grows up: the top edge is the numerically larger bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AaBoxVolume {
    /// Bottom-left corner in unflipped local space.
    pub offset: Vec2,
    /// Width along X.
    pub width: f32,
    /// Height along Y.
    pub height: f32,
    /// Hit type tag.
    pub hit_type: HitType,
}

impl AaBoxVolume {
    /// Create a box from its bottom-left corner and size.
    #[must_use]
    pub const fn new(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::new(offset_x, offset_y),
            width,
            height,
            hit_type: HitType::INVALID,
        }
    }

    /// Set the hit type.
    #[must_use]
    pub const fn with_hit_type(mut self, hit_type: HitType) -> Self {
        self.hit_type = hit_type;
        self
    }

    /// Smallest box covering every volume in `volumes`.
    #[must_use]
    pub fn enclosing<'a, I>(volumes: I) -> Self
    where
        I: IntoIterator<Item = &'a SharedVolume>,
    {
        let mut bounds = Self::default();
        for volume in volumes {
            bounds.grow_by(volume.as_ref());
        }
        bounds
    }

    /// Wrap for sharing between frames and registrations.
    #[must_use]
    pub fn into_shared(self) -> SharedVolume {
        Rc::new(self)
    }

    fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl CollisionVolume for AaBoxVolume {
    fn min_x(&self) -> f32 {
        self.offset.x
    }

    fn max_x(&self) -> f32 {
        self.offset.x + self.width
    }

    fn min_y(&self) -> f32 {
        self.offset.y
    }

    fn max_y(&self) -> f32 {
        self.offset.y + self.height
    }

    fn hit_type(&self) -> HitType {
        self.hit_type
    }

    fn set_hit_type(&mut self, hit_type: HitType) {
        self.hit_type = hit_type;
    }

    fn shape(&self) -> VolumeShape<'_> {
        VolumeShape::AaBox(self)
    }

    fn intersects(
        &self,
        position: Vec2,
        flip: FlipInfo,
        other: &dyn CollisionVolume,
        other_position: Vec2,
        other_flip: FlipInfo,
    ) -> bool {
        let ours = Extent::placed(self, position, flip);
        let theirs = Extent::placed(other, other_position, other_flip);

        // Non-box operands may only answer through their bounds, so test
        // from both sides.
        ours.overlaps(&theirs) || theirs.overlaps(&ours)
    }

    fn grow_by(&mut self, other: &dyn CollisionVolume) {
        let current = if self.is_empty() {
            None
        } else {
            Some(Extent::local(&*self))
        };
        let grown = Extent::grown(current, other);

        self.offset = Vec2::new(grown.left, grown.bottom);
        self.width = grown.width();
        self.height = grown.height();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
