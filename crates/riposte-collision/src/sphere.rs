//! Circular volumes.

use std::rc::Rc;

use glam::Vec2;

use crate::flip::FlipInfo;
use crate::hit_type::HitType;
use crate::volume::{CollisionVolume, Extent, SharedVolume, VolumeShape};

/// Circle described by a local center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereVolume {
    /// Center in unflipped local space.
    pub center: Vec2,
    /// Radius.
    pub radius: f32,
    /// Hit type tag.
    pub hit_type: HitType,
}

impl SphereVolume {
    /// Create a circle from its center and radius.
    #[must_use]
    pub const fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(center_x, center_y),
            radius,
            hit_type: HitType::INVALID,
        }
    }

    /// Set the hit type.
    #[must_use]
    pub const fn with_hit_type(mut self, hit_type: HitType) -> Self {
        self.hit_type = hit_type;
        self
    }

    /// Smallest circle around the union of every volume's bounds.
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

    /// Center in world space, honoring the flip.
    #[must_use]
    pub fn world_center(&self, position: Vec2, flip: FlipInfo) -> Vec2 {
        Vec2::new(
            self.min_x_position(flip) + self.radius + position.x,
            self.min_y_position(flip) + self.radius + position.y,
        )
    }
}

/// Tangent circles do not overlap.
fn circles_overlap(center: Vec2, radius: f32, other_center: Vec2, other_radius: f32) -> bool {
    let reach = radius + other_radius;
    (other_center - center).length_squared() < reach * reach
}

impl CollisionVolume for SphereVolume {
    fn min_x(&self) -> f32 {
        self.center.x - self.radius
    }

    fn max_x(&self) -> f32 {
        self.center.x + self.radius
    }

    fn min_y(&self) -> f32 {
        self.center.y - self.radius
    }

    fn max_y(&self) -> f32 {
        self.center.y + self.radius
    }

    fn hit_type(&self) -> HitType {
        self.hit_type
    }

    fn set_hit_type(&mut self, hit_type: HitType) {
        self.hit_type = hit_type;
    }

    fn shape(&self) -> VolumeShape<'_> {
        VolumeShape::Sphere(self)
    }

    fn intersects(
        &self,
        position: Vec2,
        flip: FlipInfo,
        other: &dyn CollisionVolume,
        other_position: Vec2,
        other_flip: FlipInfo,
    ) -> bool {
        match other.shape() {
            // The box test is the exact one for mixed pairs.
            VolumeShape::AaBox(_) => {
                other.intersects(other_position, other_flip, self, position, flip)
            },
            VolumeShape::Sphere(sphere) => circles_overlap(
                self.world_center(position, flip),
                self.radius,
                sphere.world_center(other_position, other_flip),
                sphere.radius,
            ),
            VolumeShape::Other => {
                // Loose fit: the full larger side as radius, not half.
                let bounds = Extent::placed(other, other_position, other_flip);
                circles_overlap(
                    self.world_center(position, flip),
                    self.radius,
                    bounds.center(),
                    bounds.width().max(bounds.height()),
                )
            },
        }
    }

    fn grow_by(&mut self, other: &dyn CollisionVolume) {
        let current = if self.radius > 0.0 {
            Some(Extent::local(&*self))
        } else {
            None
        };
        let grown = Extent::grown(current, other);

        self.center = grown.center();
        self.radius = grown.width().max(grown.height()) * 0.5;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
