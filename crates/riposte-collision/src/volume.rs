//! The shape-independent collision volume contract.

use std::fmt;
use std::rc::Rc;

use glam::Vec2;

use crate::aabox::AaBoxVolume;
use crate::flip::FlipInfo;
use crate::hit_type::HitType;
use crate::sphere::SphereVolume;

/// A volume shared between animation frames and per-frame registrations.
pub type SharedVolume = Rc<dyn CollisionVolume>;

/// An ordered list of attack or vulnerability volumes.
pub type VolumeList = Rc<[SharedVolume]>;

/// Collects volumes into a [`VolumeList`].
pub fn volume_list<I>(volumes: I) -> VolumeList
where
    I: IntoIterator<Item = SharedVolume>,
{
    volumes.into_iter().collect()
}

/// Concrete shape of a volume, used by the narrow phase to pick a test.
#[derive(Debug, Clone, Copy)]
pub enum VolumeShape<'a> {
    /// Axis-aligned box.
    AaBox(&'a AaBoxVolume),
    /// Circle.
    Sphere(&'a SphereVolume),
    /// Anything else; tested through its bounds.
    Other,
}

/// A collision volume in object-local, unflipped space.
///
/// The same volume may be tested on behalf of many objects in one frame:
/// every test supplies the owning object's world position and [`FlipInfo`].
pub trait CollisionVolume: fmt::Debug {
    /// Unflipped minimum X.
    fn min_x(&self) -> f32;
    /// Unflipped maximum X.
    fn max_x(&self) -> f32;
    /// Unflipped minimum Y.
    fn min_y(&self) -> f32;
    /// Unflipped maximum Y.
    fn max_y(&self) -> f32;

    /// Hit type tag.
    fn hit_type(&self) -> HitType;

    /// Replaces the hit type tag.
    fn set_hit_type(&mut self, hit_type: HitType);

    /// Capability query for the narrow phase.
    fn shape(&self) -> VolumeShape<'_> {
        VolumeShape::Other
    }

    /// Tests this volume, placed at `position` with `flip`, against `other`
    /// placed at `other_position` with `other_flip`.
    fn intersects(
        &self,
        position: Vec2,
        flip: FlipInfo,
        other: &dyn CollisionVolume,
        other_position: Vec2,
        other_flip: FlipInfo,
    ) -> bool;

    /// Expands this volume to also cover `other`'s unflipped bounds.
    fn grow_by(&mut self, other: &dyn CollisionVolume);

    /// Returns to zero extent with an `INVALID` hit type.
    fn reset(&mut self);

    /// Minimum X after mirroring.
    fn min_x_position(&self, flip: FlipInfo) -> f32 {
        flip.map_x(self.min_x(), self.max_x()).0
    }

    /// Maximum X after mirroring.
    fn max_x_position(&self, flip: FlipInfo) -> f32 {
        flip.map_x(self.min_x(), self.max_x()).1
    }

    /// Minimum Y after mirroring.
    fn min_y_position(&self, flip: FlipInfo) -> f32 {
        flip.map_y(self.min_y(), self.max_y()).0
    }

    /// Maximum Y after mirroring.
    fn max_y_position(&self, flip: FlipInfo) -> f32 {
        flip.map_y(self.min_y(), self.max_y()).1
    }
}

/// World-space rectangle covering a volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Extent {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Extent {
    /// Flip-aware bounds of `volume` translated by `position`.
    pub fn placed(volume: &dyn CollisionVolume, position: Vec2, flip: FlipInfo) -> Self {
        Self {
            left: volume.min_x_position(flip) + position.x,
            right: volume.max_x_position(flip) + position.x,
            bottom: volume.min_y_position(flip) + position.y,
            top: volume.max_y_position(flip) + position.y,
        }
    }

    /// Unflipped local bounds of `volume`.
    pub fn local(volume: &dyn CollisionVolume) -> Self {
        Self {
            left: volume.min_x(),
            right: volume.max_x(),
            bottom: volume.min_y(),
            top: volume.max_y(),
        }
    }

    /// Union of `current` and `other`'s local bounds. An empty `current`
    /// is replaced outright so the union is not anchored at the origin.
    pub fn grown(current: Option<Self>, other: &dyn CollisionVolume) -> Self {
        let other = Self::local(other);
        match current {
            Some(current) => Self {
                left: current.left.min(other.left),
                right: current.right.max(other.right),
                bottom: current.bottom.min(other.bottom),
                top: current.top.max(other.top),
            },
            None => other,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() * 0.5,
            self.bottom + self.height() * 0.5,
        )
    }

    /// Strict overlap on both axes; shared edges do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        let horizontal = self.left < other.right && other.left < self.right;
        let vertical = self.top > other.bottom && other.top > self.bottom;
        horizontal && vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_flip() -> impl Strategy<Value = FlipInfo> {
        (any::<bool>(), any::<bool>(), 0.0f32..64.0, 0.0f32..64.0)
            .prop_map(|(flip_x, flip_y, width, height)| {
                FlipInfo::new(flip_x, flip_y, width, height)
            })
    }

    fn any_position() -> impl Strategy<Value = Vec2> {
        (-100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    fn any_volume() -> impl Strategy<Value = SharedVolume> {
        prop_oneof![
            (-20.0f32..20.0, -20.0f32..20.0, 0.0f32..40.0, 0.0f32..40.0)
                .prop_map(|(x, y, w, h)| AaBoxVolume::new(x, y, w, h).into_shared()),
            (-20.0f32..20.0, -20.0f32..20.0, 0.0f32..20.0)
                .prop_map(|(x, y, r)| SphereVolume::new(x, y, r).into_shared()),
        ]
    }

    proptest! {
        #[test]
        fn test_intersection_is_symmetric(
            a in any_volume(),
            b in any_volume(),
            position_a in any_position(),
            position_b in any_position(),
            flip_a in any_flip(),
            flip_b in any_flip(),
        ) {
            let forward = a.intersects(position_a, flip_a, b.as_ref(), position_b, flip_b);
            let backward = b.intersects(position_b, flip_b, a.as_ref(), position_a, flip_a);
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn test_flip_preserves_extent(volume in any_volume(), flip in any_flip()) {
            let width = volume.max_x_position(flip) - volume.min_x_position(flip);
            let height = volume.max_y_position(flip) - volume.min_y_position(flip);
            prop_assert!((width - (volume.max_x() - volume.min_x())).abs() < 1e-3);
            prop_assert!((height - (volume.max_y() - volume.min_y())).abs() < 1e-3);
        }
    }

    #[test]
    fn test_flip_aware_bounds() {
        let volume = AaBoxVolume::new(2.0, 3.0, 4.0, 5.0);

        assert_eq!(volume.min_x_position(FlipInfo::NONE), 2.0);
        assert_eq!(volume.max_x_position(FlipInfo::NONE), 6.0);

        let flip = FlipInfo::new(true, false, 20.0, 0.0);
        assert_eq!(volume.min_x_position(flip), 14.0);
        assert_eq!(volume.max_x_position(flip), 18.0);
        assert_eq!(volume.min_y_position(flip), 3.0);
        assert_eq!(volume.max_y_position(flip), 8.0);
    }

    #[test]
    fn test_flip_y_bounds() {
        let volume = AaBoxVolume::new(2.0, 3.0, 4.0, 5.0);
        let flip = FlipInfo::new(false, true, 0.0, 10.0);
        assert_eq!(volume.min_y_position(flip), 2.0);
        assert_eq!(volume.max_y_position(flip), 7.0);
        assert_eq!(volume.min_x_position(flip), 2.0);
    }

    #[test]
    fn test_extent_edges_do_not_overlap() {
        let a = Extent {
            left: 0.0,
            right: 10.0,
            bottom: 0.0,
            top: 10.0,
        };
        let touching = Extent {
            left: 10.0,
            right: 20.0,
            bottom: 0.0,
            top: 10.0,
        };
        let inside = Extent {
            left: 9.0,
            right: 20.0,
            bottom: 9.0,
            top: 20.0,
        };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_volume_list_keeps_order() {
        let list = volume_list([
            AaBoxVolume::new(0.0, 0.0, 1.0, 1.0).into_shared(),
            SphereVolume::new(0.0, 0.0, 3.0).into_shared(),
        ]);
        assert_eq!(list.len(), 2);
        assert!(matches!(list[0].shape(), VolumeShape::AaBox(_)));
        assert!(matches!(list[1].shape(), VolumeShape::Sphere(_)));
    }
}
