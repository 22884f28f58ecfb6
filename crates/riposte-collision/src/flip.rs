//! Sprite mirroring descriptor.

use glam::Vec2;

/// Describes how an object's sprite is mirrored.
///
/// Volumes are authored for the unflipped sprite. When an object faces the
/// other way its volumes are reflected inside the parent's
/// `parent_width` x `parent_height` frame rather than duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlipInfo {
    /// Mirror horizontally.
    pub flip_x: bool,
    /// Mirror vertically.
    pub flip_y: bool,
    /// Unflipped width of the owning object.
    pub parent_width: f32,
    /// Unflipped height of the owning object.
    pub parent_height: f32,
}

impl FlipInfo {
    /// No mirroring.
    pub const NONE: Self = Self {
        flip_x: false,
        flip_y: false,
        parent_width: 0.0,
        parent_height: 0.0,
    };

    /// Creates a flip descriptor.
    #[must_use]
    pub const fn new(flip_x: bool, flip_y: bool, parent_width: f32, parent_height: f32) -> Self {
        Self {
            flip_x,
            flip_y,
            parent_width,
            parent_height,
        }
    }

    /// Derives the descriptor from a facing direction: a negative X or Y
    /// component mirrors that axis.
    #[must_use]
    pub fn from_facing(facing: Vec2, parent_width: f32, parent_height: f32) -> Self {
        Self::new(facing.x < 0.0, facing.y < 0.0, parent_width, parent_height)
    }

    /// Remaps an unflipped X interval into facing space.
    #[must_use]
    pub fn map_x(&self, min: f32, max: f32) -> (f32, f32) {
        if self.flip_x {
            (self.parent_width - max, self.parent_width - min)
        } else {
            (min, max)
        }
    }

    /// Remaps an unflipped Y interval into facing space.
    #[must_use]
    pub fn map_y(&self, min: f32, max: f32) -> (f32, f32) {
        if self.flip_y {
            (self.parent_height - max, self.parent_height - min)
        } else {
            (min, max)
        }
    }
}
