//! Fixed-size arena of registration records.

use std::fmt;

use glam::Vec2;
use riposte_common::EntityId;

use crate::flip::FlipInfo;
use crate::object::{CollisionObject, SharedReaction};
use crate::volume::{SharedVolume, VolumeList};

/// One object's registration for the current frame.
pub(crate) struct CollisionRecord {
    pub object: CollisionObject,
    pub flip: FlipInfo,
    pub reaction: Option<SharedReaction>,
    pub bounding: Option<SharedVolume>,
    pub attack: Option<VolumeList>,
    pub vulnerability: Option<VolumeList>,
    /// World-space X interval of the bounding volume.
    pub min_x: f32,
    pub max_x: f32,
}

impl CollisionRecord {
    const EMPTY_OBJECT: CollisionObject = CollisionObject::new(EntityId::NULL, Vec2::ZERO);

    fn empty() -> Self {
        Self {
            object: Self::EMPTY_OBJECT,
            flip: FlipInfo::NONE,
            reaction: None,
            bounding: None,
            attack: None,
            vulnerability: None,
            min_x: 0.0,
            max_x: 0.0,
        }
    }

    /// Drops every reference held for the frame.
    fn reset(&mut self) {
        *self = Self::empty();
    }
}

impl fmt::Debug for CollisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionRecord")
            .field("object", &self.object.id)
            .field("reaction", &self.reaction.is_some())
            .field("attack", &self.attack.as_ref().map_or(0, |list| list.len()))
            .field("vulnerability", &self.vulnerability.as_ref().map_or(0, |list| list.len()))
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .finish()
    }
}

/// Records are addressed by slot index; a free list tracks idle slots.
#[derive(Debug)]
pub(crate) struct RecordPool {
    slots: Vec<CollisionRecord>,
    free: Vec<usize>,
}

impl RecordPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| CollisionRecord::empty()).collect(),
            // Reversed so slots are handed out lowest first.
            free: (0..capacity).rev().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Takes an idle slot, or `None` when every slot is in use.
    pub fn claim(&mut self) -> Option<usize> {
        self.free.pop()
    }

    /// Clears a slot and returns it to the idle set.
    pub fn release(&mut self, slot: usize) {
        debug_assert!(!self.free.contains(&slot), "slot {slot} released twice");
        self.slots[slot].reset();
        self.free.push(slot);
    }

    pub fn get(&self, slot: usize) -> &CollisionRecord {
        &self.slots[slot]
    }

    pub fn get_mut(&mut self, slot: usize) -> &mut CollisionRecord {
        &mut self.slots[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aabox::AaBoxVolume;

    #[test]
    fn test_claim_until_exhausted() {
        let mut pool = RecordPool::new(2);
        assert_eq!(pool.claim(), Some(0));
        assert_eq!(pool.claim(), Some(1));
        assert_eq!(pool.claim(), None);
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn test_release_clears_slot() {
        let mut pool = RecordPool::new(1);
        let slot = pool.claim().expect("pool has a slot");

        let record = pool.get_mut(slot);
        record.object = CollisionObject::new(EntityId::from_raw(9), Vec2::new(3.0, 4.0));
        record.bounding = Some(AaBoxVolume::new(0.0, 0.0, 1.0, 1.0).into_shared());
        record.min_x = 3.0;

        pool.release(slot);
        assert_eq!(pool.available(), 1);

        let record = pool.get(slot);
        assert_eq!(record.object.id, EntityId::NULL);
        assert!(record.bounding.is_none());
        assert_eq!(record.min_x, 0.0);
    }
}
