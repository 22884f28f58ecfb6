//! Per-frame hit detection between registered game objects.
//!
//! Objects register once per frame; [`GameObjectCollisionSystem::update`]
//! then runs a one-axis sweep-and-prune over the registrations, gates each
//! candidate pair on its bounding volumes, matches attack volumes against
//! vulnerability volumes in both directions, and notifies the reactions.
//! Every registration is returned to the pool before `update` returns.

use std::rc::Rc;

use riposte_common::RiposteResult;
use tracing::{debug, trace, warn};

use crate::config::{CollisionConfig, MAX_COLLIDING_OBJECTS};
use crate::hit_type::HitType;
use crate::object::{CollisionObject, SharedReaction};
use crate::pool::{CollisionRecord, RecordPool};
use crate::volume::{CollisionVolume, SharedVolume, VolumeList};

/// Debug drawing toggles. Stored for an external renderer; never drawn here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugPrefs {
    /// Outline each object's bounding volume.
    pub draw_bounding_volume: bool,
    /// Outline attack and vulnerability volumes.
    pub draw_collision_volumes: bool,
}

/// Counters for one collision frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Registrations accepted.
    pub registered: usize,
    /// Registrations dropped (malformed or over capacity).
    pub dropped: usize,
    /// Pairs whose X intervals overlap in the sweep.
    pub pairs_considered: usize,
    /// Bounding volume tests performed.
    pub bounding_tests: usize,
    /// Bounding volume tests that passed.
    pub bounding_hits: usize,
    /// Attacker to victim hits dispatched.
    pub hits_dispatched: usize,
}

/// Detects attack/vulnerability hits among the objects registered each frame.
#[derive(Debug)]
pub struct GameObjectCollisionSystem {
    pool: RecordPool,
    /// Pool slots registered this frame.
    active: Vec<usize>,
    debug_prefs: DebugPrefs,
    frame: FrameStats,
    last_frame: FrameStats,
}

impl Default for GameObjectCollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObjectCollisionSystem {
    /// Create a system sized for [`MAX_COLLIDING_OBJECTS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_COLLIDING_OBJECTS)
    }

    /// Create a system whose pool holds `capacity` registrations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "collision system created");
        Self {
            pool: RecordPool::new(capacity),
            active: Vec::with_capacity(capacity),
            debug_prefs: DebugPrefs::default(),
            frame: FrameStats::default(),
            last_frame: FrameStats::default(),
        }
    }

    /// Create a system from validated settings.
    pub fn with_config(config: &CollisionConfig) -> RiposteResult<Self> {
        config.validate()?;
        let mut system = Self::with_capacity(config.capacity);
        system.set_debug_prefs(config.draw_bounding_volume, config.draw_collision_volumes);
        Ok(system)
    }

    /// Registers `object` for this frame's collision pass.
    ///
    /// Dropped silently (returns `false`) when the pool is exhausted, when
    /// `bounding` is missing, or when the object has neither attack nor
    /// vulnerability volumes. Empty lists count as missing.
    pub fn register_for_collisions(
        &mut self,
        object: CollisionObject,
        reaction: Option<&SharedReaction>,
        bounding: Option<&SharedVolume>,
        attack: Option<&VolumeList>,
        vulnerability: Option<&VolumeList>,
    ) -> bool {
        let attack = attack.filter(|list| !list.is_empty());
        let vulnerability = vulnerability.filter(|list| !list.is_empty());

        let Some(bounding) = bounding else {
            debug!(object = %object.id, "registration dropped: no bounding volume");
            self.frame.dropped += 1;
            return false;
        };

        if attack.is_none() && vulnerability.is_none() {
            debug!(
                object = %object.id,
                "registration dropped: nothing to attack with or be hit on"
            );
            self.frame.dropped += 1;
            return false;
        }

        let Some(slot) = self.pool.claim() else {
            debug!(
                object = %object.id,
                capacity = self.pool.capacity(),
                "registration dropped: collision pool exhausted"
            );
            self.frame.dropped += 1;
            return false;
        };

        let flip = object.flip_info();
        let record = self.pool.get_mut(slot);
        record.min_x = bounding.min_x_position(flip) + object.position.x;
        record.max_x = bounding.max_x_position(flip) + object.position.x;
        record.object = object;
        record.flip = flip;
        record.reaction = reaction.cloned();
        record.bounding = Some(Rc::clone(bounding));
        record.attack = attack.cloned();
        record.vulnerability = vulnerability.cloned();

        self.active.push(slot);
        self.frame.registered += 1;
        true
    }

    /// Runs the collision pass for every object registered this frame, then
    /// clears all registrations.
    ///
    /// `delta_time` is accepted for uniformity with other per-frame systems;
    /// the pass is purely spatial.
    pub fn update(&mut self, _delta_time: f32) -> FrameStats {
        let pool = &self.pool;
        self.active
            .sort_unstable_by(|&a, &b| pool.get(a).min_x.total_cmp(&pool.get(b).min_x));

        let mut stats = self.frame;
        for (index, &slot) in self.active.iter().enumerate() {
            let record = pool.get(slot);
            for &other_slot in &self.active[index + 1..] {
                let other = pool.get(other_slot);
                // Sorted by min X: nothing further right can reach this record.
                if other.min_x > record.max_x {
                    break;
                }
                stats.pairs_considered += 1;
                collide_pair(record, other, &mut stats);
            }
        }

        for slot in self.active.drain(..) {
            self.pool.release(slot);
        }

        trace!(
            registered = stats.registered,
            dropped = stats.dropped,
            pairs = stats.pairs_considered,
            bounding_hits = stats.bounding_hits,
            hits = stats.hits_dispatched,
            "collision frame complete"
        );

        self.last_frame = stats;
        self.frame = FrameStats::default();
        stats
    }

    /// Drops every pending registration and clears the debug toggles.
    pub fn reset(&mut self) {
        let released = self.active.len();
        for slot in self.active.drain(..) {
            self.pool.release(slot);
        }
        self.debug_prefs = DebugPrefs::default();
        self.frame = FrameStats::default();
        self.last_frame = FrameStats::default();
        debug!(released, "collision system reset");
    }

    /// Set the debug drawing toggles.
    pub fn set_debug_prefs(&mut self, draw_bounding_volume: bool, draw_collision_volumes: bool) {
        self.debug_prefs = DebugPrefs {
            draw_bounding_volume,
            draw_collision_volumes,
        };
    }

    /// Current debug drawing toggles.
    #[must_use]
    pub const fn debug_prefs(&self) -> DebugPrefs {
        self.debug_prefs
    }

    /// Counters from the most recent [`update`](Self::update).
    #[must_use]
    pub const fn last_frame_stats(&self) -> FrameStats {
        self.last_frame
    }

    /// Maximum registrations per frame.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Registrations waiting for the next [`update`](Self::update).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Idle records left in the pool.
    #[must_use]
    pub fn pool_available(&self) -> usize {
        self.pool.available()
    }
}

/// Tests one sweep candidate pair in both attack directions.
fn collide_pair(first: &CollisionRecord, second: &CollisionRecord, stats: &mut FrameStats) {
    let first_attacks = first.attack.is_some() && second.vulnerability.is_some();
    let second_attacks = first.vulnerability.is_some() && second.attack.is_some();
    if !first_attacks && !second_attacks {
        return;
    }

    let (Some(bounding), Some(other_bounding)) = (&first.bounding, &second.bounding) else {
        return;
    };

    stats.bounding_tests += 1;
    if !bounding.intersects(
        first.object.position,
        first.flip,
        other_bounding.as_ref(),
        second.object.position,
        second.flip,
    ) {
        return;
    }
    stats.bounding_hits += 1;

    if first_attacks {
        if let Some(hit_type) = find_hit(first, second) {
            dispatch_hit(first, second, hit_type);
            stats.hits_dispatched += 1;
        }
    }

    if second_attacks {
        if let Some(hit_type) = find_hit(second, first) {
            dispatch_hit(second, first, hit_type);
            stats.hits_dispatched += 1;
        }
    }
}

/// First attack volume (in list order) that strikes a compatible
/// vulnerability volume decides the hit type.
fn find_hit(attacker: &CollisionRecord, victim: &CollisionRecord) -> Option<HitType> {
    let (Some(attacks), Some(vulnerabilities)) = (&attacker.attack, &victim.vulnerability) else {
        return None;
    };

    for attack in attacks.iter() {
        let hit_type = attack.hit_type();
        if !hit_type.is_valid() {
            continue;
        }

        let struck = vulnerabilities
            .iter()
            .filter(|vulnerability| vulnerability.hit_type().accepts(hit_type))
            .any(|vulnerability| {
                attack.intersects(
                    attacker.object.position,
                    attacker.flip,
                    vulnerability.as_ref(),
                    victim.object.position,
                    victim.flip,
                )
            });

        if struck {
            return Some(hit_type);
        }
    }

    None
}

/// Victim answers first; the attacker always hears the outcome.
fn dispatch_hit(attacker: &CollisionRecord, victim: &CollisionRecord, hit_type: HitType) {
    let accepted = victim.reaction.as_ref().is_some_and(|reaction| {
        match reaction.try_borrow_mut() {
            Ok(mut reaction) => reaction.received_hit(&victim.object, &attacker.object, hit_type),
            Err(_) => {
                warn!(
                    victim = %victim.object.id,
                    %hit_type,
                    "victim reaction already borrowed; hit not accepted"
                );
                false
            },
        }
    });

    if let Some(reaction) = &attacker.reaction {
        match reaction.try_borrow_mut() {
            Ok(mut reaction) => {
                reaction.hit_victim(&attacker.object, &victim.object, hit_type, accepted);
            },
            Err(_) => {
                warn!(
                    attacker = %attacker.object.id,
                    %hit_type,
                    "attacker reaction already borrowed; outcome not reported"
                );
            },
        }
    }

    trace!(
        attacker = %attacker.object.id,
        victim = %victim.object.id,
        %hit_type,
        accepted,
        "hit dispatched"
    );
}
