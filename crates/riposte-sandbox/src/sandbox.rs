//! Steps a scene's objects through the collision system frame by frame.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use riposte_collision::{
    CollisionConfig, CollisionObject, FrameStats, GameObjectCollisionSystem, HitReaction, HitType,
    SharedReaction, SharedVolume, VolumeList,
};
use riposte_common::{EntityId, RiposteResult};
use tracing::{debug, info};

use crate::scene::{ObjectDef, Scene};

/// Hit counters for one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitTally {
    /// Hits received.
    pub received: u32,
    /// Received hits that were accepted.
    pub accepted: u32,
    /// Hits dealt.
    pub dealt: u32,
    /// Dealt hits the victim accepted.
    pub landed: u32,
}

/// Logs and counts hit notifications for one scripted object.
#[derive(Debug)]
pub struct ActorReaction {
    name: String,
    accepts_hits: bool,
    tally: HitTally,
}

impl ActorReaction {
    /// Create a reaction for the named object.
    #[must_use]
    pub fn new(name: impl Into<String>, accepts_hits: bool) -> Self {
        Self {
            name: name.into(),
            accepts_hits,
            tally: HitTally::default(),
        }
    }

    /// Counters so far.
    #[must_use]
    pub const fn tally(&self) -> HitTally {
        self.tally
    }
}

impl HitReaction for ActorReaction {
    fn received_hit(
        &mut self,
        victim: &CollisionObject,
        attacker: &CollisionObject,
        hit_type: HitType,
    ) -> bool {
        self.tally.received += 1;
        if self.accepts_hits {
            self.tally.accepted += 1;
        }
        info!(
            victim = %victim.id,
            attacker = %attacker.id,
            %hit_type,
            accepted = self.accepts_hits,
            "{} was hit",
            self.name
        );
        self.accepts_hits
    }

    fn hit_victim(
        &mut self,
        attacker: &CollisionObject,
        victim: &CollisionObject,
        hit_type: HitType,
        accepted: bool,
    ) {
        self.tally.dealt += 1;
        if accepted {
            self.tally.landed += 1;
        }
        debug!(
            attacker = %attacker.id,
            victim = %victim.id,
            %hit_type,
            accepted,
            "{} struck",
            self.name
        );
    }
}

/// A scripted object and everything it registers each frame.
#[derive(Debug)]
pub struct Actor {
    name: String,
    object: CollisionObject,
    velocity: Vec2,
    bounding: SharedVolume,
    attack: Option<VolumeList>,
    vulnerability: Option<VolumeList>,
    reaction: Option<Rc<RefCell<ActorReaction>>>,
}

impl Actor {
    /// Build the runtime actor for a scene object.
    #[must_use]
    pub fn from_def(def: &ObjectDef) -> Self {
        let name = def.label();
        let object = CollisionObject::new(EntityId::from_raw(def.id), def.position)
            .with_facing(def.facing)
            .with_size(def.size.x, def.size.y);
        let reaction = def
            .reacts
            .then(|| Rc::new(RefCell::new(ActorReaction::new(name.clone(), def.accepts_hits))));

        Self {
            name,
            object,
            velocity: def.velocity,
            bounding: def.bounding_volume(),
            attack: def.attack_volumes(),
            vulnerability: def.vulnerability_volumes(),
            reaction,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current snapshot.
    #[must_use]
    pub const fn object(&self) -> &CollisionObject {
        &self.object
    }

    /// Hit counters, if the actor reacts to hits.
    #[must_use]
    pub fn tally(&self) -> Option<HitTally> {
        self.reaction.as_ref().map(|reaction| reaction.borrow().tally())
    }

    fn shared_reaction(&self) -> Option<SharedReaction> {
        let reaction = self.reaction.as_ref()?;
        let shared: SharedReaction = reaction.clone();
        Some(shared)
    }

    fn advance(&mut self, delta_time: f32) {
        self.object.position += self.velocity * delta_time;
    }
}

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Frames stepped.
    pub frames: u32,
    /// Hits dispatched across all frames.
    pub hits: usize,
    /// Registrations dropped across all frames.
    pub dropped: usize,
}

/// Owns a scene's actors and the collision system they register with.
#[derive(Debug)]
pub struct Sandbox {
    actors: Vec<Actor>,
    system: GameObjectCollisionSystem,
    frame: u64,
}

impl Sandbox {
    /// Build actors for every scene object.
    ///
    /// Scenes built in code skip the checks done at load time, so they are
    /// validated again here.
    pub fn new(scene: &Scene, config: &CollisionConfig) -> RiposteResult<Self> {
        scene.validate()?;
        let system = GameObjectCollisionSystem::with_config(config)?;
        let actors: Vec<Actor> = scene.objects.iter().map(Actor::from_def).collect();

        info!(
            scene = %scene.name,
            actors = actors.len(),
            capacity = system.capacity(),
            "sandbox ready"
        );

        Ok(Self {
            actors,
            system,
            frame: 0,
        })
    }

    /// Moves every actor, registers it, and runs one collision pass.
    pub fn step(&mut self, delta_time: f32) -> FrameStats {
        for actor in &mut self.actors {
            actor.advance(delta_time);
            let reaction = actor.shared_reaction();
            self.system.register_for_collisions(
                actor.object,
                reaction.as_ref(),
                Some(&actor.bounding),
                actor.attack.as_ref(),
                actor.vulnerability.as_ref(),
            );
        }

        let stats = self.system.update(delta_time);
        if stats.hits_dispatched > 0 {
            debug!(frame = self.frame, hits = stats.hits_dispatched, "frame produced hits");
        }
        self.frame += 1;
        stats
    }

    /// Steps `frames` frames.
    pub fn run(&mut self, frames: u32, delta_time: f32) -> RunSummary {
        let mut summary = RunSummary {
            frames,
            ..Default::default()
        };
        for _ in 0..frames {
            let stats = self.step(delta_time);
            summary.hits += stats.hits_dispatched;
            summary.dropped += stats.dropped;
        }
        summary
    }

    /// Actors in scene order.
    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Frames stepped so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}
