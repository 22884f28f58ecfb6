//! Hit type tags for attack and vulnerability volumes.

use serde::{Deserialize, Serialize};

/// Damage/interaction category carried by a collision volume.
///
/// On an attack volume the tag says what kind of hit it deals; `INVALID`
/// means it deals nothing. On a vulnerability volume the tag says what it
/// accepts; `INVALID` means it accepts every attack type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitType(u8);

impl HitType {
    /// No specific type.
    pub const INVALID: Self = Self(0);
    /// Plain damage.
    pub const HIT: Self = Self(1);
    /// Instant kill.
    pub const DEATH: Self = Self(2);
    /// Pickup collection.
    pub const COLLECT: Self = Self(3);
    /// Possession of another object.
    pub const POSSESS: Self = Self(4);
    /// Pressing a button or switch.
    pub const DEPRESS: Self = Self(5);
    /// Launching the victim.
    pub const LAUNCH: Self = Self(6);

    /// Creates a hit type from a raw value. Games may define their own
    /// types above the built-in range.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Checks if this is a concrete (non-`INVALID`) type.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Checks whether a vulnerability tagged with `self` accepts an attack
    /// of type `attack`.
    #[must_use]
    pub const fn accepts(self, attack: Self) -> bool {
        !self.is_valid() || self.0 == attack.0
    }
}

impl std::fmt::Display for HitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::INVALID => write!(f, "invalid"),
            Self::HIT => write!(f, "hit"),
            Self::DEATH => write!(f, "death"),
            Self::COLLECT => write!(f, "collect"),
            Self::POSSESS => write!(f, "possess"),
            Self::DEPRESS => write!(f, "depress"),
            Self::LAUNCH => write!(f, "launch"),
            Self(raw) => write!(f, "custom({raw})"),
        }
    }
}
