//! Strategic archetype identifiers.
//!
//! Nine identifiers name concrete templates. Two sentinels report the outcome
//! of classification when no single template wins: [`Archetype::Hybrid`] and
//! [`Archetype::Unknown`].
//!
//! # Examples
//! ```
//! use deckgrade_core::Archetype;
//!
//! assert_eq!(Archetype::Cycle.as_str(), "cycle");
//! assert_eq!("bridge".parse::<Archetype>(), Ok(Archetype::Bridge));
//! ```

use std::fmt;
use std::str::FromStr;

/// A named strategic deck pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Archetype {
    /// Heavy tank backed by support troops.
    Beatdown,
    /// Defensive buildings and big spells grinding value.
    Control,
    /// Cheap cards rotating a fast win condition.
    Cycle,
    /// Immediate pressure at the bridge.
    Bridge,
    /// Siege building targeting towers from range.
    Siege,
    /// Spell bait around the Goblin Barrel.
    Bait,
    /// Graveyard backed by control support.
    Graveyard,
    /// Miner chip damage with poison support.
    Miner,
    /// Spawner buildings generating troops.
    Spawndeck,
    /// Two strong, distinct archetypes.
    Hybrid,
    /// No archetype fits with enough confidence.
    Unknown,
}

impl Archetype {
    /// Return the identifier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beatdown => "beatdown",
            Self::Control => "control",
            Self::Cycle => "cycle",
            Self::Bridge => "bridge",
            Self::Siege => "siege",
            Self::Bait => "bait",
            Self::Graveyard => "graveyard",
            Self::Miner => "miner",
            Self::Spawndeck => "spawndeck",
            Self::Hybrid => "hybrid",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this identifier is a classification sentinel rather than a
    /// template.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Hybrid | Self::Unknown)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an archetype identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArchetypeError(String);

impl fmt::Display for ParseArchetypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archetype '{}'", self.0)
    }
}

impl std::error::Error for ParseArchetypeError {}

impl FromStr for Archetype {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beatdown" => Ok(Self::Beatdown),
            "control" => Ok(Self::Control),
            "cycle" => Ok(Self::Cycle),
            "bridge" | "bridge-spam" | "bridge_spam" => Ok(Self::Bridge),
            "siege" => Ok(Self::Siege),
            "bait" => Ok(Self::Bait),
            "graveyard" => Ok(Self::Graveyard),
            "miner" => Ok(Self::Miner),
            "spawndeck" => Ok(Self::Spawndeck),
            "hybrid" => Ok(Self::Hybrid),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseArchetypeError(s.to_owned())),
        }
    }
}
