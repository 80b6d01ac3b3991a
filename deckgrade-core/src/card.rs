//! Card descriptors as supplied by the catalog.
//!
//! A [`Card`] is immutable once built. The scoring core reads its role,
//! elixir cost, rarity, upgrade progress, evolution level and, when the
//! catalog knows them, its combat stats.

use std::fmt;
use std::str::FromStr;

/// Strategic function a card plays inside a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Role {
    /// Primary tower-damage threat.
    WinCondition,
    /// Troop backing up pushes or defending.
    Support,
    /// Defensive or spawner structure.
    Building,
    /// High-damage spell.
    SpellBig,
    /// Cheap utility spell.
    SpellSmall,
    /// Low-cost card used to rotate the hand.
    Cycle,
}

impl Role {
    /// Every role in declaration order.
    pub const ALL: [Self; 6] = [
        Self::WinCondition,
        Self::Support,
        Self::Building,
        Self::SpellBig,
        Self::SpellSmall,
        Self::Cycle,
    ];

    /// Return the role as a kebab-case `&str`.
    ///
    /// # Examples
    /// ```
    /// use deckgrade_core::Role;
    ///
    /// assert_eq!(Role::SpellBig.as_str(), "spell-big");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WinCondition => "win-condition",
            Self::Support => "support",
            Self::Building => "building",
            Self::SpellBig => "spell-big",
            Self::SpellSmall => "spell-small",
            Self::Cycle => "cycle",
        }
    }
}

/// Card rarity, ordered from cheapest to most expensive to upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rarity {
    /// Common cards.
    #[default]
    Common,
    /// Rare cards.
    Rare,
    /// Epic cards.
    Epic,
    /// Legendary cards.
    Legendary,
    /// Champion cards.
    Champion,
}

impl Rarity {
    /// Return the rarity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Champion => "champion",
        }
    }
}

/// What a card's attacks can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Targets {
    /// Ground units only.
    Ground,
    /// Air units only.
    Air,
    /// Both air and ground units.
    AirAndGround,
    /// Buildings only.
    Buildings,
}

impl Targets {
    /// Return the targeting mode as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Air => "air",
            Self::AirAndGround => "air-and-ground",
            Self::Buildings => "buildings",
        }
    }

    /// Whether the card can attack air units.
    #[must_use]
    pub const fn hits_air(self) -> bool {
        matches!(self, Self::Air | Self::AirAndGround)
    }

    /// Whether the card can attack something on the ground.
    #[must_use]
    pub const fn hits_ground(self) -> bool {
        matches!(self, Self::Ground | Self::AirAndGround | Self::Buildings)
    }
}

/// Combat figures published by the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Damage per second at the card's current level.
    pub damage_per_second: f64,
    /// What the card can hit.
    pub targets: Targets,
}

/// A single card selection inside a deck.
///
/// # Examples
/// ```
/// use deckgrade_core::{Card, CombatStats, Rarity, Role, Targets};
///
/// let card = Card::new("Musketeer", 4, Rarity::Rare)
///     .with_role(Role::Support)
///     .with_level_ratio(0.8)
///     .with_stats(CombatStats { damage_per_second: 181.0, targets: Targets::AirAndGround });
///
/// assert!(card.is_anti_air());
/// assert_eq!(card.role, Some(Role::Support));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Display name; unique within a deck by convention.
    pub name: String,
    /// Strategic role, when the catalog assigns one.
    pub role: Option<Role>,
    /// Elixir cost.
    pub elixir: u32,
    /// Card rarity.
    pub rarity: Rarity,
    /// Current level relative to the maximum level, in `0.0..=1.0`.
    pub level_ratio: f64,
    /// Unlocked evolution level; `0` when the card has not evolved.
    pub evolution_level: u32,
    /// Combat figures, when known.
    pub stats: Option<CombatStats>,
}

impl Card {
    /// Construct a fully-levelled card with no role, evolution or stats.
    #[must_use]
    pub fn new(name: impl Into<String>, elixir: u32, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            role: None,
            elixir,
            rarity,
            level_ratio: 1.0,
            evolution_level: 0,
            stats: None,
        }
    }

    /// Assign a role while returning `self` for chaining.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the level ratio while returning `self` for chaining.
    #[must_use]
    pub const fn with_level_ratio(mut self, level_ratio: f64) -> Self {
        self.level_ratio = level_ratio;
        self
    }

    /// Set the evolution level while returning `self` for chaining.
    #[must_use]
    pub const fn with_evolution(mut self, evolution_level: u32) -> Self {
        self.evolution_level = evolution_level;
        self
    }

    /// Attach combat stats while returning `self` for chaining.
    #[must_use]
    pub const fn with_stats(mut self, stats: CombatStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Level ratio clamped into `0.0..=1.0`; non-finite values read as `0.0`.
    #[must_use]
    pub fn level_ratio(&self) -> f64 {
        if !self.level_ratio.is_finite() {
            return 0.0;
        }
        self.level_ratio.clamp(0.0, 1.0)
    }

    /// Whether the card carries the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// Whether the card's stats say it can hit air units.
    #[must_use]
    pub fn is_anti_air(&self) -> bool {
        self.stats.is_some_and(|stats| stats.targets.hits_air())
    }

    /// Whether the card's stats say it can hit ground targets.
    #[must_use]
    pub fn hits_ground(&self) -> bool {
        self.stats.is_some_and(|stats| stats.targets.hits_ground())
    }
}

/// Error returned when parsing a role, rarity or targeting mode fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardAttributeError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseCardAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseCardAttributeError {}

fn normalise(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

impl FromStr for Role {
    type Err = ParseCardAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s);
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == key)
            .ok_or_else(|| ParseCardAttributeError {
                kind: "role",
                value: s.to_owned(),
            })
    }
}

impl FromStr for Rarity {
    type Err = ParseCardAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "common" => Ok(Self::Common),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            "champion" => Ok(Self::Champion),
            _ => Err(ParseCardAttributeError {
                kind: "rarity",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for Targets {
    type Err = ParseCardAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).replace("-&-", "-and-").as_str() {
            "ground" => Ok(Self::Ground),
            "air" => Ok(Self::Air),
            "air-and-ground" => Ok(Self::AirAndGround),
            "buildings" => Ok(Self::Buildings),
            _ => Err(ParseCardAttributeError {
                kind: "targets",
                value: s.to_owned(),
            }),
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_via_as_str!(Role, Rarity, Targets);
