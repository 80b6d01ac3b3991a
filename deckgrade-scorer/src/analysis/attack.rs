//! Attack section: win conditions, spell damage and strategy.

use std::fmt;

use deckgrade_core::{Card, DimensionScore, Role};
use serde::{Deserialize, Serialize};

use super::{AnalysisSection, card_list};
use crate::score_attack;

const TITLE: &str = "Attack Analysis";

/// How a win condition takes towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinConditionStyle {
    /// Walks to the tower and hits it directly.
    DirectDamage,
    /// Hits the tower from the far side of the river.
    Siege,
    /// Accumulates small amounts of tower damage.
    ChipDamage,
    /// Punishes elixir disadvantages with fast bridge pushes.
    BridgeSpam,
    /// Not one of the recognised styles.
    Other,
}

const DIRECT_DAMAGE: &[&str] = &[
    "Hog Rider",
    "Giant",
    "Royal Giant",
    "Balloon",
    "Golem",
    "Lava Hound",
    "Electro Giant",
    "Royal Hogs",
    "Ram Rider",
];
const SIEGE: &[&str] = &["X-Bow", "Mortar"];
const CHIP_DAMAGE: &[&str] = &[
    "Miner",
    "Goblin Barrel",
    "Graveyard",
    "Goblin Drill",
    "Wall Breakers",
];
const BRIDGE_SPAM: &[&str] = &[
    "Battle Ram",
    "P.E.K.K.A",
    "Mega Knight",
    "Royal Ghost",
    "Bandit",
    "Ram Rider",
];

impl WinConditionStyle {
    /// Classify a win condition by name. Direct damage wins over the other
    /// styles when a card appears in several lists.
    #[must_use]
    pub fn of(card_name: &str) -> Self {
        [
            (DIRECT_DAMAGE, Self::DirectDamage),
            (SIEGE, Self::Siege),
            (CHIP_DAMAGE, Self::ChipDamage),
            (BRIDGE_SPAM, Self::BridgeSpam),
        ]
        .into_iter()
        .find(|(names, _)| names.contains(&card_name))
        .map_or(Self::Other, |(_, style)| style)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectDamage => "Direct Damage",
            Self::Siege => "Siege",
            Self::ChipDamage => "Chip Damage",
            Self::BridgeSpam => "Bridge Spam",
            Self::Other => "Win Condition",
        }
    }

    const fn strategy(self) -> Option<&'static str> {
        match self {
            Self::DirectDamage => {
                Some("Strategy: Apply consistent pressure with direct tower damage")
            }
            Self::Siege => {
                Some("Strategy: Establish defensive perimeter and chip tower from range")
            }
            Self::ChipDamage => Some("Strategy: Accumulate small amounts of damage over time"),
            Self::BridgeSpam => Some("Strategy: Capitalize on elixir advantages with fast pushes"),
            Self::Other => None,
        }
    }
}

impl fmt::Display for WinConditionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explain how a deck takes towers.
#[must_use]
pub fn attack_analysis(deck: &[Card]) -> AnalysisSection {
    attack_section(deck, &score_attack(deck))
}

pub(super) fn attack_section(deck: &[Card], score: &DimensionScore) -> AnalysisSection {
    if deck.is_empty() {
        return AnalysisSection::empty_deck(TITLE);
    }

    let win_conditions: Vec<&Card> = deck
        .iter()
        .filter(|card| card.has_role(Role::WinCondition))
        .collect();
    let big_spells: Vec<&Card> = deck
        .iter()
        .filter(|card| card.has_role(Role::SpellBig))
        .collect();

    let mut details = Vec::new();
    match win_conditions.as_slice() {
        [] => details.push("No dedicated win condition - may struggle to take towers".to_owned()),
        [primary, rest @ ..] => {
            details.push(format!(
                "Primary win condition: {} ({})",
                primary.name,
                WinConditionStyle::of(&primary.name)
            ));
            if let Some(secondary) = rest.first() {
                details.push(format!(
                    "Secondary win condition: {} ({})",
                    secondary.name,
                    WinConditionStyle::of(&secondary.name)
                ));
            }
        }
    }

    if !big_spells.is_empty() {
        let power = if big_spells.len() == 1 {
            "good"
        } else {
            "excellent"
        };
        details.push(format!(
            "Spell damage: {} - {power} finishing power",
            card_list(big_spells.iter().copied())
        ));
    }

    let bridge: Vec<&str> = win_conditions
        .iter()
        .filter(|card| WinConditionStyle::of(&card.name) == WinConditionStyle::BridgeSpam)
        .map(|card| card.name.as_str())
        .collect();
    if !bridge.is_empty() {
        details.push(format!(
            "Bridge spam potential: {} can punish elixir disadvantage",
            bridge.join(", ")
        ));
    }

    if let Some(strategy) = win_conditions
        .first()
        .and_then(|card| WinConditionStyle::of(&card.name).strategy())
    {
        details.push(strategy.to_owned());
    }

    let summary = match (win_conditions.len(), big_spells.len()) {
        (0, _) => "Lacks dedicated win condition",
        (count, _) if count >= 2 => "Versatile offense with multiple win conditions",
        (_, spells) if spells >= 2 => "Strong offensive pressure with spell support",
        _ => "Strong offensive potential",
    };

    AnalysisSection::from_dimension(TITLE, summary, details, score)
}
