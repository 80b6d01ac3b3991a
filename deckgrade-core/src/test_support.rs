//! Test-only card builders and in-memory collaborators shared by unit and
//! behaviour tests.

use std::collections::{HashMap, HashSet};

use crate::{
    Card, CardAvailability, CombatStats, OwnershipContext, Rarity, Role, SynergyLink,
    SynergyLookup, Targets,
};

/// Build a card with a role, elixir cost, rarity and optional stats.
pub fn card(
    name: &str,
    role: Role,
    elixir: u32,
    rarity: Rarity,
    stats: Option<(f64, Targets)>,
) -> Card {
    let base = Card::new(name, elixir, rarity).with_role(role);
    match stats {
        Some((damage_per_second, targets)) => base.with_stats(CombatStats {
            damage_per_second,
            targets,
        }),
        None => base,
    }
}

/// Classic Hog Rider cycle deck.
pub fn hog_cycle_deck() -> Vec<Card> {
    vec![
        card(
            "Hog Rider",
            Role::WinCondition,
            4,
            Rarity::Rare,
            Some((160.0, Targets::Buildings)),
        ),
        card(
            "Musketeer",
            Role::Support,
            4,
            Rarity::Rare,
            Some((181.0, Targets::AirAndGround)),
        ),
        card(
            "Valkyrie",
            Role::Support,
            4,
            Rarity::Rare,
            Some((150.0, Targets::Ground)),
        ),
        card(
            "Cannon",
            Role::Building,
            3,
            Rarity::Common,
            Some((170.0, Targets::Ground)),
        ),
        card("Fireball", Role::SpellBig, 4, Rarity::Rare, None),
        card("The Log", Role::SpellSmall, 2, Rarity::Legendary, None),
        card(
            "Ice Spirit",
            Role::Cycle,
            1,
            Rarity::Common,
            Some((90.0, Targets::AirAndGround)),
        ),
        card(
            "Skeletons",
            Role::Cycle,
            1,
            Rarity::Common,
            Some((67.0, Targets::Ground)),
        ),
    ]
}

/// Golem beatdown deck with heavy support.
pub fn golem_beatdown_deck() -> Vec<Card> {
    vec![
        card(
            "Golem",
            Role::WinCondition,
            8,
            Rarity::Epic,
            Some((35.0, Targets::Buildings)),
        ),
        card(
            "Baby Dragon",
            Role::Support,
            4,
            Rarity::Epic,
            Some((107.0, Targets::AirAndGround)),
        ),
        card(
            "Night Witch",
            Role::Support,
            4,
            Rarity::Legendary,
            Some((210.0, Targets::Ground)),
        ),
        card(
            "Lumberjack",
            Role::Support,
            4,
            Rarity::Legendary,
            Some((300.0, Targets::Ground)),
        ),
        card("Lightning", Role::SpellBig, 6, Rarity::Epic, None),
        card("Tornado", Role::SpellSmall, 3, Rarity::Epic, None),
        card(
            "Mega Minion",
            Role::Support,
            3,
            Rarity::Rare,
            Some((182.0, Targets::AirAndGround)),
        ),
        card(
            "Skeletons",
            Role::Cycle,
            1,
            Rarity::Common,
            Some((67.0, Targets::Ground)),
        ),
    ]
}

/// Ground-only deck with no buildings and no anti-air coverage.
pub fn ground_only_deck() -> Vec<Card> {
    vec![
        card(
            "Giant",
            Role::WinCondition,
            5,
            Rarity::Rare,
            Some((84.0, Targets::Buildings)),
        ),
        card(
            "Prince",
            Role::WinCondition,
            5,
            Rarity::Epic,
            Some((228.0, Targets::Ground)),
        ),
        card(
            "Valkyrie",
            Role::Support,
            4,
            Rarity::Rare,
            Some((150.0, Targets::Ground)),
        ),
        card(
            "Knight",
            Role::Cycle,
            3,
            Rarity::Common,
            Some((130.0, Targets::Ground)),
        ),
        card(
            "Skeletons",
            Role::Cycle,
            1,
            Rarity::Common,
            Some((67.0, Targets::Ground)),
        ),
        card(
            "Bomber",
            Role::Cycle,
            2,
            Rarity::Common,
            Some((88.0, Targets::Ground)),
        ),
        card("Fireball", Role::SpellBig, 4, Rarity::Rare, None),
        card("Zap", Role::SpellSmall, 2, Rarity::Common, None),
    ]
}

#[derive(Debug, Clone)]
struct FixedLink {
    strength: f64,
    description: String,
    category: Option<String>,
}

/// Symmetric in-memory synergy table.
#[derive(Debug, Default, Clone)]
pub struct FixedSynergyLookup {
    links: HashMap<(String, String), FixedLink>,
}

impl FixedSynergyLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair while returning `self` for chaining.
    #[must_use]
    pub fn with_pair(mut self, first: &str, second: &str, strength: f64) -> Self {
        self.links.insert(
            key(first, second),
            FixedLink {
                strength,
                description: format!("{first} pairs with {second}"),
                category: None,
            },
        );
        self
    }

    /// Add a pair labelled with an interaction category.
    #[must_use]
    pub fn with_categorised_pair(
        mut self,
        first: &str,
        second: &str,
        strength: f64,
        category: &str,
    ) -> Self {
        self.links.insert(
            key(first, second),
            FixedLink {
                strength,
                description: format!("{first} pairs with {second}"),
                category: Some(category.to_owned()),
            },
        );
        self
    }
}

fn key(first: &str, second: &str) -> (String, String) {
    if first <= second {
        (first.to_owned(), second.to_owned())
    } else {
        (second.to_owned(), first.to_owned())
    }
}

impl SynergyLookup for FixedSynergyLookup {
    fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>> {
        self.links
            .get(&key(first, second))
            .map(|link| SynergyLink {
                strength: link.strength,
                description: &link.description,
                category: link.category.as_deref(),
            })
    }
}

/// Ownership context backed by explicit owned and locked name sets.
#[derive(Debug, Default, Clone)]
pub struct FixedOwnership {
    owned: HashSet<String>,
    locked: HashSet<String>,
}

impl FixedOwnership {
    /// Own every card in `deck`.
    pub fn owning_all(deck: &[Card]) -> Self {
        Self {
            owned: deck.iter().map(|card| card.name.clone()).collect(),
            locked: HashSet::new(),
        }
    }

    /// Add `name` to the collection.
    #[must_use]
    pub fn owning(mut self, name: &str) -> Self {
        self.locked.remove(name);
        self.owned.insert(name.to_owned());
        self
    }

    /// Remove `name` from the collection, leaving it obtainable.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.owned.remove(name);
        self
    }

    /// Remove `name` from the collection and mark it arena-locked.
    #[must_use]
    pub fn locked(mut self, name: &str) -> Self {
        self.owned.remove(name);
        self.locked.insert(name.to_owned());
        self
    }
}

impl OwnershipContext for FixedOwnership {
    fn availability(&self, card_name: &str) -> CardAvailability {
        if self.owned.contains(card_name) {
            CardAvailability::Owned
        } else {
            CardAvailability::Missing {
                locked: self.locked.contains(card_name),
                unlock_arena: None,
            }
        }
    }
}
