//! Card unlock progression.
//!
//! An [`ArenaUnlockTable`] maps card names to the arena at which they unlock
//! and arena numbers to display names. The table is an explicit value passed
//! to whatever needs it.

use std::collections::{BTreeMap, HashMap};

const STANDARD_UNLOCKS: &[(&str, u32)] = &[
    ("Knight", 0),
    ("Archers", 0),
    ("Goblins", 0),
    ("Giant", 0),
    ("P.E.K.K.A", 0),
    ("Minions", 0),
    ("Balloon", 0),
    ("Witch", 0),
    ("Barbarians", 0),
    ("Golem", 0),
    ("Skeletons", 0),
    ("Valkyrie", 0),
    ("Skeleton Army", 0),
    ("Bomber", 0),
    ("Musketeer", 0),
    ("Baby Dragon", 0),
    ("Prince", 0),
    ("Wizard", 0),
    ("Mini P.E.K.K.A", 0),
    ("Fireball", 0),
    ("Arrows", 0),
    ("Zap", 0),
    ("Cannon", 0),
    ("Tesla", 0),
    ("Spear Goblins", 1),
    ("Giant Skeleton", 1),
    ("Tombstone", 1),
    ("Hog Rider", 2),
    ("Minion Horde", 2),
    ("Rage", 2),
    ("Goblin Hut", 2),
    ("Ice Wizard", 3),
    ("Royal Giant", 3),
    ("Rocket", 3),
    ("Goblin Barrel", 3),
    ("Guards", 4),
    ("Princess", 4),
    ("Dark Prince", 4),
    ("Freeze", 4),
    ("Mirror", 4),
    ("Lightning", 4),
    ("Three Musketeers", 5),
    ("Lava Hound", 5),
    ("Poison", 5),
    ("Elixir Collector", 5),
    ("Ice Spirit", 6),
    ("Fire Spirit", 6),
    ("Miner", 6),
    ("Sparky", 6),
    ("Graveyard", 6),
    ("The Log", 6),
    ("Bowler", 7),
    ("Lumberjack", 7),
    ("Battle Ram", 7),
    ("Inferno Dragon", 7),
    ("Tornado", 7),
    ("Clone", 7),
    ("Ice Golem", 8),
    ("Mega Minion", 8),
    ("Dart Goblin", 8),
    ("Goblin Gang", 8),
    ("Electro Wizard", 8),
    ("Earthquake", 8),
    ("Elite Barbarians", 9),
    ("Hunter", 9),
    ("Executioner", 9),
    ("Bandit", 9),
    ("Royal Recruits", 10),
    ("Night Witch", 10),
    ("Bats", 10),
    ("Royal Ghost", 10),
    ("Ram Rider", 11),
    ("Zappies", 11),
    ("Rascals", 11),
    ("Cannon Cart", 11),
    ("Mega Knight", 11),
    ("Barbarian Barrel", 11),
    ("Skeleton Barrel", 12),
    ("Flying Machine", 12),
    ("Wall Breakers", 12),
    ("Royal Hogs", 12),
    ("Goblin Giant", 12),
    ("Heal Spirit", 12),
    ("Fisherman", 13),
    ("Magic Archer", 13),
    ("Electro Dragon", 13),
    ("Firecracker", 13),
    ("Giant Snowball", 13),
    ("Mighty Miner", 14),
    ("Elixir Golem", 14),
    ("Battle Healer", 14),
    ("Royal Delivery", 14),
    ("Skeleton King", 15),
    ("Archer Queen", 15),
    ("Golden Knight", 15),
    ("Monk", 15),
    ("Mother Witch", 15),
    ("Electro Spirit", 15),
    ("Electro Giant", 15),
    ("Phoenix", 15),
];

const STANDARD_ARENAS: &[(u32, &str)] = &[
    (0, "Training Camp"),
    (1, "Goblin Stadium"),
    (2, "Bone Pit"),
    (3, "Barbarian Bowl"),
    (4, "P.E.K.K.A's Playhouse"),
    (5, "Spell Valley"),
    (6, "Builder's Workshop"),
    (7, "Royal Arena"),
    (8, "Frozen Peak"),
    (9, "Jungle Arena"),
    (10, "Hog Mountain"),
    (11, "Electro Valley"),
    (12, "Spooky Town"),
    (13, "Rascal's Hideout"),
    (14, "Serenity Peak"),
    (15, "Legendary Arena"),
];

/// Immutable card unlock and arena name table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaUnlockTable {
    unlocks: HashMap<String, u32>,
    arena_names: BTreeMap<u32, String>,
}

impl ArenaUnlockTable {
    /// Build a table from explicit unlocks and arena names.
    #[must_use]
    pub fn new<C, A>(
        unlocks: impl IntoIterator<Item = (C, u32)>,
        arena_names: impl IntoIterator<Item = (u32, A)>,
    ) -> Self
    where
        C: Into<String>,
        A: Into<String>,
    {
        Self {
            unlocks: unlocks
                .into_iter()
                .map(|(card, arena)| (card.into(), arena))
                .collect(),
            arena_names: arena_names
                .into_iter()
                .map(|(arena, name)| (arena, name.into()))
                .collect(),
        }
    }

    /// The built-in progression from Training Camp to Legendary Arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_data::ArenaUnlockTable;
    ///
    /// let table = ArenaUnlockTable::standard();
    /// assert_eq!(table.unlock_arena("Hog Rider"), 2);
    /// assert_eq!(table.arena_name(2), "Bone Pit");
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_UNLOCKS.iter().copied(),
            STANDARD_ARENAS.iter().copied(),
        )
    }

    /// Arena at which `card` unlocks, if the table knows the card.
    #[must_use]
    pub fn known_unlock_arena(&self, card: &str) -> Option<u32> {
        self.unlocks.get(card).copied()
    }

    /// Arena at which `card` unlocks; unknown cards unlock at arena 0.
    #[must_use]
    pub fn unlock_arena(&self, card: &str) -> u32 {
        self.known_unlock_arena(card).unwrap_or_default()
    }

    /// Display name of `arena`, or `Arena N` when unnamed.
    #[must_use]
    pub fn arena_name(&self, arena: u32) -> String {
        self.arena_names
            .get(&arena)
            .cloned()
            .unwrap_or_else(|| format!("Arena {arena}"))
    }

    /// Number of cards with a known unlock arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unlocks.len()
    }

    /// Whether the table knows no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unlocks.is_empty()
    }
}
