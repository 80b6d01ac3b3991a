//! A player's card collection as an [`OwnershipContext`].

use std::collections::HashSet;

use deckgrade_core::{CardAvailability, OwnershipContext};

use crate::ArenaUnlockTable;

/// Cards a player owns, the arena they have reached and the unlock table
/// deciding which missing cards are still locked.
///
/// Arena `0` lifts every arena restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCollection {
    owned: HashSet<String>,
    arena: u32,
    unlocks: ArenaUnlockTable,
}

impl PlayerCollection {
    /// Create an empty collection at `arena`.
    #[must_use]
    pub fn new(arena: u32, unlocks: ArenaUnlockTable) -> Self {
        Self {
            owned: HashSet::new(),
            arena,
            unlocks,
        }
    }

    /// Add cards to the collection, returning `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_core::OwnershipContext;
    /// use deckgrade_data::{ArenaUnlockTable, PlayerCollection};
    ///
    /// let collection = PlayerCollection::new(3, ArenaUnlockTable::standard())
    ///     .with_cards(["Knight", "Hog Rider"]);
    /// assert!(collection.availability("Knight").is_owned());
    /// assert!(collection.availability("Graveyard").is_locked());
    /// ```
    #[must_use]
    pub fn with_cards<S: Into<String>>(mut self, cards: impl IntoIterator<Item = S>) -> Self {
        self.owned.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Add one card.
    pub fn insert(&mut self, card: impl Into<String>) {
        self.owned.insert(card.into());
    }

    /// Whether the player owns `card`.
    #[must_use]
    pub fn owns(&self, card: &str) -> bool {
        self.owned.contains(card)
    }

    /// Arena the player has reached.
    #[must_use]
    pub const fn arena(&self) -> u32 {
        self.arena
    }

    /// Unlock table in use.
    #[must_use]
    pub const fn unlocks(&self) -> &ArenaUnlockTable {
        &self.unlocks
    }

    /// Whether `card` is unlocked at the player's arena.
    #[must_use]
    pub fn is_unlocked(&self, card: &str) -> bool {
        self.arena == 0 || self.arena >= self.unlocks.unlock_arena(card)
    }

    /// Number of owned cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

impl OwnershipContext for PlayerCollection {
    fn availability(&self, card_name: &str) -> CardAvailability {
        if self.owns(card_name) {
            return CardAvailability::Owned;
        }
        CardAvailability::Missing {
            locked: !self.is_unlocked(card_name),
            unlock_arena: self.unlocks.known_unlock_arena(card_name),
        }
    }
}
