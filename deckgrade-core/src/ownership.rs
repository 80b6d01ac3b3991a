//! Card ownership for a specific player.
//!
//! Playability scoring asks an [`OwnershipContext`] whether each deck card is
//! in the player's collection and, when it is not, whether the player's
//! progression still locks it.

/// Availability of one card for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CardAvailability {
    /// The player owns the card.
    Owned,
    /// The player does not own the card.
    Missing {
        /// The card is not yet unlocked at the player's arena.
        locked: bool,
        /// Arena at which the card unlocks, when known.
        unlock_arena: Option<u32>,
    },
}

impl CardAvailability {
    /// Whether the card is owned.
    #[must_use]
    pub const fn is_owned(self) -> bool {
        matches!(self, Self::Owned)
    }

    /// Whether the card is missing and still locked by progression.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Missing { locked: true, .. })
    }
}

/// Report ownership and unlock status for cards by name.
///
/// Implementations must be `Send + Sync` so evaluations can run across
/// threads.
pub trait OwnershipContext: Send + Sync {
    /// Return availability of `card_name` for the current player.
    fn availability(&self, card_name: &str) -> CardAvailability;
}

impl<T: OwnershipContext + ?Sized> OwnershipContext for &T {
    fn availability(&self, card_name: &str) -> CardAvailability {
        (**self).availability(card_name)
    }
}
