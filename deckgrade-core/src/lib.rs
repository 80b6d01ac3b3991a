//! Core domain types for the Deckgrade evaluator.
//!
//! The types here are read-only views supplied by an external card catalog
//! and the small collaborator traits the scoring crate consumes. Nothing in
//! this crate performs I/O; constructors never fail and callers are trusted to
//! provide well-formed descriptors.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    reason = "scores and level ratios are floating-point values"
)]

pub mod archetype;
pub mod card;
pub mod ownership;
pub mod rating;
pub mod synergy;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use archetype::{Archetype, ParseArchetypeError};
pub use card::{Card, CombatStats, ParseCardAttributeError, Rarity, Role, Targets};
pub use ownership::{CardAvailability, OwnershipContext};
pub use rating::{
    DimensionScore, MAX_SCORE, ParseTierError, Tier, round_to_tenth, score_to_stars, score_to_tier,
};
pub use synergy::{SynergyLink, SynergyLookup};

/// Number of cards in a complete deck.
///
/// Scorers accept shorter slices; only full evaluations expect this size.
pub const DECK_SIZE: usize = 8;

/// Average elixir cost across `deck`, or `0.0` for an empty slice.
///
/// # Examples
/// ```
/// use deckgrade_core::{Card, Rarity, average_elixir};
///
/// let deck = [
///     Card::new("Knight", 3, Rarity::Common),
///     Card::new("Skeletons", 1, Rarity::Common),
/// ];
/// assert!((average_elixir(&deck) - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn average_elixir(deck: &[Card]) -> f64 {
    if deck.is_empty() {
        return 0.0;
    }
    let total: u32 = deck.iter().map(|card| card.elixir).sum();
    let count = u32::try_from(deck.len()).unwrap_or(u32::MAX);
    f64::from(total) / f64::from(count)
}
