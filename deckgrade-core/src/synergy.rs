//! Pairwise card synergy lookups.
//!
//! The scoring core never owns synergy knowledge. It asks a
//! [`SynergyLookup`] about each unordered pair of cards in a deck and blends
//! the answers into a dimension score.

/// A known interaction between two cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynergyLink<'a> {
    /// Strength of the interaction in `0.0..=1.0`.
    pub strength: f64,
    /// Short explanation of why the cards work together.
    pub description: &'a str,
    /// Kind of interaction, such as `tank-support` or `bait`, when known.
    pub category: Option<&'a str>,
}

/// Answer synergy questions about pairs of card names.
///
/// Lookups must be symmetric: `synergy(a, b)` and `synergy(b, a)` return the
/// same link. Implementations must be thread-safe (`Send` + `Sync`) so
/// evaluations can run in parallel.
///
/// # Examples
///
/// ```rust
/// use deckgrade_core::{SynergyLink, SynergyLookup};
///
/// struct HogIceGolem;
///
/// impl SynergyLookup for HogIceGolem {
///     fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>> {
///         let pair = [first, second];
///         (pair.contains(&"Hog Rider") && pair.contains(&"Ice Golem")).then_some(SynergyLink {
///             strength: 0.8,
///             description: "Ice Golem tanks for Hog Rider",
///             category: Some("tank-support"),
///         })
///     }
/// }
///
/// let lookup = HogIceGolem;
/// assert!(lookup.synergy("Ice Golem", "Hog Rider").is_some());
/// assert!(lookup.synergy("Ice Golem", "Knight").is_none());
/// ```
pub trait SynergyLookup: Send + Sync {
    /// Return the link between `first` and `second`, or `None` when no
    /// relationship is known.
    fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>>;
}

impl<T: SynergyLookup + ?Sized> SynergyLookup for &T {
    fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>> {
        (**self).synergy(first, second)
    }
}
