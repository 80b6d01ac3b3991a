//! Composite scoring across the six dimensions.

use std::fmt;

use deckgrade_core::{MAX_SCORE, round_to_tenth};
use serde::{Deserialize, Serialize};

use crate::CompositeWeights;

/// One of the six scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Offensive potential.
    Attack,
    /// Defensive capability.
    Defense,
    /// Pairwise card synergy.
    Synergy,
    /// Adaptability.
    Versatility,
    /// Free-to-play friendliness.
    F2p,
    /// Availability in the player's collection.
    Playability,
}

impl Dimension {
    /// Every dimension in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Attack,
        Self::Defense,
        Self::Synergy,
        Self::Versatility,
        Self::F2p,
        Self::Playability,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Synergy => "synergy",
            Self::Versatility => "versatility",
            Self::F2p => "f2p",
            Self::Playability => "playability",
        }
    }

    /// Weight of this dimension in `weights`.
    #[must_use]
    pub const fn weight(self, weights: &CompositeWeights) -> f64 {
        match self {
            Self::Attack => weights.attack,
            Self::Defense => weights.defense,
            Self::Synergy => weights.synergy,
            Self::Versatility => weights.versatility,
            Self::F2p => weights.f2p,
            Self::Playability => weights.playability,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted mean of dimension scores, rounded to one decimal place.
///
/// `scores` yields one score per dimension; a dimension may appear once at
/// most. Non-finite scores count as zero. The mean is taken over the weights
/// of the dimensions supplied, so the result stays in `0.0..=10.0`.
///
/// # Examples
///
/// ```
/// use deckgrade_scorer::{CompositeWeights, Dimension, overall_score};
///
/// let scores = Dimension::ALL.map(|dimension| (dimension, 8.0));
/// assert_eq!(overall_score(scores, &CompositeWeights::default()), 8.0);
/// ```
#[must_use]
pub fn overall_score(
    scores: impl IntoIterator<Item = (Dimension, f64)>,
    weights: &CompositeWeights,
) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (dimension, score) in scores {
        let weight = dimension.weight(weights);
        let value = if score.is_finite() {
            score.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
        weighted += value * weight;
        total_weight += weight;
    }
    if total_weight <= 0.0 {
        return 0.0;
    }
    round_to_tenth((weighted / total_weight).clamp(0.0, MAX_SCORE))
}
