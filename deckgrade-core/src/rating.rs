//! Map continuous `0.0..=10.0` scores onto tiers and star ratings.
//!
//! Both mappers clamp their input, so any finite value yields a tier. Every
//! [`DimensionScore`] is built through [`DimensionScore::new`], which rounds
//! to one decimal place before mapping; the stored tier and star count
//! therefore always agree with the stored score.

use std::fmt;
use std::str::FromStr;

/// Upper bound of every score in the system.
pub const MAX_SCORE: f64 = 10.0;

/// Ten ordered qualitative tiers, each one point wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// `[0, 1)`
    Awful,
    /// `[1, 2)`
    Terrible,
    /// `[2, 3)`
    Bad,
    /// `[3, 4)`
    Poor,
    /// `[4, 5)`
    Mediocre,
    /// `[5, 6)`
    Decent,
    /// `[6, 7)`
    Good,
    /// `[7, 8)`
    Great,
    /// `[8, 9)`
    Amazing,
    /// `[9, 10]`
    Godly,
}

impl Tier {
    /// Tiers from lowest to highest.
    pub const ALL: [Self; 10] = [
        Self::Awful,
        Self::Terrible,
        Self::Bad,
        Self::Poor,
        Self::Mediocre,
        Self::Decent,
        Self::Good,
        Self::Great,
        Self::Amazing,
        Self::Godly,
    ];

    /// Return the tier label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Awful => "Awful",
            Self::Terrible => "Terrible",
            Self::Bad => "Bad",
            Self::Poor => "Poor",
            Self::Mediocre => "Mediocre",
            Self::Decent => "Decent",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
            Self::Godly => "Godly",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTierError(String);

impl fmt::Display for ParseTierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier '{}'", self.0)
    }
}

impl std::error::Error for ParseTierError {}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseTierError(s.to_owned()))
    }
}

fn clamp_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}

/// Map a score onto its tier.
///
/// # Examples
/// ```
/// use deckgrade_core::{Tier, score_to_tier};
///
/// assert_eq!(score_to_tier(0.4), Tier::Awful);
/// assert_eq!(score_to_tier(8.0), Tier::Amazing);
/// assert_eq!(score_to_tier(12.0), Tier::Godly);
/// ```
#[must_use]
pub fn score_to_tier(score: f64) -> Tier {
    let band = clamp_score(score).floor();
    Tier::ALL
        .into_iter()
        .zip(0_u8..)
        .take_while(|&(_, lower)| f64::from(lower) <= band)
        .last()
        .map_or(Tier::Awful, |(tier, _)| tier)
}

/// Map a score onto one to three stars: `[0, 5)` → 1, `[5, 8)` → 2,
/// `[8, 10]` → 3.
#[must_use]
pub fn score_to_stars(score: f64) -> u8 {
    let clamped = clamp_score(score);
    if clamped >= 8.0 {
        3
    } else if clamped >= 5.0 {
        2
    } else {
        1
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A single dimension's score with its derived tier, stars and explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionScore {
    /// Score in `0.0..=10.0`, rounded to one decimal.
    pub score: f64,
    /// Tier of [`Self::score`].
    pub tier: Tier,
    /// Star rating of [`Self::score`].
    pub stars: u8,
    /// Human-readable explanation.
    pub assessment: String,
}

impl DimensionScore {
    /// Clamp, round and map `score`.
    ///
    /// Non-finite scores collapse to `0.0`.
    ///
    /// # Examples
    /// ```
    /// use deckgrade_core::{DimensionScore, Tier};
    ///
    /// let score = DimensionScore::new(7.96, "good");
    /// assert!((score.score - 8.0).abs() < f64::EPSILON);
    /// assert_eq!(score.tier, Tier::Amazing);
    /// assert_eq!(score.stars, 3);
    /// ```
    #[must_use]
    pub fn new(score: f64, assessment: impl Into<String>) -> Self {
        let rounded = round_to_tenth(clamp_score(score));
        Self {
            score: rounded,
            tier: score_to_tier(rounded),
            stars: score_to_stars(rounded),
            assessment: assessment.into(),
        }
    }

    /// The zero score reported for an empty deck.
    #[must_use]
    pub fn empty_deck() -> Self {
        Self::new(0.0, "No cards in deck")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("godly", Tier::Godly)]
    #[case(" Mediocre ", Tier::Mediocre)]
    #[case("AWFUL", Tier::Awful)]
    fn tiers_parse_case_insensitively(#[case] label: &str, #[case] expected: Tier) {
        assert_eq!(label.parse::<Tier>(), Ok(expected));
    }

    #[test]
    fn unknown_tier_labels_are_rejected() {
        assert!("legendary".parse::<Tier>().is_err());
    }

    #[rstest]
    #[case(-3.0, Tier::Awful)]
    #[case(0.0, Tier::Awful)]
    #[case(0.99, Tier::Awful)]
    #[case(1.0, Tier::Terrible)]
    #[case(2.5, Tier::Bad)]
    #[case(3.0, Tier::Poor)]
    #[case(4.9, Tier::Mediocre)]
    #[case(5.0, Tier::Decent)]
    #[case(6.2, Tier::Good)]
    #[case(7.0, Tier::Great)]
    #[case(8.9, Tier::Amazing)]
    #[case(9.0, Tier::Godly)]
    #[case(10.0, Tier::Godly)]
    #[case(f64::NAN, Tier::Awful)]
    fn tiers_cover_every_band(#[case] score: f64, #[case] expected: Tier) {
        assert_eq!(score_to_tier(score), expected);
    }

    #[rstest]
    #[case(0.0, 1)]
    #[case(4.99, 1)]
    #[case(5.0, 2)]
    #[case(7.9, 2)]
    #[case(8.0, 3)]
    #[case(15.0, 3)]
    fn stars_cover_every_band(#[case] score: f64, #[case] expected: u8) {
        assert_eq!(score_to_stars(score), expected);
    }

    #[test]
    fn dimension_score_clamps_and_rounds() {
        let high = DimensionScore::new(11.3, "x");
        assert!((high.score - 10.0).abs() < f64::EPSILON);
        assert_eq!(high.tier, Tier::Godly);

        let low = DimensionScore::new(-1.0, "x");
        assert!(low.score.abs() < f64::EPSILON);
        assert_eq!(low.stars, 1);
    }

    #[test]
    fn rounding_feeds_the_mappers() {
        // 4.96 rounds to 5.0, which crosses both the tier and star boundary.
        let score = DimensionScore::new(4.96, "x");
        assert_eq!(score.tier, Tier::Decent);
        assert_eq!(score.stars, 2);
    }

    #[test]
    fn empty_deck_score_is_zero() {
        let score = DimensionScore::empty_deck();
        assert!(score.score.abs() < f64::EPSILON);
        assert_eq!(score.assessment, "No cards in deck");
    }
}
