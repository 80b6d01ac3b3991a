//! Public configuration types for composite scoring and classification.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::PolicyError;

/// Default weight of the attack dimension in the overall score.
pub const ATTACK_WEIGHT: f64 = 0.20;
/// Default weight of the defense dimension in the overall score.
pub const DEFENSE_WEIGHT: f64 = 0.20;
/// Default weight of the synergy dimension in the overall score.
pub const SYNERGY_WEIGHT: f64 = 0.20;
/// Default weight of the versatility dimension in the overall score.
pub const VERSATILITY_WEIGHT: f64 = 0.15;
/// Default weight of the F2P dimension in the overall score.
pub const F2P_WEIGHT: f64 = 0.10;
/// Default weight of the playability dimension in the overall score.
pub const PLAYABILITY_WEIGHT: f64 = 0.15;

/// Steepness of the logistic curve mapping raw fit to confidence.
pub const CONFIDENCE_STEEPNESS: f64 = 5.0;
/// Normalised raw fit at which confidence reaches one half.
pub const CONFIDENCE_MIDPOINT: f64 = 0.5;
/// Minimum confidence both archetypes need before a deck counts as hybrid.
pub const HYBRID_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Minimum ratio of secondary to primary raw fit for a hybrid.
pub const HYBRID_SCORE_RATIO: f64 = 0.7;
/// Largest raw fit gap still treated as hybrid.
pub const HYBRID_MAX_SCORE_GAP: f64 = 2.0;
/// Primary confidence below which a deck is reported as unknown.
pub const UNKNOWN_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Weight of the average pair strength in the synergy score.
pub const SYNERGY_AVERAGE_WEIGHT: f64 = 0.75;
/// Weight of pair coverage in the synergy score.
pub const SYNERGY_COVERAGE_WEIGHT: f64 = 0.25;
/// Score reported when no synergy pair is found or no database is present.
pub const SYNERGY_NEUTRAL_SCORE: f64 = 5.0;

/// Playability points deducted for each missing card still arena-locked.
pub const LOCKED_CARD_PENALTY: f64 = 1.5;
/// Playability points deducted for each missing card already unlocked.
pub const UNLOCKED_CARD_PENALTY: f64 = 0.5;

const fn check_weight(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PolicyError::InvalidWeight { name, value })
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PolicyError::ThresholdOutOfRange { name, value })
    }
}

const fn check_positive(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PolicyError::NonPositive { name, value })
    }
}

/// Weights combining the six dimension scores into the overall score.
///
/// The weighted sum is divided by the total weight, so custom weights need
/// not sum to one for the result to stay within `0.0..=10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    /// Weight of the attack dimension.
    pub attack: f64,
    /// Weight of the defense dimension.
    pub defense: f64,
    /// Weight of the synergy dimension.
    pub synergy: f64,
    /// Weight of the versatility dimension.
    pub versatility: f64,
    /// Weight of the F2P dimension.
    pub f2p: f64,
    /// Weight of the playability dimension.
    pub playability: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            attack: ATTACK_WEIGHT,
            defense: DEFENSE_WEIGHT,
            synergy: SYNERGY_WEIGHT,
            versatility: VERSATILITY_WEIGHT,
            f2p: F2P_WEIGHT,
            playability: PLAYABILITY_WEIGHT,
        }
    }
}

impl CompositeWeights {
    /// Validate that every weight is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidWeight`] when a weight is negative or not
    /// finite and [`PolicyError::ZeroTotalWeight`] when all weights are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_scorer::{CompositeWeights, PolicyError};
    ///
    /// assert!(CompositeWeights::default().validate().is_ok());
    /// let broken = CompositeWeights { attack: -1.0, ..CompositeWeights::default() };
    /// assert!(matches!(broken.validate(), Err(PolicyError::InvalidWeight { .. })));
    /// ```
    pub fn validate(self) -> Result<Self, PolicyError> {
        for (name, value) in self.named() {
            check_weight(name, value)?;
        }
        if self.total() <= 0.0 {
            return Err(PolicyError::ZeroTotalWeight);
        }
        Ok(self)
    }

    /// Sum of all six weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.named().iter().map(|(_, value)| value).sum()
    }

    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("attack", self.attack),
            ("defense", self.defense),
            ("synergy", self.synergy),
            ("versatility", self.versatility),
            ("f2p", self.f2p),
            ("playability", self.playability),
        ]
    }
}

/// Parameters of the archetype confidence curve and hybrid rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    /// Steepness of the logistic confidence curve.
    pub steepness: f64,
    /// Normalised raw fit at which confidence is one half.
    pub midpoint: f64,
    /// Confidence both archetypes need for a hybrid.
    pub hybrid_confidence: f64,
    /// Minimum secondary to primary raw fit ratio for a hybrid.
    pub hybrid_score_ratio: f64,
    /// Largest raw fit gap still treated as hybrid.
    pub hybrid_max_gap: f64,
    /// Primary confidence below which the deck is unknown.
    pub unknown_below: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            steepness: CONFIDENCE_STEEPNESS,
            midpoint: CONFIDENCE_MIDPOINT,
            hybrid_confidence: HYBRID_CONFIDENCE_THRESHOLD,
            hybrid_score_ratio: HYBRID_SCORE_RATIO,
            hybrid_max_gap: HYBRID_MAX_SCORE_GAP,
            unknown_below: UNKNOWN_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ClassifierPolicy {
    /// Validate the curve parameters and thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NonPositive`] for a non-positive steepness,
    /// [`PolicyError::ThresholdOutOfRange`] for thresholds outside
    /// `0.0..=1.0` and [`PolicyError::InvalidWeight`] for a negative gap.
    pub fn validate(self) -> Result<Self, PolicyError> {
        check_positive("steepness", self.steepness)?;
        check_unit("midpoint", self.midpoint)?;
        check_unit("hybrid_confidence", self.hybrid_confidence)?;
        check_unit("hybrid_score_ratio", self.hybrid_score_ratio)?;
        check_unit("unknown_below", self.unknown_below)?;
        check_weight("hybrid_max_gap", self.hybrid_max_gap)?;
        Ok(self)
    }

    /// Map a raw `0.0..=10.0` template fit to a confidence in `0.0..=1.0`.
    ///
    /// Fits at or below zero map to exactly `0.0` and fits at or above ten
    /// map to exactly `1.0`; between them confidence follows a logistic curve.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_scorer::ClassifierPolicy;
    ///
    /// let policy = ClassifierPolicy::default();
    /// assert_eq!(policy.confidence(0.0), 0.0);
    /// assert!((policy.confidence(5.0) - 0.5).abs() < 1e-9);
    /// assert_eq!(policy.confidence(10.0), 1.0);
    /// ```
    #[must_use]
    pub fn confidence(&self, raw: f64) -> f64 {
        if raw.is_nan() || raw <= 0.0 {
            return 0.0;
        }
        if raw >= deckgrade_core::MAX_SCORE {
            return 1.0;
        }
        let normalised = raw / deckgrade_core::MAX_SCORE;
        let exponent = -self.steepness * (normalised - self.midpoint);
        (1.0 / (1.0 + exponent.exp())).clamp(0.0, 1.0)
    }
}

/// Blend of average strength and coverage used by the synergy dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyPolicy {
    /// Weight of the mean strength of the pairs found.
    pub average_weight: f64,
    /// Weight of the fraction of possible pairs found.
    pub coverage_weight: f64,
    /// Score reported when nothing can be measured.
    pub neutral_score: f64,
}

impl Default for SynergyPolicy {
    fn default() -> Self {
        Self {
            average_weight: SYNERGY_AVERAGE_WEIGHT,
            coverage_weight: SYNERGY_COVERAGE_WEIGHT,
            neutral_score: SYNERGY_NEUTRAL_SCORE,
        }
    }
}

impl SynergyPolicy {
    /// Validate the blend weights and neutral score.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidWeight`] for negative or non-finite
    /// values, [`PolicyError::ZeroTotalWeight`] when both weights are zero
    /// and [`PolicyError::ThresholdOutOfRange`] when the neutral score,
    /// scaled to `0.0..=1.0`, falls outside that range.
    pub fn validate(self) -> Result<Self, PolicyError> {
        check_weight("average_weight", self.average_weight)?;
        check_weight("coverage_weight", self.coverage_weight)?;
        if self.average_weight + self.coverage_weight <= 0.0 {
            return Err(PolicyError::ZeroTotalWeight);
        }
        check_unit(
            "neutral_score",
            self.neutral_score / deckgrade_core::MAX_SCORE,
        )?;
        Ok(self)
    }
}

/// Penalties applied by the playability dimension for missing cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayabilityPolicy {
    /// Points deducted per missing card that is still locked.
    pub locked_penalty: f64,
    /// Points deducted per missing card that is already unlocked.
    pub unlocked_penalty: f64,
}

impl Default for PlayabilityPolicy {
    fn default() -> Self {
        Self {
            locked_penalty: LOCKED_CARD_PENALTY,
            unlocked_penalty: UNLOCKED_CARD_PENALTY,
        }
    }
}

impl PlayabilityPolicy {
    /// Validate that both penalties are usable.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidWeight`] when a penalty is negative or
    /// not finite.
    pub fn validate(self) -> Result<Self, PolicyError> {
        check_weight("locked_penalty", self.locked_penalty)?;
        check_weight("unlocked_penalty", self.unlocked_penalty)?;
        Ok(self)
    }
}
