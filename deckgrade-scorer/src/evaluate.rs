//! Full deck evaluation.

use deckgrade_core::{
    Card, DECK_SIZE, DimensionScore, OwnershipContext, SynergyLookup, Tier, average_elixir,
    score_to_stars, score_to_tier,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::DeckAnalysis;
use crate::archetype::ArchetypeClassifier;
use crate::dimension::{
    attack_from_metrics, defense_from_metrics, f2p_from_metrics, missing_cards,
    playability_from_report, summarise_synergy, synergy_from_summary, versatility_from_metrics,
};
use crate::{
    ArchetypeClassification, ClassifierPolicy, CompositeWeights, DeckMetrics, Dimension,
    MissingCardsReport, PlayabilityPolicy, PolicyError, SynergyPolicy, SynergySummary,
    overall_score,
};

/// Everything learned about one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Card names in deck order.
    pub deck: Vec<String>,
    /// Mean elixir cost rounded to two decimal places.
    pub average_elixir: f64,
    /// Attack dimension.
    pub attack: DimensionScore,
    /// Defense dimension.
    pub defense: DimensionScore,
    /// Synergy dimension.
    pub synergy: DimensionScore,
    /// Versatility dimension.
    pub versatility: DimensionScore,
    /// F2P dimension.
    pub f2p: DimensionScore,
    /// Playability dimension.
    pub playability: DimensionScore,
    /// Weighted overall score.
    pub overall_score: f64,
    /// Tier of the overall score.
    pub overall_tier: Tier,
    /// Stars of the overall score.
    pub overall_stars: u8,
    /// Archetype classification.
    pub archetype: ArchetypeClassification,
    /// Synergy pairs found, when a lookup was supplied.
    pub synergy_summary: Option<SynergySummary>,
    /// Missing cards, when an ownership context was supplied.
    pub missing_cards: Option<MissingCardsReport>,
    /// Defense, attack, bait, cycle and ladder sections.
    pub analysis: DeckAnalysis,
}

impl EvaluationResult {
    /// Score of one dimension.
    #[must_use]
    pub const fn dimension(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Attack => &self.attack,
            Dimension::Defense => &self.defense,
            Dimension::Synergy => &self.synergy,
            Dimension::Versatility => &self.versatility,
            Dimension::F2p => &self.f2p,
            Dimension::Playability => &self.playability,
        }
    }

    /// Every dimension paired with its score, in reporting order.
    pub fn dimensions(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.dimension(dimension)))
    }
}

/// Evaluation policies bundled together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluator {
    /// Dimension weights for the overall score.
    pub weights: CompositeWeights,
    /// Archetype confidence and hybrid rules.
    pub classifier: ClassifierPolicy,
    /// Synergy blend.
    pub synergy: SynergyPolicy,
    /// Playability penalties.
    pub playability: PlayabilityPolicy,
}

impl Evaluator {
    /// Validate every policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] raised by a contained policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_scorer::{CompositeWeights, Evaluator};
    ///
    /// let evaluator = Evaluator {
    ///     weights: CompositeWeights { f2p: 0.0, ..CompositeWeights::default() },
    ///     ..Evaluator::default()
    /// };
    /// assert!(evaluator.validate().is_ok());
    /// ```
    pub fn validate(self) -> Result<Self, PolicyError> {
        self.weights.validate()?;
        self.classifier.validate()?;
        self.synergy.validate()?;
        self.playability.validate()?;
        Ok(self)
    }

    /// Evaluate `deck` against optional collaborators.
    ///
    /// Decks of any length are scored; a deck that is not eight cards long is
    /// reported with a warning.
    #[must_use]
    pub fn evaluate(
        &self,
        deck: &[Card],
        synergy: Option<&dyn SynergyLookup>,
        ownership: Option<&dyn OwnershipContext>,
    ) -> EvaluationResult {
        if deck.len() != DECK_SIZE {
            warn!(
                "evaluating a deck of {} cards, expected {DECK_SIZE}",
                deck.len()
            );
        }

        let metrics = DeckMetrics::from_deck(deck);
        let empty = deck.is_empty();
        let synergy_summary = synergy
            .filter(|_| !empty)
            .map(|lookup| summarise_synergy(deck, lookup));
        let missing = ownership
            .filter(|_| !empty)
            .map(|context| missing_cards(deck, context));

        let (synergy_score, playability) = if empty {
            (DimensionScore::empty_deck(), DimensionScore::empty_deck())
        } else {
            (
                synergy_from_summary(synergy_summary.as_ref(), &self.synergy),
                playability_from_report(deck.len(), missing.as_ref(), &self.playability),
            )
        };

        let attack = attack_from_metrics(&metrics);
        let defense = defense_from_metrics(&metrics);
        let versatility = versatility_from_metrics(&metrics);
        let f2p = f2p_from_metrics(&metrics);

        let overall = overall_score(
            [
                (Dimension::Attack, attack.score),
                (Dimension::Defense, defense.score),
                (Dimension::Synergy, synergy_score.score),
                (Dimension::Versatility, versatility.score),
                (Dimension::F2p, f2p.score),
                (Dimension::Playability, playability.score),
            ],
            &self.weights,
        );
        debug!("overall score {overall:.1} for {} cards", deck.len());

        let analysis = DeckAnalysis::from_scores(deck, &attack, &defense, &f2p);
        let archetype = ArchetypeClassifier::default()
            .with_policy(self.classifier)
            .classify(deck);

        EvaluationResult {
            deck: deck.iter().map(|card| card.name.clone()).collect(),
            average_elixir: (average_elixir(deck) * 100.0).round() / 100.0,
            attack,
            defense,
            synergy: synergy_score,
            versatility,
            f2p,
            playability,
            overall_score: overall,
            overall_tier: score_to_tier(overall),
            overall_stars: score_to_stars(overall),
            archetype,
            synergy_summary,
            missing_cards: missing,
            analysis,
        }
    }
}

/// Evaluate `deck` with [`Evaluator::default`].
///
/// # Examples
///
/// ```
/// use deckgrade_core::{Archetype, Tier};
/// use deckgrade_scorer::evaluate;
///
/// let result = evaluate(&[], None, None);
/// assert_eq!(result.overall_tier, Tier::Awful);
/// assert_eq!(result.archetype.primary, Archetype::Unknown);
/// ```
#[must_use]
pub fn evaluate(
    deck: &[Card],
    synergy: Option<&dyn SynergyLookup>,
    ownership: Option<&dyn OwnershipContext>,
) -> EvaluationResult {
    Evaluator::default().evaluate(deck, synergy, ownership)
}
