//! Deck scoring and archetype classification.
//!
//! The crate provides three tightly coupled capabilities:
//! - **Composite scoring** reduces a deck to six independent `0.0..=10.0`
//!   dimension scores (attack, defense, synergy, versatility,
//!   F2P-friendliness and playability) and combines them with fixed
//!   [`CompositeWeights`] into an overall score, tier and star rating.
//! - **Deck analysis** explains defense, attack, bait potential, cycle
//!   speed and ladder viability in five [`AnalysisSection`]s.
//! - **Archetype classification** scores the deck against nine
//!   [`ArchetypeTemplate`]s, converts the two best raw fits into calibrated
//!   confidences and resolves single, hybrid or unknown classification.
//!
//! Every function is pure. Degraded inputs (empty decks, absent
//! collaborators) produce documented neutral scores rather than errors; only
//! policy validation is fallible.
//!
//! # Examples
//!
//! ```
//! use deckgrade_core::{Card, Rarity, Role};
//! use deckgrade_scorer::evaluate;
//!
//! let deck: Vec<Card> = ["Hog Rider", "Musketeer", "Valkyrie", "Cannon",
//!     "Fireball", "The Log", "Ice Spirit", "Skeletons"]
//!     .into_iter()
//!     .map(|name| Card::new(name, 3, Rarity::Common).with_role(Role::Support))
//!     .collect();
//!
//! let result = evaluate(&deck, None, None);
//! assert!((0.0..=10.0).contains(&result.overall_score));
//! ```

#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    reason = "deck scoring is floating-point arithmetic throughout"
)]

pub mod analysis;
pub mod archetype;
mod composite;
pub mod dimension;
mod error;
mod evaluate;
mod metrics;
mod policy;

pub use analysis::{
    AnalysisSection, BaitGroup, DeckAnalysis, WinConditionStyle, analyse_deck, attack_analysis,
    bait_analysis, bait_groups, cycle_analysis, defense_analysis, is_level_independent,
    ladder_analysis, shortest_cycle,
};
pub use archetype::{
    ARCHETYPE_TEMPLATES, ArchetypeClassification, ArchetypeClassifier, ArchetypeTemplate,
    CardCount, ElixirBand, ElixirCurve, RELATED_ARCHETYPES, Signature, SignatureCard,
    classify_archetype,
};
pub use composite::{Dimension, overall_score};
pub use dimension::{
    CARD_ALTERNATIVES, MissingCard, MissingCardsReport, SynergyPair, SynergySummary, missing_cards,
    score_attack, score_defense, score_f2p, score_playability, score_playability_with,
    score_synergy, score_synergy_with, score_versatility, summarise_synergy,
};
pub use error::PolicyError;
pub use evaluate::{EvaluationResult, Evaluator, evaluate};
pub use metrics::DeckMetrics;
pub use policy::{
    ATTACK_WEIGHT, CONFIDENCE_MIDPOINT, CONFIDENCE_STEEPNESS, ClassifierPolicy, CompositeWeights,
    DEFENSE_WEIGHT, F2P_WEIGHT, HYBRID_CONFIDENCE_THRESHOLD, HYBRID_MAX_SCORE_GAP,
    HYBRID_SCORE_RATIO, LOCKED_CARD_PENALTY, PLAYABILITY_WEIGHT, PlayabilityPolicy,
    SYNERGY_AVERAGE_WEIGHT, SYNERGY_COVERAGE_WEIGHT, SYNERGY_NEUTRAL_SCORE, SYNERGY_WEIGHT,
    SynergyPolicy, UNKNOWN_CONFIDENCE_THRESHOLD, UNLOCKED_CARD_PENALTY, VERSATILITY_WEIGHT,
};
