//! Facade crate for the deckgrade deck evaluation engine.
//!
//! This crate re-exports the core domain types and the scorer, and exposes
//! the in-memory synergy database and player collection behind the `data`
//! feature.

#![forbid(unsafe_code)]

pub use deckgrade_core::{
    Archetype, Card, CardAvailability, CombatStats, DimensionScore, OwnershipContext, Rarity,
    Role, SynergyLink, SynergyLookup, Targets, Tier,
};

pub use deckgrade_scorer::{
    ArchetypeClassification, ArchetypeClassifier, ClassifierPolicy, CompositeWeights, Dimension,
    EvaluationResult, Evaluator, MissingCardsReport, PlayabilityPolicy, PolicyError,
    SynergyPolicy, SynergySummary, classify_archetype, evaluate,
};

#[cfg(feature = "data")]
pub use deckgrade_data::{
    ArenaUnlockTable, PlayerCollection, SynergyCategory, SynergyDatabase, SynergyDatabaseError,
    SynergyEntry,
};
