//! The six dimension scorers.
//!
//! Each scorer reduces a deck to a [`DimensionScore`] in `0.0..=10.0` with a
//! short assessment. An empty deck always scores `0.0` with the assessment
//! "No cards in deck".
//!
//! [`DimensionScore`]: deckgrade_core::DimensionScore

mod attack;
mod defense;
mod f2p;
mod playability;
mod synergy;
mod versatility;

pub use attack::score_attack;
pub use defense::score_defense;
pub use f2p::score_f2p;
pub use playability::{
    CARD_ALTERNATIVES, MissingCard, MissingCardsReport, missing_cards, score_playability,
    score_playability_with,
};
pub use synergy::{
    SynergyPair, SynergySummary, score_synergy, score_synergy_with, summarise_synergy,
};
pub use versatility::score_versatility;

pub(crate) use attack::attack_from_metrics;
pub(crate) use defense::defense_from_metrics;
pub(crate) use f2p::f2p_from_metrics;
pub(crate) use playability::playability_from_report;
pub(crate) use synergy::synergy_from_summary;
pub(crate) use versatility::versatility_from_metrics;

/// Clamp a sub-score into `0.0..=10.0`.
pub(crate) fn bounded(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, deckgrade_core::MAX_SCORE)
}

/// Suffix naming an evolution bonus, or nothing when no bonus applies.
fn evolution_note(bonus: f64) -> String {
    if bonus > 0.0 {
        format!(" (+{bonus:.1} evolution bonus)")
    } else {
        String::new()
    }
}
