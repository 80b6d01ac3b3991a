//! Free-to-play friendliness: rarity cost and upgrade progress.

use deckgrade_core::{Card, DimensionScore};

use super::bounded;
use crate::DeckMetrics;

const RARITY_WEIGHT: f64 = 0.6;
const UPGRADE_WEIGHT: f64 = 0.4;

/// Score how affordable a deck is to max out without spending.
///
/// Champions, legendaries and epics accumulate a rarity penalty of four,
/// three and two points per card.
#[must_use]
pub fn score_f2p(deck: &[Card]) -> DimensionScore {
    f2p_from_metrics(&DeckMetrics::from_deck(deck))
}

pub(crate) fn f2p_from_metrics(metrics: &DeckMetrics) -> DimensionScore {
    if metrics.is_empty() {
        return DimensionScore::empty_deck();
    }

    let penalty = f64::from(metrics.champions) * 4.0
        + f64::from(metrics.legendaries) * 3.0
        + f64::from(metrics.epics) * 2.0;
    let rarity = rarity_score(penalty);
    let upgrade = bounded(metrics.average_level_ratio() * 10.0);

    let score = bounded(rarity * RARITY_WEIGHT + upgrade * UPGRADE_WEIGHT);
    DimensionScore::new(score, assessment(metrics, score))
}

fn rarity_score(penalty: f64) -> f64 {
    if penalty <= 0.0 {
        10.0
    } else if penalty <= 2.0 {
        10.0 - penalty * 2.0
    } else if penalty <= 4.0 {
        6.0 - (penalty - 2.0) * 1.5
    } else {
        (3.0 - (penalty - 4.0) * 0.5).max(0.0)
    }
}

fn assessment(metrics: &DeckMetrics, score: f64) -> &'static str {
    if score >= 8.0 {
        "Excellent for F2P players with easy upgrade path"
    } else if score >= 6.0 {
        "Good for F2P with manageable upgrade costs"
    } else if metrics.legendaries >= 3 {
        "Difficult for F2P due to multiple legendaries"
    } else if metrics.epics >= 4 {
        "Challenging for F2P with many epic cards"
    } else {
        "Moderate F2P friendliness, some expensive upgrades"
    }
}
