//! Adaptability: role spread, elixir spread and targeting coverage.

use deckgrade_core::{Card, DimensionScore};

use super::bounded;
use crate::DeckMetrics;

const ROLE_WEIGHT: f64 = 0.4;
const ELIXIR_WEIGHT: f64 = 0.3;
const TARGETING_WEIGHT: f64 = 0.3;

/// Score how many different threats and situations a deck can answer.
#[must_use]
pub fn score_versatility(deck: &[Card]) -> DimensionScore {
    versatility_from_metrics(&DeckMetrics::from_deck(deck))
}

pub(crate) fn versatility_from_metrics(metrics: &DeckMetrics) -> DimensionScore {
    if metrics.is_empty() {
        return DimensionScore::empty_deck();
    }

    let roles = match metrics.distinct_roles {
        count @ 0..=2 => f64::from(count) * 2.0,
        3 => 5.0,
        4 => 7.0,
        _ => 10.0,
    };
    let elixir = bounded(f64::from(metrics.distinct_elixir_costs) * 1.5);
    let targeting = if metrics.anti_air >= 3 && metrics.ground_targeting >= 6 {
        10.0
    } else if metrics.anti_air >= 2 && metrics.ground_targeting >= 5 {
        7.0
    } else {
        bounded(f64::from(metrics.anti_air + metrics.ground_targeting) * 0.5)
    };

    let score =
        bounded(roles * ROLE_WEIGHT + elixir * ELIXIR_WEIGHT + targeting * TARGETING_WEIGHT);
    DimensionScore::new(score, assessment(score))
}

fn assessment(score: f64) -> &'static str {
    if score >= 8.0 {
        "Highly versatile deck with diverse roles and elixir costs"
    } else if score >= 6.0 {
        "Good versatility with decent role coverage"
    } else if score >= 4.0 {
        "Moderate versatility, some gaps in role coverage"
    } else {
        "Limited versatility, narrow strategy focus"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgrade_core::test_support::hog_cycle_deck;
    use deckgrade_core::{Rarity, Role};
    use rstest::rstest;

    #[test]
    fn hog_cycle_is_versatile() {
        // roles 6 -> 10, costs {1, 2, 3, 4} -> 6, targeting 2 air + 6 ground -> 7
        let score = score_versatility(&hog_cycle_deck());
        assert!((score.score - 7.9).abs() < 1e-9, "score was {}", score.score);
        assert_eq!(score.assessment, "Good versatility with decent role coverage");
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    fn narrow_decks_score_low(#[case] roles: usize) {
        let deck: Vec<Card> = Role::ALL
            .iter()
            .take(roles)
            .map(|role| Card::new(role.as_str(), 3, Rarity::Common).with_role(*role))
            .collect();
        let score = score_versatility(&deck);
        assert!(score.score < 4.0, "score was {}", score.score);
        assert_eq!(score.assessment, "Limited versatility, narrow strategy focus");
    }
}
