//! Defensive capability: anti-air coverage, buildings and support troops.

use deckgrade_core::{Card, DimensionScore};

use super::{bounded, evolution_note};
use crate::DeckMetrics;

const ANTI_AIR_WEIGHT: f64 = 0.4;
const BUILDING_WEIGHT: f64 = 0.3;
const SUPPORT_WEIGHT: f64 = 0.3;
const DEFENSIVE_EVOLUTION_BONUS: f64 = 0.20;
const ANTI_AIR_EVOLUTION_BONUS: f64 = 0.15;

/// Score a deck's defensive capability.
///
/// A deck with no anti-air card is always assessed as critically weak,
/// whatever its numeric score.
#[must_use]
pub fn score_defense(deck: &[Card]) -> DimensionScore {
    defense_from_metrics(&DeckMetrics::from_deck(deck))
}

pub(crate) fn defense_from_metrics(metrics: &DeckMetrics) -> DimensionScore {
    if metrics.is_empty() {
        return DimensionScore::empty_deck();
    }

    let anti_air = match metrics.anti_air {
        0 => 0.0,
        1 => 3.0,
        2 => 5.0,
        3 => 8.0,
        _ => 10.0,
    };
    let building = match metrics.buildings {
        0 => 3.0,
        1 => bounded(6.0 + metrics.defense_quality * 2.0),
        _ => 10.0,
    };
    let support = match metrics.supports {
        0 | 1 => 2.0,
        2 => 5.0,
        3 => 7.0,
        _ => 10.0,
    };
    let bonus = DEFENSIVE_EVOLUTION_BONUS * f64::from(metrics.defensive_evolution_levels)
        + ANTI_AIR_EVOLUTION_BONUS * f64::from(metrics.anti_air_evolution_levels);

    let score = bounded(
        anti_air * ANTI_AIR_WEIGHT + building * BUILDING_WEIGHT + support * SUPPORT_WEIGHT + bonus,
    );
    DimensionScore::new(score, assessment(metrics.anti_air, score, bonus))
}

fn assessment(anti_air: u32, score: f64, bonus: f64) -> String {
    if anti_air == 0 {
        return "Critical weakness: no anti-air defense".to_owned();
    }
    let note = evolution_note(bonus);
    if score >= 8.0 {
        format!("Solid defensive setup with good air coverage{note}")
    } else if score >= 6.0 {
        format!("Decent defensive capabilities{note}")
    } else {
        "Weak defensive structure, vulnerable to heavy pushes".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgrade_core::test_support::{card, ground_only_deck, hog_cycle_deck};
    use deckgrade_core::{Rarity, Role, Targets};

    #[test]
    fn ground_only_deck_is_critically_weak() {
        let score = score_defense(&ground_only_deck());
        assert!(score.score <= 3.0, "score was {}", score.score);
        assert!(score.assessment.contains("no anti-air defense"));
    }

    #[test]
    fn hog_cycle_defense_is_decent() {
        // 5 * 0.4 + 10 * 0.3 + 5 * 0.3
        let score = score_defense(&hog_cycle_deck());
        assert!((score.score - 6.5).abs() < 1e-9, "score was {}", score.score);
        assert_eq!(score.assessment, "Decent defensive capabilities");
    }

    #[test]
    fn strong_defense_without_anti_air_still_flags_weakness() {
        let mut deck: Vec<Card> = (0..4)
            .map(|index| {
                card(
                    &format!("Tower {index}"),
                    Role::Building,
                    4,
                    Rarity::Common,
                    Some((100.0, Targets::Ground)),
                )
                .with_evolution(4)
            })
            .collect();
        deck.push(card("Guard", Role::Support, 3, Rarity::Epic, None));
        let score = score_defense(&deck);
        assert!(score.score >= 6.0, "score was {}", score.score);
        assert_eq!(score.assessment, "Critical weakness: no anti-air defense");
    }
}
