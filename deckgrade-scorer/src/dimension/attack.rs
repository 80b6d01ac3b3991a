//! Offensive potential: win conditions, big spells and damage output.

use deckgrade_core::{Card, DimensionScore};

use super::{bounded, evolution_note};
use crate::DeckMetrics;

const WIN_CONDITION_WEIGHT: f64 = 0.4;
const SPELL_WEIGHT: f64 = 0.3;
const DAMAGE_WEIGHT: f64 = 0.3;
const EVOLUTION_BONUS_PER_LEVEL: f64 = 0.15;
const NO_WIN_CONDITION_FLOOR: f64 = 3.0;

/// Score a deck's attack potential.
///
/// # Examples
///
/// ```
/// use deckgrade_scorer::score_attack;
///
/// assert_eq!(score_attack(&[]).score, 0.0);
/// ```
#[must_use]
pub fn score_attack(deck: &[Card]) -> DimensionScore {
    attack_from_metrics(&DeckMetrics::from_deck(deck))
}

pub(crate) fn attack_from_metrics(metrics: &DeckMetrics) -> DimensionScore {
    if metrics.is_empty() {
        return DimensionScore::empty_deck();
    }

    let win_condition = match metrics.win_conditions {
        0 => NO_WIN_CONDITION_FLOOR,
        1 => bounded(7.0 + metrics.win_condition_quality * 3.0),
        _ => 10.0,
    };
    let spell = spell_score(metrics.spell_damage);
    let damage = damage_score(metrics.average_damage());
    let bonus = EVOLUTION_BONUS_PER_LEVEL * f64::from(metrics.evolution_levels);

    let score = bounded(
        win_condition * WIN_CONDITION_WEIGHT
            + spell * SPELL_WEIGHT
            + damage * DAMAGE_WEIGHT
            + bonus,
    );
    DimensionScore::new(score, assessment(score, bonus))
}

fn spell_score(spell_damage: f64) -> f64 {
    if spell_damage >= 2.0 {
        10.0
    } else if spell_damage >= 1.0 {
        6.0 + spell_damage * 2.0
    } else {
        2.0 + spell_damage * 4.0
    }
}

fn damage_score(average: f64) -> f64 {
    if average >= 200.0 {
        10.0
    } else if average >= 100.0 {
        5.0 + (average - 100.0) / 20.0
    } else {
        bounded(average / 20.0)
    }
}

fn assessment(score: f64, bonus: f64) -> String {
    let note = evolution_note(bonus);
    if score >= 8.0 {
        format!("Excellent offensive potential with strong win conditions{note}")
    } else if score >= 6.0 {
        format!("Good attack capabilities with decent win conditions{note}")
    } else if score >= 4.0 {
        format!("Moderate offensive pressure, could use stronger win conditions{note}")
    } else {
        "Weak attack potential, lacks reliable win conditions".to_owned()
    }
}
