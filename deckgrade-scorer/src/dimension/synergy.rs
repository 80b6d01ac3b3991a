//! Pairwise card synergy measured through a [`SynergyLookup`].

use std::collections::BTreeMap;

use deckgrade_core::{Card, DimensionScore, SynergyLookup};
use serde::{Deserialize, Serialize};

use super::bounded;
use crate::SynergyPolicy;

const TOP_PAIR_LIMIT: usize = 5;

/// A synergy found between two cards of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyPair {
    /// Card appearing earlier in the deck.
    pub first: String,
    /// Card appearing later in the deck.
    pub second: String,
    /// Strength in `0.0..=1.0`.
    pub strength: f64,
    /// Description supplied by the lookup.
    pub description: String,
    /// Interaction category supplied by the lookup, if any.
    pub category: Option<String>,
}

/// Pairwise synergy found in a deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynergySummary {
    /// Strongest pairs, strongest first, at most five.
    pub top_pairs: Vec<SynergyPair>,
    /// Number of pairs with a known synergy.
    pub pair_count: u32,
    /// Mean strength of the pairs found, or `0.0` when none were found.
    pub average_strength: f64,
    /// Fraction of possible pairs with a known synergy.
    pub coverage: f64,
    /// Number of possible pairs, `n * (n - 1) / 2`.
    pub max_pairs: u32,
    /// Cards without a synergy partner, in deck order.
    pub unpaired_cards: Vec<String>,
    /// Number of pairs found per interaction category. Uncategorised pairs
    /// are not counted.
    pub category_counts: BTreeMap<String, u32>,
}

fn sanitise_strength(strength: f64) -> f64 {
    if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Look up every unordered pair of `deck` in `lookup`.
///
/// # Examples
///
/// ```
/// use deckgrade_core::{Card, Rarity, SynergyLink, SynergyLookup};
/// use deckgrade_scorer::summarise_synergy;
///
/// struct GiantWitch;
///
/// impl SynergyLookup for GiantWitch {
///     fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>> {
///         let pair = [first, second];
///         (pair.contains(&"Giant") && pair.contains(&"Witch")).then_some(SynergyLink {
///             strength: 0.8,
///             description: "Tank shields a splash support",
///             category: Some("tank-support"),
///         })
///     }
/// }
///
/// let deck = [
///     Card::new("Giant", 5, Rarity::Rare),
///     Card::new("Witch", 5, Rarity::Epic),
///     Card::new("Zap", 2, Rarity::Common),
/// ];
/// let summary = summarise_synergy(&deck, &GiantWitch);
/// assert_eq!(summary.pair_count, 1);
/// assert_eq!(summary.max_pairs, 3);
/// assert_eq!(summary.unpaired_cards, vec!["Zap".to_owned()]);
/// assert_eq!(summary.category_counts.get("tank-support"), Some(&1));
/// ```
#[must_use]
pub fn summarise_synergy(deck: &[Card], lookup: &dyn SynergyLookup) -> SynergySummary {
    let mut pairs = Vec::new();
    let mut paired = vec![false; deck.len()];
    let mut max_pairs = 0_u32;
    let mut category_counts = BTreeMap::new();

    for (first_index, first) in deck.iter().enumerate() {
        for (offset, second) in deck.iter().skip(first_index + 1).enumerate() {
            max_pairs = max_pairs.saturating_add(1);
            let Some(link) = lookup.synergy(&first.name, &second.name) else {
                continue;
            };
            for index in [first_index, first_index + 1 + offset] {
                if let Some(flag) = paired.get_mut(index) {
                    *flag = true;
                }
            }
            if let Some(category) = link.category {
                let count: &mut u32 = category_counts.entry(category.to_owned()).or_default();
                *count = count.saturating_add(1);
            }
            pairs.push(SynergyPair {
                first: first.name.clone(),
                second: second.name.clone(),
                strength: sanitise_strength(link.strength),
                description: link.description.to_owned(),
                category: link.category.map(str::to_owned),
            });
        }
    }

    let pair_count = u32::try_from(pairs.len()).unwrap_or(u32::MAX);
    let average_strength = if pairs.is_empty() {
        0.0
    } else {
        pairs.iter().map(|pair| pair.strength).sum::<f64>() / f64::from(pair_count)
    };
    let coverage = if max_pairs == 0 {
        0.0
    } else {
        f64::from(pair_count) / f64::from(max_pairs)
    };

    pairs.sort_by(|left, right| right.strength.total_cmp(&left.strength));
    pairs.truncate(TOP_PAIR_LIMIT);

    let unpaired_cards = deck
        .iter()
        .zip(&paired)
        .filter(|(_, is_paired)| !**is_paired)
        .map(|(card, _)| card.name.clone())
        .collect();

    SynergySummary {
        top_pairs: pairs,
        pair_count,
        average_strength,
        coverage,
        max_pairs,
        unpaired_cards,
        category_counts,
    }
}

/// Score pairwise synergy with the default [`SynergyPolicy`].
///
/// Without a lookup the score is a neutral `5.0` with the assessment
/// "Synergy database not available". A deck in which no pair has a known
/// synergy also scores the neutral `5.0`.
#[must_use]
pub fn score_synergy(deck: &[Card], lookup: Option<&dyn SynergyLookup>) -> DimensionScore {
    score_synergy_with(deck, lookup, &SynergyPolicy::default())
}

/// Score pairwise synergy with an explicit policy.
#[must_use]
pub fn score_synergy_with(
    deck: &[Card],
    lookup: Option<&dyn SynergyLookup>,
    policy: &SynergyPolicy,
) -> DimensionScore {
    if deck.is_empty() {
        return DimensionScore::empty_deck();
    }
    let summary = lookup.map(|table| summarise_synergy(deck, table));
    synergy_from_summary(summary.as_ref(), policy)
}

pub(crate) fn synergy_from_summary(
    summary: Option<&SynergySummary>,
    policy: &SynergyPolicy,
) -> DimensionScore {
    let Some(found) = summary else {
        return DimensionScore::new(policy.neutral_score, "Synergy database not available");
    };
    if found.pair_count == 0 {
        return DimensionScore::new(
            policy.neutral_score,
            "No known synergies between these cards",
        );
    }

    let blend =
        policy.average_weight * found.average_strength + policy.coverage_weight * found.coverage;
    let score = bounded(blend * deckgrade_core::MAX_SCORE);
    DimensionScore::new(score, assessment(score))
}

fn assessment(score: f64) -> &'static str {
    if score >= 8.0 {
        "Excellent card synergies with multiple strong combinations"
    } else if score >= 6.0 {
        "Good synergy between cards"
    } else if score >= 4.0 {
        "Moderate synergy, some cards work well together"
    } else {
        "Poor synergy, cards don't complement each other well"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgrade_core::test_support::{FixedSynergyLookup, hog_cycle_deck};

    #[test]
    fn missing_lookup_is_neutral() {
        let score = score_synergy(&hog_cycle_deck(), None);
        assert_eq!(score.score, 5.0);
        assert_eq!(score.assessment, "Synergy database not available");
    }

    #[test]
    fn deck_without_known_pairs_gets_neutral_floor() {
        let lookup = FixedSynergyLookup::new();
        let score = score_synergy(&hog_cycle_deck(), Some(&lookup));
        assert_eq!(score.score, 5.0);
        assert_eq!(score.assessment, "No known synergies between these cards");
    }

    #[test]
    fn empty_deck_scores_zero_even_with_lookup() {
        let lookup = FixedSynergyLookup::new();
        let score = score_synergy(&[], Some(&lookup));
        assert_eq!(score.score, 0.0);
        assert_eq!(score.assessment, "No cards in deck");
    }

    #[test]
    fn blends_average_strength_with_coverage() {
        let lookup = FixedSynergyLookup::new()
            .with_pair("Hog Rider", "Fireball", 0.8)
            .with_pair("Ice Spirit", "Hog Rider", 0.6);
        let summary = summarise_synergy(&hog_cycle_deck(), &lookup);
        assert_eq!(summary.pair_count, 2);
        assert_eq!(summary.max_pairs, 28);
        assert!((summary.average_strength - 0.7).abs() < 1e-9);
        assert_eq!(
            summary.top_pairs.first().map(|pair| pair.second.as_str()),
            Some("Fireball")
        );
        assert_eq!(summary.unpaired_cards.len(), 5);

        // 10 * (0.75 * 0.7 + 0.25 * 2 / 28)
        let score = score_synergy(&hog_cycle_deck(), Some(&lookup));
        assert!((score.score - 5.4).abs() < 1e-9, "score was {}", score.score);
        assert_eq!(
            score.assessment,
            "Moderate synergy, some cards work well together"
        );
    }

    #[test]
    fn out_of_range_strength_is_clamped() {
        let lookup = FixedSynergyLookup::new().with_pair("Hog Rider", "Fireball", 7.0);
        let summary = summarise_synergy(&hog_cycle_deck(), &lookup);
        assert_eq!(summary.average_strength, 1.0);
    }

    #[test]
    fn top_pairs_are_capped() {
        let deck = hog_cycle_deck();
        let lookup = deck
            .iter()
            .skip(1)
            .fold(FixedSynergyLookup::new(), |lookup, card| {
                lookup.with_pair("Hog Rider", &card.name, 0.5)
            });
        let summary = summarise_synergy(&deck, &lookup);
        assert_eq!(summary.pair_count, 7);
        assert_eq!(summary.top_pairs.len(), TOP_PAIR_LIMIT);
        assert!(summary.unpaired_cards.is_empty());
    }

    #[test]
    fn categories_are_counted_across_every_pair() {
        let deck = hog_cycle_deck();
        let lookup = deck
            .iter()
            .skip(1)
            .fold(FixedSynergyLookup::new(), |lookup, card| {
                lookup.with_categorised_pair("Hog Rider", &card.name, 0.5, "cycle")
            })
            .with_categorised_pair("Musketeer", "Cannon", 0.7, "defensive")
            .with_pair("Fireball", "The Log", 0.4);
        let summary = summarise_synergy(&deck, &lookup);

        assert_eq!(summary.pair_count, 9);
        assert_eq!(summary.category_counts.get("cycle"), Some(&7));
        assert_eq!(summary.category_counts.get("defensive"), Some(&1));
        assert_eq!(summary.category_counts.len(), 2);
        let strongest = summary.top_pairs.first();
        assert_eq!(
            strongest.and_then(|pair| pair.category.as_deref()),
            Some("defensive")
        );
    }
}
