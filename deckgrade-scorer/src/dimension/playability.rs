//! Playability of a deck for a specific player's collection.

use deckgrade_core::{Card, CardAvailability, DimensionScore, OwnershipContext, Rarity};
use serde::{Deserialize, Serialize};

use super::bounded;
use crate::PlayabilityPolicy;

/// A deck card the player does not own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCard {
    /// Card name.
    pub name: String,
    /// Card rarity.
    pub rarity: Rarity,
    /// Whether progression still locks the card.
    pub locked: bool,
    /// Arena unlocking the card, when known.
    pub unlock_arena: Option<u32>,
    /// Owned cards that fill a similar slot, in suggestion order.
    pub alternatives: Vec<String>,
}

/// Cards that commonly stand in for one another.
pub const CARD_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("Knight", &["Valkyrie", "Ice Golem", "Dark Prince"]),
    ("Hog Rider", &["Ram Rider", "Battle Ram", "Royal Hogs"]),
    ("Fireball", &["Poison", "Lightning", "Rocket"]),
    ("Zap", &["The Log", "Arrows", "Giant Snowball"]),
    ("Musketeer", &["Hunter", "Magic Archer", "Flying Machine"]),
    ("Mega Minion", &["Minions", "Bats", "Minion Horde"]),
    ("Ice Spirit", &["Fire Spirit", "Heal Spirit", "Electro Spirit"]),
    ("Tesla", &["Cannon", "Inferno Tower", "Bomb Tower"]),
    ("Prince", &["Dark Prince", "Mini P.E.K.K.A", "Valkyrie"]),
    ("Goblin Gang", &["Skeleton Army", "Guards", "Rascals"]),
    ("Balloon", &["Lava Hound", "Giant", "Golem"]),
    ("Wizard", &["Executioner", "Baby Dragon", "Witch"]),
    ("Giant", &["Golem", "Royal Giant", "Goblin Giant"]),
    ("P.E.K.K.A", &["Mega Knight", "Golem", "Giant Skeleton"]),
    ("Electro Wizard", &["Ice Wizard", "Witch", "Mother Witch"]),
];

fn owned_alternatives(card: &str, ownership: &dyn OwnershipContext) -> Vec<String> {
    CARD_ALTERNATIVES
        .iter()
        .find(|(name, _)| *name == card)
        .map(|(_, similar)| {
            similar
                .iter()
                .filter(|candidate| ownership.availability(candidate).is_owned())
                .map(|candidate| (*candidate).to_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// Cards of a deck missing from a player's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCardsReport {
    /// Number of deck cards the player owns.
    pub available_count: u32,
    /// Missing cards ordered by unlock arena, unknown arenas first.
    pub missing: Vec<MissingCard>,
}

impl MissingCardsReport {
    /// Whether every deck card is owned.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing cards still locked by progression.
    #[must_use]
    pub fn locked_count(&self) -> u32 {
        count(self.missing.iter().filter(|card| card.locked))
    }

    /// Number of missing cards the player could already obtain.
    #[must_use]
    pub fn obtainable_count(&self) -> u32 {
        count(self.missing.iter().filter(|card| !card.locked))
    }

    /// Missing cards with at least one owned alternative, paired with those
    /// alternatives.
    pub fn suggested_replacements(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.missing
            .iter()
            .filter(|card| !card.alternatives.is_empty())
            .map(|card| (card.name.as_str(), card.alternatives.as_slice()))
    }
}

fn count<T>(items: impl Iterator<Item = T>) -> u32 {
    u32::try_from(items.count()).unwrap_or(u32::MAX)
}

/// Compare `deck` against a player's collection.
///
/// Each missing card lists the owned cards from [`CARD_ALTERNATIVES`] that
/// could take its place.
#[must_use]
pub fn missing_cards(deck: &[Card], ownership: &dyn OwnershipContext) -> MissingCardsReport {
    let mut report = MissingCardsReport::default();
    for card in deck {
        match ownership.availability(&card.name) {
            CardAvailability::Owned => report.available_count += 1,
            CardAvailability::Missing {
                locked,
                unlock_arena,
            } => report.missing.push(MissingCard {
                name: card.name.clone(),
                rarity: card.rarity,
                locked,
                unlock_arena,
                alternatives: owned_alternatives(&card.name, ownership),
            }),
        }
    }
    report
        .missing
        .sort_by_key(|card| card.unlock_arena.unwrap_or_default());
    report
}

/// Score playability with the default [`PlayabilityPolicy`].
///
/// Without an ownership context every card is assumed owned and the deck
/// scores `10.0`.
#[must_use]
pub fn score_playability(
    deck: &[Card],
    ownership: Option<&dyn OwnershipContext>,
) -> DimensionScore {
    score_playability_with(deck, ownership, &PlayabilityPolicy::default())
}

/// Score playability with explicit penalties.
#[must_use]
pub fn score_playability_with(
    deck: &[Card],
    ownership: Option<&dyn OwnershipContext>,
    policy: &PlayabilityPolicy,
) -> DimensionScore {
    if deck.is_empty() {
        return DimensionScore::empty_deck();
    }
    let report = ownership.map(|context| missing_cards(deck, context));
    playability_from_report(deck.len(), report.as_ref(), policy)
}

pub(crate) fn playability_from_report(
    deck_len: usize,
    report: Option<&MissingCardsReport>,
    policy: &PlayabilityPolicy,
) -> DimensionScore {
    let Some(analysis) = report else {
        return DimensionScore::new(
            deckgrade_core::MAX_SCORE,
            "Player context not available - assuming all cards owned",
        );
    };
    let deck_count = u32::try_from(deck_len).unwrap_or(u32::MAX);
    if deck_count == 0 {
        return DimensionScore::empty_deck();
    }

    let owned_fraction = f64::from(analysis.available_count) / f64::from(deck_count);
    let penalty = policy.locked_penalty * f64::from(analysis.locked_count())
        + policy.unlocked_penalty * f64::from(analysis.obtainable_count());
    let score = bounded(owned_fraction * deckgrade_core::MAX_SCORE - penalty);
    DimensionScore::new(score, assessment(analysis, score))
}

fn assessment(report: &MissingCardsReport, score: f64) -> String {
    if report.is_playable() {
        return "All cards available - deck is fully playable".to_owned();
    }
    let locked = report.locked_count();
    let obtainable = report.obtainable_count();
    if score >= 8.0 {
        format!(
            "Mostly playable - only {} card(s) missing",
            report.missing.len()
        )
    } else if score >= 5.0 {
        if locked > 0 {
            format!(
                "Partially playable - {locked} card(s) locked by arena, {obtainable} obtainable"
            )
        } else {
            format!("Partially playable - {obtainable} card(s) need to be obtained")
        }
    } else if locked > 0 {
        format!("Not playable - {locked} card(s) locked by arena progression")
    } else {
        format!(
            "Not playable - {} card(s) missing from collection",
            report.missing.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgrade_core::test_support::{FixedOwnership, hog_cycle_deck};
    use rstest::rstest;

    #[test]
    fn absent_context_assumes_full_collection() {
        let score = score_playability(&hog_cycle_deck(), None);
        assert_eq!(score.score, 10.0);
    }

    #[test]
    fn owning_everything_is_fully_playable() {
        let deck = hog_cycle_deck();
        let ownership = FixedOwnership::owning_all(&deck);
        let score = score_playability(&deck, Some(&ownership));
        assert_eq!(score.score, 10.0);
        assert_eq!(score.assessment, "All cards available - deck is fully playable");
    }

    #[rstest]
    // 7/8 * 10 - 0.5
    #[case(
        FixedOwnership::owning_all(&hog_cycle_deck()).without("Cannon"),
        8.3,
        "Mostly playable - only 1 card(s) missing"
    )]
    // 6/8 * 10 - 1.5 - 0.5
    #[case(
        FixedOwnership::owning_all(&hog_cycle_deck()).without("Cannon").locked("The Log"),
        5.5,
        "Partially playable - 1 card(s) locked by arena, 1 obtainable"
    )]
    // 5/8 * 10 - 4.5
    #[case(
        FixedOwnership::owning_all(&hog_cycle_deck())
            .locked("The Log")
            .locked("Ice Spirit")
            .locked("Hog Rider"),
        1.8,
        "Not playable - 3 card(s) locked by arena progression"
    )]
    fn missing_cards_reduce_playability(
        #[case] ownership: FixedOwnership,
        #[case] expected: f64,
        #[case] assessment: &str,
    ) {
        let score = score_playability(&hog_cycle_deck(), Some(&ownership));
        assert!((score.score - expected).abs() < 1e-9, "score was {}", score.score);
        assert_eq!(score.assessment, assessment);
    }

    #[test]
    fn report_lists_missing_cards() {
        let deck = hog_cycle_deck();
        let ownership = FixedOwnership::owning_all(&deck)
            .without("Cannon")
            .locked("The Log");
        let report = missing_cards(&deck, &ownership);
        assert_eq!(report.available_count, 6);
        assert_eq!(report.locked_count(), 1);
        assert_eq!(report.obtainable_count(), 1);
        assert!(!report.is_playable());
    }

    #[test]
    fn missing_cards_list_owned_alternatives() {
        let deck = hog_cycle_deck();
        let ownership = FixedOwnership::owning_all(&deck)
            .without("Hog Rider")
            .without("Cannon")
            .owning("Battle Ram")
            .owning("Royal Hogs");
        let report = missing_cards(&deck, &ownership);

        let hog = report.missing.iter().find(|card| card.name == "Hog Rider");
        assert_eq!(
            hog.map(|card| card.alternatives.clone()),
            Some(vec!["Battle Ram".to_owned(), "Royal Hogs".to_owned()])
        );
        let replacements: Vec<_> = report.suggested_replacements().collect();
        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements.first().map(|(name, _)| *name), Some("Hog Rider"));
    }
}
