//! Unit tests for archetype classification.

use super::*;
use deckgrade_core::test_support::{card, golem_beatdown_deck, hog_cycle_deck};
use deckgrade_core::{Rarity, Role};
use rstest::{fixture, rstest};

fn deck_of(cards: &[(&str, Role, u32)]) -> Vec<Card> {
    cards
        .iter()
        .map(|&(name, role, elixir)| card(name, role, elixir, Rarity::Common, None))
        .collect()
}

#[fixture]
fn miner_cycle_deck() -> Vec<Card> {
    deck_of(&[
        ("Miner", Role::WinCondition, 3),
        ("Poison", Role::SpellBig, 4),
        ("Valkyrie", Role::Support, 4),
        ("Electro Wizard", Role::Support, 4),
        ("Ice Golem", Role::Cycle, 2),
        ("Skeletons", Role::Cycle, 1),
        ("Ice Spirit", Role::Cycle, 1),
        ("Hog Rider", Role::WinCondition, 4),
    ])
}

#[fixture]
fn bait_graveyard_deck() -> Vec<Card> {
    deck_of(&[
        ("Graveyard", Role::WinCondition, 5),
        ("Goblin Barrel", Role::WinCondition, 3),
        ("Princess", Role::Support, 3),
        ("Goblin Gang", Role::Cycle, 3),
        ("Ice Wizard", Role::Support, 3),
        ("Baby Dragon", Role::Support, 4),
        ("Poison", Role::SpellBig, 4),
        ("Zap", Role::SpellSmall, 2),
    ])
}

#[test]
fn empty_deck_is_unknown() {
    let result = classify_archetype(&[]);
    assert_eq!(result, ArchetypeClassification::unknown());
}

#[test]
fn hog_cycle_deck_is_cycle() {
    let result = classify_archetype(&hog_cycle_deck());
    assert_eq!(result.primary, Archetype::Cycle);
    assert!(result.primary_confidence >= 0.9);
    assert_eq!(result.secondary, Archetype::Control);
    assert!(!result.is_hybrid);
}

#[test]
fn golem_deck_is_beatdown() {
    let result = classify_archetype(&golem_beatdown_deck());
    assert_eq!(result.primary, Archetype::Beatdown);
    assert_eq!(result.primary_confidence, 1.0);
}

#[rstest]
fn distinct_strong_fits_are_hybrid(bait_graveyard_deck: Vec<Card>) {
    let result = classify_archetype(&bait_graveyard_deck);
    assert!(result.is_hybrid);
    assert_eq!(result.primary, Archetype::Hybrid);
    assert_eq!(result.best_fit, Archetype::Bait);
    assert_eq!(result.secondary, Archetype::Graveyard);
    assert!((result.primary_score - 8.75).abs() < 1e-9);
    assert!((result.secondary_score - 7.8).abs() < 1e-9);
}

#[rstest]
fn ties_go_to_the_earlier_template(miner_cycle_deck: Vec<Card>) {
    let result = classify_archetype(&miner_cycle_deck);
    assert_eq!(result.primary_score, result.secondary_score);
    assert_eq!(result.best_fit, Archetype::Cycle);
    assert_eq!(result.secondary, Archetype::Miner);
}

#[rstest]
fn related_fits_are_not_hybrid(miner_cycle_deck: Vec<Card>) {
    let result = classify_archetype(&miner_cycle_deck);
    assert!(!result.is_hybrid);
    assert_eq!(result.primary, Archetype::Cycle);
}

#[rstest]
fn without_related_pairs_the_same_deck_is_hybrid(miner_cycle_deck: Vec<Card>) {
    let classifier =
        ArchetypeClassifier::new(&ARCHETYPE_TEMPLATES, &[], ClassifierPolicy::default());
    let result = classifier.classify(&miner_cycle_deck);
    assert!(result.is_hybrid);
    assert_eq!(result.primary, Archetype::Hybrid);
}

#[test]
fn weak_fit_is_unknown() {
    let deck: Vec<Card> = (0..8)
        .map(|index| Card::new(format!("Filler {index}"), 6, Rarity::Common))
        .collect();
    let result = classify_archetype(&deck);
    assert_eq!(result.primary, Archetype::Unknown);
    assert_eq!(result.best_fit, Archetype::Beatdown);
    assert!(result.primary_confidence < 0.3);
    assert!(!result.is_hybrid);
}

#[test]
fn custom_template_table_is_honoured() {
    static SPARKY: [ArchetypeTemplate; 1] = [ArchetypeTemplate {
        archetype: Archetype::Bridge,
        signature: Some(Signature {
            cards: &[SignatureCard {
                name: "Sparky",
                credit: 10.0,
            }],
            required: true,
            weight: 1.0,
        }),
        counts: &[],
        elixir: None,
    }];
    let classifier = ArchetypeClassifier::new(&SPARKY, &[], ClassifierPolicy::default());
    let deck = [Card::new("Sparky", 6, Rarity::Legendary)];
    let result = classifier.classify(&deck);
    assert_eq!(result.primary, Archetype::Bridge);
    assert_eq!(result.secondary, Archetype::Unknown);
    assert_eq!(result.secondary_confidence, 0.0);
}

#[rstest]
fn unknown_threshold_overrides_hybrid(bait_graveyard_deck: Vec<Card>) {
    let policy = ClassifierPolicy {
        unknown_below: 0.9,
        ..ClassifierPolicy::default()
    };
    let result = ArchetypeClassifier::default()
        .with_policy(policy)
        .classify(&bait_graveyard_deck);
    assert_eq!(result.primary, Archetype::Unknown);
    assert_eq!(result.best_fit, Archetype::Bait);
    assert!(!result.is_hybrid);
}
