//! Behavioural coverage for archetype classification.

use std::cell::RefCell;

use deckgrade_core::test_support::card;
use deckgrade_core::{Archetype, Card, Rarity, Role};
use deckgrade_scorer::{ArchetypeClassification, classify_archetype};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Deck under test and its classification.
struct TestContext {
    deck: RefCell<Vec<Card>>,
    classification: RefCell<ArchetypeClassification>,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        deck: RefCell::new(Vec::new()),
        classification: RefCell::new(ArchetypeClassification::unknown()),
    }
}

fn set_deck(context: &TestContext, cards: &[(&str, Role, u32)]) {
    *context.deck.borrow_mut() = cards
        .iter()
        .map(|&(name, role, elixir)| card(name, role, elixir, Rarity::Common, None))
        .collect();
}

#[given("a deck mixing Goblin Barrel bait with Graveyard")]
fn bait_graveyard(context: &TestContext) {
    set_deck(
        context,
        &[
            ("Graveyard", Role::WinCondition, 5),
            ("Goblin Barrel", Role::WinCondition, 3),
            ("Princess", Role::Support, 3),
            ("Goblin Gang", Role::Cycle, 3),
            ("Ice Wizard", Role::Support, 3),
            ("Baby Dragon", Role::Support, 4),
            ("Poison", Role::SpellBig, 4),
            ("Zap", Role::SpellSmall, 2),
        ],
    );
}

#[given("a deck mixing Miner with Hog Rider cycle")]
fn miner_cycle(context: &TestContext) {
    set_deck(
        context,
        &[
            ("Miner", Role::WinCondition, 3),
            ("Poison", Role::SpellBig, 4),
            ("Valkyrie", Role::Support, 4),
            ("Electro Wizard", Role::Support, 4),
            ("Ice Golem", Role::Cycle, 2),
            ("Skeletons", Role::Cycle, 1),
            ("Ice Spirit", Role::Cycle, 1),
            ("Hog Rider", Role::WinCondition, 4),
        ],
    );
}

#[given("a deck of expensive filler cards")]
fn filler(context: &TestContext) {
    *context.deck.borrow_mut() = (0..8)
        .map(|index| Card::new(format!("Filler {index}"), 6, Rarity::Common))
        .collect();
}

#[when("I classify the deck")]
fn classify(context: &TestContext) {
    let classification = classify_archetype(&context.deck.borrow());
    *context.classification.borrow_mut() = classification;
}

#[then("the deck is reported as a hybrid")]
fn is_hybrid(context: &TestContext) {
    let classification = context.classification.borrow();
    assert!(classification.is_hybrid);
    assert_eq!(classification.primary, Archetype::Hybrid);
}

#[then("the deck is not reported as a hybrid")]
fn is_not_hybrid(context: &TestContext) {
    assert!(!context.classification.borrow().is_hybrid);
}

#[then("the best fit is bait with graveyard second")]
fn bait_then_graveyard(context: &TestContext) {
    let classification = context.classification.borrow();
    assert_eq!(classification.best_fit, Archetype::Bait);
    assert_eq!(classification.secondary, Archetype::Graveyard);
}

#[then("the primary archetype is cycle")]
fn primary_cycle(context: &TestContext) {
    assert_eq!(context.classification.borrow().primary, Archetype::Cycle);
}

#[then("the primary archetype is unknown")]
fn primary_unknown(context: &TestContext) {
    assert_eq!(context.classification.borrow().primary, Archetype::Unknown);
}

#[scenario(path = "tests/features/archetype.feature", index = 0)]
fn unrelated_strong_fits_are_hybrid(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/archetype.feature", index = 1)]
fn related_fits_are_not_hybrid(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/archetype.feature", index = 2)]
fn filler_deck_is_unknown(context: TestContext) {
    let _ = context;
}
