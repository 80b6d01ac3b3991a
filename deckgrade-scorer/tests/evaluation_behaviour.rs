#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for full deck evaluation.

use std::cell::RefCell;

use deckgrade_core::test_support::{FixedOwnership, ground_only_deck, hog_cycle_deck};
use deckgrade_core::{Archetype, Card, Rarity};
use deckgrade_scorer::{EvaluationResult, evaluate, score_f2p};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate state shared across the steps of one scenario.
struct TestContext {
    deck: RefCell<Vec<Card>>,
    ownership: RefCell<Option<FixedOwnership>>,
    result: RefCell<Option<EvaluationResult>>,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        deck: RefCell::new(Vec::new()),
        ownership: RefCell::new(None),
        result: RefCell::new(None),
    }
}

fn with_result<T>(context: &TestContext, read: impl FnOnce(&EvaluationResult) -> T) -> T {
    let result = context.result.borrow();
    read(result.as_ref().expect("deck should have been evaluated"))
}

#[given("the hog cycle deck")]
fn hog_cycle(context: &TestContext) {
    *context.deck.borrow_mut() = hog_cycle_deck();
}

#[given("a ground-only deck without buildings")]
fn ground_only(context: &TestContext) {
    *context.deck.borrow_mut() = ground_only_deck();
}

#[given("the hog cycle deck with three extra legendaries")]
fn legendary_heavy(context: &TestContext) {
    let mut deck = hog_cycle_deck();
    for card in deck.iter_mut().take(3) {
        card.rarity = Rarity::Legendary;
    }
    *context.deck.borrow_mut() = deck;
}

#[given("an empty deck")]
fn empty_deck(context: &TestContext) {
    context.deck.borrow_mut().clear();
}

#[given("a collection missing the Cannon and locking The Log")]
fn partial_collection(context: &TestContext) {
    let ownership = FixedOwnership::owning_all(&context.deck.borrow())
        .without("Cannon")
        .locked("The Log");
    *context.ownership.borrow_mut() = Some(ownership);
}

#[when("I evaluate the deck without collaborators")]
fn evaluate_bare(context: &TestContext) {
    let result = evaluate(&context.deck.borrow(), None, None);
    *context.result.borrow_mut() = Some(result);
}

#[when("I evaluate the deck with the collection")]
fn evaluate_with_collection(context: &TestContext) {
    let ownership = context.ownership.borrow();
    let collection = ownership.as_ref().expect("collection should be configured");
    let result = evaluate(&context.deck.borrow(), None, Some(collection));
    *context.result.borrow_mut() = Some(result);
}

#[then("the primary archetype is cycle")]
fn primary_is_cycle(context: &TestContext) {
    let primary = with_result(context, |result| result.archetype.primary);
    assert_eq!(primary, Archetype::Cycle);
}

#[then("the primary archetype is unknown")]
fn primary_is_unknown(context: &TestContext) {
    let primary = with_result(context, |result| result.archetype.primary);
    assert_eq!(primary, Archetype::Unknown);
}

#[then("the primary confidence is at least one half")]
fn confident_primary(context: &TestContext) {
    let confidence = with_result(context, |result| result.archetype.primary_confidence);
    assert!(confidence >= 0.5, "confidence was {confidence}");
}

#[then("the deck is not reported as a hybrid")]
fn not_hybrid(context: &TestContext) {
    assert!(!with_result(context, |result| result.archetype.is_hybrid));
}

#[then("the defense score is at most 3.0")]
fn weak_defense(context: &TestContext) {
    let score = with_result(context, |result| result.defense.score);
    assert!(score <= 3.0, "defense was {score}");
}

#[then("the defense assessment warns about missing anti-air")]
fn anti_air_warning(context: &TestContext) {
    let assessment = with_result(context, |result| result.defense.assessment.clone());
    assert!(assessment.contains("no anti-air defense"), "{assessment}");
}

#[then("the F2P score is below that of the unchanged hog cycle deck")]
fn f2p_below_baseline(context: &TestContext) {
    let score = with_result(context, |result| result.f2p.score);
    let baseline = score_f2p(&hog_cycle_deck()).score;
    assert!(score < baseline, "{score} should be below {baseline}");
}

#[then("the synergy score is 5.0")]
fn neutral_synergy(context: &TestContext) {
    let score = with_result(context, |result| result.synergy.score);
    assert_eq!(score, 5.0);
}

#[then("the synergy assessment says the database is not available")]
fn synergy_unavailable(context: &TestContext) {
    let assessment = with_result(context, |result| result.synergy.assessment.clone());
    assert_eq!(assessment, "Synergy database not available");
}

#[then("the playability score is 5.5")]
fn reduced_playability(context: &TestContext) {
    let score = with_result(context, |result| result.playability.score);
    assert_eq!(score, 5.5);
}

#[then("the missing cards report lists 2 cards")]
fn two_missing(context: &TestContext) {
    let missing = with_result(context, |result| {
        result
            .missing_cards
            .as_ref()
            .map(|report| report.missing.len())
    });
    assert_eq!(missing, Some(2));
}

#[then("every dimension scores zero")]
fn all_zero(context: &TestContext) {
    with_result(context, |result| {
        for (dimension, score) in result.dimensions() {
            assert_eq!(score.score, 0.0, "{dimension} should be zero");
        }
        assert_eq!(result.overall_score, 0.0);
    });
}

#[then("the cycle analysis calls the deck a fast cycle deck")]
fn fast_cycle_analysis(context: &TestContext) {
    let summary = with_result(context, |result| result.analysis.cycle.summary.clone());
    assert_eq!(summary, "Fast cycle deck with excellent rotation speed");
}

#[then("the bait analysis reports no bait potential")]
fn no_bait_potential(context: &TestContext) {
    let (score, summary) = with_result(context, |result| {
        (result.analysis.bait.score, result.analysis.bait.summary.clone())
    });
    assert_eq!(score, 0.0);
    assert_eq!(summary, "Not a bait-focused deck");
}

#[scenario(path = "tests/features/evaluation.feature", index = 0)]
fn hog_cycle_is_cycle(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 1)]
fn ground_only_defends_poorly(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 2)]
fn legendaries_lower_f2p(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 3)]
fn missing_synergy_database_is_neutral(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 4)]
fn missing_cards_lower_playability(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 5)]
fn empty_deck_scores_zero(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 6)]
fn analysis_explains_fast_cycle(context: TestContext) {
    let _ = context;
}
