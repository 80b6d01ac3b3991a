#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the synergy database and player collection.

use std::cell::RefCell;

use deckgrade_core::{Card, OwnershipContext, SynergyLookup};
use deckgrade_core::test_support::hog_cycle_deck;
use deckgrade_data::{ArenaUnlockTable, PlayerCollection, SynergyDatabase};
use deckgrade_scorer::{EvaluationResult, evaluate};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SYNERGY_JSON: &str = r#"{
    "version": 1,
    "pairs": [
        {"card1": "Hog Rider", "card2": "Fireball", "category": "spell-combo",
         "score": 0.8, "description": "Fireball clears the defenders Hog Rider draws"},
        {"card1": "Ice Spirit", "card2": "Hog Rider", "category": "cycle", "score": 0.6},
        {"card1": "Giant", "card2": "Witch", "category": "tank-support", "score": 0.9}
    ]
}"#;

struct TestContext {
    deck: RefCell<Vec<Card>>,
    database: RefCell<Option<SynergyDatabase>>,
    collection: RefCell<Option<PlayerCollection>>,
    result: RefCell<Option<EvaluationResult>>,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        deck: RefCell::new(Vec::new()),
        database: RefCell::new(None),
        collection: RefCell::new(None),
        result: RefCell::new(None),
    }
}

fn with_result<T>(context: &TestContext, read: impl FnOnce(&EvaluationResult) -> T) -> T {
    let result = context.result.borrow();
    read(result.as_ref().expect("deck should have been evaluated"))
}

fn player_without_cannon_and_log(context: &TestContext, arena: u32) {
    let owned = context
        .deck
        .borrow()
        .iter()
        .map(|card| card.name.clone())
        .filter(|name| name != "Cannon" && name != "The Log")
        .collect::<Vec<_>>();
    let collection = PlayerCollection::new(arena, ArenaUnlockTable::standard()).with_cards(owned);
    *context.collection.borrow_mut() = Some(collection);
}

#[given("the hog cycle deck")]
fn hog_cycle(context: &TestContext) {
    *context.deck.borrow_mut() = hog_cycle_deck();
}

#[given("a synergy database loaded from JSON")]
fn database_from_json(context: &TestContext) {
    let database = SynergyDatabase::from_json_str(SYNERGY_JSON).expect("fixture json is valid");
    *context.database.borrow_mut() = Some(database);
}

#[given("a player at arena 3 without the Cannon or The Log")]
fn early_player(context: &TestContext) {
    player_without_cannon_and_log(context, 3);
}

#[given("a player at arena 0 without the Cannon or The Log")]
fn unrestricted_player(context: &TestContext) {
    player_without_cannon_and_log(context, 0);
}

#[when("I evaluate the deck with the collaborators")]
fn evaluate_with_collaborators(context: &TestContext) {
    let database = context.database.borrow();
    let collection = context.collection.borrow();
    let result = evaluate(
        &context.deck.borrow(),
        database.as_ref().map(|db| db as &dyn SynergyLookup),
        collection.as_ref().map(|owned| owned as &dyn OwnershipContext),
    );
    *context.result.borrow_mut() = Some(result);
}

#[then("the synergy score is 5.4")]
fn synergy_score(context: &TestContext) {
    let score = with_result(context, |result| result.synergy.score);
    assert!((score - 5.4).abs() < 1e-9, "synergy was {score}");
}

#[then("the strongest pair is Hog Rider with Fireball")]
fn strongest_pair(context: &TestContext) {
    let pair = with_result(context, |result| {
        result
            .synergy_summary
            .as_ref()
            .and_then(|summary| summary.top_pairs.first())
            .map(|top| (top.first.clone(), top.second.clone()))
    });
    assert_eq!(pair, Some(("Hog Rider".to_owned(), "Fireball".to_owned())));
}

#[then("the summary counts one spell-combo pair and one cycle pair")]
fn category_counts(context: &TestContext) {
    let counts = with_result(context, |result| {
        result
            .synergy_summary
            .as_ref()
            .map(|summary| summary.category_counts.clone())
    })
    .expect("database should produce a summary");
    assert_eq!(counts.get("spell-combo"), Some(&1));
    assert_eq!(counts.get("cycle"), Some(&1));
    assert_eq!(counts.len(), 2);
}

#[then("the playability score is 5.5")]
fn playability_partial(context: &TestContext) {
    let score = with_result(context, |result| result.playability.score);
    assert!((score - 5.5).abs() < 1e-9, "playability was {score}");
}

#[then("the playability score is 6.5")]
fn playability_unrestricted(context: &TestContext) {
    let score = with_result(context, |result| result.playability.score);
    assert!((score - 6.5).abs() < 1e-9, "playability was {score}");
}

#[then("The Log is reported as locked until arena 6")]
fn log_locked(context: &TestContext) {
    let log = with_result(context, |result| {
        result
            .missing_cards
            .as_ref()
            .and_then(|report| report.missing.iter().find(|card| card.name == "The Log"))
            .map(|card| (card.locked, card.unlock_arena))
    });
    assert_eq!(log, Some((true, Some(6))));
}

#[then("the Cannon is listed first among the missing cards")]
fn cannon_first(context: &TestContext) {
    let first = with_result(context, |result| {
        result
            .missing_cards
            .as_ref()
            .and_then(|report| report.missing.first())
            .map(|card| card.name.clone())
    });
    assert_eq!(first.as_deref(), Some("Cannon"));
}

#[then("no missing card is locked")]
fn nothing_locked(context: &TestContext) {
    let report = with_result(context, |result| result.missing_cards.clone())
        .expect("collection should produce a report");
    assert_eq!(report.missing.len(), 2);
    assert_eq!(report.locked_count(), 0);
}

#[scenario(path = "tests/features/collaborators.feature", index = 0)]
fn json_database_raises_synergy(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/collaborators.feature", index = 1)]
fn arena_progress_locks_cards(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/collaborators.feature", index = 2)]
fn arena_zero_lifts_restrictions(context: TestContext) {
    let _ = context;
}
