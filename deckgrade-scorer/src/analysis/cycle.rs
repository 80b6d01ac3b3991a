//! Cycle section: how quickly a deck returns to its key cards.

use std::collections::BTreeMap;

use deckgrade_core::{Card, Role, average_elixir};

use super::{AnalysisSection, card_list};

const TITLE: &str = "Cycle Analysis";

const SPEED_WEIGHT: f64 = 0.4;
const LOW_COST_WEIGHT: f64 = 0.35;
const SHORTEST_CYCLE_WEIGHT: f64 = 0.25;

const LOW_COST_ELIXIR: u32 = 2;
const CYCLE_LENGTH: usize = 4;
/// Seconds of play per point of average elixir, for rotation estimates.
const SECONDS_PER_ELIXIR: f64 = 3.5;

/// Total elixir of the four cheapest cards, or `None` for decks of fewer
/// than four cards.
///
/// # Examples
///
/// ```
/// use deckgrade_core::{Card, Rarity};
/// use deckgrade_scorer::shortest_cycle;
///
/// let deck: Vec<Card> = [1, 5, 2, 3, 4]
///     .into_iter()
///     .map(|cost| Card::new(format!("card {cost}"), cost, Rarity::Common))
///     .collect();
/// assert_eq!(shortest_cycle(&deck), Some(10));
/// assert_eq!(shortest_cycle(&deck[..3]), None);
/// ```
#[must_use]
pub fn shortest_cycle(deck: &[Card]) -> Option<u32> {
    if deck.len() < CYCLE_LENGTH {
        return None;
    }
    let mut costs: Vec<u32> = deck.iter().map(|card| card.elixir).collect();
    costs.sort_unstable();
    Some(costs.iter().take(CYCLE_LENGTH).sum())
}

fn speed_score(average: f64) -> f64 {
    if average < 3.0 {
        10.0
    } else if average < 3.3 {
        9.0
    } else if average < 3.6 {
        7.0
    } else if average < 4.0 {
        5.0
    } else {
        3.0
    }
}

fn low_cost_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 2.0,
        2 => 4.0,
        3 => 7.0,
        _ => 10.0,
    }
}

fn shortest_cycle_score(total: Option<u32>) -> f64 {
    match total {
        Some(0..=6) => 10.0,
        Some(7..=8) => 7.0,
        Some(9..=10) => 4.0,
        _ => 2.0,
    }
}

fn cycle_score(average: f64, low_cost: usize, shortest: Option<u32>) -> f64 {
    SPEED_WEIGHT * speed_score(average)
        + LOW_COST_WEIGHT * low_cost_score(low_cost)
        + SHORTEST_CYCLE_WEIGHT * shortest_cycle_score(shortest)
}

/// Measure how fast a deck cycles.
#[must_use]
pub fn cycle_analysis(deck: &[Card]) -> AnalysisSection {
    if deck.is_empty() {
        return AnalysisSection::empty_deck(TITLE);
    }

    let average = average_elixir(deck);
    let low_cost: Vec<&Card> = deck
        .iter()
        .filter(|card| card.elixir <= LOW_COST_ELIXIR)
        .collect();
    let shortest = shortest_cycle(deck);
    let score = cycle_score(average, low_cost.len(), shortest);

    let speed = if average < 3.0 {
        "Fast"
    } else if average < 3.6 {
        "Medium"
    } else {
        "Slow"
    };
    let mut details = vec![format!("Average elixir: {average:.1} ({speed} Cycle)")];

    if !low_cost.is_empty() {
        details.push(format!(
            "Cycle cards ({}): {}",
            low_cost.len(),
            card_list(low_cost.iter().copied())
        ));
    }

    if let Some(total) = shortest {
        let rotation = match total {
            0..=6 => "excellent rotation",
            7..=8 => "good rotation",
            _ => "poor rotation",
        };
        details.push(format!("Shortest 4-card cycle: {total} elixir ({rotation})"));
    }

    if let Some(win_condition) = deck.iter().find(|card| card.has_role(Role::WinCondition)) {
        let seconds = (average * SECONDS_PER_ELIXIR).floor();
        details.push(format!(
            "Rotation estimate: Can return to {} in ~{seconds:.0} seconds",
            win_condition.name
        ));
    }

    let mut curve: BTreeMap<u32, usize> = BTreeMap::new();
    for card in deck {
        *curve.entry(card.elixir).or_default() += 1;
    }
    let distribution = curve
        .iter()
        .map(|(cost, count)| format!("{cost}-cost ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    details.push(format!("Elixir curve: {distribution}"));

    if average < 3.2 {
        details.push("Tempo: Constant pressure through rapid cycling".to_owned());
    } else if average >= 4.0 {
        details.push("Tempo: Slower build-up with larger pushes".to_owned());
    }

    let summary = if average < 3.0 {
        "Fast cycle deck with excellent rotation speed"
    } else if average >= 4.0 {
        "Slow cycle - focuses on larger pushes"
    } else {
        "Medium cycle speed"
    };

    AnalysisSection::new(TITLE, summary, details, score)
}
