//! Bait section: cards that share a spell counter.

use deckgrade_core::Card;
use serde::Serialize;

use super::AnalysisSection;

const TITLE: &str = "Bait Analysis";

const BAIT_COUNT_WEIGHT: f64 = 0.5;
const SHARED_COUNTER_WEIGHT: f64 = 0.3;
const WIN_CONDITION_FIT_WEIGHT: f64 = 0.2;

/// Spells and the cards each one punishes, in reporting order.
const SPELL_TARGETS: &[(&str, &[&str])] = &[
    (
        "Log",
        &[
            "Goblin Gang",
            "Princess",
            "Dart Goblin",
            "Goblin Barrel",
            "Skeleton Barrel",
            "Rascals",
        ],
    ),
    (
        "Zap",
        &[
            "Minion Horde",
            "Skeleton Army",
            "Bats",
            "Inferno Dragon",
            "Inferno Tower",
            "Sparky",
        ],
    ),
    (
        "Arrows",
        &[
            "Minions",
            "Spear Goblins",
            "Princess",
            "Dart Goblin",
            "Firecracker",
        ],
    ),
    (
        "Fireball",
        &[
            "Three Musketeers",
            "Wizard",
            "Witch",
            "Flying Machine",
            "Elixir Collector",
            "Night Witch",
        ],
    ),
];

const BAIT_WIN_CONDITIONS: &[&str] = &["Goblin Barrel", "Goblin Drill"];

/// Deck cards a single spell can punish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaitGroup {
    /// Spell the cards are vulnerable to.
    pub spell: &'static str,
    /// Vulnerable cards in deck order.
    pub cards: Vec<String>,
}

impl BaitGroup {
    /// Whether two or more cards share this counter.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.cards.len() >= 2
    }
}

/// Group the bait cards of `deck` by the spell that counters them.
///
/// Spells with no vulnerable card are omitted. A card vulnerable to several
/// spells appears in each group.
#[must_use]
pub fn bait_groups(deck: &[Card]) -> Vec<BaitGroup> {
    SPELL_TARGETS
        .iter()
        .filter_map(|(spell, targets)| {
            let cards: Vec<String> = deck
                .iter()
                .filter(|card| targets.contains(&card.name.as_str()))
                .map(|card| card.name.clone())
                .collect();
            (!cards.is_empty()).then_some(BaitGroup {
                spell: *spell,
                cards,
            })
        })
        .collect()
}

fn bait_count_score(total: usize) -> f64 {
    match total {
        0 => 0.0,
        1 => 2.5,
        2 => 5.0,
        3 => 7.5,
        _ => 10.0,
    }
}

fn shared_counter_score(shared_groups: usize) -> f64 {
    match shared_groups {
        0 => 0.0,
        1 => 4.0,
        2 => 7.0,
        _ => 10.0,
    }
}

fn win_condition_fit(has_bait_win_condition: bool, total: usize) -> f64 {
    if has_bait_win_condition {
        10.0
    } else if total >= 2 {
        6.0
    } else {
        0.0
    }
}

fn bait_score(groups: &[BaitGroup], has_bait_win_condition: bool) -> f64 {
    let total = groups.iter().map(|group| group.cards.len()).sum();
    let shared = groups.iter().filter(|group| group.is_shared()).count();
    BAIT_COUNT_WEIGHT * bait_count_score(total)
        + SHARED_COUNTER_WEIGHT * shared_counter_score(shared)
        + WIN_CONDITION_FIT_WEIGHT * win_condition_fit(has_bait_win_condition, total)
}

/// Measure how well a deck overloads the opponent's spells.
#[must_use]
pub fn bait_analysis(deck: &[Card]) -> AnalysisSection {
    if deck.is_empty() {
        return AnalysisSection::empty_deck(TITLE);
    }

    let groups = bait_groups(deck);
    let bait_win_condition = deck
        .iter()
        .find(|card| BAIT_WIN_CONDITIONS.contains(&card.name.as_str()));
    let score = bait_score(&groups, bait_win_condition.is_some());

    let mut details: Vec<String> = groups
        .iter()
        .filter(|group| group.is_shared())
        .map(|group| {
            format!(
                "{} bait units ({}): {}",
                group.spell,
                group.cards.len(),
                group.cards.join(", ")
            )
        })
        .collect();

    let strongest = groups.iter().fold(None, |best: Option<&BaitGroup>, group| {
        match best {
            Some(current) if current.cards.len() >= group.cards.len() => Some(current),
            _ => Some(group),
        }
    });
    if let Some(chain) = strongest.filter(|group| group.is_shared()) {
        details.push(format!(
            "Strongest bait chain: {} ({} vulnerable cards)",
            chain.spell,
            chain.cards.len()
        ));
        details.push("Mind-game potential: Opponent must choose which threat to spell".to_owned());
    }

    if let Some(card) = bait_win_condition {
        details.push(format!(
            "Win condition fit: {} benefits from bait pressure",
            card.name
        ));
    } else if score < 3.0 {
        details.push("Not a bait deck - lacks spell-vulnerable units".to_owned());
    }

    let summary = if score >= 7.0 {
        "Excellent spell bait with multiple vulnerable units"
    } else if score < 3.0 {
        "Not a bait-focused deck"
    } else {
        "Moderate bait potential"
    };

    AnalysisSection::new(TITLE, summary, details, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckgrade_core::Rarity;
    use deckgrade_core::test_support::hog_cycle_deck;
    use rstest::rstest;

    fn named(names: &[&str]) -> Vec<Card> {
        names
            .iter()
            .map(|name| Card::new(*name, 3, Rarity::Common))
            .collect()
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 2.5)]
    #[case(2, 5.0)]
    #[case(3, 7.5)]
    #[case(4, 10.0)]
    #[case(7, 10.0)]
    fn bait_card_count_bands(#[case] total: usize, #[case] expected: f64) {
        assert_eq!(bait_count_score(total), expected);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 4.0)]
    #[case(2, 7.0)]
    #[case(3, 10.0)]
    #[case(4, 10.0)]
    fn shared_counter_bands(#[case] groups: usize, #[case] expected: f64) {
        assert_eq!(shared_counter_score(groups), expected);
    }

    #[rstest]
    #[case(true, 0, 10.0)]
    #[case(false, 2, 6.0)]
    #[case(false, 1, 0.0)]
    fn win_condition_fit_bands(
        #[case] bait_win_condition: bool,
        #[case] total: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(win_condition_fit(bait_win_condition, total), expected);
    }

    #[test]
    fn groups_follow_spell_order_and_allow_overlap() {
        let deck = named(&["Princess", "Goblin Gang", "Bats", "Knight"]);
        let groups = bait_groups(&deck);
        let spells: Vec<&str> = groups.iter().map(|group| group.spell).collect();
        assert_eq!(spells, vec!["Log", "Zap", "Arrows"]);
        assert_eq!(
            groups.first().map(|group| group.cards.clone()),
            Some(vec!["Princess".to_owned(), "Goblin Gang".to_owned()])
        );
    }

    #[test]
    fn log_bait_with_goblin_barrel_is_excellent() {
        let deck = named(&[
            "Goblin Barrel",
            "Princess",
            "Goblin Gang",
            "Knight",
            "Inferno Tower",
            "Ice Spirit",
            "Rocket",
            "The Log",
        ]);
        // 0.5 * 10 (four bait cards) + 0.3 * 4 (one shared counter) + 0.2 * 10
        let section = bait_analysis(&deck);
        assert!((section.score - 8.2).abs() < 1e-9, "score was {}", section.score);
        assert_eq!(
            section.summary,
            "Excellent spell bait with multiple vulnerable units"
        );
        assert_eq!(
            section.details,
            vec![
                "Log bait units (3): Goblin Barrel, Princess, Goblin Gang".to_owned(),
                "Strongest bait chain: Log (3 vulnerable cards)".to_owned(),
                "Mind-game potential: Opponent must choose which threat to spell".to_owned(),
                "Win condition fit: Goblin Barrel benefits from bait pressure".to_owned(),
            ]
        );
    }

    #[test]
    fn deck_without_bait_is_not_a_bait_deck() {
        let section = bait_analysis(&hog_cycle_deck());
        assert_eq!(section.score, 0.0);
        assert_eq!(section.summary, "Not a bait-focused deck");
        assert_eq!(
            section.details,
            vec!["Not a bait deck - lacks spell-vulnerable units".to_owned()]
        );
    }
}
