//! Ladder section: free-to-play viability and upgrade priorities.

use deckgrade_core::{Card, DimensionScore, MAX_SCORE, Rarity, Role};

use super::{AnalysisSection, card_list};
use crate::score_f2p;

const TITLE: &str = "Ladder Analysis";

/// Rarity spread plus upgrade clarity, both read from the F2P score.
const RARITY_WEIGHT: f64 = 0.5;
const LEVEL_INDEPENDENCE_WEIGHT: f64 = 0.3;
const UPGRADE_PROGRESS_WEIGHT: f64 = 0.2;

const UPGRADE_PRIORITY_LIMIT: usize = 3;

/// Cards that stay useful when under-levelled: small spells, cheap cycle
/// cards, utility buildings and reset cards.
const LEVEL_INDEPENDENT: &[&str] = &[
    "The Log",
    "Zap",
    "Arrows",
    "Snowball",
    "Giant Snowball",
    "Barbarian Barrel",
    "Skeletons",
    "Ice Spirit",
    "Ice Golem",
    "Heal Spirit",
    "Electro Spirit",
    "Fire Spirit",
    "Tesla",
    "Cannon",
    "Bomb Tower",
    "Electro Wizard",
];

/// Whether `card` stays effective when under-levelled.
#[must_use]
pub fn is_level_independent(card: &Card) -> bool {
    LEVEL_INDEPENDENT.contains(&card.name.as_str())
}

fn fraction_score(part: usize, whole: usize) -> f64 {
    let numerator = u32::try_from(part).unwrap_or(u32::MAX);
    let denominator = u32::try_from(whole).unwrap_or(u32::MAX);
    if denominator == 0 {
        return 0.0;
    }
    f64::from(numerator) / f64::from(denominator) * MAX_SCORE
}

fn rarity_count(deck: &[Card], rarity: Rarity) -> usize {
    deck.iter().filter(|card| card.rarity == rarity).count()
}

fn upgrade_priorities(deck: &[Card]) -> Vec<String> {
    let win_conditions = deck
        .iter()
        .filter(|card| card.has_role(Role::WinCondition))
        .map(|card| format!("{} (win condition)", card.name));
    let supports = deck
        .iter()
        .filter(|card| card.has_role(Role::Support) && card.rarity != Rarity::Common)
        .map(|card| format!("{} (versatile {})", card.name, card.rarity));
    win_conditions
        .chain(supports)
        .take(UPGRADE_PRIORITY_LIMIT)
        .collect()
}

/// Judge how comfortably a free-to-play player can ladder with a deck.
#[must_use]
pub fn ladder_analysis(deck: &[Card]) -> AnalysisSection {
    ladder_section(deck, &score_f2p(deck))
}

pub(super) fn ladder_section(deck: &[Card], f2p: &DimensionScore) -> AnalysisSection {
    if deck.is_empty() {
        return AnalysisSection::empty_deck(TITLE);
    }

    let level_independent: Vec<&Card> = deck
        .iter()
        .filter(|card| is_level_independent(card))
        .collect();
    let level_independence = fraction_score(level_independent.len(), deck.len());
    let total_progress: f64 = deck.iter().map(Card::level_ratio).sum();
    let deck_size = u32::try_from(deck.len()).unwrap_or(u32::MAX);
    let upgrade_progress = total_progress / f64::from(deck_size) * MAX_SCORE;
    let score = RARITY_WEIGHT * f2p.score
        + LEVEL_INDEPENDENCE_WEIGHT * level_independence
        + UPGRADE_PROGRESS_WEIGHT * upgrade_progress;

    let legendaries = rarity_count(deck, Rarity::Legendary);
    let champions = rarity_count(deck, Rarity::Champion);
    let mut details = vec![format!(
        "Rarity breakdown: {} Commons, {} Rares, {} Epics, {legendaries} Legendaries, \
         {champions} Champions",
        rarity_count(deck, Rarity::Common),
        rarity_count(deck, Rarity::Rare),
        rarity_count(deck, Rarity::Epic),
    )];

    if !level_independent.is_empty() {
        details.push(format!(
            "Level-independent cards ({}): {}",
            level_independent.len(),
            card_list(level_independent.iter().copied())
        ));
    }

    let priorities = upgrade_priorities(deck);
    if !priorities.is_empty() {
        let ranked = priorities
            .iter()
            .enumerate()
            .map(|(index, priority)| format!("{}) {priority}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        details.push(format!("Upgrade priority: {ranked}"));
    }

    if let Some(spell) = deck.iter().find(|card| card.has_role(Role::SpellBig)) {
        details.push(format!(
            "Overleveling impact: {} breakpoints critical vs. support troops",
            spell.name
        ));
    }

    let verdict = if f2p.score >= 8.0 {
        "Excellent"
    } else if f2p.score >= 6.0 {
        "Good"
    } else {
        "Difficult"
    };
    let reason = match legendaries + champions {
        0 => "no legendaries, common-heavy",
        premium if premium >= 3 => "multiple legendaries/champions",
        _ => "balanced rarity distribution",
    };
    details.push(format!("F2P assessment: {verdict} - {reason}"));
    let gold_efficiency = (f2p.score * 10.0).round();
    details.push(format!(
        "Gold efficiency: {gold_efficiency:.0}/100 - {verdict} upgrade costs"
    ));

    let summary = if f2p.score >= 8.0 {
        "Excellent F2P deck with clear upgrade path"
    } else if f2p.score < 5.0 {
        "Expensive deck requiring significant investment"
    } else {
        "Moderate F2P-friendliness"
    };

    AnalysisSection::new(TITLE, summary, details, score)
}
