//! Defense section: anti-air, buildings, tank killers and investments.

use deckgrade_core::{Card, DimensionScore, Role};

use super::{AnalysisSection, card_list};
use crate::score_defense;

const TITLE: &str = "Defense Analysis";
const TANK_KILLER_DPS: f64 = 150.0;
const INVESTMENT_ELIXIR: u32 = 6;

/// Explain a deck's defensive setup.
#[must_use]
pub fn defense_analysis(deck: &[Card]) -> AnalysisSection {
    defense_section(deck, &score_defense(deck))
}

pub(super) fn defense_section(deck: &[Card], score: &DimensionScore) -> AnalysisSection {
    if deck.is_empty() {
        return AnalysisSection::empty_deck(TITLE);
    }

    let anti_air: Vec<&Card> = deck.iter().filter(|card| card.is_anti_air()).collect();
    let buildings: Vec<&Card> = deck
        .iter()
        .filter(|card| card.has_role(Role::Building))
        .collect();
    let tank_killer = deck.iter().find(|card| {
        card.stats
            .is_some_and(|stats| stats.damage_per_second > TANK_KILLER_DPS)
    });
    let investment = deck
        .iter()
        .find(|card| card.has_role(Role::WinCondition) && card.elixir >= INVESTMENT_ELIXIR);

    let mut details = Vec::new();
    if anti_air.is_empty() {
        details.push("No anti-air units - vulnerable to aerial threats".to_owned());
    } else {
        details.push(format!(
            "Anti-air units ({}): {}",
            anti_air.len(),
            card_list(anti_air.iter().copied())
        ));
    }
    if buildings.is_empty() {
        details.push("No defensive buildings - vulnerable to bridge spam".to_owned());
    } else {
        details.push(format!("Defensive buildings: {}", card_list(buildings.iter().copied())));
    }
    if let Some(card) = tank_killer {
        details.push(format!(
            "Tank killers: {} provides strong ground defense",
            card.name
        ));
    }
    if let Some(card) = investment {
        details.push(format!(
            "{} ({} elixir) needs defensive support",
            card.name, card.elixir
        ));
    }

    let summary = match (anti_air.len(), buildings.len()) {
        (0, _) => "No anti-air coverage - vulnerable to aerial threats",
        (1, _) => "Weak anti-air coverage",
        (_, 0) => "Good anti-air but lacks defensive buildings",
        (air, _) if air >= 3 => "Excellent defensive coverage with strong anti-air and buildings",
        _ => "Solid defensive capabilities",
    };

    AnalysisSection::from_dimension(TITLE, summary, details, score)
}
