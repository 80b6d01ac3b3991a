//! Per-aspect deck analysis.
//!
//! Each section explains one aspect of a deck in prose and carries its own
//! score. Defense and attack reuse the dimension scores; bait, cycle and
//! ladder have heuristics of their own.

mod attack;
mod bait;
mod cycle;
mod defense;
mod ladder;

use deckgrade_core::{Card, DimensionScore, Tier, round_to_tenth, score_to_stars, score_to_tier};
use serde::{Deserialize, Serialize};

pub use attack::{WinConditionStyle, attack_analysis};
pub use bait::{BaitGroup, bait_analysis, bait_groups};
pub use cycle::{cycle_analysis, shortest_cycle};
pub use defense::defense_analysis;
pub use ladder::{is_level_independent, ladder_analysis};

use attack::attack_section;
use defense::defense_section;
use ladder::ladder_section;

use crate::dimension::bounded;
use crate::{score_attack, score_defense, score_f2p};

/// One titled section of a deck analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    /// Section heading.
    pub title: String,
    /// One-line overview.
    pub summary: String,
    /// Individual observations, most important first.
    pub details: Vec<String>,
    /// Section score in `0.0..=10.0`, rounded to one decimal place.
    pub score: f64,
    /// Tier of [`Self::score`].
    pub tier: Tier,
    /// Stars of [`Self::score`].
    pub stars: u8,
}

impl AnalysisSection {
    /// Build a section, clamping and rounding `score`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        details: Vec<String>,
        score: f64,
    ) -> Self {
        let rounded = round_to_tenth(bounded(score));
        Self {
            title: title.into(),
            summary: summary.into(),
            details,
            score: rounded,
            tier: score_to_tier(rounded),
            stars: score_to_stars(rounded),
        }
    }

    /// Build a section whose score is an existing dimension score.
    #[must_use]
    pub fn from_dimension(
        title: impl Into<String>,
        summary: impl Into<String>,
        details: Vec<String>,
        dimension: &DimensionScore,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            details,
            score: dimension.score,
            tier: dimension.tier,
            stars: dimension.stars,
        }
    }

    pub(crate) fn empty_deck(title: &str) -> Self {
        Self::new(title, "No cards in deck", Vec::new(), 0.0)
    }
}

/// The five analysis sections of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckAnalysis {
    /// Anti-air, buildings and tank killers.
    pub defense: AnalysisSection,
    /// Win conditions, spell damage and strategy.
    pub attack: AnalysisSection,
    /// Spell-bait potential.
    pub bait: AnalysisSection,
    /// Cycle speed and rotation.
    pub cycle: AnalysisSection,
    /// Free-to-play ladder viability.
    pub ladder: AnalysisSection,
}

impl DeckAnalysis {
    /// Sections in reporting order.
    #[must_use]
    pub const fn sections(&self) -> [&AnalysisSection; 5] {
        [
            &self.defense,
            &self.attack,
            &self.bait,
            &self.cycle,
            &self.ladder,
        ]
    }

    pub(crate) fn from_scores(
        deck: &[Card],
        attack: &DimensionScore,
        defense: &DimensionScore,
        f2p: &DimensionScore,
    ) -> Self {
        Self {
            defense: defense_section(deck, defense),
            attack: attack_section(deck, attack),
            bait: bait_analysis(deck),
            cycle: cycle_analysis(deck),
            ladder: ladder_section(deck, f2p),
        }
    }
}

/// Build every analysis section for `deck`.
///
/// # Examples
///
/// ```
/// use deckgrade_scorer::analyse_deck;
///
/// let analysis = analyse_deck(&[]);
/// assert!(analysis.sections().iter().all(|section| section.score == 0.0));
/// ```
#[must_use]
pub fn analyse_deck(deck: &[Card]) -> DeckAnalysis {
    DeckAnalysis::from_scores(
        deck,
        &score_attack(deck),
        &score_defense(deck),
        &score_f2p(deck),
    )
}

/// Format cards as `"Name (cost), Name (cost)"`.
fn card_list<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(|card| format!("{} ({})", card.name, card.elixir))
        .collect::<Vec<_>>()
        .join(", ")
}
