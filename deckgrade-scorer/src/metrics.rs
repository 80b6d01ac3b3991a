//! Single-pass metric extraction shared by the dimension scorers.

use std::collections::BTreeSet;

use deckgrade_core::{Card, Rarity, Role};
use serde::{Deserialize, Serialize};

/// Aggregate counts and sums drawn from one pass over a deck.
///
/// Counts are `u32` so they convert losslessly into `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckMetrics {
    /// Number of cards inspected.
    pub card_count: u32,
    /// Cards with the win-condition role.
    pub win_conditions: u32,
    /// Sum of win-condition level ratios.
    pub win_condition_quality: f64,
    /// Sum of big-spell level ratios.
    pub spell_damage: f64,
    /// Sum of damage per second scaled by level ratio.
    pub total_damage: f64,
    /// Cards with the building role.
    pub buildings: u32,
    /// Cards with the support role.
    pub supports: u32,
    /// Building level ratios plus half of support level ratios.
    pub defense_quality: f64,
    /// Cards able to hit air units.
    pub anti_air: u32,
    /// Cards able to hit ground targets.
    pub ground_targeting: u32,
    /// Distinct roles present.
    pub distinct_roles: u32,
    /// Distinct elixir costs present.
    pub distinct_elixir_costs: u32,
    /// Common cards.
    pub commons: u32,
    /// Rare cards.
    pub rares: u32,
    /// Epic cards.
    pub epics: u32,
    /// Legendary cards.
    pub legendaries: u32,
    /// Champion cards.
    pub champions: u32,
    /// Sum of level ratios.
    pub total_level_ratio: f64,
    /// Sum of elixir costs.
    pub total_elixir: u32,
    /// Sum of evolution levels over every evolved card.
    pub evolution_levels: u32,
    /// Evolution levels carried by building and support cards.
    pub defensive_evolution_levels: u32,
    /// Evolution levels carried by other anti-air cards.
    pub anti_air_evolution_levels: u32,
}

fn count_to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

impl DeckMetrics {
    /// Collect metrics for `deck`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_core::{Card, Rarity, Role};
    /// use deckgrade_scorer::DeckMetrics;
    ///
    /// let deck = [
    ///     Card::new("Hog Rider", 4, Rarity::Rare).with_role(Role::WinCondition),
    ///     Card::new("Fireball", 4, Rarity::Rare).with_role(Role::SpellBig),
    /// ];
    /// let metrics = DeckMetrics::from_deck(&deck);
    /// assert_eq!(metrics.win_conditions, 1);
    /// assert_eq!(metrics.average_elixir(), 4.0);
    /// ```
    #[must_use]
    pub fn from_deck(deck: &[Card]) -> Self {
        let mut metrics = Self {
            card_count: count_to_u32(deck.len()),
            ..Self::default()
        };
        let mut roles = BTreeSet::new();
        let mut costs = BTreeSet::new();

        for card in deck {
            metrics.record(card);
            if let Some(role) = card.role {
                roles.insert(role);
            }
            costs.insert(card.elixir);
        }

        metrics.distinct_roles = count_to_u32(roles.len());
        metrics.distinct_elixir_costs = count_to_u32(costs.len());
        metrics
    }

    fn record(&mut self, card: &Card) {
        let ratio = card.level_ratio();
        self.total_level_ratio += ratio;
        self.total_elixir = self.total_elixir.saturating_add(card.elixir);

        match card.role {
            Some(Role::WinCondition) => {
                self.win_conditions += 1;
                self.win_condition_quality += ratio;
            }
            Some(Role::SpellBig) => self.spell_damage += ratio,
            Some(Role::Building) => {
                self.buildings += 1;
                self.defense_quality += ratio;
            }
            Some(Role::Support) => {
                self.supports += 1;
                self.defense_quality += ratio * 0.5;
            }
            Some(Role::SpellSmall | Role::Cycle) | None => {}
        }

        if let Some(stats) = card.stats {
            if stats.damage_per_second.is_finite() {
                self.total_damage += stats.damage_per_second.max(0.0) * ratio;
            }
            if stats.targets.hits_air() {
                self.anti_air += 1;
            }
            if stats.targets.hits_ground() {
                self.ground_targeting += 1;
            }
        }

        match card.rarity {
            Rarity::Common => self.commons += 1,
            Rarity::Rare => self.rares += 1,
            Rarity::Epic => self.epics += 1,
            Rarity::Legendary => self.legendaries += 1,
            Rarity::Champion => self.champions += 1,
        }

        self.record_evolution(card);
    }

    fn record_evolution(&mut self, card: &Card) {
        let level = card.evolution_level;
        if level == 0 {
            return;
        }
        self.evolution_levels = self.evolution_levels.saturating_add(level);
        if card.has_role(Role::Building) || card.has_role(Role::Support) {
            self.defensive_evolution_levels = self.defensive_evolution_levels.saturating_add(level);
        } else if card.is_anti_air() {
            self.anti_air_evolution_levels = self.anti_air_evolution_levels.saturating_add(level);
        }
    }

    /// Whether no cards were inspected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.card_count == 0
    }

    /// Mean level-scaled damage per second, or `0.0` for an empty deck.
    #[must_use]
    pub fn average_damage(&self) -> f64 {
        self.per_card(self.total_damage)
    }

    /// Mean level ratio, or `0.0` for an empty deck.
    #[must_use]
    pub fn average_level_ratio(&self) -> f64 {
        self.per_card(self.total_level_ratio)
    }

    /// Mean elixir cost, or `0.0` for an empty deck.
    #[must_use]
    pub fn average_elixir(&self) -> f64 {
        self.per_card(f64::from(self.total_elixir))
    }

    fn per_card(&self, total: f64) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            total / f64::from(self.card_count)
        }
    }
}
