//! In-memory synergy database.

use std::collections::HashMap;
use std::fmt;

use deckgrade_core::{SynergyLink, SynergyLookup};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::SynergyDatabaseError;

/// Kind of interaction a synergy pair describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SynergyCategory {
    /// A tank shielding a support troop.
    TankSupport,
    /// Cards baiting out the same answer.
    Bait,
    /// Spells combining for tower damage or clears.
    SpellCombo,
    /// Win conditions backing each other.
    WinCondition,
    /// Cards defending well together.
    Defensive,
    /// Cheap cards cycling together.
    Cycle,
    /// Bridge pressure cards played together.
    BridgeSpam,
}

impl SynergyCategory {
    /// Kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TankSupport => "tank-support",
            Self::Bait => "bait",
            Self::SpellCombo => "spell-combo",
            Self::WinCondition => "win-condition",
            Self::Defensive => "defensive",
            Self::Cycle => "cycle",
            Self::BridgeSpam => "bridge-spam",
        }
    }
}

impl fmt::Display for SynergyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synergy pair as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyEntry {
    /// First card name.
    #[serde(rename = "card1")]
    pub first: String,
    /// Second card name.
    #[serde(rename = "card2")]
    pub second: String,
    /// Interaction category.
    pub category: SynergyCategory,
    /// Strength in `0.0..=1.0`.
    #[serde(rename = "score")]
    pub strength: f64,
    /// Short explanation.
    #[serde(default)]
    pub description: String,
}

impl SynergyEntry {
    /// Build an entry.
    #[must_use]
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        category: SynergyCategory,
        strength: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            category,
            strength,
            description: description.into(),
        }
    }

    fn validate(&self) -> Result<(), SynergyDatabaseError> {
        if self.first.trim().is_empty() || self.second.trim().is_empty() {
            return Err(SynergyDatabaseError::EmptyName);
        }
        if self.first == self.second {
            return Err(SynergyDatabaseError::SelfPair {
                card: self.first.clone(),
            });
        }
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(SynergyDatabaseError::StrengthOutOfRange {
                first: self.first.clone(),
                second: self.second.clone(),
                strength: self.strength,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SynergyDocument {
    #[serde(default)]
    version: u32,
    pairs: Vec<SynergyEntry>,
}

/// Order-insensitive synergy table.
///
/// Adding a pair that already exists replaces it and logs a warning.
#[derive(Debug, Clone, Default)]
pub struct SynergyDatabase {
    version: u32,
    entries: Vec<SynergyEntry>,
    index: HashMap<String, HashMap<String, usize>>,
}

impl SynergyDatabase {
    /// Build a database from validated pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`SynergyDatabaseError`] raised by an invalid pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_core::SynergyLookup;
    /// use deckgrade_data::{SynergyCategory, SynergyDatabase, SynergyEntry};
    ///
    /// let database = SynergyDatabase::from_pairs([SynergyEntry::new(
    ///     "Giant",
    ///     "Witch",
    ///     SynergyCategory::TankSupport,
    ///     0.8,
    ///     "Giant tanks while Witch spawns skeletons",
    /// )])?;
    /// assert_eq!(database.synergy("Witch", "Giant").map(|link| link.strength), Some(0.8));
    /// # Ok::<(), deckgrade_data::SynergyDatabaseError>(())
    /// ```
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = SynergyEntry>,
    ) -> Result<Self, SynergyDatabaseError> {
        let mut database = Self::default();
        for entry in pairs {
            database.insert(entry)?;
        }
        Ok(database)
    }

    /// Parse a JSON document of the form
    /// `{"version": 1, "pairs": [{"card1", "card2", "category", "score", "description"}]}`.
    ///
    /// # Errors
    ///
    /// Returns [`SynergyDatabaseError::Parse`] for malformed JSON and the
    /// validation errors of [`Self::from_pairs`] for invalid pairs.
    pub fn from_json_str(json: &str) -> Result<Self, SynergyDatabaseError> {
        let document: SynergyDocument = serde_json::from_str(json)
            .map_err(|source| SynergyDatabaseError::Parse { source })?;
        let mut database = Self::from_pairs(document.pairs)?;
        database.version = document.version;
        Ok(database)
    }

    /// Add or replace a pair.
    ///
    /// # Errors
    ///
    /// Returns a [`SynergyDatabaseError`] when the pair is invalid; the
    /// database is left unchanged.
    pub fn insert(&mut self, entry: SynergyEntry) -> Result<(), SynergyDatabaseError> {
        entry.validate()?;
        if let Some(position) = self.position(&entry.first, &entry.second) {
            warn!(
                "replacing duplicate synergy pair {} / {}",
                entry.first, entry.second
            );
            if let Some(slot) = self.entries.get_mut(position) {
                *slot = entry;
            }
            return Ok(());
        }

        let position = self.entries.len();
        self.index
            .entry(entry.first.clone())
            .or_default()
            .insert(entry.second.clone(), position);
        self.index
            .entry(entry.second.clone())
            .or_default()
            .insert(entry.first.clone(), position);
        self.entries.push(entry);
        Ok(())
    }

    fn position(&self, first: &str, second: &str) -> Option<usize> {
        self.index.get(first)?.get(second).copied()
    }

    /// Entry for a pair in either order.
    #[must_use]
    pub fn get(&self, first: &str, second: &str) -> Option<&SynergyEntry> {
        self.entries.get(self.position(first, second)?)
    }

    /// Schema version of the loaded document, `0` when built in code.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Every pair in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[SynergyEntry] {
        &self.entries
    }

    /// Pairs of one category.
    pub fn by_category(&self, category: SynergyCategory) -> impl Iterator<Item = &SynergyEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynergyLookup for SynergyDatabase {
    fn synergy(&self, first: &str, second: &str) -> Option<SynergyLink<'_>> {
        self.get(first, second).map(|entry| SynergyLink {
            strength: entry.strength,
            description: &entry.description,
            category: Some(entry.category.as_str()),
        })
    }
}
