//! Archetype template definitions and raw fit scoring.
//!
//! A template is plain data: an optional signature rule, a list of weighted
//! card counts and an optional elixir curve. [`ARCHETYPE_TEMPLATES`] holds
//! the built-in table in tie-break order.

use deckgrade_core::{Archetype, Card, MAX_SCORE, Role, average_elixir};

/// A signature card and the credit it earns when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignatureCard {
    /// Card name.
    pub name: &'static str,
    /// Sub-score awarded when the card is present.
    pub credit: f64,
}

/// Signature cards of a template; the best credit present counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signature {
    /// Alternative signature cards.
    pub cards: &'static [SignatureCard],
    /// Whether a deck without any signature card scores zero.
    pub required: bool,
    /// Weight of the signature sub-score.
    pub weight: f64,
}

/// A weighted count of supporting cards.
///
/// Each card earns one point for a listed name, one for carrying `role` and
/// one for costing at most `max_elixir`. Points are multiplied by
/// `per_point` and capped at ten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardCount {
    /// Card names earning a point.
    pub names: &'static [&'static str],
    /// Role earning a point.
    pub role: Option<Role>,
    /// Elixir cost at or below which a card earns a point.
    pub max_elixir: Option<u32>,
    /// Sub-score per point.
    pub per_point: f64,
    /// Weight of the count sub-score.
    pub weight: f64,
}

/// An inclusive average-elixir band and its sub-score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElixirBand {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Sub-score inside the band.
    pub score: f64,
}

/// Elixir-curve fit; the first band containing the average wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElixirCurve {
    /// Bands checked in order.
    pub bands: &'static [ElixirBand],
    /// Sub-score when no band matches.
    pub outside: f64,
    /// Weight of the curve sub-score.
    pub weight: f64,
}

/// Definition of one archetype's fit heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeTemplate {
    /// Archetype this template scores.
    pub archetype: Archetype,
    /// Signature cards, if the archetype has any.
    pub signature: Option<Signature>,
    /// Supporting card counts.
    pub counts: &'static [CardCount],
    /// Elixir-curve fit, if the archetype cares about it.
    pub elixir: Option<ElixirCurve>,
}

fn contains(deck: &[Card], name: &str) -> bool {
    deck.iter().any(|card| card.name == name)
}

impl Signature {
    fn credit(&self, deck: &[Card]) -> f64 {
        self.cards
            .iter()
            .filter(|signature| contains(deck, signature.name))
            .map(|signature| signature.credit)
            .fold(0.0, f64::max)
    }
}

impl CardCount {
    fn points(&self, card: &Card) -> u32 {
        let named = self.names.contains(&card.name.as_str());
        let role = self.role.is_some_and(|role| card.has_role(role));
        let cheap = self.max_elixir.is_some_and(|max| card.elixir <= max);
        u32::from(named) + u32::from(role) + u32::from(cheap)
    }

    fn sub_score(&self, deck: &[Card]) -> f64 {
        let points: u32 = deck.iter().map(|card| self.points(card)).sum();
        (f64::from(points) * self.per_point).min(MAX_SCORE)
    }
}

impl ElixirCurve {
    fn sub_score(&self, average: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| (band.min..=band.max).contains(&average))
            .map_or(self.outside, |band| band.score)
    }
}

impl ArchetypeTemplate {
    /// Raw fit of `deck` to this template in `0.0..=10.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckgrade_core::{Archetype, Card, Rarity};
    /// use deckgrade_scorer::ARCHETYPE_TEMPLATES;
    ///
    /// let siege = ARCHETYPE_TEMPLATES
    ///     .iter()
    ///     .find(|template| template.archetype == Archetype::Siege)
    ///     .map(|template| template.raw_score(&[Card::new("Knight", 3, Rarity::Common)]));
    /// assert_eq!(siege, Some(0.0));
    /// ```
    #[must_use]
    pub fn raw_score(&self, deck: &[Card]) -> f64 {
        let mut total = 0.0;
        if let Some(signature) = &self.signature {
            let credit = signature.credit(deck);
            if signature.required && credit <= 0.0 {
                return 0.0;
            }
            total += credit * signature.weight;
        }
        for count in self.counts {
            total += count.sub_score(deck) * count.weight;
        }
        if let Some(curve) = &self.elixir {
            total += curve.sub_score(average_elixir(deck)) * curve.weight;
        }
        total.clamp(0.0, MAX_SCORE)
    }
}

const fn signature(name: &'static str) -> SignatureCard {
    SignatureCard {
        name,
        credit: MAX_SCORE,
    }
}

const fn named(names: &'static [&'static str], per_point: f64, weight: f64) -> CardCount {
    CardCount {
        names,
        role: None,
        max_elixir: None,
        per_point,
        weight,
    }
}

const fn band(min: f64, max: f64, score: f64) -> ElixirBand {
    ElixirBand { min, max, score }
}

/// Built-in templates in declaration order; ties go to the earlier entry.
pub static ARCHETYPE_TEMPLATES: [ArchetypeTemplate; 9] = [
    ArchetypeTemplate {
        archetype: Archetype::Beatdown,
        signature: Some(Signature {
            cards: &[
                signature("Golem"),
                signature("Lava Hound"),
                signature("Electro Giant"),
                signature("Giant"),
                signature("Mega Knight"),
            ],
            required: false,
            weight: 0.4,
        }),
        counts: &[named(
            &["Baby Dragon", "Night Witch", "Lumberjack", "Mega Minion", "Witch"],
            2.5,
            0.3,
        )],
        elixir: Some(ElixirCurve {
            bands: &[
                band(3.5, 4.5, 10.0),
                band(3.2, 5.0, 6.0),
                band(3.0, f64::INFINITY, 3.0),
            ],
            outside: 0.0,
            weight: 0.3,
        }),
    },
    ArchetypeTemplate {
        archetype: Archetype::Control,
        signature: Some(Signature {
            cards: &[signature("Graveyard")],
            required: false,
            weight: 0.35,
        }),
        counts: &[
            CardCount {
                names: &["Tesla", "Cannon", "Inferno Tower", "Bomb Tower"],
                role: Some(Role::Building),
                max_elixir: None,
                per_point: 5.0,
                weight: 0.35,
            },
            named(&["Poison", "Fireball", "Lightning", "Rocket"], 5.0, 0.3),
        ],
        elixir: None,
    },
    ArchetypeTemplate {
        archetype: Archetype::Cycle,
        signature: Some(Signature {
            cards: &[
                signature("Hog Rider"),
                signature("Royal Giant"),
                signature("Royal Hogs"),
            ],
            required: false,
            weight: 0.3,
        }),
        counts: &[CardCount {
            names: &["Skeletons", "Ice Spirit", "Ice Golem", "Electro Spirit"],
            role: None,
            max_elixir: Some(2),
            per_point: 2.0,
            weight: 0.4,
        }],
        elixir: Some(ElixirCurve {
            bands: &[band(2.4, 3.2, 10.0), band(2.0, 3.5, 6.0)],
            outside: 2.0,
            weight: 0.3,
        }),
    },
    ArchetypeTemplate {
        archetype: Archetype::Bridge,
        signature: Some(Signature {
            cards: &[
                signature("P.E.K.K.A"),
                signature("Mega Knight"),
                signature("Royal Ghost"),
                signature("Battle Ram"),
            ],
            required: false,
            weight: 0.4,
        }),
        counts: &[named(
            &["Bandit", "Royal Ghost", "Battle Ram", "Wall Breakers", "Prince"],
            3.0,
            0.4,
        )],
        elixir: Some(ElixirCurve {
            bands: &[band(3.0, 4.0, 10.0), band(2.8, 4.2, 6.0)],
            outside: 0.0,
            weight: 0.2,
        }),
    },
    ArchetypeTemplate {
        archetype: Archetype::Siege,
        signature: Some(Signature {
            cards: &[signature("X-Bow"), signature("Mortar")],
            required: true,
            weight: 0.6,
        }),
        counts: &[named(&["Tesla", "Knight", "Archers", "Cannon"], 2.5, 0.4)],
        elixir: None,
    },
    ArchetypeTemplate {
        archetype: Archetype::Bait,
        signature: Some(Signature {
            cards: &[
                signature("Goblin Barrel"),
                SignatureCard {
                    name: "Goblin Drill",
                    credit: 7.0,
                },
            ],
            required: false,
            weight: 0.5,
        }),
        counts: &[named(
            &[
                "Goblin Gang",
                "Princess",
                "Goblin Barrel",
                "Dart Goblin",
                "Goblin Drill",
            ],
            2.5,
            0.5,
        )],
        elixir: None,
    },
    ArchetypeTemplate {
        archetype: Archetype::Graveyard,
        signature: Some(Signature {
            cards: &[signature("Graveyard")],
            required: true,
            weight: 0.5,
        }),
        counts: &[
            named(
                &["Ice Wizard", "Baby Dragon", "Bowler", "Bomb Tower", "Knight"],
                3.0,
                0.3,
            ),
            named(&["Freeze", "Poison", "Tornado"], 5.0, 0.2),
        ],
        elixir: None,
    },
    ArchetypeTemplate {
        archetype: Archetype::Miner,
        signature: Some(Signature {
            cards: &[signature("Miner")],
            required: true,
            weight: 0.6,
        }),
        counts: &[named(
            &["Poison", "Valkyrie", "Electro Wizard", "Ice Golem"],
            3.0,
            0.4,
        )],
        elixir: None,
    },
    ArchetypeTemplate {
        archetype: Archetype::Spawndeck,
        signature: Some(Signature {
            cards: &[
                signature("Goblin Hut"),
                signature("Barbarian Hut"),
                signature("Furnace"),
                SignatureCard {
                    name: "Tombstone",
                    credit: 7.0,
                },
            ],
            required: true,
            weight: 0.5,
        }),
        counts: &[named(
            &[
                "Goblin Hut",
                "Barbarian Hut",
                "Furnace",
                "Tombstone",
                "Elixir Collector",
                "Goblin Cage",
                "Witch",
                "Night Witch",
            ],
            2.5,
            0.3,
        )],
        elixir: Some(ElixirCurve {
            bands: &[band(3.6, 4.6, 10.0), band(3.2, 5.0, 6.0)],
            outside: 2.0,
            weight: 0.2,
        }),
    },
];

/// Unordered archetype pairs sharing too many mechanics to count as hybrid.
pub static RELATED_ARCHETYPES: [(Archetype, Archetype); 4] = [
    (Archetype::Siege, Archetype::Control),
    (Archetype::Graveyard, Archetype::Control),
    (Archetype::Miner, Archetype::Cycle),
    (Archetype::Bridge, Archetype::Beatdown),
];

/// Whether `first` and `second` appear together in `related`, in either order.
#[must_use]
pub fn are_related(
    related: &[(Archetype, Archetype)],
    first: Archetype,
    second: Archetype,
) -> bool {
    related
        .iter()
        .any(|&(left, right)| (left, right) == (first, second) || (left, right) == (second, first))
}
