//! Archetype classification.
//!
//! Every template in a table scores the deck; the two best raw fits become
//! the primary and secondary archetypes and are mapped to confidences by a
//! [`ClassifierPolicy`]. Strong, close and unrelated fits are reported as
//! [`Archetype::Hybrid`]; a weak primary fit is reported as
//! [`Archetype::Unknown`].

mod templates;

use deckgrade_core::{Archetype, Card};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ClassifierPolicy;

pub use templates::{
    ARCHETYPE_TEMPLATES, ArchetypeTemplate, CardCount, ElixirBand, ElixirCurve,
    RELATED_ARCHETYPES, Signature, SignatureCard, are_related,
};

/// Outcome of classifying a deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeClassification {
    /// Resolved archetype, possibly [`Archetype::Hybrid`] or
    /// [`Archetype::Unknown`].
    pub primary: Archetype,
    /// Confidence in the best-fitting template.
    pub primary_confidence: f64,
    /// Second best-fitting template.
    pub secondary: Archetype,
    /// Confidence in the second best-fitting template.
    pub secondary_confidence: f64,
    /// Whether the deck combines two distinct archetypes.
    pub is_hybrid: bool,
    /// Best-fitting template before hybrid and unknown resolution.
    pub best_fit: Archetype,
    /// Raw fit of the best template.
    pub primary_score: f64,
    /// Raw fit of the second best template.
    pub secondary_score: f64,
}

impl ArchetypeClassification {
    /// Classification reported when nothing can be measured.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            primary: Archetype::Unknown,
            primary_confidence: 0.0,
            secondary: Archetype::Unknown,
            secondary_confidence: 0.0,
            is_hybrid: false,
            best_fit: Archetype::Unknown,
            primary_score: 0.0,
            secondary_score: 0.0,
        }
    }
}

/// Classifier over a template table and a list of related pairs.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeClassifier<'a> {
    templates: &'a [ArchetypeTemplate],
    related: &'a [(Archetype, Archetype)],
    policy: ClassifierPolicy,
}

impl Default for ArchetypeClassifier<'static> {
    fn default() -> Self {
        Self::new(
            &ARCHETYPE_TEMPLATES,
            &RELATED_ARCHETYPES,
            ClassifierPolicy::default(),
        )
    }
}

impl<'a> ArchetypeClassifier<'a> {
    /// Build a classifier from explicit tables.
    ///
    /// Template order is the tie-break order.
    #[must_use]
    pub const fn new(
        templates: &'a [ArchetypeTemplate],
        related: &'a [(Archetype, Archetype)],
        policy: ClassifierPolicy,
    ) -> Self {
        Self {
            templates,
            related,
            policy,
        }
    }

    /// Replace the confidence and hybrid policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ClassifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy in use.
    #[must_use]
    pub const fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    /// Raw fit of `deck` to every template, in template order.
    #[must_use]
    pub fn raw_scores(&self, deck: &[Card]) -> Vec<(Archetype, f64)> {
        self.templates
            .iter()
            .map(|template| (template.archetype, template.raw_score(deck)))
            .collect()
    }

    /// Classify `deck`.
    ///
    /// An empty deck is [`ArchetypeClassification::unknown`] without
    /// evaluating any template.
    #[must_use]
    pub fn classify(&self, deck: &[Card]) -> ArchetypeClassification {
        if deck.is_empty() {
            return ArchetypeClassification::unknown();
        }

        let scores = self.raw_scores(deck);
        debug!("archetype fits: {}", describe(&scores));

        let Some((primary_index, primary, primary_score)) = best(&scores, None) else {
            return ArchetypeClassification::unknown();
        };
        let (secondary, secondary_score) = best(&scores, Some(primary_index))
            .map_or((Archetype::Unknown, 0.0), |(_, archetype, score)| {
                (archetype, score)
            });

        let policy = &self.policy;
        let primary_confidence = policy.confidence(primary_score);
        let secondary_confidence = policy.confidence(secondary_score);

        let mut is_hybrid = primary_confidence > policy.hybrid_confidence
            && secondary_confidence > policy.hybrid_confidence
            && secondary_score > policy.hybrid_score_ratio * primary_score
            && primary_score - secondary_score < policy.hybrid_max_gap;
        if is_hybrid && are_related(self.related, primary, secondary) {
            debug!("{primary} and {secondary} are related; not a hybrid");
            is_hybrid = false;
        }

        let resolved = if primary_confidence < policy.unknown_below {
            is_hybrid = false;
            Archetype::Unknown
        } else if is_hybrid {
            Archetype::Hybrid
        } else {
            primary
        };
        debug!(
            "classified as {resolved} (best fit {primary} {primary_confidence:.2}, \
             secondary {secondary} {secondary_confidence:.2}, hybrid {is_hybrid})"
        );

        ArchetypeClassification {
            primary: resolved,
            primary_confidence,
            secondary,
            secondary_confidence,
            is_hybrid,
            best_fit: primary,
            primary_score,
            secondary_score,
        }
    }
}

/// First highest-scoring entry, ignoring `skip`.
fn best(scores: &[(Archetype, f64)], skip: Option<usize>) -> Option<(usize, Archetype, f64)> {
    let mut found: Option<(usize, Archetype, f64)> = None;
    for (index, &(archetype, score)) in scores.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }
        if found.is_none_or(|(_, _, current)| score > current) {
            found = Some((index, archetype, score));
        }
    }
    found
}

fn describe(scores: &[(Archetype, f64)]) -> String {
    scores
        .iter()
        .map(|(archetype, score)| format!("{archetype}={score:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classify `deck` with the built-in templates and default policy.
///
/// # Examples
///
/// ```
/// use deckgrade_core::Archetype;
/// use deckgrade_scorer::classify_archetype;
///
/// let result = classify_archetype(&[]);
/// assert_eq!(result.primary, Archetype::Unknown);
/// assert_eq!(result.primary_confidence, 0.0);
/// ```
#[must_use]
pub fn classify_archetype(deck: &[Card]) -> ArchetypeClassification {
    ArchetypeClassifier::default().classify(deck)
}

#[cfg(test)]
mod tests;
