//! Error types raised while building reference collaborators.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while loading or validating a synergy database.
#[derive(Debug, Error)]
pub enum SynergyDatabaseError {
    /// The JSON document could not be parsed.
    #[error("failed to parse synergy database JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A pair carried a strength outside `0.0..=1.0`.
    #[error("synergy between {first} and {second} has strength {strength}, expected 0.0..=1.0")]
    StrengthOutOfRange {
        /// First card of the pair.
        first: String,
        /// Second card of the pair.
        second: String,
        /// Strength supplied.
        strength: f64,
    },
    /// A pair named the same card twice.
    #[error("synergy pair names {card} twice")]
    SelfPair {
        /// Card named twice.
        card: String,
    },
    /// A pair had a blank card name.
    #[error("synergy pair has an empty card name")]
    EmptyName,
}
