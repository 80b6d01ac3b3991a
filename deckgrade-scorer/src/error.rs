//! Error types raised while validating scoring policies.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a policy holds unusable values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// A weight was negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// Every weight was zero.
    #[error("weights must sum to a positive value")]
    ZeroTotalWeight,
    /// A probability-like threshold lay outside `0.0..=1.0`.
    #[error("{name} must lie within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange {
        /// Name of the offending threshold.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// A parameter that must be strictly positive was not.
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },
}
