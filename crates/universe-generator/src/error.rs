//! Configuration errors.
//!
//! Every check runs before generation starts, so a call either fails here or
//! produces a complete universe.

use thiserror::Error;

/// A rejected configuration value, named by its dotted camelCase path
/// (e.g. `belts.memberCount`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability vector does not sum to one
    #[error("{field}: probabilities sum to {sum}, expected 1")]
    ProbabilitiesNotNormalized { field: String, sum: f64 },

    /// A range with `min > max`
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange { field: String, min: f64, max: f64 },

    /// A scalar outside its allowed domain
    #[error("{field}: {value} is outside {expected}")]
    OutOfRange {
        field: String,
        value: f64,
        expected: String,
    },

    /// Values that are individually valid but contradict each other
    #[error("{field}: {reason}")]
    Inconsistent { field: String, reason: String },
}

/// Result type alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    #[must_use]
    pub fn not_normalized<S: Into<String>>(field: S, sum: f64) -> Self {
        Self::ProbabilitiesNotNormalized {
            field: field.into(),
            sum,
        }
    }

    #[must_use]
    pub fn inverted<S: Into<String>>(field: S, min: f64, max: f64) -> Self {
        Self::InvertedRange {
            field: field.into(),
            min,
            max,
        }
    }

    #[must_use]
    pub fn out_of_range<S: Into<String>, E: Into<String>>(field: S, value: f64, expected: E) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            expected: expected.into(),
        }
    }

    #[must_use]
    pub fn inconsistent<S: Into<String>, R: Into<String>>(field: S, reason: R) -> Self {
        Self::Inconsistent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::ProbabilitiesNotNormalized { field, .. }
            | Self::InvertedRange { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Inconsistent { field, .. } => field,
        }
    }
}
