//! Seed values accepted by the generator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generation seed, either numeric or textual.
///
/// Text seeds resolve to a number before any stream is created:
/// - text that parses as a decimal `u64` resolves to that number, so `"12345"`
///   and `12345` name the same universe
/// - any other text is hashed through a name-based UUID and the first 64 bits
///   are used
///
/// # Example
/// ```
/// use entropy::Seed;
///
/// assert_eq!(Seed::from("12345").value(), Seed::from(12345_u64).value());
/// assert_eq!(Seed::from("Kepler-452").value(), Seed::from("Kepler-452").value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// Resolve the seed to the 64-bit value streams are seeded with.
    pub fn value(&self) -> u64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text
                .trim()
                .parse::<u64>()
                .unwrap_or_else(|_| hash_text(text)),
        }
    }
}

/// Hash a seed name to a `u64` via a v5 UUID in the OID namespace.
pub fn hash_text(text: &str) -> u64 {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, text.as_bytes())
        .as_u64_pair()
        .0
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&Seed> for Seed {
    fn from(value: &Seed) -> Self {
        value.clone()
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}
