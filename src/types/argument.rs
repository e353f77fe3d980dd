//! Argument types for argumentative explanations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an argument.
///
/// Explanation pipelines label arguments either with integers or with
/// strings, so both are accepted. Serialized untagged: JSON `3` is
/// `Int(3)` and `"a3"` is `Text("a3")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentId {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for ArgumentId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for ArgumentId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl TryFrom<usize> for ArgumentId {
    type Error = std::num::TryFromIntError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        i64::try_from(id).map(Self::Int)
    }
}

impl From<&str> for ArgumentId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ArgumentId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A single argument of an explanation.
///
/// Arguments are supplied by the caller and never modified by the metrics.
/// `strength` is the dialectical strength assigned upstream; higher means
/// more forceful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Stable identifier.
    pub id: ArgumentId,
    /// The claim (label) this argument argues for.
    pub conclusion: String,
    /// Dialectical strength.
    pub strength: f64,
}

impl Argument {
    /// Create a new argument.
    pub fn new(id: impl Into<ArgumentId>, conclusion: impl Into<String>, strength: f64) -> Self {
        Self {
            id: id.into(),
            conclusion: conclusion.into(),
            strength,
        }
    }

    /// Check whether this argument argues for `conclusion`.
    pub fn supports_conclusion(&self, conclusion: &str) -> bool {
        self.conclusion == conclusion
    }
}
