//! Argumentation framework bundle.

use serde::{Deserialize, Serialize};

use crate::error::MetricResult;
use crate::index::ArgumentIndex;
use super::argument::Argument;
use super::edge::{AttackEdge, SupportEdge};

/// A complete argumentative explanation: arguments plus their relations.
///
/// The metric functions take the three parts separately; this type is the
/// unit the calling pipeline hands to [`crate::ExplanationEvaluator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentationFramework {
    /// All arguments of the explanation.
    pub arguments: Vec<Argument>,
    /// Attack relations.
    #[serde(default)]
    pub attacks: Vec<AttackEdge>,
    /// Support relations.
    #[serde(default)]
    pub supports: Vec<SupportEdge>,
}

impl ArgumentationFramework {
    /// Create a framework from its parts.
    pub fn new(arguments: Vec<Argument>, attacks: Vec<AttackEdge>, supports: Vec<SupportEdge>) -> Self {
        Self {
            arguments,
            attacks,
            supports,
        }
    }

    /// Number of arguments.
    pub fn num_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Check that every edge endpoint names a known argument.
    pub fn validate(&self) -> MetricResult<()> {
        let index = ArgumentIndex::new(&self.arguments);
        index.check_attacks(&self.attacks)?;
        index.check_supports(&self.supports)
    }
}
