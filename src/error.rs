//! Error type shared by all metrics.

use crate::types::ArgumentId;

/// Error type for metric computation.
///
/// Every error is a defect in the caller's input; computation is pure, so
/// nothing here is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    /// The metric is undefined for an empty argument set.
    #[error("Cannot compute {metric}: argument set is empty")]
    EmptyArgumentSet {
        /// Metric that was requested.
        metric: &'static str,
    },
    /// An edge or selected argument references an unknown identifier.
    #[error("Argument not found: {0}")]
    UnknownArgument(ArgumentId),
    /// A configuration value could not be parsed.
    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig {
        /// Configuration key.
        key: String,
        /// Raw value that failed to parse.
        value: String,
    },
}

impl MetricError {
    /// Degenerate input for which the metric has no defined value.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::EmptyArgumentSet { .. })
    }

    /// Referential integrity violation between edges and arguments.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownArgument(_))
    }
}

/// Result alias for metric operations.
pub type MetricResult<T> = Result<T, MetricError>;
