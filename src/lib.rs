//! # argument-metrics
//!
//! Quality metrics for argumentative explanations of model predictions.
//!
//! An argumentative explanation is a small argumentation graph: arguments
//! carrying a conclusion and a strength, linked by attack and support
//! edges. This crate scores such a graph:
//!
//! - **Circularity**: fraction of searched components that contain a cycle
//!   over attack edges and reversed support edges.
//! - **Dialectical acceptability**: how well the arguments for the
//!   predicted label are defended against their attackers.
//! - **Dialectical faithfulness**: whether argument strengths agree with
//!   the model's confidence tier.
//!
//! ## Architecture
//!
//! ```text
//! ArgumentationFramework ─┬─> compute_circularity ─────────────────┐
//!                         ├─> compute_dialectical_acceptability ───┼─> ExplanationScores
//!                         └─> compute_dialectical_faithfulness ────┘
//!                                       ↑
//!                      ConfidenceThresholds + ModelPrediction
//! ```
//!
//! Every metric is a pure function. Inputs are borrowed, never mutated, and
//! no state is kept between calls.
//!
//! ## Example
//!
//! ```
//! use argument_metrics::{
//!     Argument, AttackEdge, compute_circularity, compute_dialectical_acceptability,
//!     get_arguments_for_conclusion,
//! };
//!
//! let arguments = vec![
//!     Argument::new(1, "positive", 0.8),
//!     Argument::new(2, "negative", 0.4),
//!     Argument::new(3, "positive", 0.6),
//! ];
//! let attacks = vec![AttackEdge::new(2, 1), AttackEdge::new(3, 2)];
//!
//! assert_eq!(compute_circularity(&arguments, &attacks, &[]).unwrap(), 0.0);
//!
//! let y_hat = get_arguments_for_conclusion(&arguments, "positive");
//! let acceptability = compute_dialectical_acceptability(&arguments, &attacks, &y_hat).unwrap();
//! assert!((acceptability - 2.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod error;
pub mod index;
pub mod lookup;
pub mod metrics;
pub mod policy;
pub mod evaluator;
pub mod canonical;

// Re-exports
pub use types::{Argument, ArgumentId, AttackEdge, SupportEdge, ArgumentationFramework};
pub use error::{MetricError, MetricResult};
pub use index::{ArgumentIndex, NodeSet};
pub use lookup::{get_arguments_for_conclusion, get_attackers, get_dialectical_strength};
pub use metrics::{
    compute_circularity, compute_dialectical_acceptability, compute_dialectical_faithfulness,
    STRONG_ARGUMENT_THRESHOLD,
};
pub use policy::{
    ConfidenceThresholds, ConfidenceTier, ModelPrediction,
    TOP_CONFIDENCE_ENV, HIGH_CONFIDENCE_ENV,
};
pub use evaluator::{ExplanationEvaluator, ExplanationScores};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
