//! One-shot evaluation of an explanation against a model prediction.
//!
//! Runs every metric over an [`ArgumentationFramework`] and returns the
//! results as a single fingerprinted value.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::error::MetricResult;
use crate::lookup::get_arguments_for_conclusion;
use crate::metrics::{
    compute_circularity, compute_dialectical_acceptability, compute_dialectical_faithfulness,
};
use crate::policy::{ConfidenceThresholds, ConfidenceTier, ModelPrediction};
use crate::types::ArgumentationFramework;

/// Metric values for one explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationScores {
    /// Fraction of searched components containing a cycle.
    pub circularity: f64,
    /// Acceptability of the arguments for the predicted label.
    pub dialectical_acceptability: f64,
    /// Whether strengths match the confidence tier.
    pub dialectically_faithful: bool,
    /// Tier the model confidence fell into.
    pub confidence_tier: ConfidenceTier,
    /// Number of arguments for the predicted label.
    pub num_predicted_arguments: usize,
    /// Total number of arguments.
    pub num_arguments: usize,
    /// Number of attack edges.
    pub num_attacks: usize,
    /// Number of support edges.
    pub num_supports: usize,
    /// Hash of the thresholds used.
    pub thresholds_hash: String,
    /// Content hash of all fields above.
    pub scores_hash: String,
}

/// Fields covered by `scores_hash`.
#[derive(Serialize)]
struct HashedScores<'a> {
    circularity: f64,
    dialectical_acceptability: f64,
    dialectically_faithful: bool,
    confidence_tier: ConfidenceTier,
    num_predicted_arguments: usize,
    num_arguments: usize,
    num_attacks: usize,
    num_supports: usize,
    thresholds_hash: &'a str,
}

impl ExplanationScores {
    #[allow(clippy::too_many_arguments)]
    fn new(
        circularity: f64,
        dialectical_acceptability: f64,
        dialectically_faithful: bool,
        confidence_tier: ConfidenceTier,
        num_predicted_arguments: usize,
        framework: &ArgumentationFramework,
        thresholds_hash: String,
    ) -> Self {
        let num_arguments = framework.num_arguments();
        let num_attacks = framework.attacks.len();
        let num_supports = framework.supports.len();

        let scores_hash = canonical_hash_hex(&HashedScores {
            circularity,
            dialectical_acceptability,
            dialectically_faithful,
            confidence_tier,
            num_predicted_arguments,
            num_arguments,
            num_attacks,
            num_supports,
            thresholds_hash: &thresholds_hash,
        });

        Self {
            circularity,
            dialectical_acceptability,
            dialectically_faithful,
            confidence_tier,
            num_predicted_arguments,
            num_arguments,
            num_attacks,
            num_supports,
            thresholds_hash,
            scores_hash,
        }
    }
}

/// Evaluates explanations under fixed confidence thresholds.
#[derive(Debug, Clone, Default)]
pub struct ExplanationEvaluator {
    thresholds: ConfidenceThresholds,
}

impl ExplanationEvaluator {
    /// Create an evaluator.
    pub fn new(thresholds: ConfidenceThresholds) -> Self {
        Self { thresholds }
    }

    /// Create an evaluator with thresholds from the environment.
    pub fn from_env() -> MetricResult<Self> {
        Ok(Self::new(ConfidenceThresholds::from_env()?))
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &ConfidenceThresholds {
        &self.thresholds
    }

    /// Score `framework` against `prediction`.
    ///
    /// The arguments for the predicted label are selected by conclusion.
    /// Fails on the first metric error; no partial scores are returned.
    pub fn evaluate(
        &self,
        framework: &ArgumentationFramework,
        prediction: &ModelPrediction,
    ) -> MetricResult<ExplanationScores> {
        framework.validate()?;

        let ArgumentationFramework {
            arguments,
            attacks,
            supports,
        } = framework;
        let args_y_hat = get_arguments_for_conclusion(arguments, &prediction.predicted_label);

        let circularity = compute_circularity(arguments, attacks, supports)?;
        let acceptability = compute_dialectical_acceptability(arguments, attacks, &args_y_hat)?;
        let faithful = compute_dialectical_faithfulness(
            arguments,
            attacks,
            supports,
            &args_y_hat,
            &self.thresholds,
            prediction,
        )?;

        let scores = ExplanationScores::new(
            circularity,
            acceptability,
            faithful,
            self.thresholds.tier(prediction.model_confidence),
            args_y_hat.len(),
            framework,
            self.thresholds.params_hash(),
        );

        tracing::debug!(
            predicted_label = %prediction.predicted_label,
            confidence_tier = %scores.confidence_tier,
            scores_hash = %scores.scores_hash,
            "evaluated explanation"
        );

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;
    use crate::types::{Argument, AttackEdge, SupportEdge};

    fn framework() -> ArgumentationFramework {
        ArgumentationFramework::new(
            vec![
                Argument::new("fever", "flu", 0.8),
                Argument::new("no_cough", "cold", 0.4),
                Argument::new("season", "flu", 0.6),
                Argument::new("test_pending", "cold", 0.3),
                Argument::new("high_temp", "flu", 0.7),
            ],
            vec![
                AttackEdge::new("no_cough", "fever"),
                AttackEdge::new("season", "no_cough"),
            ],
            vec![SupportEdge::new("fever", "high_temp")],
        )
    }

    #[test]
    fn test_evaluate() {
        let evaluator = ExplanationEvaluator::default();
        let scores = evaluator
            .evaluate(&framework(), &ModelPrediction::new("flu", 0.95))
            .unwrap();

        assert_eq!(scores.circularity, 0.0);
        // fever's only attacker is attacked; season and high_temp are unattacked.
        assert!((scores.dialectical_acceptability - 3.0 / 5.0).abs() < 1e-12);
        assert!(scores.dialectically_faithful);
        assert_eq!(scores.confidence_tier, ConfidenceTier::Top);
        assert_eq!(scores.num_predicted_arguments, 3);
        assert_eq!(scores.num_arguments, 5);
        assert_eq!(scores.num_supports, 1);
        assert_eq!(scores.thresholds_hash, evaluator.thresholds().params_hash());
    }

    #[test]
    fn test_scores_hash_determinism() {
        let evaluator = ExplanationEvaluator::default();
        let prediction = ModelPrediction::new("flu", 0.8);

        let s1 = evaluator.evaluate(&framework(), &prediction).unwrap();
        let s2 = evaluator.evaluate(&framework(), &prediction).unwrap();
        assert_eq!(s1, s2);

        let other = evaluator
            .evaluate(&framework(), &ModelPrediction::new("flu", 0.5))
            .unwrap();
        assert_ne!(s1.scores_hash, other.scores_hash);
    }

    #[test]
    fn test_empty_framework_fails() {
        let evaluator = ExplanationEvaluator::default();
        let err = evaluator
            .evaluate(&ArgumentationFramework::default(), &ModelPrediction::new("flu", 0.8))
            .unwrap_err();

        assert_eq!(err, MetricError::EmptyArgumentSet { metric: "circularity" });
    }

    #[test]
    fn test_dangling_support_fails_before_scoring() {
        let mut framework = framework();
        framework.supports.push(SupportEdge::new("fever", "lab_result"));

        let err = ExplanationEvaluator::default()
            .evaluate(&framework, &ModelPrediction::new("flu", 0.8))
            .unwrap_err();
        assert!(err.is_lookup_error());
    }
}
