//! Dialectical faithfulness metric.
//!
//! Checks that argument strengths agree with the model's confidence tier:
//!
//! | Tier | Unfaithful when |
//! |------|-----------------|
//! | Top  | an attacker is at least as strong as the argument it attacks |
//! | High | an attacker is strictly stronger than the argument it attacks |
//! | Low  | a strong argument (`> 0.5`) has an attacker no stronger than itself |
//!
//! The low tier is inverted relative to the other two: a low-confidence
//! prediction resting on a strong argument that is only opposed by weaker
//! attackers is reported as unfaithful.

use std::borrow::Borrow;

use crate::error::MetricResult;
use crate::index::ArgumentIndex;
use crate::lookup::{get_attackers, get_dialectical_strength};
use crate::policy::{ConfidenceThresholds, ConfidenceTier, ModelPrediction};
use crate::types::{Argument, AttackEdge, SupportEdge};

/// Strength above which an argument counts as strong in the low tier.
pub const STRONG_ARGUMENT_THRESHOLD: f64 = 0.5;

/// Compute whether an explanation is dialectically faithful to the model.
///
/// Only members of `args_y_hat` whose conclusion is the predicted label are
/// checked. Returns `false` at the first violating (argument, attacker)
/// pair. Support edges do not influence the result.
///
/// # Errors
///
/// [`crate::MetricError::UnknownArgument`] if an attack edge or a member of
/// `args_y_hat` names an argument missing from `arguments`.
pub fn compute_dialectical_faithfulness<A: Borrow<Argument>>(
    arguments: &[Argument],
    attack_edges: &[AttackEdge],
    _support_edges: &[SupportEdge],
    args_y_hat: &[A],
    thresholds: &ConfidenceThresholds,
    prediction: &ModelPrediction,
) -> MetricResult<bool> {
    let index = ArgumentIndex::new(arguments);
    index.check_attacks(attack_edges)?;
    index.positions_of(args_y_hat)?;

    if !thresholds.is_ordered() {
        tracing::warn!(
            top = thresholds.top_confidence_threshold,
            high = thresholds.high_confidence_threshold,
            "top confidence threshold is below high confidence threshold"
        );
    }

    let tier = thresholds.tier(prediction.model_confidence);
    let arguments_for_predicted = args_y_hat
        .iter()
        .map(|arg| Borrow::<Argument>::borrow(arg))
        .filter(|arg| arg.supports_conclusion(&prediction.predicted_label));

    for arg in arguments_for_predicted {
        if !tier_checks(tier, arg) {
            continue;
        }
        for attacker in get_attackers(arguments, attack_edges, &arg.id) {
            if violates(tier, arg, attacker) {
                tracing::trace!(
                    %tier,
                    argument = %arg.id,
                    attacker = %attacker.id,
                    "faithfulness violation"
                );
                tracing::debug!(%tier, faithful = false, "computed dialectical faithfulness");
                return Ok(false);
            }
        }
    }

    tracing::debug!(%tier, faithful = true, "computed dialectical faithfulness");
    Ok(true)
}

/// Whether `arg` is subject to checking under `tier`.
fn tier_checks(tier: ConfidenceTier, arg: &Argument) -> bool {
    match tier {
        ConfidenceTier::Top | ConfidenceTier::High => true,
        ConfidenceTier::Low => get_dialectical_strength(arg) > STRONG_ARGUMENT_THRESHOLD,
    }
}

/// Whether the pair `(arg, attacker)` breaks faithfulness under `tier`.
fn violates(tier: ConfidenceTier, arg: &Argument, attacker: &Argument) -> bool {
    let own = get_dialectical_strength(arg);
    let opposing = get_dialectical_strength(attacker);
    match tier {
        ConfidenceTier::Top => opposing >= own,
        ConfidenceTier::High => opposing > own,
        ConfidenceTier::Low => opposing <= own,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;
    use crate::lookup::get_arguments_for_conclusion;

    fn thresholds() -> ConfidenceThresholds {
        ConfidenceThresholds::new(0.9, 0.7)
    }

    fn duel(own: f64, opposing: f64) -> (Vec<Argument>, Vec<AttackEdge>) {
        (
            vec![Argument::new(1, "cat", own), Argument::new(2, "dog", opposing)],
            vec![AttackEdge::new(2, 1)],
        )
    }

    fn faithful(arguments: &[Argument], attacks: &[AttackEdge], confidence: f64) -> bool {
        let y_hat = get_arguments_for_conclusion(arguments, "cat");
        compute_dialectical_faithfulness(
            arguments,
            attacks,
            &[],
            &y_hat,
            &thresholds(),
            &ModelPrediction::new("cat", confidence),
        )
        .unwrap()
    }

    #[test]
    fn test_top_tier_rejects_equal_attacker() {
        let (arguments, attacks) = duel(0.7, 0.7);
        assert!(!faithful(&arguments, &attacks, 0.95));
    }

    #[test]
    fn test_top_tier_accepts_weaker_attacker() {
        let (arguments, attacks) = duel(0.7, 0.69);
        assert!(faithful(&arguments, &attacks, 0.9));
    }

    #[test]
    fn test_high_tier_tolerates_tie() {
        let (arguments, attacks) = duel(0.7, 0.7);
        assert!(faithful(&arguments, &attacks, 0.8));
    }

    #[test]
    fn test_high_tier_rejects_stronger_attacker() {
        let (arguments, attacks) = duel(0.7, 0.71);
        assert!(!faithful(&arguments, &attacks, 0.7));
    }

    #[test]
    fn test_low_tier_exempts_half_strength() {
        let (arguments, attacks) = duel(0.5, 0.1);
        assert!(faithful(&arguments, &attacks, 0.3));
    }

    #[test]
    fn test_low_tier_flags_strong_argument_with_weaker_attacker() {
        let (arguments, attacks) = duel(0.8, 0.8);
        assert!(!faithful(&arguments, &attacks, 0.3));
    }

    #[test]
    fn test_low_tier_accepts_strong_argument_with_stronger_attacker() {
        let (arguments, attacks) = duel(0.8, 0.9);
        assert!(faithful(&arguments, &attacks, 0.3));
    }

    #[test]
    fn test_low_tier_unattacked_strong_argument_is_faithful() {
        let arguments = vec![Argument::new(1, "cat", 0.99)];
        assert!(faithful(&arguments, &[], 0.1));
    }

    #[test]
    fn test_only_predicted_label_is_checked() {
        let (arguments, attacks) = duel(0.2, 0.9);
        // Selection contains the "cat" argument, but the model predicted "dog".
        let y_hat = vec![&arguments[0]];
        let result = compute_dialectical_faithfulness(
            &arguments,
            &attacks,
            &[],
            &y_hat,
            &thresholds(),
            &ModelPrediction::new("dog", 0.99),
        );
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn test_supports_are_ignored() {
        let (arguments, attacks) = duel(0.7, 0.7);
        let supports = vec![SupportEdge::new(1, 2), SupportEdge::new(2, 1)];
        let y_hat = get_arguments_for_conclusion(&arguments, "cat");

        let result = compute_dialectical_faithfulness(
            &arguments,
            &attacks,
            &supports,
            &y_hat,
            &thresholds(),
            &ModelPrediction::new("cat", 0.8),
        );
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn test_unknown_attacker_is_lookup_error() {
        let arguments = vec![Argument::new(1, "cat", 0.7)];
        let attacks = vec![AttackEdge::new(9, 1)];

        let err = compute_dialectical_faithfulness(
            &arguments,
            &attacks,
            &[],
            &arguments,
            &thresholds(),
            &ModelPrediction::new("cat", 0.95),
        )
        .unwrap_err();
        assert_eq!(err, MetricError::UnknownArgument(9.into()));
    }

    #[test]
    fn test_unknown_selected_argument_is_lookup_error() {
        // Low tier with a strong outsider: the scoring loop alone would accept it.
        let arguments = vec![Argument::new(1, "cat", 0.2)];
        let y_hat = vec![Argument::new(42, "cat", 0.9)];

        let result = compute_dialectical_faithfulness(
            &arguments,
            &[],
            &[],
            &y_hat,
            &thresholds(),
            &ModelPrediction::new("cat", 0.1),
        );
        assert_eq!(result, Err(MetricError::UnknownArgument(42.into())));
    }
}
