//! Dialectical acceptability metric.
//!
//! Scores how well the arguments for the predicted conclusion withstand
//! attack. An attacker is neutralized when something attacks it back;
//! the status of that counter-attacker is not examined.

use std::borrow::Borrow;

use crate::error::MetricResult;
use crate::index::ArgumentIndex;
use crate::types::{Argument, AttackEdge};

/// Compute the dialectical acceptability of `args_y_hat`.
///
/// Returns exactly `1.0` when no member of `args_y_hat` is attacked.
/// Otherwise each member scores `1` if unattacked, else the fraction of its
/// attackers that are attacked themselves; the sum is divided by the total
/// number of arguments, not by `args_y_hat.len()`.
///
/// # Errors
///
/// [`crate::MetricError::UnknownArgument`] if an attack edge or a member of
/// `args_y_hat` names an argument missing from `arguments`.
pub fn compute_dialectical_acceptability<A: Borrow<Argument>>(
    arguments: &[Argument],
    attack_edges: &[AttackEdge],
    args_y_hat: &[A],
) -> MetricResult<f64> {
    let index = ArgumentIndex::new(arguments);
    let attackers = index.attackers(attack_edges)?;
    let selected = index.positions_of(args_y_hat)?;

    if selected.iter().all(|&node| attackers[node].is_empty()) {
        tracing::debug!(
            num_arguments = index.len(),
            num_selected = selected.len(),
            "no selected argument is attacked"
        );
        return Ok(1.0);
    }

    let total: f64 = selected
        .iter()
        .map(|&node| local_acceptability(&attackers, node))
        .sum();
    let score = total / index.len() as f64;

    tracing::debug!(
        num_arguments = index.len(),
        num_attacks = attack_edges.len(),
        num_selected = selected.len(),
        score,
        "computed dialectical acceptability"
    );

    Ok(score)
}

/// Fraction of `node`'s attackers that have an attacker of their own.
fn local_acceptability(attackers: &[Vec<usize>], node: usize) -> f64 {
    let direct = &attackers[node];
    if direct.is_empty() {
        return 1.0;
    }
    let neutralized = direct
        .iter()
        .filter(|&&attacker| !attackers[attacker].is_empty())
        .count();
    neutralized as f64 / direct.len() as f64
}
