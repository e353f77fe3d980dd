//! Lookup helpers for assembling argument selections and custom metrics.
//!
//! These are plain linear scans; explanation graphs hold tens of
//! arguments, so no index is built.

use crate::types::{Argument, ArgumentId, AttackEdge};

/// Select the arguments whose conclusion is `conclusion`, in input order.
///
/// This is the usual way to derive `args_y_hat` from a predicted label.
pub fn get_arguments_for_conclusion<'a>(arguments: &'a [Argument], conclusion: &str) -> Vec<&'a Argument> {
    arguments
        .iter()
        .filter(|arg| arg.supports_conclusion(conclusion))
        .collect()
}

/// Find the direct attackers of the argument `id`.
///
/// Returns each argument `x` for which the edge `(x.id, id)` exists, in
/// argument order. An attacker appears once even if its edge is duplicated.
pub fn get_attackers<'a>(
    arguments: &'a [Argument],
    attack_edges: &[AttackEdge],
    id: &ArgumentId,
) -> Vec<&'a Argument> {
    arguments
        .iter()
        .filter(|candidate| attack_edges.iter().any(|edge| edge.links(&candidate.id, id)))
        .collect()
}

/// Dialectical strength of an argument.
pub fn get_dialectical_strength(argument: &Argument) -> f64 {
    argument.strength
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Argument> {
        vec![
            Argument::new(1, "spam", 0.9),
            Argument::new(2, "ham", 0.4),
            Argument::new(3, "spam", 0.2),
        ]
    }

    #[test]
    fn test_arguments_for_conclusion() {
        let arguments = sample();
        let spam = get_arguments_for_conclusion(&arguments, "spam");

        let ids: Vec<_> = spam.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![ArgumentId::Int(1), ArgumentId::Int(3)]);
        assert!(get_arguments_for_conclusion(&arguments, "eggs").is_empty());
    }

    #[test]
    fn test_attackers_in_argument_order() {
        let arguments = sample();
        let attacks = vec![
            AttackEdge::new(3, 1),
            AttackEdge::new(2, 1),
            AttackEdge::new(2, 1),
        ];

        let attackers = get_attackers(&arguments, &attacks, &ArgumentId::Int(1));
        let ids: Vec<_> = attackers.iter().map(|a| a.id.clone()).collect();

        assert_eq!(ids, vec![ArgumentId::Int(2), ArgumentId::Int(3)]);
        assert!(get_attackers(&arguments, &attacks, &ArgumentId::Int(2)).is_empty());
    }

    #[test]
    fn test_dialectical_strength() {
        let arguments = sample();
        assert_eq!(get_dialectical_strength(&arguments[0]), 0.9);
    }
}
