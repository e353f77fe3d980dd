//! Attack and support edges between arguments.

use serde::{Deserialize, Serialize};
use super::argument::ArgumentId;

/// Attack relation: `attacker` undermines `attacked`.
///
/// Implements `Ord` for deterministic ordering: (attacker, attacked).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttackEdge {
    /// Attacking argument (source).
    pub attacker: ArgumentId,
    /// Attacked argument (target).
    pub attacked: ArgumentId,
}

impl AttackEdge {
    /// Create a new attack edge.
    pub fn new(attacker: impl Into<ArgumentId>, attacked: impl Into<ArgumentId>) -> Self {
        Self {
            attacker: attacker.into(),
            attacked: attacked.into(),
        }
    }

    /// Check whether this edge is `attacker -> attacked`.
    pub fn links(&self, attacker: &ArgumentId, attacked: &ArgumentId) -> bool {
        &self.attacker == attacker && &self.attacked == attacked
    }
}

impl<A: Into<ArgumentId>, B: Into<ArgumentId>> From<(A, B)> for AttackEdge {
    fn from((attacker, attacked): (A, B)) -> Self {
        Self::new(attacker, attacked)
    }
}

/// Support relation: `supporter` bolsters `supported`.
///
/// Field order follows the pair convention `(supported, supporter)` used by
/// explanation pipelines. For cycle detection the edge is walked
/// `supported -> supporter`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupportEdge {
    /// Supported argument.
    pub supported: ArgumentId,
    /// Supporting argument.
    pub supporter: ArgumentId,
}

impl SupportEdge {
    /// Create a new support edge.
    pub fn new(supported: impl Into<ArgumentId>, supporter: impl Into<ArgumentId>) -> Self {
        Self {
            supported: supported.into(),
            supporter: supporter.into(),
        }
    }
}

impl<A: Into<ArgumentId>, B: Into<ArgumentId>> From<(A, B)> for SupportEdge {
    fn from((supported, supporter): (A, B)) -> Self {
        Self::new(supported, supporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_edge_ordering() {
        let e1 = AttackEdge::new(1, 2);
        let e2 = AttackEdge::new(1, 3);
        let e3 = AttackEdge::new(2, 1);

        // Same attacker, different target
        assert!(e1 < e2);
        // Different attacker
        assert!(e2 < e3);
    }

    #[test]
    fn test_from_tuple() {
        let attack: AttackEdge = ("a", "b").into();
        assert!(attack.links(&"a".into(), &"b".into()));
        assert!(!attack.links(&"b".into(), &"a".into()));

        let support: SupportEdge = (1, 2).into();
        assert_eq!(support.supported, ArgumentId::Int(1));
        assert_eq!(support.supporter, ArgumentId::Int(2));
    }
}
