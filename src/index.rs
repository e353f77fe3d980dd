//! Dense indexing of arguments.
//!
//! Metrics work on integer node indices rather than identifiers. The index
//! is built once per call in O(V) and resolves identifiers in O(log V).

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::error::{MetricError, MetricResult};
use crate::types::{Argument, ArgumentId, AttackEdge, SupportEdge};

/// Mapping from argument identifier to dense node index.
///
/// Node `i` is the `i`-th argument of the slice the index was built from.
/// When an identifier occurs more than once, its first occurrence owns it;
/// later duplicates remain as unreachable nodes.
#[derive(Debug, Clone)]
pub struct ArgumentIndex<'a> {
    positions: BTreeMap<&'a ArgumentId, usize>,
    len: usize,
}

impl<'a> ArgumentIndex<'a> {
    /// Build the index over `arguments`.
    pub fn new(arguments: &'a [Argument]) -> Self {
        let mut positions = BTreeMap::new();
        for (i, arg) in arguments.iter().enumerate() {
            positions.entry(&arg.id).or_insert(i);
        }
        Self {
            positions,
            len: arguments.len(),
        }
    }

    /// Number of nodes (arguments, duplicates included).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve an identifier to its node index.
    pub fn position(&self, id: &ArgumentId) -> MetricResult<usize> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| MetricError::UnknownArgument(id.clone()))
    }

    /// Resolve every argument of `selection`, failing on the first unknown id.
    pub fn positions_of<A: Borrow<Argument>>(&self, selection: &[A]) -> MetricResult<Vec<usize>> {
        selection
            .iter()
            .map(|arg| self.position(&Borrow::<Argument>::borrow(arg).id))
            .collect()
    }

    /// Check that both endpoints of every attack edge are known.
    pub fn check_attacks(&self, attacks: &[AttackEdge]) -> MetricResult<()> {
        for edge in attacks {
            self.position(&edge.attacker)?;
            self.position(&edge.attacked)?;
        }
        Ok(())
    }

    /// Check that both endpoints of every support edge are known.
    pub fn check_supports(&self, supports: &[SupportEdge]) -> MetricResult<()> {
        for edge in supports {
            self.position(&edge.supported)?;
            self.position(&edge.supporter)?;
        }
        Ok(())
    }

    /// Forward adjacency for cycle detection.
    ///
    /// Attacks contribute `attacker -> attacked`. Supports contribute
    /// `supported -> supporter`, so a support chain that loops back to a
    /// supported argument closes a cycle just like an attack chain does.
    /// Neighbour order follows input order, attacks before supports.
    pub fn successors(
        &self,
        attacks: &[AttackEdge],
        supports: &[SupportEdge],
    ) -> MetricResult<Vec<Vec<usize>>> {
        let mut adjacency = vec![Vec::new(); self.len];
        for edge in attacks {
            let from = self.position(&edge.attacker)?;
            let to = self.position(&edge.attacked)?;
            adjacency[from].push(to);
        }
        for edge in supports {
            let from = self.position(&edge.supported)?;
            let to = self.position(&edge.supporter)?;
            adjacency[from].push(to);
        }
        Ok(adjacency)
    }

    /// Reverse attack adjacency: the direct attackers of each node.
    ///
    /// Duplicated edges produce duplicated entries.
    pub fn attackers(&self, attacks: &[AttackEdge]) -> MetricResult<Vec<Vec<usize>>> {
        let mut attackers = vec![Vec::new(); self.len];
        for edge in attacks {
            let attacker = self.position(&edge.attacker)?;
            let attacked = self.position(&edge.attacked)?;
            attackers[attacked].push(attacker);
        }
        Ok(attackers)
    }
}

/// Fixed-size bitset over node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    words: Vec<u64>,
}

impl NodeSet {
    /// Create an empty set able to hold `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; (len + 63) / 64],
        }
    }

    /// Insert a node.
    pub fn insert(&mut self, node: usize) {
        self.words[node / 64] |= 1u64 << (node % 64);
    }

    /// Remove a node.
    pub fn remove(&mut self, node: usize) {
        self.words[node / 64] &= !(1u64 << (node % 64));
    }

    /// Membership test.
    pub fn contains(&self, node: usize) -> bool {
        self.words[node / 64] & (1u64 << (node % 64)) != 0
    }

    /// Number of nodes in the set.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
