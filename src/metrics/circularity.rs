//! Circularity metric.
//!
//! Attack and support edges form one directed graph; the score is the
//! fraction of DFS roots whose search runs into a back edge. Lower is
//! better: a circular explanation argues for its conclusion from itself.
//!
//! ## Counting
//!
//! Roots are tried in argument order and only unvisited nodes start a new
//! search, so the count is per searched component, not per cycle. A search
//! stops at its first back edge and leaves the rest of its path marked as
//! on-stack; a later root that reaches that path also counts as cyclic.

use crate::error::{MetricError, MetricResult};
use crate::index::{ArgumentIndex, NodeSet};
use crate::types::{Argument, AttackEdge, SupportEdge};

/// Compute the circularity score of an explanation.
///
/// Edges are `attacker -> attacked` for attacks and `supported -> supporter`
/// for supports. Returns `(roots whose search found a cycle) / arguments.len()`.
///
/// # Errors
///
/// - [`MetricError::EmptyArgumentSet`] if `arguments` is empty.
/// - [`MetricError::UnknownArgument`] if an edge names an unknown argument.
pub fn compute_circularity(
    arguments: &[Argument],
    attack_edges: &[AttackEdge],
    support_edges: &[SupportEdge],
) -> MetricResult<f64> {
    if arguments.is_empty() {
        return Err(MetricError::EmptyArgumentSet { metric: "circularity" });
    }

    let index = ArgumentIndex::new(arguments);
    let successors = index.successors(attack_edges, support_edges)?;

    let mut search = CycleSearch::new(&successors);
    let cyclic_roots = search.count_cyclic_roots();
    let score = cyclic_roots as f64 / index.len() as f64;

    tracing::debug!(
        num_arguments = index.len(),
        num_attacks = attack_edges.len(),
        num_supports = support_edges.len(),
        cyclic_roots,
        abandoned_on_stack = search.on_stack.count(),
        score,
        "computed circularity"
    );

    Ok(score)
}

/// Explicit-stack depth-first cycle search.
struct CycleSearch<'g> {
    successors: &'g [Vec<usize>],
    visited: NodeSet,
    on_stack: NodeSet,
}

impl<'g> CycleSearch<'g> {
    fn new(successors: &'g [Vec<usize>]) -> Self {
        let len = successors.len();
        Self {
            successors,
            visited: NodeSet::with_len(len),
            on_stack: NodeSet::with_len(len),
        }
    }

    fn count_cyclic_roots(&mut self) -> usize {
        let mut count = 0;
        for root in 0..self.successors.len() {
            if !self.visited.contains(root) && self.search_from(root) {
                count += 1;
            }
        }
        count
    }

    /// Search from `root`, returning true at the first back edge.
    ///
    /// Each frame is `(node, next successor position)`. Neighbours are
    /// explored in adjacency order, matching a recursive search.
    fn search_from(&mut self, root: usize) -> bool {
        self.enter(root);
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let (node, cursor) = *frame;
            match self.successors[node].get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !self.visited.contains(next) {
                        self.enter(next);
                        frames.push((next, 0));
                    } else if self.on_stack.contains(next) {
                        return true;
                    }
                }
                None => {
                    self.on_stack.remove(node);
                    frames.pop();
                }
            }
        }

        false
    }

    fn enter(&mut self, node: usize) {
        self.visited.insert(node);
        self.on_stack.insert(node);
    }
}
