//! Topological layering into ordered generations.
//!
//! Kahn-style peeling: generation 0 is every node with no incoming
//! edge, generation i the nodes whose predecessors all sit in earlier
//! generations. The iterator is lazy so a consumer (the LCA search, a
//! renderer assigning display ranks) can stop early without paying for
//! the rest of the graph.
//!
//! A cycle leaves nodes that never reach in-degree zero. The iterator
//! detects the stall and yields [`GraphError::CyclicGraph`] instead of
//! looping or silently omitting nodes.

use std::collections::HashMap;

use taxograph_core::ConceptId;

use crate::error::{GraphError, GraphResult};
use crate::graph::ConceptGraph;

/// One topological generation; node order within it is unspecified.
pub type Generation = Vec<ConceptId>;

/// Lazy generation-by-generation traversal of a DAG.
///
/// Yields `Ok(generation)` in root-to-leaf order. On a cyclic input it
/// yields one `Err(CyclicGraph)` and then fuses. Restartable by
/// constructing a fresh iterator over the same graph.
pub struct Generations<'g> {
    graph: &'g ConceptGraph,
    /// Remaining in-degree per not-yet-emitted node.
    pending: HashMap<ConceptId, usize>,
    frontier: Vec<ConceptId>,
    failed: bool,
}

impl<'g> Generations<'g> {
    pub fn new(graph: &'g ConceptGraph) -> Self {
        // Degree counts typed edges, not distinct parents, because the
        // peel below decrements once per edge yielded by `children`.
        let mut pending: HashMap<ConceptId, usize> = HashMap::with_capacity(graph.node_count());
        for node in graph.nodes() {
            for edge in graph.children(node) {
                *pending.entry(edge.child).or_insert(0) += 1;
            }
        }

        let frontier: Vec<ConceptId> = graph
            .nodes()
            .filter(|node| !pending.contains_key(node))
            .collect();

        Self {
            graph,
            pending,
            frontier,
            failed: false,
        }
    }
}

impl Iterator for Generations<'_> {
    type Item = GraphResult<Generation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if self.frontier.is_empty() {
            if self.pending.is_empty() {
                return None;
            }
            // Stalled with nodes left: everything remaining sits on or
            // below a cycle. Report the smallest id for determinism.
            self.failed = true;
            let node = self.pending.keys().copied().min().unwrap_or_default();
            return Some(Err(GraphError::CyclicGraph { node }));
        }

        let current = std::mem::take(&mut self.frontier);
        let mut next: Vec<ConceptId> = Vec::new();

        for &node in &current {
            for edge in self.graph.children(node) {
                if let Some(degree) = self.pending.get_mut(&edge.child) {
                    *degree = degree.saturating_sub(1);
                    if *degree == 0 {
                        self.pending.remove(&edge.child);
                        next.push(edge.child);
                    }
                }
            }
        }

        self.frontier = next;
        Some(Ok(current))
    }
}

/// Collect the full layering, or fail on the first detected cycle.
pub fn layer_all(graph: &ConceptGraph) -> GraphResult<Vec<Generation>> {
    Generations::new(graph).collect()
}
