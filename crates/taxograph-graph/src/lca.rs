//! Generalized lowest-common-ancestor search.
//!
//! Classic LCA takes a pair; a taxonomy query wants the deepest node
//! from which an arbitrary target set is reachable. Rather than run a
//! path-existence check per candidate node per target, the search
//! precomputes each target's reflexive ancestor set once and
//! intersects: a node qualifies iff it sits in every set. The
//! layering then pins down which qualifying node is deepest.

use std::collections::HashSet;

use taxograph_core::ConceptId;

use crate::error::{GraphError, GraphResult};
use crate::graph::ConceptGraph;
use crate::layering::Generations;

/// Find the deepest node reachable to every target.
///
/// A node `n` qualifies when a directed path `n → t` exists for each
/// target `t`, counting `n = t` as a path of length zero. Generations
/// are scanned root-to-leaf, every generation, and the answer comes
/// from the deepest one containing a qualifying node. Within that
/// generation the maximum concept id is returned, but callers may rely
/// only on "some qualifying node from the deepest qualifying
/// generation".
///
/// # Returns
///
/// * `Ok(Some(ancestor))` - deepest node reaching every target
/// * `Ok(None)` - empty target set, or no node reaches all targets
/// * `Err(GraphError::UnknownConcept)` - a target is absent from `graph`
/// * `Err(GraphError::CyclicGraph)` - the layering hit a cycle
pub fn lowest_common_ancestor(
    graph: &ConceptGraph,
    targets: &[ConceptId],
) -> GraphResult<Option<ConceptId>> {
    if targets.is_empty() {
        return Ok(None);
    }
    for &target in targets {
        if !graph.contains(target) {
            return Err(GraphError::UnknownConcept(target));
        }
    }

    // Intersection of reflexive ancestor sets: the nodes that reach
    // every target.
    let mut candidates: Option<HashSet<ConceptId>> = None;
    for &target in targets {
        let mut reaches = graph.ancestors(target);
        reaches.insert(target);

        candidates = Some(match candidates {
            None => reaches,
            Some(current) => current.intersection(&reaches).copied().collect(),
        });

        if candidates.as_ref().is_some_and(HashSet::is_empty) {
            return Ok(None);
        }
    }
    let candidates = candidates.unwrap_or_default();

    let mut best: Option<ConceptId> = None;
    for generation in Generations::new(graph) {
        let generation = generation?;
        if let Some(deepest) = generation
            .iter()
            .copied()
            .filter(|node| candidates.contains(node))
            .max()
        {
            best = Some(deepest);
        }
    }

    Ok(best)
}
