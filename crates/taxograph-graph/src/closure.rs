//! Ancestor-closure extraction.
//!
//! A query rarely wants the full taxonomy. The closure of a target set
//! is the targets plus every transitive broader concept, and the
//! induced subgraph on that set is small enough to layer and search
//! interactively.

use std::collections::HashSet;

use taxograph_core::ConceptId;

use crate::error::{GraphError, GraphResult};
use crate::graph::ConceptGraph;

/// What to do with targets that are not present in the graph.
///
/// The choice is the caller's; there is no default that silently
/// returns an incomplete closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Abort the query with [`GraphError::UnknownConcept`].
    Error,
    /// Drop unknown targets and close over the rest.
    Skip,
}

/// Extract the subgraph induced on `targets` and all their ancestors.
///
/// Every node in the result other than the targets has at least one
/// directed path to some target, and the result inherits acyclicity
/// from the input graph. Applying the extraction to its own output
/// changes nothing.
///
/// # Errors
///
/// With [`MissingPolicy::Error`], the first target absent from `graph`
/// aborts the query as `UnknownConcept`.
pub fn ancestor_closure(
    graph: &ConceptGraph,
    targets: &[ConceptId],
    missing: MissingPolicy,
) -> GraphResult<ConceptGraph> {
    let mut known: Vec<ConceptId> = Vec::with_capacity(targets.len());
    for &target in targets {
        if graph.contains(target) {
            known.push(target);
        } else {
            match missing {
                MissingPolicy::Error => return Err(GraphError::UnknownConcept(target)),
                MissingPolicy::Skip => {
                    tracing::debug!(concept = target.code(), "skipping unknown target");
                }
            }
        }
    }

    let mut closure: HashSet<ConceptId> = known.iter().copied().collect();
    for &target in &known {
        closure.extend(graph.ancestors(target));
    }

    Ok(graph.induced_subgraph(&closure))
}
