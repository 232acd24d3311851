//! Per-query presentation attributes.
//!
//! Rendering wants three things per node: a group (is this a target,
//! the chosen ancestor, or scenery), a display rank (its generation
//! index), and a label. Those are query-specific, so they live in a
//! map owned by the query rather than as attributes on the shared
//! graph, which stays immutable.

use std::collections::HashMap;

use serde::Serialize;

use taxograph_core::{ConceptId, NameResolver, Resolution};

use crate::error::GraphResult;
use crate::graph::ConceptGraph;
use crate::layering::layer_all;

/// Group classification a renderer keys its styling on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayGroup {
    /// A queried target node.
    Target,
    /// The chosen common ancestor.
    Ancestor,
    /// Everything else in the subgraph.
    Normal,
}

/// Presentation attributes for one node of a layered subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeAnnotation {
    pub group: DisplayGroup,
    /// Generation index, usable as a hierarchical display level.
    pub rank: usize,
    /// Display name over the raw code, or just the code when unresolved.
    pub label: String,
}

/// Annotate every node of `graph` for rendering.
///
/// The designated `ancestor` wins over target membership when both
/// apply. Labels come from the resolver: a resolved name is shown
/// above the code, an unresolved concept shows the code alone.
///
/// # Errors
///
/// Propagates `CyclicGraph` from the layering; an unlayerable subgraph
/// has no display ranks.
pub fn annotate_subgraph(
    graph: &ConceptGraph,
    targets: &[ConceptId],
    ancestor: Option<ConceptId>,
    resolver: &dyn NameResolver,
) -> GraphResult<HashMap<ConceptId, NodeAnnotation>> {
    let mut annotations: HashMap<ConceptId, NodeAnnotation> =
        HashMap::with_capacity(graph.node_count());

    for (rank, generation) in layer_all(graph)?.into_iter().enumerate() {
        for node in generation {
            let group = if ancestor == Some(node) {
                DisplayGroup::Ancestor
            } else if targets.contains(&node) {
                DisplayGroup::Target
            } else {
                DisplayGroup::Normal
            };

            let label = match resolver.resolve(node) {
                Resolution::Resolved(name) => format!("{name}\n{node}"),
                Resolution::Unresolved(_) => node.to_string(),
            };

            annotations.insert(node, NodeAnnotation { group, rank, label });
        }
    }

    Ok(annotations)
}
