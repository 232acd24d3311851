//! `annotate` — layered subgraph with presentation attributes.
//!
//! Emits the JSON a renderer needs to draw the closure: every node
//! with its group, display rank, and label, plus the edge list.

use clap::Args;
use serde_json::json;

use taxograph_core::ConceptId;
use taxograph_graph::{ancestor_closure, annotate_subgraph, lowest_common_ancestor};

use crate::error::CliResult;

use super::{load_session, to_concepts, LoadArgs};

/// Annotate the targets' ancestor closure for external rendering.
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Target concept codes
    #[arg(required = true, num_args = 1.., value_name = "CONCEPT")]
    pub targets: Vec<i64>,
}

pub fn run(args: AnnotateArgs) -> CliResult<()> {
    let session = load_session(&args.load)?;
    let targets = to_concepts(&args.targets);

    let closure = ancestor_closure(&session.graph, &targets, args.load.missing_policy())?;
    let kept: Vec<ConceptId> = targets
        .iter()
        .copied()
        .filter(|&t| closure.contains(t))
        .collect();

    let ancestor = lowest_common_ancestor(&closure, &kept)?;
    let annotations = annotate_subgraph(&closure, &kept, ancestor, session.resolver.as_ref())?;

    let mut nodes: Vec<(ConceptId, usize)> = annotations
        .iter()
        .map(|(&id, annotation)| (id, annotation.rank))
        .collect();
    nodes.sort_unstable_by_key(|&(id, rank)| (rank, id));
    let nodes: Vec<serde_json::Value> = nodes
        .into_iter()
        .map(|(id, _)| {
            let annotation = &annotations[&id];
            json!({
                "id": id.code(),
                "group": annotation.group,
                "rank": annotation.rank,
                "label": annotation.label,
            })
        })
        .collect();

    let mut edges: Vec<(i64, i64, i64)> = Vec::with_capacity(closure.edge_count());
    for parent in closure.nodes() {
        for edge in closure.children(parent) {
            edges.push((parent.code(), edge.child.code(), edge.relationship.0));
        }
    }
    edges.sort_unstable();
    let edges: Vec<serde_json::Value> = edges
        .into_iter()
        .map(|(parent, child, relationship)| {
            json!({ "parent": parent, "child": child, "relationship": relationship })
        })
        .collect();

    let output = json!({
        "ancestor": ancestor.map(ConceptId::code),
        "nodes": nodes,
        "edges": edges,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
