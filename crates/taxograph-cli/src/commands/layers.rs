//! `layers` — topological generations of a closure or the full graph.

use clap::Args;
use serde_json::json;

use taxograph_graph::{ancestor_closure, layer_all};

use crate::error::CliResult;

use super::{load_session, to_concepts, LoadArgs};

/// Print the topological generations of the ancestor closure of the
/// targets, or of the whole graph when no targets are given.
#[derive(Args, Debug)]
pub struct LayersArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Target concept codes (omit to layer the full graph)
    #[arg(value_name = "CONCEPT")]
    pub targets: Vec<i64>,
}

pub fn run(args: LayersArgs) -> CliResult<()> {
    let session = load_session(&args.load)?;
    let targets = to_concepts(&args.targets);

    let subject = if targets.is_empty() {
        session.graph
    } else {
        ancestor_closure(&session.graph, &targets, args.load.missing_policy())?
    };

    // Sort within each generation for stable output; the partition
    // itself is deterministic, the internal order is not.
    let generations: Vec<Vec<i64>> = layer_all(&subject)?
        .into_iter()
        .map(|generation| {
            let mut codes: Vec<i64> = generation.into_iter().map(|c| c.code()).collect();
            codes.sort_unstable();
            codes
        })
        .collect();

    let output = json!({
        "nodes": subject.node_count(),
        "edges": subject.edge_count(),
        "generations": generations,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
