//! `ancestor` — generalized lowest-common-ancestor query.

use clap::Args;
use serde_json::json;

use taxograph_core::ConceptId;
use taxograph_graph::{ancestor_closure, lowest_common_ancestor};

use crate::error::CliResult;

use super::{load_session, to_concepts, LoadArgs};

/// Find the deepest concept from which every target is reachable.
#[derive(Args, Debug)]
pub struct AncestorArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Target concept codes
    #[arg(required = true, num_args = 1.., value_name = "CONCEPT")]
    pub targets: Vec<i64>,
}

pub fn run(args: AncestorArgs) -> CliResult<()> {
    let session = load_session(&args.load)?;
    let targets = to_concepts(&args.targets);

    let closure = ancestor_closure(&session.graph, &targets, args.load.missing_policy())?;
    let kept: Vec<ConceptId> = targets
        .iter()
        .copied()
        .filter(|&t| closure.contains(t))
        .collect();

    let ancestor = lowest_common_ancestor(&closure, &kept)?;

    let output = json!({
        "targets": kept.iter().map(|t| t.code()).collect::<Vec<_>>(),
        "ancestor": ancestor.map(ConceptId::code),
        "ancestor_name": ancestor.map(|a| session.resolver.resolve(a).display()),
        "closure_nodes": closure.node_count(),
        "closure_edges": closure.edge_count(),
        "malformed_rows": session.report.malformed.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
