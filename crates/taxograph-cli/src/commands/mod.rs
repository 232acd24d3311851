//! Command implementations.

pub mod ancestor;
pub mod annotate;
pub mod layers;

use std::path::PathBuf;

use taxograph_core::{ConceptId, NameResolver, NullResolver, RelationshipType};
use taxograph_graph::{build_graph, BuildReport, ConceptGraph, MissingPolicy};

use crate::error::CliResult;
use crate::names::DescriptionResolver;
use crate::rf2;

/// Arguments shared by every query command.
#[derive(clap::Args, Debug)]
pub struct LoadArgs {
    /// Directory containing the release terminology files
    pub terminology_dir: PathBuf,

    /// Restrict edges to one relationship-type code (default: is-a)
    #[arg(long, value_name = "CODE", conflicts_with = "all_types")]
    pub relationship_type: Option<i64>,

    /// Keep edges of every relationship type
    #[arg(long)]
    pub all_types: bool,

    /// Drop targets missing from the graph instead of aborting
    #[arg(long)]
    pub skip_missing: bool,
}

impl LoadArgs {
    fn filter(&self) -> Option<RelationshipType> {
        if self.all_types {
            None
        } else {
            Some(
                self.relationship_type
                    .map(RelationshipType)
                    .unwrap_or(RelationshipType::IS_A),
            )
        }
    }

    pub(crate) fn missing_policy(&self) -> MissingPolicy {
        if self.skip_missing {
            MissingPolicy::Skip
        } else {
            MissingPolicy::Error
        }
    }
}

/// A loaded query session: built graph plus name resolution.
pub(crate) struct Session {
    pub graph: ConceptGraph,
    pub report: BuildReport,
    pub resolver: Box<dyn NameResolver>,
}

/// Discover release files, build the (filtered) graph, wire up names.
pub(crate) fn load_session(load: &LoadArgs) -> CliResult<Session> {
    let files = rf2::find_release_files(&load.terminology_dir)?;
    let relationship = files.relationship(&load.terminology_dir)?;
    let rows = rf2::read_relationship_rows(relationship)?;

    let (graph, report) = build_graph(rows, load.filter());
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        malformed = report.malformed.len(),
        "concept graph ready"
    );

    let resolver: Box<dyn NameResolver> = match &files.description {
        Some(path) => Box::new(DescriptionResolver::from_release_file(path)?),
        None => Box::new(NullResolver),
    };

    Ok(Session {
        graph,
        report,
        resolver,
    })
}

/// Convert raw target codes from the command line.
pub(crate) fn to_concepts(codes: &[i64]) -> Vec<ConceptId> {
    codes.iter().copied().map(ConceptId).collect()
}
