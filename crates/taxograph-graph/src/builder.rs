//! Graph construction from relationship rows.
//!
//! The builder validates rows, collapses revision history, drops
//! inactive records, applies an optional relationship-type filter, and
//! inserts one `destination → source` edge per surviving record.
//! Malformed rows are never silently dropped: they are excluded and
//! aggregated into the [`BuildReport`], reported once per build.
//!
//! Because building over a large record set is expensive, repeated
//! queries go through [`GraphCache`], which keys built graphs by their
//! filter and hands out shared `Arc`s. Invalidation is the caller's
//! call; there is no hidden process-wide state.

use std::collections::HashMap;
use std::sync::Arc;

use taxograph_core::{
    latest_revisions, CoreError, RelationshipRecord, RelationshipRow, RelationshipType,
};

use crate::graph::ConceptGraph;

/// Aggregate outcome of one build pass.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Rows seen on input.
    pub rows_seen: usize,
    /// Validation failures, one per excluded row.
    pub malformed: Vec<CoreError>,
    /// Older revisions displaced by a newer effective time.
    pub superseded: usize,
    /// Authoritative records dropped for being inactive.
    pub inactive: usize,
    /// Active records dropped by the relationship-type filter.
    pub filtered_out: usize,
    /// Edges inserted into the graph (after duplicate collapse).
    pub edges_inserted: usize,
}

impl BuildReport {
    /// True when every input row made it through validation.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Emit the one-per-build summary of data problems.
    pub fn log(&self) {
        if self.malformed.is_empty() {
            tracing::debug!(
                rows = self.rows_seen,
                superseded = self.superseded,
                inactive = self.inactive,
                filtered_out = self.filtered_out,
                edges = self.edges_inserted,
                "concept graph built"
            );
        } else {
            tracing::warn!(
                rows = self.rows_seen,
                malformed = self.malformed.len(),
                "concept graph built with malformed rows excluded"
            );
        }
    }
}

/// Build a concept graph from raw relationship rows.
///
/// Pipeline: validate → deduplicate revisions → keep `active == true` →
/// apply `filter` (when given) → insert `destination → source` edges
/// carrying the record's relationship type.
///
/// Deterministic: permuting the input rows yields an isomorphic graph,
/// because revision resolution depends only on effective times (with a
/// deterministic tie-break) and edge insertion is set-like.
pub fn build_graph<I>(rows: I, filter: Option<RelationshipType>) -> (ConceptGraph, BuildReport)
where
    I: IntoIterator<Item = RelationshipRow>,
{
    let mut report = BuildReport::default();

    let mut records: Vec<RelationshipRecord> = Vec::new();
    for row in rows {
        report.rows_seen += 1;
        match RelationshipRecord::try_from(row) {
            Ok(record) => records.push(record),
            Err(err) => report.malformed.push(err),
        }
    }

    let validated = records.len();
    let records = latest_revisions(records);
    report.superseded = validated - records.len();

    let graph = graph_from_records(&records, filter, &mut report);
    report.log();
    (graph, report)
}

/// Edge insertion over already-validated, already-deduplicated records.
fn graph_from_records(
    records: &[RelationshipRecord],
    filter: Option<RelationshipType>,
    report: &mut BuildReport,
) -> ConceptGraph {
    let mut graph = ConceptGraph::new();

    for record in records {
        if !record.active {
            report.inactive += 1;
            continue;
        }
        if let Some(wanted) = filter {
            if record.relationship_type != wanted {
                report.filtered_out += 1;
                continue;
            }
        }
        graph.insert_edge(record.destination, record.source, record.relationship_type);
    }

    report.edges_inserted = graph.edge_count();
    graph
}

/// Explicit per-filter cache over one deduplicated record set.
///
/// The cache owns the validated, revision-collapsed records; each
/// distinct filter value maps to one built graph, shared out as an
/// `Arc` so concurrent queries read the same immutable structure.
/// Swapping in a new record set drops every cached graph.
pub struct GraphCache {
    records: Vec<RelationshipRecord>,
    ingest: BuildReport,
    graphs: HashMap<Option<RelationshipType>, Arc<ConceptGraph>>,
}

impl GraphCache {
    /// Ingest rows once: validate, aggregate malformed, deduplicate.
    pub fn new<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RelationshipRow>,
    {
        let mut ingest = BuildReport::default();
        let mut records: Vec<RelationshipRecord> = Vec::new();

        for row in rows {
            ingest.rows_seen += 1;
            match RelationshipRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(err) => ingest.malformed.push(err),
            }
        }

        let validated = records.len();
        let records = latest_revisions(records);
        ingest.superseded = validated - records.len();

        Self {
            records,
            ingest,
            graphs: HashMap::new(),
        }
    }

    /// Validation and dedup outcome of the ingest pass.
    pub fn ingest_report(&self) -> &BuildReport {
        &self.ingest
    }

    /// The authoritative record set backing every cached graph.
    pub fn records(&self) -> &[RelationshipRecord] {
        &self.records
    }

    /// Graph for a filter, building and memoizing on first request.
    pub fn graph(&mut self, filter: Option<RelationshipType>) -> Arc<ConceptGraph> {
        if let Some(graph) = self.graphs.get(&filter) {
            return Arc::clone(graph);
        }

        let mut report = BuildReport {
            rows_seen: self.records.len(),
            ..BuildReport::default()
        };
        let graph = Arc::new(graph_from_records(&self.records, filter, &mut report));
        report.log();

        self.graphs.insert(filter, Arc::clone(&graph));
        graph
    }

    /// Drop every cached graph, keeping the record set.
    pub fn invalidate(&mut self) {
        self.graphs.clear();
    }

    /// Replace the record set; all cached graphs are dropped.
    pub fn replace_records<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = RelationshipRow>,
    {
        *self = Self::new(rows);
    }
}
