//! Concept-taxonomy graph construction and structural queries.
//!
//! This crate turns versioned relationship records into an immutable
//! directed acyclic concept graph and answers structural queries over
//! it: ancestor closures, topological generations, and a generalized
//! lowest-common-ancestor search across arbitrarily many targets.
//!
//! # Architecture
//!
//! - **graph**: the immutable [`ConceptGraph`] adjacency structure
//! - **builder**: record validation, revision dedup, edge insertion,
//!   and the explicit per-filter [`GraphCache`]
//! - **closure**: ancestor-closure subgraph extraction
//! - **layering**: lazy topological generations with cycle detection
//! - **lca**: deepest-common-ancestor search over the layering
//! - **annotate**: per-query presentation attributes for external rendering
//! - **error**: [`GraphError`] and the `GraphResult` alias
//!
//! # Example
//!
//! ```
//! use taxograph_core::{ConceptId, RelationshipType};
//! use taxograph_graph::{ancestor_closure, build_graph, lowest_common_ancestor, MissingPolicy};
//! # use taxograph_core::{RecordId, RelationshipRecord, RelationshipRow};
//! # use chrono::NaiveDate;
//! # fn row(id: i64, source: i64, destination: i64) -> RelationshipRow {
//! #     RelationshipRow::from(RelationshipRecord {
//! #         id: RecordId(id),
//! #         source: ConceptId(source),
//! #         destination: ConceptId(destination),
//! #         relationship_type: RelationshipType::IS_A,
//! #         active: true,
//! #         effective_time: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
//! #     })
//! # }
//!
//! # fn main() -> taxograph_graph::GraphResult<()> {
//! let rows = vec![row(1, 10, 1000), row(2, 20, 1000), row(3, 30, 10), row(4, 40, 10)];
//! let (graph, report) = build_graph(rows, Some(RelationshipType::IS_A));
//! assert!(report.is_clean());
//!
//! let targets = [ConceptId(30), ConceptId(40)];
//! let closure = ancestor_closure(&graph, &targets, MissingPolicy::Error)?;
//! let lca = lowest_common_ancestor(&closure, &targets)?;
//! assert_eq!(lca, Some(ConceptId(10)));
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod builder;
pub mod closure;
pub mod error;
pub mod graph;
pub mod layering;
pub mod lca;

pub use annotate::{annotate_subgraph, DisplayGroup, NodeAnnotation};
pub use builder::{build_graph, BuildReport, GraphCache};
pub use closure::{ancestor_closure, MissingPolicy};
pub use error::{GraphError, GraphResult};
pub use graph::{ConceptEdge, ConceptGraph};
pub use layering::{layer_all, Generation, Generations};
pub use lca::lowest_common_ancestor;
