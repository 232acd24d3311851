//! Error types for graph construction and queries.

use thiserror::Error;

use taxograph_core::{ConceptId, CoreError};

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors surfaced by graph construction, layering, and queries.
///
/// Query-time errors carry the offending concept so callers can
/// diagnose without re-running the query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A requested target concept is not present in the graph.
    #[error("unknown concept: {0}")]
    UnknownConcept(ConceptId),

    /// The relationship data violates the acyclicity assumption.
    ///
    /// Layering and LCA search refuse to produce a partial answer;
    /// `node` is one concept known to sit on a cycle.
    #[error("cycle detected in taxonomy at concept {node}")]
    CyclicGraph { node: ConceptId },

    /// Record validation failure bubbled up from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// Compile-time verification that GraphError is thread-safe
static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
