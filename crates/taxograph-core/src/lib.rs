//! Domain types and record handling for the taxograph tools.
//!
//! This crate holds everything the graph layer consumes but does not
//! compute: concept identifiers, versioned relationship records with
//! revision deduplication, and the name-resolution seam used by
//! presentation code.
//!
//! # Architecture
//!
//! - **types**: identifier newtypes (`ConceptId`, `RecordId`, `RelationshipType`)
//! - **record**: raw rows, validated records, and revision deduplication
//! - **resolve**: the `NameResolver` seam with its tagged `Resolution` result
//! - **error**: `CoreError` for record validation failures

pub mod error;
pub mod record;
pub mod resolve;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use record::{latest_revisions, RelationshipRecord, RelationshipRow};
pub use resolve::{NameResolver, NullResolver, Resolution};
pub use types::{ConceptId, EffectiveTime, RecordId, RelationshipType};
