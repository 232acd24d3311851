//! Identifier newtypes for the concept taxonomy.
//!
//! All identity in the source data is a large integer code. The
//! newtypes keep concept identity, record identity, and relationship
//! typing from being mixed up at call sites; none of them carry any
//! semantics beyond equality, ordering, and hashing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Effective-time version carried by every relationship revision.
///
/// Release files encode this as `YYYYMMDD`; parsing happens at the feed
/// boundary, the core only compares dates.
pub type EffectiveTime = chrono::NaiveDate;

/// Opaque identifier of a concept (a node in the taxonomy).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ConceptId(pub i64);

impl ConceptId {
    /// Raw integer code.
    #[inline]
    pub fn code(self) -> i64 {
        self.0
    }
}

impl From<i64> for ConceptId {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a relationship assertion, stable across revisions.
///
/// Several records may share a `RecordId` with different effective
/// times; only the most recent revision is authoritative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl From<i64> for RecordId {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relationship type tag carried on every edge.
///
/// A relationship type is itself a concept code. The only type this
/// crate names is the hierarchy-defining [`RelationshipType::IS_A`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RelationshipType(pub i64);

impl RelationshipType {
    /// The "is a" relationship, the backbone of the taxonomy.
    pub const IS_A: RelationshipType = RelationshipType(116_680_003);
}

impl From<i64> for RelationshipType {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
