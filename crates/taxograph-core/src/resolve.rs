//! Name resolution seam.
//!
//! Display names live outside the core: a description table, a remote
//! terminology service, or nothing at all. The graph layer only needs
//! a lookup that either produces a display string or admits it could
//! not, so the outcome is a tagged [`Resolution`] rather than a string
//! that is sometimes secretly an identifier.

use serde::Serialize;

use crate::types::ConceptId;

/// Outcome of a display-name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// A display name was found.
    Resolved(String),
    /// No name is known; callers fall back to the identifier.
    Unresolved(ConceptId),
}

impl Resolution {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Text to show a human: the name when resolved, the raw code otherwise.
    pub fn display(&self) -> String {
        match self {
            Self::Resolved(name) => name.clone(),
            Self::Unresolved(concept) => concept.to_string(),
        }
    }
}

/// External collaborator that maps concepts to display names.
pub trait NameResolver {
    fn resolve(&self, concept: ConceptId) -> Resolution;
}

/// Resolver that knows no names; every lookup falls back to the id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl NameResolver for NullResolver {
    fn resolve(&self, concept: ConceptId) -> Resolution {
        Resolution::Unresolved(concept)
    }
}
