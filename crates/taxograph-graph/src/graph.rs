//! The immutable concept graph.
//!
//! Adjacency is kept in both directions: parent → child edges carry the
//! relationship type, and a child → parents index serves the ancestor
//! walks. Edge direction runs from the broader concept to the narrower
//! one, so "ancestor" always means "reaches via child edges".
//!
//! Construction happens through the builder; once built, a graph is
//! never mutated. Queries that need scratch state (closures, layerings,
//! annotations) derive their own structures instead of writing to the
//! graph, which keeps shared read-only access across concurrent queries
//! sound.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use taxograph_core::{ConceptId, RelationshipType};

/// A typed parent → child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConceptEdge {
    /// The narrower concept this edge points at.
    pub child: ConceptId,
    /// Relationship type of the authoritative record that asserted the edge.
    pub relationship: RelationshipType,
}

/// Directed acyclic graph over concept identifiers.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    children: HashMap<ConceptId, Vec<ConceptEdge>>,
    parents: HashMap<ConceptId, Vec<ConceptId>>,
    nodes: HashSet<ConceptId>,
    edge_count: usize,
}

impl ConceptGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parent → child edge, creating both endpoints as needed.
    ///
    /// Exact duplicates (same endpoints and type) collapse; the same
    /// node pair may carry edges of different relationship types.
    pub(crate) fn insert_edge(
        &mut self,
        parent: ConceptId,
        child: ConceptId,
        relationship: RelationshipType,
    ) {
        self.nodes.insert(parent);
        self.nodes.insert(child);

        let edge = ConceptEdge {
            child,
            relationship,
        };
        let out = self.children.entry(parent).or_default();
        if out.contains(&edge) {
            return;
        }
        out.push(edge);
        self.edge_count += 1;

        let up = self.parents.entry(child).or_default();
        if !up.contains(&parent) {
            up.push(parent);
        }
    }

    pub(crate) fn insert_node(&mut self, node: ConceptId) {
        self.nodes.insert(node);
    }

    #[inline]
    pub fn contains(&self, concept: ConceptId) -> bool {
        self.nodes.contains(&concept)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = ConceptId> + '_ {
        self.nodes.iter().copied()
    }

    /// Outgoing (narrowing) edges of a concept.
    pub fn children(&self, concept: ConceptId) -> &[ConceptEdge] {
        self.children
            .get(&concept)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct broader concepts of a concept.
    pub fn parents(&self, concept: ConceptId) -> &[ConceptId] {
        self.parents
            .get(&concept)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of incoming edges counted over distinct parents.
    #[inline]
    pub fn in_degree(&self, concept: ConceptId) -> usize {
        self.parents(concept).len()
    }

    /// Nodes with no incoming edge, in unspecified order.
    pub fn roots(&self) -> impl Iterator<Item = ConceptId> + '_ {
        self.nodes().filter(|&n| self.in_degree(n) == 0)
    }

    /// All transitive broader concepts of `concept` (non-reflexive).
    ///
    /// Reverse BFS over the parent index; returns the empty set for a
    /// root or for a concept not present in the graph.
    pub fn ancestors(&self, concept: ConceptId) -> HashSet<ConceptId> {
        let mut seen: HashSet<ConceptId> = HashSet::new();
        let mut frontier: VecDeque<ConceptId> = VecDeque::new();
        frontier.push_back(concept);

        while let Some(current) = frontier.pop_front() {
            for &parent in self.parents(current) {
                if seen.insert(parent) {
                    frontier.push_back(parent);
                }
            }
        }

        seen
    }

    /// Whether a directed path `from → to` exists (reflexively true).
    pub fn has_path(&self, from: ConceptId, to: ConceptId) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        if from == to {
            return true;
        }

        let mut seen: HashSet<ConceptId> = HashSet::new();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            for edge in self.children(current) {
                if edge.child == to {
                    return true;
                }
                if seen.insert(edge.child) {
                    stack.push(edge.child);
                }
            }
        }
        false
    }

    /// Subgraph induced on `keep`: those nodes and every edge whose
    /// endpoints both survive.
    pub fn induced_subgraph(&self, keep: &HashSet<ConceptId>) -> ConceptGraph {
        let mut sub = ConceptGraph::new();
        for &node in keep {
            if !self.contains(node) {
                continue;
            }
            sub.insert_node(node);
            for edge in self.children(node) {
                if keep.contains(&edge.child) {
                    sub.insert_edge(node, edge.child, edge.relationship);
                }
            }
        }
        sub
    }
}

// Concurrent queries share a built graph read-only
static_assertions::assert_impl_all!(ConceptGraph: Send, Sync);
