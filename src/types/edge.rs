//! The directed edge record.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::VertexId;

/// A directed connection between two vertices.
///
/// Edges hold vertex ids, not vertex references: the owning graph is the
/// single source of truth for the vertices themselves. An edge's identity is
/// its (origin, destination) pair — equality and hashing consider only the
/// endpoints, while weight and label are payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Edge {
    /// Origin vertex id.
    pub origin: VertexId,
    /// Destination vertex id.
    pub destination: VertexId,
    /// Optional integer weight.
    pub weight: Option<i64>,
    /// Optional text label.
    pub label: Option<String>,
}

impl Edge {
    /// Create an edge between two vertex ids with no weight or label.
    pub fn new(origin: VertexId, destination: VertexId) -> Self {
        Self {
            origin,
            destination,
            weight: None,
            label: None,
        }
    }

    /// The (origin, destination) pair identifying this edge.
    pub fn key(&self) -> (VertexId, VertexId) {
        (self.origin, self.destination)
    }

    /// True iff `vertex` is one of this edge's endpoints.
    pub fn incides_on(&self, vertex: VertexId) -> bool {
        self.origin == vertex || self.destination == vertex
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
