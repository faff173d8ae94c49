//! Vertex entity.

use serde::Serialize;

use super::VertexId;

/// A graph node with a fixed identity and optional weight/label.
///
/// The id is assigned by the owning graph at creation and never changes;
/// weight and label may be set later through the graph's mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// Unique 1-based identity within a graph.
    pub id: VertexId,
    /// Optional integer weight.
    pub weight: Option<i64>,
    /// Optional text label.
    pub label: Option<String>,
}

impl Vertex {
    /// Create a vertex with the given id and no weight or label.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            weight: None,
            label: None,
        }
    }

    /// Create a vertex with an explicit label.
    pub fn labeled(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            weight: None,
            label: Some(label.into()),
        }
    }
}
