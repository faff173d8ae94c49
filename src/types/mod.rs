//! Core data types for the netgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Vertex identity: a positive integer, unique within a graph, 1-based and
/// assigned sequentially at creation unless imported.
pub type VertexId = u32;
