//! Graph contract and its two backing representations.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod builder;
pub mod contract;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use builder::{GraphBuilder, StorageKind};
pub use contract::Graph;
