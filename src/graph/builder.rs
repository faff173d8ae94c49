//! Fluent construction of graphs behind the [`Graph`] contract.

use std::path::{Path, PathBuf};

use crate::format::EdgeLineStyle;
use crate::types::{GraphResult, Vertex};

use super::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph};

/// Which backing representation a built graph uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageKind {
    /// Per-vertex outgoing edge lists; O(V + E) memory.
    #[default]
    AdjacencyList,
    /// Boolean incidence matrix; O(1) adjacency tests, O(V^2) memory.
    AdjacencyMatrix,
}

impl StorageKind {
    /// Short name used by the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AdjacencyList => "list",
            Self::AdjacencyMatrix => "matrix",
        }
    }

    /// Parse a storage kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "adjacency_list" => Some(Self::AdjacencyList),
            "matrix" | "adjacency_matrix" => Some(Self::AdjacencyMatrix),
            _ => None,
        }
    }

    /// The edge-line style this backing uses when none is chosen.
    pub fn default_export_style(&self) -> EdgeLineStyle {
        match self {
            Self::AdjacencyList => EdgeLineStyle::EndpointsOnly,
            Self::AdjacencyMatrix => EdgeLineStyle::Annotated,
        }
    }
}

/// Fluent builder choosing a storage strategy and an initial population.
///
/// A Pajek NET import path takes precedence over a vertex count when both
/// are supplied. Defaults: adjacency list, zero vertices.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: usize,
    import: Option<PathBuf>,
    kind: StorageKind,
}

impl GraphBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `count` fresh vertices (ids 1..=count).
    pub fn vertices(mut self, count: usize) -> Self {
        self.vertices = count;
        self
    }

    /// Back the graph with per-vertex edge lists.
    pub fn adjacency_list(mut self) -> Self {
        self.kind = StorageKind::AdjacencyList;
        self
    }

    /// Back the graph with an incidence matrix.
    pub fn adjacency_matrix(mut self) -> Self {
        self.kind = StorageKind::AdjacencyMatrix;
        self
    }

    /// Back the graph with the given representation.
    pub fn backing(mut self, kind: StorageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Populate from a Pajek NET file instead of a vertex count.
    pub fn import_pajek(mut self, path: impl AsRef<Path>) -> Self {
        self.import = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the configured graph.
    pub fn build(self) -> GraphResult<Box<dyn Graph>> {
        let mut graph: Box<dyn Graph> = match self.kind {
            StorageKind::AdjacencyList => Box::new(AdjacencyListGraph::new()),
            StorageKind::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new()),
        };
        if let Some(path) = &self.import {
            graph.import_pajek_file(path)?;
        } else if self.vertices > 0 {
            graph.add_vertices(self.vertices, &mut Vertex::default);
        }
        Ok(graph)
    }
}
