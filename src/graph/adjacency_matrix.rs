//! Adjacency-matrix storage: a boolean incidence matrix plus edge metadata.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::format::pajek::{self, EdgeLineStyle, PajekEvent};
use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexId};

use super::Graph;

/// Directed graph backed by a V x V boolean incidence matrix.
///
/// Adjacency tests are O(1); edge count and completeness checks are full
/// matrix scans. Memory cost is O(V^2) regardless of edge count, and at most
/// one edge can exist per ordered vertex pair. The matrix carries no payload,
/// so weight and label live in a side map keyed by (origin, destination);
/// the map and the matrix are kept in sync on every mutation. Neighborhoods
/// are reported in ascending-id order.
#[derive(Debug, Default)]
pub struct AdjacencyMatrixGraph {
    /// Row-major V x V incidence cells, indexed by (id - 1).
    matrix: Vec<bool>,
    /// Matrix dimension.
    dim: usize,
    /// Member vertices by id; ordered for ascending-id iteration.
    vertices: BTreeMap<VertexId, Vertex>,
    /// Edge metadata keyed by (origin, destination).
    edges: BTreeMap<(VertexId, VertexId), Edge>,
}

impl AdjacencyMatrixGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph pre-populated with `count` plain vertices.
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new();
        graph.add_vertices(count, &mut Vertex::default);
        graph
    }

    /// Flat matrix index for (origin, destination), or `None` when either id
    /// falls outside the allocated dimension.
    fn cell(&self, origin: VertexId, destination: VertexId) -> Option<usize> {
        let row = origin.checked_sub(1)? as usize;
        let col = destination.checked_sub(1)? as usize;
        if row < self.dim && col < self.dim {
            Some(row * self.dim + col)
        } else {
            None
        }
    }

    /// Reallocate the matrix for `new_dim` vertices, keeping existing cells.
    fn grow(&mut self, new_dim: usize) {
        let mut next = vec![false; new_dim * new_dim];
        for row in 0..self.dim {
            for col in 0..self.dim {
                next[row * new_dim + col] = self.matrix[row * self.dim + col];
            }
        }
        self.matrix = next;
        self.dim = new_dim;
    }

    /// Drop all state and reallocate for `count` vertices with ids 1..=count.
    fn reset(&mut self, count: usize) {
        self.matrix.clear();
        self.dim = 0;
        self.vertices.clear();
        self.edges.clear();
        self.add_vertices(count, &mut Vertex::default);
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn add_vertices(&mut self, count: usize, make: &mut dyn FnMut() -> Vertex) {
        let base = self.dim as VertexId;
        self.grow(self.dim + count);
        for offset in 1..=count as VertexId {
            let mut vertex = make();
            vertex.id = base + offset;
            self.vertices.insert(vertex.id, vertex);
        }
    }

    fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.vertices.contains_key(&edge.origin) {
            log::warn!("origin vertex ID {} not found; edge not added", edge.origin);
            return false;
        }
        if !self.vertices.contains_key(&edge.destination) {
            log::warn!(
                "destination vertex ID {} not found; edge not added",
                edge.destination
            );
            return false;
        }
        let key = edge.key();
        if self.edges.contains_key(&key) {
            log::warn!(
                "edge {} -> {} already exists; edge not added",
                edge.origin,
                edge.destination
            );
            return false;
        }
        // Member ids always map into the matrix.
        let Some(cell) = self.cell(edge.origin, edge.destination) else {
            return false;
        };
        self.matrix[cell] = true;
        self.edges.insert(key, edge);
        true
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> bool {
        match self.cell(origin, destination) {
            Some(cell) if self.matrix[cell] => {
                self.matrix[cell] = false;
                self.edges.remove(&(origin, destination));
                true
            }
            _ => false,
        }
    }

    fn weigh_vertex(&mut self, id: VertexId, weight: i64) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.weight = Some(weight);
                true
            }
            None => false,
        }
    }

    fn label_vertex(&mut self, id: VertexId, label: &str) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.label = Some(label.to_string());
                true
            }
            None => false,
        }
    }

    fn weigh_edge(&mut self, origin: VertexId, destination: VertexId, weight: i64) -> bool {
        match self.edges.get_mut(&(origin, destination)) {
            Some(edge) => {
                edge.weight = Some(weight);
                true
            }
            None => false,
        }
    }

    fn label_edge(&mut self, origin: VertexId, destination: VertexId, label: &str) -> bool {
        match self.edges.get_mut(&(origin, destination)) {
            Some(edge) => {
                edge.label = Some(label.to_string());
                true
            }
            None => false,
        }
    }

    fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> bool {
        self.cell(v1, v2).is_some_and(|cell| self.matrix[cell])
    }

    /// Incidence lookup at (e1.destination, e2.origin): true iff that derived
    /// pair is itself an edge of the graph.
    fn are_edges_adjacent(&self, e1: &Edge, e2: &Edge) -> bool {
        self.cell(e1.destination, e2.origin)
            .is_some_and(|cell| self.matrix[cell])
    }

    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool {
        self.are_adjacent(origin, destination)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|&&cell| cell).count()
    }

    fn is_complete(&self) -> bool {
        for row in 0..self.dim {
            for col in 0..self.dim {
                if row != col && !self.matrix[row * self.dim + col] {
                    return false;
                }
            }
        }
        true
    }

    fn neighborhood(&self, vertex: VertexId) -> Vec<VertexId> {
        let Some(row) = vertex
            .checked_sub(1)
            .map(|row| row as usize)
            .filter(|&row| row < self.dim)
        else {
            return Vec::new();
        };
        (0..self.dim)
            .filter(|&col| self.matrix[row * self.dim + col])
            .map(|col| col as VertexId + 1)
            .collect()
    }

    fn vertex_by_id(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    fn export_pajek(&self, out: &mut dyn Write, style: EdgeLineStyle) -> GraphResult<()> {
        pajek::write_vertices(out, self.vertices.len(), self.vertices.values())?;
        pajek::write_edges(out, self.edge_count(), self.edges.values(), style)
    }

    fn import_pajek(&mut self, source: &mut dyn BufRead) -> GraphResult<()> {
        for event in pajek::read_events(source)? {
            match event {
                // The header count is authoritative: vertices are allocated
                // up front and the vertex lines only carry labels.
                PajekEvent::VerticesHeader(count) => self.reset(count),
                PajekEvent::EdgesHeader(_) => {}
                PajekEvent::Vertex(line) => {
                    if let Some(label) = &line.label {
                        if !self.label_vertex(line.id, label) {
                            log::warn!(
                                "vertex ID {} outside the allocated range; label ignored",
                                line.id
                            );
                        }
                    }
                }
                PajekEvent::Edge(line) => {
                    self.add_edge(line.into());
                }
            }
        }
        Ok(())
    }
}
