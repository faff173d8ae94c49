//! Adjacency-list storage: each vertex maps to its outgoing edge list.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::format::pajek::{self, EdgeLineStyle, PajekEvent};
use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexId};

use super::Graph;

/// Directed graph backed by per-vertex outgoing edge lists.
///
/// Vertex lookup by id is O(1) through a side index; edge insertion, removal
/// and adjacency tests are linear in the origin's out-degree. Memory cost is
/// O(V + E). Neighborhoods are reported in edge-insertion order.
#[derive(Debug, Default)]
pub struct AdjacencyListGraph {
    /// Vertex arena in insertion order.
    vertices: Vec<Vertex>,
    /// Outgoing edges per arena slot, in insertion order.
    out_edges: Vec<Vec<Edge>>,
    /// Vertex id -> arena slot.
    index: HashMap<VertexId, usize>,
}

impl AdjacencyListGraph {
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

    fn slot(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Insert a vertex that already carries its id (Pajek import path).
    fn insert_vertex(&mut self, vertex: Vertex) -> bool {
        if self.index.contains_key(&vertex.id) {
            log::warn!("vertex ID {} already present; vertex not added", vertex.id);
            return false;
        }
        self.index.insert(vertex.id, self.vertices.len());
        self.vertices.push(vertex);
        self.out_edges.push(Vec::new());
        true
    }

    fn edge_position(&self, origin: VertexId, destination: VertexId) -> Option<(usize, usize)> {
        let slot = self.slot(origin)?;
        self.out_edges[slot]
            .iter()
            .position(|edge| edge.destination == destination)
            .map(|pos| (slot, pos))
    }
}

impl Graph for AdjacencyListGraph {
    fn add_vertices(&mut self, count: usize, make: &mut dyn FnMut() -> Vertex) {
        let base = self.vertices.len() as VertexId;
        for offset in 1..=count as VertexId {
            let mut vertex = make();
            vertex.id = base + offset;
            self.insert_vertex(vertex);
        }
    }

    fn add_edge(&mut self, edge: Edge) -> bool {
        let Some(slot) = self.slot(edge.origin) else {
            log::warn!("origin vertex ID {} not found; edge not added", edge.origin);
            return false;
        };
        if self.slot(edge.destination).is_none() {
            log::warn!(
                "destination vertex ID {} not found; edge not added",
                edge.destination
            );
            return false;
        }
        if self.out_edges[slot]
            .iter()
            .any(|existing| existing.destination == edge.destination)
        {
            log::warn!(
                "edge {} -> {} already exists; edge not added",
                edge.origin,
                edge.destination
            );
            return false;
        }
        self.out_edges[slot].push(edge);
        true
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> bool {
        match self.edge_position(origin, destination) {
            Some((slot, pos)) => {
                self.out_edges[slot].remove(pos);
                true
            }
            None => false,
        }
    }

    fn weigh_vertex(&mut self, id: VertexId, weight: i64) -> bool {
        match self.slot(id) {
            Some(slot) => {
                self.vertices[slot].weight = Some(weight);
                true
            }
            None => false,
        }
    }

    fn label_vertex(&mut self, id: VertexId, label: &str) -> bool {
        match self.slot(id) {
            Some(slot) => {
                self.vertices[slot].label = Some(label.to_string());
                true
            }
            None => false,
        }
    }

    fn weigh_edge(&mut self, origin: VertexId, destination: VertexId, weight: i64) -> bool {
        match self.edge_position(origin, destination) {
            Some((slot, pos)) => {
                self.out_edges[slot][pos].weight = Some(weight);
                true
            }
            None => false,
        }
    }

    fn label_edge(&mut self, origin: VertexId, destination: VertexId, label: &str) -> bool {
        match self.edge_position(origin, destination) {
            Some((slot, pos)) => {
                self.out_edges[slot][pos].label = Some(label.to_string());
                true
            }
            None => false,
        }
    }

    fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> bool {
        self.edge_position(v1, v2).is_some()
    }

    /// Pure endpoint comparison; membership of either edge is not consulted.
    fn are_edges_adjacent(&self, e1: &Edge, e2: &Edge) -> bool {
        e1.destination == e2.origin
    }

    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool {
        self.edge_position(origin, destination).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    fn is_complete(&self) -> bool {
        let n = self.vertices.len();
        if n == 0 {
            return true;
        }
        self.out_edges.iter().all(|edges| edges.len() == n - 1)
    }

    fn neighborhood(&self, vertex: VertexId) -> Vec<VertexId> {
        match self.slot(vertex) {
            Some(slot) => self.out_edges[slot]
                .iter()
                .map(|edge| edge.destination)
                .collect(),
            None => Vec::new(),
        }
    }

    fn vertex_by_id(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.slot(id)
            .map(|slot| &self.vertices[slot])
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn export_pajek(&self, out: &mut dyn Write, style: EdgeLineStyle) -> GraphResult<()> {
        pajek::write_vertices(out, self.vertices.len(), self.vertices.iter())?;
        pajek::write_edges(out, self.edge_count(), self.out_edges.iter().flatten(), style)
    }

    fn import_pajek(&mut self, source: &mut dyn BufRead) -> GraphResult<()> {
        for event in pajek::read_events(source)? {
            match event {
                // The header count is not trusted here; vertices come from
                // their own lines, ids included.
                PajekEvent::VerticesHeader(_) | PajekEvent::EdgesHeader(_) => {}
                PajekEvent::Vertex(line) => {
                    self.insert_vertex(line.into());
                }
                PajekEvent::Edge(line) => {
                    self.add_edge(line.into());
                }
            }
        }
        Ok(())
    }
}
