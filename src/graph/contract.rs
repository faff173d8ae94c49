//! The storage-independent graph contract.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::format::EdgeLineStyle;
use crate::types::{Edge, GraphResult, Vertex, VertexId};

/// The contract every storage strategy satisfies: mutation, adjacency and
/// structural queries, and Pajek NET import/export.
///
/// The two provided strategies agree on semantics except at documented
/// variance points: [`Graph::are_edges_adjacent`] and the ordering of
/// [`Graph::neighborhood`]. See the implementation docs.
pub trait Graph {
    /// Populate the graph with `count` fresh vertices produced by `make`.
    ///
    /// Ids are assigned sequentially in creation order, starting at 1 on an
    /// empty graph and continuing from the current population otherwise.
    /// Intended for freshly-created graphs; repeated calls are additive and
    /// unguarded.
    fn add_vertices(&mut self, count: usize, make: &mut dyn FnMut() -> Vertex);

    /// Register a directed edge.
    ///
    /// Both endpoints must already be member vertices and no edge with the
    /// same (origin, destination) pair may exist; on either violation the
    /// edge is discarded with a warning diagnostic and `false` is returned.
    fn add_edge(&mut self, edge: Edge) -> bool;

    /// Remove the edge with the given endpoints. Returns `false` if absent.
    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> bool;

    /// Set the weight of an existing vertex. No-op (`false`) if absent.
    fn weigh_vertex(&mut self, id: VertexId, weight: i64) -> bool;

    /// Set the label of an existing vertex. No-op (`false`) if absent.
    fn label_vertex(&mut self, id: VertexId, label: &str) -> bool;

    /// Set the weight of an existing edge. No-op (`false`) if absent.
    fn weigh_edge(&mut self, origin: VertexId, destination: VertexId, weight: i64) -> bool;

    /// Set the label of an existing edge. No-op (`false`) if absent.
    fn label_edge(&mut self, origin: VertexId, destination: VertexId, label: &str) -> bool;

    /// True iff an edge `v1 -> v2` exists. Directed: not symmetric.
    fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> bool;

    /// Edge-to-edge adjacency test.
    ///
    /// Variance point: the list strategy compares endpoints
    /// (`e1.destination == e2.origin`) without consulting the store; the
    /// matrix strategy looks up the incidence cell at coordinates
    /// (e1.destination, e2.origin), i.e. tests whether that derived pair is
    /// itself an edge of the graph.
    fn are_edges_adjacent(&self, e1: &Edge, e2: &Edge) -> bool;

    /// True iff `vertex` is an endpoint of `edge`.
    fn edge_incides_on(&self, edge: &Edge, vertex: VertexId) -> bool {
        edge.incides_on(vertex)
    }

    /// True iff an edge with the given endpoints is present.
    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool;

    /// Number of member vertices.
    fn vertex_count(&self) -> usize;

    /// Number of registered edges.
    fn edge_count(&self) -> usize;

    /// True iff the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// True iff every ordered pair of distinct vertices has an edge.
    /// Self-loops are excluded from the check.
    fn is_complete(&self) -> bool;

    /// The vertices reachable by one outgoing edge from `vertex`, empty when
    /// the vertex is unknown or has no outgoing edges.
    ///
    /// The list strategy yields edge-insertion order; the matrix strategy
    /// yields ascending-id order.
    fn neighborhood(&self, vertex: VertexId) -> Vec<VertexId>;

    /// Look up a vertex by id, failing with
    /// [`GraphError::VertexNotFound`](crate::types::GraphError::VertexNotFound)
    /// if absent.
    fn vertex_by_id(&self, id: VertexId) -> GraphResult<&Vertex>;

    /// Write the graph as Pajek NET text.
    fn export_pajek(&self, out: &mut dyn Write, style: EdgeLineStyle) -> GraphResult<()>;

    /// Read Pajek NET text into this graph.
    fn import_pajek(&mut self, source: &mut dyn BufRead) -> GraphResult<()>;

    /// Export to a file at `path`.
    fn export_pajek_file(&self, path: &Path, style: EdgeLineStyle) -> GraphResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export_pajek(&mut writer, style)?;
        writer.flush()?;
        Ok(())
    }

    /// Import from a file at `path`.
    fn import_pajek_file(&mut self, path: &Path) -> GraphResult<()> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.import_pajek(&mut reader)
    }
}
