//! CLI command implementations.

use std::path::Path;

use crate::format::EdgeLineStyle;
use crate::graph::{Graph, GraphBuilder, StorageKind};
use crate::types::{GraphResult, VertexId};

fn import(path: &Path, kind: StorageKind) -> GraphResult<Box<dyn Graph>> {
    GraphBuilder::new().backing(kind).import_pajek(path).build()
}

/// Import a NET file and report structural facts about it.
pub fn cmd_info(path: &Path, kind: StorageKind, json: bool) -> GraphResult<()> {
    let graph = import(path, kind)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "backing": kind.name(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "empty": graph.is_empty(),
            "complete": graph.is_complete(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Backing: {}", kind.name());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Empty: {}", graph.is_empty());
        println!("Complete: {}", graph.is_complete());
    }
    Ok(())
}

/// List the one-hop out-neighbors of a vertex.
pub fn cmd_neighbors(path: &Path, kind: StorageKind, id: VertexId, json: bool) -> GraphResult<()> {
    let graph = import(path, kind)?;
    let vertex = graph.vertex_by_id(id)?;
    let neighbors = graph.neighborhood(id);

    if json {
        let info = serde_json::json!({
            "vertex": vertex,
            "neighbors": neighbors,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match &vertex.label {
            Some(label) => println!("Vertex {} ({:?}):", vertex.id, label),
            None => println!("Vertex {}:", vertex.id),
        }
        if neighbors.is_empty() {
            println!("  (no outgoing edges)");
        }
        for neighbor in neighbors {
            println!("  -> {}", neighbor);
        }
    }
    Ok(())
}

/// Import a NET file and export it again through the chosen backing.
///
/// Without an explicit style the backing's default edge-line style is used:
/// endpoints-only for the list, annotated for the matrix.
pub fn cmd_rewrite(
    input: &Path,
    output: &Path,
    kind: StorageKind,
    style: Option<EdgeLineStyle>,
    json: bool,
) -> GraphResult<()> {
    let graph = import(input, kind)?;
    let style = style.unwrap_or_else(|| kind.default_export_style());
    graph.export_pajek_file(output, style)?;

    if json {
        let info = serde_json::json!({
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "style": style.name(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Wrote {} ({} vertices, {} edges, {} style)",
            output.display(),
            graph.vertex_count(),
            graph.edge_count(),
            style.name()
        );
    }
    Ok(())
}
