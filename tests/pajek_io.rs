//! Pajek NET codec tests: parsing rules, export styles, round-trips and the
//! builder that wires them together.

use std::io::Cursor;

use netgraph::format::{EdgeLineStyle, PajekEvent, PajekParser};
use netgraph::graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph, GraphBuilder, StorageKind};
use netgraph::types::{Edge, GraphError};

/// Four untitled vertices, four edges.
const SAMPLE: &str = "*Vertices 4\n1\n2\n3\n4\n*Edges\n1 2\n2 3\n1 3\n1 4\n";

/// Labeled vertices and annotated edges; exactly what the annotated exporter
/// itself produces.
const ANNOTATED: &str =
    "*Vertices 3\n1 \"alpha\"\n2\n3 \"gamma\"\n*Edges 2\n1 2 5 \"link\"\n2 3\n";

fn backings() -> Vec<(&'static str, Box<dyn Graph>)> {
    vec![
        ("list", Box::new(AdjacencyListGraph::new())),
        ("matrix", Box::new(AdjacencyMatrixGraph::new())),
    ]
}

fn import_str(graph: &mut dyn Graph, source: &str) {
    let mut cursor = Cursor::new(source);
    graph.import_pajek(&mut cursor).unwrap();
}

fn export_str(graph: &dyn Graph, style: EdgeLineStyle) -> String {
    let mut out = Vec::new();
    graph.export_pajek(&mut out, style).unwrap();
    String::from_utf8(out).unwrap()
}

// ==================== Import ====================

#[test]
fn test_import_sample_on_both_backings() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), SAMPLE);
        assert_eq!(graph.vertex_count(), 4, "{}", name);
        assert_eq!(graph.edge_count(), 4, "{}", name);
        assert!(graph.are_adjacent(1, 2), "{}", name);
        assert!(!graph.are_adjacent(2, 1), "{}", name);
        let mut neighbors = graph.neighborhood(1);
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![2, 3, 4], "{}", name);
        assert!(!graph.is_complete(), "{}", name);
    }
}

#[test]
fn test_import_labels_and_weights() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), ANNOTATED);
        assert_eq!(
            graph.vertex_by_id(1).unwrap().label.as_deref(),
            Some("alpha"),
            "{}",
            name
        );
        assert_eq!(graph.vertex_by_id(2).unwrap().label, None, "{}", name);
        assert_eq!(graph.edge_count(), 2, "{}", name);
        assert!(graph.edge_exists(1, 2), "{}", name);
    }
}

#[test]
fn test_case_insensitive_headers() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*vertices 2\n1\n2\n*EDGES\n1 2\n");
        assert_eq!(graph.vertex_count(), 2, "{}", name);
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

#[test]
fn test_unknown_star_sections_skipped_without_section_change() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*Vertices 2\n1\n2\n*Edges\n*Arcs\n1 2\n");
        assert_eq!(graph.vertex_count(), 2, "{}", name);
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

#[test]
fn test_lines_before_first_header_ignored() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "9 \"stray\"\n99\n*Vertices 2\n1\n2\n*Edges\n");
        assert_eq!(graph.vertex_count(), 2, "{}", name);
        assert!(graph.vertex_by_id(9).is_err(), "{}", name);
    }
}

#[test]
fn test_blank_lines_skipped() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*Vertices 2\n\n1\n   \n2\n*Edges\n\n1 2\n");
        assert_eq!(graph.vertex_count(), 2, "{}", name);
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

#[test]
fn test_edges_header_count_is_informational() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*Vertices 2\n1\n2\n*Edges 99\n1 2\n");
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

#[test]
fn test_import_skips_edges_with_unknown_endpoints() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*Vertices 2\n1\n2\n*Edges\n1 9\n9 1\n1 2\n");
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

#[test]
fn test_import_skips_duplicate_edge_lines() {
    for (name, mut graph) in backings() {
        import_str(graph.as_mut(), "*Vertices 2\n1\n2\n*Edges\n1 2\n1 2\n");
        assert_eq!(graph.edge_count(), 1, "{}", name);
    }
}

// ==================== Parse Failures ====================

#[test]
fn test_malformed_vertex_id_fails_import() {
    for (name, mut graph) in backings() {
        let mut cursor = Cursor::new("*Vertices 2\nfoo\n2\n");
        match graph.import_pajek(&mut cursor) {
            Err(GraphError::Format { line, .. }) => assert_eq!(line, 2, "{}", name),
            other => panic!("{}: expected Format error, got {:?}", name, other),
        }
    }
}

#[test]
fn test_malformed_edge_endpoint_fails_import() {
    for (name, mut graph) in backings() {
        let mut cursor = Cursor::new("*Vertices 2\n1\n2\n*Edges\n1 x\n");
        match graph.import_pajek(&mut cursor) {
            Err(GraphError::Format { line, .. }) => assert_eq!(line, 5, "{}", name),
            other => panic!("{}: expected Format error, got {:?}", name, other),
        }
    }
}

#[test]
fn test_missing_vertices_count_fails_import() {
    for (name, mut graph) in backings() {
        let mut cursor = Cursor::new("*Vertices\n1\n");
        match graph.import_pajek(&mut cursor) {
            Err(GraphError::Format { line, .. }) => assert_eq!(line, 1, "{}", name),
            other => panic!("{}: expected Format error, got {:?}", name, other),
        }
    }
}

#[test]
fn test_missing_edge_destination_fails_import() {
    for (name, mut graph) in backings() {
        let mut cursor = Cursor::new("*Vertices 2\n1\n2\n*Edges\n1\n");
        match graph.import_pajek(&mut cursor) {
            Err(GraphError::Format { line, .. }) => assert_eq!(line, 5, "{}", name),
            other => panic!("{}: expected Format error, got {:?}", name, other),
        }
    }
}

// ==================== Line Parsing ====================

#[test]
fn test_nonnumeric_third_token_becomes_label() {
    let mut parser = PajekParser::new();
    parser.parse_line("*Edges", 1).unwrap();
    match parser.parse_line("1 2 \"foo bar\"", 2).unwrap() {
        Some(PajekEvent::Edge(line)) => {
            assert_eq!(line.weight, None);
            assert_eq!(line.label.as_deref(), Some("foo bar"));
        }
        other => panic!("expected edge event, got {:?}", other),
    }
}

#[test]
fn test_numeric_third_token_is_weight() {
    let mut parser = PajekParser::new();
    parser.parse_line("*Edges", 1).unwrap();
    match parser.parse_line("1 2 7", 2).unwrap() {
        Some(PajekEvent::Edge(line)) => {
            assert_eq!(line.weight, Some(7));
            assert_eq!(line.label, None);
        }
        other => panic!("expected edge event, got {:?}", other),
    }
}

#[test]
fn test_weight_and_label_both_parsed() {
    let mut parser = PajekParser::new();
    parser.parse_line("*Edges", 1).unwrap();
    match parser.parse_line("1 2 7 \"link\"", 2).unwrap() {
        Some(PajekEvent::Edge(line)) => {
            assert_eq!(line.weight, Some(7));
            assert_eq!(line.label.as_deref(), Some("link"));
        }
        other => panic!("expected edge event, got {:?}", other),
    }
}

#[test]
fn test_vertex_label_quotes_trimmed() {
    let mut parser = PajekParser::new();
    parser.parse_line("*Vertices 1", 1).unwrap();
    match parser.parse_line("1 \"alpha\"", 2).unwrap() {
        Some(PajekEvent::Vertex(line)) => {
            assert_eq!(line.id, 1);
            assert_eq!(line.label.as_deref(), Some("alpha"));
        }
        other => panic!("expected vertex event, got {:?}", other),
    }
}

// ==================== Export and Round-Trips ====================

#[test]
fn test_endpoints_export_drops_edge_metadata() {
    let mut graph = AdjacencyListGraph::new();
    import_str(&mut graph, ANNOTATED);
    let exported = export_str(&graph, EdgeLineStyle::EndpointsOnly);
    assert_eq!(
        exported,
        "*Vertices 3\n1 \"alpha\"\n2\n3 \"gamma\"\n*Edges\n1 2\n2 3\n"
    );
}

#[test]
fn test_list_roundtrip_is_lossy_for_edge_metadata() {
    let mut graph = AdjacencyListGraph::new();
    import_str(&mut graph, ANNOTATED);
    let exported = export_str(&graph, EdgeLineStyle::EndpointsOnly);

    let mut reimported = AdjacencyListGraph::new();
    import_str(&mut reimported, &exported);
    assert_eq!(reimported.vertex_count(), 3);
    assert_eq!(reimported.edge_count(), 2);
    assert!(reimported.edge_exists(1, 2));
    assert!(reimported.edge_exists(2, 3));
    // Edge weight and label did not survive the endpoints-only export.
    let again = export_str(&reimported, EdgeLineStyle::Annotated);
    assert_eq!(
        again,
        "*Vertices 3\n1 \"alpha\"\n2\n3 \"gamma\"\n*Edges 2\n1 2\n2 3\n"
    );
}

#[test]
fn test_matrix_annotated_roundtrip_is_a_fixpoint() {
    let mut graph = AdjacencyMatrixGraph::new();
    import_str(&mut graph, ANNOTATED);
    let exported = export_str(&graph, EdgeLineStyle::Annotated);
    assert_eq!(exported, ANNOTATED);

    let mut reimported = AdjacencyMatrixGraph::new();
    import_str(&mut reimported, &exported);
    assert_eq!(export_str(&reimported, EdgeLineStyle::Annotated), ANNOTATED);
}

#[test]
fn test_matrix_removed_edge_not_exported() {
    let mut graph = AdjacencyMatrixGraph::new();
    import_str(&mut graph, ANNOTATED);
    graph.remove_edge(1, 2);
    let exported = export_str(&graph, EdgeLineStyle::Annotated);
    assert_eq!(
        exported,
        "*Vertices 3\n1 \"alpha\"\n2\n3 \"gamma\"\n*Edges 1\n2 3\n"
    );
}

#[test]
fn test_mutations_visible_in_annotated_export() {
    let mut graph = AdjacencyMatrixGraph::with_vertices(2);
    graph.add_edge(Edge::new(1, 2));
    graph.weigh_edge(1, 2, 5);
    graph.label_edge(1, 2, "link");
    graph.label_vertex(1, "origin");
    let exported = export_str(&graph, EdgeLineStyle::Annotated);
    assert_eq!(
        exported,
        "*Vertices 2\n1 \"origin\"\n2\n*Edges 1\n1 2 5 \"link\"\n"
    );
}

// ==================== Builder ====================

#[test]
fn test_builder_vertex_count_initialization() {
    let graph = GraphBuilder::new().vertices(5).adjacency_list().build().unwrap();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_builder_default_is_empty_list_graph() {
    let graph = GraphBuilder::new().build().unwrap();
    assert!(graph.is_empty());
    // Endpoint-only comparison marks the list backing.
    assert!(graph.are_edges_adjacent(&Edge::new(1, 2), &Edge::new(2, 3)));
}

#[test]
fn test_builder_backing_selection() {
    let list = GraphBuilder::new()
        .vertices(3)
        .backing(StorageKind::AdjacencyList)
        .build()
        .unwrap();
    let matrix = GraphBuilder::new()
        .vertices(3)
        .backing(StorageKind::AdjacencyMatrix)
        .build()
        .unwrap();
    // No edges exist, so the incidence lookup is false on the matrix while
    // the endpoint comparison is true on the list.
    let e1 = Edge::new(1, 2);
    let e2 = Edge::new(2, 3);
    assert!(list.are_edges_adjacent(&e1, &e2));
    assert!(!matrix.are_edges_adjacent(&e1, &e2));
}

#[test]
fn test_builder_import_takes_precedence_over_vertex_count() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), SAMPLE).unwrap();

    for kind in [StorageKind::AdjacencyList, StorageKind::AdjacencyMatrix] {
        let graph = GraphBuilder::new()
            .vertices(10)
            .backing(kind)
            .import_pajek(file.path())
            .build()
            .unwrap();
        assert_eq!(graph.vertex_count(), 4, "{}", kind.name());
        assert_eq!(graph.edge_count(), 4, "{}", kind.name());
    }
}

#[test]
fn test_builder_missing_file_is_an_io_error() {
    let result = GraphBuilder::new().import_pajek("no/such/file.net").build();
    match result {
        Err(GraphError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| "graph")),
    }
}

// ==================== File Round-Trip ====================

#[test]
fn test_export_import_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.net");

    let mut graph = AdjacencyMatrixGraph::with_vertices(3);
    graph.add_edge(Edge::new(1, 2));
    graph.add_edge(Edge::new(3, 1));
    graph.weigh_edge(1, 2, 4);
    graph.export_pajek_file(&path, EdgeLineStyle::Annotated).unwrap();

    let mut reloaded = AdjacencyMatrixGraph::new();
    reloaded.import_pajek_file(&path).unwrap();
    assert_eq!(reloaded.vertex_count(), 3);
    assert_eq!(reloaded.edge_count(), 2);
    assert!(reloaded.edge_exists(1, 2));
    assert!(reloaded.edge_exists(3, 1));
    assert_eq!(
        export_str(&reloaded, EdgeLineStyle::Annotated),
        export_str(&graph, EdgeLineStyle::Annotated)
    );
}
