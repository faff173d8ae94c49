//! Line-level parsing and writing of the Pajek NET text format.
//!
//! The format is ASCII and line-oriented:
//!
//! ```text
//! *Vertices <N>
//! <id> ["label"]
//! *Edges [<count>]
//! <originId> <destinationId> [<weight>] ["label"]
//! ```
//!
//! Section headers are matched case-insensitively by prefix. Blank lines and
//! unrecognized `*` lines are skipped without changing the current section;
//! lines before the first recognized header are ignored. Each storage
//! strategy folds the event stream produced here into its own backing store.

use std::io::{BufRead, Write};

use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexId};

/// How an exporter renders edge lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLineStyle {
    /// Write only `<origin> <destination>` and no count on the `*Edges`
    /// header, dropping edge weight and label even when present. The
    /// adjacency-list backing's default.
    EndpointsOnly,
    /// Write `<origin> <destination> [<weight>] ["label"]` under an `*Edges
    /// <count>` header, keeping whatever metadata the edge carries. The
    /// adjacency-matrix backing's default.
    Annotated,
}

impl EdgeLineStyle {
    /// Short name used by the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EndpointsOnly => "endpoints",
            Self::Annotated => "annotated",
        }
    }

    /// Parse a style from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "endpoints" | "endpoints_only" => Some(Self::EndpointsOnly),
            "annotated" => Some(Self::Annotated),
            _ => None,
        }
    }
}

/// A parsed vertex line: `<id> ["label"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLine {
    pub id: VertexId,
    pub label: Option<String>,
}

impl From<VertexLine> for Vertex {
    fn from(line: VertexLine) -> Self {
        Vertex {
            id: line.id,
            weight: None,
            label: line.label,
        }
    }
}

/// A parsed edge line: `<origin> <destination> [<weight>] ["label"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    pub origin: VertexId,
    pub destination: VertexId,
    pub weight: Option<i64>,
    pub label: Option<String>,
}

impl From<EdgeLine> for Edge {
    fn from(line: EdgeLine) -> Self {
        Edge {
            origin: line.origin,
            destination: line.destination,
            weight: line.weight,
            label: line.label,
        }
    }
}

/// One recognized line of a NET source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PajekEvent {
    /// `*Vertices <N>` header.
    VerticesHeader(usize),
    /// `*Edges [<count>]` header; the count is informational.
    EdgesHeader(Option<usize>),
    /// A vertex line inside the `*Vertices` section.
    Vertex(VertexLine),
    /// An edge line inside the `*Edges` section.
    Edge(EdgeLine),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Edges,
}

/// Stateful line parser for NET sources.
///
/// Feed lines in order; `None` means the line carried nothing (blank,
/// unrecognized `*` section, or preamble).
#[derive(Debug)]
pub struct PajekParser {
    section: Section,
}

impl PajekParser {
    /// Create a parser positioned before any section header.
    pub fn new() -> Self {
        Self {
            section: Section::Preamble,
        }
    }

    /// Parse a single line. `lineno` is 1-based and reported in errors.
    pub fn parse_line(&mut self, line: &str, lineno: usize) -> GraphResult<Option<PajekEvent>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("*vertices") {
            self.section = Section::Vertices;
            let count = trimmed
                .split_whitespace()
                .nth(1)
                .and_then(|token| token.parse::<usize>().ok())
                .ok_or_else(|| malformed(trimmed, lineno))?;
            return Ok(Some(PajekEvent::VerticesHeader(count)));
        }
        if lower.starts_with("*edges") {
            self.section = Section::Edges;
            let count = trimmed
                .split_whitespace()
                .nth(1)
                .and_then(|token| token.parse::<usize>().ok());
            return Ok(Some(PajekEvent::EdgesHeader(count)));
        }
        if trimmed.starts_with('*') {
            // Unrecognized section header: skipped, section unchanged.
            return Ok(None);
        }

        match self.section {
            Section::Preamble => Ok(None),
            Section::Vertices => parse_vertex_line(trimmed, lineno).map(PajekEvent::Vertex).map(Some),
            Section::Edges => parse_edge_line(trimmed, lineno).map(PajekEvent::Edge).map(Some),
        }
    }
}

impl Default for PajekParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an entire NET source into its recognized line events.
pub fn read_events(source: &mut dyn BufRead) -> GraphResult<Vec<PajekEvent>> {
    let mut parser = PajekParser::new();
    let mut events = Vec::new();
    let mut line = String::new();
    let mut lineno = 0;
    loop {
        line.clear();
        if source.read_line(&mut line)? == 0 {
            break;
        }
        lineno += 1;
        if let Some(event) = parser.parse_line(&line, lineno)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Write the `*Vertices` header and one line per vertex.
pub fn write_vertices<'a>(
    out: &mut dyn Write,
    count: usize,
    vertices: impl Iterator<Item = &'a Vertex>,
) -> GraphResult<()> {
    writeln!(out, "*Vertices {}", count)?;
    for vertex in vertices {
        match &vertex.label {
            Some(label) => writeln!(out, "{} \"{}\"", vertex.id, label)?,
            None => writeln!(out, "{}", vertex.id)?,
        }
    }
    Ok(())
}

/// Write the `*Edges` header and one line per edge in the given style.
pub fn write_edges<'a>(
    out: &mut dyn Write,
    count: usize,
    edges: impl Iterator<Item = &'a Edge>,
    style: EdgeLineStyle,
) -> GraphResult<()> {
    match style {
        EdgeLineStyle::EndpointsOnly => writeln!(out, "*Edges")?,
        EdgeLineStyle::Annotated => writeln!(out, "*Edges {}", count)?,
    }
    for edge in edges {
        match style {
            EdgeLineStyle::EndpointsOnly => {
                writeln!(out, "{} {}", edge.origin, edge.destination)?;
            }
            EdgeLineStyle::Annotated => {
                write!(out, "{} {}", edge.origin, edge.destination)?;
                if let Some(weight) = edge.weight {
                    write!(out, " {}", weight)?;
                }
                if let Some(label) = &edge.label {
                    write!(out, " \"{}\"", label)?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn malformed(line: &str, lineno: usize) -> GraphError {
    GraphError::Format {
        line: lineno,
        text: line.to_string(),
    }
}

/// Parse `<id> ["label"]`.
fn parse_vertex_line(line: &str, lineno: usize) -> GraphResult<VertexLine> {
    let mut tokens = line.split_whitespace();
    let id = tokens
        .next()
        .and_then(|token| token.parse::<VertexId>().ok())
        .ok_or_else(|| malformed(line, lineno))?;
    Ok(VertexLine {
        id,
        label: join_label(tokens),
    })
}

/// Parse `<origin> <destination> [<weight>] ["label"]`.
fn parse_edge_line(line: &str, lineno: usize) -> GraphResult<EdgeLine> {
    let mut tokens = line.split_whitespace().peekable();
    let origin = tokens
        .next()
        .and_then(|token| token.parse::<VertexId>().ok())
        .ok_or_else(|| malformed(line, lineno))?;
    let destination = tokens
        .next()
        .and_then(|token| token.parse::<VertexId>().ok())
        .ok_or_else(|| malformed(line, lineno))?;
    // The weight is consumed only when numeric; a non-numeric token here
    // starts the label instead.
    let weight = match tokens.peek() {
        Some(token) => match token.parse::<i64>() {
            Ok(weight) => {
                tokens.next();
                Some(weight)
            }
            Err(_) => None,
        },
        None => None,
    };
    Ok(EdgeLine {
        origin,
        destination,
        weight,
        label: join_label(tokens),
    })
}

/// Rejoin the remaining tokens as a label, trimming surrounding quotes.
fn join_label<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = tokens.collect::<Vec<_>>().join(" ");
    let label = joined.trim_matches('"');
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
