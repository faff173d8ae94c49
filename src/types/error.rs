//! Error types for the netgraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the netgraph library.
///
/// Validation rejections (missing endpoint, duplicate edge) are NOT errors:
/// the mutation operations report them as an advisory `false` return plus a
/// `log::warn!` diagnostic.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not found by id.
    #[error("vertex ID {0} not found")]
    VertexNotFound(VertexId),

    /// Malformed line in a Pajek NET source.
    #[error("line {line}: malformed Pajek NET field in {text:?}")]
    Format { line: usize, text: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for netgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
