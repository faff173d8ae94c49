//! Text I/O for the Pajek NET exchange format.

pub mod pajek;

pub use pajek::{EdgeLine, EdgeLineStyle, PajekEvent, PajekParser, VertexLine};
