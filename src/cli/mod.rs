//! CLI support for the `netgraph` binary.

pub mod commands;
