//! Command-line surface for the `vgraph` binary.

pub mod commands;
