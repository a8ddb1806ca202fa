//! Command implementations backing the `citygraph` binary.

pub mod commands;
