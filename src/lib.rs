//! CityGraph: an undirected weighted graph of cities and distances.
//!
//! Cities are nodes identified by name; connections carry a positive distance
//! in kilometers and are always symmetric. The graph answers adjacency and
//! proximity queries: direct neighbors, the distance between two cities, and
//! nearby alternatives within a distance threshold.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{CityGraph, CityGraphBuilder};
pub use types::{Adjacency, CityMap, Distance, ErrorKind, GraphError, GraphResult};
