//! In-memory city graph: the core data structure.

pub mod builder;
pub mod city_graph;
pub mod snapshot;

pub use builder::CityGraphBuilder;
pub use city_graph::CityGraph;
