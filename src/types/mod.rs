//! Shared data types for the city graph.

pub mod distance;
pub mod error;

use indexmap::IndexMap;

pub use distance::Distance;
pub use error::{ErrorKind, GraphError, GraphResult};

/// Neighbors of one city and their distances in kilometers, in connection order.
pub type Adjacency = IndexMap<String, f64>;

/// Every registered city and its adjacency record, in registration order.
pub type CityMap = IndexMap<String, Adjacency>;
