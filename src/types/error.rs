//! Error types for the city graph.

use thiserror::Error;

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A name or distance failed validation. Nothing was mutated.
    InvalidArgument,
    /// A query referenced a city that is not registered.
    NotFound,
    /// Reading a graph file failed.
    Io,
    /// A graph file was malformed or broke a graph invariant.
    Parse,
}

/// All errors that can occur in the city graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Registering a city with an empty name.
    #[error("City name cannot be empty.")]
    EmptyCityName,

    /// One or both names passed to `connect` are empty.
    #[error("City names must be valid.")]
    InvalidCityNames,

    /// Distance is zero or negative.
    #[error("Distance must be greater than zero.")]
    NonPositiveDistance(f64),

    /// Distance is NaN or infinite.
    #[error("Distance must be a finite number, got {0}.")]
    NonFiniteDistance(f64),

    /// A city was connected to itself.
    #[error("A city cannot be connected to itself: {0}.")]
    SelfConnection(String),

    /// City lookup failed.
    #[error("City not found in the graph.")]
    CityNotFound(String),

    /// At least one side of a distance query is not registered.
    #[error("One or both cities are not registered.")]
    CitiesNotRegistered { city_a: String, city_b: String },

    /// A map handed to `from_map` has a one-sided or mismatched edge.
    #[error("Connection {city_a} -> {city_b} is not mirrored with the same distance.")]
    AsymmetricConnection { city_a: String, city_b: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCityName
            | Self::InvalidCityNames
            | Self::NonPositiveDistance(_)
            | Self::NonFiniteDistance(_)
            | Self::SelfConnection(_) => ErrorKind::InvalidArgument,
            Self::CityNotFound(_) | Self::CitiesNotRegistered { .. } => ErrorKind::NotFound,
            Self::Io(_) => ErrorKind::Io,
            Self::AsymmetricConnection { .. } | Self::Json(_) => ErrorKind::Parse,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
