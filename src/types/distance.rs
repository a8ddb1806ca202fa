//! Validated edge distance in kilometers.

use super::{GraphError, GraphResult};

/// A strictly positive, finite distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    /// Validate a raw kilometer value.
    pub fn new(km: f64) -> GraphResult<Self> {
        if km.is_nan() || km.is_infinite() {
            return Err(GraphError::NonFiniteDistance(km));
        }
        if km <= 0.0 {
            return Err(GraphError::NonPositiveDistance(km));
        }
        Ok(Self(km))
    }

    /// The distance in kilometers.
    pub fn km(self) -> f64 {
        self.0
    }
}
