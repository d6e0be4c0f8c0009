use thiserror::Error;

use crate::geopoint::CoordinateError;

/// Failures that can escape `optimize_route`. A routing-service failure is
/// never one of them: it is absorbed into the direct-line fallback by the
/// `SegmentRouter` implementation.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("invalid route request: {0}")]
    InvalidInput(#[from] CoordinateError),

    #[error("route optimization failed: {0}")]
    Failed(String),
}
