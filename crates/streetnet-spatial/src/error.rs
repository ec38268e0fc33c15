//! Spatial-subsystem error type.

use thiserror::Error;

use streetnet_core::NodeId;

/// Errors produced by `streetnet-spatial`, backing the Checks contract (§4.1)
/// and the `ValidationError` kind from §7.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Shape or invariant failure in the packed arrays.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

impl From<SpatialError> for streetnet_core::NetworkError {
    fn from(e: SpatialError) -> Self {
        match e {
            SpatialError::Validation(msg) => streetnet_core::NetworkError::Validation(msg),
            SpatialError::NodeNotFound(id) => streetnet_core::NetworkError::NodeNotFound(id),
        }
    }
}
