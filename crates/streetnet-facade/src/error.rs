//! Boundary error type (§7): wraps the kernel crates' errors and adds the
//! façade-only failure modes (UID shape mismatches, unknown metric names).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("{what} has {got} entries, expected {expected} to match the packed array length")]
    UidCountMismatch { what: &'static str, expected: usize, got: usize },

    #[error("unknown metric name: {0}")]
    UnknownMetric(String),

    #[error(transparent)]
    Network(#[from] streetnet_core::NetworkError),

    #[error(transparent)]
    Spatial(#[from] streetnet_spatial::SpatialError),

    #[error(transparent)]
    Landuse(#[from] streetnet_landuse::LanduseError),
}

pub type FacadeResult<T> = Result<T, FacadeError>;
