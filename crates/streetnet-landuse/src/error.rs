//! Land-use subsystem error type (§7 `UsageError`, `ValidationError`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanduseError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type LanduseResult<T> = Result<T, LanduseError>;

impl From<LanduseError> for streetnet_core::NetworkError {
    fn from(e: LanduseError) -> Self {
        match e {
            LanduseError::Usage(msg) => streetnet_core::NetworkError::Usage(msg),
            LanduseError::Validation(msg) => streetnet_core::NetworkError::Validation(msg),
        }
    }
}
