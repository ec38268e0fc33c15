//! Shared error type for the streetnet workspace.
//!
//! Sub-crates may define their own narrower error enums and convert them into
//! `NetworkError` via `From` impls, or keep them separate and wrap
//! `NetworkError` as one variant. Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The boundary error type surfaced by façade operations (§6, §7).
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Shape/invariant failure in packed arrays, or invalid input such as
    /// `length <= 0`, a non-finite coordinate, or mismatched node/uid counts.
    #[error("validation error: {0}")]
    Validation(String),

    /// A façade operation was called out of order or with bad parameters,
    /// e.g. land-use aggregation before assignment, or an unrecognised
    /// metric name.
    #[error("usage error: {0}")]
    Usage(String),

    /// The external graph/data source lacks a required attribute
    /// (`x`/`y`/`geom`/`length`/`impedance`).
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}

/// Shorthand result type for all `streetnet-*` crates.
pub type NetworkResult<T> = Result<T, NetworkError>;
