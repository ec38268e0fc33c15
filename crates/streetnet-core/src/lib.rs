//! `streetnet-core` — foundational types for the streetnet workspace.
//!
//! This crate is a dependency of every other `streetnet-*` crate. It
//! intentionally has no workspace-internal dependencies and minimal external
//! ones (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|--------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`, `DataId`, `ClassId`                |
//! | [`geo`]     | `Point2`, planar Euclidean distance                    |
//! | [`mode`]    | `SptMode` (metric / angular)                           |
//! | [`config`]  | `W_MIN`, beta/distance conversions, `Distances`        |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Distances, W_MIN, beta_from_distance, distance_from_beta};
pub use error::{NetworkError, NetworkResult};
pub use geo::Point2;
pub use ids::{ClassId, DataId, EdgeId, NodeId};
pub use mode::SptMode;
