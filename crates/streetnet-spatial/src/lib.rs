//! `streetnet-spatial` — packed graph, spatial index, and the core numeric
//! kernels: Checks, radial filter, nearest-node search, shortest-path tree,
//! and data-point assignment.
//!
//! # Crate layout
//!
//! | Module    | Contents                                               |
//! |-----------|----------------------------------------------------------|
//! | [`network`] | `Graph` (CSR + R-tree), `GraphBuilder`                 |
//! | [`checks`]  | Packed-array validation run once at build time (§4.1)  |
//! | [`radial`]  | `TrimMap`, `radial_filter` (§4.2)                       |
//! | [`nearest`] | `nearest_node` (§4.3)                                   |
//! | [`spt`]     | `Spt`, `build_spt` — metric/angular Dijkstra (§4.4)     |
//! | [`assign`]  | `Anchors`, `assign_point`/`assign_all` (§4.5)           |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod assign;
pub mod checks;
pub mod error;
pub mod nearest;
pub mod network;
pub mod radial;
pub mod spt;

#[cfg(test)]
mod tests;

pub use assign::{Anchors, assign_all, assign_point};
pub use error::{SpatialError, SpatialResult};
pub use nearest::nearest_node;
pub use network::{Graph, GraphBuilder};
pub use radial::{TrimMap, radial_filter, radial_filter_from_node};
pub use spt::{Spt, build_spt};
