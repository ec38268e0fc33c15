//! `streetnet-landuse` — land-use diversity and accessibility aggregation
//! over a data layer assigned to a street network (§4.7).
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|----------------------------------------------------------|
//! | [`classes`]    | `ClassTable`, `DisparityMatrix`                         |
//! | [`data`]       | `DataLayer`, network assignment (§4.5, §6)              |
//! | [`diversity`]  | Hill numbers, Shannon, Gini-Simpson, Rao's disparity    |
//! | [`measure`]    | `HillMeasure`, `OtherMeasure` selection enums            |
//! | [`aggregate`]  | `compute_landuses`, the per-source aggregation loop (§4.7) |
//! | [`results`]    | `LanduseResults` tensors                                |
//! | [`error`]      | `LanduseError`, `LanduseResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |
//! | `parallel` | Runs the per-source loop over `rayon`.                     |

pub mod aggregate;
pub mod classes;
pub mod data;
pub mod diversity;
pub mod error;
pub mod measure;
pub mod results;

#[cfg(test)]
mod tests;

pub use aggregate::{LanduseRequest, compute_landuses};
pub use classes::{ClassTable, DisparityMatrix};
pub use data::DataLayer;
pub use error::{LanduseError, LanduseResult};
pub use measure::{HillMeasure, OtherMeasure};
pub use results::LanduseResults;
