//! `streetnet-facade` — the external-array boundary (§6): UID tracking,
//! string-keyed-to-tagged-variant metric translation, and marshalling result
//! tensors back to the caller.
//!
//! This is the only layer that ever sees an external string UID — the
//! kernels in `streetnet-spatial`/`streetnet-centrality`/`streetnet-landuse`
//! work exclusively in packed array indices.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|------------------------------------------------------------|
//! | [`network`]  | `NetworkFacade`: `graph_from_arrays`, `compute_centralities`, `metrics_to_dict` |
//! | [`data`]     | `DataFacade`: `from_arrays`, `assign_to_network`, `compute_landuses` |
//! | [`mock`]     | Deterministic test fixtures (§8)                          |
//! | [`error`]    | `FacadeError`, `FacadeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on the kernel crates' public types. |
//! | `parallel` | Runs centrality/land-use aggregation over a `rayon` pool.  |

pub mod data;
pub mod error;
pub mod mock;
pub mod network;


pub use data::DataFacade;
pub use error::{FacadeError, FacadeResult};
pub use network::{NetworkFacade, RawEdge};
