//! `rr-graph` — indexed road graph, spatial snapping, and map loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`network`] | `RoadGraph` (CSR + R-tree), `RoadGraphBuilder`          |
//! | [`osm`]     | `load_from_pbf` (feature = `"osm"` only)                |
//! | [`error`]   | `ModelError`, `ModelResult<T>`                          |
//!
//! `RoadGraph` implements the [`rr_core::GraphModel`] trait, which is the
//! only surface `rr-planner` consumes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod error;
pub mod network;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use error::{ModelError, ModelResult};
pub use network::{RoadGraph, RoadGraphBuilder};
