//! `rr-core` — foundational types for the `rust_router` workspace.
//!
//! This crate is a dependency of every other `rr-*` crate.  It intentionally
//! has no `rr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `NodeId`                                                |
//! | [`geo`]   | `MapPoint` (normalized map units), `GeoPoint` (WGS-84)  |
//! | [`model`] | `GraphModel` trait — the planner ↔ graph seam           |
//! | [`error`] | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod geo;
pub mod ids;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use geo::{GeoPoint, MapPoint};
pub use ids::NodeId;
pub use model::GraphModel;
