//! `rr-planner` — A* point-to-point search over a [`rr_core::GraphModel`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`planner`] | `RoutePlanner` — the search loop                        |
//! | [`path`]    | `RoutePath`, `PathNode` — the owned search result       |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                            |
//!
//! The planner depends only on the `GraphModel` trait, never on a concrete
//! graph; `rr-graph` appears here as a dev-dependency for test fixtures.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod error;
pub mod path;
pub mod planner;

mod state;


pub use error::{PlanError, PlanResult};
pub use path::{PathNode, RoutePath};
pub use planner::RoutePlanner;
