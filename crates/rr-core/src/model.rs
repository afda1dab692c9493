//! The `GraphModel` trait — everything the planner needs from a road graph.
//!
//! # Pluggability
//!
//! `rr-planner` talks to the graph exclusively through this trait, so
//! applications can swap in custom implementations (lazily loaded tiles,
//! test fixtures, wrappers that inject failures) without touching the
//! search.  The default implementation is `RoadGraph` in `rr-graph`.
//!
//! # Coordinate contract
//!
//! All coordinates are normalized map fractions (see [`MapPoint`]); all
//! distances are in those units.  [`GraphModel::metric_scale`] converts a
//! map-fraction distance to metres.

use crate::{GraphResult, MapPoint, NodeId};

/// Read-only view of a road graph, sufficient to run a point-to-point search.
///
/// Implementations own all node storage; callers refer to nodes only by
/// [`NodeId`].  IDs obtained from one model instance are not meaningful to
/// another.
pub trait GraphModel {
    /// The node nearest to a normalized `[0, 1]` map coordinate.
    ///
    /// Returns `None` only if the graph has no nodes.
    fn closest_node(&self, x: f32, y: f32) -> Option<NodeId>;

    /// Discover the neighbors of `node`.
    ///
    /// May be an on-demand (lazy, possibly expensive) operation and may
    /// fail — e.g. an adjacency tile that cannot be materialized.
    fn neighbors(&self, node: NodeId) -> GraphResult<Vec<NodeId>>;

    /// Symmetric metric distance between two nodes, in map-fraction units.
    ///
    /// Both IDs must have been produced by this model.
    fn distance(&self, a: NodeId, b: NodeId) -> f32;

    /// Position of `node` in normalized map-fraction coordinates.
    fn position(&self, node: NodeId) -> MapPoint;

    /// Metres per map-fraction unit.
    fn metric_scale(&self) -> f32;
}
