//! The owned result of a successful search.

use rr_core::{MapPoint, NodeId};

/// Value copy of one node on a route.
///
/// Independent of the graph it came from — the graph may be dropped or
/// rebuilt without invalidating a returned path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub id: NodeId,
    pub position: MapPoint,
}

/// The result of a routing query: node copies from start to end, plus the
/// total real-world path length.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    /// Nodes to traverse in order.  First element is the start node, last
    /// is the end node.  Never empty.
    pub nodes: Vec<PathNode>,

    /// Total path length in metres (map-unit length × metric scale).
    pub distance_m: f32,
}

impl RoutePath {
    /// Number of nodes on the path (≥ 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if start and end snapped to the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}
