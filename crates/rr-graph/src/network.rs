//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, the IDs of its neighbors occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edges carry no stored weight: the search metric is the Euclidean
//! distance between node positions, computed on demand.  Iteration over a
//! node's neighbors is a contiguous memory scan.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` map fractions to the nearest
//! `NodeId`.  Used to snap routing endpoints to road nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rr_core::{GraphError, GraphModel, GraphResult, MapPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [x, y]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in map-fraction space — the same metric
    /// the search uses, so snapping and routing agree on "nearest".
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Road graph in CSR format plus a spatial index for endpoint snapping.
///
/// Node storage is owned by the graph; all external references are by
/// [`NodeId`].  The graph is immutable after construction and `Send + Sync`,
/// so any number of concurrent searches may share one instance.  Do not
/// construct directly; use [`RoadGraphBuilder`].
pub struct RoadGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Position of each node in map-fraction units.  Indexed by `NodeId`.
    pub node_pos: Vec<MapPoint>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of node `n` are at
    /// `edge_to[node_out_start[n] .. node_out_start[n+1]]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Destination node of each directed edge, sorted by source node.
    pub edge_to: Vec<NodeId>,

    // ── Scale ─────────────────────────────────────────────────────────────
    /// Metres per map-fraction unit.
    metric_scale: f32,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any snap against an empty graph returns `None`, which the planner
    /// treats as a fatal construction error.
    pub fn empty() -> Self {
        RoadGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbor IDs of `node` as a contiguous slice — no heap allocation.
    #[inline]
    pub fn neighbors_of(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors_of(node).len()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the road node nearest to `pos`.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn snap_to_node(&self, pos: MapPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: MapPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── GraphModel impl ───────────────────────────────────────────────────────────

impl GraphModel for RoadGraph {
    fn closest_node(&self, x: f32, y: f32) -> Option<NodeId> {
        self.snap_to_node(MapPoint::new(x, y))
    }

    /// CSR adjacency is precomputed, so discovery cannot fail here beyond an
    /// ID this graph never issued.  Lazy implementations of the trait may
    /// fail for real reasons.
    fn neighbors(&self, node: NodeId) -> GraphResult<Vec<NodeId>> {
        if node.index() >= self.node_count() {
            return Err(GraphError::NodeNotFound(node));
        }
        Ok(self.neighbors_of(node).to_vec())
    }

    fn distance(&self, a: NodeId, b: NodeId) -> f32 {
        self.node_pos[a.index()].distance(self.node_pos[b.index()])
    }

    fn position(&self, node: NodeId) -> MapPoint {
        self.node_pos[node.index()]
    }

    fn metric_scale(&self) -> f32 {
        self.metric_scale
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use rr_core::MapPoint;
/// use rr_graph::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// let a = b.add_node(MapPoint::new(0.10, 0.20));
/// let c = b.add_node(MapPoint::new(0.15, 0.20));
/// b.add_road(a, c); // bidirectional
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct RoadGraphBuilder {
    nodes:        Vec<MapPoint>,
    raw_edges:    Vec<RawEdge>,
    metric_scale: f32,
}

struct RawEdge {
    from: NodeId,
    to:   NodeId,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new(), metric_scale: 1.0 }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from a map extract.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:        Vec::with_capacity(nodes),
            raw_edges:    Vec::with_capacity(edges),
            metric_scale: 1.0,
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: MapPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) {
        self.raw_edges.push(RawEdge { from, to });
    }

    /// Convenience: add edges in **both directions** for an undirected road
    /// segment (the common case for most road types).
    pub fn add_road(&mut self, a: NodeId, b: NodeId) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    /// Set the metres-per-map-fraction-unit conversion factor.
    ///
    /// Defaults to `1.0` (distances reported in map units).  The OSM loader
    /// sets this from the extract's bounding box.
    pub fn set_metric_scale(&mut self, metres_per_unit: f32) {
        self.metric_scale = metres_per_unit;
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> RoadGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| (e.from.0, e.to.0));

        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_to,
            metric_scale: self.metric_scale,
            spatial_idx,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
