//! Unit tests for rr-graph.
//!
//! All tests use hand-crafted graphs so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use rr_core::{MapPoint, NodeId};
    use crate::{RoadGraph, RoadGraphBuilder};

    /// Build a small grid graph for testing.
    ///
    /// Nodes (x, y):
    ///   0:(0.0, 0.0)  1:(0.5, 0.0)  2:(1.0, 0.0)
    ///   3:(0.0, 1.0)                4:(1.0, 1.0)
    ///
    /// Undirected edges: 0-1, 1-2, 0-3, 2-4, 3-4
    pub fn grid_graph() -> (RoadGraph, [NodeId; 5]) {
        let mut b = RoadGraphBuilder::new();

        let n0 = b.add_node(MapPoint::new(0.0, 0.0));
        let n1 = b.add_node(MapPoint::new(0.5, 0.0));
        let n2 = b.add_node(MapPoint::new(1.0, 0.0));
        let n3 = b.add_node(MapPoint::new(0.0, 1.0));
        let n4 = b.add_node(MapPoint::new(1.0, 1.0));

        b.add_road(n0, n1);
        b.add_road(n1, n2);
        b.add_road(n2, n4);
        b.add_road(n0, n3);
        b.add_road(n3, n4);

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rr_core::MapPoint;
    use crate::RoadGraphBuilder;

    #[test]
    fn empty_build() {
        let graph = RoadGraphBuilder::new().build();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn single_road() {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapPoint::new(0.1, 0.1));
        let c = b.add_node(MapPoint::new(0.2, 0.1));
        b.add_road(a, c);
        assert_eq!(b.node_count(), 2);
        assert_eq!(b.edge_count(), 2);
        let graph = b.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2); // bidirectional
    }

    #[test]
    fn csr_neighbor_slices() {
        let (graph, [n0, n1, n2, n3, n4]) = super::helpers::grid_graph();

        // n1 sits between n0 and n2 (grid topology, bidirectional).
        assert_eq!(graph.neighbors_of(n1), &[n0, n2]);

        // Degrees
        assert_eq!(graph.out_degree(n0), 2); // n0→n1, n0→n3
        assert_eq!(graph.out_degree(n2), 2); // n2→n1, n2→n4
        assert_eq!(graph.out_degree(n3), 2); // n3→n0, n3→n4
        assert_eq!(graph.out_degree(n4), 2); // n4→n2, n4→n3
    }

    #[test]
    fn neighbor_order_deterministic() {
        // Edges inserted out of order still come out sorted by destination.
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(0.5, 0.0));
        let d = b.add_node(MapPoint::new(0.0, 0.5));
        b.add_directed_edge(a, c);
        b.add_directed_edge(a, d);
        let g1 = b.build();

        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(0.5, 0.0));
        let d = b.add_node(MapPoint::new(0.0, 0.5));
        b.add_directed_edge(a, d); // reversed insertion order
        b.add_directed_edge(a, c);
        let g2 = b.build();

        assert_eq!(g1.neighbors_of(a), g2.neighbors_of(a));
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadGraphBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(0.0, 0.5));
        // One-way a → c only
        b.add_directed_edge(a, c);
        let graph = b.build();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.out_degree(c), 0); // no return edge
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use rr_core::MapPoint;
    use crate::RoadGraphBuilder;

    #[test]
    fn snap_exact_position() {
        let (graph, [n0, ..]) = super::helpers::grid_graph();
        let snapped = graph.snap_to_node(MapPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, n0);
    }

    #[test]
    fn snap_nearest() {
        let (graph, [n0, n1, ..]) = super::helpers::grid_graph();
        // (0.2, 0.0) is nearer n0 at x=0.0 than n1 at x=0.5.
        let near_n0 = graph.snap_to_node(MapPoint::new(0.2, 0.0)).unwrap();
        assert_eq!(near_n0, n0);
        let near_n1 = graph.snap_to_node(MapPoint::new(0.3, 0.0)).unwrap();
        assert_eq!(near_n1, n1);
    }

    #[test]
    fn empty_graph_returns_none() {
        let graph = RoadGraphBuilder::new().build();
        assert!(graph.snap_to_node(MapPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn k_nearest_order() {
        let (graph, nodes) = super::helpers::grid_graph();
        // From (0.0, 0.0) the nearest two nodes are n0 (exact) then n1 (0.5).
        let nearest = graph.k_nearest_nodes(MapPoint::new(0.0, 0.0), 2);
        assert_eq!(nearest[0], nodes[0]);
        assert_eq!(nearest[1], nodes[1]);
    }
}

// ── GraphModel surface ────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use rr_core::{GraphError, GraphModel, MapPoint, NodeId};
    use crate::RoadGraphBuilder;

    #[test]
    fn closest_node_matches_snap() {
        let (graph, [n0, ..]) = super::helpers::grid_graph();
        assert_eq!(graph.closest_node(0.1, 0.1), Some(n0));
    }

    #[test]
    fn neighbors_matches_csr_slice() {
        let (graph, [_, n1, ..]) = super::helpers::grid_graph();
        let via_trait = graph.neighbors(n1).unwrap();
        assert_eq!(via_trait.as_slice(), graph.neighbors_of(n1));
    }

    #[test]
    fn neighbors_unknown_node_errors() {
        let (graph, _) = super::helpers::grid_graph();
        let bogus = NodeId(999);
        assert!(matches!(
            graph.neighbors(bogus),
            Err(GraphError::NodeNotFound(n)) if n == bogus
        ));
    }

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        let (graph, [n0, n1, _, n3, _]) = super::helpers::grid_graph();
        assert!((graph.distance(n0, n1) - 0.5).abs() < 1e-6);
        assert!((graph.distance(n0, n3) - 1.0).abs() < 1e-6);
        assert_eq!(graph.distance(n0, n1), graph.distance(n1, n0));
    }

    #[test]
    fn metric_scale_plumbed_through() {
        let mut b = RoadGraphBuilder::new();
        b.add_node(MapPoint::new(0.0, 0.0));
        b.set_metric_scale(1234.5);
        let graph = b.build();
        assert_eq!(graph.metric_scale(), 1234.5);
    }

    #[test]
    fn default_scale_is_unit() {
        let (graph, _) = super::helpers::grid_graph();
        assert_eq!(graph.metric_scale(), 1.0);
    }
}
