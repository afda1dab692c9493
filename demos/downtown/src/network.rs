//! Shared downtown road network definition.
//!
//! A 5-node synthetic network shaped like a small downtown core, laid out in
//! map-fraction coordinates over a 5 km square.

use rr_core::{MapPoint, NodeId};
use rr_graph::{RoadGraph, RoadGraphBuilder};

/// Metres covered by one map-fraction unit.
pub const METRES_PER_UNIT: f32 = 5_000.0;

/// Build the 5-node downtown road network.
///
/// Returns `(graph, [riverfront, old_town, market, station, ring_road])`.
pub fn build_network() -> (RoadGraph, [NodeId; 5]) {
    let mut b = RoadGraphBuilder::new();

    let riverfront = b.add_node(MapPoint::new(0.10, 0.20));
    let old_town   = b.add_node(MapPoint::new(0.35, 0.45));
    let market     = b.add_node(MapPoint::new(0.60, 0.40));
    let station    = b.add_node(MapPoint::new(0.85, 0.70));
    let ring_road  = b.add_node(MapPoint::new(0.50, 0.10));

    // Bidirectional streets.
    b.add_road(riverfront, old_town);
    b.add_road(riverfront, ring_road);
    b.add_road(old_town,   market);
    b.add_road(ring_road,  market);
    b.add_road(market,     station);
    b.add_road(ring_road,  station);

    b.set_metric_scale(METRES_PER_UNIT);

    let graph = b.build();
    (graph, [riverfront, old_town, market, station, ring_road])
}
