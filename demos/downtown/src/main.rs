//! downtown — smallest example for the rust_router workspace.
//!
//! Routes between landmarks of a synthetic 5-node downtown road network.
//! Swap [`network::build_network`] for `rr_graph::osm::load_from_pbf` (feature
//! `osm`) to route on a real OpenStreetMap extract instead.

mod network;

use std::time::Instant;

use anyhow::Result;

use rr_planner::RoutePlanner;

use network::build_network;

// Queries as ((start_x%, start_y%), (end_x%, end_y%)) — percentages of the
// map extent, the same surface an interactive frontend would feed in.
const QUERIES: [((f32, f32), (f32, f32)); 3] = [
    ((10.0, 20.0), (85.0, 70.0)), // riverfront → station
    ((85.0, 70.0), (10.0, 20.0)), // station → riverfront
    ((50.0, 10.0), (35.0, 45.0)), // ring road → old town
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    println!("=== downtown — rust_router demo ===");
    println!();

    let (graph, _landmarks) = build_network();
    println!(
        "Road network: {} nodes, {} edges, {:.0} m per map unit",
        graph.node_count(),
        graph.edge_count(),
        network::METRES_PER_UNIT,
    );
    println!();

    for ((sx, sy), (ex, ey)) in QUERIES {
        let t0 = Instant::now();
        let mut planner = RoutePlanner::new(&graph, sx, sy, ex, ey)?;
        let path = planner.search()?;
        let elapsed = t0.elapsed();

        println!(
            "({sx:>4.1}%, {sy:>4.1}%) to ({ex:>4.1}%, {ey:>4.1}%): {} hops, {:.0} m  [{elapsed:?}]",
            path.len() - 1,
            path.distance_m,
        );
        let stops: Vec<String> = path.nodes.iter().map(|n| n.id.to_string()).collect();
        println!("    via {}", stops.join(", "));
    }

    Ok(())
}
