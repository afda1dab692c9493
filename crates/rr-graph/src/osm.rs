//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use rr_graph::osm::load_from_pbf;
//!
//! let graph = load_from_pbf(Path::new("map.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only drivable `highway=*` ways are included (see [`is_drivable`]).  All
//! other features (footways, buildings, POIs, relations) are ignored.
//! One-way roads add a single directed edge; two-way roads add both
//! directions.
//!
//! # Coordinate normalization
//!
//! Node lat/lon are projected into map-fraction units: `[0, 1]` along the
//! longer axis of the extract's bounding box, with the shorter axis scaled
//! so one unit covers the same ground distance on both axes.  The metric
//! scale (metres per unit) is derived from the bounding box via haversine,
//! so Euclidean distances in map units × scale approximate metres.
//!
//! # Memory note
//!
//! The loader buffers all OSM nodes in a `HashMap<i64, GeoPoint>` for the
//! first pass (needed because ways reference node IDs by OSM integer ID).
//! The map is freed before the R-tree is built.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use osmpbf::{Element, ElementReader};

use rr_core::{GeoPoint, MapPoint, NodeId};

use crate::network::{RoadGraph, RoadGraphBuilder};
use crate::ModelError;

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road graph from an OSM PBF file.
///
/// Only car-drivable roads are included.  Use [`RoadGraphBuilder`] directly
/// for non-OSM sources.
///
/// # Errors
///
/// Returns [`ModelError::Osm`] on parse errors, [`ModelError::Io`] on file
/// errors, and [`ModelError::EmptyExtract`] if no drivable roads survive the
/// filter.
pub fn load_from_pbf(path: &Path) -> Result<RoadGraph, ModelError> {
    // ── Phase 1: collect all OSM nodes + road ways in one sequential pass ──
    let reader = ElementReader::from_path(path)?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(
                    n.id(),
                    GeoPoint::new(n.lat() as f32, n.lon() as f32),
                );
            }
            Element::DenseNode(n) => {
                all_nodes.insert(
                    n.id(),
                    GeoPoint::new(n.lat() as f32, n.lon() as f32),
                );
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(highway) = highway.filter(|h| is_drivable(h)) {
                    let oneway = is_oneway(highway, &tags);
                    let refs: Vec<i64> = w.refs().collect();
                    road_ways.push(OsmWay { refs, oneway });
                }
            }
            _ => {}
        })
        .map_err(|e| ModelError::Osm(e.to_string()))?;

    // ── Phase 2: identify road-referenced node IDs ────────────────────────
    let road_node_ids: HashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .filter(|id| all_nodes.contains_key(id))
        .collect();

    if road_node_ids.is_empty() {
        return Err(ModelError::EmptyExtract);
    }

    // ── Phase 3: normalization frame from the road-node bounding box ──────
    let frame = MapFrame::from_points(
        road_node_ids.iter().map(|id| all_nodes[id]),
    );

    // ── Phase 4: build graph ──────────────────────────────────────────────
    // Pre-allocate: ~2× road nodes for edges (rough estimate).
    let mut builder = RoadGraphBuilder::with_capacity(
        road_node_ids.len(),
        road_node_ids.len() * 2,
    );
    builder.set_metric_scale(frame.metres_per_unit);

    // Map OSM node IDs → our NodeIds, adding only road-relevant nodes.
    let mut osm_to_rr: HashMap<i64, NodeId> =
        HashMap::with_capacity(road_node_ids.len());

    for osm_id in &road_node_ids {
        let pos = frame.project(all_nodes[osm_id]);
        let rr_id = builder.add_node(pos);
        osm_to_rr.insert(*osm_id, rr_id);
    }

    // Free the full node map — no longer needed.
    drop(all_nodes);
    drop(road_node_ids);

    // Add directed edges from way node sequences.
    for way in &road_ways {
        for window in way.refs.windows(2) {
            let (osm_a, osm_b) = (window[0], window[1]);
            if let (Some(&from), Some(&to)) =
                (osm_to_rr.get(&osm_a), osm_to_rr.get(&osm_b))
            {
                builder.add_directed_edge(from, to);
                if !way.oneway {
                    builder.add_directed_edge(to, from);
                }
            }
        }
    }

    let graph = builder.build();
    log::info!(
        "loaded OSM extract: {} nodes, {} edges, {:.0} m per map unit",
        graph.node_count(),
        graph.edge_count(),
        frame.metres_per_unit,
    );
    Ok(graph)
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    refs:   Vec<i64>,
    oneway: bool,
}

/// Projection from WGS-84 into aspect-correct map-fraction units.
struct MapFrame {
    min_lat: f32,
    min_lon: f32,
    lat_span: f32,
    lon_span: f32,
    /// Fraction of one unit covered by the full latitude span.
    y_extent: f32,
    /// Fraction of one unit covered by the full longitude span.
    x_extent: f32,
    metres_per_unit: f32,
}

impl MapFrame {
    fn from_points(points: impl Iterator<Item = GeoPoint>) -> Self {
        let (mut min_lat, mut max_lat) = (f32::MAX, f32::MIN);
        let (mut min_lon, mut max_lon) = (f32::MAX, f32::MIN);
        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
        }

        let mid_lat = (min_lat + max_lat) * 0.5;
        let width_m = GeoPoint::new(mid_lat, min_lon)
            .distance_m(GeoPoint::new(mid_lat, max_lon));
        let height_m = GeoPoint::new(min_lat, min_lon)
            .distance_m(GeoPoint::new(max_lat, min_lon));

        // Degenerate extracts (a single node, or all nodes coincident) get a
        // unit scale so projection stays finite.
        let metres_per_unit = if width_m.max(height_m) > 0.0 {
            width_m.max(height_m)
        } else {
            1.0
        };

        Self {
            min_lat,
            min_lon,
            lat_span: max_lat - min_lat,
            lon_span: max_lon - min_lon,
            x_extent: width_m / metres_per_unit,
            y_extent: height_m / metres_per_unit,
            metres_per_unit,
        }
    }

    fn project(&self, p: GeoPoint) -> MapPoint {
        let x = if self.lon_span > 0.0 {
            (p.lon - self.min_lon) / self.lon_span * self.x_extent
        } else {
            0.0
        };
        let y = if self.lat_span > 0.0 {
            (p.lat - self.min_lat) / self.lat_span * self.y_extent
        } else {
            0.0
        };
        MapPoint::new(x, y)
    }
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// Whether a `highway` value is drivable by car.
///
/// Unknown road classes are kept rather than dropped — an unclassified
/// residential lane still connects the graph.
fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track"
    )
}

/// Determine whether a way should be treated as one-way for car traffic.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
fn is_oneway(highway: &str, tags: &[(&str, &str)]) -> bool {
    let explicit = tags.iter().any(|(k, v)| {
        *k == "oneway" && matches!(*v, "yes" | "1" | "true")
    });
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}
