use geo::{Distance, Geodesic, Line, Point};
use log::{info, warn};
use rayon::prelude::*;

use crate::Error;
use crate::model::{Facility, FlightGraph, NodeId};
use crate::spatial::ZoneLayers;
use crate::weighting::EdgeWeightPolicy;

/// Build the base flight graph over the facility set.
///
/// Facilities inside a no-fly zone are never added as nodes, so they can
/// never serve as endpoints or intermediate stops. Every unordered pair of
/// admitted facilities within geodesic range is priced by the policy;
/// pricing is direction-independent, so each pair is evaluated once.
///
/// Pair pricing is the dominant cost center (`O(F^2)` predicate
/// evaluations) and runs on the rayon pool; the priced edges are committed
/// to the graph by this thread alone.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if facility ids are not unique.
pub fn build_flight_graph(
    facilities: &[Facility],
    zones: &ZoneLayers,
    range_km: f64,
    policy: &dyn EdgeWeightPolicy,
) -> Result<FlightGraph, Error> {
    let admitted: Vec<&Facility> = facilities
        .iter()
        .filter(|facility| {
            if zones.no_fly.contains_point(&facility.geometry) {
                warn!(
                    "Facility {} ({}) is inside a no-fly zone, excluding it from the graph",
                    facility.id,
                    facility.name.as_deref().unwrap_or("unnamed"),
                );
                false
            } else {
                true
            }
        })
        .collect();

    let mut graph = FlightGraph::new();
    for facility in &admitted {
        graph.add_facility(facility)?;
    }

    let edges: Vec<(NodeId, NodeId, f64)> = (0..admitted.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let a = admitted[i];
            admitted[i + 1..].iter().filter_map(move |b| {
                price_connection(a.geometry, b.geometry, zones, range_km, policy)
                    .map(|weight| (a.id, b.id, weight))
            })
        })
        .collect();

    for (a, b, weight) in edges {
        graph.update_edge(a, b, weight)?;
    }

    info!(
        "Built flight graph: {} nodes, {} edges ({} facilities excluded)",
        graph.node_count(),
        graph.edge_count(),
        facilities.len() - admitted.len()
    );
    Ok(graph)
}

/// Insert an ad-hoc waypoint (e.g. a requested start or end location) into
/// an existing graph, connecting it to every facility node that the range
/// and zone rules allow.
///
/// Returns `None` when the point lies inside a no-fly zone; this is an
/// expected, recoverable outcome, not an error. Waypoints only ever
/// connect to facility nodes: two inserted waypoints are never linked
/// directly, even when they are within range of each other, so repeated
/// insertions into the same graph cannot interfere.
pub fn insert_waypoint(
    graph: &mut FlightGraph,
    latitude: f64,
    longitude: f64,
    label: &str,
    zones: &ZoneLayers,
    range_km: f64,
    policy: &dyn EdgeWeightPolicy,
) -> Result<Option<NodeId>, Error> {
    let point = Point::new(longitude, latitude);
    if zones.no_fly.contains_point(&point) {
        warn!("{label} at ({latitude}, {longitude}) is within a no-fly zone and cannot be added");
        return Ok(None);
    }

    let targets: Vec<(NodeId, Point<f64>)> = graph
        .nodes()
        .filter(|node| node.is_facility())
        .map(|node| (node.id, node.geometry))
        .collect();

    let edges: Vec<(NodeId, f64)> = targets
        .par_iter()
        .filter_map(|&(id, geometry)| {
            price_connection(point, geometry, zones, range_km, policy).map(|weight| (id, weight))
        })
        .collect();

    let new_id = graph.add_waypoint(point, label);
    for (target, weight) in &edges {
        graph.update_edge(new_id, *target, *weight)?;
    }

    info!(
        "Inserted {label} as node {new_id} with {} connections",
        edges.len()
    );
    Ok(Some(new_id))
}

/// Shared legality and pricing rule for one candidate connection: enforce
/// the range threshold, then let the policy price the straight line.
fn price_connection(
    a: Point<f64>,
    b: Point<f64>,
    zones: &ZoneLayers,
    range_km: f64,
    policy: &dyn EdgeWeightPolicy,
) -> Option<f64> {
    let distance_km = Geodesic.distance(a, b) / 1000.0;
    if distance_km > range_km {
        return None;
    }
    policy.price(&Line::new(a, b), distance_km, zones)
}
