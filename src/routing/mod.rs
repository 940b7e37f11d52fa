//! Shortest-path computation and route output.

mod dijkstra;
mod itinerary;

pub use dijkstra::{RoutePath, shortest_path};
pub use itinerary::{Itinerary, RouteStop};

use log::warn;

use crate::Error;
use crate::loading::insert_waypoint;
use crate::model::FlightGraph;
use crate::spatial::ZoneLayers;
use crate::weighting::EdgeWeightPolicy;

/// Outcome of a single routing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Itinerary),
    /// The named endpoint lies inside a no-fly zone and was not added;
    /// expected and recoverable, distinct from "no route".
    Blocked { label: String },
    /// Both endpoints were inserted but no connecting path exists.
    NoRoute,
}

/// Plan a route between two ad-hoc locations over a prebuilt base graph.
///
/// The base graph is left untouched: Start and End are inserted into a
/// working copy, which is discarded afterwards (ad-hoc nodes are never
/// persisted back). Nodes with corrupt positions are dropped from the copy
/// before any path computation.
///
/// `start` and `end` are (latitude, longitude) pairs.
pub fn plan_route(
    base: &FlightGraph,
    start: (f64, f64),
    end: (f64, f64),
    zones: &ZoneLayers,
    range_km: f64,
    policy: &dyn EdgeWeightPolicy,
) -> Result<RouteOutcome, Error> {
    let mut graph = base.clone();
    let dropped = graph.drop_invalid_positions();
    if !dropped.is_empty() {
        warn!("Base graph contained {} nodes without valid positions", dropped.len());
    }

    let Some(start_id) =
        insert_waypoint(&mut graph, start.0, start.1, "Start", zones, range_km, policy)?
    else {
        return Ok(RouteOutcome::Blocked {
            label: "Start".to_string(),
        });
    };
    let Some(end_id) =
        insert_waypoint(&mut graph, end.0, end.1, "End", zones, range_km, policy)?
    else {
        return Ok(RouteOutcome::Blocked {
            label: "End".to_string(),
        });
    };

    match shortest_path(&graph, start_id, end_id)? {
        Some(path) => Ok(RouteOutcome::Found(Itinerary::from_path(&graph, &path)?)),
        None => Ok(RouteOutcome::NoRoute),
    }
}
