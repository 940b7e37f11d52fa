//! Drone route planning over a constrained facility network.
//!
//! The crate builds a weighted undirected graph over a set of fixed
//! facilities (e.g. charging stations), where edge existence and cost depend
//! on geometric relationships to restricted airspace: no-fly zones forbid a
//! connection outright, avoidance zones and land-use layers scale its cost.
//! Ad-hoc start/end points are inserted into the prebuilt graph at query
//! time and a minimum-cost path is computed with Dijkstra's algorithm.
//!
//! Main entry points:
//! - [`loading::build_flight_graph`] - construct the base graph
//! - [`loading::insert_waypoint`] - add an ad-hoc node at query time
//! - [`routing::plan_route`] - end-to-end route for a single request

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod spatial;
pub mod weighting;

pub use error::Error;
pub use model::{Facility, FlightGraph, NodeId};
pub use routing::{RouteOutcome, plan_route};
pub use spatial::{RegionSet, ZoneLayers};
pub use weighting::{DistancePolicy, EdgeWeightPolicy, SegmentedPolicy};
