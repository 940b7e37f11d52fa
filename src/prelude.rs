pub use crate::error::Error;

// Graph construction and persistence
pub use crate::loading::{
    CoordinateBounds, PlannerConfig, build_flight_graph, insert_waypoint, load_facilities,
    load_graph, load_region_set, save_graph, save_zones,
};

// Core model types
pub use crate::model::{Facility, FlightGraph, FlightNode, GraphTables, NodeId, NodeKind};

// Routing
pub use crate::routing::{
    Itinerary, RouteOutcome, RoutePath, RouteStop, plan_route, shortest_path,
};

// Spatial predicates and zones
pub use crate::spatial::{CircularZone, RegionSet, ZoneLayers, region_set_from_circles};

// Edge weighting policies
pub use crate::weighting::{DistancePolicy, EdgeWeightPolicy, LandUseWeights, SegmentedPolicy};
