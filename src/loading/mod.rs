//! Loading of external data (facility tables, zone files), graph
//! construction, ad-hoc node insertion, and graph persistence.

mod builder;
mod config;
mod facilities;
mod persist;
mod zones;

pub use builder::{build_flight_graph, insert_waypoint};
pub use config::{CoordinateBounds, PlannerConfig};
pub use facilities::load_facilities;
pub use persist::{load_graph, save_graph};
pub use zones::{load_region_set, save_zones};
