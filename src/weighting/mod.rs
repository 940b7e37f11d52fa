//! Edge weighting policies.
//!
//! A policy turns a candidate straight-line connection into a scalar cost,
//! or rejects it outright when the line crosses a no-fly zone. Policies are
//! stateless and `Sync` so graph construction can price independent pairs
//! in parallel.

mod segmented;
mod simple;

pub use segmented::{LandUseWeights, SegmentedPolicy};
pub use simple::DistancePolicy;

use geo::Line;

use crate::spatial::ZoneLayers;

/// Prices a candidate connection between two waypoints.
pub trait EdgeWeightPolicy: Send + Sync {
    /// Returns the edge weight, or `None` when the connection is forbidden
    /// (its straight line crosses a no-fly zone).
    ///
    /// `distance_km` is the geodesic distance between the endpoints; `line`
    /// is the straight segment between them in (lon, lat) degree space.
    /// Implementations must be direction-independent: pricing A->B and
    /// B->A yields the same weight.
    fn price(&self, line: &Line<f64>, distance_km: f64, zones: &ZoneLayers) -> Option<f64>;
}
