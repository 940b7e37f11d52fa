use geo::Line;

use super::EdgeWeightPolicy;
use crate::spatial::ZoneLayers;

/// Cost multiplier for connections whose straight line crosses an
/// avoidance zone.
const AVOIDANCE_FACTOR: f64 = 10.0;

/// Plain-distance policy: weight is the geodesic distance in kilometers,
/// scaled by [`AVOIDANCE_FACTOR`] when the line crosses an avoidance zone.
/// Roads, buildings and open space are ignored entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistancePolicy;

impl EdgeWeightPolicy for DistancePolicy {
    fn price(&self, line: &Line<f64>, distance_km: f64, zones: &ZoneLayers) -> Option<f64> {
        if zones.no_fly.intersects_line(line) {
            return None;
        }

        let mut weight = distance_km;
        if zones.avoidance.intersects_line(line) {
            weight *= AVOIDANCE_FACTOR;
        }
        Some(weight)
    }
}
