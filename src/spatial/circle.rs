use geo::{Coord, Geometry, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use super::RegionSet;

/// Rough meters-per-degree conversion used when buffering circular zones.
///
/// Only valid near the equator and mid-latitudes; it does not correct for
/// longitude compression. Acceptable for the target latitude band, not
/// generally correct.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

const CIRCLE_VERTICES: usize = 64;

/// A circular zone authored as (center, radius in meters).
///
/// Materialized as a regular polygon approximating the circle, with the
/// radius converted to degrees via [`METERS_PER_DEGREE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularZone {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters.
    pub radius: f64,
}

impl CircularZone {
    pub fn new(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius,
        }
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        let radius_deg = self.radius / METERS_PER_DEGREE;
        let ring: Vec<Coord<f64>> = (0..=CIRCLE_VERTICES)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64) / (CIRCLE_VERTICES as f64);
                Coord {
                    x: self.longitude + radius_deg * theta.cos(),
                    y: self.latitude + radius_deg * theta.sin(),
                }
            })
            .collect();
        Polygon::new(LineString::new(ring), vec![])
    }
}

/// Build a [`RegionSet`] from a list of circular zones.
pub fn region_set_from_circles(name: &str, zones: &[CircularZone]) -> RegionSet {
    let regions = zones
        .iter()
        .map(|zone| Geometry::Polygon(zone.to_polygon()))
        .collect();
    RegionSet::new(name, regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Line;

    #[test]
    fn circle_contains_center_but_not_far_points() {
        let zone = CircularZone::new(5.6, -0.2, 500.0);
        let set = region_set_from_circles("no_fly", &[zone]);

        assert!(set.contains_point(&zone.center()));
        // 500 m is about 0.0045 degrees; a point 0.01 degrees away is outside
        assert!(!set.contains_point(&Point::new(-0.21, 5.6)));
    }

    #[test]
    fn circle_radius_approximation() {
        let zone = CircularZone::new(0.0, 0.0, 1113.2);
        let set = region_set_from_circles("no_fly", &[zone]);
        let radius_deg = 1113.2 / METERS_PER_DEGREE; // 0.01

        // just inside and just outside the ring along the x axis
        assert!(set.contains_point(&Point::new(radius_deg * 0.95, 0.0)));
        assert!(!set.contains_point(&Point::new(radius_deg * 1.05, 0.0)));
    }

    #[test]
    fn line_through_circle_intersects() {
        let zone = CircularZone::new(5.6, -0.2, 1000.0);
        let set = region_set_from_circles("no_fly", &[zone]);

        let through = Line::new(Point::new(-0.3, 5.6), Point::new(-0.1, 5.6));
        let clear = Line::new(Point::new(-0.3, 5.7), Point::new(-0.1, 5.7));
        assert!(set.intersects_line(&through));
        assert!(!set.intersects_line(&clear));
    }
}
