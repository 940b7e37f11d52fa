use std::path::PathBuf;

use crate::Error;

/// Immutable planning configuration, validated once up front and passed
/// explicitly into graph construction and routing (no ambient globals).
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub facilities_path: PathBuf,
    pub no_fly_path: PathBuf,
    pub avoidance_path: PathBuf,
    /// Optional path of a previously serialized graph; a missing cache is
    /// recoverable (the graph is rebuilt), so existence is not validated.
    pub graph_cache: Option<PathBuf>,
    /// Maximum distance the drone can travel between nodes, in kilometers.
    pub range_km: f64,
    /// Validated but not used as a path cost term.
    pub payload_kg: f64,
}

impl PlannerConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for non-positive drone constraints
    /// and [`Error::MissingData`] naming the specific missing resource.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.range_km.is_finite() && self.range_km > 0.0) {
            return Err(Error::InvalidInput(format!(
                "drone range must be a positive number of kilometers, got {}",
                self.range_km
            )));
        }
        if !(self.payload_kg.is_finite() && self.payload_kg > 0.0) {
            return Err(Error::InvalidInput(format!(
                "payload capacity must be a positive number of kilograms, got {}",
                self.payload_kg
            )));
        }
        if !self.facilities_path.exists() {
            return Err(Error::MissingData(format!(
                "facility table not found: {}",
                self.facilities_path.display()
            )));
        }
        if !self.no_fly_path.exists() {
            return Err(Error::MissingData(format!(
                "no-fly zone file not found: {}",
                self.no_fly_path.display()
            )));
        }
        if !self.avoidance_path.exists() {
            return Err(Error::MissingData(format!(
                "avoidance zone file not found: {}",
                self.avoidance_path.display()
            )));
        }
        Ok(())
    }
}

/// Valid latitude/longitude window for requested start and end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl CoordinateBounds {
    pub fn new(lat_range: (f64, f64), lon_range: (f64, f64)) -> Self {
        Self {
            lat_min: lat_range.0,
            lat_max: lat_range.1,
            lon_min: lon_range.0,
            lon_max: lon_range.1,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the coordinates fall outside
    /// the window, so the caller can prompt for a retry.
    pub fn validate(&self, latitude: f64, longitude: f64) -> Result<(), Error> {
        if self.contains(latitude, longitude) {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "coordinates ({latitude}, {longitude}) are outside the valid range \
                 lat [{}, {}], lon [{}, {}]",
                self.lat_min, self.lat_max, self.lon_min, self.lon_max
            )))
        }
    }
}
