//! Spatial constraint model: named region collections and the two
//! predicates ("does any region contain this point", "does any region
//! intersect this segment") that drive edge legality and pricing.

mod circle;
mod layers;
mod region_set;

pub use circle::{CircularZone, METERS_PER_DEGREE, region_set_from_circles};
pub use layers::ZoneLayers;
pub use region_set::RegionSet;
