use geo::{Coord, Distance, Euclidean, Line};

use super::EdgeWeightPolicy;
use crate::spatial::ZoneLayers;

/// Multiplicative adjustments applied to each sub-segment that intersects
/// the corresponding land-use layer. Adjustments compose: a segment crossing
/// both a road and an avoidance zone is scaled by both factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandUseWeights {
    pub road: f64,
    pub building: f64,
    pub open_space: f64,
    pub avoidance: f64,
}

impl Default for LandUseWeights {
    fn default() -> Self {
        Self {
            road: 1.5,
            // Deliberate no-op default; kept configurable so a decision to
            // penalize buildings is a data change.
            building: 1.0,
            open_space: 0.8,
            avoidance: 3.0,
        }
    }
}

/// Land-use-aware policy: the connecting line is divided into
/// `floor(length / segment_length)` equal sub-segments, each priced as its
/// own length (degree space) times the land-use adjustments it intersects.
/// The edge weight is the sum over sub-segments.
///
/// `segment_length` shares the line's coordinate space. When the line is
/// shorter than one segment length the division would yield zero segments
/// and a silent zero-weight edge, so the count is clamped to one segment
/// spanning the whole line.
#[derive(Debug, Clone, Copy)]
pub struct SegmentedPolicy {
    pub segment_length: f64,
    pub weights: LandUseWeights,
}

impl Default for SegmentedPolicy {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            weights: LandUseWeights::default(),
        }
    }
}

impl SegmentedPolicy {
    pub fn new(segment_length: f64) -> Self {
        Self {
            segment_length,
            weights: LandUseWeights::default(),
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: LandUseWeights) -> Self {
        self.weights = weights;
        self
    }

    fn segment_weight(&self, segment: &Line<f64>, zones: &ZoneLayers) -> f64 {
        let mut weight = Euclidean.distance(segment.start_point(), segment.end_point());

        if zones.roads.intersects_line(segment) {
            weight *= self.weights.road;
        }
        if zones.buildings.intersects_line(segment) {
            weight *= self.weights.building;
        }
        if zones.open_space.intersects_line(segment) {
            weight *= self.weights.open_space;
        }
        if zones.avoidance.intersects_line(segment) {
            weight *= self.weights.avoidance;
        }
        weight
    }
}

impl EdgeWeightPolicy for SegmentedPolicy {
    fn price(&self, line: &Line<f64>, _distance_km: f64, zones: &ZoneLayers) -> Option<f64> {
        if zones.no_fly.intersects_line(line) {
            return None;
        }

        let total = segment_line(line, self.segment_length)
            .map(|segment| self.segment_weight(&segment, zones))
            .sum();
        Some(total)
    }
}

/// Split a line into equal-length sub-segments over evenly spaced
/// parameters. Linear interpolation from either endpoint produces the same
/// segment boundaries, so segmentation is direction-independent.
fn segment_line(line: &Line<f64>, segment_length: f64) -> impl Iterator<Item = Line<f64>> + '_ {
    let length = Euclidean.distance(line.start_point(), line.end_point());
    // Degenerate-count guard: a line shorter than one segment length still
    // prices as a single whole-line segment.
    let count = ((length / segment_length) as usize).max(1);

    (0..count).map(move |i| {
        let t0 = i as f64 / count as f64;
        let t1 = (i + 1) as f64 / count as f64;
        Line::new(point_at(line, t0), point_at(line, t1))
    })
}

fn point_at(line: &Line<f64>, t: f64) -> Coord<f64> {
    line.start + line.delta() * t
}
