use geo::{BoundingRect, Contains, Geometry, Intersects, Line, Point, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// Bounding box of one region, indexed back into the region vector.
#[derive(Debug, Clone)]
struct RegionEnvelope {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for RegionEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// An immutable, named collection of region geometries (polygons for zones
/// and buildings, polylines for roads).
///
/// Both predicates are pure and the set is read-only after construction, so
/// a `RegionSet` can be shared freely across parallel workers. An R-tree
/// over region bounding boxes prunes candidates before the exact geometry
/// predicate runs; the naive scan is `O(regions)` per call and the builder
/// invokes it `O(nodes^2)` times.
#[derive(Debug, Clone)]
pub struct RegionSet {
    name: String,
    regions: Vec<Geometry<f64>>,
    tree: RTree<RegionEnvelope>,
}

impl RegionSet {
    pub fn new(name: &str, regions: Vec<Geometry<f64>>) -> Self {
        let envelopes = regions
            .iter()
            .enumerate()
            .filter_map(|(idx, geometry)| {
                geometry
                    .bounding_rect()
                    .map(|bbox| RegionEnvelope { idx, bbox })
            })
            .collect();

        Self {
            name: name.to_string(),
            regions,
            tree: RTree::bulk_load(envelopes),
        }
    }

    /// A set with no regions; both predicates are always false.
    pub fn empty(name: &str) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// True if any region in the set contains the point. Boundary
    /// inclusion follows `geo`'s containment semantics (a point exactly on
    /// a polygon boundary is not contained).
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        let query = AABB::from_point([point.x(), point.y()]);
        self.tree
            .locate_in_envelope_intersecting(&query)
            .any(|candidate| self.regions[candidate.idx].contains(point))
    }

    /// True if any region in the set shares at least one point with the
    /// given straight segment.
    pub fn intersects_line(&self, line: &Line<f64>) -> bool {
        let rect = line.bounding_rect();
        let query = AABB::from_corners(rect.min().into(), rect.max().into());
        self.tree
            .locate_in_envelope_intersecting(&query)
            .any(|candidate| self.regions[candidate.idx].intersects(line))
    }
}
