use super::RegionSet;

/// The five region collections consumed by graph construction.
///
/// No-fly and avoidance zones are always required. The land-use layers
/// (roads, buildings, open space) only matter to the segmented weighting
/// policy; they default to empty sets, for which every predicate is false.
#[derive(Debug, Clone)]
pub struct ZoneLayers {
    pub no_fly: RegionSet,
    pub avoidance: RegionSet,
    pub roads: RegionSet,
    pub buildings: RegionSet,
    pub open_space: RegionSet,
}

impl ZoneLayers {
    pub fn new(no_fly: RegionSet, avoidance: RegionSet) -> Self {
        Self {
            no_fly,
            avoidance,
            roads: RegionSet::empty("roads"),
            buildings: RegionSet::empty("buildings"),
            open_space: RegionSet::empty("open_space"),
        }
    }

    #[must_use]
    pub fn with_land_use(
        mut self,
        roads: RegionSet,
        buildings: RegionSet,
        open_space: RegionSet,
    ) -> Self {
        self.roads = roads;
        self.buildings = buildings;
        self.open_space = open_space;
        self
    }
}
