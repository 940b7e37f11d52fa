use geo::Point;

/// External node identifier. Facility nodes keep their dataset row index;
/// ad-hoc waypoints are assigned fresh ids by the graph.
pub type NodeId = usize;

/// A fixed facility from the input dataset (e.g. a charging station).
///
/// The geometry follows the `geo` convention of x = longitude,
/// y = latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: NodeId,
    pub name: Option<String>,
    pub geometry: Point<f64>,
}

impl Facility {
    pub fn new(id: NodeId, latitude: f64, longitude: f64, name: Option<String>) -> Self {
        Self {
            id,
            name,
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// What a graph node represents: a dataset facility, or an ad-hoc waypoint
/// inserted at query time (carrying a label such as "Start" or "End").
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Facility { name: Option<String> },
    Waypoint { label: String },
}

/// A node of the flight graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightNode {
    pub id: NodeId,
    /// Position in (lon, lat) order.
    pub geometry: Point<f64>,
    pub kind: NodeKind,
}

impl FlightNode {
    pub fn is_facility(&self) -> bool {
        matches!(self.kind, NodeKind::Facility { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Facility { name } => name.as_deref(),
            NodeKind::Waypoint { label } => Some(label),
        }
    }
}

/// An undirected connection between two nodes, priced by a weighting
/// policy. Weights are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightEdge {
    pub weight: f64,
}
