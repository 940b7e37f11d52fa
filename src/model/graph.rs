use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::warn;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use super::{Facility, FlightEdge, FlightNode, NodeId, NodeKind};
use crate::Error;

const SCHEMA_VERSION: u32 = 1;

/// The flight network: an undirected weighted graph over facility nodes
/// and ad-hoc waypoints.
///
/// Wraps a petgraph graph with a map from stable external ids to internal
/// indices, plus a monotonic id counter for waypoint allocation. Edges
/// never duplicate: re-pricing an existing pair overwrites the stored
/// weight (last write wins). Self-loops are rejected.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    graph: UnGraph<FlightNode, FlightEdge>,
    ids: HashMap<NodeId, NodeIndex>,
    next_id: NodeId,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facility node under its dataset id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the id is already taken; facility
    /// ids are unique and stable per run by contract.
    pub fn add_facility(&mut self, facility: &Facility) -> Result<NodeId, Error> {
        if self.ids.contains_key(&facility.id) {
            return Err(Error::InvalidData(format!(
                "duplicate node id {}",
                facility.id
            )));
        }
        self.insert_node(
            facility.id,
            facility.geometry,
            NodeKind::Facility {
                name: facility.name.clone(),
            },
        );
        Ok(facility.id)
    }

    /// Add an ad-hoc waypoint, allocating a fresh id strictly greater than
    /// every id ever used by this graph.
    pub fn add_waypoint(&mut self, geometry: Point<f64>, label: &str) -> NodeId {
        let id = self.next_id;
        self.insert_node(
            id,
            geometry,
            NodeKind::Waypoint {
                label: label.to_string(),
            },
        );
        id
    }

    fn insert_node(&mut self, id: NodeId, geometry: Point<f64>, kind: NodeKind) {
        let index = self.graph.add_node(FlightNode { id, geometry, kind });
        self.ids.insert(id, index);
        self.next_id = self.next_id.max(id + 1);
    }

    /// Create or overwrite the undirected edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Fails on self-loops, unknown endpoints, or a weight that is negative
    /// or not finite.
    pub fn update_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<(), Error> {
        if a == b {
            return Err(Error::InvalidData(format!("self-loop on node {a}")));
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(Error::InvalidData(format!(
                "edge ({a}, {b}) has invalid weight {weight}"
            )));
        }
        let a_idx = self.index_of(a).ok_or(Error::UnknownNode(a))?;
        let b_idx = self.index_of(b).ok_or(Error::UnknownNode(b))?;
        self.graph.update_edge(a_idx, b_idx, FlightEdge { weight });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&FlightNode> {
        self.ids.get(&id).map(|&index| &self.graph[index])
    }

    /// Node position in (lon, lat) order.
    pub fn position(&self, id: NodeId) -> Option<Point<f64>> {
        self.node(id).map(|node| node.geometry)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FlightNode> {
        self.graph.node_weights()
    }

    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        let edge = self.graph.find_edge(a_idx, b_idx)?;
        Some(self.graph[edge].weight)
    }

    /// Neighbors of a node with edge weights, sorted by neighbor id.
    pub fn edges_of(&self, id: NodeId) -> Vec<(NodeId, f64)> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let mut edges: Vec<(NodeId, f64)> = self
            .graph
            .edges(index)
            .map(|edge| (self.graph[edge.target()].id, edge.weight().weight))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.ids.get(&id).copied()
    }

    pub(crate) fn inner(&self) -> &UnGraph<FlightNode, FlightEdge> {
        &self.graph
    }

    /// Remove nodes whose position is not finite, so a corrupted cache
    /// entry cannot crash path computation. Returns the removed ids.
    pub fn drop_invalid_positions(&mut self) -> Vec<NodeId> {
        let invalid: Vec<NodeId> = self
            .graph
            .node_weights()
            .filter(|node| !(node.geometry.x().is_finite() && node.geometry.y().is_finite()))
            .map(|node| node.id)
            .collect();

        if !invalid.is_empty() {
            warn!("Dropping {} nodes with invalid positions: {invalid:?}", invalid.len());
            self.graph.retain_nodes(|graph, index| {
                let point = graph[index].geometry;
                point.x().is_finite() && point.y().is_finite()
            });
            // Node removal reshuffles internal indices
            self.ids = self
                .graph
                .node_indices()
                .map(|index| (self.graph[index].id, index))
                .collect();
        }
        invalid
    }

    /// Export the graph as explicit node and edge tables, the persistence
    /// schema boundary. Node records are ordered by id for deterministic
    /// output.
    pub fn to_tables(&self) -> GraphTables {
        let mut nodes: Vec<NodeRecord> = self
            .graph
            .node_weights()
            .map(|node| {
                let (name, label) = match &node.kind {
                    NodeKind::Facility { name } => (name.clone(), None),
                    NodeKind::Waypoint { label } => (None, Some(label.clone())),
                };
                NodeRecord {
                    id: node.id,
                    lon: node.geometry.x(),
                    lat: node.geometry.y(),
                    name,
                    label,
                }
            })
            .collect();
        nodes.sort_by_key(|record| record.id);

        let edges = self
            .graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                Some(EdgeRecord {
                    source: self.graph[a].id,
                    target: self.graph[b].id,
                    weight: self.graph[edge].weight,
                })
            })
            .collect();

        GraphTables {
            schema_version: SCHEMA_VERSION,
            nodes,
            edges,
        }
    }

    /// Rebuild a graph from persisted tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for an unknown schema version,
    /// duplicate node ids, self-loops, or edges referencing missing nodes.
    pub fn from_tables(tables: GraphTables) -> Result<Self, Error> {
        if tables.schema_version != SCHEMA_VERSION {
            return Err(Error::InvalidData(format!(
                "unsupported graph schema version {}",
                tables.schema_version
            )));
        }

        let duplicates: Vec<NodeId> = tables
            .nodes
            .iter()
            .map(|record| record.id)
            .duplicates()
            .collect();
        if !duplicates.is_empty() {
            return Err(Error::InvalidData(format!(
                "duplicate node ids in graph tables: {duplicates:?}"
            )));
        }

        let mut graph = Self::new();
        for record in &tables.nodes {
            let kind = match &record.label {
                Some(label) => NodeKind::Waypoint {
                    label: label.clone(),
                },
                None => NodeKind::Facility {
                    name: record.name.clone(),
                },
            };
            graph.insert_node(record.id, Point::new(record.lon, record.lat), kind);
        }
        for record in &tables.edges {
            graph.update_edge(record.source, record.target, record.weight)?;
        }
        Ok(graph)
    }
}

/// Explicit node-table + edge-table serialization schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphTables {
    pub schema_version: u32,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub lon: f64,
    pub lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}
