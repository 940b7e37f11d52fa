//! Data model for the flight network.

mod components;
mod graph;

pub use components::{Facility, FlightEdge, FlightNode, NodeId, NodeKind};
pub use graph::{EdgeRecord, FlightGraph, GraphTables, NodeRecord};
