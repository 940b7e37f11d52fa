use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::Error;
use crate::model::{FlightGraph, NodeId};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); ties broken by
// node index so pop order is deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A minimum-cost path through the flight graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    /// Node ids from start to end, inclusive.
    pub nodes: Vec<NodeId>,
    pub total_weight: f64,
}

/// Dijkstra's algorithm with predecessor tracing.
///
/// Edge weights are non-negative by construction. Between equal-cost paths
/// the first one settled wins (a relaxation only replaces a predecessor on
/// a strict improvement), which is stable for a fixed graph construction
/// order.
///
/// # Errors
///
/// [`Error::UnknownNode`] when either endpoint id is not in the graph.
/// An unreachable end node is the distinct "no route" outcome, `Ok(None)`.
pub fn shortest_path(
    graph: &FlightGraph,
    start: NodeId,
    end: NodeId,
) -> Result<Option<RoutePath>, Error> {
    let start_idx = graph.index_of(start).ok_or(Error::UnknownNode(start))?;
    let end_idx = graph.index_of(end).ok_or(Error::UnknownNode(end))?;
    let inner = graph.inner();

    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start_idx, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start_idx,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == end_idx {
            break;
        }

        // Skip if we've already settled a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in inner.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    let Some(&total_weight) = distances.get(&end_idx) else {
        return Ok(None);
    };
    if end_idx != start_idx && !predecessors.contains_key(&end_idx) {
        return Ok(None);
    }

    // Follow predecessors backward from end to start
    let mut indices = vec![end_idx];
    let mut current = end_idx;
    while current != start_idx {
        match predecessors.get(&current) {
            Some(&previous) => {
                indices.push(previous);
                current = previous;
            }
            None => return Ok(None),
        }
    }
    indices.reverse();

    let nodes = indices
        .into_iter()
        .map(|index| inner[index].id)
        .collect();
    Ok(Some(RoutePath {
        nodes,
        total_weight,
    }))
}
