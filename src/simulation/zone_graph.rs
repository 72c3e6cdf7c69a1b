//! Zone graph for travel-cost lookups
//!
//! Directed weighted graph over collection zones, fully connected by the
//! generator's contract. Costs are kept in a map keyed by zone pair so a
//! lookup never scans the edge list.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use super::error::SimError;
use super::types::ZoneId;

/// Travel-cost graph between zones (depot included)
#[derive(Default)]
pub struct ZoneGraph {
    /// The underlying petgraph directed graph
    graph: DiGraph<ZoneId, u64>,

    /// Maps zone IDs to their node indices in the graph
    zone_to_node: HashMap<ZoneId, NodeIndex>,

    /// Cost lookup keyed by (from, to), built on insertion
    costs: HashMap<(ZoneId, ZoneId), u64>,
}

impl ZoneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from raw `(from, to, cost)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32, u64)>) -> Result<Self, SimError> {
        let mut graph = Self::new();
        for (from, to, cost) in edges {
            graph.add_edge(ZoneId(from), ZoneId(to), cost)?;
        }
        Ok(graph)
    }

    /// Registers a zone in the graph if it isn't already present
    pub fn add_zone(&mut self, zone: ZoneId) {
        if self.zone_to_node.contains_key(&zone) {
            return;
        }
        let node_index = self.graph.add_node(zone);
        self.zone_to_node.insert(zone, node_index);
    }

    /// Adds a directed edge between two distinct zones.
    ///
    /// Self-loops and zero costs are malformed input; inserting the same
    /// pair twice replaces the previous cost.
    pub fn add_edge(&mut self, from: ZoneId, to: ZoneId, cost: u64) -> Result<(), SimError> {
        if from == to {
            return Err(SimError::SelfLoopEdge { zone: from });
        }
        if cost == 0 {
            return Err(SimError::ZeroCostEdge { from, to });
        }

        self.add_zone(from);
        self.add_zone(to);

        let start_node = self.zone_to_node[&from];
        let end_node = self.zone_to_node[&to];
        self.graph.update_edge(start_node, end_node, cost);
        self.costs.insert((from, to), cost);

        Ok(())
    }

    /// Travel cost between two zones.
    ///
    /// Staying in place costs nothing; a missing edge between distinct
    /// zones is a hard error, never an implicit zero.
    pub fn travel_cost(&self, from: ZoneId, to: ZoneId) -> Result<u64, SimError> {
        if from == to {
            return Ok(0);
        }
        self.costs
            .get(&(from, to))
            .copied()
            .ok_or(SimError::MissingEdge { from, to })
    }

    pub fn contains_zone(&self, zone: ZoneId) -> bool {
        self.zone_to_node.contains_key(&zone)
    }

    /// All zones registered in the graph
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.graph.node_weights().copied()
    }

    pub fn zone_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
