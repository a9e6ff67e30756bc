//! Frozen route graph in CSR (Compressed Sparse Row) form
//!
//! # CSR Format
//!
//! ```text
//! Routes: AAA → BBB (x2), AAA → CCC, BBB → CCC
//!
//! CSR:
//!   row_offsets:  [0, 2, 3, 3]     // AAA: edges [0..2), BBB: [2..3), CCC: [3..3)
//!   col_indices:  [1, 2, 2]        // one entry per aggregated route
//!   edge_weights: [2.0, 1.0, 1.0]  // accumulated multiplicity
//!   out_weights:  [3.0, 1.0, 0.0]  // CCC is dangling
//! ```

use super::builder::RouteGraphBuilder;
use super::{GraphError, NodeId};
use std::collections::HashMap;

/// Airport vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    /// Dense index, stable for the lifetime of the graph
    pub index: NodeId,
    /// Unique airport code (IATA)
    pub code: String,
    /// Display label, carried through to the report unchanged
    pub label: String,
}

/// Immutable airport route graph
///
/// Optimized for:
/// - O(1) access to the aggregated outgoing routes of an airport
/// - Sequential sweeps over all edges during power iteration
///
/// Built with [`RouteGraphBuilder`]; ranks are never stored here.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    airports: Vec<Airport>,

    by_code: HashMap<String, NodeId>,

    /// airport i's routes live at `row_offsets[i]..row_offsets[i + 1]`
    /// Length: `num_nodes` + 1
    row_offsets: Vec<usize>,

    /// Route targets
    /// Length: `num_edges`
    col_indices: Vec<u32>,

    /// Route weights
    /// Length: `num_edges`
    edge_weights: Vec<f64>,

    /// Sum of outgoing weights per airport (0.0 ⇔ dangling)
    /// Length: `num_nodes`
    out_weights: Vec<f64>,
}

impl RouteGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        RouteGraphBuilder::new().build()
    }

    pub(super) fn from_parts(
        airports: Vec<Airport>,
        by_code: HashMap<String, NodeId>,
        row_offsets: Vec<usize>,
        col_indices: Vec<u32>,
        edge_weights: Vec<f64>,
        out_weights: Vec<f64>,
    ) -> Self {
        Self {
            airports,
            by_code,
            row_offsets,
            col_indices,
            edge_weights,
            out_weights,
        }
    }

    /// Create graph from an edge list over `num_nodes` anonymous airports
    ///
    /// Airports are named `node_{i}`. Repeated pairs aggregate exactly as they
    /// do through [`RouteGraphBuilder::add_route`].
    ///
    /// # Errors
    ///
    /// Returns error if an edge references a node `>= num_nodes` or carries an
    /// invalid weight.
    pub fn from_edge_list(
        num_nodes: usize,
        edges: &[(NodeId, NodeId, f64)],
    ) -> Result<Self, GraphError> {
        let mut builder = RouteGraphBuilder::new();
        for i in 0..num_nodes {
            let name = format!("node_{i}");
            builder.add_airport(name.clone(), name)?;
        }
        for &(src, dst, weight) in edges {
            builder.add_route(src, dst, weight)?;
        }
        Ok(builder.build())
    }

    /// Get number of airports
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.airports.len()
    }

    /// Get number of unique (aggregated) routes
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// Number of airports without outgoing routes
    #[must_use]
    pub fn num_dangling(&self) -> usize {
        self.out_weights.iter().filter(|&&w| w == 0.0).count()
    }

    /// Get airport by index
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn airport(&self, node: NodeId) -> Result<&Airport, GraphError> {
        self.airports.get(node.index()).ok_or(GraphError::NodeOutOfBounds {
            node: node.0,
            num_nodes: self.num_nodes(),
        })
    }

    /// All airports in index order
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Find an airport by code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<NodeId> {
        self.by_code.get(code).copied()
    }

    /// Total outgoing weight of an airport
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn out_weight(&self, node: NodeId) -> Result<f64, GraphError> {
        self.check_bounds(node)?;
        Ok(self.out_weights[node.index()])
    }

    /// Whether the airport has no outgoing routes
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn is_dangling(&self, node: NodeId) -> Result<bool, GraphError> {
        Ok(self.out_weight(node)? == 0.0)
    }

    /// Get destinations of an airport's routes, in first-seen order
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32], GraphError> {
        let (start, end) = self.row_range(node)?;
        Ok(&self.col_indices[start..end])
    }

    /// Get destinations and weights of an airport's routes
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn routes(&self, node: NodeId) -> Result<(&[u32], &[f64]), GraphError> {
        let (start, end) = self.row_range(node)?;
        Ok((&self.col_indices[start..end], &self.edge_weights[start..end]))
    }

    /// Get CSR components (row offsets, targets, weights)
    #[must_use]
    pub fn csr_components(&self) -> (&[usize], &[u32], &[f64]) {
        (&self.row_offsets, &self.col_indices, &self.edge_weights)
    }

    /// Per-airport outgoing weight sums, indexed by node
    #[must_use]
    pub fn out_weights(&self) -> &[f64] {
        &self.out_weights
    }

    fn row_range(&self, node: NodeId) -> Result<(usize, usize), GraphError> {
        self.check_bounds(node)?;
        let idx = node.index();
        Ok((self.row_offsets[idx], self.row_offsets[idx + 1]))
    }

    fn check_bounds(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() >= self.num_nodes() {
            return Err(GraphError::NodeOutOfBounds {
                node: node.0,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}
