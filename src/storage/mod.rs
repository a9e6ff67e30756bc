//! Graph storage layer
//!
//! Provides the append-only route builder and the frozen CSR route graph.

pub mod builder;
pub mod csr;

pub use builder::{Route, RouteGraphBuilder};
pub use csr::{Airport, RouteGraph};

use thiserror::Error;

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of this node in per-node arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Graph construction and lookup errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Airport code added twice
    #[error("Duplicate airport code: {0}")]
    DuplicateCode(String),

    /// Node index past the end of the airport list
    #[error("Node ID {node} out of bounds (graph has {num_nodes} nodes)")]
    NodeOutOfBounds {
        /// Offending index
        node: u32,
        /// Number of airports in the graph
        num_nodes: usize,
    },

    /// Route weight negative or not finite
    #[error("Invalid route weight: {0}")]
    InvalidWeight(f64),

    /// More airports than `NodeId` can address
    #[error("Graph exceeds {} airports", u32::MAX)]
    CapacityExceeded,
}
