//! Incremental construction of a [`RouteGraph`]
//!
//! The builder is the only mutable phase of a graph's life. Airports are
//! appended first, then every observed route is folded into the source
//! airport's adjacency with find-or-create aggregation:
//!
//! ```text
//! observed: A→B, A→C, A→B, A→B
//!
//! adjacency[A]: [(B, 3.0), (C, 1.0)]   // first-seen order, summed weights
//! out_weight[A]: 4.0
//! ```
//!
//! [`RouteGraphBuilder::build`] freezes the result into CSR form.

use super::csr::{Airport, RouteGraph};
use super::{GraphError, NodeId};
use std::collections::HashMap;

/// Aggregated outgoing route (one per ordered airport pair)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    /// Destination airport
    pub target: NodeId,
    /// Accumulated multiplicity of the route
    pub weight: f64,
}

/// Append-only builder for [`RouteGraph`]
///
/// # Example
///
/// ```
/// use airport_rank::RouteGraphBuilder;
///
/// let mut builder = RouteGraphBuilder::new();
/// let jfk = builder.add_airport("JFK", "John F Kennedy Intl, United States").unwrap();
/// let lhr = builder.add_airport("LHR", "Heathrow, United Kingdom").unwrap();
///
/// builder.add_route(jfk, lhr, 1.0).unwrap();
/// builder.add_route(jfk, lhr, 1.0).unwrap(); // merged, not duplicated
///
/// let graph = builder.build();
/// assert_eq!(graph.num_edges(), 1);
/// assert!((graph.out_weight(jfk).unwrap() - 2.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    airports: Vec<Airport>,
    by_code: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Route>>,
    /// Per-source lookup: target index → slot in `adjacency[source]`
    route_slots: Vec<HashMap<u32, usize>>,
    out_weights: Vec<f64>,
}

impl RouteGraphBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an airport, assigning it the next dense index
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateCode`] if `code` was already added, or
    /// [`GraphError::CapacityExceeded`] past `u32::MAX` airports.
    pub fn add_airport(
        &mut self,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<NodeId, GraphError> {
        let code = code.into();
        if self.by_code.contains_key(&code) {
            return Err(GraphError::DuplicateCode(code));
        }

        self.push_airport(code, label)
    }

    /// Append an airport even if its code is already known
    ///
    /// The new record always becomes a vertex, and the code resolves to it from
    /// now on. Earlier records with the same code stay in the graph but can no
    /// longer be reached through [`lookup`](Self::lookup).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] past `u32::MAX` airports.
    pub fn push_airport(
        &mut self,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<NodeId, GraphError> {
        let code = code.into();
        let index = u32::try_from(self.airports.len()).map_err(|_| GraphError::CapacityExceeded)?;
        let node = NodeId(index);

        self.by_code.insert(code.clone(), node);
        self.airports.push(Airport {
            index: node,
            code,
            label: label.into(),
        });
        self.adjacency.push(Vec::new());
        self.route_slots.push(HashMap::new());
        self.out_weights.push(0.0);

        Ok(node)
    }

    /// Record an observed route `src → dst` with the given increment
    ///
    /// Repeated pairs accumulate into the existing edge; a new pair is
    /// appended after the source's existing routes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfBounds`] if either endpoint has not been
    /// added, or [`GraphError::InvalidWeight`] for negative or non-finite weights.
    pub fn add_route(&mut self, src: NodeId, dst: NodeId, weight: f64) -> Result<(), GraphError> {
        self.check_bounds(src)?;
        self.check_bounds(dst)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let s = src.index();
        let routes = &mut self.adjacency[s];
        match self.route_slots[s].get(&dst.0).copied() {
            Some(slot) => routes[slot].weight += weight,
            None => {
                self.route_slots[s].insert(dst.0, routes.len());
                routes.push(Route { target: dst, weight });
            }
        }
        self.out_weights[s] += weight;

        Ok(())
    }

    /// Look up an airport by its code
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<NodeId> {
        self.by_code.get(code).copied()
    }

    /// Number of airports added so far
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.airports.len()
    }

    /// Aggregated routes of `node` in first-seen order
    #[must_use]
    pub fn routes(&self, node: NodeId) -> Option<&[Route]> {
        self.adjacency.get(node.index()).map(Vec::as_slice)
    }

    /// Freeze the builder into an immutable CSR graph
    #[must_use]
    pub fn build(self) -> RouteGraph {
        let num_edges = self.adjacency.iter().map(Vec::len).sum();

        let mut row_offsets = Vec::with_capacity(self.airports.len() + 1);
        let mut col_indices = Vec::with_capacity(num_edges);
        let mut edge_weights = Vec::with_capacity(num_edges);

        row_offsets.push(0);
        for routes in &self.adjacency {
            for route in routes {
                col_indices.push(route.target.0);
                edge_weights.push(route.weight);
            }
            row_offsets.push(col_indices.len());
        }

        RouteGraph::from_parts(
            self.airports,
            self.by_code,
            row_offsets,
            col_indices,
            edge_weights,
            self.out_weights,
        )
    }

    fn check_bounds(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() >= self.airports.len() {
            return Err(GraphError::NodeOutOfBounds {
                node: node.0,
                num_nodes: self.airports.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with(codes: &[&str]) -> (RouteGraphBuilder, Vec<NodeId>) {
        let mut builder = RouteGraphBuilder::new();
        let ids = codes
            .iter()
            .map(|code| builder.add_airport(*code, format!("{code} airport")).unwrap())
            .collect();
        (builder, ids)
    }

    #[test]
    fn test_dense_indices_in_insertion_order() {
        let (builder, ids) = builder_with(&["AAA", "BBB", "CCC"]);
        assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(builder.lookup("BBB"), Some(NodeId(1)));
        assert_eq!(builder.lookup("ZZZ"), None);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let (mut builder, _) = builder_with(&["AAA"]);
        let err = builder.add_airport("AAA", "again").unwrap_err();
        assert_eq!(err, GraphError::DuplicateCode("AAA".to_string()));
        assert_eq!(builder.num_nodes(), 1);
    }

    #[test]
    fn test_push_airport_repoints_code() {
        let (mut builder, ids) = builder_with(&["GKA", "MAG"]);
        let second = builder.push_airport("GKA", "Goroka again").unwrap();

        assert_eq!(second, NodeId(2));
        assert_eq!(builder.num_nodes(), 3);
        assert_eq!(builder.lookup("GKA"), Some(second));
        assert_eq!(builder.lookup("MAG"), Some(ids[1]));

        let graph = builder.build();
        assert_eq!(graph.airport(ids[0]).unwrap().code, "GKA");
        assert_eq!(graph.find("GKA"), Some(second));
    }

    #[test]
    fn test_repeated_pair_aggregates() {
        let (mut builder, ids) = builder_with(&["AAA", "BBB"]);
        for _ in 0..3 {
            builder.add_route(ids[0], ids[1], 1.0).unwrap();
        }

        let routes = builder.routes(ids[0]).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].target, ids[1]);
        assert!((routes[0].weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let (mut builder, ids) = builder_with(&["AAA", "BBB", "CCC", "DDD"]);
        builder.add_route(ids[0], ids[2], 1.0).unwrap();
        builder.add_route(ids[0], ids[1], 1.0).unwrap();
        builder.add_route(ids[0], ids[2], 1.0).unwrap();
        builder.add_route(ids[0], ids[3], 1.0).unwrap();

        let targets: Vec<_> = builder
            .routes(ids[0])
            .unwrap()
            .iter()
            .map(|r| r.target)
            .collect();
        assert_eq!(targets, vec![ids[2], ids[1], ids[3]]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let (mut builder, ids) = builder_with(&["AAA"]);
        let err = builder.add_route(ids[0], NodeId(7), 1.0).unwrap_err();
        assert_eq!(
            err,
            GraphError::NodeOutOfBounds {
                node: 7,
                num_nodes: 1
            }
        );
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let (mut builder, ids) = builder_with(&["AAA", "BBB"]);
        assert!(builder.add_route(ids[0], ids[1], -1.0).is_err());
        assert!(builder.add_route(ids[0], ids[1], f64::NAN).is_err());
        assert!(builder.routes(ids[0]).unwrap().is_empty());
    }

    #[test]
    fn test_build_csr_layout() {
        let (mut builder, ids) = builder_with(&["AAA", "BBB", "CCC"]);
        builder.add_route(ids[0], ids[1], 1.0).unwrap();
        builder.add_route(ids[0], ids[2], 1.0).unwrap();
        builder.add_route(ids[1], ids[2], 1.0).unwrap();
        builder.add_route(ids[0], ids[1], 1.0).unwrap();

        let graph = builder.build();
        let (row_offsets, col_indices, weights) = graph.csr_components();

        assert_eq!(row_offsets, &[0, 2, 3, 3]);
        assert_eq!(col_indices, &[1, 2, 2]);
        assert_eq!(weights, &[2.0, 1.0, 1.0]);
        assert_eq!(graph.out_weights(), &[3.0, 1.0, 0.0]);
    }
}
