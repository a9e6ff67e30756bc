//! airport-rank: `PageRank` over airport route networks
//!
//! # Overview
//!
//! Airports are vertices, observed routes are weighted directed edges. Repeated
//! observations of the same ordered pair merge into one edge whose weight counts
//! them. A damped power iteration with dangling-mass redistribution ranks every
//! airport.
//!
//! # Quick Start
//!
//! ```
//! use airport_rank::{pagerank, rank_order, PageRankConfig, RouteGraphBuilder};
//!
//! let mut builder = RouteGraphBuilder::new();
//! let x = builder.add_airport("XXX", "X").unwrap();
//! let y = builder.add_airport("YYY", "Y").unwrap();
//! let z = builder.add_airport("ZZZ", "Z").unwrap();
//! builder.add_route(x, y, 1.0).unwrap();
//! builder.add_route(x, z, 1.0).unwrap();
//! builder.add_route(y, z, 1.0).unwrap();
//! builder.add_route(z, x, 1.0).unwrap();
//! let graph = builder.build();
//!
//! let result = pagerank(&graph, &PageRankConfig::default()).unwrap();
//! assert!(result.converged);
//! assert_eq!(rank_order(&result.ranks), vec![2, 0, 1]); // Z, X, Y
//! ```
//!
//! # Architecture
//!
//! - **Storage**: append-only builder with find-or-create route aggregation,
//!   frozen into CSR (Compressed Sparse Row) form
//! - **Algorithms**: weighted `PageRank` power iteration with renormalization
//! - **Loader**: OpenFlights-style airports/routes files, bad records counted and skipped
//! - **Report**: rank-ordered text report and console summary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod loader;
pub mod report;
pub mod storage;

// Re-export core types
pub use algorithms::{pagerank, rank_order, PageRankConfig, PageRankError, PageRankResult};
pub use config::{run, RunConfig, RunOutcome};
pub use loader::{load_graph, LoadStats, LoadedGraph};
pub use report::{ranked_airports, render_report, render_top, write_report, RankedAirport, RunSummary};
pub use storage::{Airport, GraphError, NodeId, Route, RouteGraph, RouteGraphBuilder};

// Error type
pub use anyhow::{Error, Result};
