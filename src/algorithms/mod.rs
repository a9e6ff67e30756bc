//! Graph algorithms
//!
//! Weighted `PageRank` over the frozen route graph, plus the deterministic
//! ordering used by reports.

pub mod pagerank;

pub use pagerank::{pagerank, rank_order, PageRankConfig, PageRankError, PageRankResult};
