//! Run configuration and the end-to-end ranking pipeline

use crate::algorithms::{pagerank, PageRankConfig, PageRankResult};
use crate::loader::{load_graph, LoadedGraph};
use crate::report::{write_report, RunSummary, DEFAULT_TOP};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Default airports input
pub const DEFAULT_AIRPORTS_PATH: &str = "data/airports.txt";
/// Default routes input
pub const DEFAULT_ROUTES_PATH: &str = "data/routes.txt";
/// Default report output
pub const DEFAULT_OUTPUT_PATH: &str = "pagerank_airports.txt";

/// Everything a ranking run needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Airports file
    pub airports_path: PathBuf,
    /// Routes file
    pub routes_path: PathBuf,
    /// Report file
    pub output_path: PathBuf,
    /// Power-iteration parameters
    pub pagerank: PageRankConfig,
    /// Entries in the console summary
    pub top: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            airports_path: PathBuf::from(DEFAULT_AIRPORTS_PATH),
            routes_path: PathBuf::from(DEFAULT_ROUTES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pagerank: PageRankConfig::default(),
            top: DEFAULT_TOP,
        }
    }
}

/// Output of [`run`]
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Graph and load counts
    pub loaded: LoadedGraph,
    /// Ranks and convergence data
    pub result: PageRankResult,
    /// Console summary
    pub summary: RunSummary,
}

/// Load, rank and write the report
///
/// Only the ranking phase is timed.
///
/// # Errors
///
/// Returns error if an input cannot be read, the ranker configuration is
/// invalid, or the report cannot be written
pub async fn run(config: &RunConfig) -> Result<RunOutcome> {
    config.pagerank.validate().context("Invalid PageRank configuration")?;

    let loaded = load_graph(&config.airports_path, &config.routes_path).await?;

    let start = Instant::now();
    let result = pagerank(&loaded.graph, &config.pagerank)?;
    let summary = RunSummary::new(&result, start.elapsed());

    let lines = write_report(&config.output_path, &loaded.graph, &result.ranks).await?;
    info!("Wrote {lines} ranks to {}", config.output_path.display());

    Ok(RunOutcome {
        loaded,
        result,
        summary,
    })
}
