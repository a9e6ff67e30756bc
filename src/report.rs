//! Rank report rendering
//!
//! One line per airport, descending by rank (ties by ascending index):
//!
//! ```text
//! 0.010123456789\tHartsfield Jackson Atlanta Intl, United States
//! 0.009876543210\tChicago Ohare Intl, United States
//! ```

use crate::algorithms::{rank_order, PageRankResult};
use crate::storage::{NodeId, RouteGraph};
use anyhow::{ensure, Context, Result};
use std::fmt::{self, Write as _};
use std::path::Path;
use std::time::Duration;

/// Default number of entries in the console summary
pub const DEFAULT_TOP: usize = 10;

/// One airport in report order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedAirport<'a> {
    /// 1-based position in the report
    pub position: usize,
    /// Airport index
    pub node: NodeId,
    /// Final rank
    pub rank: f64,
    /// Display label
    pub label: &'a str,
}

/// Pair every airport with its rank, in report order
///
/// # Errors
///
/// Returns error if `ranks` is not parallel to the graph's airports
#[allow(clippy::cast_possible_truncation)] // index < num_nodes <= u32::MAX
pub fn ranked_airports<'a>(graph: &'a RouteGraph, ranks: &[f64]) -> Result<Vec<RankedAirport<'a>>> {
    ensure!(
        ranks.len() == graph.num_nodes(),
        "rank vector has {} entries but graph has {} airports",
        ranks.len(),
        graph.num_nodes()
    );

    let airports = graph.airports();
    Ok(rank_order(ranks)
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| RankedAirport {
            position: pos + 1,
            node: NodeId(idx as u32),
            rank: ranks[idx],
            label: &airports[idx].label,
        })
        .collect())
}

/// Render the full report text
///
/// # Errors
///
/// Returns error if `ranks` is not parallel to the graph's airports
pub fn render_report(graph: &RouteGraph, ranks: &[f64]) -> Result<String> {
    let mut out = String::new();
    for entry in ranked_airports(graph, ranks)? {
        writeln!(out, "{:.12}\t{}", entry.rank, entry.label)?;
    }
    Ok(out)
}

/// Write the report to `path`, returning the number of lines written
///
/// # Errors
///
/// Returns error if the file cannot be written
pub async fn write_report<P: AsRef<Path>>(path: P, graph: &RouteGraph, ranks: &[f64]) -> Result<usize> {
    let path = path.as_ref();
    let text = render_report(graph, ranks)?;
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(ranks.len())
}

/// Render the `top` highest ranked airports
///
/// # Errors
///
/// Returns error if `ranks` is not parallel to the graph's airports
pub fn render_top(graph: &RouteGraph, ranks: &[f64], top: usize) -> Result<String> {
    let mut out = format!("Top-{top}:\n");
    for entry in ranked_airports(graph, ranks)?.into_iter().take(top) {
        writeln!(out, "{:2}. {:.8}  {}", entry.position, entry.rank, entry.label)?;
    }
    Ok(out)
}

/// Closing console summary of a ranking run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Iterations performed
    pub iterations: usize,
    /// Whether the run converged before the cap
    pub converged: bool,
    /// Wall time of the ranking phase
    pub elapsed: Duration,
    /// Sum of the final ranks
    pub rank_sum: f64,
}

impl RunSummary {
    /// Summarize a ranking result
    #[must_use]
    pub fn new(result: &PageRankResult, elapsed: Duration) -> Self {
        Self {
            iterations: result.iterations,
            converged: result.converged,
            elapsed,
            rank_sum: result.rank_sum,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.converged { "" } else { " (iteration cap reached)" };
        writeln!(f, "#Iterations: {}{status}", self.iterations)?;
        writeln!(f, "Time of ranking: {:.6}s", self.elapsed.as_secs_f64())?;
        write!(f, "Sum of ranks: {:.12}", self.rank_sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RouteGraphBuilder;
    use tempfile::tempdir;

    fn three_airports() -> RouteGraph {
        let mut builder = RouteGraphBuilder::new();
        builder.add_airport("AAA", "Alpha, Land").unwrap();
        builder.add_airport("BBB", "Beta, Land").unwrap();
        builder.add_airport("CCC", "Gamma, Land").unwrap();
        builder.build()
    }

    #[test]
    fn test_report_order_and_format() {
        let graph = three_airports();
        let ranks = [0.25, 0.5, 0.25];

        let text = render_report(&graph, &ranks).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "0.500000000000\tBeta, Land",
                "0.250000000000\tAlpha, Land",
                "0.250000000000\tGamma, Land",
            ]
        );
    }

    #[test]
    fn test_report_rejects_mismatched_ranks() {
        let graph = three_airports();
        assert!(render_report(&graph, &[1.0]).is_err());
    }

    #[test]
    fn test_report_empty_graph() {
        let graph = RouteGraph::new();
        assert_eq!(render_report(&graph, &[]).unwrap(), "");
    }

    #[test]
    fn test_render_top_truncates() {
        let graph = three_airports();
        let text = render_top(&graph, &[0.2, 0.3, 0.5], 2).unwrap();

        assert_eq!(
            text,
            "Top-2:\n 1. 0.50000000  Gamma, Land\n 2. 0.30000000  Beta, Land\n"
        );
    }

    #[test]
    fn test_run_summary_display() {
        let summary = RunSummary {
            iterations: 42,
            converged: true,
            elapsed: Duration::from_millis(1500),
            rank_sum: 1.0,
        };
        assert_eq!(
            summary.to_string(),
            "#Iterations: 42\nTime of ranking: 1.500000s\nSum of ranks: 1.000000000000"
        );
    }

    #[tokio::test]
    async fn test_write_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pagerank_airports.txt");
        let graph = three_airports();

        let written = write_report(&path, &graph, &[0.2, 0.3, 0.5]).await.unwrap();

        assert_eq!(written, 3);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("0.500000000000\tGamma, Land\n"));
    }
}
