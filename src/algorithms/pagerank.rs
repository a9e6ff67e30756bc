//! Weighted `PageRank` via damped power iteration
//!
//! Based on Page et al. (1999) "The `PageRank` Citation Ranking: Bringing Order to the Web".
//! Rank mass flows along routes in proportion to route weight. Mass sitting on
//! dangling airports (no outgoing routes) is spread uniformly each iteration,
//! and the iterate is renormalized so floating-point drift never accumulates.

use crate::storage::RouteGraph;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Damping factor for `PageRank` (Google standard)
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default L1 convergence bound
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Progress is logged on the first iteration and every `PROGRESS_EVERY` after
const PROGRESS_EVERY: usize = 10;

/// Invalid ranker configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageRankError {
    /// Damping outside the open interval (0, 1)
    #[error("Damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// Tolerance negative or not finite
    #[error("Tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// Zero iteration cap
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
}

/// Power-iteration parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following a route rather than teleporting
    pub damping: f64,
    /// Stop once the L1 change between iterates drops below this
    pub tolerance: f64,
    /// Hard cap on iterations
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRankConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`PageRankError`] describing the first out-of-range parameter.
    pub fn validate(&self) -> Result<(), PageRankError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(PageRankError::InvalidDamping(self.damping));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PageRankError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(PageRankError::ZeroIterations);
        }
        Ok(())
    }
}

/// Outcome of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Final rank per airport, indexed by `NodeId`
    pub ranks: Vec<f64>,
    /// Iterations actually performed (0 for an empty graph)
    pub iterations: usize,
    /// Whether the L1 change fell below the tolerance
    pub converged: bool,
    /// L1 change of the last iteration (0.0 if none ran)
    pub last_delta: f64,
    /// Dangling mass observed at the start of the last iteration
    pub dangling_mass: f64,
    /// Sum of the final ranks (≈1.0)
    pub rank_sum: f64,
}

/// Compute weighted `PageRank` scores for all airports
///
/// # Algorithm
///
/// ```text
/// base     = (1-d)/N + d * dangling_mass / N
/// PR'(u)   = base + d * Σ PR(v) * w(v,u) / out_weight(v)
/// PR'      = PR' / Σ PR'
/// ```
///
/// Iteration stops when `Σ |PR' - PR| < tolerance` or after `max_iterations`.
/// Hitting the cap is not an error: the result carries `converged = false`
/// and the ranks of the final iteration.
///
/// # Errors
///
/// Returns [`PageRankError`] if the configuration is out of range.
///
/// # Example
///
/// ```
/// use airport_rank::{pagerank, NodeId, PageRankConfig, RouteGraph};
///
/// let edges = vec![
///     (NodeId(0), NodeId(1), 1.0),
///     (NodeId(1), NodeId(2), 1.0),
///     (NodeId(2), NodeId(0), 1.0), // Cycle
/// ];
/// let graph = RouteGraph::from_edge_list(3, &edges).unwrap();
///
/// let result = pagerank(&graph, &PageRankConfig::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.ranks.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[allow(clippy::cast_precision_loss)] // Graphs >2^52 nodes unlikely
pub fn pagerank(graph: &RouteGraph, config: &PageRankConfig) -> Result<PageRankResult, PageRankError> {
    config.validate()?;

    let n = graph.num_nodes();
    if n == 0 {
        return Ok(PageRankResult {
            ranks: Vec::new(),
            iterations: 0,
            converged: true,
            last_delta: 0.0,
            dangling_mass: 0.0,
            rank_sum: 0.0,
        });
    }

    let n_f64 = n as f64;
    let damping = config.damping;
    let (row_offsets, col_indices, edge_weights) = graph.csr_components();
    let out_weights = graph.out_weights();

    // Initialize: uniform distribution
    let mut ranks = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];

    let mut last_delta = 0.0;
    let mut dangling_mass = 0.0;

    for iteration in 1..=config.max_iterations {
        dangling_mass = ranks
            .iter()
            .zip(out_weights)
            .filter(|(_, &w)| w == 0.0)
            .map(|(r, _)| r)
            .sum();

        let base = (1.0 - damping) / n_f64 + damping * dangling_mass / n_f64;
        next.fill(base);

        // Distribute rank from each airport along its routes
        for node in 0..n {
            let out_weight = out_weights[node];
            if out_weight == 0.0 {
                continue;
            }
            let scale = damping * ranks[node] / out_weight;
            let (start, end) = (row_offsets[node], row_offsets[node + 1]);
            for (&target, &weight) in col_indices[start..end].iter().zip(&edge_weights[start..end]) {
                next[target as usize] += scale * weight;
            }
        }

        normalize(&mut next);

        let delta = l1_distance(&next, &ranks);
        std::mem::swap(&mut ranks, &mut next);
        last_delta = delta;

        if iteration == 1 || iteration % PROGRESS_EVERY == 0 {
            let sum: f64 = ranks.iter().sum();
            debug!("iter={iteration:3}  delta={delta:.3e}  sum={sum:.12}  dangling_mass={dangling_mass:.6}");
        }

        if delta < config.tolerance {
            let rank_sum: f64 = ranks.iter().sum();
            info!("Converged at iter={iteration}  delta={delta:.3e}  sum={rank_sum:.12}");
            return Ok(PageRankResult {
                ranks,
                iterations: iteration,
                converged: true,
                last_delta,
                dangling_mass,
                rank_sum,
            });
        }
    }

    let rank_sum: f64 = ranks.iter().sum();
    warn!(
        "Stopped at max_iter={}  last_delta={last_delta:.3e}  sum={rank_sum:.12}",
        config.max_iterations
    );

    Ok(PageRankResult {
        ranks,
        iterations: config.max_iterations,
        converged: false,
        last_delta,
        dangling_mass,
        rank_sum,
    })
}

/// Node indices ordered by descending rank, ties by ascending index
///
/// Deterministic for identical input: the sort is stable over index order and
/// uses a total order on `f64`.
#[must_use]
pub fn rank_order(ranks: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by(|&a, &b| match ranks[b].total_cmp(&ranks[a]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    order
}

/// Scale `values` to sum to 1.0; left untouched if the sum is zero
fn normalize(values: &mut [f64]) {
    let total: f64 = values.iter().sum();
    if total != 0.0 {
        for v in values.iter_mut() {
            *v /= total;
        }
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
