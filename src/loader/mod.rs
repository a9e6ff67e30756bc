//! Flat-file loaders for airports and routes
//!
//! Reads the two delimited inputs into a [`RouteGraphBuilder`] and freezes the
//! result. Bad records never abort a load; they are counted in [`LoadStats`].
//! Failing to open a file is fatal and reported with the offending path.

pub mod airports;
pub mod routes;

pub use airports::{parse_airport_line, parse_airports, AirportRecord};
pub use routes::{parse_route_line, parse_routes};

use crate::storage::{RouteGraph, RouteGraphBuilder};
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Per-file record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read
    pub total: usize,
    /// Lines that produced a vertex or route
    pub accepted: usize,
    /// Lines with too few fields or a bad code
    pub malformed: usize,
    /// Route lines naming an airport that was not loaded
    pub unknown_code: usize,
    /// Accepted airport lines repeating an already loaded code (the code now
    /// resolves to the later record)
    pub duplicate: usize,
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} accepted ({} malformed, {} unknown code, {} duplicate)",
            self.accepted, self.total, self.malformed, self.unknown_code, self.duplicate
        )
    }
}

/// A frozen graph together with the load counts that produced it
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    /// The route graph
    pub graph: RouteGraph,
    /// Airports file counts
    pub airports: LoadStats,
    /// Routes file counts
    pub routes: LoadStats,
}

impl LoadedGraph {
    /// One line per input file with its record counts
    #[must_use]
    pub fn load_summary(&self) -> String {
        format!("Airports: {}\nRoutes: {}", self.airports, self.routes)
    }
}

/// Read the airports file into `builder`
///
/// # Errors
///
/// Returns error if the file cannot be read
pub async fn read_airports<P: AsRef<Path>>(
    path: P,
    builder: &mut RouteGraphBuilder,
) -> Result<LoadStats> {
    let path = path.as_ref();
    info!("Reading Airport file from {}", path.display());

    let text = read_text(path).await?;
    let stats = parse_airports(&text, builder);

    info!("There were {} Airports with IATA code", stats.accepted);
    info!("Airport records: {stats}");
    Ok(stats)
}

/// Read the routes file into `builder`
///
/// # Errors
///
/// Returns error if the file cannot be read
pub async fn read_routes<P: AsRef<Path>>(
    path: P,
    builder: &mut RouteGraphBuilder,
) -> Result<LoadStats> {
    let path = path.as_ref();
    info!("Reading Routes file from {}", path.display());

    let text = read_text(path).await?;
    let stats = parse_routes(&text, builder);

    info!("Route records: {stats}");
    Ok(stats)
}

/// Load both files and freeze the graph
///
/// # Errors
///
/// Returns error if either file cannot be read
pub async fn load_graph<P: AsRef<Path>, Q: AsRef<Path>>(
    airports_path: P,
    routes_path: Q,
) -> Result<LoadedGraph> {
    let mut builder = RouteGraphBuilder::new();
    let airports = read_airports(airports_path, &mut builder).await?;
    let routes = read_routes(routes_path, &mut builder).await?;

    let graph = builder.build();
    info!(
        "Vertices: {}, unique edges: {}, dangling: {}",
        graph.num_nodes(),
        graph.num_edges(),
        graph.num_dangling()
    );

    Ok(LoadedGraph {
        graph,
        airports,
        routes,
    })
}

async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Strip one pair of surrounding double quotes, if present
pub(crate) fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(field)
}
