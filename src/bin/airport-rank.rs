//! Rank airports by `PageRank` over their route network
//!
//! Run with: cargo run --release -- --airports data/airports.txt --routes data/routes.txt

use airport_rank::algorithms::pagerank::{
    DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use airport_rank::config::{DEFAULT_AIRPORTS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_ROUTES_PATH};
use airport_rank::report::DEFAULT_TOP;
use airport_rank::{render_top, run, PageRankConfig, RunConfig};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "airport-rank", version, about = "PageRank over airport route networks")]
struct Cli {
    /// Airports file (OpenFlights airports.dat layout)
    #[arg(long, default_value = DEFAULT_AIRPORTS_PATH)]
    airports: PathBuf,

    /// Routes file (OpenFlights routes.dat layout)
    #[arg(long, default_value = DEFAULT_ROUTES_PATH)]
    routes: PathBuf,

    /// Report output file
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Damping factor, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// L1 convergence tolerance
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration cap
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Entries shown in the console summary
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            airports_path: cli.airports,
            routes_path: cli.routes,
            output_path: cli.output,
            pagerank: PageRankConfig {
                damping: cli.damping,
                tolerance: cli.tolerance,
                max_iterations: cli.max_iterations,
            },
            top: cli.top,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RunConfig::from(Cli::parse());
    let outcome = run(&config).await?;

    println!("{}", outcome.loaded.load_summary());

    print!(
        "{}",
        render_top(&outcome.loaded.graph, &outcome.result.ranks, config.top)?
    );
    println!("{}", outcome.summary);

    Ok(())
}
