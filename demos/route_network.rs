//! Small in-memory route network ranked end to end
//!
//! Run with: cargo run --example route_network

use airport_rank::{pagerank, render_top, PageRankConfig, RouteGraphBuilder, RunSummary};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building route network...");
    let mut builder = RouteGraphBuilder::new();

    let atl = builder.add_airport("ATL", "Hartsfield Jackson Atlanta Intl, United States")?;
    let ord = builder.add_airport("ORD", "Chicago Ohare Intl, United States")?;
    let lhr = builder.add_airport("LHR", "Heathrow, United Kingdom")?;
    let cdg = builder.add_airport("CDG", "Charles De Gaulle, France")?;
    let gka = builder.add_airport("GKA", "Goroka, Papua New Guinea")?; // no routes

    // Two carriers fly ATL → LHR, so that route carries weight 2
    for (src, dst) in [
        (atl, ord),
        (atl, lhr),
        (atl, lhr),
        (ord, atl),
        (ord, lhr),
        (lhr, cdg),
        (lhr, atl),
        (cdg, lhr),
    ] {
        builder.add_route(src, dst, 1.0)?;
    }

    let graph = builder.build();
    println!(
        "  Graph built: {} airports, {} unique routes, {} dangling\n",
        graph.num_nodes(),
        graph.num_edges(),
        graph.num_dangling()
    );
    assert_eq!(graph.outgoing_neighbors(gka)?.len(), 0);

    let start = Instant::now();
    let result = pagerank(&graph, &PageRankConfig::default())?;
    let summary = RunSummary::new(&result, start.elapsed());

    print!("{}", render_top(&graph, &result.ranks, 5)?);
    println!("{summary}");

    Ok(())
}
