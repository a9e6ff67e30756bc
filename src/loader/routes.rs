//! Route records (OpenFlights `routes.dat` layout)
//!
//! ```text
//! 2B,410,AER,2965,KZN,2990,,0,CR2
//!        ^src     ^dst
//! ```
//!
//! Every accepted record adds weight 1 to the aggregated `src → dst` edge.

use super::LoadStats;
use crate::storage::{NodeId, RouteGraphBuilder};

const SRC_FIELD: usize = 2;
const DST_FIELD: usize = 4;
const MIN_FIELDS: usize = 6;
const CODE_LEN: usize = 3;

/// Weight added per observed route record
const ROUTE_INCREMENT: f64 = 1.0;

/// Extract the (source, destination) codes of a route line
///
/// Codes are trimmed and upper-cased. `None` for lines with too few fields or
/// codes that are not exactly three characters.
#[must_use]
pub fn parse_route_line(line: &str) -> Option<(String, String)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let src = fields[SRC_FIELD].trim().to_uppercase();
    let dst = fields[DST_FIELD].trim().to_uppercase();
    if src.chars().count() != CODE_LEN || dst.chars().count() != CODE_LEN {
        return None;
    }

    Some((src, dst))
}

/// Fold every valid route in `text` into the builder
///
/// Malformed lines and lines naming unknown airports are skipped and counted.
pub fn parse_routes(text: &str, builder: &mut RouteGraphBuilder) -> LoadStats {
    let mut stats = LoadStats::default();

    for line in text.lines() {
        stats.total += 1;
        let Some((src, dst)) = parse_route_line(line) else {
            stats.malformed += 1;
            continue;
        };

        let endpoints: Option<(NodeId, NodeId)> = builder.lookup(&src).zip(builder.lookup(&dst));
        let Some((src, dst)) = endpoints else {
            stats.unknown_code += 1;
            continue;
        };

        if builder.add_route(src, dst, ROUTE_INCREMENT).is_err() {
            stats.malformed += 1;
            continue;
        }
        stats.accepted += 1;
    }

    stats
}
