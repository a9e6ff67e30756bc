//! Airport records (OpenFlights `airports.dat` layout)
//!
//! ```text
//! 1,"Goroka","Goroka","Papua New Guinea","GKA","AYGA",-6.08,145.39,5282,10,"U","Pacific/Port_Moresby"
//!    ^name             ^country           ^IATA code
//! ```
//!
//! Fields are split on every comma. A record becomes a vertex only if field 4
//! is exactly five characters wide (a three-letter code plus its enclosing
//! quotes); anything else (`\N`, short lines, names that contain commas and
//! shift the columns) is skipped. The outer two characters are dropped without
//! checking that they are quotes.

use super::{unquote, LoadStats};
use crate::storage::RouteGraphBuilder;

const NAME_FIELD: usize = 1;
const COUNTRY_FIELD: usize = 3;
const CODE_FIELD: usize = 4;

/// Width of the code field: `"XXX"`
const CODE_FIELD_LEN: usize = 5;

/// A parsed airport record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    /// IATA code without quotes
    pub code: String,
    /// `"<name>, <country>"`
    pub label: String,
}

/// Parse a single airport line, `None` if it does not carry an IATA code
#[must_use]
pub fn parse_airport_line(line: &str) -> Option<AirportRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() <= CODE_FIELD {
        return None;
    }

    let raw_code = fields[CODE_FIELD];
    if raw_code.chars().count() != CODE_FIELD_LEN {
        return None;
    }

    Some(AirportRecord {
        code: raw_code.chars().skip(1).take(CODE_FIELD_LEN - 2).collect(),
        label: format!(
            "{}, {}",
            unquote(fields[NAME_FIELD]),
            unquote(fields[COUNTRY_FIELD])
        ),
    })
}

/// Add every valid airport in `text` to the builder
///
/// Every valid record becomes a vertex, with dense indices in read order. A
/// code seen again is counted as a duplicate and from then on resolves to the
/// most recent record.
pub fn parse_airports(text: &str, builder: &mut RouteGraphBuilder) -> LoadStats {
    let mut stats = LoadStats::default();

    for line in text.lines() {
        stats.total += 1;
        let Some(record) = parse_airport_line(line) else {
            stats.malformed += 1;
            continue;
        };

        let repeated = builder.lookup(&record.code).is_some();
        if builder.push_airport(record.code, record.label).is_err() {
            stats.malformed += 1;
            continue;
        }

        stats.accepted += 1;
        if repeated {
            stats.duplicate += 1;
        }
    }

    stats
}
