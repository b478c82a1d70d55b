//! Parser for the line-oriented metro map description format.
//!
//! Each non-blank line declares one station:
//!
//! ```text
//! 20 NorthStation Green 19 22 Orange 15 22
//! ```
//!
//! where `20` is the station identifier, `NorthStation` its display name, and
//! each following `lineName outbound inbound` triple declares up to two
//! directed connections from the station, both labelled with the line name.
//! A target of `0` means there is no station in that direction and produces
//! neither a connection nor a placeholder.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{MetroMap, StationIdx};

/// Sentinel identifier marking the end of a line in one direction.
const END_OF_LINE: &str = "0";

/// Read a map description from a file and parse it.
pub fn load_map(path: &Path) -> Result<MetroMap> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading metro map");
    parse_map(&text)
}

/// Parse the full text of a map description into a [`MetroMap`].
///
/// Stations may be referenced before their own declaration line; such forward
/// references create placeholder records that are completed in place once the
/// declaration is reached. Any malformed line aborts the parse with a
/// structured error and no partial map is returned.
pub fn parse_map(text: &str) -> Result<MetroMap> {
    let mut map = MetroMap::default();

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let mut tokens = raw.split_whitespace().peekable();

        // Blank lines are skipped silently.
        let Some(station_id) = tokens.next() else {
            continue;
        };

        let station_name = tokens
            .next()
            .ok_or(Error::MissingStationName { line })?;

        if tokens.peek().is_none() {
            return Err(Error::MissingLineInfo {
                line,
                id: station_id.to_string(),
            });
        }

        let origin = map.get_or_create(station_id);
        map.set_name(origin, station_name);

        while let Some(rail_line) = tokens.next() {
            let outbound = tokens.next().ok_or_else(|| Error::MissingOutbound {
                line,
                id: station_id.to_string(),
                rail_line: rail_line.to_string(),
            })?;
            attach(&mut map, origin, rail_line, outbound);

            let inbound = tokens.next().ok_or_else(|| Error::MissingInbound {
                line,
                id: station_id.to_string(),
                rail_line: rail_line.to_string(),
            })?;
            attach(&mut map, origin, rail_line, inbound);
        }
    }

    for station in map.stations() {
        if station.is_placeholder() {
            // Inherited format risk: the identifier was referenced but never
            // declared, so the station has no display name.
            warn!(id = %station.id, "station referenced but never declared");
        }
    }
    debug!(
        stations = map.len(),
        connections = map.connection_count(),
        "parsed metro map"
    );

    Ok(map)
}

/// Attach one directed connection, creating a placeholder for the target when
/// its declaration has not been seen yet. The `0` sentinel attaches nothing.
fn attach(map: &mut MetroMap, origin: StationIdx, rail_line: &str, target_id: &str) {
    if target_id == END_OF_LINE {
        return;
    }
    let target = map.get_or_create(target_id);
    map.add_connection(origin, target, rail_line);
}
