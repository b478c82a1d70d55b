//! Route segmentation and rendering.
//!
//! A raw path is an ordered list of stations; riders care about which line to
//! board and where to change. This module splits a path into line segments,
//! preferring line continuity when parallel connections exist so no spurious
//! change is reported.

use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{MetroMap, StationIdx};

/// Determine the line taken between two consecutive stations on a path.
///
/// When several parallel connections link the pair on different lines, the
/// currently active line wins if it is among them; otherwise the first
/// connection in discovery order decides. A pair with no connection at all
/// means the path does not belong to this map and is reported as an
/// inconsistency.
pub fn line_for_hop<'a>(
    map: &'a MetroMap,
    current: StationIdx,
    next: StationIdx,
    active: Option<&str>,
) -> Result<&'a str> {
    let lines: Vec<&str> = map
        .station(current)
        .connections
        .iter()
        .filter(|connection| connection.target == next)
        .map(|connection| connection.line.as_str())
        .collect();

    if let Some(active) = active {
        if let Some(&line) = lines.iter().find(|&&line| line == active) {
            return Ok(line);
        }
    }

    lines
        .first()
        .copied()
        .ok_or_else(|| Error::InconsistentRoute {
            from: map.station(current).id.clone(),
            to: map.station(next).id.clone(),
        })
}

/// One station on a rendered route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStop {
    pub id: String,
    pub name: String,
}

/// A maximal run of consecutive stations travelled on one line. Adjacent
/// segments share the station where the change happens.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSegment {
    pub line: String,
    pub stops: Vec<RouteStop>,
}

/// Structured itinerary for a computed path, ready to serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: RouteStop,
    pub goal: RouteStop,
    /// Number of hops travelled (stations minus one).
    pub hops: usize,
    pub segments: Vec<RouteSegment>,
}

impl RouteSummary {
    /// Split a path into line segments, emitting a new segment exactly where
    /// the applicable line differs from the previously active one.
    pub fn from_path(map: &MetroMap, path: &[StationIdx]) -> Result<Self> {
        let (&first, &last) = match (path.first(), path.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::EmptyRoute),
        };

        let mut segments: Vec<RouteSegment> = Vec::new();
        let mut current: Option<RouteSegment> = None;

        for pair in path.windows(2) {
            let active = current.as_ref().map(|segment| segment.line.as_str());
            let line = line_for_hop(map, pair[0], pair[1], active)?.to_string();

            let changed = current
                .as_ref()
                .map(|segment| segment.line != line)
                .unwrap_or(true);
            if changed {
                if let Some(finished) = current.take() {
                    segments.push(finished);
                }
                current = Some(RouteSegment {
                    line,
                    stops: vec![stop(map, pair[0])],
                });
            }
            if let Some(segment) = current.as_mut() {
                segment.stops.push(stop(map, pair[1]));
            }
        }

        if let Some(finished) = current.take() {
            segments.push(finished);
        }

        Ok(Self {
            start: stop(map, first),
            goal: stop(map, last),
            hops: path.len() - 1,
            segments,
        })
    }

    /// Number of line changes along the route.
    pub fn change_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Render the itinerary as plain text with line-change markers.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} stops, {} line changes)",
            self.start.name,
            self.goal.name,
            self.hops,
            self.change_count()
        );

        for (index, segment) in self.segments.iter().enumerate() {
            if index == 0 {
                let _ = writeln!(buffer, "Start on line {}:", segment.line);
            } else {
                let _ = writeln!(buffer, "Change to line {}:", segment.line);
            }
            for stop in &segment.stops {
                let _ = writeln!(buffer, "  {} ({})", stop.name, stop.id);
            }
        }

        buffer
    }
}

fn stop(map: &MetroMap, idx: StationIdx) -> RouteStop {
    RouteStop {
        id: map.station(idx).id.clone(),
        name: map.label(idx).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_map;

    #[test]
    fn empty_path_is_rejected() {
        let map = parse_map("1 Alpha Red 2 0\n2 Beta Red 0 1\n").expect("parses");
        let error = RouteSummary::from_path(&map, &[]).expect_err("empty path");
        assert!(matches!(error, Error::EmptyRoute));
    }

    #[test]
    fn single_stop_path_has_no_segments() {
        let map = parse_map("1 Alpha Red 2 0\n2 Beta Red 0 1\n").expect("parses");
        let idx = map.station_by_id("1").unwrap();
        let summary = RouteSummary::from_path(&map, &[idx]).expect("summarises");
        assert_eq!(summary.hops, 0);
        assert!(summary.segments.is_empty());
        assert_eq!(summary.start, summary.goal);
    }

    #[test]
    fn disconnected_hop_is_an_inconsistency() {
        let map = parse_map("1 Alpha Red 2 0\n2 Beta Red 0 1\n3 Gamma Blue 0 0\n")
            .expect("parses");
        let a = map.station_by_id("1").unwrap();
        let c = map.station_by_id("3").unwrap();
        let error = line_for_hop(&map, a, c, None).expect_err("no connection");
        assert!(matches!(error, Error::InconsistentRoute { .. }));
    }
}
