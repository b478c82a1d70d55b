//! Metro map routing library.
//!
//! This crate parses a line-oriented text description of a subway network
//! into an in-memory graph, and answers shortest-route queries between named
//! stations using a cost-based search with per-line edge weights. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod output;
pub mod parser;
pub mod routing;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Connection, MetroMap, Station, StationCandidate, StationIdx};
pub use output::{line_for_hop, RouteSegment, RouteStop, RouteSummary};
pub use parser::{load_map, parse_map};
pub use routing::{plan_route, RoutePlan, RouteRequest, StationRef};
pub use search::{find_route, line_weights};
