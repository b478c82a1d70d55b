//! High-level route planning.
//!
//! This module ties name resolution, search, and segmentation together:
//! - [`RouteRequest`] - a source/destination pair by name or identifier
//! - [`RoutePlan`] - the computed path plus its line segments
//! - [`plan_route`] - main entry point for computing routes
//!
//! Endpoints given by display name are resolved case-insensitively; an
//! unknown name fails with fuzzy suggestions, and a name shared by several
//! stations fails with the full candidate list so the caller can retry by
//! identifier.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{MetroMap, StationIdx};
use crate::output::{RouteSegment, RouteSummary};
use crate::search::find_route;

/// How a route endpoint is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationRef {
    /// Case-insensitive display name.
    Name(String),
    /// Exact station identifier, for disambiguating shared names.
    Id(String),
}

impl StationRef {
    fn display(&self) -> &str {
        match self {
            StationRef::Name(name) => name,
            StationRef::Id(id) => id,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: StationRef,
    pub to: StationRef,
}

impl RouteRequest {
    /// Convenience constructor addressing both endpoints by name.
    pub fn by_name(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: StationRef::Name(from.into()),
            to: StationRef::Name(to.into()),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoutePlan {
    pub start: StationIdx,
    pub goal: StationIdx,
    pub steps: Vec<StationIdx>,
    pub segments: Vec<RouteSegment>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Number of line changes along the route.
    pub fn change_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

/// Compute a route between the requested endpoints.
///
/// Resolves both endpoints, runs the weighted uniform-cost search, and
/// segments the resulting path at line changes.
pub fn plan_route(map: &MetroMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_station(map, &request.from)?;
    let goal = resolve_station(map, &request.to)?;

    let steps = find_route(map, start, goal).ok_or_else(|| Error::RouteNotFound {
        start: request.from.display().to_string(),
        goal: request.to.display().to_string(),
    })?;

    let summary = RouteSummary::from_path(map, &steps)?;

    Ok(RoutePlan {
        start,
        goal,
        steps,
        segments: summary.segments,
    })
}

/// Resolve an endpoint reference to a station index.
fn resolve_station(map: &MetroMap, reference: &StationRef) -> Result<StationIdx> {
    match reference {
        StationRef::Id(id) => map.station_by_id(id).ok_or_else(|| Error::UnknownStation {
            name: id.clone(),
            suggestions: Vec::new(),
        }),
        StationRef::Name(name) => {
            let matches = map.stations_by_name(name);
            match matches.as_slice() {
                [] => Err(Error::UnknownStation {
                    name: name.clone(),
                    suggestions: map.fuzzy_station_matches(name, 3),
                }),
                [only] => Ok(*only),
                _ => Err(Error::AmbiguousStation {
                    name: name.clone(),
                    candidates: map.station_candidates(name),
                }),
            }
        }
    }
}
