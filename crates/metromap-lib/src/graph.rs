use std::collections::HashMap;

use serde::Serialize;

/// Minimum normalized similarity before a station name is offered as a
/// "did you mean" suggestion. Below this the candidates are noise.
const FUZZY_MATCH_THRESHOLD: f64 = 0.5;

/// Index of a station within the map's arena. Stable for the lifetime of the
/// map because stations are never removed once created.
pub type StationIdx = usize;

/// Directed, line-labelled link from one station to another.
///
/// The reverse direction is always its own record on the target station;
/// a connection here says nothing about travel the other way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub target: StationIdx,
    pub line: String,
}

/// A point in the network, uniquely identified by the string token from the
/// map file.
///
/// A station referenced before its own declaration starts life as a
/// placeholder with an empty display name; the parser completes it in place
/// when the declaration is reached, so connections pointing at it stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Outbound connections in discovery order.
    pub connections: Vec<Connection>,
}

impl Station {
    /// Whether this station was referenced but never declared with a name.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    /// Distinct line labels this station sits on, in discovery order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = Vec::new();
        for connection in &self.connections {
            if !lines.contains(&connection.line.as_str()) {
                lines.push(&connection.line);
            }
        }
        lines
    }
}

/// Lookup result for a display name shared by several stations. Carries the
/// name of the first connected neighbour so a caller can tell the candidates
/// apart without interactive prompting.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StationCandidate {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacent: Option<String>,
}

/// The parsed metro network.
///
/// Stations live in an arena in first-seen order and are addressed by
/// [`StationIdx`]; the identifier index gives idempotent get-or-create
/// semantics during parsing. The map is read-only after parsing: all
/// per-query search state is owned by the search call, so a shared
/// `&MetroMap` can serve repeated queries safely.
#[derive(Debug, Clone, Default)]
pub struct MetroMap {
    stations: Vec<Station>,
    index: HashMap<String, StationIdx>,
}

impl MetroMap {
    /// Return the station for an arena index.
    ///
    /// # Panics
    ///
    /// Panics if the index did not come from this map.
    pub fn station(&self, idx: StationIdx) -> &Station {
        &self.stations[idx]
    }

    /// Lookup a station index by its exact identifier.
    pub fn station_by_id(&self, id: &str) -> Option<StationIdx> {
        self.index.get(id).copied()
    }

    /// All stations in first-seen order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations in the map, placeholders included.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Enumerate every connection in the map as `(origin, connection)` pairs,
    /// in station order and then discovery order within each station.
    pub fn connections(&self) -> impl Iterator<Item = (StationIdx, &Connection)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .flat_map(|(idx, station)| station.connections.iter().map(move |c| (idx, c)))
    }

    /// Total number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.stations.iter().map(|s| s.connections.len()).sum()
    }

    /// Display label for a station, falling back to the identifier for
    /// placeholders that were never declared.
    pub fn label(&self, idx: StationIdx) -> &str {
        let station = &self.stations[idx];
        if station.name.is_empty() {
            &station.id
        } else {
            &station.name
        }
    }

    /// Stations whose display name matches case-insensitively, in
    /// first-seen order. Several stations may legitimately share a name.
    pub fn stations_by_name(&self, name: &str) -> Vec<StationIdx> {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, station)| station.name.eq_ignore_ascii_case(name))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Disambiguation context for every station matching a display name.
    pub fn station_candidates(&self, name: &str) -> Vec<StationCandidate> {
        self.stations_by_name(name)
            .into_iter()
            .map(|idx| {
                let station = &self.stations[idx];
                let adjacent = station
                    .connections
                    .first()
                    .map(|connection| self.label(connection.target).to_string());
                StationCandidate {
                    id: station.id.clone(),
                    name: station.name.clone(),
                    adjacent,
                }
            })
            .collect()
    }

    /// Station names most similar to the query, best match first. Used to
    /// build "did you mean" suggestions for unknown names.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let query = name.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .filter(|station| !station.name.is_empty())
            .map(|station| {
                let candidate = station.name.to_ascii_uppercase();
                (
                    strsim::normalized_levenshtein(&candidate, &query),
                    station.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut matches = Vec::new();
        for (_, candidate) in scored {
            if matches.iter().any(|existing| existing == candidate) {
                continue;
            }
            matches.push(candidate.to_string());
            if matches.len() == limit {
                break;
            }
        }
        matches
    }

    /// Return the arena index for an identifier, creating a placeholder
    /// station when the identifier has not been seen yet. Idempotent: one
    /// identifier always maps to one station record.
    pub(crate) fn get_or_create(&mut self, id: &str) -> StationIdx {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.stations.len();
        self.stations.push(Station {
            id: id.to_string(),
            name: String::new(),
            connections: Vec::new(),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Set the display name of a station. Repeated declarations overwrite the
    /// previous name; connections already attached are untouched.
    pub(crate) fn set_name(&mut self, idx: StationIdx, name: &str) {
        self.stations[idx].name = name.to_string();
    }

    /// Attach a directed connection to a station's outbound list.
    pub(crate) fn add_connection(&mut self, from: StationIdx, target: StationIdx, line: &str) {
        self.stations[from].connections.push(Connection {
            target,
            line: line.to_string(),
        });
    }
}
