use thiserror::Error;

use crate::graph::StationCandidate;

/// Convenient result alias for the metro map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A map line stopped after the station identifier.
    #[error("line {line}: station declaration is missing a station name")]
    MissingStationName { line: usize },

    /// A station was declared with no line information at all.
    #[error("line {line}: station {id} is on no lines")]
    MissingLineInfo { line: usize, id: String },

    /// A line triple ended before its outbound station identifier.
    #[error("line {line}: line {rail_line} on station {id} is missing its outbound station")]
    MissingOutbound {
        line: usize,
        id: String,
        rail_line: String,
    },

    /// A line triple ended before its inbound station identifier.
    #[error("line {line}: line {rail_line} on station {id} is missing its inbound station")]
    MissingInbound {
        line: usize,
        id: String,
        rail_line: String,
    },

    /// Raised when a station name could not be found in the map.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when several stations share the requested display name. The
    /// candidates carry enough context (identifier plus first neighbour) for a
    /// caller to retry the lookup by identifier.
    #[error("station name {name} is ambiguous{}", format_candidates(.candidates))]
    AmbiguousStation {
        name: String,
        candidates: Vec<StationCandidate>,
    },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a reconstructed path references a hop with no backing
    /// connection in the map. Indicates a bug in search or the graph
    /// invariants rather than bad user input.
    #[error("route is inconsistent with the map: no connection from {from} to {to}")]
    InconsistentRoute { from: String, to: String },

    /// Raised when a computed route has no stations at all.
    #[error("route was empty")]
    EmptyRoute,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

fn format_candidates(candidates: &[StationCandidate]) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let rendered = candidates
        .iter()
        .map(|candidate| match &candidate.adjacent {
            Some(adjacent) => format!("{} (next to {})", candidate.id, adjacent),
            None => candidate.id.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("; matching station ids: {}", rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_message_lists_suggestions() {
        let error = Error::UnknownStation {
            name: "Allewife".to_string(),
            suggestions: vec!["Alewife".to_string()],
        };
        let message = format!("{error}");
        assert!(message.contains("unknown station name: Allewife"));
        assert!(message.contains("Did you mean 'Alewife'?"));
    }

    #[test]
    fn ambiguous_station_message_lists_candidate_ids() {
        let error = Error::AmbiguousStation {
            name: "StPaul".to_string(),
            candidates: vec![
                StationCandidate {
                    id: "4".to_string(),
                    name: "StPaul".to_string(),
                    adjacent: Some("Harvard".to_string()),
                },
                StationCandidate {
                    id: "9".to_string(),
                    name: "StPaul".to_string(),
                    adjacent: None,
                },
            ],
        };
        let message = format!("{error}");
        assert!(message.contains("4 (next to Harvard)"));
        assert!(message.contains("9"));
    }
}
