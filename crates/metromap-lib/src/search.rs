//! Uniform-cost search over the metro map with per-line edge weights.
//!
//! Connection weights are not physical distances: every distinct line label is
//! assigned a weight from its first-discovery order (10, 12, 14, ...), and a
//! connection costs whatever its line costs. Changing to a later-discovered
//! line is therefore more expensive than staying on an earlier one.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{MetroMap, StationIdx};

/// Weight assigned to the first distinct line discovered in the map.
const FIRST_LINE_WEIGHT: u32 = 10;

/// Increment between consecutively discovered lines.
const LINE_WEIGHT_STEP: u32 = 2;

/// Assign a weight to every distinct line label in the map.
///
/// Lines are discovered by scanning stations in first-seen order and each
/// station's connections in discovery order, so the assignment is
/// deterministic for a given map: the first line seen weighs 10, the second
/// 12, and so on.
pub fn line_weights(map: &MetroMap) -> HashMap<String, u32> {
    let mut weights = HashMap::new();
    let mut next_weight = FIRST_LINE_WEIGHT;

    for station in map.stations() {
        for connection in &station.connections {
            if weights.contains_key(&connection.line) {
                continue;
            }
            debug!(line = %connection.line, weight = next_weight, "assigned line weight");
            weights.insert(connection.line.clone(), next_weight);
            next_weight += LINE_WEIGHT_STEP;
        }
    }

    weights
}

/// Per-query search state, owned by the call. Nothing on the map itself is
/// mutated, so repeated queries against a shared `&MetroMap` are safe.
struct SearchState {
    cost: Vec<Option<u32>>,
    predecessor: Vec<Option<StationIdx>>,
    closed: Vec<bool>,
    open: Vec<StationIdx>,
}

impl SearchState {
    fn new(stations: usize) -> Self {
        Self {
            cost: vec![None; stations],
            predecessor: vec![None; stations],
            closed: vec![false; stations],
            open: Vec::new(),
        }
    }
}

/// Find the least-cost path from `source` to `goal`, inclusive of both.
///
/// Returns `None` when the goal is unreachable (the open set drains without
/// dequeueing the goal).
///
/// A discovered station's cost is the weight of the single connection that
/// discovered it, not the accumulated total from the source; once a station
/// is open or closed it is never re-costed. Route shapes depend on this rule,
/// so it is kept rather than replaced with cumulative Dijkstra relaxation.
pub fn find_route(map: &MetroMap, source: StationIdx, goal: StationIdx) -> Option<Vec<StationIdx>> {
    if source == goal {
        return Some(vec![source]);
    }

    let weights = line_weights(map);
    let mut state = SearchState::new(map.len());
    state.cost[source] = Some(0);
    state.open.push(source);

    // Every station enters the open set at most once, so the loop is bounded
    // by the station count. Draining the open set first means no route.
    for _ in 0..map.len() {
        let position = select_open(&state)?;
        let current = state.open.remove(position);
        state.closed[current] = true;

        if current == goal {
            return Some(reconstruct_path(&state, source, goal));
        }

        for connection in &map.station(current).connections {
            let next = connection.target;
            if state.closed[next] || state.open.contains(&next) {
                continue;
            }
            state.cost[next] = weights.get(&connection.line).copied();
            state.predecessor[next] = Some(current);
            state.open.push(next);
        }
    }

    None
}

/// Pick the open entry with the lowest recorded cost, ties broken by position
/// from the front. An entry without a cost is only taken when nothing costed
/// is available, which cannot happen for entries added by expansion.
fn select_open(state: &SearchState) -> Option<usize> {
    if state.open.is_empty() {
        return None;
    }

    let mut best: Option<(usize, u32)> = None;
    for (position, &idx) in state.open.iter().enumerate() {
        let Some(cost) = state.cost[idx] else {
            continue;
        };
        match best {
            Some((_, best_cost)) if best_cost <= cost => {}
            _ => best = Some((position, cost)),
        }
    }

    Some(best.map(|(position, _)| position).unwrap_or(0))
}

fn reconstruct_path(state: &SearchState, source: StationIdx, goal: StationIdx) -> Vec<StationIdx> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != source {
        match state.predecessor[current] {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
