//! Shortest-path search over the rail network.
//!
//! Dijkstra relaxation with a binary heap and lazy deletion: instead of
//! decreasing a key in place, a better distance is pushed as a fresh heap
//! entry and stale entries are skipped on extraction.
//!
//! Because of the stop bound, search states are labeled by
//! `(station, stops used)` rather than by station alone. With a single
//! label per station, a cheaper route that uses more stops would overwrite
//! the station's stop count and could block onward expansion for a
//! fewer-stop route that still fits the bound. Per-stop-count labels keep
//! every within-bound route alive at the cost of at most `max_stops + 1`
//! labels per station.
//!
//! Equal distances extract the lexicographically smaller station code
//! first (then the fewer-stop state), so results are reproducible
//! regardless of insertion order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::domain::{DomainError, Hop, JourneyPath, RouteSegment, StationCode};
use crate::network::RailNetwork;

/// A search state: a station reached with a given number of stops.
type StateKey = (StationCode, usize);

/// Heap entry: tentative distance of a `(station, stops)` state.
///
/// Ordered by distance (`f64::total_cmp`), then station code, then stop
/// count — the heap holds these under `Reverse`, so the minimum distance
/// pops first and ties go to the smaller code, then to fewer stops.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    distance: f64,
    station: StationCode,
    stops: usize,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.station.cmp(&other.station))
            .then_with(|| self.stops.cmp(&other.stops))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest path from `from` to `to`, if one exists within
/// `max_stops` traversed segments.
///
/// Returns the minimum-distance path over all paths using at most
/// `max_stops` segments. `Ok(None)` means the destination is unreachable
/// within the bound; this is a normal outcome, distinct from the zero-hop
/// path returned when `from == to`. Unknown station codes are an error.
///
/// The stop bound itself is a policy: a path that would need more segments
/// than the bound is rejected even when it is globally cheapest.
pub fn shortest_path(
    network: &RailNetwork,
    from: StationCode,
    to: StationCode,
    max_stops: usize,
) -> Result<Option<JourneyPath>, DomainError> {
    if !network.contains(from) {
        return Err(DomainError::UnknownStation(from));
    }
    if !network.contains(to) {
        return Err(DomainError::UnknownStation(to));
    }

    if from == to {
        return Ok(Some(JourneyPath::from_hops(vec![Hop {
            station: from,
            via: None,
        }])));
    }

    let mut best: HashMap<StateKey, f64> = HashMap::new();
    let mut predecessor: HashMap<StateKey, RouteSegment> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();

    best.insert((from, 0), 0.0);
    heap.push(Reverse(QueueEntry {
        distance: 0.0,
        station: from,
        stops: 0,
    }));

    let mut arrival: Option<StateKey> = None;

    while let Some(Reverse(entry)) = heap.pop() {
        // Stale entry from a superseded relaxation
        if entry.distance > best[&(entry.station, entry.stops)] {
            continue;
        }

        // The first destination state popped has the minimum distance
        // over every within-bound stop count
        if entry.station == to {
            arrival = Some((entry.station, entry.stops));
            break;
        }

        if entry.stops >= max_stops {
            continue;
        }

        for segment in network.neighbors(entry.station) {
            let candidate = entry.distance + segment.distance;
            let key = (segment.to, entry.stops + 1);
            let improved = best.get(&key).is_none_or(|&known| candidate < known);
            if improved {
                trace!(
                    station = %segment.to,
                    stops = entry.stops + 1,
                    distance = candidate,
                    "relaxed"
                );
                best.insert(key, candidate);
                predecessor.insert(key, segment.clone());
                heap.push(Reverse(QueueEntry {
                    distance: candidate,
                    station: segment.to,
                    stops: entry.stops + 1,
                }));
            }
        }
    }

    Ok(arrival.and_then(|state| reconstruct(from, state, &predecessor)))
}

/// Walk predecessor links from the arrival state back to the origin.
///
/// Returns `None` when the chain is broken, which cannot happen for a
/// state the search actually reached.
fn reconstruct(
    from: StationCode,
    arrival: StateKey,
    predecessor: &HashMap<StateKey, RouteSegment>,
) -> Option<JourneyPath> {
    let mut hops = Vec::new();
    let (mut current, mut stops) = arrival;

    while current != from || stops > 0 {
        let segment = predecessor.get(&(current, stops))?;
        hops.push(Hop {
            station: current,
            via: Some(segment.clone()),
        });
        current = segment.from;
        stops -= 1;
    }

    hops.push(Hop {
        station: from,
        via: None,
    });
    hops.reverse();

    Some(JourneyPath::from_hops(hops))
}
