//! Alternative-route enumeration.
//!
//! Depth-first enumeration of simple paths between two stations, bounded by
//! a stop cap. This is exponential in the worst case by design: the cap
//! keeps it usable for "show me a few good alternatives", not for
//! exhaustive path enumeration over dense networks.
//!
//! The walk uses an explicit frame stack rather than recursion, so route
//! length is bounded by the stop cap and never by the call stack.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{DomainError, Hop, JourneyPath, StationCode};
use crate::network::RailNetwork;

/// One suspended level of the depth-first walk: a station and the index of
/// the next outgoing segment to try from it.
struct Frame {
    station: StationCode,
    next_segment: usize,
}

/// Enumerate simple paths from `from` to `to`, cheapest first.
///
/// Paths may use at most `max_stops` segments; at most `max_paths` results
/// are returned, sorted ascending by total distance (ties: fewer stops,
/// then the lexicographically smaller station sequence). An unreachable
/// pair yields an empty vec; unknown station codes are an error.
pub fn find_alternatives(
    network: &RailNetwork,
    from: StationCode,
    to: StationCode,
    max_stops: usize,
    max_paths: usize,
) -> Result<Vec<JourneyPath>, DomainError> {
    if !network.contains(from) {
        return Err(DomainError::UnknownStation(from));
    }
    if !network.contains(to) {
        return Err(DomainError::UnknownStation(to));
    }

    if from == to {
        // The zero-hop path is the only simple path; any cycle would
        // revisit the origin.
        let path = JourneyPath::from_hops(vec![Hop {
            station: from,
            via: None,
        }]);
        return Ok(vec![path].into_iter().take(max_paths).collect());
    }

    let mut found: Vec<JourneyPath> = Vec::new();

    // Current partial path and its station set; frames mirror hops one-to-one.
    let mut hops: Vec<Hop> = vec![Hop {
        station: from,
        via: None,
    }];
    let mut on_path: HashSet<StationCode> = HashSet::from([from]);
    let mut frames: Vec<Frame> = vec![Frame {
        station: from,
        next_segment: 0,
    }];

    loop {
        let Some(top) = frames.last_mut() else { break };
        let station = top.station;
        let segment_index = top.next_segment;
        top.next_segment += 1;

        let Some(segment) = network.neighbors(station).get(segment_index) else {
            // Exhausted this station: backtrack
            frames.pop();
            if let Some(hop) = hops.pop() {
                on_path.remove(&hop.station);
            }
            continue;
        };

        // Simple paths only: never revisit a station already on the path.
        // The destination is never pushed, so this cannot mask a finish.
        if on_path.contains(&segment.to) {
            continue;
        }

        // Taking this segment would be stop number hops.len()
        if hops.len() > max_stops {
            continue;
        }

        if segment.to == to {
            let mut complete = hops.clone();
            complete.push(Hop {
                station: to,
                via: Some(segment.clone()),
            });
            found.push(JourneyPath::from_hops(complete));
            continue;
        }

        on_path.insert(segment.to);
        hops.push(Hop {
            station: segment.to,
            via: Some(segment.clone()),
        });
        frames.push(Frame {
            station: segment.to,
            next_segment: 0,
        });
    }

    found.sort_by(|a, b| {
        a.total_distance
            .total_cmp(&b.total_distance)
            .then_with(|| a.total_stops.cmp(&b.total_stops))
            .then_with(|| {
                a.stations()
                    .collect::<Vec<_>>()
                    .cmp(&b.stations().collect::<Vec<_>>())
            })
    });
    found.truncate(max_paths);

    debug!(
        from = %from,
        to = %to,
        routes = found.len(),
        "alternative routes enumerated"
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteSegment, Station};

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn network(stations: &[&str], segments: &[(&str, &str, f64)]) -> RailNetwork {
        let stations = stations
            .iter()
            .map(|s| Station::new(code(s), format!("{s} station")))
            .collect();
        let segments = segments
            .iter()
            .map(|&(a, b, d)| RouteSegment::new(code(a), code(b), d))
            .collect();
        RailNetwork::from_records(stations, segments).unwrap()
    }

    fn diamond() -> RailNetwork {
        network(
            &["AA", "BB", "CC", "DD"],
            &[
                ("AA", "BB", 5.0),
                ("BB", "DD", 5.0),
                ("AA", "CC", 3.0),
                ("CC", "DD", 3.0),
            ],
        )
    }

    fn stations_of(path: &JourneyPath) -> Vec<StationCode> {
        path.stations().collect()
    }

    #[test]
    fn diamond_yields_both_routes_cheapest_first() {
        let paths = find_alternatives(&diamond(), code("AA"), code("DD"), 5, 5).unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(
            stations_of(&paths[0]),
            vec![code("AA"), code("CC"), code("DD")]
        );
        assert_eq!(paths[0].total_distance, 6.0);
        assert_eq!(
            stations_of(&paths[1]),
            vec![code("AA"), code("BB"), code("DD")]
        );
        assert_eq!(paths[1].total_distance, 10.0);
    }

    #[test]
    fn max_paths_truncates_after_sorting() {
        let paths = find_alternatives(&diamond(), code("AA"), code("DD"), 5, 1).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].total_distance, 6.0);
    }

    #[test]
    fn unreachable_pair_is_empty_not_error() {
        let net = network(&["AA", "BB"], &[]);
        let paths = find_alternatives(&net, code("AA"), code("BB"), 5, 5).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn unknown_station_is_an_error() {
        let net = diamond();
        assert_eq!(
            find_alternatives(&net, code("ZZ"), code("DD"), 5, 5).unwrap_err(),
            DomainError::UnknownStation(code("ZZ"))
        );
    }

    #[test]
    fn origin_equals_destination_is_the_zero_hop_path() {
        let paths = find_alternatives(&diamond(), code("AA"), code("AA"), 5, 5).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].total_stops, 0);
    }

    #[test]
    fn cycles_are_not_revisited() {
        // AA <-> BB cycle plus an exit; only the two simple paths exist
        let net = network(
            &["AA", "BB", "CC"],
            &[
                ("AA", "BB", 1.0),
                ("BB", "AA", 1.0),
                ("BB", "CC", 1.0),
                ("AA", "CC", 5.0),
            ],
        );

        let paths = find_alternatives(&net, code("AA"), code("CC"), 5, 10).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            stations_of(&paths[0]),
            vec![code("AA"), code("BB"), code("CC")]
        );
        assert_eq!(stations_of(&paths[1]), vec![code("AA"), code("CC")]);
    }

    #[test]
    fn stop_bound_prunes_long_routes() {
        let net = network(
            &["AA", "BB", "CC", "DD"],
            &[
                ("AA", "BB", 1.0),
                ("BB", "CC", 1.0),
                ("CC", "DD", 1.0),
                ("AA", "DD", 100.0),
            ],
        );

        let paths = find_alternatives(&net, code("AA"), code("DD"), 2, 5).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].total_distance, 100.0);

        let paths = find_alternatives(&net, code("AA"), code("DD"), 3, 5).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].total_distance, 3.0);
    }

    #[test]
    fn parallel_edges_are_distinct_routes() {
        let mut net = network(&["AA", "BB"], &[]);
        net.add_segment(RouteSegment::with_trains(
            code("AA"),
            code("BB"),
            4.0,
            vec!["fast".into()],
        ))
        .unwrap();
        net.add_segment(RouteSegment::with_trains(
            code("AA"),
            code("BB"),
            9.0,
            vec!["slow".into()],
        ))
        .unwrap();

        let paths = find_alternatives(&net, code("AA"), code("BB"), 5, 5).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].total_distance, 4.0);
        assert_eq!(paths[1].total_distance, 9.0);
    }

    #[test]
    fn equal_distance_routes_sort_by_station_sequence() {
        let net = network(
            &["AA", "MM", "KK", "ZZ"],
            &[
                ("AA", "MM", 2.0),
                ("AA", "KK", 2.0),
                ("MM", "ZZ", 2.0),
                ("KK", "ZZ", 2.0),
            ],
        );

        let paths = find_alternatives(&net, code("AA"), code("ZZ"), 5, 5).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            stations_of(&paths[0]),
            vec![code("AA"), code("KK"), code("ZZ")]
        );
        assert_eq!(
            stations_of(&paths[1]),
            vec![code("AA"), code("MM"), code("ZZ")]
        );
    }
}
