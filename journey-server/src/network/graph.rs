//! Adjacency-list rail network.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{DomainError, RouteSegment, Station, StationCode};

/// The weighted station graph.
///
/// Stations are registered first; segments may only connect registered
/// stations. The network is built once per refresh cycle and is read-only
/// during query serving, so queries can share a snapshot freely.
#[derive(Debug, Default, Clone)]
pub struct RailNetwork {
    stations: HashMap<StationCode, Station>,
    adjacency: HashMap<StationCode, Vec<RouteSegment>>,
    segment_count: usize,
}

impl RailNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    ///
    /// Idempotent: re-adding an already-registered code is a no-op and does
    /// not overwrite the payload (first registration wins).
    pub fn add_station(&mut self, station: Station) {
        self.stations.entry(station.code).or_insert(station);
    }

    /// Add a directed segment between two registered stations.
    ///
    /// Fails with `UnknownStation` if either endpoint is unregistered and
    /// with `InvalidDistance` if the distance is negative or not finite.
    /// Parallel segments between the same pair are permitted.
    pub fn add_segment(&mut self, segment: RouteSegment) -> Result<(), DomainError> {
        if !self.stations.contains_key(&segment.from) {
            return Err(DomainError::UnknownStation(segment.from));
        }
        if !self.stations.contains_key(&segment.to) {
            return Err(DomainError::UnknownStation(segment.to));
        }
        if !segment.distance.is_finite() || segment.distance < 0.0 {
            return Err(DomainError::InvalidDistance {
                from: segment.from,
                to: segment.to,
                distance: segment.distance,
            });
        }

        self.adjacency.entry(segment.from).or_default().push(segment);
        self.segment_count += 1;
        Ok(())
    }

    /// Outgoing segments of a station, in insertion order.
    ///
    /// Empty for a station with no outgoing segments, and likewise for a
    /// code the network does not know.
    pub fn neighbors(&self, code: StationCode) -> &[RouteSegment] {
        self.adjacency.get(&code).map_or(&[], Vec::as_slice)
    }

    /// Whether the station is registered.
    pub fn contains(&self, code: StationCode) -> bool {
        self.stations.contains_key(&code)
    }

    /// Look up a registered station's record.
    pub fn station(&self, code: StationCode) -> Option<&Station> {
        self.stations.get(&code)
    }

    /// Iterate over all registered stations (unordered).
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of registered stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of segments across the whole network.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Build a network from bulk station and segment lists.
    ///
    /// A segment referencing an unregistered station is a build error, not
    /// something to skip: the dataset is authoritative and a dangling
    /// reference means it is inconsistent.
    pub fn from_records(
        stations: Vec<Station>,
        segments: Vec<RouteSegment>,
    ) -> Result<Self, DomainError> {
        let mut network = Self::new();
        for station in stations {
            network.add_station(station);
        }
        for segment in segments {
            network.add_segment(segment)?;
        }

        debug!(
            stations = network.station_count(),
            segments = network.segment_count(),
            "built rail network"
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn station(s: &str) -> Station {
        Station::new(code(s), format!("{s} station"))
    }

    #[test]
    fn add_station_is_idempotent_first_wins() {
        let mut network = RailNetwork::new();
        network.add_station(Station::new(code("NDLS"), "New Delhi"));
        network.add_station(Station::new(code("NDLS"), "Renamed"));

        assert_eq!(network.station_count(), 1);
        assert_eq!(network.station(code("NDLS")).unwrap().name, "New Delhi");
    }

    #[test]
    fn add_segment_requires_both_endpoints() {
        let mut network = RailNetwork::new();
        network.add_station(station("NDLS"));

        let err = network
            .add_segment(RouteSegment::new(code("NDLS"), code("CNB"), 440.0))
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownStation(code("CNB")));

        let err = network
            .add_segment(RouteSegment::new(code("CNB"), code("NDLS"), 440.0))
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownStation(code("CNB")));
    }

    #[test]
    fn add_segment_rejects_bad_distances() {
        let mut network = RailNetwork::new();
        network.add_station(station("NDLS"));
        network.add_station(station("CNB"));

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = network
                .add_segment(RouteSegment::new(code("NDLS"), code("CNB"), bad))
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidDistance { .. }));
        }

        // Zero is a legal weight
        assert!(
            network
                .add_segment(RouteSegment::new(code("NDLS"), code("CNB"), 0.0))
                .is_ok()
        );
    }

    #[test]
    fn parallel_segments_are_kept_in_order() {
        let mut network = RailNetwork::new();
        network.add_station(station("NDLS"));
        network.add_station(station("CNB"));

        network
            .add_segment(RouteSegment::with_trains(
                code("NDLS"),
                code("CNB"),
                440.0,
                vec!["12302".into()],
            ))
            .unwrap();
        network
            .add_segment(RouteSegment::with_trains(
                code("NDLS"),
                code("CNB"),
                455.0,
                vec!["12554".into()],
            ))
            .unwrap();

        let out = network.neighbors(code("NDLS"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].distance, 440.0);
        assert_eq!(out[1].distance, 455.0);
        assert_eq!(network.segment_count(), 2);
    }

    #[test]
    fn neighbors_of_unknown_or_leaf_station_is_empty() {
        let mut network = RailNetwork::new();
        network.add_station(station("NDLS"));

        assert!(network.neighbors(code("NDLS")).is_empty());
        assert!(network.neighbors(code("ZZZ")).is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let mut network = RailNetwork::new();
        network.add_station(station("NDLS"));
        network.add_station(station("CNB"));
        network
            .add_segment(RouteSegment::new(code("NDLS"), code("CNB"), 440.0))
            .unwrap();

        assert_eq!(network.neighbors(code("NDLS")).len(), 1);
        assert!(network.neighbors(code("CNB")).is_empty());
    }

    #[test]
    fn from_records_fails_on_dangling_reference() {
        let result = RailNetwork::from_records(
            vec![station("NDLS")],
            vec![RouteSegment::new(code("NDLS"), code("CNB"), 440.0)],
        );
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownStation(code("CNB"))
        );
    }

    #[test]
    fn from_records_builds() {
        let network = RailNetwork::from_records(
            vec![station("NDLS"), station("CNB")],
            vec![
                RouteSegment::new(code("NDLS"), code("CNB"), 440.0),
                RouteSegment::new(code("CNB"), code("NDLS"), 440.0),
            ],
        )
        .unwrap();

        assert_eq!(network.station_count(), 2);
        assert_eq!(network.segment_count(), 2);
    }
}
