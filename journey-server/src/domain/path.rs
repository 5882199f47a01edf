//! Journey path results.

use serde::Serialize;

use super::{RouteSegment, StationCode};

/// One visited station in a path, together with the segment that reached it.
///
/// `via` is `None` only for the origin hop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    pub station: StationCode,
    pub via: Option<RouteSegment>,
}

/// An ordered path through the network, with its aggregates.
///
/// `total_stops` counts traversed segments, i.e. `hops.len() - 1`. A path
/// from a station to itself is the single origin hop with zero distance and
/// zero stops; "no path exists" is represented by the absence of a
/// `JourneyPath`, never by an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyPath {
    pub hops: Vec<Hop>,
    pub total_distance: f64,
    pub total_stops: usize,
}

impl JourneyPath {
    /// Build a path from its hop list, computing the aggregates.
    ///
    /// The hop list must be non-empty and start with the origin hop
    /// (`via == None`); this is upheld by the planner's reconstruction.
    pub fn from_hops(hops: Vec<Hop>) -> Self {
        debug_assert!(!hops.is_empty());
        debug_assert!(hops[0].via.is_none());

        let total_distance = hops
            .iter()
            .filter_map(|h| h.via.as_ref())
            .map(|seg| seg.distance)
            .sum();
        let total_stops = hops.len() - 1;

        Self {
            hops,
            total_distance,
            total_stops,
        }
    }

    /// The station the path starts at.
    pub fn origin(&self) -> StationCode {
        self.hops[0].station
    }

    /// The station the path ends at.
    pub fn destination(&self) -> StationCode {
        self.hops[self.hops.len() - 1].station
    }

    /// The station codes along the path, origin first.
    pub fn stations(&self) -> impl Iterator<Item = StationCode> + '_ {
        self.hops.iter().map(|h| h.station)
    }
}
