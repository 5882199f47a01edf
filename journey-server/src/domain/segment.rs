//! Route segments: the directed, weighted edges of the rail network.

use serde::{Deserialize, Serialize};

use super::StationCode;

/// One directed route segment between two stations.
///
/// The weight is the distance in kilometres. `trains` is the list of train
/// numbers serving the segment; it is opaque payload to the graph and the
/// planner, carried through into path results for display.
///
/// Parallel segments between the same station pair are permitted (different
/// trains with different distances); a round trip is two segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: StationCode,
    pub to: StationCode,
    pub distance: f64,
    #[serde(default)]
    pub trains: Vec<String>,
}

impl RouteSegment {
    /// Create a segment with no serving trains attached.
    pub fn new(from: StationCode, to: StationCode, distance: f64) -> Self {
        Self {
            from,
            to,
            distance,
            trains: Vec::new(),
        }
    }

    /// Create a segment served by the given trains.
    pub fn with_trains(
        from: StationCode,
        to: StationCode,
        distance: f64,
        trains: Vec<String>,
    ) -> Self {
        Self {
            from,
            to,
            distance,
            trains,
        }
    }
}
