//! Domain error types.
//!
//! These errors represent structural failures: an operation referenced a
//! station the graph does not know, or tried to insert an edge the planner
//! could not soundly traverse. "No path found" and "no matches" are normal
//! outcomes and are represented as values, not errors.

use super::StationCode;

/// Domain-level errors for graph construction and queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Operation referenced a station absent from the network
    #[error("unknown station: {0}")]
    UnknownStation(StationCode),

    /// Segment distance is negative or not finite.
    /// Dijkstra is unsound with negative weights, so these are rejected
    /// at insertion rather than silently accepted.
    #[error("invalid distance {distance} on segment {from} -> {to}")]
    InvalidDistance {
        from: StationCode,
        to: StationCode,
        distance: f64,
    },
}
