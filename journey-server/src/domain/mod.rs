//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated rail data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod path;
mod segment;
mod station;

pub use error::DomainError;
pub use path::{Hop, JourneyPath};
pub use segment::RouteSegment;
pub use station::{InvalidStationCode, Station, StationCode};
