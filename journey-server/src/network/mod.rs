//! The weighted station graph.

mod graph;

pub use graph::RailNetwork;
