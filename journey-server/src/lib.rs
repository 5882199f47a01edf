//! Railway journey planning and search engine.
//!
//! The core of a trip-planning web application: a weighted station graph
//! with shortest-path and alternative-route search, plus prefix
//! autocomplete, review keyword search, and fare sorting/range helpers.
//! Everything is served from immutable in-memory snapshots rebuilt
//! wholesale from a dataset file.

pub mod dataset;
pub mod domain;
pub mod network;
pub mod planner;
pub mod search;
pub mod service;
pub mod stats;
pub mod suggest;
pub mod web;
