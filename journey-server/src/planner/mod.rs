//! Journey planning over the rail network.
//!
//! Two search modes share the weighted graph: Dijkstra shortest-path with a
//! stop bound, and bounded depth-first enumeration of alternative routes.
//! Both treat "no route" as a value rather than an error; only a reference
//! to an unknown station fails the call.

mod alternatives;
mod config;
mod dijkstra;

pub use alternatives::find_alternatives;
pub use config::SearchConfig;
pub use dijkstra::shortest_path;
