//! Web layer for the journey planner.
//!
//! Provides the JSON endpoints the surrounding application consumes:
//! pathfinding, autocomplete, review search and fare post-processing.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
