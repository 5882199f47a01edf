//! Application state for the web layer.

use crate::service::ServiceHandle;

/// Shared application state.
///
/// The handle is already cheap to clone (an `Arc` pair), so the state is
/// just the handle.
#[derive(Clone)]
pub struct AppState {
    /// The refreshable journey service
    pub service: ServiceHandle,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: ServiceHandle) -> Self {
        Self { service }
    }
}
