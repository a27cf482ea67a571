//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard holding the reading store and the active tab
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create a new application state around the given dashboard.
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }
}
