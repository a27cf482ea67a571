//! Errors surfaced by the dashboard core.

use crate::store::FeedError;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard operations.
///
/// None of these is fatal to the process; the renderer boundary decides how
/// each one is shown.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A navigation target outside the known tabs was requested.
    #[error("Invalid tab '{0}': expected one of overview, devices, data, alerts")]
    InvalidTabState(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream feed failed.
    #[error(transparent)]
    Feed(#[from] FeedError),
}
