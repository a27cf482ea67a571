//! Data Transfer Objects for the HTTP API.
//!
//! Projection payloads are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{
    AlertsProjection, ChartProjection, DashboardView, DataStatus, DevicesProjection,
    OverviewProjection, Projection, TabInfo,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Name of the feed backing the dashboard
    pub feed: String,
    /// Freshness of the served data
    pub data_status: DataStatus,
    /// Why the last refresh failed, while the data is degraded
    pub last_error: Option<String>,
}

/// Tab list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsResponse {
    pub tabs: Vec<TabInfo>,
}

/// Active tab response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabResponse {
    pub active_tab: DashboardView,
    /// Present only on selection; false when the tab was already active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
}

/// Request body for selecting a tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectTabRequest {
    /// Tab name, e.g. "devices" or "data"
    pub tab: String,
}

/// Response for a manual refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub data_status: DataStatus,
    pub coop_count: usize,
    pub device_count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    pub version: u64,
}
