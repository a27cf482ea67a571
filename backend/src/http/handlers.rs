//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! [`Dashboard`](crate::services::Dashboard) for the actual work.

use axum::{extract::State, Json};

use super::dto::{
    AlertsProjection, ChartProjection, DevicesProjection, HealthResponse, OverviewProjection,
    Projection, RefreshResponse, SelectTabRequest, TabResponse, TabsResponse,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting which feed is in use and how fresh its data is.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let view = state.dashboard.store().view();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        feed: state.dashboard.feed_name(),
        data_status: view.status,
        last_error: view.last_error,
    }))
}

// =============================================================================
// Navigation
// =============================================================================

/// GET /v1/tabs
pub async fn list_tabs(State(state): State<AppState>) -> HandlerResult<TabsResponse> {
    Ok(Json(TabsResponse {
        tabs: state.dashboard.tabs(),
    }))
}

/// GET /v1/tab
pub async fn get_active_tab(State(state): State<AppState>) -> HandlerResult<TabResponse> {
    Ok(Json(TabResponse {
        active_tab: state.dashboard.active_tab(),
        changed: None,
    }))
}

/// PUT /v1/tab
///
/// Select a tab by name. Unknown names are rejected with 400 and leave the
/// active tab unchanged.
pub async fn select_tab(
    State(state): State<AppState>,
    Json(request): Json<SelectTabRequest>,
) -> HandlerResult<TabResponse> {
    let changed = state.dashboard.select_tab_named(&request.tab)?;
    Ok(Json(TabResponse {
        active_tab: state.dashboard.active_tab(),
        changed: Some(changed),
    }))
}

// =============================================================================
// Projections
// =============================================================================

/// GET /v1/projection
///
/// Payload of whichever tab is currently active.
pub async fn get_active_projection(State(state): State<AppState>) -> HandlerResult<Projection> {
    Ok(Json(state.dashboard.active_projection()))
}

/// GET /v1/projections/overview
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<OverviewProjection> {
    Ok(Json(state.dashboard.overview_projection()))
}

/// GET /v1/projections/devices
pub async fn get_devices(State(state): State<AppState>) -> HandlerResult<DevicesProjection> {
    Ok(Json(state.dashboard.devices_projection()))
}

/// GET /v1/projections/chart
pub async fn get_chart(State(state): State<AppState>) -> HandlerResult<ChartProjection> {
    Ok(Json(state.dashboard.chart_projection()))
}

/// GET /v1/projections/alerts
pub async fn get_alerts(State(state): State<AppState>) -> HandlerResult<AlertsProjection> {
    Ok(Json(state.dashboard.alerts_projection()))
}

// =============================================================================
// Refresh
// =============================================================================

/// POST /v1/refresh
///
/// Reload data from the feed. A feed failure answers 503 while the previous
/// data keeps being served by the projection endpoints.
pub async fn refresh(State(state): State<AppState>) -> HandlerResult<RefreshResponse> {
    let snapshot = state.dashboard.refresh().await?;
    Ok(Json(RefreshResponse {
        data_status: state.dashboard.store().status(),
        coop_count: snapshot.coop_readings.len(),
        device_count: snapshot.devices.len(),
        fetched_at: snapshot.fetched_at,
        version: snapshot.version,
    }))
}
