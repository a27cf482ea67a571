//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::store::FeedError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unknown navigation target
    InvalidTab(String),
    /// Internal server error
    Internal(String),
    /// Upstream feed error
    Feed(FeedError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidTab(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_TAB", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Feed(e) => {
                let error = ApiError::new("DATA_UNAVAILABLE", e.to_string())
                    .with_details(e.context().to_string());
                (StatusCode::SERVICE_UNAVAILABLE, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::InvalidTabState(_) => AppError::InvalidTab(err.to_string()),
            DashboardError::Configuration(msg) => AppError::Internal(msg),
            DashboardError::Feed(e) => AppError::Feed(e),
        }
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        AppError::Feed(err)
    }
}
