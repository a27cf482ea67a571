//! # Coop Dashboard Backend
//!
//! View-state and data-aggregation core for a livestock coop monitoring
//! dashboard.
//!
//! The crate turns raw per-coop environmental readings and per-device
//! connectivity records into the payloads an external renderer draws for
//! each of the four dashboard tabs. Rendering itself is out of scope; an
//! optional Axum server exposes the payloads as JSON.
//!
//! ## Features
//!
//! - **Reading store**: immutable snapshots swapped wholesale on refresh
//! - **Threshold evaluation**: farm health, disease risk and alerts from configurable thresholds
//! - **Navigation**: the active-tab state machine
//! - **Projections**: one typed payload per tab
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`api`]: identifier types and re-exported DTOs
//! - [`models`]: readings, devices, alerts and views
//! - [`store`]: feeds and the reading store
//! - [`services`]: threshold evaluation, navigation and projection builders
//! - [`routes`]: per-tab payload types
//! - [`config`]: TOML configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use coop_dashboard::config::DashboardConfig;
//! use coop_dashboard::services::Dashboard;
//! use coop_dashboard::store::MockFeed;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let dashboard = Dashboard::new(Arc::new(MockFeed::new()), DashboardConfig::default());
//! runtime.block_on(dashboard.refresh()).unwrap();
//!
//! let alerts = dashboard.alerts_projection();
//! assert_eq!(alerts.critical_count, 1);
//! ```

// FeedError carries a rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
