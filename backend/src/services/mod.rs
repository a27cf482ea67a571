//! Service layer for the dashboard's derived data.
//!
//! This module contains the pure computation that sits between the reading
//! store and the renderer: threshold evaluation, tab navigation and the
//! per-tab projection builders, tied together by [`Dashboard`].

pub mod dashboard;

pub mod navigation;

pub mod projections;

pub mod thresholds;

#[cfg(test)]
#[path = "thresholds_tests.rs"]
mod thresholds_tests;

pub use dashboard::Dashboard;
pub use navigation::ViewSelector;
pub use projections::build_projection;
pub use thresholds::{build_alerts, disease_risk, farm_health_status};
