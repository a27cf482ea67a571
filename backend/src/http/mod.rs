//! HTTP server module for the coop dashboard.
//!
//! This module provides an axum-based HTTP server that exposes the dashboard
//! projections and tab navigation as a REST API for an external renderer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Dashboard facade and tab navigation                    │
//! │  - Threshold evaluation and projections                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store Layer (store/)                                     │
//! │  - Reading snapshots                                      │
//! │  - MockFeed / LocalFeed / JsonFileFeed                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
