//! Coop Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the configuration, builds the feed, performs the first refresh,
//! sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in mock feed (default)
//! cargo run --bin coop-dashboard-server
//!
//! # Run against a JSON export
//! DASHBOARD_CONFIG=backend/dashboard.toml cargo run --bin coop-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: path to a `dashboard.toml` (default: searched in the working directory)
//! - `HOST`: Server host (overrides `[server] host`)
//! - `PORT`: Server port (overrides `[server] port`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use coop_dashboard::config::DashboardConfig;
use coop_dashboard::http::{create_router, AppState};
use coop_dashboard::services::Dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Coop Dashboard HTTP Server");

    let config = DashboardConfig::load()?;
    let refresh_interval = config.feed.refresh_interval_secs;
    let default_host = config.server.host.clone();
    let default_port = config.server.port;

    let dashboard = Arc::new(Dashboard::from_config(config)?);

    // A failed first load is not fatal; projections report `unavailable` until a refresh succeeds
    if let Err(e) = dashboard.refresh().await {
        warn!("Initial refresh failed: {}", e);
    }

    if refresh_interval > 0 {
        spawn_refresh_loop(Arc::clone(&dashboard), Duration::from_secs(refresh_interval));
    }

    let state = AppState::new(dashboard);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or(default_host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default_port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn spawn_refresh_loop(dashboard: Arc<Dashboard>, every: Duration) {
    info!("Refreshing from {} every {:?}", dashboard.feed_name(), every);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately and the initial load already ran
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = dashboard.refresh().await {
                warn!("Scheduled refresh failed: {}", e);
            }
        }
    });
}
