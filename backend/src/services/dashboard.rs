//! The dashboard facade handed to a renderer.
//!
//! Owns the reading store, the active-tab selector and the feed used for
//! refreshes. Projections are rebuilt from the current snapshot on every
//! call and never cached.

use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

use crate::api::{
    AlertsProjection, ChartProjection, DashboardView, DevicesProjection, OverviewProjection,
    Projection, TabInfo,
};
use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::store::{FeedFactory, FeedResult, ReadingFeed, ReadingStore, Snapshot, StoreView};

use super::navigation::ViewSelector;
use super::projections;

pub struct Dashboard {
    store: ReadingStore,
    selector: Mutex<ViewSelector>,
    feed: Arc<dyn ReadingFeed>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Build a dashboard over `feed`. The store starts `Unavailable`; call
    /// [`Dashboard::refresh`] to load data.
    pub fn new(feed: Arc<dyn ReadingFeed>, config: DashboardConfig) -> Self {
        Self {
            store: ReadingStore::new(),
            selector: Mutex::new(ViewSelector::new()),
            feed,
            config,
        }
    }

    /// Build a dashboard with the feed named in the configuration.
    pub fn from_config(config: DashboardConfig) -> DashboardResult<Self> {
        let feed = FeedFactory::create(&config.feed)?;
        info!("Dashboard using feed {}", feed.name());
        Ok(Self::new(feed, config))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn feed_name(&self) -> String {
        self.feed.name()
    }

    pub fn store(&self) -> &ReadingStore {
        &self.store
    }

    /// Reload readings and devices from the feed. On failure the previous
    /// data keeps being served with a degraded status.
    pub async fn refresh(&self) -> FeedResult<Arc<Snapshot>> {
        self.store.refresh(self.feed.as_ref()).await
    }

    // =========================================================
    // Navigation
    // =========================================================

    pub fn active_tab(&self) -> DashboardView {
        self.selector.lock().active_tab()
    }

    pub fn select_tab(&self, view: DashboardView) -> bool {
        self.selector.lock().select_tab(view)
    }

    pub fn select_tab_named(&self, name: &str) -> DashboardResult<bool> {
        self.selector.lock().select_tab_named(name)
    }

    pub fn tabs(&self) -> Vec<TabInfo> {
        self.selector.lock().tabs()
    }

    // =========================================================
    // Projections
    // =========================================================

    pub fn overview_projection(&self) -> OverviewProjection {
        let StoreView { snapshot, status, .. } = self.store.view();
        projections::build_overview(&snapshot, status, &self.config)
    }

    pub fn devices_projection(&self) -> DevicesProjection {
        let StoreView { snapshot, status, .. } = self.store.view();
        projections::build_devices(&snapshot, status)
    }

    pub fn chart_projection(&self) -> ChartProjection {
        let StoreView { snapshot, status, .. } = self.store.view();
        projections::build_chart(&snapshot, status)
    }

    pub fn alerts_projection(&self) -> AlertsProjection {
        let StoreView { snapshot, status, .. } = self.store.view();
        projections::build_alerts_projection(&snapshot, status, &self.config)
    }

    /// Projection of whichever tab is active right now.
    pub fn active_projection(&self) -> Projection {
        self.projection(self.active_tab())
    }

    pub fn projection(&self, view: DashboardView) -> Projection {
        let StoreView { snapshot, status, .. } = self.store.view();
        projections::build_projection(view, &snapshot, status, &self.config)
    }
}
