//! In-memory local feed implementation.
//!
//! This module provides a feed suitable for unit testing and local
//! development. Data lives in memory and can be replaced at any time; the
//! feed can also be switched off to simulate an upstream outage.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{CoopReading, Device};
use crate::store::error::{ErrorContext, FeedError, FeedResult};
use crate::store::feed::ReadingFeed;

/// In-memory local feed.
///
/// Cloning shares the underlying data, so a test can keep a handle and
/// mutate what the store will see on its next refresh.
///
/// # Example
/// ```
/// use coop_dashboard::api::CoopReading;
/// use coop_dashboard::store::LocalFeed;
///
/// let feed = LocalFeed::new();
/// feed.set_coop_readings(vec![CoopReading::new("coop-1", "Coop 1", 25.0, 60.0, 10.0)]);
/// feed.set_available(false);
/// ```
#[derive(Clone, Default)]
pub struct LocalFeed {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    coop_readings: Vec<CoopReading>,
    devices: Vec<Device>,
    available: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            coop_readings: Vec::new(),
            devices: Vec::new(),
            available: true,
        }
    }
}

impl LocalFeed {
    /// Create a new empty, available feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed pre-populated with data.
    pub fn with_data(coop_readings: Vec<CoopReading>, devices: Vec<Device>) -> Self {
        let feed = Self::new();
        {
            let mut data = feed.data.write();
            data.coop_readings = coop_readings;
            data.devices = devices;
        }
        feed
    }

    /// Replace the coop readings served by the next fetch.
    pub fn set_coop_readings(&self, coop_readings: Vec<CoopReading>) {
        self.data.write().coop_readings = coop_readings;
    }

    /// Replace the devices served by the next fetch.
    pub fn set_devices(&self, devices: Vec<Device>) {
        self.data.write().devices = devices;
    }

    /// Simulate upstream availability. When unavailable every fetch fails.
    pub fn set_available(&self, available: bool) {
        self.data.write().available = available;
    }

    fn check_available(&self, operation: &str) -> FeedResult<()> {
        if self.data.read().available {
            Ok(())
        } else {
            Err(FeedError::unavailable_with_context(
                "Local feed is switched off",
                ErrorContext::new(operation).with_feed(self.name()),
            ))
        }
    }
}

#[async_trait]
impl ReadingFeed for LocalFeed {
    fn name(&self) -> String {
        "local".to_string()
    }

    async fn fetch_coop_readings(&self) -> FeedResult<Vec<CoopReading>> {
        self.check_available("fetch_coop_readings")?;
        Ok(self.data.read().coop_readings.clone())
    }

    async fn fetch_devices(&self) -> FeedResult<Vec<Device>> {
        self.check_available("fetch_devices")?;
        Ok(self.data.read().devices.clone())
    }

    async fn fetch_all(&self) -> FeedResult<(Vec<CoopReading>, Vec<Device>)> {
        self.check_available("fetch_all")?;
        let data = self.data.read();
        Ok((data.coop_readings.clone(), data.devices.clone()))
    }
}
