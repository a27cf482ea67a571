//! Static mock feed with the demo farm.

use async_trait::async_trait;

use crate::api::{CoopReading, Device, DeviceStatus};
use crate::store::error::FeedResult;
use crate::store::feed::ReadingFeed;

/// Feed serving a fixed four-coop, three-device farm.
#[derive(Debug, Clone, Default)]
pub struct MockFeed;

impl MockFeed {
    pub fn new() -> Self {
        Self
    }

    pub fn coop_readings() -> Vec<CoopReading> {
        vec![
            CoopReading::new("coop-1", "Coop 1", 25.0, 60.0, 10.0),
            CoopReading::new("coop-2", "Coop 2", 24.0, 58.0, 8.0),
            CoopReading::new("coop-3", "Coop 3", 26.0, 62.0, 12.0),
            CoopReading::new("coop-4", "Coop 4", 23.0, 59.0, 9.0),
        ]
    }

    pub fn devices() -> Vec<Device> {
        vec![
            Device::new("device-1", "Device 1", DeviceStatus::Online, 80.0),
            Device::new("device-2", "Device 2", DeviceStatus::Offline, 20.0),
            Device::new("device-3", "Device 3", DeviceStatus::Online, 65.0),
        ]
    }
}

#[async_trait]
impl ReadingFeed for MockFeed {
    fn name(&self) -> String {
        "mock".to_string()
    }

    async fn fetch_coop_readings(&self) -> FeedResult<Vec<CoopReading>> {
        Ok(Self::coop_readings())
    }

    async fn fetch_devices(&self) -> FeedResult<Vec<Device>> {
        Ok(Self::devices())
    }
}
