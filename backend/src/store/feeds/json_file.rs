//! JSON file feed.
//!
//! Reads a farm document from disk on every fetch:
//!
//! ```json
//! {
//!   "coops": [
//!     { "coop_id": "coop-1", "name": "Coop 1", "temperature_c": 25.0, "humidity_pct": 60.0, "ammonia_ppm": 10.0 }
//!   ],
//!   "devices": [
//!     { "device_id": "device-1", "name": "Device 1", "status": "Online", "battery_pct": 80.0 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{CoopReading, Device};
use crate::store::error::{ErrorContext, FeedError, FeedResult};
use crate::store::feed::ReadingFeed;

/// On-disk layout of a farm document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmDocument {
    #[serde(default)]
    pub coops: Vec<CoopReading>,
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Feed backed by a JSON file that an external process keeps up to date.
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self, operation: &str) -> FeedResult<FarmDocument> {
        let context = || ErrorContext::new(operation).with_feed(self.name());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FeedError::io_with_context(
                format!("Failed to read {}: {}", self.path.display(), e),
                context(),
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            FeedError::parse_with_context(
                format!("Failed to parse {}: {}", self.path.display(), e),
                context(),
            )
        })
    }
}

#[async_trait]
impl ReadingFeed for JsonFileFeed {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn fetch_coop_readings(&self) -> FeedResult<Vec<CoopReading>> {
        Ok(self.load("fetch_coop_readings").await?.coops)
    }

    async fn fetch_devices(&self) -> FeedResult<Vec<Device>> {
        Ok(self.load("fetch_devices").await?.devices)
    }

    async fn fetch_all(&self) -> FeedResult<(Vec<CoopReading>, Vec<Device>)> {
        let document = self.load("fetch_all").await?;
        Ok((document.coops, document.devices))
    }
}
