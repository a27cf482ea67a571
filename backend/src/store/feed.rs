//! Feed trait for the external data collaborator.
//!
//! A feed is where coop readings and device records come from. The store
//! only ever reads through this trait; how a feed obtains its data (sensors,
//! a message bus, a file) is outside the dashboard core.

use async_trait::async_trait;

use super::error::FeedResult;
use crate::api::{CoopReading, Device};

/// Source of coop readings and device records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReadingFeed: Send + Sync {
    /// Short human-readable name used in logs and health output.
    fn name(&self) -> String;

    /// Fetch the current reading of every coop.
    ///
    /// # Returns
    /// * `Ok(Vec<CoopReading>)` - Readings in display order (may be empty)
    /// * `Err(FeedError)` - If upstream data is unavailable
    async fn fetch_coop_readings(&self) -> FeedResult<Vec<CoopReading>>;

    /// Fetch every known device.
    ///
    /// # Returns
    /// * `Ok(Vec<Device>)` - Devices in display order (may be empty)
    /// * `Err(FeedError)` - If upstream data is unavailable
    async fn fetch_devices(&self) -> FeedResult<Vec<Device>>;

    /// Fetch coop readings and devices as one consistent pair.
    ///
    /// The default calls the two fetches in turn. Feeds whose source can
    /// change between those calls override this to read both from the same
    /// version of their data.
    async fn fetch_all(&self) -> FeedResult<(Vec<CoopReading>, Vec<Device>)> {
        let coop_readings = self.fetch_coop_readings().await?;
        let devices = self.fetch_devices().await?;
        Ok((coop_readings, devices))
    }
}
