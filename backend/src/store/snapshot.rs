//! Reading store: the current immutable snapshot plus its freshness.
//!
//! A refresh builds a complete new [`Snapshot`] and swaps the shared
//! reference in one write. Readers clone the `Arc` and keep a consistent
//! view for as long as they need it, even if a refresh lands meanwhile.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::FeedResult;
use super::feed::ReadingFeed;
use crate::api::{CoopReading, Device};

/// Freshness of the data behind every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataStatus {
    /// Last fetch succeeded and returned coop readings.
    Live,
    /// Last fetch succeeded but returned no coop readings.
    Empty,
    /// Last fetch failed; the previous snapshot is still being served.
    Stale,
    /// No fetch has ever succeeded.
    Unavailable,
}

impl DataStatus {
    /// Whether the renderer should show a degraded-state indicator.
    pub fn is_degraded(&self) -> bool {
        matches!(self, DataStatus::Stale | DataStatus::Unavailable)
    }

    fn after_success(snapshot: &Snapshot) -> Self {
        if snapshot.coop_readings.is_empty() {
            DataStatus::Empty
        } else {
            DataStatus::Live
        }
    }
}

/// Immutable set of readings and devices captured by one refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub coop_readings: Vec<CoopReading>,
    pub devices: Vec<Device>,
    /// `None` until the first successful fetch.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Increases by one on every successful refresh; 0 for the initial empty snapshot.
    pub version: u64,
}

impl Snapshot {
    /// Snapshot used before any data has been fetched.
    pub fn empty() -> Self {
        Self {
            coop_readings: Vec::new(),
            devices: Vec::new(),
            fetched_at: None,
            version: 0,
        }
    }

    /// Build a snapshot, keeping only the first record for each id.
    pub fn new(
        coop_readings: Vec<CoopReading>,
        devices: Vec<Device>,
        fetched_at: DateTime<Utc>,
        version: u64,
    ) -> Self {
        let mut seen_coops = HashSet::new();
        let coop_readings = coop_readings
            .into_iter()
            .filter(|r| {
                let fresh = seen_coops.insert(r.coop_id.clone());
                if !fresh {
                    warn!("Dropping duplicate reading for coop {}", r.coop_id);
                }
                fresh
            })
            .collect();

        let mut seen_devices = HashSet::new();
        let devices = devices
            .into_iter()
            .filter(|d| {
                let fresh = seen_devices.insert(d.device_id.clone());
                if !fresh {
                    warn!("Dropping duplicate record for device {}", d.device_id);
                }
                fresh
            })
            .collect();

        Self {
            coop_readings,
            devices,
            fetched_at: Some(fetched_at),
            version,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Consistent pair of snapshot and status handed to readers.
#[derive(Debug, Clone)]
pub struct StoreView {
    pub snapshot: Arc<Snapshot>,
    pub status: DataStatus,
    /// Message of the last failed refresh, cleared on success.
    pub last_error: Option<String>,
}

/// Holds the current snapshot of coop readings and devices.
pub struct ReadingStore {
    state: RwLock<StoreView>,
    /// Serializes refreshes so swaps happen in fetch order.
    refresh_lock: tokio::sync::Mutex<()>,
}

impl ReadingStore {
    /// Create a store with no data; status is `Unavailable` until the first refresh.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreView {
                snapshot: Arc::new(Snapshot::empty()),
                status: DataStatus::Unavailable,
                last_error: None,
            }),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a store already holding the given data.
    pub fn with_data(coop_readings: Vec<CoopReading>, devices: Vec<Device>) -> Self {
        let store = Self::new();
        store.replace(coop_readings, devices);
        store
    }

    /// Current snapshot, status and last error, read together.
    pub fn view(&self) -> StoreView {
        self.state.read().clone()
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.read().snapshot)
    }

    pub fn status(&self) -> DataStatus {
        self.state.read().status
    }

    /// Coop readings in display order.
    pub fn coop_readings(&self) -> Vec<CoopReading> {
        self.snapshot().coop_readings.clone()
    }

    /// Devices in display order.
    pub fn devices(&self) -> Vec<Device> {
        self.snapshot().devices.clone()
    }

    /// Swap in a wholesale replacement of the data.
    pub fn replace(&self, coop_readings: Vec<CoopReading>, devices: Vec<Device>) -> Arc<Snapshot> {
        let mut state = self.state.write();
        let snapshot = Arc::new(Snapshot::new(
            coop_readings,
            devices,
            Utc::now(),
            state.snapshot.version + 1,
        ));
        state.status = DataStatus::after_success(&snapshot);
        state.snapshot = Arc::clone(&snapshot);
        state.last_error = None;
        snapshot
    }

    /// Fetch both sequences from the feed and swap them in together.
    ///
    /// On failure the previous snapshot is kept and the status degrades to
    /// `Stale` (or stays `Unavailable` if nothing was ever fetched). The
    /// error is returned so callers can report it; nothing else is affected.
    ///
    /// Concurrent refreshes run one at a time, so a slow fetch can never
    /// overwrite the result of one that started after it.
    pub async fn refresh(&self, feed: &dyn ReadingFeed) -> FeedResult<Arc<Snapshot>> {
        let _guard = self.refresh_lock.lock().await;

        match feed.fetch_all().await {
            Ok((coop_readings, devices)) => {
                let snapshot = self.replace(coop_readings, devices);
                info!(
                    "Refreshed from {}: {} coops, {} devices (version {})",
                    feed.name(),
                    snapshot.coop_readings.len(),
                    snapshot.devices.len(),
                    snapshot.version
                );
                Ok(snapshot)
            }
            Err(e) => {
                self.mark_failed(&e.to_string());
                warn!("Refresh from {} failed: {}", feed.name(), e);
                Err(e)
            }
        }
    }

    fn mark_failed(&self, message: &str) {
        let mut state = self.state.write();
        state.status = if state.snapshot.fetched_at.is_some() {
            DataStatus::Stale
        } else {
            DataStatus::Unavailable
        };
        state.last_error = Some(message.to_string());
        debug!("Store status is now {:?}", state.status);
    }
}

impl Default for ReadingStore {
    fn default() -> Self {
        Self::new()
    }
}
