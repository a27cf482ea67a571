use serde::{Deserialize, Serialize};

use crate::api::{CoopId, DeviceId};

/// Alert severity, rendered as the alert variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// What an alert refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum AlertSource {
    Coop(CoopId),
    Device(DeviceId),
}

/// A derived alert. Never stored; recomputed from the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub source: AlertSource,
}

impl Alert {
    pub const HIGH_AMMONIA_TITLE: &'static str = "High Ammonia Levels";
    pub const DEVICE_OFFLINE_TITLE: &'static str = "Device Offline";

    pub fn high_ammonia(coop_id: &CoopId, coop_name: &str) -> Self {
        Self {
            severity: AlertSeverity::Critical,
            title: Self::HIGH_AMMONIA_TITLE.to_string(),
            message: format!(
                "Ammonia levels in {} have exceeded the recommended threshold. Please check ventilation.",
                coop_name
            ),
            source: AlertSource::Coop(coop_id.clone()),
        }
    }

    pub fn device_offline(device_id: &DeviceId, device_name: &str) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            title: Self::DEVICE_OFFLINE_TITLE.to_string(),
            message: format!(
                "{} has gone offline. Please check the connection and battery status.",
                device_name
            ),
            source: AlertSource::Device(device_id.clone()),
        }
    }
}
