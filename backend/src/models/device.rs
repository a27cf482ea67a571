use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::api::DeviceId;

/// Connectivity state reported by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    #[serde(alias = "online", alias = "ONLINE")]
    Online,
    #[serde(alias = "offline", alias = "OFFLINE")]
    Offline,
}

impl FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Unknown device status: {}", s)),
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceStatus::Online => write!(f, "Online"),
            DeviceStatus::Offline => write!(f, "Offline"),
        }
    }
}

/// Battery charge in percent, always within `[0, 100]`.
///
/// Every construction path clamps, deserialization included. A NaN input
/// becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct BatteryLevel(f64);

impl BatteryLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(pct: f64) -> Self {
        if pct.is_nan() {
            warn!("Battery reading is NaN, treating as {}%", Self::MIN);
            return BatteryLevel(Self::MIN);
        }
        let clamped = pct.clamp(Self::MIN, Self::MAX);
        if clamped != pct {
            warn!("Battery reading {}% outside [0, 100], clamped to {}%", pct, clamped);
        }
        BatteryLevel(clamped)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for BatteryLevel {
    fn from(pct: f64) -> Self {
        BatteryLevel::new(pct)
    }
}

impl From<BatteryLevel> for f64 {
    fn from(level: BatteryLevel) -> Self {
        level.0
    }
}

/// A networked sensor/actuator unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: DeviceId,
    pub name: String,
    pub status: DeviceStatus,
    pub battery_pct: BatteryLevel,
}

impl Device {
    pub fn new(
        device_id: impl Into<DeviceId>,
        name: impl Into<String>,
        status: DeviceStatus,
        battery_pct: f64,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            status,
            battery_pct: BatteryLevel::new(battery_pct),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.status == DeviceStatus::Offline
    }
}
