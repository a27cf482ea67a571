use serde::{Deserialize, Serialize};

use crate::api::{DataStatus, Device};

/// Devices tab payload. `devices` keeps the feed's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicesProjection {
    pub devices: Vec<Device>,
    pub online_count: usize,
    pub offline_count: usize,
    pub data_status: DataStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DeviceStatus;

    #[test]
    fn test_devices_projection_json_shape() {
        let projection = DevicesProjection {
            devices: vec![Device::new("device-1", "Device 1", DeviceStatus::Online, 80.0)],
            online_count: 1,
            offline_count: 0,
            data_status: DataStatus::Live,
        };
        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(json["devices"][0]["device_id"], "device-1");
        assert_eq!(json["devices"][0]["status"], "Online");
        assert_eq!(json["devices"][0]["battery_pct"], 80.0);
    }
}
