//! Public API surface for the dashboard core.
//!
//! This file consolidates the identifier types and the projection DTOs handed
//! to the renderer. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::{
    Alert, AlertSeverity, AlertSource, BatteryLevel, CoopReading, DashboardView, Device,
    DeviceStatus, Metric,
};
pub use crate::routes::alerts::AlertsProjection;
pub use crate::routes::chart::ChartEntry;
pub use crate::routes::chart::ChartProjection;
pub use crate::routes::chart::ChartSeries;
pub use crate::routes::devices::DevicesProjection;
pub use crate::routes::navigation::TabInfo;
pub use crate::routes::overview::DiseaseRisk;
pub use crate::routes::overview::HealthStatus;
pub use crate::routes::overview::OverviewProjection;
pub use crate::routes::overview::RepresentativeReading;
pub use crate::routes::Projection;
pub use crate::store::DataStatus;

crate::define_id_type!(CoopId);
crate::define_id_type!(DeviceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coop_id_display() {
        let id = CoopId::new("coop-3");
        assert_eq!(id.to_string(), "coop-3");
        assert_eq!(id.as_str(), "coop-3");
    }

    #[test]
    fn test_device_id_serializes_transparently() {
        let id = DeviceId::from("dev-2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dev-2\"");

        let back: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_into_string() {
        let raw: String = CoopId::new("coop-1").into();
        assert_eq!(raw, "coop-1");
    }
}
