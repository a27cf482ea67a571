#[cfg(test)]
mod tests {
    use crate::api::{AlertSeverity, AlertSource, CoopId, CoopReading, Device, DeviceId, DeviceStatus};
    use crate::api::{DiseaseRisk, HealthStatus};
    use crate::config::{AlertThresholds, DiseaseRiskThresholds, HealthThresholds};
    use crate::services::thresholds::{build_alerts, disease_risk, farm_health_status};

    fn reading(id: &str, temperature: f64, humidity: f64, ammonia: f64) -> CoopReading {
        CoopReading::new(id, id.to_uppercase(), temperature, humidity, ammonia)
    }

    fn mock_readings() -> Vec<CoopReading> {
        vec![
            CoopReading::new("coop-1", "Coop 1", 25.0, 60.0, 10.0),
            CoopReading::new("coop-2", "Coop 2", 24.0, 58.0, 8.0),
            CoopReading::new("coop-3", "Coop 3", 26.0, 62.0, 12.0),
            CoopReading::new("coop-4", "Coop 4", 23.0, 59.0, 9.0),
        ]
    }

    fn mock_devices() -> Vec<Device> {
        vec![
            Device::new("device-1", "Device 1", DeviceStatus::Online, 80.0),
            Device::new("device-2", "Device 2", DeviceStatus::Offline, 20.0),
            Device::new("device-3", "Device 3", DeviceStatus::Online, 65.0),
        ]
    }

    #[test]
    fn test_health_empty_is_none() {
        assert_eq!(farm_health_status(&[], &HealthThresholds::default()), None);
    }

    #[test]
    fn test_health_good_when_all_within_limits() {
        let readings = vec![reading("a", 22.0, 55.0, 5.0), reading("b", 23.0, 50.0, 10.0)];
        assert_eq!(
            farm_health_status(&readings, &HealthThresholds::default()),
            Some(HealthStatus::Good)
        );
    }

    #[test]
    fn test_health_fair_on_warning_ammonia() {
        assert_eq!(
            farm_health_status(&mock_readings(), &HealthThresholds::default()),
            Some(HealthStatus::Fair)
        );
    }

    #[test]
    fn test_health_fair_on_humidity_outside_band() {
        let thresholds = HealthThresholds::default();
        let dry = vec![reading("a", 22.0, 35.0, 5.0)];
        let damp = vec![reading("a", 22.0, 71.0, 5.0)];
        assert_eq!(farm_health_status(&dry, &thresholds), Some(HealthStatus::Fair));
        assert_eq!(farm_health_status(&damp, &thresholds), Some(HealthStatus::Fair));
    }

    #[test]
    fn test_health_poor_on_critical_ammonia() {
        let readings = vec![reading("a", 22.0, 55.0, 5.0), reading("b", 22.0, 55.0, 16.0)];
        assert_eq!(
            farm_health_status(&readings, &HealthThresholds::default()),
            Some(HealthStatus::Poor)
        );
    }

    #[test]
    fn test_health_implausible_reading_is_never_good() {
        let readings = vec![reading("a", 95.0, 55.0, 5.0)];
        assert_eq!(
            farm_health_status(&readings, &HealthThresholds::default()),
            Some(HealthStatus::Fair)
        );

        let nan = vec![reading("a", 22.0, f64::NAN, 5.0)];
        assert_eq!(
            farm_health_status(&nan, &HealthThresholds::default()),
            Some(HealthStatus::Fair)
        );
    }

    #[test]
    fn test_health_respects_configured_thresholds() {
        let thresholds = HealthThresholds {
            ammonia_warning_ppm: 20.0,
            ammonia_critical_ppm: 30.0,
            ..HealthThresholds::default()
        };
        assert_eq!(
            farm_health_status(&mock_readings(), &thresholds),
            Some(HealthStatus::Good)
        );
    }

    #[test]
    fn test_disease_risk_levels() {
        let thresholds = DiseaseRiskThresholds::default();
        assert_eq!(disease_risk(&[], &thresholds), None);
        assert_eq!(
            disease_risk(&[reading("a", 22.0, 55.0, 5.0)], &thresholds),
            Some(DiseaseRisk::Low)
        );
        assert_eq!(
            disease_risk(&mock_readings(), &thresholds),
            Some(DiseaseRisk::Moderate)
        );
        assert_eq!(
            disease_risk(&[reading("a", 22.0, 80.0, 5.0)], &thresholds),
            Some(DiseaseRisk::High)
        );
        assert_eq!(
            disease_risk(&[reading("a", 22.0, 55.0, -3.0)], &thresholds),
            Some(DiseaseRisk::Moderate)
        );
    }

    #[test]
    fn test_threshold_values_are_exclusive() {
        let thresholds = AlertThresholds {
            ammonia_critical_ppm: 12.0,
        };
        let alerts = build_alerts(&mock_readings(), &[], &thresholds);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_scenario_single_critical_coop_alert() {
        let alerts = build_alerts(&mock_readings(), &[], &AlertThresholds::default());

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].title, "High Ammonia Levels");
        assert_eq!(alerts[0].source, AlertSource::Coop(CoopId::new("coop-3")));
    }

    #[test]
    fn test_scenario_single_offline_device_alert() {
        let alerts = build_alerts(&[], &mock_devices(), &AlertThresholds::default());

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].title, "Device Offline");
        assert_eq!(alerts[0].source, AlertSource::Device(DeviceId::new("device-2")));
    }

    #[test]
    fn test_coop_alerts_come_before_device_alerts() {
        let mut readings = mock_readings();
        readings.push(reading("coop-5", 22.0, 55.0, 14.0));
        let alerts = build_alerts(&readings, &mock_devices(), &AlertThresholds::default());

        let sources: Vec<AlertSource> = alerts.into_iter().map(|a| a.source).collect();
        assert_eq!(
            sources,
            vec![
                AlertSource::Coop(CoopId::new("coop-3")),
                AlertSource::Coop(CoopId::new("coop-5")),
                AlertSource::Device(DeviceId::new("device-2")),
            ]
        );
    }

    #[test]
    fn test_build_alerts_is_repeatable() {
        let first = build_alerts(&mock_readings(), &mock_devices(), &AlertThresholds::default());
        let second = build_alerts(&mock_readings(), &mock_devices(), &AlertThresholds::default());
        assert_eq!(first, second);
    }
}
