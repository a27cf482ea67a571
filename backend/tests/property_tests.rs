//! Property tests for the threshold evaluator, the chart projection and
//! tab navigation.

use chrono::Utc;
use proptest::prelude::*;

use coop_dashboard::api::{CoopReading, DashboardView, DataStatus, Device, DeviceStatus};
use coop_dashboard::config::{AlertThresholds, HealthThresholds};
use coop_dashboard::services::projections::build_chart;
use coop_dashboard::services::{build_alerts, farm_health_status, ViewSelector};
use coop_dashboard::store::Snapshot;

fn reading_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (-10.0..45.0f64, 20.0..95.0f64, 0.0..40.0f64)
}

fn readings_from(values: &[(f64, f64, f64)]) -> Vec<CoopReading> {
    values
        .iter()
        .enumerate()
        .map(|(i, (t, h, a))| CoopReading::new(format!("coop-{}", i), format!("Coop {}", i), *t, *h, *a))
        .collect()
}

fn devices_from(flags: &[(bool, f64)]) -> Vec<Device> {
    flags
        .iter()
        .enumerate()
        .map(|(i, (online, battery))| {
            let status = if *online { DeviceStatus::Online } else { DeviceStatus::Offline };
            Device::new(format!("device-{}", i), format!("Device {}", i), status, *battery)
        })
        .collect()
}

fn view_strategy() -> impl Strategy<Value = DashboardView> {
    prop::sample::select(DashboardView::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_health_never_improves_with_higher_ammonia(
        values in prop::collection::vec(reading_strategy(), 1..12),
        extra in 0.0..30.0f64,
        humidity in 20.0..95.0f64,
    ) {
        let thresholds = HealthThresholds::default();
        let mut readings = readings_from(&values);
        let before = farm_health_status(&readings, &thresholds).unwrap();

        let max_ammonia = readings.iter().map(|r| r.ammonia_ppm).fold(f64::MIN, f64::max);
        readings.push(CoopReading::new("coop-extra", "Extra", 20.0, humidity, max_ammonia + extra));
        let after = farm_health_status(&readings, &thresholds).unwrap();

        prop_assert!(after >= before);
    }

    #[test]
    fn prop_alerts_are_deterministic(
        values in prop::collection::vec(reading_strategy(), 0..12),
        flags in prop::collection::vec((any::<bool>(), 0.0..100.0f64), 0..12),
    ) {
        let readings = readings_from(&values);
        let devices = devices_from(&flags);
        let thresholds = AlertThresholds::default();

        prop_assert_eq!(
            build_alerts(&readings, &devices, &thresholds),
            build_alerts(&readings, &devices, &thresholds)
        );
    }

    #[test]
    fn prop_one_warning_per_offline_device(
        flags in prop::collection::vec((any::<bool>(), -20.0..120.0f64), 0..20),
    ) {
        let devices = devices_from(&flags);
        let offline = flags.iter().filter(|(online, _)| !online).count();
        let alerts = build_alerts(&[], &devices, &AlertThresholds::default());

        prop_assert_eq!(alerts.len(), offline);
        for device in &devices {
            prop_assert!(device.battery_pct.value() >= 0.0 && device.battery_pct.value() <= 100.0);
        }
    }

    #[test]
    fn prop_chart_mirrors_readings(
        values in prop::collection::vec(reading_strategy(), 0..16),
        seed in any::<u64>(),
    ) {
        let mut readings = readings_from(&values);
        if !readings.is_empty() {
            let len = readings.len();
            readings.rotate_left((seed as usize) % len);
        }
        let snapshot = Snapshot::new(readings.clone(), vec![], Utc::now(), 1);
        let chart = build_chart(&snapshot, DataStatus::Live);

        prop_assert_eq!(chart.entries.len(), readings.len());
        for (entry, reading) in chart.entries.iter().zip(&readings) {
            prop_assert_eq!(&entry.coop_id, &reading.coop_id);
            prop_assert_eq!(entry.temperature, reading.temperature_c);
            prop_assert_eq!(entry.humidity, reading.humidity_pct);
            prop_assert_eq!(entry.ammonia, reading.ammonia_ppm);
        }
    }

    #[test]
    fn prop_select_tab_is_idempotent(
        history in prop::collection::vec(view_strategy(), 0..8),
        target in view_strategy(),
    ) {
        let mut selector = ViewSelector::new();
        for view in history {
            selector.select_tab(view);
        }

        selector.select_tab(target);
        let after_first = selector.active_tab();
        prop_assert!(!selector.select_tab(target));
        prop_assert_eq!(selector.active_tab(), after_first);
        prop_assert_eq!(after_first, target);
    }
}
