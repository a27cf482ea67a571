//! Projection builder: the exact payload the renderer needs for each tab.
//!
//! Builders take an immutable [`Snapshot`] plus the store's [`DataStatus`]
//! and never touch shared state, so a projection is always derived from one
//! consistent set of readings and devices.

use log::debug;

use crate::api::{
    AlertSeverity, AlertsProjection, ChartEntry, ChartProjection, ChartSeries, CoopReading,
    DashboardView, DataStatus, DevicesProjection, Metric, OverviewProjection, Projection,
    RepresentativeReading,
};
use crate::config::{DashboardConfig, RepresentativeMode};
use crate::store::Snapshot;

use super::thresholds::{build_alerts, disease_risk, farm_health_status};

pub const FARM_AVERAGE_LABEL: &str = "Farm average";

/// Reading shown on the overview's environmental card, or `None` with no coops.
pub fn representative_reading(
    readings: &[CoopReading],
    mode: RepresentativeMode,
) -> Option<RepresentativeReading> {
    match mode {
        RepresentativeMode::First => readings.first().map(|r| RepresentativeReading {
            label: r.name.clone(),
            coop_id: Some(r.coop_id.clone()),
            temperature_c: r.temperature_c,
            humidity_pct: r.humidity_pct,
            ammonia_ppm: r.ammonia_ppm,
            out_of_range: r.out_of_range(),
        }),
        RepresentativeMode::Average => {
            if readings.is_empty() {
                return None;
            }
            let n = readings.len() as f64;
            let mean = |metric: Metric| readings.iter().map(|r| r.metric(metric)).sum::<f64>() / n;
            let averaged = CoopReading::new(
                "",
                FARM_AVERAGE_LABEL,
                mean(Metric::Temperature),
                mean(Metric::Humidity),
                mean(Metric::Ammonia),
            );
            Some(RepresentativeReading {
                label: FARM_AVERAGE_LABEL.to_string(),
                coop_id: None,
                temperature_c: averaged.temperature_c,
                humidity_pct: averaged.humidity_pct,
                ammonia_ppm: averaged.ammonia_ppm,
                out_of_range: averaged.out_of_range(),
            })
        }
    }
}

pub fn build_overview(
    snapshot: &Snapshot,
    status: DataStatus,
    config: &DashboardConfig,
) -> OverviewProjection {
    let readings = &snapshot.coop_readings;
    OverviewProjection {
        health_status: farm_health_status(readings, &config.thresholds.health),
        representative_reading: representative_reading(readings, config.overview.representative),
        disease_risk: disease_risk(readings, &config.thresholds.disease_risk),
        coop_count: readings.len(),
        data_status: status,
    }
}

pub fn build_devices(snapshot: &Snapshot, status: DataStatus) -> DevicesProjection {
    let offline_count = snapshot.devices.iter().filter(|d| d.is_offline()).count();
    DevicesProjection {
        devices: snapshot.devices.clone(),
        online_count: snapshot.devices.len() - offline_count,
        offline_count,
        data_status: status,
    }
}

/// One chart entry per coop, in reading order, with series in bar order.
pub fn build_chart(snapshot: &Snapshot, status: DataStatus) -> ChartProjection {
    let entries = snapshot
        .coop_readings
        .iter()
        .map(|r| ChartEntry {
            coop_id: r.coop_id.clone(),
            name: r.name.clone(),
            temperature: r.temperature_c,
            humidity: r.humidity_pct,
            ammonia: r.ammonia_ppm,
            out_of_range: r.out_of_range(),
        })
        .collect();

    ChartProjection {
        series: Metric::ALL.into_iter().map(ChartSeries::from).collect(),
        entries,
        captured_at: snapshot.fetched_at,
        data_status: status,
    }
}

pub fn build_alerts_projection(
    snapshot: &Snapshot,
    status: DataStatus,
    config: &DashboardConfig,
) -> AlertsProjection {
    let alerts = build_alerts(
        &snapshot.coop_readings,
        &snapshot.devices,
        &config.thresholds.alerts,
    );
    let critical_count = alerts
        .iter()
        .filter(|a| a.severity == AlertSeverity::Critical)
        .count();
    AlertsProjection {
        warning_count: alerts.len() - critical_count,
        critical_count,
        alerts,
        data_status: status,
    }
}

/// Build the payload for `view`.
pub fn build_projection(
    view: DashboardView,
    snapshot: &Snapshot,
    status: DataStatus,
    config: &DashboardConfig,
) -> Projection {
    debug!(
        "Building {} projection from snapshot version {} ({:?})",
        view, snapshot.version, status
    );
    match view {
        DashboardView::Overview => Projection::Overview(build_overview(snapshot, status, config)),
        DashboardView::Devices => Projection::Devices(build_devices(snapshot, status)),
        DashboardView::DataVisualization => {
            Projection::DataVisualization(build_chart(snapshot, status))
        }
        DashboardView::Alerts => {
            Projection::Alerts(build_alerts_projection(snapshot, status, config))
        }
    }
}
