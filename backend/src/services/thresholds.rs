//! Threshold evaluation: qualitative health, disease risk and alerts.
//!
//! Every function here is pure over its inputs. Comparisons are strict, so a
//! value sitting exactly on a threshold does not trip it.

use crate::api::{Alert, CoopReading, Device, DiseaseRisk, HealthStatus};
use crate::config::{AlertThresholds, DiseaseRiskThresholds, HealthThresholds};

/// Farm-wide health derived from every coop reading.
///
/// Starts at `Good`. One level is lost if any coop has ammonia above the
/// warning threshold, humidity outside the comfort band, or an implausible
/// value. A second level is lost if any coop has ammonia above the critical
/// threshold. Returns `None` when there are no readings.
pub fn farm_health_status(
    readings: &[CoopReading],
    thresholds: &HealthThresholds,
) -> Option<HealthStatus> {
    if readings.is_empty() {
        return None;
    }

    let warning = readings.iter().any(|r| {
        r.ammonia_ppm > thresholds.ammonia_warning_ppm
            || r.humidity_pct < thresholds.humidity_min_pct
            || r.humidity_pct > thresholds.humidity_max_pct
            || !r.is_plausible()
    });
    let critical = readings
        .iter()
        .any(|r| r.ammonia_ppm > thresholds.ammonia_critical_ppm);

    let downgrades = u8::from(warning || critical) + u8::from(critical);
    Some(HealthStatus::from_downgrades(downgrades))
}

/// Disease risk derived from ammonia and humidity across every coop.
///
/// Returns `None` when there are no readings.
pub fn disease_risk(
    readings: &[CoopReading],
    thresholds: &DiseaseRiskThresholds,
) -> Option<DiseaseRisk> {
    readings.iter().map(|r| coop_risk(r, thresholds)).max()
}

fn coop_risk(reading: &CoopReading, thresholds: &DiseaseRiskThresholds) -> DiseaseRisk {
    if reading.ammonia_ppm > thresholds.ammonia_high_ppm
        || reading.humidity_pct > thresholds.humidity_high_pct
    {
        DiseaseRisk::High
    } else if reading.ammonia_ppm > thresholds.ammonia_moderate_ppm
        || reading.humidity_pct > thresholds.humidity_moderate_pct
        || !reading.is_plausible()
    {
        DiseaseRisk::Moderate
    } else {
        DiseaseRisk::Low
    }
}

/// Alerts for the current data: one `Critical` per coop above the ammonia
/// threshold (in reading order), then one `Warning` per offline device (in
/// device order).
pub fn build_alerts(
    readings: &[CoopReading],
    devices: &[Device],
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let coop_alerts = readings
        .iter()
        .filter(|r| r.ammonia_ppm > thresholds.ammonia_critical_ppm)
        .map(|r| Alert::high_ammonia(&r.coop_id, &r.name));

    let device_alerts = devices
        .iter()
        .filter(|d| d.is_offline())
        .map(|d| Alert::device_offline(&d.device_id, &d.name));

    coop_alerts.chain(device_alerts).collect()
}
