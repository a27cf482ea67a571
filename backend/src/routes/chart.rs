use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{CoopId, DataStatus, Metric};

// =========================================================
// Data visualization types
// =========================================================

/// One bar series of the grouped chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Field of [`ChartEntry`] holding this series' value
    pub key: Metric,
    pub label: String,
    pub unit: String,
}

impl From<Metric> for ChartSeries {
    fn from(metric: Metric) -> Self {
        let label = match metric {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Ammonia => "Ammonia",
        };
        Self {
            key: metric,
            label: label.to_string(),
            unit: metric.unit().to_string(),
        }
    }
}

/// One group of bars: a coop and its three metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub coop_id: CoopId,
    pub name: String,
    pub temperature: f64,
    pub humidity: f64,
    pub ammonia: f64,
    pub out_of_range: Vec<Metric>,
}

/// Data visualization tab payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartProjection {
    pub series: Vec<ChartSeries>,
    pub entries: Vec<ChartEntry>,
    /// When the underlying snapshot was fetched
    pub captured_at: Option<DateTime<Utc>>,
    pub data_status: DataStatus,
}

impl ChartProjection {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
