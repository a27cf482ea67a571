use serde::{Deserialize, Serialize};

use crate::api::CoopId;

/// Plausible sensor envelope for a coop reading.
///
/// Values outside these bounds are passed through untouched but reported by
/// [`CoopReading::out_of_range`].
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-40.0, 60.0);
pub const HUMIDITY_RANGE_PCT: (f64, f64) = (0.0, 100.0);
pub const MIN_AMMONIA_PPM: f64 = 0.0;

/// One of the three environmental metrics measured in every coop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Humidity,
    Ammonia,
}

impl Metric {
    /// Bar order used by the chart projection.
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::Ammonia];

    /// Series key consumed by the renderer.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Ammonia => "ammonia",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Ammonia => "ppm",
        }
    }
}

/// Environmental snapshot of a single coop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoopReading {
    pub coop_id: CoopId,
    pub name: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub ammonia_ppm: f64,
}

impl CoopReading {
    pub fn new(
        coop_id: impl Into<CoopId>,
        name: impl Into<String>,
        temperature_c: f64,
        humidity_pct: f64,
        ammonia_ppm: f64,
    ) -> Self {
        Self {
            coop_id: coop_id.into(),
            name: name.into(),
            temperature_c,
            humidity_pct,
            ammonia_ppm,
        }
    }

    /// Value of a single metric.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature_c,
            Metric::Humidity => self.humidity_pct,
            Metric::Ammonia => self.ammonia_ppm,
        }
    }

    /// Metrics whose value is physically implausible (or not a number).
    pub fn out_of_range(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| !is_plausible(*m, self.metric(*m)))
            .collect()
    }

    pub fn is_plausible(&self) -> bool {
        Metric::ALL
            .into_iter()
            .all(|m| is_plausible(m, self.metric(m)))
    }
}

fn is_plausible(metric: Metric, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    match metric {
        Metric::Temperature => {
            (TEMPERATURE_RANGE_C.0..=TEMPERATURE_RANGE_C.1).contains(&value)
        }
        Metric::Humidity => (HUMIDITY_RANGE_PCT.0..=HUMIDITY_RANGE_PCT.1).contains(&value),
        Metric::Ammonia => value >= MIN_AMMONIA_PPM,
    }
}
