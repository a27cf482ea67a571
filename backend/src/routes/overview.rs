use serde::{Deserialize, Serialize};

use crate::api::{CoopId, DataStatus, Metric};

// =========================================================
// Overview types
// =========================================================

/// Qualitative farm health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    /// Status after the given number of one-level downgrades from Good.
    pub fn from_downgrades(downgrades: u8) -> Self {
        match downgrades {
            0 => HealthStatus::Good,
            1 => HealthStatus::Fair,
            _ => HealthStatus::Poor,
        }
    }
}

/// Qualitative disease risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiseaseRisk {
    Low,
    Moderate,
    High,
}

/// Reading shown on the environmental conditions card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeReading {
    /// Coop name, or "Farm average"
    pub label: String,
    /// Set when the reading is a single coop's
    pub coop_id: Option<CoopId>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub ammonia_ppm: f64,
    pub out_of_range: Vec<Metric>,
}

/// Overview tab payload.
///
/// With no coop readings the three indicators are `None` and
/// `data_status` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewProjection {
    pub health_status: Option<HealthStatus>,
    pub representative_reading: Option<RepresentativeReading>,
    pub disease_risk: Option<DiseaseRisk>,
    pub coop_count: usize,
    pub data_status: DataStatus,
}

impl OverviewProjection {
    pub fn has_data(&self) -> bool {
        self.coop_count > 0
    }
}
