use serde::{Deserialize, Serialize};

use crate::api::{Alert, DataStatus};

/// Alerts tab payload; `alerts` is exactly what the evaluator produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsProjection {
    pub alerts: Vec<Alert>,
    pub critical_count: usize,
    pub warning_count: usize,
    pub data_status: DataStatus,
}
