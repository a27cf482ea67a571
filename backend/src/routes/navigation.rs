use serde::{Deserialize, Serialize};

use crate::api::DashboardView;

/// One tab button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub view: DashboardView,
    pub label: String,
    pub active: bool,
}
