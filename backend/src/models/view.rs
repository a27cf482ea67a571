use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// The dashboard tabs. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    Overview,
    Devices,
    DataVisualization,
    Alerts,
}

impl DashboardView {
    /// Tabs in display order.
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Overview,
        DashboardView::Devices,
        DashboardView::DataVisualization,
        DashboardView::Alerts,
    ];

    /// Tab button label.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Devices => "Devices",
            DashboardView::DataVisualization => "Data Visualization",
            DashboardView::Alerts => "Alerts",
        }
    }

    /// Stable machine name, as used in URLs and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::Devices => "devices",
            DashboardView::DataVisualization => "data_visualization",
            DashboardView::Alerts => "alerts",
        }
    }
}

impl FromStr for DashboardView {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "devices" => Ok(Self::Devices),
            "data" | "data-visualization" | "data_visualization" => Ok(Self::DataVisualization),
            "alerts" => Ok(Self::Alerts),
            _ => Err(DashboardError::InvalidTabState(s.to_string())),
        }
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
