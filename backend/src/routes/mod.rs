pub mod alerts;
pub mod chart;
pub mod devices;
pub mod navigation;
pub mod overview;

use serde::{Deserialize, Serialize};

use crate::api::DashboardView;

/// Payload of whichever view is active, tagged with the view's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Projection {
    Overview(overview::OverviewProjection),
    Devices(devices::DevicesProjection),
    DataVisualization(chart::ChartProjection),
    Alerts(alerts::AlertsProjection),
}

impl Projection {
    pub fn view(&self) -> DashboardView {
        match self {
            Projection::Overview(_) => DashboardView::Overview,
            Projection::Devices(_) => DashboardView::Devices,
            Projection::DataVisualization(_) => DashboardView::DataVisualization,
            Projection::Alerts(_) => DashboardView::Alerts,
        }
    }
}
