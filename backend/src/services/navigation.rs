use log::debug;

use crate::api::{DashboardView, TabInfo};
use crate::error::DashboardResult;

/// Holds the single active tab. Starts on `Overview`; any tab can be
/// selected from any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: DashboardView,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> DashboardView {
        self.active
    }

    /// Make `target` the active tab. Returns whether the tab changed;
    /// selecting the already-active tab leaves everything as it was.
    pub fn select_tab(&mut self, target: DashboardView) -> bool {
        if self.active == target {
            return false;
        }
        debug!("Switching tab {} -> {}", self.active, target);
        self.active = target;
        true
    }

    /// Select a tab by its name. Unknown names are rejected and the active
    /// tab is left untouched.
    pub fn select_tab_named(&mut self, name: &str) -> DashboardResult<bool> {
        let target: DashboardView = name.parse()?;
        Ok(self.select_tab(target))
    }

    /// All tabs in display order, flagged with which one is active.
    pub fn tabs(&self) -> Vec<TabInfo> {
        DashboardView::ALL
            .into_iter()
            .map(|view| TabInfo {
                view,
                label: view.label().to_string(),
                active: view == self.active,
            })
            .collect()
    }
}
