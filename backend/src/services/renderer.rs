//! View renderer interface and the in-memory panel board.

use serde::{Deserialize, Serialize};

use crate::api::{PieViewModel, ScatterViewModel};
use crate::routes::pie::SUCCESS_PIE_CHART;
use crate::routes::scatter::SUCCESS_PAYLOAD_SCATTER_CHART;

/// Chart panel on the dashboard page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl PanelId {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::SuccessPieChart => SUCCESS_PIE_CHART,
            PanelId::SuccessPayloadScatterChart => SUCCESS_PAYLOAD_SCATTER_CHART,
        }
    }
}

/// A renderer-ready view for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    Pie(PieViewModel),
    Scatter(ScatterViewModel),
}

/// Consumer of computed views.
///
/// Rendering replaces the panel's current chart and cannot fail; an empty
/// view model renders an empty chart.
pub trait ViewRenderer {
    fn render(&mut self, panel: PanelId, view: ViewModel);
}

/// Keeps the latest view of each panel. Used as the renderer of HTTP sessions,
/// whose browser page draws whatever the board holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelBoard {
    pie: Option<PieViewModel>,
    scatter: Option<ScatterViewModel>,
    renders: u64,
}

impl PanelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pie(&self) -> Option<&PieViewModel> {
        self.pie.as_ref()
    }

    pub fn scatter(&self) -> Option<&ScatterViewModel> {
        self.scatter.as_ref()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl ViewRenderer for PanelBoard {
    fn render(&mut self, panel: PanelId, view: ViewModel) {
        self.renders += 1;
        match (panel, view) {
            (PanelId::SuccessPieChart, ViewModel::Pie(pie)) => self.pie = Some(pie),
            (PanelId::SuccessPayloadScatterChart, ViewModel::Scatter(scatter)) => {
                self.scatter = Some(scatter)
            }
            (panel, _) => {
                log::warn!("Ignoring view of the wrong kind for panel {}", panel.as_str());
            }
        }
    }
}
