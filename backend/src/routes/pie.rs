use serde::{Deserialize, Serialize};

use crate::models::OutcomeClass;

// =========================================================
// Pie chart types + route
// =========================================================

/// Panel that displays the pie view.
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";

/// Slice label: a site name in ALL mode, an outcome class for a single site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceLabel {
    Site(String),
    Outcome(OutcomeClass),
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: SliceLabel,
    pub count: usize,
}

impl PieSlice {
    pub fn site(site: impl Into<String>, count: usize) -> Self {
        Self {
            label: SliceLabel::Site(site.into()),
            count,
        }
    }

    pub fn outcome(outcome: OutcomeClass, count: usize) -> Self {
        Self {
            label: SliceLabel::Outcome(outcome),
            count,
        }
    }
}

/// Renderer-ready pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieViewModel {
    pub title: String,
    /// Slices in first-appearance order of their label.
    pub slices: Vec<PieSlice>,
    /// Sum of all slice counts.
    pub total: usize,
}

/// Route function name constant for the pie view
pub const GET_PIE_VIEW: &str = "get_pie_view";
