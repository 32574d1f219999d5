use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard control definitions + route
// =========================================================

/// One option of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Single-select site control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Labeled tick on the payload range control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Dual-ended payload range control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Default `[low, high]`: the dataset's payload extent.
    pub value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

/// Everything a client needs to draw the input controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardControls {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
}

/// Route function name constant for the control definitions
pub const GET_CONTROLS: &str = "get_controls";
