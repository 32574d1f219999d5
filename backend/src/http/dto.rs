//! Data Transfer Objects for the HTTP API.
//!
//! View models and control definitions are re-exported from the routes
//! module since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Controls
    DashboardControls, DropdownOption, PayloadSlider, SiteDropdown, SliderMark,
    // Pie
    PieSlice, PieViewModel, SliceLabel,
    // Scatter
    ScatterPoint, ScatterViewModel,
    // Sessions
    EventOutcome, SessionSnapshot,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Distinct launch sites in the dataset
    pub sites: usize,
    /// SHA-256 of the source CSV
    pub dataset_checksum: Option<String>,
    /// Open dashboard sessions
    pub sessions: usize,
}

/// Query parameters for the pie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Site name or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Site name or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Request body for a site dropdown change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteChangeRequest {
    pub site: String,
}

/// Request body for a payload slider change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeChangeRequest {
    pub low: f64,
    pub high: f64,
}
