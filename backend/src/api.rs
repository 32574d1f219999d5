//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::controls::DashboardControls;
pub use crate::routes::controls::DropdownOption;
pub use crate::routes::controls::PayloadSlider;
pub use crate::routes::controls::SiteDropdown;
pub use crate::routes::controls::SliderMark;
pub use crate::routes::pie::PieSlice;
pub use crate::routes::pie::PieViewModel;
pub use crate::routes::pie::SliceLabel;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::scatter::ScatterViewModel;
pub use crate::routes::session::EventOutcome;
pub use crate::routes::session::SessionSnapshot;

pub use crate::models::{
    LaunchRecord, OutcomeClass, PayloadRange, SelectionEvent, SelectionState, SiteSelection,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard session identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(SessionId)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
