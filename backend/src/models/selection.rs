//! Current dashboard selection and the events that change it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dataset::LaunchDataset;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Lower bound of the payload range control, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the payload range control, in kg.
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Value of the site dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record launched from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::parse(value)
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload mass window in kg. Both bounds are inclusive.
///
/// `low <= high` is enforced by the range control, not here: an inverted
/// range simply matches nothing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Full extent of the range control.
    pub fn slider_bounds() -> Self {
        Self::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX)
    }

    /// Default control value: the dataset's payload extent.
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        dataset
            .payload_bounds()
            .map(|(low, high)| Self::new(low, high))
            .unwrap_or_else(Self::slider_bounds)
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

/// Which control an event came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventChannel {
    SiteDropdown,
    PayloadSlider,
}

impl EventChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            EventChannel::SiteDropdown => "site-dropdown",
            EventChannel::PayloadSlider => "payload-slider",
        }
    }
}

/// A user interaction. Each event replaces exactly one selection field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SelectionEvent {
    SiteChanged { site: SiteSelection },
    RangeChanged { range: PayloadRange },
}

impl SelectionEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            SelectionEvent::SiteChanged { .. } => EventChannel::SiteDropdown,
            SelectionEvent::RangeChanged { .. } => EventChannel::PayloadSlider,
        }
    }
}

/// The two current control values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn new(selected_site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            selected_site,
            payload_range,
        }
    }

    /// Control defaults: "ALL" and the dataset's payload extent.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Self::new(SiteSelection::All, PayloadRange::for_dataset(dataset))
    }

    pub fn apply(&mut self, event: &SelectionEvent) {
        match event {
            SelectionEvent::SiteChanged { site } => self.selected_site = site.clone(),
            SelectionEvent::RangeChanged { range } => self.payload_range = *range,
        }
    }
}
