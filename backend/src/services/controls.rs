//! Input control definitions derived from the loaded dataset.

use crate::api::{DashboardControls, DropdownOption, PayloadSlider, SiteDropdown, SliderMark};
use crate::models::selection::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use crate::models::{LaunchDataset, PayloadRange, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";

const SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// Build the dropdown and range control definitions.
///
/// Dropdown options are "ALL" followed by every site in the dataset, in
/// first-appearance order. The range control defaults to the dataset's
/// payload extent.
pub fn build_controls(dataset: &LaunchDataset) -> DashboardControls {
    let options = std::iter::once(ALL_SITES)
        .chain(dataset.sites().iter().map(String::as_str))
        .map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        })
        .collect();

    let default_range = PayloadRange::for_dataset(dataset);
    let marks = SLIDER_MARKS
        .iter()
        .map(|&value| SliderMark {
            value,
            label: format!("{} Kg", value),
        })
        .collect();

    DashboardControls {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: SiteDropdown {
            id: SITE_DROPDOWN_ID.to_string(),
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a launch site here".to_string(),
            searchable: true,
        },
        payload_slider: PayloadSlider {
            id: PAYLOAD_SLIDER_ID.to_string(),
            label: "Payload range (Kg):".to_string(),
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            value: [default_range.low, default_range.high],
            marks,
        },
    }
}
