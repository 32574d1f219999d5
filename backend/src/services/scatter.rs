//! Scatter view: payload mass against launch outcome.

use crate::api::{ScatterPoint, ScatterViewModel};
use crate::models::{LaunchDataset, PayloadRange, SiteSelection};

const SCATTER_TITLE_PREFIX: &str = "Payload and Launch Outcome";

/// Title of the scatter chart for the selected site.
pub fn scatter_title(selected_site: &SiteSelection) -> String {
    match selected_site {
        SiteSelection::All => format!("{} - ALL Launch Sites", SCATTER_TITLE_PREFIX),
        SiteSelection::Site(site) => format!("{} - Launch Site {}", SCATTER_TITLE_PREFIX, site),
    }
}

/// Compute the scatter chart for the selected site and payload window.
///
/// Both range bounds are inclusive. Every matching record becomes one point in
/// dataset order; nothing is aggregated. An inverted range or an unknown site
/// yields an empty chart.
pub fn compute_scatter_view(
    dataset: &LaunchDataset,
    selected_site: &SiteSelection,
    payload_range: PayloadRange,
) -> ScatterViewModel {
    let points = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| selected_site.matches(&r.site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
            site: r.site.clone(),
        })
        .collect();

    ScatterViewModel {
        title: scatter_title(selected_site),
        points,
    }
}
