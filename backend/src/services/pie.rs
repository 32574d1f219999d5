//! Pie view: successful launches per site, or outcome split for one site.

use std::collections::HashMap;
use std::hash::Hash;

use crate::api::{PieSlice, PieViewModel};
use crate::models::{LaunchDataset, SiteSelection};

/// Title of the pie chart when every site is selected.
pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches By Site";

/// Title of the pie chart for a single site.
pub fn site_pie_title(site: &str) -> String {
    format!(
        "Successful (1) versus Unsuccessful (0) Launches for Site {}",
        site
    )
}

/// Count occurrences of each key, keeping first-appearance order.
pub(crate) fn group_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, 1));
            }
        }
    }

    groups
}

/// Compute the pie chart for the selected site.
///
/// With "ALL", failures are filtered out before grouping by site, so a site
/// with no successful launch gets no slice at all. For a concrete site, its
/// launches are grouped by outcome class and only classes that occur are
/// emitted. An unknown site yields an empty chart.
pub fn compute_pie_view(dataset: &LaunchDataset, selected_site: &SiteSelection) -> PieViewModel {
    let (title, slices): (String, Vec<PieSlice>) = match selected_site {
        SiteSelection::All => {
            let successes = dataset
                .records()
                .iter()
                .filter(|r| r.outcome.is_success())
                .map(|r| r.site.as_str());
            let slices = group_counts(successes)
                .into_iter()
                .map(|(site, count)| PieSlice::site(site, count))
                .collect();
            (ALL_SITES_PIE_TITLE.to_string(), slices)
        }
        SiteSelection::Site(site) => {
            let outcomes = dataset
                .records()
                .iter()
                .filter(|r| &r.site == site)
                .map(|r| r.outcome);
            let slices = group_counts(outcomes)
                .into_iter()
                .map(|(outcome, count)| PieSlice::outcome(outcome, count))
                .collect();
            (site_pie_title(site), slices)
        }
    };

    let total = slices.iter().map(|s| s.count).sum();
    PieViewModel {
        title,
        slices,
        total,
    }
}
