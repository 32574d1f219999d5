//! Properties of the aggregation engine over arbitrary datasets, plus the
//! worked example and the bundled fixture.

mod support;

use proptest::prelude::*;

use spacex_dash::api::{PieSlice, SliceLabel};
use spacex_dash::models::{
    LaunchDataset, LaunchRecord, OutcomeClass, PayloadRange, SiteSelection,
};
use spacex_dash::services::{compute_pie_view, compute_scatter_view};

use support::launch;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn arb_record() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0u32..=100, any::<bool>(), 0..BOOSTERS.len()).prop_map(
        |(site, payload, success, booster)| {
            let outcome = if success {
                OutcomeClass::Success
            } else {
                OutcomeClass::Failure
            };
            // Payloads on a 100 kg grid so that boundary hits are common.
            LaunchRecord::new(SITES[site], payload as f64 * 100.0, outcome, BOOSTERS[booster])
        },
    )
}

fn arb_dataset() -> impl Strategy<Value = LaunchDataset> {
    prop::collection::vec(arb_record(), 0..40).prop_map(LaunchDataset::new)
}

fn arb_site() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        (0..SITES.len()).prop_map(|i| SiteSelection::parse(SITES[i])),
        Just(SiteSelection::parse("Boca Chica")),
    ]
}

proptest! {
    #[test]
    fn all_pie_has_one_slice_per_successful_site(dataset in arb_dataset()) {
        let view = compute_pie_view(&dataset, &SiteSelection::All);

        let sum: usize = view.slices.iter().map(|s| s.count).sum();
        prop_assert_eq!(sum, dataset.success_count());
        prop_assert_eq!(view.total, sum);

        for site in SITES {
            let successes = dataset
                .records()
                .iter()
                .filter(|r| r.site == site && r.outcome.is_success())
                .count();
            let slices: Vec<&PieSlice> = view
                .slices
                .iter()
                .filter(|s| s.label == SliceLabel::Site(site.to_string()))
                .collect();
            if successes == 0 {
                prop_assert!(slices.is_empty());
            } else {
                prop_assert_eq!(slices.len(), 1);
                prop_assert_eq!(slices[0].count, successes);
            }
        }
    }

    #[test]
    fn site_pie_partitions_site_records(dataset in arb_dataset(), index in 0..SITES.len()) {
        let site = SITES[index];
        let view = compute_pie_view(&dataset, &SiteSelection::parse(site));

        let site_records: Vec<&LaunchRecord> =
            dataset.records().iter().filter(|r| r.site == site).collect();
        let sum: usize = view.slices.iter().map(|s| s.count).sum();
        prop_assert_eq!(sum, site_records.len());

        for slice in &view.slices {
            match &slice.label {
                SliceLabel::Outcome(outcome) => {
                    let expected = site_records.iter().filter(|r| r.outcome == *outcome).count();
                    prop_assert!(expected > 0);
                    prop_assert_eq!(slice.count, expected);
                }
                SliceLabel::Site(_) => prop_assert!(false, "single-site slices are outcomes"),
            }
        }
    }

    #[test]
    fn inverted_range_is_always_empty(
        dataset in arb_dataset(),
        site in arb_site(),
        high in 0.0f64..10000.0,
        gap in 0.001f64..5000.0,
    ) {
        let range = PayloadRange::new(high + gap, high);
        prop_assert!(compute_scatter_view(&dataset, &site, range).is_empty());
    }

    #[test]
    fn scatter_keeps_exactly_matching_records_in_order(
        dataset in arb_dataset(),
        site in arb_site(),
        low in 0u32..=100,
        high in 0u32..=100,
    ) {
        let range = PayloadRange::new(low as f64 * 100.0, high as f64 * 100.0);
        let view = compute_scatter_view(&dataset, &site, range);

        let expected: Vec<f64> = dataset
            .records()
            .iter()
            .filter(|r| r.payload_mass_kg >= range.low && r.payload_mass_kg <= range.high)
            .filter(|r| site.matches(&r.site))
            .map(|r| r.payload_mass_kg)
            .collect();
        let actual: Vec<f64> = view.points.iter().map(|p| p.payload_mass_kg).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn views_are_idempotent(dataset in arb_dataset(), site in arb_site(), low in 0.0f64..10000.0) {
        let range = PayloadRange::new(low, 10000.0);
        prop_assert_eq!(compute_pie_view(&dataset, &site), compute_pie_view(&dataset, &site));
        prop_assert_eq!(
            compute_scatter_view(&dataset, &site, range),
            compute_scatter_view(&dataset, &site, range)
        );
    }
}

#[test]
fn worked_example() {
    let dataset = LaunchDataset::new(vec![
        launch("KSC", 5000.0, 1, "v1.0"),
        launch("KSC", 3000.0, 0, "v1.0"),
        launch("CCAFS", 7000.0, 1, "v1.1"),
    ]);

    let all = compute_pie_view(&dataset, &SiteSelection::All);
    assert_eq!(all.slices, vec![PieSlice::site("KSC", 1), PieSlice::site("CCAFS", 1)]);

    let ksc = compute_pie_view(&dataset, &SiteSelection::parse("KSC"));
    assert_eq!(
        ksc.slices,
        vec![
            PieSlice::outcome(OutcomeClass::Success, 1),
            PieSlice::outcome(OutcomeClass::Failure, 1),
        ]
    );

    let scatter =
        compute_scatter_view(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 6000.0));
    let points: Vec<(&str, f64)> = scatter
        .points
        .iter()
        .map(|p| (p.site.as_str(), p.payload_mass_kg))
        .collect();
    assert_eq!(points, vec![("KSC", 5000.0), ("KSC", 3000.0)]);
}

#[test]
fn boundary_payloads_are_included() {
    let dataset = LaunchDataset::new(vec![
        launch("KSC", 2000.0, 1, "FT"),
        launch("KSC", 4000.0, 0, "FT"),
        launch("KSC", 4000.5, 0, "FT"),
    ]);
    let range = PayloadRange::new(2000.0, 4000.0);
    let view = compute_scatter_view(&dataset, &SiteSelection::All, range);
    assert_eq!(view.len(), 2);
}

#[test]
fn fixture_outcome_split_for_launch_site() {
    let dataset = support::fixture_dataset();
    let view = compute_pie_view(&dataset, &SiteSelection::parse("CCAFS LC-40"));
    assert_eq!(
        view.slices,
        vec![
            PieSlice::outcome(OutcomeClass::Failure, 5),
            PieSlice::outcome(OutcomeClass::Success, 2),
        ]
    );
}
