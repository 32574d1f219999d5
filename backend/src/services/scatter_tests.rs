#[cfg(test)]
mod tests {
    use crate::models::{LaunchDataset, LaunchRecord, OutcomeClass, PayloadRange, SiteSelection};
    use crate::services::scatter::{compute_scatter_view, scatter_title};

    fn launch(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord::new(
            site,
            payload,
            OutcomeClass::from_u8(class).unwrap(),
            booster,
        )
    }

    fn create_test_dataset() -> LaunchDataset {
        LaunchDataset::new(vec![
            launch("CCAFS LC-40", 0.0, 0, "v1.0"),
            launch("KSC LC-39A", 2500.0, 1, "FT"),
            launch("VAFB SLC-4E", 5000.0, 0, "v1.1"),
            launch("KSC LC-39A", 7500.0, 1, "B4"),
            launch("KSC LC-39A", 7500.0, 1, "B4"),
            launch("CCAFS SLC-40", 9600.0, 1, "B5"),
        ])
    }

    fn payloads(view: &crate::api::ScatterViewModel) -> Vec<f64> {
        view.points.iter().map(|p| p.payload_mass_kg).collect()
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            scatter_title(&SiteSelection::All),
            "Payload and Launch Outcome - ALL Launch Sites"
        );
        assert_eq!(
            scatter_title(&SiteSelection::parse("KSC LC-39A")),
            "Payload and Launch Outcome - Launch Site KSC LC-39A"
        );
    }

    #[test]
    fn test_all_sites_full_range_keeps_every_record() {
        let dataset = create_test_dataset();
        let range = PayloadRange::new(0.0, 10000.0);
        let view = compute_scatter_view(&dataset, &SiteSelection::All, range);
        assert_eq!(view.len(), dataset.len());
        assert_eq!(payloads(&view), vec![0.0, 2500.0, 5000.0, 7500.0, 7500.0, 9600.0]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::All,
            PayloadRange::new(2500.0, 7500.0),
        );
        assert_eq!(payloads(&view), vec![2500.0, 5000.0, 7500.0, 7500.0]);
    }

    #[test]
    fn test_single_point_range() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::All,
            PayloadRange::new(5000.0, 5000.0),
        );
        assert_eq!(payloads(&view), vec![5000.0]);
    }

    #[test]
    fn test_site_filter_applies_after_range() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::parse("KSC LC-39A"),
            PayloadRange::new(3000.0, 10000.0),
        );
        assert_eq!(payloads(&view), vec![7500.0, 7500.0]);
        assert!(view.points.iter().all(|p| p.site == "KSC LC-39A"));
        assert!(view.title.ends_with("KSC LC-39A"));
    }

    #[test]
    fn test_duplicates_are_distinct_points() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::All,
            PayloadRange::new(7500.0, 7500.0),
        );
        assert_eq!(view.len(), 2);
        assert_eq!(view.points[0], view.points[1]);
    }

    #[test]
    fn test_points_carry_booster_category() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(view.booster_categories(), vec!["v1.0", "FT", "v1.1", "B4", "B5"]);
        assert_eq!(view.points[1].outcome, OutcomeClass::Success);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::All,
            PayloadRange::new(8000.0, 1000.0),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let view = compute_scatter_view(
            &create_test_dataset(),
            &SiteSelection::parse("Boca Chica"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_scatter_view_is_idempotent() {
        let dataset = create_test_dataset();
        let range = PayloadRange::new(1000.0, 8000.0);
        assert_eq!(
            compute_scatter_view(&dataset, &SiteSelection::All, range),
            compute_scatter_view(&dataset, &SiteSelection::All, range)
        );
    }
}
