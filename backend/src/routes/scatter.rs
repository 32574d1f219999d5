use serde::{Deserialize, Serialize};

use crate::models::OutcomeClass;

// =========================================================
// Scatter chart types + route
// =========================================================

/// Panel that displays the scatter view.
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

/// One launch plotted as payload (x) against outcome (y), coloured by booster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_category: String,
    pub site: String,
}

/// Renderer-ready scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterViewModel {
    pub title: String,
    /// Points in dataset order. Duplicate launches stay distinct.
    pub points: Vec<ScatterPoint>,
}

impl ScatterViewModel {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct booster categories in first-appearance order (legend entries).
    pub fn booster_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.booster_category.as_str()) {
                categories.push(&point.booster_category);
            }
        }
        categories
    }
}

/// Route function name constant for the scatter view
pub const GET_SCATTER_VIEW: &str = "get_scatter_view";

#[cfg(test)]
mod tests {
    use super::*;

    fn point(payload: f64, booster: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: payload,
            outcome: OutcomeClass::Success,
            booster_category: booster.to_string(),
            site: "KSC".to_string(),
        }
    }

    #[test]
    fn test_booster_categories_first_appearance() {
        let view = ScatterViewModel {
            title: "t".to_string(),
            points: vec![point(1.0, "FT"), point(2.0, "v1.1"), point(3.0, "FT")],
        };
        assert_eq!(view.booster_categories(), vec!["FT", "v1.1"]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_empty_scatter() {
        let view = ScatterViewModel {
            title: "t".to_string(),
            points: vec![],
        };
        assert!(view.is_empty());
        assert!(view.booster_categories().is_empty());
    }
}
