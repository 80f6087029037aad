//! Named trade-study scenarios loaded from JSON.
//!
//! A scenario bundles a baseline override block with a ladder of occlusion
//! targets, so a whole study can live in one file. Missing baseline fields
//! fall back to the shared constants. Validation happens at load time and
//! fails fast; there is nothing transient to retry.

use crate::baseline::Baseline;
use crate::error::{ShadeError, ShadeResult};
use crate::sunshade::{ConstellationReport, size_constellation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtaTarget {
    pub label: String,
    pub eta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub baseline: Baseline,
    #[serde(default)]
    pub targets: Vec<EtaTarget>,
}

impl Scenario {
    /// Parse and validate a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> ShadeResult<Scenario> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file.
    pub fn load<P: AsRef<Path>>(path: P) -> ShadeResult<Scenario> {
        let json = fs::read_to_string(path)?;
        Scenario::from_json_str(&json)
    }

    pub fn validate(&self) -> ShadeResult<()> {
        if self.name.trim().is_empty() {
            return Err(ShadeError::Scenario {
                name: self.name.clone(),
                message: "scenario name must not be empty".to_string(),
            });
        }
        self.baseline.validate()?;
        for target in &self.targets {
            if !(target.eta.is_finite() && target.eta > 0.0) {
                return Err(ShadeError::Scenario {
                    name: self.name.clone(),
                    message: format!(
                        "target '{}' has non-positive eta {}",
                        target.label, target.eta
                    ),
                });
            }
        }
        Ok(())
    }

    /// Size a constellation for every target in the ladder.
    pub fn constellation_reports(&self) -> Vec<(String, ConstellationReport)> {
        self.targets
            .iter()
            .map(|target| {
                (
                    target.label.clone(),
                    size_constellation(target.eta, &self.baseline),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const OPTIMISTIC_STUDY: &str = r#"{
        "name": "optimistic-film",
        "baseline": { "areal_density_kg_m2": 0.0005 },
        "targets": [
            { "label": "Climate offset (1.8%)", "eta": 0.018 },
            { "label": "Strong cooling (10%)", "eta": 0.10 },
            { "label": "Half Dyson (50%)", "eta": 0.50 },
            { "label": "Full Dyson (100%)", "eta": 1.0 }
        ]
    }"#;

    #[test]
    fn test_scenario_parses_with_partial_baseline() {
        let scenario = Scenario::from_json_str(OPTIMISTIC_STUDY).unwrap();
        assert_eq!(scenario.name, "optimistic-film");
        assert_eq!(scenario.targets.len(), 4);
        // overridden field
        assert_eq!(scenario.baseline.areal_density_kg_m2, 0.0005);
        // everything else stays at the shared constants
        assert_eq!(scenario.baseline.kappa, 0.95);
        assert_eq!(scenario.baseline.flights_per_yr, 20.0);
    }

    #[test]
    fn test_scenario_reports_cover_every_target() {
        let scenario = Scenario::from_json_str(OPTIMISTIC_STUDY).unwrap();
        let reports = scenario.constellation_reports();
        assert_eq!(reports.len(), 4);

        let (label, climate) = &reports[0];
        assert_eq!(label, "Climate offset (1.8%)");
        assert_abs_diff_eq!(climate.delta_t_surface_k, -2.0655, epsilon = 1e-6);
    }

    #[test]
    fn test_scenario_rejects_bad_eta() {
        let json = r#"{
            "name": "broken",
            "targets": [ { "label": "nothing", "eta": 0.0 } ]
        }"#;
        let err = Scenario::from_json_str(json).unwrap_err();
        assert!(matches!(err, ShadeError::Scenario { .. }));
    }

    #[test]
    fn test_scenario_rejects_invalid_baseline() {
        let json = r#"{
            "name": "bad-optics",
            "baseline": { "kappa": 1.4 },
            "targets": [ { "label": "x", "eta": 0.1 } ]
        }"#;
        let err = Scenario::from_json_str(json).unwrap_err();
        assert!(matches!(err, ShadeError::Config(_)));
    }

    #[test]
    fn test_scenario_rejects_empty_name() {
        let json = r#"{ "name": "  " }"#;
        assert!(Scenario::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json_maps_to_json_error() {
        let err = Scenario::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ShadeError::Json(_)));
    }
}
