//! Multi-layer reflector mass optimization.
//!
//! Finds the lightest stack of candidate film layers that reaches a target
//! reflectivity. The reflectivity model is non-coherent: each layer
//! reflects a fraction of whatever light reaches it, so the stack total is
//! R = 1 − Π(1 − rᵢ). Exact for lossless, randomly phased partial
//! reflections, which holds for thin films.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerCandidate {
    pub label: String,
    pub reflectivity: f64,
    pub areal_mass_kg_m2: f64,
}

impl LayerCandidate {
    pub fn new(label: &str, reflectivity: f64, areal_mass_kg_m2: f64) -> Self {
        LayerCandidate {
            label: label.to_string(),
            reflectivity,
            areal_mass_kg_m2,
        }
    }
}

/// Near-term film technologies used by the trade demos.
pub static BASELINE_CANDIDATES: Lazy<Vec<LayerCandidate>> = Lazy::new(|| {
    vec![
        LayerCandidate::new("30 nm Al on polymer", 0.91, 0.00015),
        LayerCandidate::new("12 nm Al ultra-thin", 0.88, 0.00006),
        LayerCandidate::new("Single SiO2 dielectric", 0.12, 0.0008),
        LayerCandidate::new("5-layer dielectric stack", 0.25, 0.0018),
        LayerCandidate::new("15-layer V-coated mirror", 0.45, 0.0045),
        LayerCandidate::new("Fluoropolymer coating", 0.05, 0.00003),
        LayerCandidate::new("Retroreflector film", 0.60, 0.012),
    ]
});

#[derive(Debug, Clone, Serialize)]
pub struct ReflectorSolution {
    pub total_areal_mass_kg_m2: f64,
    pub achieved_reflectivity: f64,
    pub selected_indices: Vec<usize>,
    pub selected_layers: Vec<LayerCandidate>,
    pub method: &'static str,
}

impl ReflectorSolution {
    pub fn layers_used(&self) -> usize {
        self.selected_layers.len()
    }
}

/// Total reflectivity of a non-coherent layer stack.
///
/// An empty stack reflects nothing.
pub fn combined_reflectivity(layer_reflectivities: &[f64]) -> f64 {
    if layer_reflectivities.is_empty() {
        return 0.0;
    }
    let transmitted: f64 = layer_reflectivities.iter().map(|r| 1.0 - r).product();
    1.0 - transmitted
}

/// Exhaustive subset search for the minimum-mass stack meeting the target.
///
/// Enumerates every non-empty subset (layer order does not affect the
/// reflectivity model), optionally capped at `max_layers`. Exact, so only
/// usable for small catalogs; the candidate count is asserted ≤ 20.
///
/// Returns `None` when no subset reaches the target.
pub fn optimize_bruteforce(
    r_target: f64,
    candidates: &[LayerCandidate],
    max_layers: Option<usize>,
) -> Option<ReflectorSolution> {
    let n = candidates.len();
    assert!(n <= 20, "brute-force search is limited to 20 candidates, got {}", n);

    let layer_cap = max_layers.unwrap_or(n);
    let mut best: Option<ReflectorSolution> = None;

    for mask in 1_u32..(1 << n) {
        if (mask.count_ones() as usize) > layer_cap {
            continue;
        }

        let indices: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        let reflectivities: Vec<f64> =
            indices.iter().map(|&i| candidates[i].reflectivity).collect();
        let total_mass: f64 = indices
            .iter()
            .map(|&i| candidates[i].areal_mass_kg_m2)
            .sum();

        let achieved = combined_reflectivity(&reflectivities);
        let beats_best = best
            .as_ref()
            .map_or(true, |b| total_mass < b.total_areal_mass_kg_m2);

        if achieved >= r_target && beats_best {
            best = Some(ReflectorSolution {
                total_areal_mass_kg_m2: total_mass,
                achieved_reflectivity: achieved,
                selected_layers: indices.iter().map(|&i| candidates[i].clone()).collect(),
                selected_indices: indices,
                method: "bruteforce",
            });
        }
    }

    best
}

/// Greedy heuristic for large catalogs.
///
/// Repeatedly adds the candidate with the best marginal ΔR/Δm until the
/// target is met or the candidates run out. Each candidate is used at most
/// once. Returns `None` when the target was not reached.
pub fn optimize_greedy(r_target: f64, candidates: &[LayerCandidate]) -> Option<ReflectorSolution> {
    let mut remaining: Vec<usize> = (0..candidates.len())
        .filter(|&i| candidates[i].areal_mass_kg_m2 > 0.0)
        .collect();
    let mut selected: Vec<usize> = Vec::new();
    let mut current_r = 0.0;

    while current_r < r_target && !remaining.is_empty() {
        let mut best_ratio = -1.0;
        let mut best_pos = None;

        for (pos, &i) in remaining.iter().enumerate() {
            let mut stack: Vec<f64> = selected
                .iter()
                .map(|&s| candidates[s].reflectivity)
                .collect();
            stack.push(candidates[i].reflectivity);
            let delta_r = combined_reflectivity(&stack) - current_r;
            let ratio = delta_r / candidates[i].areal_mass_kg_m2;
            if ratio > best_ratio {
                best_ratio = ratio;
                best_pos = Some(pos);
            }
        }

        let pos = best_pos?;
        let index = remaining.remove(pos);
        selected.push(index);
        let stack: Vec<f64> = selected
            .iter()
            .map(|&s| candidates[s].reflectivity)
            .collect();
        current_r = combined_reflectivity(&stack);
    }

    if current_r >= r_target {
        Some(ReflectorSolution {
            total_areal_mass_kg_m2: selected
                .iter()
                .map(|&i| candidates[i].areal_mass_kg_m2)
                .sum(),
            achieved_reflectivity: current_r,
            selected_layers: selected.iter().map(|&i| candidates[i].clone()).collect(),
            selected_indices: selected,
            method: "greedy",
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn test_combined_reflectivity() {
        assert_eq!(combined_reflectivity(&[]), 0.0);
        assert_abs_diff_eq!(combined_reflectivity(&[0.5]), 0.5, epsilon = 1e-12);
        // two half mirrors transmit a quarter of the light
        assert_abs_diff_eq!(combined_reflectivity(&[0.5, 0.5]), 0.75, epsilon = 1e-12);
        // order does not matter
        assert_abs_diff_eq!(
            combined_reflectivity(&[0.91, 0.12]),
            combined_reflectivity(&[0.12, 0.91]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bruteforce_finds_single_layer_for_modest_target() {
        // the 0.15 g/m² aluminized polymer alone covers a 0.90 target
        let solution = optimize_bruteforce(0.90, &BASELINE_CANDIDATES, None).unwrap();
        assert_eq!(solution.layers_used(), 1);
        assert_abs_diff_eq!(solution.total_areal_mass_kg_m2, 0.00015, epsilon = 1e-12);
        assert_ge!(solution.achieved_reflectivity, 0.90);
    }

    #[test]
    fn test_bruteforce_unreachable_target() {
        let weak = vec![
            LayerCandidate::new("coating A", 0.05, 0.00003),
            LayerCandidate::new("coating B", 0.12, 0.0008),
        ];
        // two weak coatings top out at 1 − 0.95·0.88 = 0.164
        assert!(optimize_bruteforce(0.95, &weak, None).is_none());
    }

    #[test]
    fn test_bruteforce_respects_layer_cap() {
        let solution = optimize_bruteforce(0.98, &BASELINE_CANDIDATES, Some(2));
        if let Some(s) = solution {
            assert_le!(s.layers_used(), 2);
            assert_ge!(s.achieved_reflectivity, 0.98);
        }
    }

    #[test]
    fn test_greedy_reaches_target() {
        let solution = optimize_greedy(0.98, &BASELINE_CANDIDATES).unwrap();
        assert_ge!(solution.achieved_reflectivity, 0.98);
        assert_eq!(solution.method, "greedy");
    }

    #[test]
    fn test_bruteforce_never_heavier_than_greedy() {
        for target in [0.90, 0.95, 0.98, 0.995] {
            let exact = optimize_bruteforce(target, &BASELINE_CANDIDATES, None);
            let heuristic = optimize_greedy(target, &BASELINE_CANDIDATES);
            match (exact, heuristic) {
                (Some(e), Some(h)) => {
                    assert_le!(
                        e.total_areal_mass_kg_m2,
                        h.total_areal_mass_kg_m2 + 1e-15,
                        "exact search must not lose to the heuristic at R {}",
                        target
                    );
                }
                (None, Some(_)) => panic!("greedy met a target brute force called infeasible"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_greedy_infeasible_returns_none() {
        let weak = vec![LayerCandidate::new("coating", 0.05, 0.00003)];
        assert!(optimize_greedy(0.5, &weak).is_none());
    }
}
