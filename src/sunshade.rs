//! Sunshade constellation sizing.
//!
//! Calculates the minimum number of occulters at L1 for a desired
//! fractional reduction in solar input, then prices the constellation in
//! mass, launches, and deployment years against the shared baseline.

use crate::baseline::Baseline;
use crate::units::{effective_temp_drop_k, kg_m2_to_g_m2, kg_to_tons, m2_to_km2, surface_temp_drop_k};
use serde::Serialize;

/// Full engineering estimate for one occlusion target.
#[derive(Debug, Clone, Serialize)]
pub struct ConstellationReport {
    pub eta_target: f64,
    pub satellite_count: f64,
    pub shade_area_per_sat_km2: f64,
    pub total_shade_area_km2: f64,
    pub areal_density_g_m2: f64,
    pub mass_per_satellite_kg: f64,
    pub total_mass_t: f64,
    pub launches_required: f64,
    pub years_at_cadence: f64,
    pub delta_t_effective_k: f64,
    pub delta_t_surface_k: f64,
}

impl ConstellationReport {
    pub fn total_mass_gt(&self) -> f64 {
        self.total_mass_t / 1e9
    }

    pub fn print_summary(&self, label: &str) {
        println!("{}", label);
        println!("   Satellites      : {:6.2} million", self.satellite_count / 1e6);
        println!("   Total mass      : {:6.2} Gt", self.total_mass_gt());
        println!("   Launches        : {:6.1} k", self.launches_required / 1000.0);
        println!("   Time at cadence : {:.0} years", self.years_at_cadence);
        println!("   ΔT_surface      : {:+5.1} K", self.delta_t_surface_k);
        println!();
    }
}

/// Size the constellation for a target occlusion fraction.
///
/// The satellite count divides the occluded share of Earth's disk by the
/// effective area each occulter blocks. η is not clamped: values above 1
/// price the theoretical statite-swarm regime.
pub fn size_constellation(eta_target: f64, baseline: &Baseline) -> ConstellationReport {
    let a_earth_m2 = baseline.earth_cross_section_m2();
    let satellite_count =
        eta_target * a_earth_m2 / (baseline.shade_area_m2 * baseline.kappa);

    let mass_per_satellite_kg = baseline.shade_area_m2 * baseline.areal_density_kg_m2;
    let total_mass_t = kg_to_tons(satellite_count * mass_per_satellite_kg);

    let launches_required = total_mass_t / baseline.payload_to_l1_t;
    let years_at_cadence = launches_required / baseline.flights_per_yr;

    let delta_t_effective_k = effective_temp_drop_k(eta_target, baseline.t_eff_k);
    let delta_t_surface_k = surface_temp_drop_k(delta_t_effective_k, baseline.ecs_multiplier);

    ConstellationReport {
        eta_target,
        satellite_count,
        shade_area_per_sat_km2: m2_to_km2(baseline.shade_area_m2),
        total_shade_area_km2: m2_to_km2(satellite_count * baseline.shade_area_m2),
        areal_density_g_m2: kg_m2_to_g_m2(baseline.areal_density_kg_m2),
        mass_per_satellite_kg,
        total_mass_t,
        launches_required,
        years_at_cadence,
        delta_t_effective_k,
        delta_t_surface_k,
    }
}
