//! Dyson-scale occulter scalability model.
//!
//! Extends the constellation sizing with three deployment schedules:
//! launch-only at constant cadence, exponential cadence growth, and a
//! self-replicating off-Earth industrial base. Covers the whole trajectory
//! from climate SRM (η ≈ 0.018) to a full statite swarm (η = 1).

use crate::baseline::Baseline;
use crate::sunshade::{ConstellationReport, size_constellation};
use crate::units::watts_to_tw;
use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrowthParams {
    /// Yearly fractional growth of launch cadence (Starship-like 20%/yr).
    pub launch_cadence_growth_rate: f64,
    /// Initial off-Earth factory output, metric tons per year.
    pub factory_production_t_per_yr: f64,
    /// Yearly fractional growth of factory output (self-replication).
    pub factory_growth_rate: f64,
    /// Horizon for the self-replication scan, years.
    pub mission_years: u32,
}

impl Default for GrowthParams {
    fn default() -> Self {
        GrowthParams {
            launch_cadence_growth_rate: 0.20,
            factory_production_t_per_yr: 1e5,
            factory_growth_rate: 0.50,
            mission_years: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScalingReport {
    pub eta_target: f64,
    pub occulter_count: f64,
    pub total_area_km2: f64,
    pub total_mass_t: f64,
    pub mass_per_occulter_kg: f64,
    pub launches_required: f64,
    pub years_constant_cadence: f64,
    pub years_exponential_cadence: f64,
    /// First year the factory fleet has produced the full swarm mass,
    /// `None` when it never happens inside the mission horizon.
    pub years_self_replicating: Option<u32>,
    pub power_blocked_tw: f64,
}

/// Years to complete all launches when cadence grows exponentially.
///
/// Solves L = (f₀/ln(1+g))·((1+g)^T − 1) for T. Falls back to the
/// constant-cadence answer when growth is zero.
pub fn years_with_cadence_growth(launches: f64, flights_per_yr: f64, growth_rate: f64) -> f64 {
    if growth_rate > 0.0 {
        let ln_g = (1.0 + growth_rate).ln();
        (1.0 + launches * ln_g / flights_per_yr).ln() / ln_g
    } else {
        launches / flights_per_yr
    }
}

/// First year cumulative factory output covers the required mass.
pub fn years_until_self_sufficient(
    required_mass_t: f64,
    production_t_per_yr: f64,
    growth_rate: f64,
    mission_years: u32,
) -> Option<u32> {
    if production_t_per_yr <= 0.0 {
        return None;
    }
    let mut yearly = production_t_per_yr;
    let mut cumulative = 0.0;
    for year in 1..=mission_years {
        yearly *= 1.0 + growth_rate;
        cumulative += yearly;
        if cumulative >= required_mass_t {
            return Some(year);
        }
    }
    None
}

/// Full scalability picture for one occlusion target.
pub fn scale_roadmap(
    eta_target: f64,
    baseline: &Baseline,
    growth: &GrowthParams,
) -> ScalingReport {
    let sizing: ConstellationReport = size_constellation(eta_target, baseline);

    let years_exponential_cadence = years_with_cadence_growth(
        sizing.launches_required,
        baseline.flights_per_yr,
        growth.launch_cadence_growth_rate,
    );

    let years_self_replicating = years_until_self_sufficient(
        sizing.total_mass_t,
        growth.factory_production_t_per_yr,
        growth.factory_growth_rate,
        growth.mission_years,
    );

    let power_blocked_tw =
        watts_to_tw(eta_target * baseline.s0_w_m2 * baseline.earth_cross_section_m2());

    ScalingReport {
        eta_target,
        occulter_count: sizing.satellite_count,
        total_area_km2: sizing.total_shade_area_km2,
        total_mass_t: sizing.total_mass_t,
        mass_per_occulter_kg: sizing.mass_per_satellite_kg,
        launches_required: sizing.launches_required,
        years_constant_cadence: sizing.years_at_cadence,
        years_exponential_cadence,
        years_self_replicating,
        power_blocked_tw,
    }
}

/// One report per η target, in input order.
pub fn roadmap(targets: &[f64], baseline: &Baseline, growth: &GrowthParams) -> Vec<ScalingReport> {
    targets
        .iter()
        .map(|&eta| scale_roadmap(eta, baseline, growth))
        .collect()
}

pub fn print_roadmap_table(reports: &[ScalingReport]) {
    println!("{}", "DYSON-SCALE OCCLUDER / SUNSHADE SCALABILITY".bold());
    println!();
    println!(
        "{:>6} {:>12} {:>10} {:>12} {:>10} {:>10} {:>10} {:>10}",
        "eta", "Occulters", "Mass [Gt]", "Launches", "Yrs Const", "Yrs Exp", "Yrs Self", "Power[TW]"
    );
    println!("{}", "-".repeat(88));

    for report in reports {
        let self_rep = match report.years_self_replicating {
            Some(years) => format!("{:>9}y", years),
            None => format!("{:>10}", "∞"),
        };
        println!(
            "{:>6.3} {:>11.2}M {:>10.2} {:>11.1}M {:>9.0}y {:>9.0}y {} {:>10.0}",
            report.eta_target,
            report.occulter_count / 1e6,
            report.total_mass_t / 1e9,
            report.launches_required / 1e6,
            report.years_constant_cadence,
            report.years_exponential_cadence,
            self_rep,
            report.power_blocked_tw
        );
    }
}
