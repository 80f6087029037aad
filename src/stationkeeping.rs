//! Station-keeping and propellant budgeting for deep-space occulters.
//!
//! Prices the thrust needed to hold an occulter against solar radiation
//! pressure, the hybrid solar/fusion/beamed power available to do it, and
//! the propellant consumed over the platform lifetime.

use crate::constants::{SPEED_OF_LIGHT_M_S, STANDARD_GRAVITY_M_S2};
use serde::{Deserialize, Serialize};

// Station-keeping budgets price flux against the total solar irradiance
// figure rather than the shared 1361.0 climate baseline.
pub const S0_TSI_W_M2: f64 = 1362.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StationKeepingParams {
    pub shade_area_m2: f64,
    pub areal_density_kg_m2: f64,
    pub reflectivity: f64,
    pub mission_time_yr: f64,
    pub lifetime_yr: f64,
    pub distance_au: f64,
    pub solar_efficiency: f64,
    pub fusion_base_kw: f64,
    pub beamed_microwave_kw: f64,
    pub fusion_half_life_yr: f64,
    pub annual_delta_v_m_s: f64,
    pub specific_impulse_s: f64,
}

impl Default for StationKeepingParams {
    fn default() -> Self {
        StationKeepingParams {
            shade_area_m2: 1e6,
            areal_density_kg_m2: 0.0005,
            reflectivity: 0.97,
            mission_time_yr: 100.0,
            lifetime_yr: 100.0,
            distance_au: 100.0,
            solar_efficiency: 0.20,
            fusion_base_kw: 200.0,
            beamed_microwave_kw: 0.0,
            fusion_half_life_yr: 12.0,
            annual_delta_v_m_s: 75.0,
            specific_impulse_s: 1e6,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThrustBudget {
    pub thrust_n: f64,
    pub fuel_kg: f64,
    pub power_kw: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StationKeepingReport {
    pub distance_au: f64,
    pub mission_time_yr: f64,
    pub power_kw: f64,
    pub fusion_survival: f64,
    pub dry_mass_kg: f64,
    pub srp_force_n: f64,
    pub required_force_n: f64,
    pub required_accel_m_s2: f64,
    pub total_fuel_kg: f64,
    pub wet_mass_kg: f64,
    pub propellant_fraction: f64,
    pub thrust_n: f64,
}

/// Solar radiation pressure on a reflective surface, in Pa.
pub fn srp_pressure_pa(s0_w_m2: f64, reflectivity: f64, cos_theta: f64) -> f64 {
    (1.0 + reflectivity) * (s0_w_m2 / SPEED_OF_LIGHT_M_S) * cos_theta
}

/// Fraction of fusion fuel remaining after `mission_time_yr` of exponential
/// half-life decay.
pub fn fusion_survival_fraction(mission_time_yr: f64, half_life_yr: f64) -> f64 {
    0.5_f64.powf(mission_time_yr / half_life_yr)
}

/// Best available power source at a point in the mission, in kW.
///
/// Solar falls off with the inverse square of distance; fusion decays with
/// fuel half-life; beamed microwave power rides on top of fusion. The
/// platform draws from whichever bus is stronger.
pub fn hybrid_power_kw(params: &StationKeepingParams, mission_time_yr: f64) -> f64 {
    let solar_kw = (S0_TSI_W_M2 / (params.distance_au * params.distance_au))
        * params.shade_area_m2
        * params.solar_efficiency
        / 1000.0;
    let decay = fusion_survival_fraction(mission_time_yr, params.fusion_half_life_yr);
    let fusion_available_kw = params.fusion_base_kw * decay;
    solar_kw.max(fusion_available_kw + params.beamed_microwave_kw)
}

/// Power-limited thrust and annual rocket-equation propellant.
///
/// Thrust scales at 0.10 N per kW of bus power. Fuel for one year's Δv
/// follows the rocket equation; at the very high Isp of photon/field
/// propulsion this stays a tiny fraction of dry mass.
pub fn thrust_budget(
    mass_kg: f64,
    power_kw: f64,
    delta_v_m_s: f64,
    specific_impulse_s: f64,
) -> ThrustBudget {
    let thrust_n = power_kw * 0.10;
    let fuel_kg = if delta_v_m_s > 0.0 {
        mass_kg
            * ((delta_v_m_s / (specific_impulse_s * STANDARD_GRAVITY_M_S2)).exp() - 1.0)
    } else {
        0.0
    };
    ThrustBudget {
        thrust_n,
        fuel_kg,
        power_kw,
    }
}

/// Full station-keeping budget for one platform over its lifetime.
pub fn station_keeping(params: &StationKeepingParams) -> StationKeepingReport {
    let dry_mass_kg = params.areal_density_kg_m2 * params.shade_area_m2;

    // incidence losses keep the sail a few degrees off face-on
    let pressure_pa = srp_pressure_pa(S0_TSI_W_M2, params.reflectivity, 0.95);
    let srp_force_n = pressure_pa * params.shade_area_m2;
    let required_force_n = srp_force_n * 2.0;
    let required_accel_m_s2 = if dry_mass_kg > 0.0 {
        required_force_n / dry_mass_kg
    } else {
        0.0
    };

    let power_kw = hybrid_power_kw(params, params.mission_time_yr);
    let thrust = thrust_budget(
        dry_mass_kg,
        power_kw,
        params.annual_delta_v_m_s,
        params.specific_impulse_s,
    );
    let total_fuel_kg = thrust.fuel_kg * params.lifetime_yr;

    StationKeepingReport {
        distance_au: params.distance_au,
        mission_time_yr: params.mission_time_yr,
        power_kw,
        fusion_survival: fusion_survival_fraction(
            params.mission_time_yr,
            params.fusion_half_life_yr,
        ),
        dry_mass_kg,
        srp_force_n,
        required_force_n,
        required_accel_m_s2,
        total_fuel_kg,
        wet_mass_kg: dry_mass_kg + total_fuel_kg,
        propellant_fraction: if dry_mass_kg > 0.0 {
            total_fuel_kg / dry_mass_kg
        } else {
            0.0
        },
        thrust_n: thrust.thrust_n,
    }
}
