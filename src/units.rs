//! Utilities for converting between flux, mass, and temperature figures
//! used across the trade-study calculators.

use crate::constants::{ECS_MULTIPLIER, KG_PER_T, M2_PER_KM2, T_EFF_K, W_PER_TW};

/// Converts metric tons to kilograms.
pub fn tons_to_kg(tons: f64) -> f64 {
    tons * KG_PER_T
}

/// Converts kilograms to metric tons.
pub fn kg_to_tons(kg: f64) -> f64 {
    kg / KG_PER_T
}

/// Converts an areal density in kg/m² to g/m².
pub fn kg_m2_to_g_m2(kg_m2: f64) -> f64 {
    kg_m2 * 1000.0
}

/// Converts m² to km².
pub fn m2_to_km2(m2: f64) -> f64 {
    m2 / M2_PER_KM2
}

/// Converts watts to terawatts.
pub fn watts_to_tw(watts: f64) -> f64 {
    watts / W_PER_TW
}

/// Solar flux at a heliocentric distance, from the 1 AU reference value.
///
/// # Arguments
/// - `s0_w_m2`: flux at 1 AU in W/m²
/// - `distance_au`: heliocentric distance in AU
///
/// # Returns
/// Flux in W/m² (inverse-square falloff)
pub fn flux_at_distance(s0_w_m2: f64, distance_au: f64) -> f64 {
    s0_w_m2 / (distance_au * distance_au)
}

/// Drop in effective radiative temperature for a fractional occlusion.
///
/// Radiative balance scales as the fourth root of absorbed flux, so a small
/// occlusion η cools the effective temperature by roughly T_eff · η / 4.
///
/// # Arguments
/// - `eta`: fractional reduction in received solar flux
/// - `t_eff_k`: unperturbed effective temperature in K
///
/// # Returns
/// Signed temperature change in K (negative for cooling)
pub fn effective_temp_drop_k(eta: f64, t_eff_k: f64) -> f64 {
    -t_eff_k * 0.25 * eta
}

/// Surface temperature change implied by an effective-temperature change,
/// scaled by the climate sensitivity multiplier.
pub fn surface_temp_drop_k(delta_t_eff_k: f64, ecs_multiplier: f64) -> f64 {
    delta_t_eff_k * ecs_multiplier
}

/// Convenience function that uses the standard effective temperature
pub fn effective_temp_drop_k_earth(eta: f64) -> f64 {
    effective_temp_drop_k(eta, T_EFF_K)
}

/// Convenience function that uses the standard sensitivity multiplier
pub fn surface_temp_drop_k_earth(eta: f64) -> f64 {
    surface_temp_drop_k(effective_temp_drop_k_earth(eta), ECS_MULTIPLIER)
}
