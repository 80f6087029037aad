use std::f64::consts::PI;

// Physical constants (shared baseline for every calculator)
pub const S0_W_M2: f64 = 1361.0; // solar constant at 1 AU
pub const R_EARTH_M: f64 = 6.371e6;
pub const T_EFF_K: f64 = 255.0; // effective radiative temperature
pub const ECS_MULTIPLIER: f64 = 1.8; // surface response per unit effective cooling
pub const SPEED_OF_LIGHT_M_S: f64 = 299792458.0;
pub const STANDARD_GRAVITY_M_S2: f64 = 9.80665;
pub const AU_M: f64 = 1.496e11;

// default trade-study settings:
pub const DEFAULT_A_SHADE_M2: f64 = 1e6; // 1 km² per occulter
pub const DEFAULT_KAPPA: f64 = 0.95; // optical efficiency
pub const DEFAULT_DENSITY_KG_M2: f64 = 0.001; // 1 g/m² film baseline
pub const DEFAULT_PAYLOAD_L1_T: f64 = 50.0; // delivered tons per launch to L1
pub const DEFAULT_FLIGHTS_PER_YR: f64 = 20.0;

pub const W_PER_TW: f64 = 1e12;
pub const KG_PER_T: f64 = 1000.0;
pub const M2_PER_KM2: f64 = 1e6;

/// Disk cross-section for a body of the given radius.
///
/// Always derived from the radius at the call site, never stored, so a
/// scenario that rescales the radius can never see a stale area.
pub const fn cross_section_m2(radius_m: f64) -> f64 {
    PI * radius_m * radius_m
}

/// Earth's disk cross-section, ≈ 1.27516e14 m².
pub const fn earth_cross_section_m2() -> f64 {
    cross_section_m2(R_EARTH_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_literals() {
        assert_eq!(S0_W_M2, 1361.0);
        assert_eq!(R_EARTH_M, 6.371e6);
        assert_eq!(T_EFF_K, 255.0);
        assert_eq!(ECS_MULTIPLIER, 1.8);
        assert_eq!(DEFAULT_A_SHADE_M2, 1e6);
        assert_eq!(DEFAULT_KAPPA, 0.95);
        assert_eq!(DEFAULT_DENSITY_KG_M2, 0.001);
        assert_eq!(DEFAULT_PAYLOAD_L1_T, 50.0);
        assert_eq!(DEFAULT_FLIGHTS_PER_YR, 20.0);
    }

    #[test]
    fn test_earth_cross_section_derived_from_radius() {
        let expected = std::f64::consts::PI * R_EARTH_M * R_EARTH_M;
        assert_eq!(earth_cross_section_m2(), expected);
        assert_relative_eq!(earth_cross_section_m2(), 1.27516e14, max_relative = 1e-3);
    }

    #[test]
    fn test_cross_section_tracks_radius() {
        // doubling the radius quadruples the disk area
        let base = cross_section_m2(R_EARTH_M);
        let doubled = cross_section_m2(2.0 * R_EARTH_M);
        assert_relative_eq!(doubled, 4.0 * base, max_relative = 1e-12);
    }
}
