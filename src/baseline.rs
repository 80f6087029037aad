//! Shared engineering baseline for every trade-study calculator.
//!
//! One `Baseline` value is built once and handed by reference to each
//! calculator, so every module prices the same assumptions unless a caller
//! derives an overridden copy. Copies never write back: two consumers can
//! hold different baselines without seeing each other's changes.

use crate::constants::{
    DEFAULT_A_SHADE_M2, DEFAULT_DENSITY_KG_M2, DEFAULT_FLIGHTS_PER_YR, DEFAULT_KAPPA,
    DEFAULT_PAYLOAD_L1_T, ECS_MULTIPLIER, R_EARTH_M, S0_W_M2, T_EFF_K, cross_section_m2,
};
use crate::error::{ShadeError, ShadeResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    #[serde(default = "default_s0")]
    pub s0_w_m2: f64,
    #[serde(default = "default_r_earth")]
    pub r_earth_m: f64,
    #[serde(default = "default_t_eff")]
    pub t_eff_k: f64,
    #[serde(default = "default_ecs")]
    pub ecs_multiplier: f64,
    #[serde(default = "default_shade_area")]
    pub shade_area_m2: f64,
    #[serde(default = "default_kappa")]
    pub kappa: f64,
    #[serde(default = "default_density")]
    pub areal_density_kg_m2: f64,
    #[serde(default = "default_payload")]
    pub payload_to_l1_t: f64,
    #[serde(default = "default_flights")]
    pub flights_per_yr: f64,
}

fn default_s0() -> f64 {
    S0_W_M2
}
fn default_r_earth() -> f64 {
    R_EARTH_M
}
fn default_t_eff() -> f64 {
    T_EFF_K
}
fn default_ecs() -> f64 {
    ECS_MULTIPLIER
}
fn default_shade_area() -> f64 {
    DEFAULT_A_SHADE_M2
}
fn default_kappa() -> f64 {
    DEFAULT_KAPPA
}
fn default_density() -> f64 {
    DEFAULT_DENSITY_KG_M2
}
fn default_payload() -> f64 {
    DEFAULT_PAYLOAD_L1_T
}
fn default_flights() -> f64 {
    DEFAULT_FLIGHTS_PER_YR
}

impl Default for Baseline {
    fn default() -> Self {
        Baseline {
            s0_w_m2: default_s0(),
            r_earth_m: default_r_earth(),
            t_eff_k: default_t_eff(),
            ecs_multiplier: default_ecs(),
            shade_area_m2: default_shade_area(),
            kappa: default_kappa(),
            areal_density_kg_m2: default_density(),
            payload_to_l1_t: default_payload(),
            flights_per_yr: default_flights(),
        }
    }
}

impl Baseline {
    /// Earth's disk cross-section in m², recomputed from the current
    /// radius on every call. The area is never stored, so it cannot go
    /// stale when a scenario rescales the radius.
    pub fn earth_cross_section_m2(&self) -> f64 {
        cross_section_m2(self.r_earth_m)
    }

    pub fn with_shade_area_m2(mut self, shade_area_m2: f64) -> Self {
        self.shade_area_m2 = shade_area_m2;
        self
    }

    pub fn with_kappa(mut self, kappa: f64) -> Self {
        self.kappa = kappa;
        self
    }

    pub fn with_areal_density_kg_m2(mut self, areal_density_kg_m2: f64) -> Self {
        self.areal_density_kg_m2 = areal_density_kg_m2;
        self
    }

    pub fn with_payload_to_l1_t(mut self, payload_to_l1_t: f64) -> Self {
        self.payload_to_l1_t = payload_to_l1_t;
        self
    }

    pub fn with_flights_per_yr(mut self, flights_per_yr: f64) -> Self {
        self.flights_per_yr = flights_per_yr;
        self
    }

    /// Fail-fast sanity check. A baseline that passes here cannot divide
    /// by zero anywhere downstream.
    pub fn validate(&self) -> ShadeResult<()> {
        if !(self.kappa > 0.0 && self.kappa <= 1.0) {
            return Err(ShadeError::Config(format!(
                "kappa must be in (0, 1], got {}",
                self.kappa
            )));
        }
        let positive = [
            ("s0_w_m2", self.s0_w_m2),
            ("r_earth_m", self.r_earth_m),
            ("t_eff_k", self.t_eff_k),
            ("ecs_multiplier", self.ecs_multiplier),
            ("shade_area_m2", self.shade_area_m2),
            ("areal_density_kg_m2", self.areal_density_kg_m2),
            ("payload_to_l1_t", self.payload_to_l1_t),
            ("flights_per_yr", self.flights_per_yr),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ShadeError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
