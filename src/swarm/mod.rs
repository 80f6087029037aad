//! Monthly-stepped Monte Carlo of swarm degradation and self-replication.
//!
//! Each tile carries its own efficiency, decayed by its film's degradation
//! rate and knocked down by stochastic hazards (solar storms and
//! micrometeoroids). The swarm replicates monthly; replication errors are
//! culled before the new tiles join. Aggregate shading and the implied
//! surface cooling are recorded every month.

pub mod material;

pub use material::{GRAPHENE, KAPTON_SIO2, MATERIAL_CATALOG, MYLAR_AL, TileMaterial};

use crate::baseline::Baseline;
use crate::units::{effective_temp_drop_k, surface_temp_drop_k};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct SwarmParams {
    pub months: usize,
    /// Starting fleet: (film, tile count) per material.
    pub fleet: Vec<(TileMaterial, usize)>,
    /// Fraction of the fleet replicated each month.
    pub replication_rate: f64,
    /// Extra replication margin to cover culled units.
    pub redundancy_factor: f64,
    pub solar_storm_prob: f64,
    pub micrometeoroid_prob: f64,
    /// Fractional efficiency hit from one hazard strike.
    pub hazard_efficiency_loss: f64,
    pub seed: u64,
}

impl Default for SwarmParams {
    fn default() -> Self {
        SwarmParams {
            months: 24,
            fleet: vec![(KAPTON_SIO2, 1000)],
            replication_rate: 0.05,
            redundancy_factor: 1.1,
            solar_storm_prob: 0.02,
            micrometeoroid_prob: 0.01,
            hazard_efficiency_loss: 0.1,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tile {
    material: TileMaterial,
    efficiency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRecord {
    pub month: usize,
    pub tile_count: usize,
    pub shading_fraction: f64,
    pub delta_t_effective_k: f64,
    pub delta_t_surface_k: f64,
    /// Relative harvest index: Σ efficiency × power_yield over the fleet.
    pub power_index: f64,
}

pub struct SwarmSim {
    pub params: SwarmParams,
    baseline: Baseline,
    tiles: Vec<Tile>,
    rng: StdRng,
    history: Vec<MonthRecord>,
    month: usize,
}

impl SwarmSim {
    pub fn new(params: SwarmParams, baseline: &Baseline) -> SwarmSim {
        let tiles = params
            .fleet
            .iter()
            .flat_map(|&(material, count)| {
                std::iter::repeat_n(
                    Tile {
                        material,
                        efficiency: material.efficiency,
                    },
                    count,
                )
            })
            .collect();

        SwarmSim {
            rng: StdRng::seed_from_u64(params.seed),
            params,
            baseline: *baseline,
            tiles,
            history: Vec::new(),
            month: 0,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn history(&self) -> &[MonthRecord] {
        &self.history
    }

    /// Aggregate shading fraction, capped at full occlusion.
    pub fn shading_fraction(&self) -> f64 {
        let shaded_m2: f64 = self
            .tiles
            .iter()
            .map(|tile| tile.efficiency * tile.material.tile_area_m2)
            .sum();
        (shaded_m2 / self.baseline.earth_cross_section_m2()).min(1.0)
    }

    pub fn step(&mut self) {
        self.month += 1;

        // 1. degrade existing tiles
        for tile in &mut self.tiles {
            tile.efficiency *= 1.0 - tile.material.monthly_degradation;
        }

        // 2. stochastic hazards
        for tile in &mut self.tiles {
            let storm = self.rng.random::<f64>() < self.params.solar_storm_prob;
            let impact = self.rng.random::<f64>() < self.params.micrometeoroid_prob;
            if storm || impact {
                tile.efficiency *= 1.0 - self.params.hazard_efficiency_loss;
            }
        }

        // 3. record aggregate state
        let shading = self.shading_fraction();
        let delta_t_effective_k = effective_temp_drop_k(shading, self.baseline.t_eff_k);
        let power_index: f64 = self
            .tiles
            .iter()
            .map(|tile| tile.efficiency * tile.material.power_yield)
            .sum();
        self.history.push(MonthRecord {
            month: self.month,
            tile_count: self.tiles.len(),
            shading_fraction: shading,
            delta_t_effective_k,
            delta_t_surface_k: surface_temp_drop_k(
                delta_t_effective_k,
                self.baseline.ecs_multiplier,
            ),
            power_index,
        });

        // 4. replicate, culling failed units before integration
        self.replicate();
    }

    fn replicate(&mut self) {
        let quota = self.params.replication_rate * self.params.redundancy_factor;

        // live counts per film present in the fleet
        let mut groups: Vec<(TileMaterial, usize)> = Vec::new();
        for tile in &self.tiles {
            match groups
                .iter_mut()
                .find(|(material, _)| material.name == tile.material.name)
            {
                Some((_, count)) => *count += 1,
                None => groups.push((tile.material, 1)),
            }
        }

        let mut fresh: Vec<Tile> = Vec::new();
        for (material, count) in groups {
            let attempts = (count as f64 * quota).floor() as usize;
            for _ in 0..attempts {
                if self.rng.random::<f64>() >= material.replication_error {
                    fresh.push(Tile {
                        material,
                        efficiency: material.efficiency,
                    });
                }
            }
        }

        self.tiles.extend(fresh);
    }

    /// Run the configured number of months and return the history.
    pub fn run(&mut self) -> &[MonthRecord] {
        if self.month > 0 {
            panic!("SwarmSim.run can only execute once");
        }
        for _ in 0..self.params.months {
            self.step();
        }
        &self.history
    }

    pub fn print_history(&self) {
        for record in &self.history {
            println!(
                "Month {:3}: Tiles={:5}, Shading={:6.4}%, ΔT={:+.3} K",
                record.month,
                record.tile_count,
                record.shading_fraction * 100.0,
                record.delta_t_surface_k
            );
        }
    }
}
