use serde::Serialize;

/// A tile film technology and its degradation/replication characteristics.
///
/// `monthly_degradation` is the fractional efficiency loss per month,
/// `replication_error` the probability a replicated tile fails inspection
/// and is culled before joining the swarm. `power_yield` is a relative
/// power-harvest index against the Kapton baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileMaterial {
    pub name: &'static str,
    pub efficiency: f64,
    pub monthly_degradation: f64,
    pub replication_error: f64,
    pub tile_area_m2: f64,
    pub power_yield: f64,
}

pub const KAPTON_SIO2: TileMaterial = TileMaterial {
    name: "Kapton_SiO2",
    efficiency: 0.95,
    monthly_degradation: 0.004,
    replication_error: 0.02,
    tile_area_m2: 1e6,
    power_yield: 1.0,
};

pub const MYLAR_AL: TileMaterial = TileMaterial {
    name: "Mylar_Al",
    efficiency: 0.92,
    monthly_degradation: 0.006,
    replication_error: 0.03,
    tile_area_m2: 1e6,
    power_yield: 0.9,
};

pub const GRAPHENE: TileMaterial = TileMaterial {
    name: "Graphene",
    efficiency: 0.98,
    monthly_degradation: 0.002,
    replication_error: 0.01,
    tile_area_m2: 1e6,
    power_yield: 1.1,
};

pub const MATERIAL_CATALOG: &[TileMaterial] = &[KAPTON_SIO2, MYLAR_AL, GRAPHENE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_materials_are_physical() {
        for material in MATERIAL_CATALOG {
            assert!(material.efficiency > 0.0 && material.efficiency <= 1.0);
            assert!(material.monthly_degradation >= 0.0 && material.monthly_degradation < 1.0);
            assert!(material.replication_error >= 0.0 && material.replication_error < 1.0);
            assert!(material.tile_area_m2 > 0.0);
        }
    }

    #[test]
    fn test_graphene_outlasts_mylar() {
        // the premium film degrades slower and replicates cleaner
        assert!(GRAPHENE.monthly_degradation < MYLAR_AL.monthly_degradation);
        assert!(GRAPHENE.replication_error < MYLAR_AL.replication_error);
    }
}
