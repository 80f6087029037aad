/// Full-Dyson (η = 1) sensitivity to reflector areal density, 5 g/m² down
/// to 0.1 g/m².
use shade_swarm_rust::baseline::Baseline;
use shade_swarm_rust::scalability::{GrowthParams, scale_roadmap};

fn main() {
    let growth = GrowthParams::default();
    let densities = [0.005, 0.001, 0.0005, 0.0001];

    println!("Full Dyson (η=1.0) sensitivity to areal density");
    for density in densities {
        let baseline = Baseline::default().with_areal_density_kg_m2(density);
        let report = scale_roadmap(1.0, &baseline, &growth);
        let build_years = match report.years_self_replicating {
            Some(years) => format!("{} years to build", years),
            None => "never self-sufficient".to_string(),
        };
        println!(
            "{:4.1} g/m² → {:6.1} Gt mass, {}",
            density * 1000.0,
            report.total_mass_t / 1e9,
            build_years
        );
    }
}
