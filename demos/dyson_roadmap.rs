/// Roadmap ladder from climate SRM to a full statite swarm: launch-only,
/// exponential-cadence, and self-replicating-factory timelines per target.
use shade_swarm_rust::baseline::Baseline;
use shade_swarm_rust::scalability::{GrowthParams, print_roadmap_table, roadmap};

fn main() {
    let baseline = Baseline::default().with_areal_density_kg_m2(0.0005);
    let growth = GrowthParams::default();

    let targets = [
        0.018, // current climate offset (~2.7 W/m² forcing)
        0.10,  // deep cooling / ice-age prevention
        0.30,  // 30% swarm, significant energy capture
        0.50,  // half Dyson
        0.99,  // near-complete occlusion
        1.00,  // statite-swarm limit
    ];

    let reports = roadmap(&targets, &baseline, &growth);
    print_roadmap_table(&reports);

    println!();
    for report in &reports {
        let self_rep = match report.years_self_replicating {
            Some(years) => format!("{} yr (self-rep)", years),
            None => "∞ (self-rep)".to_string(),
        };
        println!(
            "η={:5.1}% → {:6.1} Gt | {:4.0} yr (launches) | {}",
            report.eta_target * 100.0,
            report.total_mass_t / 1e9,
            report.years_exponential_cadence,
            self_rep
        );
    }
}
