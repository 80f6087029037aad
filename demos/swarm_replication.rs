/// Two-year self-replicating swarm Monte Carlo: monthly degradation,
/// stochastic hazards, and replication with error culling.
use shade_swarm_rust::baseline::Baseline;
use shade_swarm_rust::swarm::{GRAPHENE, KAPTON_SIO2, MYLAR_AL, SwarmParams, SwarmSim};

fn main() {
    let baseline = Baseline::default();

    println!("Self-Replicating Swarm — 1000 Kapton tiles, 24 months\n");
    let mut sim = SwarmSim::new(SwarmParams::default(), &baseline);
    sim.run();
    sim.print_history();

    println!("\nMixed fleet — Kapton / Mylar / Graphene\n");
    let mixed = SwarmParams {
        fleet: vec![(KAPTON_SIO2, 500), (MYLAR_AL, 300), (GRAPHENE, 200)],
        ..Default::default()
    };
    let mut mixed_sim = SwarmSim::new(mixed, &baseline);
    mixed_sim.run();

    let last = mixed_sim.history().last().expect("history is never empty");
    println!(
        "After {} months: {} tiles, shading {:.4}%, ΔT_surface {:+.3} K, power index {:.0}",
        last.month,
        last.tile_count,
        last.shading_fraction * 100.0,
        last.delta_t_surface_k,
        last.power_index
    );
}
