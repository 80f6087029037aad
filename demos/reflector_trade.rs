/// Minimum-mass reflector stacks for a ladder of reflectivity targets,
/// searched exactly over the near-term film catalog.
use shade_swarm_rust::reflector::{BASELINE_CANDIDATES, optimize_bruteforce};

fn main() {
    let targets = [0.90, 0.95, 0.98, 0.995];

    println!("Multi-Layer Reflector Optimization Results");
    println!("{}", "=".repeat(70));

    for target in targets {
        println!("\nTarget reflectivity: {:.3}", target);
        match optimize_bruteforce(target, &BASELINE_CANDIDATES, None) {
            Some(solution) => {
                println!(
                    "   Min areal mass    : {:6.3} g/m²",
                    solution.total_areal_mass_kg_m2 * 1000.0
                );
                println!(
                    "   Achieved R        : {:.5}",
                    solution.achieved_reflectivity
                );
                println!("   Layers used       : {}", solution.layers_used());
                print!("   Composition       :");
                for layer in &solution.selected_layers {
                    print!(
                        " {} ({:.2}, {:.2}g)",
                        layer.label,
                        layer.reflectivity,
                        layer.areal_mass_kg_m2 * 1000.0
                    );
                }
                println!();
            }
            None => println!("   Impossible with available layers"),
        }
    }
}
