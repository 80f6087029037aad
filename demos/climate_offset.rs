/// The 1.8% climate-offset case: the constellation needed to cancel
/// present-day radiative forcing with an optimistic 0.5 g/m² film.
use shade_swarm_rust::baseline::Baseline;
use shade_swarm_rust::sunshade::size_constellation;

fn main() {
    let baseline = Baseline::default().with_areal_density_kg_m2(0.0005);
    let report = size_constellation(0.018, &baseline);

    println!("1.8% Climate Offset Case");
    println!("{}", "-".repeat(50));
    println!("{:<28}: {:>14.2}", "eta_target", report.eta_target);
    println!("{:<28}: {:>14.0}", "satellites", report.satellite_count);
    println!(
        "{:<28}: {:>14.2}",
        "shade area per sat (km²)", report.shade_area_per_sat_km2
    );
    println!(
        "{:<28}: {:>14.0}",
        "total shade area (km²)", report.total_shade_area_km2
    );
    println!(
        "{:<28}: {:>14.2}",
        "areal density (g/m²)", report.areal_density_g_m2
    );
    println!(
        "{:<28}: {:>14.0}",
        "mass per satellite (kg)", report.mass_per_satellite_kg
    );
    println!("{:<28}: {:>14.0}", "total mass (t)", report.total_mass_t);
    println!("{:<28}: {:>14.0}", "launches", report.launches_required);
    println!("{:<28}: {:>14.0}", "years at 20/yr", report.years_at_cadence);
    println!(
        "{:<28}: {:>14.2}",
        "ΔT effective (K)", report.delta_t_effective_k
    );
    println!(
        "{:<28}: {:>14.2}",
        "ΔT surface (K)", report.delta_t_surface_k
    );
}
