/// 100-year Oort-cloud swarm deployment scenarios with exponential fusion
/// fuel decay, from 1 AU out to 100 AU with progressively better fuels.
use shade_swarm_rust::stationkeeping::{StationKeepingParams, station_keeping};

fn main() {
    println!("100-Year Oort Cloud Swarm Deployment Scenarios (Exponential Decay)\n");
    println!(
        "{:>4} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "AU", "Time", "Half-Life", "Fusion In", "Power Out", "Fuel Left", "Prop/Mass"
    );
    println!("{}", "-".repeat(70));

    // (distance, mission time, fusion half-life, fusion base, beamed)
    let cases = [
        (1.0, 1.0, 12.0, 100.0, 0.0),
        (10.0, 10.0, 12.0, 150.0, 800.0),
        (50.0, 50.0, 12.0, 300.0, 0.0),
        (100.0, 100.0, 12.0, 500.0, 0.0),
        (100.0, 100.0, 18.0, 400.0, 0.0), // Li-6 breeding
        (100.0, 100.0, 100.0, 300.0, 0.0), // p-B11 dream fuel
    ];

    for (distance_au, mission_time_yr, half_life, fusion_kw, beamed_kw) in cases {
        let params = StationKeepingParams {
            distance_au,
            mission_time_yr,
            fusion_half_life_yr: half_life,
            fusion_base_kw: fusion_kw,
            beamed_microwave_kw: beamed_kw,
            ..Default::default()
        };
        let report = station_keeping(&params);

        println!(
            "{:4.0} {:6.0} {:9.0} {:9.0} {:9.0} {:8.1}% {:8.4}%",
            distance_au,
            mission_time_yr,
            half_life,
            fusion_kw,
            report.power_kw,
            report.fusion_survival * 100.0,
            report.propellant_fraction * 100.0
        );
    }
}
