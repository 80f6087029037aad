// Baseline override isolation and scenario loading tests
// Two consumers must never see each other's local overrides

use shade_swarm_rust::baseline::Baseline;
use shade_swarm_rust::error::ShadeError;
use shade_swarm_rust::scenario::Scenario;
use shade_swarm_rust::sunshade::size_constellation;

use approx::assert_relative_eq;
use more_asserts::assert_lt;

#[test]
fn test_two_consumers_hold_independent_baselines() {
    println!("🔒 A local override must stay local");

    // consumer A models a premium film
    let consumer_a = Baseline::default()
        .with_kappa(0.99)
        .with_areal_density_kg_m2(0.0001);

    // consumer B reads the shared defaults afterwards
    let consumer_b = Baseline::default();

    assert_eq!(consumer_b.kappa, 0.95);
    assert_eq!(consumer_b.areal_density_kg_m2, 0.001);

    let report_a = size_constellation(0.10, &consumer_a);
    let report_b = size_constellation(0.10, &consumer_b);

    println!(
        "   A: {:.3e} t   B: {:.3e} t",
        report_a.total_mass_t, report_b.total_mass_t
    );

    // the lighter film shows up only in consumer A's totals
    assert_lt!(report_a.total_mass_t, report_b.total_mass_t);
    assert_relative_eq!(
        report_b.mass_per_satellite_kg,
        1000.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_scenario_file_roundtrip_through_disk() {
    println!("📄 A scenario survives the trip through a JSON file");

    let scenario = Scenario::from_json_str(
        r#"{
            "name": "thin-film-study",
            "baseline": { "areal_density_kg_m2": 0.0005, "kappa": 0.97 },
            "targets": [ { "label": "Deep cooling", "eta": 0.10 } ]
        }"#,
    )
    .expect("inline scenario is valid");

    let path = std::env::temp_dir().join("shade_swarm_scenario_test.json");
    std::fs::write(&path, serde_json::to_string_pretty(&scenario).unwrap()).unwrap();

    let loaded = Scenario::load(&path).expect("file scenario loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, "thin-film-study");
    assert_eq!(loaded.baseline.kappa, 0.97);
    assert_eq!(loaded.targets.len(), 1);

    // both copies price the study identically
    let from_memory = scenario.constellation_reports();
    let from_disk = loaded.constellation_reports();
    assert_relative_eq!(
        from_memory[0].1.total_mass_t,
        from_disk[0].1.total_mass_t,
        max_relative = 1e-12
    );
}

#[test]
fn test_missing_scenario_file_fails_fast() {
    let err = Scenario::load("/nonexistent/shade_swarm_missing.json").unwrap_err();
    assert!(matches!(err, ShadeError::Io(_)));
}

#[test]
fn test_scenario_with_defaults_only() {
    // a bare name is a valid study against the shared constants
    let scenario = Scenario::from_json_str(r#"{ "name": "defaults" }"#).unwrap();
    assert_eq!(scenario.baseline, Baseline::default());
    assert!(scenario.targets.is_empty());
    assert!(scenario.constellation_reports().is_empty());
}
