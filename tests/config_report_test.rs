// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration files and orbit reports on disk.

mod common;

use lychrel_obstruction::certifier::Certifier;
use lychrel_obstruction::config::EngineConfig;
use lychrel_obstruction::digits::DigitSequence;
use lychrel_obstruction::report::OrbitReport;
use lychrel_obstruction::ring::Prime;
use std::fs;

#[test]
fn test_load_config_file() {
    let path = common::scratch_path("engine.toml");
    fs::write(&path, "prime = 7\nhensel_levels = 6\nrun_lift = false\n").unwrap();
    let config = EngineConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.prime, Prime::new(7).unwrap());
    assert_eq!(config.hensel_levels, 6);
    assert_eq!(config.empirical_levels, 10);
    assert!(!config.run_lift);
}

#[test]
fn test_write_report() {
    let seed = DigitSequence::from_u64(89);
    let config = EngineConfig {
        hensel_levels: 5,
        ..EngineConfig::default()
    };
    let log = Certifier::new(config.clone()).certify_orbit(seed.clone(), 30);
    let report = OrbitReport::new(seed, 30, config, log);

    let dir = common::scratch_path("reports");
    let path = dir.join("orbit_89.json");
    report.write(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["seed"], "89");
    assert_eq!(json["requested_iterations"], 30);
    assert_eq!(json["iterations"], 24);
    assert_eq!(json["reached_palindrome_at"], 23);
    assert_eq!(json["summary"]["ring_solvable"], 1);
    assert_eq!(json["results"].as_array().unwrap().len(), 24);
    assert_eq!(json["results"][23]["classification"], "ring_solvable");
    assert_eq!(json["config"]["hensel_levels"], 5);
}
