/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

use std::fs;
use xrd_rs::export::{composition_line, write_peak_list, write_reflection_table};
use xrd_rs::{compute_pattern, LatticeConstants, PatternConfig, SpaceGroup};

fn heusler_config() -> PatternConfig {
    let mut config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
        .with_occupant("Co", "c8", 1.0)
        .with_occupant("Fe", "b4", 1.0)
        .with_occupant("Ge", "a4", 1.0);
    config.dispersion = false;
    config.debye_waller = false;
    config
}

#[test]
fn test_reflection_table_layout() {
    let config = heusler_config();
    let occupants = config.resolve_occupants().unwrap();
    let pattern = compute_pattern(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reflections.csv");
    write_reflection_table(&path, &config, &occupants, &pattern).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "SG225");
    assert!(lines[1].starts_with("a (A) lattice parameter,6"));
    assert_eq!(lines[2], "Elements,Co,Fe,Ge");
    assert_eq!(lines[3], "Sites,c8,b4,a4");
    assert_eq!(lines[4], "Occupancy,1,1,1");
    assert_eq!(lines[5], "2T,h,k,l,F_Co(c8),F_Fe(b4),F_Ge(a4),I,d");

    // one row per nonzero reflection, none for extinguished ones
    let rows = &lines[6..];
    let nonzero = pattern.reflections.iter().filter(|r| r.intensity != 0.0).count();
    assert_eq!(rows.len(), nonzero);
    // structure factors are printed as a+bi with four decimals
    assert!(rows[0].contains("i,"));
}

#[test]
fn test_hexagonal_table_has_four_index_header() {
    let mut config = PatternConfig::new(SpaceGroup::P63mmc, LatticeConstants::with_c(2.51, 4.07))
        .with_occupant("Co", "a2", 1.0);
    config.dispersion = false;
    config.debye_waller = false;
    let occupants = config.resolve_occupants().unwrap();
    let pattern = compute_pattern(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reflections.csv");
    write_reflection_table(&path, &config, &occupants, &pattern).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("c (A) lattice parameter,4.07"));
    let header = contents
        .lines()
        .find(|l| l.starts_with("2T,"))
        .unwrap();
    assert!(header.starts_with("2T,h,k,i,l,"));
}

#[test]
fn test_peak_list_skips_zero_intensity() {
    let config = heusler_config();
    let pattern = compute_pattern(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("peaks.csv");
    write_peak_list(&path, &pattern).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "2T,indices,I (norm.),d (A)");
    assert_eq!(lines.len() - 1, pattern.nonzero_peaks().count());
    // strongest peak is present with its normalized intensity
    assert!(lines.iter().any(|l| l.starts_with("42.6202,") && l.contains("100.000000")));
}

#[test]
fn test_composition_line() {
    let config = heusler_config();
    let occupants = config.resolve_occupants().unwrap();
    assert_eq!(composition_line(&occupants), "Co 2.000  Fe 1.000  Ge 1.000");
}
