/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! CSV export of reflection tables and peak lists

use crate::crystal::CrystalSystem;
use crate::pattern::{DiffractionPattern, Occupant, PatternConfig};
use num_complex::Complex64;
use std::path::Path;

/// Error types for the export module
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

fn format_complex(c: Complex64) -> String {
    format!("{:.4}{:+.4}i", c.re, c.im)
}

/// One-line composition summary: atoms per cell for each occupant
pub fn composition_line(occupants: &[Occupant]) -> String {
    occupants
        .iter()
        .map(|o| format!("{} {:.3}", o.symbol, o.atoms_per_cell()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Write the full reflection table: calculation metadata, then one row
/// per nonzero-intensity reflection with per-occupant structure
/// factors, raw intensity and d-spacing.
pub fn write_reflection_table(
    path: &Path,
    config: &PatternConfig,
    occupants: &[Occupant],
    pattern: &DiffractionPattern,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    writer.write_record([config.space_group.to_string()])?;
    writer.write_record(["a (A) lattice parameter".to_string(), config.lattice.a.to_string()])?;
    match config.space_group.crystal_system() {
        CrystalSystem::Cubic => {}
        CrystalSystem::Hexagonal | CrystalSystem::Tetragonal => {
            writer.write_record(["c (A) lattice parameter".to_string(), config.lattice.c().to_string()])?;
        }
        CrystalSystem::Orthorhombic => {
            writer.write_record(["b (A) lattice parameter".to_string(), config.lattice.b().to_string()])?;
            writer.write_record(["c (A) lattice parameter".to_string(), config.lattice.c().to_string()])?;
        }
    }
    let elements: Vec<String> = occupants.iter().map(|o| o.symbol.clone()).collect();
    let sites: Vec<String> = occupants.iter().map(|o| o.site.label().to_string()).collect();
    let occupancies: Vec<String> = occupants.iter().map(|o| o.occupancy.to_string()).collect();
    writer.write_record(["Elements".to_string()].into_iter().chain(elements))?;
    writer.write_record(["Sites".to_string()].into_iter().chain(sites))?;
    writer.write_record(["Occupancy".to_string()].into_iter().chain(occupancies))?;

    let hexagonal = config.space_group.is_hexagonal();
    let mut header: Vec<String> = if hexagonal {
        vec!["2T".into(), "h".into(), "k".into(), "i".into(), "l".into()]
    } else {
        vec!["2T".into(), "h".into(), "k".into(), "l".into()]
    };
    for occ in occupants {
        header.push(format!("F_{}({})", occ.symbol, occ.site.label()));
    }
    header.push("I".into());
    header.push("d".into());
    writer.write_record(&header)?;

    for r in &pattern.reflections {
        if r.intensity == 0.0 {
            continue;
        }
        let mut row: Vec<String> = vec![format!("{:.4}", r.two_theta)];
        row.push(r.indices.h.to_string());
        row.push(r.indices.k.to_string());
        if let Some(i) = r.indices.i {
            row.push(i.to_string());
        }
        row.push(r.indices.l.to_string());
        for f in &r.structure_factors {
            row.push(format_complex(*f));
        }
        row.push(format!("{:.6}", r.intensity));
        row.push(format!("{:.4}", r.d_spacing));
        writer.write_record(&row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the normalized peak list, skipping zero-intensity peaks
pub fn write_peak_list(path: &Path, pattern: &DiffractionPattern) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["2T", "indices", "I (norm.)", "d (A)"])?;
    for peak in pattern.nonzero_peaks() {
        writer.write_record([
            format!("{:.4}", peak.two_theta),
            peak.indices.to_string(),
            format!("{:.6}", peak.intensity),
            format!("{:.4}", peak.d_spacing),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
