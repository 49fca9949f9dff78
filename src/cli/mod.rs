/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Command line interface
//!
//! A calculation is described by a JSON document (space group, lattice
//! constants, radiation, correction toggles and occupant assignments);
//! the CLI prints the normalized peak list and optionally writes CSV
//! files for the peaks and the full reflection table.

use crate::export;
use crate::pattern::{compute_pattern, PatternConfig};
use crate::scattering::FormFactorModel;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "xrd-rs",
    version,
    about = "XRD pattern calculation for Heusler alloys and related structures"
)]
pub struct Cli {
    /// JSON calculation document
    pub config: PathBuf,

    /// Write the normalized peak list to this CSV file
    #[arg(long, value_name = "FILE")]
    pub peaks_csv: Option<PathBuf>,

    /// Write the full reflection table to this CSV file
    #[arg(long, value_name = "FILE")]
    pub reflections_csv: Option<PathBuf>,

    /// Print every allowed reflection, not just the merged peak list
    #[arg(long)]
    pub list_reflections: bool,

    /// Report sqrt(I) instead of I (the maximum scales to 10)
    #[arg(long)]
    pub sqrt: bool,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;
    let mut config: PatternConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", cli.config.display()))?;
    if cli.sqrt {
        config.sqrt_intensities = true;
    }

    println!(
        "{} ({}) structure, {} radiation",
        config.space_group,
        config.space_group.symbol(),
        config.radiation
    );
    println!("a lattice parameter {} A", config.lattice.a);
    if let Some(b) = config.lattice.b {
        println!("b lattice parameter {b} A");
    }
    if let Some(c) = config.lattice.c {
        println!("c lattice parameter {c} A");
    }
    match config.sample_type {
        crate::scattering::SampleType::Powder => {
            println!("Powder Lorentz-polarization correction")
        }
        crate::scattering::SampleType::SingleCrystal => {
            println!("Single crystal Lorentz-polarization correction")
        }
    }
    println!(
        "Dispersion corrections f' and f'' {}",
        if config.dispersion { "included" } else { "NOT included" }
    );
    if config.form_factor == FormFactorModel::Gaussian {
        println!(
            "Debye-Waller corrections {}",
            if config.debye_waller { "included" } else { "NOT included" }
        );
    }
    match &config.film {
        Some(film) => println!(
            "Thin film: thickness correction applied, t={} cm, mu={} 1/cm",
            film.thickness, film.mu
        ),
        None => println!("Bulk assumed, no thickness correction"),
    }

    let occupants = config.resolve_occupants()?;
    let pattern = compute_pattern(&config)?;

    if cli.list_reflections {
        println!("\n2Theta\t indices\t I\t d (A)");
        for r in &pattern.reflections {
            if r.intensity != 0.0 {
                println!(
                    "{:8.2}\t {}\t {:10.2}\t {:8.3}",
                    r.two_theta, r.indices, r.intensity, r.d_spacing
                );
            }
        }
    }

    println!("\n2Theta\t I (normalized)");
    for peak in pattern.nonzero_peaks() {
        println!("{:8.2}\t{:>10.6}", peak.two_theta, peak.intensity);
    }

    println!("\nSite assignments:");
    for occ in &occupants {
        println!(
            "  {} on {} with occupancy {}",
            occ.symbol,
            occ.site.label(),
            occ.occupancy
        );
    }
    println!("Composition (atoms per cell): {}", export::composition_line(&occupants));
    println!("Max peak at {:.4}", pattern.max_peak_angle);

    if let Some(path) = &cli.peaks_csv {
        export::write_peak_list(path, &pattern)?;
        println!("Wrote peak list to {}", path.display());
    }
    if let Some(path) = &cli.reflections_csv {
        export::write_reflection_table(path, &config, &occupants, &pattern)?;
        println!("Wrote reflection table to {}", path.display());
    }

    Ok(())
}
