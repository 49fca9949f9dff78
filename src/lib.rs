/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! # xrd-rs
//!
//! A Rust implementation of an X-ray diffraction pattern calculator for
//! Heusler alloys and related cubic, hexagonal, tetragonal and
//! orthorhombic structures.
//!
//! Given a space group, lattice constants, radiation and a set of site
//! occupants, the crate enumerates all (h,k,l) reflections up to a
//! configurable bound, applies the space-group selection rules, combines
//! complex structure factors with atomic scattering factors (optionally
//! with dispersion and Debye-Waller corrections), weights by the
//! Lorentz-polarization factor and an optional thin-film absorption
//! factor, and produces a normalized, sorted peak list.

pub mod cli;
pub mod crystal;
pub mod export;
pub mod pattern;
pub mod scattering;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crystal::{CrystalSystem, LatticeConstants, Site, SpaceGroup, StructuralParameters};
pub use pattern::{compute_pattern, DiffractionPattern, PatternConfig, Peak};
pub use scattering::{FormFactorModel, Radiation, SampleType};
