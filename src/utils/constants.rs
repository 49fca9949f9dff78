/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Physical constants used in the diffraction calculations

/// Co Kα wavelength in Angstroms
pub const CO_KA_WAVELENGTH: f64 = 1.79026;

/// Cu Kα wavelength in Angstroms
pub const CU_KA_WAVELENGTH: f64 = 1.54184;

/// Default bound on the brute-force |h|, |k|, |l| search
pub const DEFAULT_HKL_MAX: i32 = 10;

/// Default two-theta observation window in degrees
pub const DEFAULT_TWO_THETA_MIN: f64 = 5.0;
pub const DEFAULT_TWO_THETA_MAX: f64 = 120.0;
