/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Scattering physics: atomic form factors, the per-element coefficient
//! database, and the geometric intensity corrections (Bragg angle,
//! Lorentz-polarization, thin-film absorption).

pub mod database;
pub mod errors;
mod form_factor;
mod geometry;

pub use errors::{Result, ScatteringError};
pub use form_factor::{FormFactor, FormFactorModel};
pub use geometry::{bragg_angle, lorentz_polarization, thickness_factor, SampleType};

use crate::utils::constants::{CO_KA_WAVELENGTH, CU_KA_WAVELENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// X-ray radiation type. Only the Co Kα and Cu Kα wavelengths are
/// supported; anything else resolves to Cu Kα via [`Radiation::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Radiation {
    #[serde(rename = "Co", alias = "Co Ka")]
    CoKa,
    #[serde(rename = "Cu", alias = "Cu Ka")]
    CuKa,
}

impl Radiation {
    /// Wavelength in Angstroms
    pub fn wavelength(&self) -> f64 {
        match self {
            Radiation::CoKa => CO_KA_WAVELENGTH,
            Radiation::CuKa => CU_KA_WAVELENGTH,
        }
    }

    /// Resolve a free-form label, falling back to Cu Kα with a logged
    /// warning for anything unrecognized. This preserves the historical
    /// default while making it visible.
    pub fn from_label(label: &str) -> Radiation {
        match label {
            "Co" | "Co Ka" => Radiation::CoKa,
            "Cu" | "Cu Ka" => Radiation::CuKa,
            other => {
                log::warn!("unknown radiation '{other}', defaulting to Cu Ka");
                Radiation::CuKa
            }
        }
    }
}

impl fmt::Display for Radiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radiation::CoKa => write!(f, "Co Ka"),
            Radiation::CuKa => write!(f, "Cu Ka"),
        }
    }
}
