/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Error types for the pattern module

use crate::crystal::CrystalError;
use crate::scattering::ScatteringError;

/// Error types for pattern configuration and enumeration
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("No reflections with nonzero intensity inside the two-theta window {min}..{max} degrees")]
    EmptyPattern { min: f64, max: f64 },

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Invalid occupancy {occupancy} for {element} on site {site}: must be within [0, 1]")]
    InvalidOccupancy {
        element: String,
        site: String,
        occupancy: f64,
    },

    #[error("hkl search bound must be positive, got {0}")]
    InvalidHklBound(i32),

    #[error("Invalid two-theta window: {min}..{max} degrees")]
    InvalidWindow { min: f64, max: f64 },

    #[error(transparent)]
    Crystal(#[from] CrystalError),

    #[error(transparent)]
    Scattering(#[from] ScatteringError),
}

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
