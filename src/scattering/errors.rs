/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Error types for the scattering module

/// Error types for the scattering module
#[derive(Debug, thiserror::Error)]
pub enum ScatteringError {
    #[error("No {model} scattering-factor record for atomic number {z}")]
    MissingRecord { z: u32, model: &'static str },

    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),
}

/// Result type for scattering operations
pub type Result<T> = std::result::Result<T, ScatteringError>;
