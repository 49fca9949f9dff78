/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Error types for the crystal module

/// Error types for the crystal module
#[derive(Debug, thiserror::Error)]
pub enum CrystalError {
    #[error("Unknown space group: {0}")]
    UnknownSpaceGroup(String),

    #[error("Unknown site '{site}' for space group {group}")]
    UnknownSite { site: String, group: String },

    #[error("Space group {group} requires the '{name}' lattice constant")]
    MissingLatticeConstant { name: char, group: String },

    #[error("Invalid lattice constant {name} = {value} A (must be positive)")]
    InvalidLatticeConstant { name: char, value: f64 },
}

/// Result type for crystal operations
pub type Result<T> = std::result::Result<T, CrystalError>;
