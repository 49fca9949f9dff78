/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Pattern enumeration: configuration, brute-force (h,k,l) sweep and
//! the resulting peak list
//!
//! The enumerator deliberately brute-forces every index combination
//! inside the configured bounds instead of reducing by symmetry;
//! reflections that land on the same Bragg angle merge additively, so
//! no multiplicity-factor bookkeeping is needed.

mod config;
mod enumerator;
pub mod errors;
mod peak;

pub use config::{FilmGeometry, Occupant, OccupantSpec, PatternConfig};
pub use enumerator::compute_pattern;
pub use errors::{PatternError, Result};
pub use peak::{DiffractionPattern, MillerIndices, Peak, Reflection};
