/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Crystal structure description: space groups, Wyckoff sites and
//! lattice constants
//!
//! The [`SpaceGroup`] enum is the dispatch point for everything that
//! varies per group: the reflection selection rule, the per-site
//! structure-factor condition, the d-spacing formula and the generation
//! of symmetry-equivalent site coordinates.

pub mod errors;
mod lattice;
mod site;
mod space_group;

pub use errors::{CrystalError, Result};
pub use lattice::LatticeConstants;
pub use site::Site;
pub use space_group::{CrystalSystem, SpaceGroup, StructuralParameters};
