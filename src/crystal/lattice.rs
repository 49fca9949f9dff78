/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Lattice constants

use serde::Deserialize;

/// Lattice constants in Angstroms.
///
/// `a` is always required. `b` is only meaningful for orthorhombic
/// groups and `c` for hexagonal, tetragonal and orthorhombic groups;
/// [`crate::crystal::SpaceGroup::check_lattice`] verifies that
/// everything the chosen group needs is present and positive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatticeConstants {
    /// a lattice constant in Angstroms
    pub a: f64,
    /// b lattice constant in Angstroms (orthorhombic only)
    #[serde(default)]
    pub b: Option<f64>,
    /// c lattice constant in Angstroms (hexagonal/tetragonal/orthorhombic)
    #[serde(default)]
    pub c: Option<f64>,
}

impl LatticeConstants {
    /// Cubic cell with a single lattice constant
    pub fn cubic(a: f64) -> Self {
        Self { a, b: None, c: None }
    }

    /// Cell with distinct a and c constants (hexagonal or tetragonal)
    pub fn with_c(a: f64, c: f64) -> Self {
        Self {
            a,
            b: None,
            c: Some(c),
        }
    }

    /// Orthorhombic cell with three distinct constants
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b: Some(b),
            c: Some(c),
        }
    }

    /// b constant, falling back to a when not set.
    ///
    /// Only call after the group's lattice check has passed; the
    /// fallback exists so cubic callers never touch an unset field.
    pub fn b(&self) -> f64 {
        self.b.unwrap_or(self.a)
    }

    /// c constant, falling back to a when not set.
    pub fn c(&self) -> f64 {
        self.c.unwrap_or(self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let cubic = LatticeConstants::cubic(6.0);
        assert_eq!(cubic.a, 6.0);
        assert_eq!(cubic.b(), 6.0);
        assert_eq!(cubic.c(), 6.0);

        let tet = LatticeConstants::with_c(3.9, 8.0);
        assert_eq!(tet.b(), 3.9);
        assert_eq!(tet.c(), 8.0);

        let ortho = LatticeConstants::orthorhombic(5.0, 10.97, 6.37);
        assert_eq!(ortho.b(), 10.97);
        assert_eq!(ortho.c(), 6.37);
    }

    #[test]
    fn test_deserialize_partial() {
        let lat: LatticeConstants = serde_json::from_str(r#"{"a": 6.0}"#).unwrap();
        assert_eq!(lat.a, 6.0);
        assert!(lat.b.is_none());
        assert!(lat.c.is_none());
    }
}
