/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Wyckoff site representation

use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// A named Wyckoff position: a label such as "c8" plus the ordered list
/// of symmetry-equivalent fractional coordinates generated by the space
/// group.
///
/// Labels follow the Wyckoff letter + multiplicity convention of the
/// reference tables ("a4", "h6", ...). The coordinate list is the
/// reduced basis used in the structure-factor sum, so its length can be
/// smaller than the nominal multiplicity for centered cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    label: &'static str,
    positions: Vec<[f64; 3]>,
}

impl Site {
    pub(crate) fn new(label: &'static str, positions: Vec<[f64; 3]>) -> Self {
        Self { label, positions }
    }

    /// The Wyckoff label, e.g. "c8"
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The symmetry-equivalent fractional coordinates
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Number of positions in the reduced coordinate basis
    pub fn multiplicity(&self) -> usize {
        self.positions.len()
    }

    /// Geometric part of the structure factor:
    /// `sum_j exp(2 pi i (x_j h + y_j k + z_j l))` over every position.
    ///
    /// Group-and-site-specific extinction conditions are applied by
    /// [`crate::crystal::SpaceGroup::structure_factor`], not here.
    pub fn phase_sum(&self, h: i32, k: i32, l: i32) -> Complex64 {
        let (h, k, l) = (f64::from(h), f64::from(k), f64::from(l));
        self.positions
            .iter()
            .map(|&[x, y, z]| Complex64::cis(2.0 * PI * (x * h + y * k + z * l)))
            .sum()
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_phase_sum_origin_site() {
        let site = Site::new("a4", vec![[0.0, 0.0, 0.0]]);
        let f = site.phase_sum(3, 1, 2);
        assert_relative_eq!(f.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_sum_body_center() {
        let site = Site::new("b4", vec![[0.5, 0.5, 0.5]]);
        // odd index sum gives exp(i pi) = -1
        let f = site.phase_sum(1, 1, 1);
        assert_relative_eq!(f.re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(f.im, 0.0, epsilon = 1e-10);
        // even index sum gives +1
        let f = site.phase_sum(2, 2, 0);
        assert_relative_eq!(f.re, 1.0, epsilon = 1e-12);
    }
}
