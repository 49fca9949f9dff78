/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Reflection and peak records

use num_complex::Complex64;
use serde::Serialize;
use std::fmt;

/// Miller indices of a reflection. Hexagonal settings carry the
/// redundant fourth index i = -(h+k).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MillerIndices {
    pub h: i32,
    pub k: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<i32>,
    pub l: i32,
}

impl MillerIndices {
    pub fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, i: None, l }
    }

    pub fn hexagonal(h: i32, k: i32, l: i32) -> Self {
        Self {
            h,
            k,
            i: Some(-(h + k)),
            l,
        }
    }
}

impl fmt::Display for MillerIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.i {
            Some(i) => write!(f, "({},{},{},{})", self.h, self.k, i, self.l),
            None => write!(f, "({},{},{})", self.h, self.k, self.l),
        }
    }
}

/// One allowed brute-force reflection before merging.
///
/// `structure_factors` holds each occupant's structure factor already
/// scaled by its occupancy, in occupant order.
#[derive(Debug, Clone)]
pub struct Reflection {
    pub two_theta: f64,
    pub indices: MillerIndices,
    pub structure_factors: Vec<Complex64>,
    /// Raw (unnormalized) intensity including all corrections
    pub intensity: f64,
    pub d_spacing: f64,
}

/// One merged, normalized output peak
#[derive(Debug, Clone, Serialize)]
pub struct Peak {
    pub two_theta: f64,
    /// Representative indices of one contributing reflection
    pub indices: MillerIndices,
    /// Intensity normalized to 100 at the maximum (10 in sqrt mode)
    pub intensity: f64,
    pub d_spacing: f64,
}

/// Result of one pattern computation
#[derive(Debug, Clone)]
pub struct DiffractionPattern {
    /// Merged peaks, sorted by ascending two-theta
    pub peaks: Vec<Peak>,
    /// Every allowed in-window reflection, sorted by two-theta then
    /// indices; kept for detailed reporting
    pub reflections: Vec<Reflection>,
    /// Two-theta of the strongest merged peak
    pub max_peak_angle: f64,
}

impl DiffractionPattern {
    /// Peaks with nonzero intensity, in ascending-angle order
    pub fn nonzero_peaks(&self) -> impl Iterator<Item = &Peak> {
        self.peaks.iter().filter(|p| p.intensity != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miller_display() {
        assert_eq!(MillerIndices::new(1, -1, 2).to_string(), "(1,-1,2)");
        assert_eq!(MillerIndices::hexagonal(1, 1, 0).to_string(), "(1,1,-2,0)");
    }
}
