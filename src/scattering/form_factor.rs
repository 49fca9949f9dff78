/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Atomic form factor evaluation

use super::database::{self, GaussianRecord, PolynomialRecord};
use super::errors::{Result, ScatteringError};
use super::Radiation;
use num_complex::Complex64;
use serde::Deserialize;
use std::fmt;

/// Which parameterization of f0(s) to evaluate.
///
/// Both describe the same physical quantity; they come from different
/// reference fits and cover different element sets, so the choice is
/// explicit rather than silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactorModel {
    /// 5-Gaussian Waasmaier-Kirfel expansion (supports Debye-Waller)
    #[default]
    Gaussian,
    /// 5th-degree polynomial fit in s
    Polynomial,
}

impl fmt::Display for FormFactorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFactorModel::Gaussian => write!(f, "gaussian"),
            FormFactorModel::Polynomial => write!(f, "polynomial"),
        }
    }
}

/// A resolved form factor for one element: the coefficient record is
/// looked up once, then evaluated per reflection without further
/// fallible lookups.
#[derive(Debug, Clone, Copy)]
pub enum FormFactor {
    Gaussian(&'static GaussianRecord),
    Polynomial(&'static PolynomialRecord),
}

impl FormFactor {
    /// Resolve the record for an atomic number under the chosen model
    pub fn resolve(z: u32, model: FormFactorModel) -> Result<Self> {
        match model {
            FormFactorModel::Gaussian => database::gaussian_record(z)
                .map(FormFactor::Gaussian)
                .ok_or(ScatteringError::MissingRecord { z, model: "gaussian" }),
            FormFactorModel::Polynomial => database::polynomial_record(z)
                .map(FormFactor::Polynomial)
                .ok_or(ScatteringError::MissingRecord { z, model: "polynomial" }),
        }
    }

    /// Atomic form factor at d-spacing `d` (Angstroms).
    ///
    /// Computes s = 1/(2d), evaluates f0(s), then optionally adds the
    /// dispersion corrections f' + i f'' for the given radiation and
    /// multiplies by the Debye-Waller factor exp(-B s^2). The result is
    /// complex; the imaginary part is nonzero only through f''.
    ///
    /// Debye-Waller B is only tabulated for the Gaussian records;
    /// records without B are returned uncorrected even when the
    /// correction is requested.
    pub fn evaluate(
        &self,
        d: f64,
        radiation: Radiation,
        dispersion: bool,
        debye_waller: bool,
    ) -> Complex64 {
        let s = 1.0 / (2.0 * d);
        let s2 = s * s;
        match self {
            FormFactor::Gaussian(record) => {
                let mut f0 = record.c;
                for (a, b) in record.a.iter().zip(record.b.iter()) {
                    f0 += a * (-b * s2).exp();
                }
                let mut f = Complex64::new(f0, 0.0);
                if dispersion {
                    let disp = record.dispersion(radiation);
                    f += Complex64::new(disp.f_prime, disp.f_double_prime);
                }
                if debye_waller {
                    if let Some(b) = record.debye_waller_b {
                        f *= (-b * s2).exp();
                    }
                }
                f
            }
            FormFactor::Polynomial(record) => {
                // Horner evaluation of sum_i c_i s^i
                let f0 = record
                    .coefficients
                    .iter()
                    .rev()
                    .fold(0.0, |acc, c| acc * s + c);
                let mut f = Complex64::new(f0, 0.0);
                if dispersion {
                    let disp = record.dispersion(radiation);
                    f += Complex64::new(disp.f_prime, disp.f_double_prime);
                }
                f
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_forward_limit() {
        // s -> 0: f0 approaches sum(a) + c, roughly Z
        let f = FormFactor::resolve(27, FormFactorModel::Gaussian).unwrap();
        let v = f.evaluate(1e12, Radiation::CuKa, false, false);
        assert_relative_eq!(v.re, 26.993983, epsilon = 1e-6);
        assert_eq!(v.im, 0.0);
    }

    #[test]
    fn test_polynomial_forward_limit() {
        let f = FormFactor::resolve(26, FormFactorModel::Polynomial).unwrap();
        let v = f.evaluate(1e12, Radiation::CuKa, false, false);
        assert_relative_eq!(v.re, 26.001, epsilon = 1e-6);
    }

    #[test]
    fn test_polynomial_at_s() {
        // s = 0.25 (d = 2 A)
        let f = FormFactor::resolve(26, FormFactorModel::Polynomial).unwrap();
        let v = f.evaluate(2.0, Radiation::CuKa, false, false);
        assert_relative_eq!(v.re, 18.35375546875, epsilon = 1e-9);
    }

    #[test]
    fn test_corrections_compose() {
        let f = FormFactor::resolve(26, FormFactorModel::Gaussian).unwrap();
        let plain = f.evaluate(2.0, Radiation::CuKa, false, false);
        assert_relative_eq!(plain.re, 18.35944486783727, epsilon = 1e-9);
        assert_eq!(plain.im, 0.0);

        let disp = f.evaluate(2.0, Radiation::CuKa, true, false);
        assert_relative_eq!(disp.re, plain.re - 1.285, epsilon = 1e-9);
        assert_relative_eq!(disp.im, 3.185, epsilon = 1e-9);

        let full = f.evaluate(2.0, Radiation::CuKa, true, true);
        assert_relative_eq!(full.re, 16.728818544511423, epsilon = 1e-9);
        assert_relative_eq!(full.im, 3.1205282207817833, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_record() {
        assert!(FormFactor::resolve(25, FormFactorModel::Gaussian).is_err());
        assert!(FormFactor::resolve(25, FormFactorModel::Polynomial).is_ok());
    }
}
