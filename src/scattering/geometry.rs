/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Diffraction geometry: Bragg angle, Lorentz-polarization weighting
//! and the thin-film absorption factor

use serde::Deserialize;

/// Specimen type, selecting the Lorentz-polarization formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleType {
    #[default]
    Powder,
    SingleCrystal,
}

/// Two-theta Bragg angle in degrees for d-spacing `d` and wavelength
/// `lambda` (both Angstroms).
///
/// Returns 0.0 when lambda/2d > 1: the reflection is geometrically
/// inaccessible at this wavelength, and the 0 sentinel falls below any
/// sensible observation window.
pub fn bragg_angle(d: f64, lambda: f64) -> f64 {
    let ratio = lambda / (2.0 * d);
    if ratio <= 1.0 {
        2.0 * ratio.asin().to_degrees()
    } else {
        0.0
    }
}

/// Lorentz-polarization factor.
///
/// Powder: `(1 + cos^2 2theta) / (sin theta * sin 2theta)`;
/// single crystal: `(1 + cos^2 2theta) / (2 sin 2theta)`.
/// Returns 0.0 when the Bragg angle is not observable.
pub fn lorentz_polarization(d: f64, lambda: f64, sample: SampleType) -> f64 {
    let ratio = lambda / (2.0 * d);
    if ratio > 1.0 {
        return 0.0;
    }
    let theta = ratio.asin();
    let numerator = 1.0 + (2.0 * theta).cos().powi(2);
    match sample {
        SampleType::Powder => numerator / (theta.sin() * (2.0 * theta).sin()),
        SampleType::SingleCrystal => numerator / (2.0 * (2.0 * theta).sin()),
    }
}

/// Thin-film absorption/thickness factor `1 - exp(-4 mu t d / lambda)`,
/// with `mu` in 1/cm and `t` in cm. Bulk samples use 1.0 instead (the
/// caller skips this entirely when no film geometry is configured).
pub fn thickness_factor(d: f64, lambda: f64, mu: f64, thickness: f64) -> f64 {
    1.0 - (-4.0 * mu * thickness * d / lambda).exp()
}
