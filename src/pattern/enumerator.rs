/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Brute-force reflection enumeration and peak aggregation

use super::config::PatternConfig;
use super::errors::{PatternError, Result};
use super::peak::{DiffractionPattern, MillerIndices, Peak, Reflection};
use crate::scattering::{bragg_angle, lorentz_polarization, thickness_factor};
use num_complex::Complex64;
use rayon::prelude::*;
use std::collections::BTreeMap;

struct MergedPeak {
    indices: MillerIndices,
    intensity: f64,
    d_spacing: f64,
}

/// Compute the diffraction pattern for one configuration.
///
/// Sweeps every (h,k,l) inside the configured bounds, keeps the
/// reflections the space group allows and the angle window admits,
/// merges reflections sharing an identical computed two-theta, and
/// normalizes the merged intensities to the strongest peak.
///
/// The sweep is parallelized over h; the reflection list is then sorted
/// by (two-theta, h, k, l) and merged in that order, so the result does
/// not depend on the parallel split.
pub fn compute_pattern(config: &PatternConfig) -> Result<DiffractionPattern> {
    config.validate()?;
    let occupants = config.resolve_occupants()?;

    let sg = config.space_group;
    let lattice = config.lattice;
    let radiation = config.radiation;
    let lambda = radiation.wavelength();
    let [hmax, kmax, lmax] = config.hkl_max;
    let [tt_min, tt_max] = config.two_theta_range;

    let mut reflections: Vec<Reflection> = (-hmax..=hmax)
        .into_par_iter()
        .flat_map_iter(|h| {
            let occupants = &occupants;
            let mut local = Vec::new();
            for k in -kmax..=kmax {
                for l in -lmax..=lmax {
                    if !sg.selection_rule(h, k, l) {
                        continue;
                    }
                    let d = sg.d_spacing(h, k, l, &lattice);
                    let two_theta = bragg_angle(d, lambda);
                    // exclusive window, as measured patterns are cropped
                    if !(two_theta > tt_min && two_theta < tt_max) {
                        continue;
                    }
                    let lp = lorentz_polarization(d, lambda, config.sample_type);
                    let g = match &config.film {
                        Some(film) => thickness_factor(d, lambda, film.mu, film.thickness),
                        None => 1.0,
                    };
                    let mut structure_factors = Vec::with_capacity(occupants.len());
                    let mut total = Complex64::new(0.0, 0.0);
                    for occ in occupants {
                        let f_site = sg.structure_factor(&occ.site, h, k, l) * occ.occupancy;
                        let f_atom = occ.form_factor.evaluate(
                            d,
                            radiation,
                            config.dispersion,
                            config.debye_waller,
                        );
                        total += f_site * f_atom;
                        structure_factors.push(f_site);
                    }
                    let intensity = g * lp * total.norm_sqr();
                    let indices = if sg.is_hexagonal() {
                        MillerIndices::hexagonal(h, k, l)
                    } else {
                        MillerIndices::new(h, k, l)
                    };
                    local.push(Reflection {
                        two_theta,
                        indices,
                        structure_factors,
                        intensity,
                        d_spacing: d,
                    });
                }
            }
            local
        })
        .collect();

    reflections.sort_by(|a, b| {
        a.two_theta
            .total_cmp(&b.two_theta)
            .then(a.indices.h.cmp(&b.indices.h))
            .then(a.indices.k.cmp(&b.indices.k))
            .then(a.indices.l.cmp(&b.indices.l))
    });

    // Merge by exact equality of the computed angle: symmetry-equivalent
    // reflections produce bit-identical two-theta values and are
    // indistinguishable in a measurement. Keyed by the bit pattern,
    // which orders like the (positive) angle itself.
    let mut merged: BTreeMap<u64, MergedPeak> = BTreeMap::new();
    for r in &reflections {
        merged
            .entry(r.two_theta.to_bits())
            .and_modify(|m| {
                m.intensity += r.intensity;
                // prefer the lexicographically largest contributor, so
                // the representative indices come out non-negative
                let current = (m.indices.h, m.indices.k, m.indices.l);
                let candidate = (r.indices.h, r.indices.k, r.indices.l);
                if candidate > current {
                    m.indices = r.indices;
                }
            })
            .or_insert(MergedPeak {
                indices: r.indices,
                intensity: r.intensity,
                d_spacing: r.d_spacing,
            });
    }

    log::debug!(
        "{} allowed reflections in window, {} merged peaks",
        reflections.len(),
        merged.len()
    );

    let empty = || PatternError::EmptyPattern {
        min: tt_min,
        max: tt_max,
    };
    if merged.is_empty() {
        return Err(empty());
    }

    // Largest merged intensity and its angle; ties keep the higher angle
    let mut max_intensity = 0.0_f64;
    let mut max_peak_angle = 0.0_f64;
    for (&bits, m) in &merged {
        if m.intensity >= max_intensity {
            max_intensity = m.intensity;
            max_peak_angle = f64::from_bits(bits);
        }
    }
    if max_intensity <= 0.0 {
        return Err(empty());
    }

    let peaks = merged
        .into_iter()
        .map(|(bits, m)| {
            let mut intensity = 100.0 * m.intensity / max_intensity;
            if config.sqrt_intensities {
                intensity = intensity.sqrt();
            }
            Peak {
                two_theta: f64::from_bits(bits),
                indices: m.indices,
                intensity,
                d_spacing: m.d_spacing,
            }
        })
        .collect();

    Ok(DiffractionPattern {
        peaks,
        reflections,
        max_peak_angle,
    })
}
