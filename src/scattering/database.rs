/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Read-only per-element scattering-factor coefficient tables
//!
//! Two independent parameterizations of the atomic form factor f0(s),
//! s = sin(theta)/lambda, are carried:
//!
//! - a 5-Gaussian expansion `f0 = sum_i a_i exp(-b_i s^2) + c`
//!   (Waasmaier & Kirfel, Acta Cryst. A51, 416-431 (1995)), with a
//!   Debye-Waller B coefficient from Peng, Ren, Dudarev & Whelan at
//!   295 K where available;
//! - a 5th-degree polynomial fit `f0 = sum_i c_i s^i` to the
//!   International Tables 6.1.1.1 values.
//!
//! Each record carries dispersion corrections (f', f'') for both Co Kα
//! and Cu Kα, linearly interpolated from the NIST FFast tables; f'
//! includes the nuclear-Thompson and relativistic corrections. The
//! synthetic Z = 100 entry is the 50/50 Fe-Co average of the polynomial
//! table, kept because mixed Fe-Co sublattices are common in Heusler
//! work.

use once_cell::sync::Lazy;

use super::Radiation;

/// Anomalous-scattering corrections for one radiation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersion {
    /// f' (real part), including nuclear-Thompson and relativistic terms
    pub f_prime: f64,
    /// f'' (imaginary part)
    pub f_double_prime: f64,
}

/// 5-Gaussian Waasmaier-Kirfel form-factor record
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianRecord {
    pub a: [f64; 5],
    pub b: [f64; 5],
    pub c: f64,
    pub co_ka: Dispersion,
    pub cu_ka: Dispersion,
    /// Debye-Waller B in Angstrom^2 for the elemental crystal
    pub debye_waller_b: Option<f64>,
}

impl GaussianRecord {
    pub fn dispersion(&self, radiation: Radiation) -> Dispersion {
        match radiation {
            Radiation::CoKa => self.co_ka,
            Radiation::CuKa => self.cu_ka,
        }
    }
}

/// 5th-degree polynomial form-factor record, coefficients in ascending
/// powers of s
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRecord {
    pub coefficients: [f64; 6],
    pub co_ka: Dispersion,
    pub cu_ka: Dispersion,
}

impl PolynomialRecord {
    pub fn dispersion(&self, radiation: Radiation) -> Dispersion {
        match radiation {
            Radiation::CoKa => self.co_ka,
            Radiation::CuKa => self.cu_ka,
        }
    }
}

/// Atomic number of the synthetic 50/50 Fe-Co average entry
pub const FECO_PSEUDO_Z: u32 = 100;

const TI_GAUSSIAN: GaussianRecord = GaussianRecord {
    a: [9.818524, 1.522646, 1.703101, 1.768774, 7.082555],
    b: [8.001879, 0.029763, 39.885423, 120.1580, 0.532405],
    c: 0.102473,
    co_ka: Dispersion { f_prime: -0.15370, f_double_prime: 2.3142 },
    cu_ka: Dispersion { f_prime: -0.13049, f_double_prime: 1.8070 },
    debye_waller_b: Some(0.5173),
};

const FE_GAUSSIAN: GaussianRecord = GaussianRecord {
    a: [12.311098, 1.876623, 3.066177, 2.070451, 6.975185],
    b: [5.009415, 0.014461, 18.743041, 82.767874, 0.346506],
    c: -0.304931,
    co_ka: Dispersion { f_prime: -3.3891, f_double_prime: 0.47507 },
    cu_ka: Dispersion { f_prime: -1.285, f_double_prime: 3.185 },
    debye_waller_b: Some(0.3272),
};

const CO_GAUSSIAN: GaussianRecord = GaussianRecord {
    a: [12.914510, 2.481908, 3.466894, 2.106351, 6.960892],
    b: [4.507138, 0.009126, 16.438130, 76.987317, 0.314418],
    c: -0.936572,
    co_ka: Dispersion { f_prime: -2.0998, f_double_prime: 0.55705 },
    cu_ka: Dispersion { f_prime: -2.7647, f_double_prime: 3.6398 },
    debye_waller_b: Some(0.307),
};

const GE_GAUSSIAN: GaussianRecord = GaussianRecord {
    a: [16.540614, 1.567900, 3.727829, 3.345098, 6.785079],
    b: [2.866618, 0.012198, 13.432163, 58.866046, 0.210974],
    c: 0.018726,
    co_ka: Dispersion { f_prime: -0.72563, f_double_prime: 1.1446 },
    cu_ka: Dispersion { f_prime: -1.1475, f_double_prime: 0.88279 },
    debye_waller_b: Some(0.6041),
};

/// Gaussian record for an atomic number, if tabulated
pub fn gaussian_record(z: u32) -> Option<&'static GaussianRecord> {
    match z {
        22 => Some(&TI_GAUSSIAN),
        26 => Some(&FE_GAUSSIAN),
        27 => Some(&CO_GAUSSIAN),
        32 => Some(&GE_GAUSSIAN),
        _ => None,
    }
}

const AL_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [13.000, 1.5744, -347.93, 1974.7, -4533.9, 3760.6],
    co_ka: Dispersion { f_prime: 0.2551, f_double_prime: 0.3276 },
    cu_ka: Dispersion { f_prime: 0.2130, f_double_prime: 0.2455 },
};

const SI_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [13.986, 3.2804, -375.64, 1954.7, -4126.7, 3179.2],
    co_ka: Dispersion { f_prime: 0.2979, f_double_prime: 0.4384 },
    cu_ka: Dispersion { f_prime: 0.2541, f_double_prime: 0.3302 },
};

const TI_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [22.027, -1.4931, -423.94, 2286.0, -5328.8, 4628.8],
    co_ka: Dispersion { f_prime: -0.0617, f_double_prime: 2.3213 },
    cu_ka: Dispersion { f_prime: 0.2191, f_double_prime: 1.8069 },
};

const V_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [23.018, -0.3458, -422.51, 2194.2, -4992.1, 4262.4],
    co_ka: Dispersion { f_prime: -0.3871, f_double_prime: 2.6994 },
    cu_ka: Dispersion { f_prime: 0.0687, f_double_prime: 2.1097 },
};

const CR_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [24.012, -0.2731, -340.71, 1512.3, -3120.0, 2533.2],
    co_ka: Dispersion { f_prime: -0.9524, f_double_prime: 3.1130 },
    cu_ka: Dispersion { f_prime: -0.1635, f_double_prime: 2.4439 },
};

const MN_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [25.005, 1.0076, -405.86, 1968.7, -4290.2, 3555.6],
    co_ka: Dispersion { f_prime: -2.0793, f_double_prime: 3.5546 },
    cu_ka: Dispersion { f_prime: -0.5299, f_double_prime: 2.8052 },
};

const FE_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [26.001, 1.4161, -394.85, 1856.6, -3968.7, 3246.3],
    co_ka: Dispersion { f_prime: -3.3307, f_double_prime: 0.4901 },
    cu_ka: Dispersion { f_prime: -1.1336, f_double_prime: 3.1974 },
};

const CO_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [26.998, 1.6884, -382.6, 1744.9, -3658.7, 2953.2],
    co_ka: Dispersion { f_prime: -2.023, f_double_prime: 0.5731 },
    cu_ka: Dispersion { f_prime: -2.3653, f_double_prime: 3.6143 },
};

const NI_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [27.996, 1.8709, -370.04, 1638.4, -3371.7, 2865.9],
    co_ka: Dispersion { f_prime: -1.5664, f_double_prime: 0.6662 },
    cu_ka: Dispersion { f_prime: -3.0029, f_double_prime: 0.5091 },
};

const CU_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [29.000, 0.8695, -290.18, 1092.2, -2046.2, 1570.7],
    co_ka: Dispersion { f_prime: -1.2789, f_double_prime: 0.7700 },
    cu_ka: Dispersion { f_prime: -1.9646, f_double_prime: 0.5888 },
};

const ZN_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [29.993, 2.0638, -345.01, 1442.4, -2860.7, 2220.0],
    co_ka: Dispersion { f_prime: -1.0843, f_double_prime: 0.8857 },
    cu_ka: Dispersion { f_prime: -1.5491, f_double_prime: 0.6778 },
};

const GA_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [30.997, 1.6692, -391.71, 1769.8, -3634.4, 2838.8],
    co_ka: Dispersion { f_prime: -0.9200, f_double_prime: 1.0138 },
    cu_ka: Dispersion { f_prime: -1.2846, f_double_prime: 0.7736 },
};

const GE_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [31.987, 3.2051, -441.19, 2014.7, -4086.0, 3128.6],
    co_ka: Dispersion { f_prime: -0.7781, f_double_prime: 1.557 },
    cu_ka: Dispersion { f_prime: -1.0885, f_double_prime: 0.8855 },
};

const SN_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [49.989, 3.5716, -619.41, 2713.6, -5432.4, 4210.2],
    co_ka: Dispersion { f_prime: -0.3097, f_double_prime: 6.9896 },
    cu_ka: Dispersion { f_prime: 0.0259, f_double_prime: 5.4591 },
};

const SB_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [50.975, 5.443, -664.91, 2895.8, -5644.3, 4213.4],
    co_ka: Dispersion { f_prime: -0.5189, f_double_prime: 7.5367 },
    cu_ka: Dispersion { f_prime: -0.0562, f_double_prime: 5.8946 },
};

const GD_POLYNOMIAL: PolynomialRecord = PolynomialRecord {
    coefficients: [64.058, -5.0071, -653.45, 3073.1, -6751.1, 5752.2],
    co_ka: Dispersion { f_prime: -9.3863, f_double_prime: 3.9016 },
    cu_ka: Dispersion { f_prime: -8.8380, f_double_prime: 11.9157 },
};

// 50/50 Fe-Co average; provided because structure factors must not be
// averaged directly (intensity goes as f^2), so a mixed sublattice
// either uses two occupants or this pre-averaged form factor.
static FECO_POLYNOMIAL: Lazy<PolynomialRecord> = Lazy::new(|| {
    let avg = |x: f64, y: f64| (x + y) / 2.0;
    let fe = &FE_POLYNOMIAL;
    let co = &CO_POLYNOMIAL;
    let mut coefficients = [0.0; 6];
    coefficients[0] = 26.5;
    for i in 1..6 {
        coefficients[i] = avg(fe.coefficients[i], co.coefficients[i]);
    }
    PolynomialRecord {
        coefficients,
        co_ka: Dispersion {
            f_prime: avg(fe.co_ka.f_prime, co.co_ka.f_prime),
            f_double_prime: avg(fe.co_ka.f_double_prime, co.co_ka.f_double_prime),
        },
        cu_ka: Dispersion {
            f_prime: avg(fe.cu_ka.f_prime, co.cu_ka.f_prime),
            f_double_prime: avg(fe.cu_ka.f_double_prime, co.cu_ka.f_double_prime),
        },
    }
});

/// Polynomial record for an atomic number, if tabulated
pub fn polynomial_record(z: u32) -> Option<&'static PolynomialRecord> {
    match z {
        13 => Some(&AL_POLYNOMIAL),
        14 => Some(&SI_POLYNOMIAL),
        22 => Some(&TI_POLYNOMIAL),
        23 => Some(&V_POLYNOMIAL),
        24 => Some(&CR_POLYNOMIAL),
        25 => Some(&MN_POLYNOMIAL),
        26 => Some(&FE_POLYNOMIAL),
        27 => Some(&CO_POLYNOMIAL),
        28 => Some(&NI_POLYNOMIAL),
        29 => Some(&CU_POLYNOMIAL),
        30 => Some(&ZN_POLYNOMIAL),
        31 => Some(&GA_POLYNOMIAL),
        32 => Some(&GE_POLYNOMIAL),
        50 => Some(&SN_POLYNOMIAL),
        51 => Some(&SB_POLYNOMIAL),
        64 => Some(&GD_POLYNOMIAL),
        FECO_PSEUDO_Z => Some(Lazy::force(&FECO_POLYNOMIAL)),
        _ => None,
    }
}

/// Element symbol for the atomic numbers the tables cover
pub fn element_symbol(z: u32) -> Option<&'static str> {
    match z {
        13 => Some("Al"),
        14 => Some("Si"),
        22 => Some("Ti"),
        23 => Some("V"),
        24 => Some("Cr"),
        25 => Some("Mn"),
        26 => Some("Fe"),
        27 => Some("Co"),
        28 => Some("Ni"),
        29 => Some("Cu"),
        30 => Some("Zn"),
        31 => Some("Ga"),
        32 => Some("Ge"),
        50 => Some("Sn"),
        51 => Some("Sb"),
        64 => Some("Gd"),
        FECO_PSEUDO_Z => Some("FeCo"),
        _ => None,
    }
}

/// Atomic number for a symbol the tables cover
pub fn atomic_number(symbol: &str) -> Option<u32> {
    match symbol {
        "Al" => Some(13),
        "Si" => Some(14),
        "Ti" => Some(22),
        "V" => Some(23),
        "Cr" => Some(24),
        "Mn" => Some(25),
        "Fe" => Some(26),
        "Co" => Some(27),
        "Ni" => Some(28),
        "Cu" => Some(29),
        "Zn" => Some(30),
        "Ga" => Some(31),
        "Ge" => Some(32),
        "Sn" => Some(50),
        "Sb" => Some(51),
        "Gd" => Some(64),
        "FeCo" => Some(FECO_PSEUDO_Z),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup_roundtrip() {
        for z in [13, 14, 22, 26, 27, 32, 64, FECO_PSEUDO_Z] {
            let symbol = element_symbol(z).unwrap();
            assert_eq!(atomic_number(symbol), Some(z));
        }
        assert!(element_symbol(1).is_none());
        assert!(atomic_number("Xx").is_none());
    }

    #[test]
    fn test_gaussian_coverage() {
        assert!(gaussian_record(26).is_some());
        assert!(gaussian_record(25).is_none()); // only the polynomial table has Mn
        assert!(polynomial_record(25).is_some());
    }

    #[test]
    fn test_feco_average() {
        let feco = polynomial_record(FECO_PSEUDO_Z).unwrap();
        assert_relative_eq!(feco.coefficients[0], 26.5);
        assert_relative_eq!(feco.coefficients[1], (1.4161 + 1.6884) / 2.0);
        assert_relative_eq!(feco.cu_ka.f_prime, (-1.1336 + -2.3653) / 2.0);
    }

    #[test]
    fn test_dispersion_selection() {
        let fe = gaussian_record(26).unwrap();
        assert_relative_eq!(fe.dispersion(Radiation::CoKa).f_prime, -3.3891);
        assert_relative_eq!(fe.dispersion(Radiation::CuKa).f_double_prime, 3.185);
    }
}
