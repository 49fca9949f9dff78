/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

//! Pattern computation configuration

use super::errors::{PatternError, Result};
use crate::crystal::{LatticeConstants, Site, SpaceGroup, StructuralParameters};
use crate::scattering::{database, FormFactor, FormFactorModel, Radiation, SampleType};
use crate::utils::constants::{DEFAULT_HKL_MAX, DEFAULT_TWO_THETA_MAX, DEFAULT_TWO_THETA_MIN};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Thin-film geometry for the absorption/thickness correction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FilmGeometry {
    /// Film thickness in cm
    pub thickness: f64,
    /// Linear absorption coefficient in 1/cm
    pub mu: f64,
}

/// One occupant assignment as written in a calculation document:
/// an element symbol, a Wyckoff site label and an occupancy fraction
#[derive(Debug, Clone, Deserialize)]
pub struct OccupantSpec {
    pub element: String,
    pub site: String,
    pub occupancy: f64,
}

/// A resolved occupant, ready for enumeration
#[derive(Debug, Clone)]
pub struct Occupant {
    pub symbol: String,
    pub atomic_number: u32,
    pub site: Site,
    pub occupancy: f64,
    pub form_factor: FormFactor,
}

impl Occupant {
    /// Atoms this occupant contributes per cell (site positions times
    /// occupancy), used for the composition summary
    pub fn atoms_per_cell(&self) -> f64 {
        self.site.multiplicity() as f64 * self.occupancy
    }
}

/// Immutable configuration for one pattern computation. Deserializes
/// from a JSON calculation document; everything but the space group,
/// lattice and occupants has defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    pub space_group: SpaceGroup,
    pub lattice: LatticeConstants,
    #[serde(
        default = "default_radiation",
        deserialize_with = "radiation_with_fallback"
    )]
    pub radiation: Radiation,
    /// Inclusive bounds on |h|, |k|, |l| for the brute-force sweep
    #[serde(default = "default_hkl_max")]
    pub hkl_max: [i32; 3],
    /// Exclusive two-theta observation window in degrees
    #[serde(default = "default_two_theta_range")]
    pub two_theta_range: [f64; 2],
    /// Include the f' and f'' dispersion corrections
    #[serde(default = "default_true")]
    pub dispersion: bool,
    /// Include the Debye-Waller correction where B is tabulated
    #[serde(default = "default_true")]
    pub debye_waller: bool,
    /// Thin-film geometry; bulk (no correction) when absent
    #[serde(default)]
    pub film: Option<FilmGeometry>,
    #[serde(default)]
    pub sample_type: SampleType,
    #[serde(default)]
    pub form_factor: FormFactorModel,
    /// Report sqrt(normalized intensity), scaling the maximum to 10
    #[serde(default)]
    pub sqrt_intensities: bool,
    /// Free structural parameters for parameterized sites
    #[serde(default)]
    pub parameters: StructuralParameters,
    pub occupants: Vec<OccupantSpec>,
}

fn default_radiation() -> Radiation {
    Radiation::CuKa
}

fn default_hkl_max() -> [i32; 3] {
    [DEFAULT_HKL_MAX; 3]
}

fn default_two_theta_range() -> [f64; 2] {
    [DEFAULT_TWO_THETA_MIN, DEFAULT_TWO_THETA_MAX]
}

fn default_true() -> bool {
    true
}

fn radiation_with_fallback<'de, D>(deserializer: D) -> std::result::Result<Radiation, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(Radiation::from_label(&label))
}

impl PatternConfig {
    /// Configuration with defaults and no occupants
    pub fn new(space_group: SpaceGroup, lattice: LatticeConstants) -> Self {
        Self {
            space_group,
            lattice,
            radiation: default_radiation(),
            hkl_max: default_hkl_max(),
            two_theta_range: default_two_theta_range(),
            dispersion: true,
            debye_waller: true,
            film: None,
            sample_type: SampleType::default(),
            form_factor: FormFactorModel::default(),
            sqrt_intensities: false,
            parameters: StructuralParameters::default(),
            occupants: Vec::new(),
        }
    }

    /// Add an occupant assignment
    pub fn with_occupant(mut self, element: &str, site: &str, occupancy: f64) -> Self {
        self.occupants.push(OccupantSpec {
            element: element.to_string(),
            site: site.to_string(),
            occupancy,
        });
        self
    }

    /// Validate everything that can fail before enumeration starts
    pub fn validate(&self) -> Result<()> {
        self.space_group.check_lattice(&self.lattice)?;
        for &bound in &self.hkl_max {
            if bound < 1 {
                return Err(PatternError::InvalidHklBound(bound));
            }
        }
        let [min, max] = self.two_theta_range;
        if !(min < max) || min < 0.0 {
            return Err(PatternError::InvalidWindow { min, max });
        }
        Ok(())
    }

    /// Resolve the occupant specs against the database and the space
    /// group's sites. Occupancies outside [0,1] are hard errors; a
    /// shared site whose occupancies sum above 1 only warns, since
    /// over-specified compositions are sometimes explored deliberately.
    pub fn resolve_occupants(&self) -> Result<Vec<Occupant>> {
        let mut resolved = Vec::with_capacity(self.occupants.len());
        for spec in &self.occupants {
            let atomic_number = database::atomic_number(&spec.element)
                .ok_or_else(|| PatternError::UnknownElement(spec.element.clone()))?;
            if !(0.0..=1.0).contains(&spec.occupancy) {
                return Err(PatternError::InvalidOccupancy {
                    element: spec.element.clone(),
                    site: spec.site.clone(),
                    occupancy: spec.occupancy,
                });
            }
            let site = self.space_group.site(&spec.site, &self.parameters)?;
            let form_factor = FormFactor::resolve(atomic_number, self.form_factor)?;
            resolved.push(Occupant {
                symbol: spec.element.clone(),
                atomic_number,
                site,
                occupancy: spec.occupancy,
                form_factor,
            });
        }

        let mut totals: HashMap<&str, f64> = HashMap::new();
        for occ in &resolved {
            *totals.entry(occ.site.label()).or_insert(0.0) += occ.occupancy;
        }
        for (label, total) in totals {
            if total > 1.0 + 1e-9 {
                log::warn!(
                    "total occupancy on site {label} is {total:.4}, above 1: \
                     composition may be unphysical"
                );
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let config: PatternConfig = serde_json::from_str(
            r#"{
                "space_group": "SG225",
                "lattice": {"a": 6.0},
                "occupants": [
                    {"element": "Co", "site": "c8", "occupancy": 1.0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.space_group, SpaceGroup::Fm3m);
        assert_eq!(config.radiation, Radiation::CuKa);
        assert_eq!(config.hkl_max, [10, 10, 10]);
        assert_eq!(config.two_theta_range, [5.0, 120.0]);
        assert!(config.dispersion);
        assert!(config.debye_waller);
        assert!(config.film.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_radiation_falls_back() {
        let config: PatternConfig = serde_json::from_str(
            r#"{
                "space_group": "SG225",
                "lattice": {"a": 6.0},
                "radiation": "Mo",
                "occupants": []
            }"#,
        )
        .unwrap();
        assert_eq!(config.radiation, Radiation::CuKa);
    }

    #[test]
    fn test_unknown_space_group_rejected() {
        let err = serde_json::from_str::<PatternConfig>(
            r#"{"space_group": "SG1", "lattice": {"a": 6.0}, "occupants": []}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_occupancy_validation() {
        let config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
            .with_occupant("Co", "c8", 1.5);
        assert!(matches!(
            config.resolve_occupants(),
            Err(PatternError::InvalidOccupancy { .. })
        ));

        let config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
            .with_occupant("Xx", "c8", 1.0);
        assert!(matches!(
            config.resolve_occupants(),
            Err(PatternError::UnknownElement(_))
        ));

        let config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
            .with_occupant("Co", "q1", 1.0);
        assert!(matches!(
            config.resolve_occupants(),
            Err(PatternError::Crystal(_))
        ));
    }

    #[test]
    fn test_atoms_per_cell() {
        let config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
            .with_occupant("Co", "c8", 0.5);
        let occupants = config.resolve_occupants().unwrap();
        assert_eq!(occupants[0].atoms_per_cell(), 1.0);
    }
}
