//! Species table
//!
//! Physicochemical properties of the gases covered by Wesely (1989) Table 2.
//! The model only needs three numbers per gas plus its [`ReactivityClass`];
//! any other gas can be described with a [`GasProperties`] value directly.

use drydep_core::errors::{DryDepError, DryDepResult};
use drydep_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which reference gas, if any, a species is treated as
///
/// SO2-like and O3-like species use the SO2 or O3 columns of the land-use
/// table directly. Generic species are interpolated between the two using
/// their solubility and reactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReactivityClass {
    #[default]
    Generic,
    SO2Like,
    O3Like,
    /// Generic, except that uptake by cuticles, the lower canopy and the
    /// ground saturates at the solubility of SO2
    ///
    /// Used for strong acids such as HNO3, whose H* would otherwise remove
    /// every non-stomatal resistance.
    SolubilityLimited,
}

/// Physicochemical properties of a gas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// Ratio of the molecular diffusivity of water vapour to that of the gas
    /// unit: dimensionless
    pub diffusivity_ratio: FloatValue,

    /// Effective Henry's law coefficient, H*
    /// unit: M/atm
    pub henry_coefficient: FloatValue,

    /// Normalised biochemical reactivity factor, f0
    /// unit: dimensionless, 0 (inert) to 1 (as reactive as O3)
    pub reactivity: FloatValue,

    /// default: Generic
    #[serde(default)]
    pub class: ReactivityClass,
}

impl GasProperties {
    pub const fn new(
        diffusivity_ratio: FloatValue,
        henry_coefficient: FloatValue,
        reactivity: FloatValue,
        class: ReactivityClass,
    ) -> Self {
        Self {
            diffusivity_ratio,
            henry_coefficient,
            reactivity,
            class,
        }
    }

    /// Check the properties describe a physical gas
    pub fn validate(&self) -> DryDepResult<()> {
        if !(self.diffusivity_ratio.is_finite() && self.diffusivity_ratio > 0.0) {
            return Err(DryDepError::InvalidParameter(format!(
                "diffusivity ratio must be positive, got {}",
                self.diffusivity_ratio
            )));
        }
        if self.henry_coefficient.is_nan() || self.henry_coefficient < 0.0 {
            return Err(DryDepError::InvalidParameter(format!(
                "Henry's law coefficient must be non-negative, got {}",
                self.henry_coefficient
            )));
        }
        if !(0.0..=1.0).contains(&self.reactivity) {
            return Err(DryDepError::InvalidParameter(format!(
                "reactivity factor must be between 0 and 1, got {}",
                self.reactivity
            )));
        }
        Ok(())
    }
}

/// Gases with published properties
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    SO2,
    O3,
    NO2,
    NO,
    HNO3,
    H2O2,
    /// Acetaldehyde
    ALD,
    /// Formaldehyde
    HCHO,
    /// Methyl hydroperoxide
    OP,
    /// Peroxyacetic acid
    PAA,
    /// Formic acid
    ORA,
    NH3,
    /// Peroxyacetyl nitrate
    PAN,
    /// Nitrous acid
    HNO2,
}

impl Species {
    pub const ALL: [Species; 14] = [
        Species::SO2,
        Species::O3,
        Species::NO2,
        Species::NO,
        Species::HNO3,
        Species::H2O2,
        Species::ALD,
        Species::HCHO,
        Species::OP,
        Species::PAA,
        Species::ORA,
        Species::NH3,
        Species::PAN,
        Species::HNO2,
    ];

    /// Properties from Wesely (1989) Table 2
    pub const fn properties(self) -> GasProperties {
        use ReactivityClass::*;
        match self {
            Species::SO2 => GasProperties::new(1.9, 1.0e5, 0.0, SO2Like),
            Species::O3 => GasProperties::new(1.6, 0.01, 1.0, O3Like),
            Species::NO2 => GasProperties::new(1.6, 0.01, 0.1, Generic),
            Species::NO => GasProperties::new(1.3, 2.0e-3, 0.0, Generic),
            Species::HNO3 => GasProperties::new(1.9, 1.0e14, 0.0, SolubilityLimited),
            Species::H2O2 => GasProperties::new(1.4, 1.0e5, 1.0, Generic),
            Species::ALD => GasProperties::new(1.6, 15.0, 0.0, Generic),
            Species::HCHO => GasProperties::new(1.3, 6.0e3, 0.0, Generic),
            Species::OP => GasProperties::new(1.6, 240.0, 0.1, Generic),
            Species::PAA => GasProperties::new(2.0, 540.0, 0.1, Generic),
            Species::ORA => GasProperties::new(1.6, 4.0e6, 0.0, Generic),
            Species::NH3 => GasProperties::new(1.0, 2.0e4, 0.0, Generic),
            Species::PAN => GasProperties::new(2.6, 3.6, 0.1, Generic),
            Species::HNO2 => GasProperties::new(1.6, 1.0e5, 0.1, Generic),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::SO2 => "SO2",
            Species::O3 => "O3",
            Species::NO2 => "NO2",
            Species::NO => "NO",
            Species::HNO3 => "HNO3",
            Species::H2O2 => "H2O2",
            Species::ALD => "ALD",
            Species::HCHO => "HCHO",
            Species::OP => "OP",
            Species::PAA => "PAA",
            Species::ORA => "ORA",
            Species::NH3 => "NH3",
            Species::PAN => "PAN",
            Species::HNO2 => "HNO2",
        }
    }

    /// Look up a species by name, ignoring case
    pub fn from_name(name: &str) -> DryDepResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DryDepError::UnknownSpecies(name.to_string()))
    }
}

impl FromStr for Species {
    type Err = DryDepError;

    fn from_str(s: &str) -> DryDepResult<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Species> for GasProperties {
    fn from(s: Species) -> Self {
        s.properties()
    }
}
