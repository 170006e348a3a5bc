//! Surface Resistance Parameters
//!
//! Constants of the Wesely (1989) parameterisation that are not tied to a
//! particular land use or gas.

use drydep_core::errors::{DryDepError, DryDepResult};
use drydep_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the surface resistance calculation
///
/// The stomatal resistance for water vapour is
///
/// $$r_s = r_i \left(1 + \left(\frac{a}{G + 0.1}\right)^2\right) \frac{400}{T_s (40 - T_s)}$$
///
/// with $a$ the `radiation_response`. The temperature term is written for the
/// default stomatal window of 0 to 40 °C and is rescaled to other windows so
/// that it stays 1 at the window midpoint. The mesophyll resistance is
///
/// $$r_m = \left(\frac{H^*}{b} + c f_0\right)^{-1}$$
///
/// with $b$ the `mesophyll_solubility_scale` and $c$ the
/// `mesophyll_reactivity_scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceResistanceParameters {
    /// Lower bound applied to the combined surface resistance
    /// unit: s/m
    /// default: 1.0
    pub minimum_resistance: FloatValue,

    /// Upper bound applied to the combined surface resistance
    /// Returned when every uptake pathway is closed
    /// unit: s/m
    /// default: 9999.0
    pub maximum_resistance: FloatValue,

    /// Stomata are closed at or below this temperature
    /// unit: °C
    /// default: 0.0
    pub stomatal_min_temperature: FloatValue,

    /// Stomata are closed at or above this temperature
    /// unit: °C
    /// default: 40.0
    pub stomatal_max_temperature: FloatValue,

    /// Radiation scale of the stomatal light response
    /// unit: W/m^2
    /// default: 200.0
    pub radiation_response: FloatValue,

    /// Divisor of H* in the mesophyll conductance
    /// unit: M/atm
    /// default: 3000.0
    pub mesophyll_solubility_scale: FloatValue,

    /// Multiplier of f0 in the mesophyll conductance
    /// unit: dimensionless
    /// default: 100.0
    pub mesophyll_reactivity_scale: FloatValue,

    /// Weight of H* when scaling the dry cuticle resistance of a generic gas
    /// unit: (M/atm)^-1
    /// default: 1e-5
    pub cuticle_solubility_scale: FloatValue,

    /// H* of the SO2 reference curve used in lower canopy and ground interpolation
    /// unit: M/atm
    /// default: 1e5
    pub so2_reference_solubility: FloatValue,

    /// Factor applied to r_lu for the wetted leaf surface
    /// unit: dimensionless
    /// default: 3.0
    pub wet_cuticle_factor: FloatValue,

    /// Weight of H* in the wet cuticle conductance of a generic gas
    /// unit: (M/atm)^-1 s/m
    /// default: 1e-7
    pub wet_cuticle_solubility_scale: FloatValue,

    /// SO2 cuticle resistance on dew-wetted leaves
    /// unit: s/m
    /// default: 100.0
    pub so2_dew_cuticle: FloatValue,

    /// Resistance of rain-wetted leaf films to SO2
    /// unit: s/m
    /// default: 5000.0
    pub so2_rain_cuticle_limit: FloatValue,

    /// Resistance of dew-wetted leaf films to O3
    /// unit: s/m
    /// default: 3000.0
    pub o3_dew_cuticle_limit: FloatValue,

    /// Resistance of rain-wetted leaf films to O3
    /// unit: s/m
    /// default: 1000.0
    pub o3_rain_cuticle_limit: FloatValue,

    /// Below this temperature r_lu, r_cl and r_gs increase by 1000 exp(-Ts - 4)
    /// unit: °C
    /// default: -2.0
    pub frost_temperature: FloatValue,

    /// Enable the frost correction
    /// default: true
    pub include_frost_correction: bool,
}

impl Default for SurfaceResistanceParameters {
    fn default() -> Self {
        Self {
            minimum_resistance: 1.0,
            maximum_resistance: 9999.0,
            stomatal_min_temperature: 0.0,
            stomatal_max_temperature: 40.0,
            radiation_response: 200.0,
            mesophyll_solubility_scale: 3000.0,
            mesophyll_reactivity_scale: 100.0,
            cuticle_solubility_scale: 1e-5,
            so2_reference_solubility: 1e5,
            wet_cuticle_factor: 3.0,
            wet_cuticle_solubility_scale: 1e-7,
            so2_dew_cuticle: 100.0,
            so2_rain_cuticle_limit: 5000.0,
            o3_dew_cuticle_limit: 3000.0,
            o3_rain_cuticle_limit: 1000.0,
            frost_temperature: -2.0,
            include_frost_correction: true,
        }
    }
}

impl SurfaceResistanceParameters {
    /// Parse parameters from a TOML document
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> DryDepResult<Self> {
        let params: Self =
            toml::from_str(source).map_err(|e| DryDepError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> DryDepResult<()> {
        let positive = [
            ("minimum_resistance", self.minimum_resistance),
            ("radiation_response", self.radiation_response),
            ("mesophyll_solubility_scale", self.mesophyll_solubility_scale),
            ("so2_reference_solubility", self.so2_reference_solubility),
            ("wet_cuticle_factor", self.wet_cuticle_factor),
            ("so2_dew_cuticle", self.so2_dew_cuticle),
            ("so2_rain_cuticle_limit", self.so2_rain_cuticle_limit),
            ("o3_dew_cuticle_limit", self.o3_dew_cuticle_limit),
            ("o3_rain_cuticle_limit", self.o3_rain_cuticle_limit),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(DryDepError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("mesophyll_reactivity_scale", self.mesophyll_reactivity_scale),
            ("cuticle_solubility_scale", self.cuticle_solubility_scale),
            (
                "wet_cuticle_solubility_scale",
                self.wet_cuticle_solubility_scale,
            ),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DryDepError::InvalidParameter(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.maximum_resistance.is_nan() || self.maximum_resistance < self.minimum_resistance {
            return Err(DryDepError::InvalidParameter(format!(
                "maximum_resistance ({}) must not be below minimum_resistance ({})",
                self.maximum_resistance, self.minimum_resistance
            )));
        }
        if self
            .stomatal_min_temperature
            .partial_cmp(&self.stomatal_max_temperature)
            != Some(std::cmp::Ordering::Less)
        {
            return Err(DryDepError::InvalidParameter(format!(
                "stomatal temperature window is empty: {} to {}",
                self.stomatal_min_temperature, self.stomatal_max_temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = SurfaceResistanceParameters::default();
        assert!((params.minimum_resistance - 1.0).abs() < 1e-10);
        assert!((params.maximum_resistance - 9999.0).abs() < 1e-10);
        assert!((params.radiation_response - 200.0).abs() < 1e-10);
        assert!(params.include_frost_correction);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_so2_dew_uptake_exceeds_rain_uptake() {
        // SO2 dissolves readily into thin dew films
        let params = SurfaceResistanceParameters::default();
        assert!(params.so2_dew_cuticle < params.so2_rain_cuticle_limit);
        // while O3 is taken up faster by rain-wetted leaves
        assert!(params.o3_rain_cuticle_limit < params.o3_dew_cuticle_limit);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"minimum_resistance": 10.0, "include_frost_correction": false}"#;
        let params: SurfaceResistanceParameters =
            serde_json::from_str(json).expect("Partial deserialization failed");

        assert!((params.minimum_resistance - 10.0).abs() < 1e-10);
        assert!(!params.include_frost_correction);

        assert!((params.so2_dew_cuticle - 100.0).abs() < 1e-10);
        assert!((params.stomatal_max_temperature - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_toml_str() {
        let source = r#"
            maximum_resistance = 5000.0
            frost_temperature = -5.0
        "#;
        let params = SurfaceResistanceParameters::from_toml_str(source).unwrap();
        assert!((params.maximum_resistance - 5000.0).abs() < 1e-10);
        assert!((params.frost_temperature + 5.0).abs() < 1e-10);
        assert!((params.o3_rain_cuticle_limit - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_input() {
        assert!(matches!(
            SurfaceResistanceParameters::from_toml_str("minimum_resistance = \"one\""),
            Err(DryDepError::Config(_))
        ));
        assert!(matches!(
            SurfaceResistanceParameters::from_toml_str("minimum_resistance = -1.0"),
            Err(DryDepError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let params = SurfaceResistanceParameters {
            minimum_resistance: 100.0,
            maximum_resistance: 10.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = SurfaceResistanceParameters {
            stomatal_min_temperature: 40.0,
            stomatal_max_temperature: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
