//! Meteorological state at the surface for a single resistance calculation.

use drydep_core::errors::{DryDepError, DryDepResult};
use drydep_core::FloatValue;
use log::warn;
use serde::{Deserialize, Serialize};

/// Wetness of the canopy surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceWetness {
    #[default]
    Dry,
    /// Surfaces wetted by dew
    Dew,
    /// Surfaces wetted by rain
    Rain,
}

impl SurfaceWetness {
    /// Convert separate rain and dew flags
    ///
    /// Rain takes precedence when both are set.
    pub fn from_flags(is_raining: bool, has_dew: bool) -> Self {
        match (is_raining, has_dew) {
            (true, true) => {
                warn!("Both rain and dew flagged; treating the surface as rain-wetted");
                SurfaceWetness::Rain
            }
            (true, false) => SurfaceWetness::Rain,
            (false, true) => SurfaceWetness::Dew,
            (false, false) => SurfaceWetness::Dry,
        }
    }

    pub fn is_wet(self) -> bool {
        self != SurfaceWetness::Dry
    }
}

/// Surface meteorology driving the resistance calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConditions {
    /// Surface air temperature
    /// unit: °C
    pub temperature: FloatValue,

    /// Downwelling solar radiation, G
    /// unit: W/m^2
    pub solar_radiation: FloatValue,

    /// Terrain slope, Θ
    /// unit: radians
    #[serde(default)]
    pub slope: FloatValue,

    #[serde(default)]
    pub wetness: SurfaceWetness,
}

impl SurfaceConditions {
    pub fn new(
        temperature: FloatValue,
        solar_radiation: FloatValue,
        slope: FloatValue,
        wetness: SurfaceWetness,
    ) -> Self {
        Self {
            temperature,
            solar_radiation,
            slope,
            wetness,
        }
    }

    /// Dry surface on flat terrain
    pub fn dry(temperature: FloatValue, solar_radiation: FloatValue) -> Self {
        Self::new(temperature, solar_radiation, 0.0, SurfaceWetness::Dry)
    }

    pub fn with_wetness(self, wetness: SurfaceWetness) -> Self {
        Self { wetness, ..self }
    }

    pub fn with_slope(self, slope: FloatValue) -> Self {
        Self { slope, ..self }
    }

    /// Reject non-finite values, negative radiation and negative slope
    pub fn validate(&self) -> DryDepResult<()> {
        if !self.temperature.is_finite() {
            return Err(DryDepError::InvalidParameter(format!(
                "surface temperature must be finite, got {}",
                self.temperature
            )));
        }
        if !(self.solar_radiation.is_finite() && self.solar_radiation >= 0.0) {
            return Err(DryDepError::InvalidParameter(format!(
                "solar radiation must be non-negative, got {}",
                self.solar_radiation
            )));
        }
        if !(self.slope.is_finite() && self.slope >= 0.0) {
            return Err(DryDepError::InvalidParameter(format!(
                "slope must be non-negative, got {}",
                self.slope
            )));
        }
        Ok(())
    }
}
