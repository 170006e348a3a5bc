//! Non-stomatal pathways
//!
//! Besides the stomata, a gas reaches the surface through three routes:
//!
//! - the leaf cuticles of the upper canopy, $r_{lu}$
//! - the exposed surfaces of the lower canopy, reached through the buoyant
//!   in-canopy resistance, $r_{dc} + r_{cl}$
//! - the ground, reached through the in-canopy aerodynamic resistance,
//!   $r_{ac} + r_{gs}$
//!
//! The land-use table only gives lower canopy and ground resistances for SO2
//! and O3. Other gases are interpolated between the two using their
//! solubility and reactivity:
//!
//! $$r_x = \left(\frac{H^*}{10^5 r_S} + \frac{f_0}{r_O}\right)^{-1}$$

use super::{conductance, parallel, resistance_from_conductance};
use crate::land_use::{pathway, LandUseCell};
use crate::meteorology::{SurfaceConditions, SurfaceWetness};
use crate::parameters::SurfaceResistanceParameters;
use crate::species::{GasProperties, ReactivityClass};
use drydep_core::FloatValue;

/// Buoyant convection resistance in calm, dark conditions [s/m]
const BUOYANCY_BASE_RESISTANCE: FloatValue = 100.0;
/// Radiation scale of the buoyant convection term [W/m^2]
const BUOYANCY_RADIATION_SCALE: FloatValue = 1000.0;
/// Offset keeping the buoyant convection term finite in darkness [W/m^2]
const BUOYANCY_RADIATION_OFFSET: FloatValue = 10.0;
/// Slope scale of the buoyant convection term [1/radian]
const BUOYANCY_SLOPE_SCALE: FloatValue = 1000.0;
/// Amplitude of the frost correction [s/m]
const FROST_AMPLITUDE: FloatValue = 1000.0;
/// Temperature offset in the frost correction exponent [°C]
const FROST_OFFSET: FloatValue = 4.0;

/// Resistance to transfer by buoyant convection within the canopy, r_dc [s/m]
///
/// $$r_{dc} = 100 \left(1 + \frac{1000}{G + 10}\right) \frac{1}{1 + 1000 \Theta}$$
///
/// Sunlight and sloping terrain both drive convection and lower the
/// resistance.
pub fn in_canopy_buoyancy_resistance(
    solar_radiation: FloatValue,
    slope: FloatValue,
) -> FloatValue {
    BUOYANCY_BASE_RESISTANCE
        * (1.0 + BUOYANCY_RADIATION_SCALE / (solar_radiation + BUOYANCY_RADIATION_OFFSET))
        / (1.0 + BUOYANCY_SLOPE_SCALE * slope)
}

/// Resistance added to the surface pathways of a frozen surface [s/m]
///
/// $1000 \exp(-T_s - 4)$ below the frost temperature, otherwise zero.
pub fn frost_correction(
    temperature: FloatValue,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    if parameters.include_frost_correction && temperature < parameters.frost_temperature {
        FROST_AMPLITUDE * (-temperature - FROST_OFFSET).exp()
    } else {
        0.0
    }
}

/// Solubility governing uptake by leaf surfaces, the lower canopy and the
/// ground [M/atm]
///
/// H* itself, except for solubility-limited gases where it is capped at the
/// SO2 reference solubility.
pub fn surface_solubility(
    gas: &GasProperties,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    match gas.class {
        ReactivityClass::SolubilityLimited => gas
            .henry_coefficient
            .min(parameters.so2_reference_solubility),
        _ => gas.henry_coefficient,
    }
}

/// Resistance of a gas given the SO2 and O3 reference resistances [s/m]
///
/// SO2-like and O3-like gases take their reference directly. Other gases
/// weight the SO2 conductance by solubility and the O3 conductance by
/// reactivity. A closed reference contributes no conductance.
pub fn interpolate(
    so2_resistance: FloatValue,
    o3_resistance: FloatValue,
    gas: &GasProperties,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    match gas.class {
        ReactivityClass::SO2Like => so2_resistance,
        ReactivityClass::O3Like => o3_resistance,
        ReactivityClass::Generic | ReactivityClass::SolubilityLimited => {
            resistance_from_conductance(
                surface_solubility(gas, parameters) / parameters.so2_reference_solubility
                    * conductance(so2_resistance)
                    + gas.reactivity * conductance(o3_resistance),
            )
        }
    }
}

/// Dry cuticle resistance of a gas, r_lux [s/m]
///
/// Gases other than the two references scale the table value by their
/// solubility and reactivity:
///
/// $$r_{lux} = \frac{r_{lu}}{10^{-5} H^* + f_0}$$
pub fn dry_cuticle_resistance(
    upper_canopy: FloatValue,
    gas: &GasProperties,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    match gas.class {
        ReactivityClass::SO2Like | ReactivityClass::O3Like => upper_canopy,
        ReactivityClass::Generic | ReactivityClass::SolubilityLimited => {
            let uptake = parameters.cuticle_solubility_scale * surface_solubility(gas, parameters)
                + gas.reactivity;
            if uptake > 0.0 {
                upper_canopy / uptake
            } else {
                FloatValue::INFINITY
            }
        }
    }
}

/// Cuticle resistance of a gas for the given surface wetness [s/m]
///
/// `upper_canopy` is r_lu, already frost corrected. A closed upper canopy
/// stays closed when wetted.
pub fn cuticle_resistance(
    upper_canopy: FloatValue,
    gas: &GasProperties,
    wetness: SurfaceWetness,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    let dry = dry_cuticle_resistance(upper_canopy, gas, parameters);
    if upper_canopy.is_infinite() {
        return dry;
    }

    let wet_leaf = parameters.wet_cuticle_factor * upper_canopy;
    let (so2_wet, o3_film) = match wetness {
        SurfaceWetness::Dry => return dry,
        SurfaceWetness::Dew => (parameters.so2_dew_cuticle, parameters.o3_dew_cuticle_limit),
        SurfaceWetness::Rain => (
            parallel(parameters.so2_rain_cuticle_limit, wet_leaf),
            parameters.o3_rain_cuticle_limit,
        ),
    };
    let o3_wet = parallel(o3_film, wet_leaf);

    match gas.class {
        ReactivityClass::SO2Like => so2_wet,
        ReactivityClass::O3Like => o3_wet,
        ReactivityClass::Generic | ReactivityClass::SolubilityLimited => {
            resistance_from_conductance(
                conductance(parameters.wet_cuticle_factor * dry)
                    + parameters.wet_cuticle_solubility_scale
                        * surface_solubility(gas, parameters)
                    + gas.reactivity * conductance(o3_wet),
            )
        }
    }
}

/// Non-stomatal resistances of one gas in one land-use cell [s/m]
///
/// Closed pathways are `FloatValue::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanopyPathways {
    /// Cuticle resistance, r_lux
    pub cuticle: FloatValue,
    /// Buoyant convection resistance, r_dc
    pub buoyancy: FloatValue,
    /// Lower canopy surface resistance, r_clx
    pub lower_canopy: FloatValue,
    /// In-canopy aerodynamic resistance, r_ac
    pub in_canopy_aero: FloatValue,
    /// Ground surface resistance, r_gsx
    pub ground: FloatValue,
}

impl CanopyPathways {
    /// Evaluate the non-stomatal pathways for a gas under the given conditions
    pub fn evaluate(
        cell: &LandUseCell,
        gas: &GasProperties,
        conditions: &SurfaceConditions,
        parameters: &SurfaceResistanceParameters,
    ) -> Self {
        let frost = frost_correction(conditions.temperature, parameters);
        let upper_canopy = pathway(cell.upper_canopy) + frost;

        Self {
            cuticle: cuticle_resistance(upper_canopy, gas, conditions.wetness, parameters),
            buoyancy: in_canopy_buoyancy_resistance(conditions.solar_radiation, conditions.slope),
            lower_canopy: interpolate(
                pathway(cell.lower_canopy_so2) + frost,
                pathway(cell.lower_canopy_o3) + frost,
                gas,
                parameters,
            ),
            in_canopy_aero: pathway(cell.in_canopy_aero),
            ground: interpolate(
                pathway(cell.ground_so2) + frost,
                pathway(cell.ground_o3) + frost,
                gas,
                parameters,
            ),
        }
    }

    /// Series resistance through the canopy air to the lower canopy surfaces
    pub fn lower_canopy_total(&self) -> FloatValue {
        self.buoyancy + self.lower_canopy
    }

    /// Series resistance through the canopy air to the ground
    pub fn ground_total(&self) -> FloatValue {
        self.in_canopy_aero + self.ground
    }
}
