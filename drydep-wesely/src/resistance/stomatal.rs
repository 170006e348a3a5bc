//! Stomatal and mesophyll resistance
//!
//! The stomatal resistance for water vapour responds to light and
//! temperature:
//!
//! $$r_s = r_i \left(1 + \left(\frac{200}{G + 0.1}\right)^2\right) \frac{400}{T_s (40 - T_s)}$$
//!
//! It falls as solar radiation $G$ opens the stomata and is smallest at
//! 20 °C. Outside 0 < $T_s$ < 40 °C the stomata are closed. For a gas $x$ the
//! bulk stomatal pathway adds the mesophyll resistance:
//!
//! $$r_{st} = r_s \frac{D_{H_2O}}{D_x} + \left(\frac{H^*}{3000} + 100 f_0\right)^{-1}$$

use super::resistance_from_conductance;
use crate::land_use::pathway;
use crate::parameters::SurfaceResistanceParameters;
use crate::species::GasProperties;
use drydep_core::FloatValue;

/// Offset keeping the light response finite in darkness [W/m^2]
const DARK_RADIATION_OFFSET: FloatValue = 0.1;

/// Stomatal resistance to water vapour [s/m]
///
/// `min_stomatal` is the table value r_i. Returns `FloatValue::INFINITY` when
/// the stomata are closed, either because r_i marks a closed pathway or
/// because the temperature is outside the stomatal window.
pub fn stomatal_resistance(
    min_stomatal: FloatValue,
    solar_radiation: FloatValue,
    temperature: FloatValue,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    let r_i = pathway(min_stomatal);
    let t_min = parameters.stomatal_min_temperature;
    let t_max = parameters.stomatal_max_temperature;
    if r_i.is_infinite() || temperature <= t_min || temperature >= t_max {
        return FloatValue::INFINITY;
    }

    let light =
        1.0 + (parameters.radiation_response / (solar_radiation + DARK_RADIATION_OFFSET)).powi(2);

    let half_window = 0.5 * (t_max - t_min);
    let thermal = half_window.powi(2) / ((temperature - t_min) * (t_max - temperature));

    r_i * light * thermal
}

/// Mesophyll resistance of a gas [s/m]
///
/// Small for soluble or reactive gases, infinite for a gas with neither
/// property.
pub fn mesophyll_resistance(
    gas: &GasProperties,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    resistance_from_conductance(
        gas.henry_coefficient / parameters.mesophyll_solubility_scale
            + parameters.mesophyll_reactivity_scale * gas.reactivity,
    )
}

/// Bulk stomatal pathway for a gas, stomatal plus mesophyll resistance [s/m]
pub fn bulk_stomatal_resistance(
    min_stomatal: FloatValue,
    gas: &GasProperties,
    solar_radiation: FloatValue,
    temperature: FloatValue,
    parameters: &SurfaceResistanceParameters,
) -> FloatValue {
    let r_s = stomatal_resistance(min_stomatal, solar_radiation, temperature, parameters);
    if r_s.is_infinite() {
        return FloatValue::INFINITY;
    }
    r_s * gas.diffusivity_ratio + mesophyll_resistance(gas, parameters)
}
