//! Bulk surface resistance
//!
//! The four pathways act in parallel:
//!
//! $$\frac{1}{r_c} = \frac{1}{r_{st}} + \frac{1}{r_{lux}} + \frac{1}{r_{dc} + r_{clx}} + \frac{1}{r_{ac} + r_{gsx}}$$
//!
//! The result is bounded to `[minimum_resistance, maximum_resistance]`. When
//! every pathway is closed the maximum is returned.

use super::pathways::CanopyPathways;
use super::stomatal::bulk_stomatal_resistance;
use super::{conductance, resistance_from_conductance};
use crate::categories::{LandUse, Season};
use crate::land_use::LandUseCell;
use crate::meteorology::{SurfaceConditions, SurfaceWetness};
use crate::parameters::SurfaceResistanceParameters;
use crate::species::GasProperties;
use drydep_core::errors::{DryDepError, DryDepResult};
use drydep_core::FloatValue;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Resistance of each uptake pathway and their parallel sum [s/m]
///
/// Closed pathways are `FloatValue::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathwayResistances {
    /// Bulk stomatal pathway, r_st
    pub stomatal: FloatValue,
    /// Upper canopy cuticle, r_lux
    pub cuticle: FloatValue,
    /// Buoyant transfer to the lower canopy, r_dc + r_clx
    pub lower_canopy: FloatValue,
    /// Aerodynamic transfer to the ground, r_ac + r_gsx
    pub ground: FloatValue,
    /// Bounded bulk surface resistance, r_c
    pub surface: FloatValue,
}

impl PathwayResistances {
    /// Sum of the pathway conductances before bounding [m/s]
    pub fn total_conductance(&self) -> FloatValue {
        conductance(self.stomatal)
            + conductance(self.cuticle)
            + conductance(self.lower_canopy)
            + conductance(self.ground)
    }
}

/// Wesely (1989) bulk surface resistance
///
/// Holds the model constants; the land-use table and the gas properties are
/// supplied per call. Serializes as its parameters, and deserialization
/// validates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    try_from = "SurfaceResistanceParameters",
    into = "SurfaceResistanceParameters"
)]
pub struct SurfaceResistance {
    parameters: SurfaceResistanceParameters,
}

impl TryFrom<SurfaceResistanceParameters> for SurfaceResistance {
    type Error = DryDepError;

    fn try_from(parameters: SurfaceResistanceParameters) -> DryDepResult<Self> {
        Self::from_parameters(parameters)
    }
}

impl From<SurfaceResistance> for SurfaceResistanceParameters {
    fn from(model: SurfaceResistance) -> Self {
        model.parameters
    }
}

impl SurfaceResistance {
    /// Create a calculator with the published constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from parameters, rejecting invalid values
    pub fn from_parameters(parameters: SurfaceResistanceParameters) -> DryDepResult<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &SurfaceResistanceParameters {
        &self.parameters
    }

    /// Pathway breakdown for a gas in a tabulated season and land use
    pub fn resistances(
        &self,
        gas: &GasProperties,
        conditions: &SurfaceConditions,
        season: Season,
        land_use: LandUse,
    ) -> DryDepResult<PathwayResistances> {
        self.resistances_for_cell(gas, conditions, &LandUseCell::lookup(season, land_use))
    }

    /// Pathway breakdown for a gas with user-supplied base resistances
    pub fn resistances_for_cell(
        &self,
        gas: &GasProperties,
        conditions: &SurfaceConditions,
        cell: &LandUseCell,
    ) -> DryDepResult<PathwayResistances> {
        gas.validate()?;
        conditions.validate()?;
        cell.validate()?;
        Ok(self.combine(gas, conditions, cell))
    }

    /// Bulk surface resistance for a gas [s/m]
    pub fn surface_resistance(
        &self,
        gas: &GasProperties,
        conditions: &SurfaceConditions,
        season: Season,
        land_use: LandUse,
    ) -> DryDepResult<FloatValue> {
        Ok(self.resistances(gas, conditions, season, land_use)?.surface)
    }

    /// Bulk surface resistance with the categories and wetness given as raw values
    ///
    /// `season` and `land_use` are the 1-based category numbers of
    /// [`Season`] and [`LandUse`]. Out-of-range categories are an error.
    #[allow(clippy::too_many_arguments)]
    pub fn surface_resistance_by_index(
        &self,
        gas: &GasProperties,
        solar_radiation: FloatValue,
        temperature: FloatValue,
        slope: FloatValue,
        season: usize,
        land_use: usize,
        is_raining: bool,
        has_dew: bool,
    ) -> DryDepResult<FloatValue> {
        let season = Season::from_category(season)?;
        let land_use = LandUse::from_category(land_use)?;
        let conditions = SurfaceConditions::new(
            temperature,
            solar_radiation,
            slope,
            SurfaceWetness::from_flags(is_raining, has_dew),
        );
        self.surface_resistance(gas, &conditions, season, land_use)
    }

    fn combine(
        &self,
        gas: &GasProperties,
        conditions: &SurfaceConditions,
        cell: &LandUseCell,
    ) -> PathwayResistances {
        let p = &self.parameters;

        let stomatal = bulk_stomatal_resistance(
            cell.min_stomatal,
            gas,
            conditions.solar_radiation,
            conditions.temperature,
            p,
        );
        let canopy = CanopyPathways::evaluate(cell, gas, conditions, p);

        let mut resistances = PathwayResistances {
            stomatal,
            cuticle: canopy.cuticle,
            lower_canopy: canopy.lower_canopy_total(),
            ground: canopy.ground_total(),
            surface: p.maximum_resistance,
        };

        let total = resistances.total_conductance();
        if total > 0.0 {
            resistances.surface = resistance_from_conductance(total)
                .max(p.minimum_resistance)
                .min(p.maximum_resistance);
        } else {
            debug!(
                "All uptake pathways closed; using maximum resistance {}",
                p.maximum_resistance
            );
        }

        trace!(
            "r_st={:.1} r_lux={:.1} r_dc+r_cl={:.1} r_ac+r_gs={:.1} -> r_c={:.1}",
            resistances.stomatal,
            resistances.cuticle,
            resistances.lower_canopy,
            resistances.ground,
            resistances.surface
        );
        resistances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::land_use::CLOSED_RESISTANCE;
    use crate::species::{ReactivityClass, Species};
    use approx::assert_relative_eq;

    fn closed_cell() -> LandUseCell {
        LandUseCell {
            min_stomatal: CLOSED_RESISTANCE,
            upper_canopy: CLOSED_RESISTANCE,
            in_canopy_aero: CLOSED_RESISTANCE,
            ground_so2: CLOSED_RESISTANCE,
            ground_o3: CLOSED_RESISTANCE,
            lower_canopy_so2: CLOSED_RESISTANCE,
            lower_canopy_o3: CLOSED_RESISTANCE,
        }
    }

    #[test]
    fn test_so2_deciduous_midsummer() {
        let model = SurfaceResistance::new();
        let r_c = model
            .surface_resistance(
                &Species::SO2.properties(),
                &SurfaceConditions::dry(25.0, 800.0),
                Season::Midsummer,
                LandUse::DeciduousForest,
            )
            .unwrap();
        assert_relative_eq!(r_c, 125.3, epsilon = 0.1);
    }

    #[test]
    fn test_surface_is_parallel_sum() {
        let model = SurfaceResistance::new();
        let r = model
            .resistances(
                &Species::NO2.properties(),
                &SurfaceConditions::dry(15.0, 400.0),
                Season::TransitionalSpring,
                LandUse::MixedForest,
            )
            .unwrap();
        assert_relative_eq!(
            r.surface,
            1.0 / r.total_conductance(),
            max_relative = 1e-12
        );
        assert!(r.surface < r.stomatal);
        assert!(r.surface < r.cuticle);
        assert!(r.surface < r.lower_canopy);
        assert!(r.surface < r.ground);
    }

    #[test]
    fn test_all_pathways_closed_gives_maximum() {
        let model = SurfaceResistance::new();
        let r = model
            .resistances_for_cell(
                &Species::O3.properties(),
                &SurfaceConditions::dry(25.0, 800.0),
                &closed_cell(),
            )
            .unwrap();
        assert_eq!(r.total_conductance(), 0.0);
        assert_eq!(r.surface, 9999.0);
    }

    #[test]
    fn test_result_is_bounded() {
        let model = SurfaceResistance::new();
        let tiny = LandUseCell {
            min_stomatal: 0.01,
            upper_canopy: 0.01,
            in_canopy_aero: 0.01,
            ground_so2: 0.01,
            ground_o3: 0.01,
            lower_canopy_so2: 0.01,
            lower_canopy_o3: 0.01,
        };
        let r = model
            .resistances_for_cell(
                &Species::SO2.properties(),
                &SurfaceConditions::dry(20.0, 1000.0).with_slope(1.0),
                &tiny,
            )
            .unwrap();
        assert_eq!(r.surface, 1.0);

        let model = SurfaceResistance::from_parameters(SurfaceResistanceParameters {
            maximum_resistance: 500.0,
            ..Default::default()
        })
        .unwrap();
        let r_c = model
            .surface_resistance(
                &Species::ALD.properties(),
                &SurfaceConditions::dry(10.0, 0.0),
                Season::Winter,
                LandUse::DeciduousForest,
            )
            .unwrap();
        assert_eq!(r_c, 500.0);
    }

    #[test]
    fn test_every_published_combination_is_bounded() {
        let model = SurfaceResistance::new();
        let conditions = [
            SurfaceConditions::dry(25.0, 800.0),
            SurfaceConditions::dry(-10.0, 0.0),
            SurfaceConditions::dry(10.0, 100.0).with_wetness(SurfaceWetness::Dew),
            SurfaceConditions::dry(10.0, 300.0).with_wetness(SurfaceWetness::Rain),
        ];
        for species in Species::ALL {
            for season in Season::ALL {
                for land_use in LandUse::ALL {
                    for c in &conditions {
                        let r_c = model
                            .surface_resistance(&species.properties(), c, season, land_use)
                            .unwrap();
                        assert!(
                            (1.0..=9999.0).contains(&r_c),
                            "{species} {season} {land_use}: {r_c}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_slope_lowers_resistance() {
        let model = SurfaceResistance::new();
        let gas = Species::O3.properties();
        let flat = SurfaceConditions::dry(20.0, 300.0);
        let r_flat = model
            .resistances(&gas, &flat, Season::Midsummer, LandUse::Agricultural)
            .unwrap();
        let r_slope = model
            .resistances(
                &gas,
                &flat.with_slope(0.05),
                Season::Midsummer,
                LandUse::Agricultural,
            )
            .unwrap();
        assert!(r_slope.lower_canopy < r_flat.lower_canopy);
        assert!(r_slope.surface < r_flat.surface);
        assert_eq!(r_slope.stomatal, r_flat.stomatal);
    }

    #[test]
    fn test_frost_raises_resistance() {
        let model = SurfaceResistance::new();
        let gas = Species::SO2.properties();
        let r = |t: FloatValue| {
            model
                .surface_resistance(
                    &gas,
                    &SurfaceConditions::dry(t, 0.0),
                    Season::Winter,
                    LandUse::Agricultural,
                )
                .unwrap()
        };
        assert!(r(-8.0) > r(-1.0));

        let no_frost = SurfaceResistance::from_parameters(SurfaceResistanceParameters {
            include_frost_correction: false,
            ..Default::default()
        })
        .unwrap();
        let r_no_frost = no_frost
            .surface_resistance(
                &gas,
                &SurfaceConditions::dry(-8.0, 0.0),
                Season::Winter,
                LandUse::Agricultural,
            )
            .unwrap();
        assert_relative_eq!(r_no_frost, r(-1.0), max_relative = 1e-12);
    }

    #[test]
    fn test_stomata_closed_in_frost() {
        let model = SurfaceResistance::new();
        let r = model
            .resistances(
                &Species::O3.properties(),
                &SurfaceConditions::dry(-5.0, 800.0),
                Season::Midsummer,
                LandUse::DeciduousForest,
            )
            .unwrap();
        assert!(r.stomatal.is_infinite());
        assert!(r.surface.is_finite());
    }

    #[test]
    fn test_by_index_matches_typed_call() {
        let model = SurfaceResistance::new();
        let gas = Species::HNO3.properties();
        let typed = model
            .surface_resistance(
                &gas,
                &SurfaceConditions::dry(12.0, 250.0).with_wetness(SurfaceWetness::Dew),
                Season::Autumn,
                LandUse::Range,
            )
            .unwrap();
        let by_index = model
            .surface_resistance_by_index(&gas, 250.0, 12.0, 0.0, 2, 3, false, true)
            .unwrap();
        assert_eq!(typed, by_index);
    }

    #[test]
    fn test_by_index_rejects_unknown_categories() {
        let model = SurfaceResistance::new();
        let gas = Species::SO2.properties();
        assert_eq!(
            model.surface_resistance_by_index(&gas, 800.0, 25.0, 0.0, 6, 4, false, false),
            Err(DryDepError::InvalidSeason(6))
        );
        assert_eq!(
            model.surface_resistance_by_index(&gas, 800.0, 25.0, 0.0, 1, 0, false, false),
            Err(DryDepError::InvalidLandUse(0))
        );
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let model = SurfaceResistance::new();
        let bad_gas = GasProperties::new(0.0, 1.0, 0.0, ReactivityClass::Generic);
        assert!(model
            .surface_resistance(
                &bad_gas,
                &SurfaceConditions::dry(25.0, 800.0),
                Season::Midsummer,
                LandUse::Urban,
            )
            .is_err());
        assert!(model
            .surface_resistance(
                &Species::SO2.properties(),
                &SurfaceConditions::dry(25.0, -5.0),
                Season::Midsummer,
                LandUse::Urban,
            )
            .is_err());
        let bad_cell = LandUseCell {
            upper_canopy: -1.0,
            ..closed_cell()
        };
        assert!(model
            .resistances_for_cell(
                &Species::SO2.properties(),
                &SurfaceConditions::dry(25.0, 800.0),
                &bad_cell,
            )
            .is_err());
    }

    #[test]
    fn test_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurfaceResistance>();
        assert_send_sync::<PathwayResistances>();
    }

    #[test]
    fn test_deserialization_validates_parameters() {
        let model: SurfaceResistance =
            serde_json::from_str(r#"{"maximum_resistance": 5000.0}"#).unwrap();
        assert_eq!(model.parameters().maximum_resistance, 5000.0);
        assert_eq!(model.parameters().minimum_resistance, 1.0);

        let inverted = r#"{"minimum_resistance": 100.0, "maximum_resistance": 10.0}"#;
        assert!(serde_json::from_str::<SurfaceResistance>(inverted).is_err());
    }

    #[test]
    fn test_serializes_as_parameters() {
        let model = SurfaceResistance::new();
        let json = serde_json::to_string(&model).unwrap();
        let parameters: SurfaceResistanceParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(&parameters, model.parameters());
    }

    #[test]
    fn test_from_parameters_validates() {
        let result = SurfaceResistance::from_parameters(SurfaceResistanceParameters {
            radiation_response: 0.0,
            ..Default::default()
        });
        assert!(matches!(result, Err(DryDepError::InvalidParameter(_))));
    }
}
