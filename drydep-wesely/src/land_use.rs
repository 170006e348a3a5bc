//! Season × land-use resistance table
//!
//! Base resistances [s/m] from Wesely (1989) Table 1, one row per [`Season`]
//! and one column per [`LandUse`].
//!
//! Two special values appear in the table:
//!
//! - [`CLOSED_RESISTANCE`] (9999 s/m) marks a pathway that does not exist for
//!   that surface, e.g. leaf uptake in a leafless winter canopy. It is read
//!   through [`pathway`], which turns it into an infinite resistance so that it
//!   contributes no conductance.
//! - Where the paper lists 0 s/m (no canopy over water or barren land, SO2
//!   uptake by water surfaces) the table stores [`MINIMUM_TABLE_RESISTANCE`].
//!   Every stored resistance is therefore strictly positive.
//!
//! # Reference
//!
//! Wesely, M. L. (1989). Parameterization of surface resistances to gaseous
//! dry deposition in regional-scale numerical models. *Atmospheric
//! Environment*, 23(6), 1293-1304.

use crate::categories::{LandUse, Season};
use drydep_core::errors::{DryDepError, DryDepResult};
use drydep_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Table value marking a closed pathway [s/m]
pub const CLOSED_RESISTANCE: FloatValue = 9999.0;

/// Value stored in place of the zero resistances listed in the paper [s/m]
pub const MINIMUM_TABLE_RESISTANCE: FloatValue = 1.0;

const X: FloatValue = CLOSED_RESISTANCE;
const M: FloatValue = MINIMUM_TABLE_RESISTANCE;

type SeasonalTable = [[FloatValue; 11]; 5];

/// Minimum bulk canopy stomatal resistance for water vapour, r_i
const MIN_STOMATAL: SeasonalTable = [
    [X, 60., 120., 70., 130., 100., X, X, 80., 100., 150.],
    [X, X, X, X, 250., 500., X, X, X, X, X],
    [X, X, X, X, 250., 500., X, X, X, X, X],
    [X, X, X, X, 400., 800., X, X, X, X, X],
    [X, 120., 240., 140., 250., 190., X, X, 160., 200., 300.],
];

/// Upper canopy (leaf cuticle) resistance, r_lu
const UPPER_CANOPY: SeasonalTable = [
    [X, 2000., 2000., 2000., 2000., 2000., X, X, 2500., 2000., 4000.],
    [X, 9000., 9000., 9000., 4000., 8000., X, X, 9000., 9000., 9000.],
    [X, X, 9000., 9000., 4000., 8000., X, X, 9000., 9000., 9000.],
    [X, X, X, X, 6000., 9000., X, X, 9000., 9000., 9000.],
    [X, 4000., 4000., 4000., 2000., 3000., X, X, 4000., 4000., 8000.],
];

/// In-canopy aerodynamic resistance, r_ac
const IN_CANOPY_AERO: SeasonalTable = [
    [100., 200., 100., 2000., 2000., 2000., M, M, 300., 150., 200.],
    [100., 150., 100., 1500., 2000., 1700., M, M, 200., 120., 140.],
    [100., 10., 100., 1000., 2000., 1500., M, M, 100., 50., 120.],
    [100., 10., 10., 1000., 2000., 1500., M, M, 50., 10., 50.],
    [100., 50., 80., 1200., 2000., 1500., M, M, 200., 60., 120.],
];

/// Ground surface resistance for SO2, r_gsS
const GROUND_SO2: SeasonalTable = [
    [400., 150., 350., 500., 500., 100., M, 1000., M, 220., 400.],
    [400., 200., 350., 500., 500., 100., M, 1000., M, 300., 400.],
    [400., 150., 350., 500., 500., 200., M, 1000., M, 200., 400.],
    [100., 100., 100., 100., 100., 100., M, 1000., 100., 100., 50.],
    [500., 150., 350., 500., 500., 200., M, 1000., M, 250., 400.],
];

/// Ground surface resistance for O3, r_gsO
const GROUND_O3: SeasonalTable = [
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 800., 180., 200.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
    [600., 3500., 3500., 3500., 3500., 3500., 2000., 400., 3500., 3500., 3500.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
];

/// Lower canopy (twigs, bark, understorey) resistance for SO2, r_clS
const LOWER_CANOPY_SO2: SeasonalTable = [
    [X, 2000., 2000., 2000., 2000., 2000., X, X, 2500., 2000., 4000.],
    [X, 9000., 9000., 9000., 2000., 4000., X, X, 9000., 9000., 9000.],
    [X, X, 9000., 9000., 3000., 6000., X, X, 9000., 9000., 9000.],
    [X, X, X, 9000., 200., 400., X, X, 9000., X, 9000.],
    [X, 4000., 4000., 4000., 2000., 3000., X, X, 4000., 4000., 8000.],
];

/// Lower canopy resistance for O3, r_clO
const LOWER_CANOPY_O3: SeasonalTable = [
    [X, 1000., 1000., 1000., 1000., 1000., X, X, 1000., 1000., 1000.],
    [X, 400., 400., 400., 1000., 600., X, X, 400., 400., 400.],
    [X, 1000., 400., 400., 1000., 600., X, X, 800., 600., 600.],
    [X, 1000., 1000., 400., 1500., 600., X, X, 800., 1000., 800.],
    [X, 1000., 500., 500., 1500., 700., X, X, 600., 800., 800.],
];

/// Whether a table resistance marks a closed pathway
pub fn is_closed(resistance: FloatValue) -> bool {
    resistance >= CLOSED_RESISTANCE
}

/// Resistance of a pathway as used in the parallel sum
///
/// Closed pathways become `FloatValue::INFINITY`, whose conductance is zero.
pub fn pathway(resistance: FloatValue) -> FloatValue {
    if is_closed(resistance) {
        FloatValue::INFINITY
    } else {
        resistance
    }
}

/// Base resistances for one season and land-use combination [s/m]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandUseCell {
    /// Minimum bulk canopy stomatal resistance for water vapour, r_i
    pub min_stomatal: FloatValue,
    /// Upper canopy or leaf cuticle resistance, r_lu
    pub upper_canopy: FloatValue,
    /// Resistance to transfer through the canopy air to the ground, r_ac
    pub in_canopy_aero: FloatValue,
    /// Ground surface resistance for SO2, r_gsS
    pub ground_so2: FloatValue,
    /// Ground surface resistance for O3, r_gsO
    pub ground_o3: FloatValue,
    /// Lower canopy resistance for SO2, r_clS
    pub lower_canopy_so2: FloatValue,
    /// Lower canopy resistance for O3, r_clO
    pub lower_canopy_o3: FloatValue,
}

impl LandUseCell {
    /// Look up the published values for a season and land use
    pub fn lookup(season: Season, land_use: LandUse) -> Self {
        let (s, l) = (season.index(), land_use.index());
        Self {
            min_stomatal: MIN_STOMATAL[s][l],
            upper_canopy: UPPER_CANOPY[s][l],
            in_canopy_aero: IN_CANOPY_AERO[s][l],
            ground_so2: GROUND_SO2[s][l],
            ground_o3: GROUND_O3[s][l],
            lower_canopy_so2: LOWER_CANOPY_SO2[s][l],
            lower_canopy_o3: LOWER_CANOPY_O3[s][l],
        }
    }

    fn fields(&self) -> [(&'static str, FloatValue); 7] {
        [
            ("min_stomatal", self.min_stomatal),
            ("upper_canopy", self.upper_canopy),
            ("in_canopy_aero", self.in_canopy_aero),
            ("ground_so2", self.ground_so2),
            ("ground_o3", self.ground_o3),
            ("lower_canopy_so2", self.lower_canopy_so2),
            ("lower_canopy_o3", self.lower_canopy_o3),
        ]
    }

    /// Check that every resistance is positive and finite
    ///
    /// Used for user-supplied cells; the published table always passes.
    pub fn validate(&self) -> DryDepResult<()> {
        for (name, value) in self.fields() {
            if !(value.is_finite() && value > 0.0) {
                return Err(DryDepError::InvalidParameter(format!(
                    "land use resistance {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
