//! Seasonal and land-use categories used to index the Wesely (1989) tables.
//!
//! Both axes use the 1-based category numbers from the paper. Raw numbers
//! coming from a host model are converted with [`Season::from_category`] and
//! [`LandUse::from_category`]; anything out of range is rejected rather than
//! mapped to a default.

use drydep_core::errors::{DryDepError, DryDepResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seasonal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Midsummer with lush vegetation
    Midsummer = 1,
    /// Autumn with unharvested cropland
    Autumn = 2,
    /// Late autumn after frost, no snow
    LateAutumn = 3,
    /// Winter, snow on ground and subfreezing
    Winter = 4,
    /// Transitional spring with partially green short annuals
    TransitionalSpring = 5,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Midsummer,
        Season::Autumn,
        Season::LateAutumn,
        Season::Winter,
        Season::TransitionalSpring,
    ];

    /// Convert a 1-based seasonal category number
    pub fn from_category(category: usize) -> DryDepResult<Self> {
        category
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DryDepError::InvalidSeason(category))
    }

    /// 1-based category number
    pub fn category(self) -> usize {
        self as usize
    }

    pub(crate) fn index(self) -> usize {
        self.category() - 1
    }

    pub fn description(self) -> &'static str {
        match self {
            Season::Midsummer => "Midsummer with lush vegetation",
            Season::Autumn => "Autumn with unharvested cropland",
            Season::LateAutumn => "Late autumn after frost, no snow",
            Season::Winter => "Winter, snow on ground and subfreezing",
            Season::TransitionalSpring => {
                "Transitional spring with partially green short annuals"
            }
        }
    }
}

impl TryFrom<usize> for Season {
    type Error = DryDepError;

    fn try_from(category: usize) -> DryDepResult<Self> {
        Self::from_category(category)
    }
}

impl From<Season> for usize {
    fn from(s: Season) -> usize {
        s.category()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Land-use category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandUse {
    Urban = 1,
    Agricultural = 2,
    Range = 3,
    DeciduousForest = 4,
    ConiferousForest = 5,
    /// Mixed forest including wetland
    MixedForest = 6,
    /// Water, both salt and fresh
    Water = 7,
    /// Barren land, mostly desert
    Barren = 8,
    NonForestedWetland = 9,
    MixedAgriculturalRange = 10,
    /// Rocky open areas with low-growing shrubs
    RockyShrubs = 11,
}

impl LandUse {
    pub const ALL: [LandUse; 11] = [
        LandUse::Urban,
        LandUse::Agricultural,
        LandUse::Range,
        LandUse::DeciduousForest,
        LandUse::ConiferousForest,
        LandUse::MixedForest,
        LandUse::Water,
        LandUse::Barren,
        LandUse::NonForestedWetland,
        LandUse::MixedAgriculturalRange,
        LandUse::RockyShrubs,
    ];

    /// Convert a 1-based land-use category number
    pub fn from_category(category: usize) -> DryDepResult<Self> {
        category
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DryDepError::InvalidLandUse(category))
    }

    /// 1-based category number
    pub fn category(self) -> usize {
        self as usize
    }

    pub(crate) fn index(self) -> usize {
        self.category() - 1
    }

    pub fn description(self) -> &'static str {
        match self {
            LandUse::Urban => "Urban land",
            LandUse::Agricultural => "Agricultural land",
            LandUse::Range => "Range land",
            LandUse::DeciduousForest => "Deciduous forest",
            LandUse::ConiferousForest => "Coniferous forest",
            LandUse::MixedForest => "Mixed forest including wetland",
            LandUse::Water => "Water, both salt and fresh",
            LandUse::Barren => "Barren land, mostly desert",
            LandUse::NonForestedWetland => "Nonforested wetland",
            LandUse::MixedAgriculturalRange => "Mixed agricultural and range land",
            LandUse::RockyShrubs => "Rocky open areas with low-growing shrubs",
        }
    }
}

impl TryFrom<usize> for LandUse {
    type Error = DryDepError;

    fn try_from(category: usize) -> DryDepResult<Self> {
        Self::from_category(category)
    }
}

impl From<LandUse> for usize {
    fn from(l: LandUse) -> usize {
        l.category()
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_round_trip_categories() {
        for (i, season) in Season::ALL.iter().enumerate() {
            assert_eq!(season.category(), i + 1);
            assert_eq!(season.index(), i);
            assert_eq!(Season::from_category(i + 1).unwrap(), *season);
        }
    }

    #[test]
    fn test_land_use_round_trip_categories() {
        for (i, land_use) in LandUse::ALL.iter().enumerate() {
            assert_eq!(usize::from(*land_use), i + 1);
            assert_eq!(LandUse::try_from(i + 1).unwrap(), *land_use);
        }
    }

    #[test]
    fn test_out_of_range_season_is_rejected() {
        assert_eq!(
            Season::from_category(0).unwrap_err(),
            DryDepError::InvalidSeason(0)
        );
        assert_eq!(
            Season::from_category(6).unwrap_err(),
            DryDepError::InvalidSeason(6)
        );
    }

    #[test]
    fn test_out_of_range_land_use_is_rejected() {
        assert!(LandUse::from_category(0).is_err());
        assert_eq!(
            LandUse::from_category(12).unwrap_err(),
            DryDepError::InvalidLandUse(12)
        );
    }

    #[test]
    fn test_display_uses_description() {
        assert_eq!(LandUse::DeciduousForest.to_string(), "Deciduous forest");
        assert_eq!(Season::Winter.to_string(), Season::Winter.description());
    }
}
