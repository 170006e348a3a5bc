//! Surface resistance to gaseous dry deposition following Wesely (1989)
//!
//! The bulk surface resistance $r_c$ of a gas combines four parallel uptake
//! pathways: leaf stomata, leaf cuticles, the lower canopy and the ground.
//! Base resistances come from a table indexed by [`Season`] and [`LandUse`];
//! each gas is described by its [`GasProperties`].
//!
//! # Module Organisation
//!
//! - `categories`: season and land-use categories
//! - `land_use`: the published base resistance table
//! - `species`: properties of the tabulated gases
//! - `meteorology`: surface temperature, radiation, slope and wetness
//! - `parameters`: model constants, with defaults from the paper
//! - `resistance`: the pathway calculations and [`SurfaceResistance`]
//!
//! # Example
//!
//! ```
//! use drydep_wesely::{LandUse, Season, Species, SurfaceConditions, SurfaceResistance};
//!
//! let model = SurfaceResistance::new();
//! let r_c = model
//!     .surface_resistance(
//!         &Species::O3.properties(),
//!         &SurfaceConditions::dry(25.0, 800.0),
//!         Season::Midsummer,
//!         LandUse::DeciduousForest,
//!     )
//!     .unwrap();
//! assert!((r_c - 104.0).abs() < 5.0);
//! ```

pub mod categories;
pub mod land_use;
pub mod meteorology;
pub mod parameters;
pub mod resistance;
pub mod species;

pub use categories::{LandUse, Season};
pub use land_use::LandUseCell;
pub use meteorology::{SurfaceConditions, SurfaceWetness};
pub use parameters::SurfaceResistanceParameters;
pub use resistance::{PathwayResistances, SurfaceResistance};
pub use species::{GasProperties, ReactivityClass, Species};
