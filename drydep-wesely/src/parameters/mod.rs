//! Model parameters
//!
//! Each parameter struct provides defaults reproducing Wesely (1989) and
//! accepts partial overrides through serde.

mod surface_resistance;

pub use surface_resistance::SurfaceResistanceParameters;
