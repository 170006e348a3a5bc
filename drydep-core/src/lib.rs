//! Core types shared by the dry deposition crates.
//!
//! - [`FloatValue`]: the floating point type used for every physical quantity
//! - [`errors`]: the error taxonomy and [`errors::DryDepResult`] alias
//! - [`evaluation`]: paired model/observation statistics used when evaluating
//!   deposition models against measurements

pub mod errors;
pub mod evaluation;

/// Floating point type used for all physical quantities
pub type FloatValue = f64;
