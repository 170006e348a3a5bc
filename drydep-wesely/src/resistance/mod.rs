//! Resistance calculations
//!
//! - `stomatal`: stomatal and mesophyll resistance of the leaf interior
//! - `pathways`: cuticle, lower canopy and ground pathways, including wetness
//!   and frost corrections
//! - `combiner`: [`SurfaceResistance`], which sums the pathways in parallel
//!
//! Closed pathways are carried as `FloatValue::INFINITY`. [`conductance`]
//! maps them to zero and [`resistance_from_conductance`] maps a zero
//! conductance back to infinity, so no calculation divides by zero.

mod combiner;
pub mod pathways;
pub mod stomatal;

pub use combiner::{PathwayResistances, SurfaceResistance};

use drydep_core::FloatValue;

/// Reciprocal of a resistance, zero for a closed pathway
pub fn conductance(resistance: FloatValue) -> FloatValue {
    if resistance.is_infinite() {
        0.0
    } else {
        1.0 / resistance
    }
}

/// Reciprocal of a conductance, infinite when nothing conducts
pub fn resistance_from_conductance(conductance: FloatValue) -> FloatValue {
    if conductance > 0.0 {
        1.0 / conductance
    } else {
        FloatValue::INFINITY
    }
}

/// Two resistances acting in parallel
pub fn parallel(a: FloatValue, b: FloatValue) -> FloatValue {
    resistance_from_conductance(conductance(a) + conductance(b))
}
