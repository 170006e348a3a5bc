//! Gaseous dry deposition
//!
//! Re-exports the Wesely (1989) surface resistance model from
//! [`drydep_wesely`] and the shared types and evaluation statistics from
//! [`drydep_core`].
//!
//! ```
//! use drydep::evaluation::mean_bias;
//!
//! let observed = [100.0, 200.0];
//! let modelled = [110.0, 190.0];
//! assert_eq!(mean_bias(&observed, &modelled).unwrap(), 0.0);
//! ```

pub use drydep_core::errors::{DryDepError, DryDepResult};
pub use drydep_core::{evaluation, FloatValue};
pub use drydep_wesely::*;
