//! Paired statistics for evaluating modelled values against observations.
//!
//! Every statistic takes an `observed` and a `modelled` slice of equal length
//! and returns a scalar. Differences are taken as `modelled - observed`, so a
//! positive bias means the model overestimates.
//!
//! The fractional statistics divide by `observed[i] + modelled[i]`. A zero
//! paired sum is a singularity of the statistic itself and yields a
//! non-finite result; callers evaluating physical quantities such as
//! concentrations or deposition fluxes are expected to pass positive values.

use crate::errors::{DryDepError, DryDepResult};
use crate::FloatValue;

fn check_lengths(observed: &[FloatValue], modelled: &[FloatValue]) -> DryDepResult<FloatValue> {
    if observed.len() != modelled.len() {
        return Err(DryDepError::LengthMismatch {
            observed: observed.len(),
            modelled: modelled.len(),
        });
    }
    if observed.is_empty() {
        return Err(DryDepError::EmptySeries);
    }
    Ok(observed.len() as FloatValue)
}

/// Mean Bias. Optimal = 0. Positive = overestimation.
///
/// $$MB = \frac{1}{n} \sum_i (M_i - O_i)$$
pub fn mean_bias(observed: &[FloatValue], modelled: &[FloatValue]) -> DryDepResult<FloatValue> {
    let n = check_lengths(observed, modelled)?;
    let total: FloatValue = observed
        .iter()
        .zip(modelled)
        .map(|(o, m)| m - o)
        .sum();
    Ok(total / n)
}

/// Mean Error. Range: [0, inf), 0 = perfect.
///
/// $$ME = \frac{1}{n} \sum_i |M_i - O_i|$$
pub fn mean_error(observed: &[FloatValue], modelled: &[FloatValue]) -> DryDepResult<FloatValue> {
    let n = check_lengths(observed, modelled)?;
    let total: FloatValue = observed
        .iter()
        .zip(modelled)
        .map(|(o, m)| (m - o).abs())
        .sum();
    Ok(total / n)
}

/// Mean Fractional Bias. Range: [-2, 2] for positive data, 0 = perfect.
///
/// $$MFB = \frac{1}{n} \sum_i \frac{2 (M_i - O_i)}{O_i + M_i}$$
pub fn mean_fractional_bias(
    observed: &[FloatValue],
    modelled: &[FloatValue],
) -> DryDepResult<FloatValue> {
    let n = check_lengths(observed, modelled)?;
    let total: FloatValue = observed
        .iter()
        .zip(modelled)
        .map(|(o, m)| 2.0 * (m - o) / (o + m))
        .sum();
    Ok(total / n)
}

/// Mean Fractional Error. Range: [0, 2] for positive data, 0 = perfect.
///
/// $$MFE = \frac{1}{n} \sum_i \frac{2 |M_i - O_i|}{|O_i + M_i|}$$
pub fn mean_fractional_error(
    observed: &[FloatValue],
    modelled: &[FloatValue],
) -> DryDepResult<FloatValue> {
    let n = check_lengths(observed, modelled)?;
    let total: FloatValue = observed
        .iter()
        .zip(modelled)
        .map(|(o, m)| 2.0 * (m - o).abs() / (o + m).abs())
        .sum();
    Ok(total / n)
}
