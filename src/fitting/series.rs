//! Timestamped-series helpers.
//!
//! Models accept plain `(x, y)` slices; a date-indexed series enters as unix
//! seconds (`&[i64]`) through each model's `fit_series`. Two conversions:
//!
//! - [`seconds`] : timestamps as raw `f64` sample positions (Newton, spline)
//! - [`elapsed`] : positions rebased to the first stamp, returning the origin
//!   (least squares — keeps the power-sum moments numerically bounded; the
//!   origin must be subtracted again at evaluation time)

use crate::fitting::errors::FitError;

/// Converts unix-second timestamps to `f64` sample positions.
pub fn seconds(stamps: &[i64]) -> Result<Vec<f64>, FitError> {
    if stamps.is_empty() {
        return Err(FitError::EmptyInput);
    }
    Ok(stamps.iter().map(|&s| s as f64).collect())
}

/// Rebases timestamps to elapsed seconds from the first stamp.
///
/// Returns `(origin, positions)` where `positions[i] = stamps[i] - origin`.
pub fn elapsed(stamps: &[i64]) -> Result<(f64, Vec<f64>), FitError> {
    if stamps.is_empty() {
        return Err(FitError::EmptyInput);
    }
    let origin = stamps[0] as f64;
    let positions = stamps.iter().map(|&s| s as f64 - origin).collect();
    Ok((origin, positions))
}
