//! Defines the struct returned by all fitting operations.
//!
//! Defines the [`FitReport`] struct returned by every successful
//! `fit`/`fit_series` call.
//!
//! This report summarizes key metadata about the fit: the algorithm used,
//! the number of samples consumed, and the number of coefficients produced.
//! Evaluation happens afterwards on the fitted model itself.

use crate::fitting::algorithms::Algorithm;

/// Summary of a successful fit.
///
/// [`FitReport`]
/// - `algorithm_name` : name of the fitting method (e.g. `"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_coefficients` : number of coefficients in the fitted model
#[derive(Debug, Clone, Copy)]
pub struct FitReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_coefficients: usize,
}

impl FitReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_coefficients: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_coefficients,
        }
    }
}
