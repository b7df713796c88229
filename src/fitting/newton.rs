//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed through the triangular difference table and
//! evaluated with Horner's nested form. The fitted polynomial passes through
//! every sample exactly and extrapolates freely outside the sample range.

use crate::fitting::algorithms::Algorithm;
use crate::fitting::config::{impl_common_cfg, CommonCfg};
use crate::fitting::errors::FitError;
use crate::fitting::report::FitReport;
use crate::fitting::series;
use crate::fitting::traits::Model;

/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed `x` spacing between adjacent samples;
///   [`crate::fitting::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl<'a> Default for NewtonCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);

/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}

/// Newton divided-difference polynomial through a set of samples.
///
/// # Lifecycle
/// - [`NewtonPolynomial::fit`] fully replaces any prior samples and
///   coefficients; a failed fit leaves the model cleared, never stale.
/// - [`Model::eval`] before a successful fit returns
///   [`FitError::NotInitialized`].
///
/// The model owns copies of the sample positions and the coefficient vector;
/// callers keep ownership of their input slices.
#[derive(Debug, Clone, Default)]
pub struct NewtonPolynomial {
    x: Vec<f64>,
    coeff: Vec<f64>,
}

impl NewtonPolynomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the divided-difference polynomial to the configured samples.
    ///
    /// # Returns
    /// [`FitReport`] containing
    /// - `algorithm_name` : `"newton"`
    /// - `n_provided`     : number of (x, y) data points
    /// - `n_coefficients` : `n_provided` (one divided difference per sample)
    ///
    /// # Errors
    /// - Any validation error from [`CommonCfg::validate`] (empty, unequal
    ///   lengths, fewer than 2 points).
    pub fn fit(&mut self, cfg: NewtonCfg) -> Result<FitReport, FitError> {
        self.clear();
        cfg.common.validate()?;

        let x = cfg.common.x();
        let y = cfg.common.y();

        self.x = x.to_vec();
        self.coeff = divided_differences(x, y);

        Ok(FitReport::new(Algorithm::Newton, x.len(), self.coeff.len()))
    }

    /// Fits against a timestamped series (unix seconds).
    ///
    /// Timestamps become raw `f64` sample positions; evaluation points are
    /// expressed on the same axis.
    pub fn fit_series(&mut self, stamps: &[i64], values: &[f64]) -> Result<FitReport, FitError> {
        self.clear();
        let x = series::seconds(stamps)?;
        let cfg = NewtonCfg::new().set_x(&x)?.set_y(values)?;
        self.fit(cfg)
    }

    /// Divided differences `c[0..n]`; empty before a successful fit.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeff
    }

    fn clear(&mut self) {
        self.x.clear();
        self.coeff.clear();
    }
}

impl Model for NewtonPolynomial {
    /// Evaluates the polynomial at `t` using Horner's nested form:
    ///
    /// ```text
    /// P(t) = c[0] + (t - x[0]) * [ c[1] + (t - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    ///
    /// No domain check: the exact interpolant extrapolates outside
    /// `[x[0], x[n-1]]`.
    fn eval(&self, t: f64) -> Result<f64, FitError> {
        if self.coeff.is_empty() {
            return Err(FitError::NotInitialized { algorithm: Algorithm::Newton });
        }

        let n = self.coeff.len();
        let mut p = self.coeff[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeff[j] + (t - self.x[j]) * p;
        }

        Ok(p)
    }
}
