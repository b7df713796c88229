//! Least-Squares Polynomial Approximation
//!
//! Fits a single polynomial of caller-chosen degree to the samples by
//! [ordinary least squares](https://en.wikipedia.org/wiki/Ordinary_least_squares)
//! via the normal equations. The symmetric `(d+1) x (d+1)` moment matrix
//! `(i, j) -> sum(x^(i+j))` is assembled once per distinct exponent and
//! handed to [`crate::solver::gauss`] (strict mode: a non-finite solution
//! component fails the fit and clears the model).
//!
//! Monomial power-sum normal equations are ill-conditioned for degrees much
//! beyond 6-8 on wide `x` ranges. That is a property of the basis, not of
//! the solver; timestamped fits rebase `x` to an elapsed-time origin to keep
//! the moments bounded.

use crate::fitting::algorithms::Algorithm;
use crate::fitting::config::{impl_common_cfg, CommonCfg};
use crate::fitting::errors::FitError;
use crate::fitting::report::FitReport;
use crate::fitting::series;
use crate::fitting::traits::Model;
use crate::solver::gauss::{self, Strategy};
use crate::solver::matrix::AugmentedMatrix;

/// Least-squares configuration
///
/// # Fields
/// - `common`   : [`CommonCfg`]
/// - `degree`   : polynomial degree `d`, monomial coefficients `0..=d`
/// - `strategy` : solver execution strategy for the normal equations
///
/// # Construction
/// - Use [`LeastSquaresCfg::new`] then optional setters.
///
/// # Defaults
/// - `degree` 1 (straight line), [`Strategy::Sequential`].
#[derive(Debug, Clone, Copy)]
pub struct LeastSquaresCfg<'a> {
    common: CommonCfg<'a>,
    degree: usize,
    strategy: Strategy,
}

impl<'a> LeastSquaresCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            degree: 1,
            strategy: Strategy::Sequential,
        }
    }

    pub fn with_degree(mut self, v: usize) -> Self { self.degree = v; self }
    pub fn with_strategy(mut self, v: Strategy) -> Self { self.strategy = v; self }

    #[inline] #[must_use] pub fn degree(&self) -> usize { self.degree }
    #[inline] #[must_use] pub fn strategy(&self) -> Strategy { self.strategy }
}

impl<'a> Default for LeastSquaresCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LeastSquaresCfg<'a>);

#[inline]
fn power_sum(x: &[f64], p: usize) -> f64 {
    x.iter().map(|&xk| xk.powi(p as i32)).sum()
}

/// Assembles the augmented normal-equations system for degree `d`:
/// entry `(i, j) = sum_k x_k^(i+j)`, RHS column `i`: `sum_k y_k * x_k^i`.
fn normal_equations(x: &[f64], y: &[f64], degree: usize) -> Vec<Vec<f64>> {
    let terms = degree + 1;

    // one moment per distinct exponent, shared across the symmetric pairs
    let moments: Vec<f64> = (0..2 * terms - 1).map(|p| power_sum(x, p)).collect();

    let mut rows = vec![vec![0.0; terms + 1]; terms];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, cell) in row[..terms].iter_mut().enumerate() {
            *cell = moments[i + j];
        }
        row[terms] = x
            .iter()
            .zip(y)
            .map(|(&xk, &yk)| yk * xk.powi(i as i32))
            .sum();
    }

    rows
}

/// Least-squares polynomial model.
///
/// # Lifecycle
/// - [`LeastSquares::fit`] fully replaces prior coefficients; a failed fit
///   (validation or a singular normal system) leaves the model cleared.
/// - [`Model::eval`] before a successful fit returns
///   [`FitError::NotInitialized`].
///
/// Timestamped fits record the rebasing origin and reuse it at evaluation:
/// `eval(t) = sum(coeff[i] * (t - origin)^i)`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquares {
    coeff: Vec<f64>,
    origin: f64,
}

impl LeastSquares {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits a degree-`d` polynomial to the configured samples.
    ///
    /// # Returns
    /// [`FitReport`] containing
    /// - `algorithm_name` : `"least squares"`
    /// - `n_provided`     : number of (x, y) data points
    /// - `n_coefficients` : `d + 1` monomial coefficients
    ///
    /// # Errors
    /// - Any validation error from [`CommonCfg::validate`].
    /// - [`FitError::InvalidDegree`] when `d + 1` exceeds the sample count.
    /// - [`FitError::Solver`] when the normal system has no finite solution;
    ///   the model is left cleared, never stale.
    pub fn fit(&mut self, cfg: LeastSquaresCfg) -> Result<FitReport, FitError> {
        self.clear();
        cfg.common.validate()?;

        let x = cfg.common.x();
        let y = cfg.common.y();
        let degree = cfg.degree;

        if degree + 1 > x.len() {
            return Err(FitError::InvalidDegree {
                got: degree,
                need: degree + 1,
                n_points: x.len(),
            });
        }

        let system = AugmentedMatrix::from_rows(normal_equations(x, y, degree))?;
        self.coeff = gauss::solve(&system, cfg.strategy)?;

        Ok(FitReport::new(Algorithm::LeastSquares, x.len(), self.coeff.len()))
    }

    /// Fits against a timestamped series (unix seconds).
    ///
    /// Positions are rebased to elapsed seconds from the first stamp before
    /// the normal equations are built; the origin is stored and subtracted
    /// again by [`Model::eval`], so evaluation points stay on the raw
    /// timestamp axis.
    pub fn fit_series(
        &mut self,
        stamps: &[i64],
        values: &[f64],
        degree: usize,
    ) -> Result<FitReport, FitError> {
        self.clear();
        let (origin, x) = series::elapsed(stamps)?;
        let cfg = LeastSquaresCfg::new()
            .with_degree(degree)
            .set_x(&x)?
            .set_y(values)?;

        let report = self.fit(cfg)?;
        self.origin = origin;
        Ok(report)
    }

    /// Monomial coefficients `c[0..=d]`; empty before a successful fit.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeff
    }

    /// Rebasing origin; `0.0` unless the model was fitted via
    /// [`LeastSquares::fit_series`].
    pub fn origin(&self) -> f64 {
        self.origin
    }

    fn clear(&mut self) {
        self.coeff.clear();
        self.origin = 0.0;
    }
}

impl Model for LeastSquares {
    /// Monomial-basis evaluation `sum(coeff[i] * (t - origin)^i)`.
    /// Extrapolates freely outside the fitted range.
    fn eval(&self, t: f64) -> Result<f64, FitError> {
        if self.coeff.is_empty() {
            return Err(FitError::NotInitialized { algorithm: Algorithm::LeastSquares });
        }

        let u = t - self.origin;
        let mut acc = 0.0;
        for (i, &c) in self.coeff.iter().enumerate() {
            acc += c * u.powi(i as i32);
        }

        Ok(acc)
    }
}
