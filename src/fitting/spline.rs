//! Natural Cubic Spline Interpolation
//!
//! Builds a natural cubic spline through `n >= 2` ordered samples with a
//! Thomas-style forward sweep over the tridiagonal second-derivative system,
//! then evaluates piecewise.
//!
//! Segment convention is *right-indexed*: segment `i` covers
//! `[x[i-1], x[i]]` and is evaluated in the local variable `u = t - x[i]`,
//! so `u <= 0` inside the segment. The stored `c` column carries half the
//! spline's second derivative. Both conventions are load-bearing: the
//! coefficient rows are part of the public surface and downstream consumers
//! rely on them.

use crate::fitting::algorithms::Algorithm;
use crate::fitting::config::{impl_common_cfg, CommonCfg};
use crate::fitting::errors::FitError;
use crate::fitting::report::FitReport;
use crate::fitting::series;
use crate::fitting::traits::Model;

/// Absolute tolerance admitting floating-point equality at segment
/// boundaries; evaluation points within `SEGMENT_EPS` of the covered domain
/// still evaluate.
pub const SEGMENT_EPS: f64 = 1e-6;

/// Natural cubic spline configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`SplineCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct SplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> SplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl<'a> Default for SplineCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SplineCfg<'a>);

/// Forward sweep + back substitution over the interior second-derivative
/// system, then per-segment `b`/`d` derivation.
///
/// Row `i` of the result is `[a, b, c, d]` with `a = y[i]` and the cubic on
/// segment `i` being `a + b*u + c*u^2 + d*u^3`, `u = t - x[i]`.
fn sweep(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let n = x.len();
    let last = n - 1;

    let mut coeff = vec![[0.0_f64; 4]; n];
    for i in 0..n {
        coeff[i][0] = y[i];
    }

    if n == 2 {
        // two knots: every curvature term is zero, segment 1 is the chord
        coeff[1][1] = (y[1] - y[0]) / (x[1] - x[0]);
        return coeff;
    }

    // forward sweep over interior knots i = 1..n-2:
    //   diag = 2(x[i+1] - x[i-1])
    //   f    = 6[(y[i+1]-y[i])/h_right - (y[i]-y[i-1])/h_left]
    // with natural boundary c[0] = 0 (alpha[0] = beta[0] = 0)
    let mut alpha = vec![0.0; last];
    let mut beta = vec![0.0; last];
    let (mut h_left, mut diag, mut f) = (0.0, 0.0, 0.0);
    for i in 1..last {
        h_left = x[i] - x[i - 1];
        let h_right = x[i + 1] - x[i];
        diag = 2.0 * (x[i + 1] - x[i - 1]);
        f = 6.0 * ((y[i + 1] - y[i]) / h_right - (y[i] - y[i - 1]) / h_left);

        let z = h_left * alpha[i - 1] + diag;
        alpha[i] = -h_right / z;
        beta[i] = (f - h_left * beta[i - 1]) / z;
    }

    // back-substitute the halved-c column, last row first
    coeff[last][2] = (f - h_left * beta[last - 1]) / (diag + h_left * alpha[last - 1]) / 2.0;
    for i in (1..last).rev() {
        coeff[i][2] = (alpha[i] * coeff[i + 1][2] + beta[i]) / 2.0;
    }

    // per-segment b and d from the segment's own width
    for i in (1..=last).rev() {
        let h = x[i] - x[i - 1];
        coeff[i][3] = (coeff[i][2] - coeff[i - 1][2]) / 3.0 / h;
        coeff[i][1] = (2.0 * coeff[i][2] + coeff[i - 1][2]) * h / 3.0
            + (coeff[i][0] - coeff[i - 1][0]) / h;
    }

    coeff
}

/// Natural cubic spline through ordered samples.
///
/// # Lifecycle
/// - [`CubicSpline::fit`] fully replaces any prior samples and coefficients;
///   a failed fit leaves the model cleared.
/// - [`Model::eval`] before a successful fit returns
///   [`FitError::NotInitialized`].
///
/// The spline is C²-continuous at interior knots by construction and
/// reproduces every sample value at its knot.
#[derive(Debug, Clone, Default)]
pub struct CubicSpline {
    x: Vec<f64>,
    coeff: Vec<[f64; 4]>,
}

impl CubicSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the natural spline to the configured samples.
    ///
    /// # Returns
    /// [`FitReport`] containing
    /// - `algorithm_name` : `"natural cubic spline"`
    /// - `n_provided`     : number of knots
    /// - `n_coefficients` : one `[a, b, c, d]` row per knot
    ///
    /// # Errors
    /// - Any validation error from [`CommonCfg::validate`].
    pub fn fit(&mut self, cfg: SplineCfg) -> Result<FitReport, FitError> {
        self.clear();
        cfg.common.validate()?;

        let x = cfg.common.x();
        let y = cfg.common.y();

        self.x = x.to_vec();
        self.coeff = sweep(x, y);

        Ok(FitReport::new(Algorithm::SplineNatural, x.len(), self.coeff.len()))
    }

    /// Fits against a timestamped series (unix seconds).
    pub fn fit_series(&mut self, stamps: &[i64], values: &[f64]) -> Result<FitReport, FitError> {
        self.clear();
        let x = series::seconds(stamps)?;
        let cfg = SplineCfg::new().set_x(&x)?.set_y(values)?;
        self.fit(cfg)
    }

    /// Coefficient rows `[a, b, c, d]`, one per knot; row 0 carries only
    /// `a = y[0]`. Empty before a successful fit.
    pub fn coefficients(&self) -> &[[f64; 4]] {
        &self.coeff
    }

    /// Smallest segment `i >= 1` whose right knot admits `t` within
    /// [`SEGMENT_EPS`], matching the first-match scan of the segment table.
    #[inline]
    fn find_segment(&self, t: f64) -> usize {
        let n = self.x.len();
        self.x
            .partition_point(|&xi| xi + SEGMENT_EPS <= t)
            .clamp(1, n - 1)
    }

    fn clear(&mut self) {
        self.x.clear();
        self.coeff.clear();
    }
}

impl Model for CubicSpline {
    /// Evaluates the spline at `t`.
    ///
    /// # Errors
    /// - [`FitError::NotInitialized`] before a successful fit.
    /// - [`FitError::OutOfRange`] if `t` lies outside
    ///   `[x[0] - SEGMENT_EPS, x[n-1] + SEGMENT_EPS]`.
    fn eval(&self, t: f64) -> Result<f64, FitError> {
        if self.coeff.is_empty() {
            return Err(FitError::NotInitialized { algorithm: Algorithm::SplineNatural });
        }

        let n = self.x.len();
        let x_min = self.x[0];
        let x_max = self.x[n - 1];
        if t < x_min - SEGMENT_EPS || t > x_max + SEGMENT_EPS {
            return Err(FitError::OutOfRange { got: t, x_min, x_max });
        }

        let i = self.find_segment(t);
        let row = self.coeff[i];
        let u = t - self.x[i];

        Ok(row[0] + u * (row[1] + row[2] * u + row[3] * u * u))
    }
}
