//! Defines the curve-fitting algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported models.

/// Curve-fitting algorithm variants.
/// - [`Algorithm::Newton`]        exact divided-difference polynomial
/// - [`Algorithm::SplineNatural`] natural cubic spline
/// - [`Algorithm::LeastSquares`]  least-squares polynomial approximation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    SplineNatural,
    LeastSquares,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton        => "newton",
            Algorithm::SplineNatural => "natural cubic spline",
            Algorithm::LeastSquares  => "least squares",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
