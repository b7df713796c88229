use thiserror::Error;

use crate::fitting::algorithms::Algorithm;
use crate::solver::errors::SolveError;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid degree {got}: needs {need} points, got {n_points}")]
    InvalidDegree { got: usize, need: usize, n_points: usize },

    #[error("{algorithm} model not fitted: call fit before eval")]
    NotInitialized { algorithm: Algorithm },

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfRange { got: f64, x_min: f64, x_max: f64 },

    #[error(transparent)]
    Solver(#[from] SolveError),
}
