//! Solver error types.
//!
//! ┌ [`SolveError`] : system shape and numerical failures
//! │   ├ empty or mis-shaped augmented matrix
//! │   └ non-finite solution component (no pivoting; a zero or near-zero
//! │     diagonal pivot propagates NaN/Inf into the back substitution)
//! │
//! └ [`LoadError`]  : matrix-file parsing failures
//!     ├ unreadable file
//!     ├ bad equation count or float token
//!     └ wrong row width or premature end of file

use thiserror::Error;

/// System shape and numerical errors.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("empty system: at least one equation required")]
    EmptySystem,

    #[error("row {row} has {got} columns, expected {expected} (unknowns + 1)")]
    RowWidth { row: usize, got: usize, expected: usize },

    #[error("system has no finite solution: component {index} is NaN or infinite")]
    Singular { index: usize },
}

/// Matrix-file parsing errors.
///
/// The diagnostic format is line 1: integer equation count `n`, then `n`
/// lines of `n + 1` whitespace-separated floats (last token is the RHS).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid equation count: {got:?}")]
    BadEquationCount { got: String },

    #[error("row {row}: invalid float token {token:?}")]
    BadToken { row: usize, token: String },

    #[error("row {row}: expected {expected} values, got {got}")]
    RowWidth { row: usize, got: usize, expected: usize },

    #[error("unexpected end of file: got {got} of {expected} rows")]
    UnexpectedEof { got: usize, expected: usize },
}
