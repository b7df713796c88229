//! Dense Gauss elimination over augmented systems.
//!
//! Forward elimination without partial pivoting, row normalization, back
//! substitution. The no-pivoting design assumes callers supply systems with
//! non-zero diagonal pivots — true for the symmetric positive-(semi)definite
//! normal-equations matrices produced by
//! [`crate::fitting::least_squares`]. A zero or near-zero pivot propagates
//! NaN/Inf into the solution instead of panicking; the two entry points
//! differ only in how that is reported:
//!
//! - [`solve`]         : strict — any non-finite component fails with
//!   [`SolveError::Singular`]
//! - [`solve_lenient`] : tagged — returns every finite component plus a
//!   count of dropped ones ([`PartialSolution`])
//!
//! Elimination of pivot column `k` updates each row `i > k` independently,
//! so the parallel strategy hands every such row to a worker as an exclusive
//! `&mut` slice and joins before advancing to column `k + 1` (whose updates
//! read the rows written here). Per-row arithmetic is identical in both
//! strategies, so sequential and parallel results are bit-identical.

use rayon::prelude::*;

use crate::solver::errors::SolveError;
use crate::solver::matrix::AugmentedMatrix;

/// Elimination execution strategy.
///
/// A hint in the spirit of a worker-pool toggle: `Parallel` runs each pivot
/// column's row updates on rayon's pool (sized to available hardware
/// parallelism), `Sequential` stays on the caller's thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Sequential,
    Parallel,
}

/// Tagged outcome of a lenient solve.
///
/// `coefficients` keeps the finite solution components in order; `dropped`
/// counts the non-finite ones removed. `dropped > 0` means the system was
/// singular or ill-conditioned and the remaining components are suspect —
/// callers wanting all-or-nothing semantics should use [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSolution {
    pub coefficients: Vec<f64>,
    pub dropped: usize,
}

impl PartialSolution {
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.dropped == 0
    }
}

/// Solves `A x = b`, failing on any non-finite solution component.
///
/// Works on a private copy; the caller's matrix is never mutated.
///
/// # Errors
/// - [`SolveError::Singular`] with the index of the first non-finite
///   component.
pub fn solve(system: &AugmentedMatrix, strategy: Strategy) -> Result<Vec<f64>, SolveError> {
    let x = run(system, strategy);

    if let Some(index) = x.iter().position(|v| !v.is_finite()) {
        return Err(SolveError::Singular { index });
    }
    Ok(x)
}

/// Solves `A x = b`, keeping whatever finite components emerge.
///
/// The redesigned form of "silently skip NaN coefficients": the drop count
/// is explicit, so a partial solution can't masquerade as a complete one.
pub fn solve_lenient(system: &AugmentedMatrix, strategy: Strategy) -> PartialSolution {
    let full = run(system, strategy);

    let coefficients: Vec<f64> = full.iter().copied().filter(|v| v.is_finite()).collect();
    let dropped = full.len() - coefficients.len();

    PartialSolution { coefficients, dropped }
}

fn run(system: &AugmentedMatrix, strategy: Strategy) -> Vec<f64> {
    let mut rows = system.to_working();
    eliminate(&mut rows, strategy);
    normalize(&mut rows);
    back_substitute(&rows)
}

/// Replaces row `i` with `row_i - row_k * (row_i[k] / row_k[k])` over
/// columns `k..`, zeroing the sub-diagonal entry of the pivot column.
#[inline]
fn eliminate_row(row: &mut [f64], pivot: &[f64], k: usize) {
    let factor = row[k] / pivot[k];
    for j in k..row.len() {
        row[j] -= pivot[j] * factor;
    }
}

fn eliminate(rows: &mut [Vec<f64>], strategy: Strategy) {
    let n = rows.len();
    for k in 0..n.saturating_sub(1) {
        let (done, below) = rows.split_at_mut(k + 1);
        let pivot = done[k].as_slice();

        match strategy {
            Strategy::Sequential => {
                for row in below.iter_mut() {
                    eliminate_row(row, pivot, k);
                }
            }
            Strategy::Parallel => {
                // each worker owns a disjoint row; the implicit join here is
                // the barrier column k + 1 requires before reading them
                below
                    .par_iter_mut()
                    .for_each(|row| eliminate_row(row, pivot, k));
            }
        }
    }
}

/// Divides every row by its own diagonal entry, leaving the triangular
/// block unit-upper-triangular. Back substitution relies on this.
fn normalize(rows: &mut [Vec<f64>]) {
    for (i, row) in rows.iter_mut().enumerate() {
        let diagonal = row[i];
        for value in row[i..].iter_mut() {
            *value /= diagonal;
        }
    }
}

/// `x[i] = m[i][n] - sum(x[j] * m[i][j] for j > i)`, last unknown first.
fn back_substitute(rows: &[Vec<f64>]) -> Vec<f64> {
    let n = rows.len();
    let mut x = vec![0.0; n];

    for i in (0..n).rev() {
        let mut acc = rows[i][n];
        for j in i + 1..n {
            acc -= x[j] * rows[i][j];
        }
        x[i] = acc;
    }

    x
}
