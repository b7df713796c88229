//! Dense augmented linear systems.
//!
//! [`AugmentedMatrix`] holds the coefficient matrix of `A x = b` with the
//! right-hand side appended as the final column: `n` rows of `n + 1` values.
//! The shape invariant is enforced at construction; the solver never has to
//! re-check it.
//!
//! A plain-text loader ([`AugmentedMatrix::from_file`]) exists for
//! solver-only diagnostics: line 1 is the equation count, each following
//! line one whitespace-separated row.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::solver::errors::{LoadError, SolveError};

/// A square dense system `A x = b`, stored row-major with `b` as the last
/// column of each row.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    /// Builds a system from raw rows, enforcing `cols == rows + 1`.
    ///
    /// # Errors
    /// - [`SolveError::EmptySystem`] for zero rows.
    /// - [`SolveError::RowWidth`] when any row's length differs from
    ///   `rows + 1`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        if rows.is_empty() {
            return Err(SolveError::EmptySystem);
        }

        let expected = rows.len() + 1;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SolveError::RowWidth {
                    row: i,
                    got: row.len(),
                    expected,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Loads the diagnostic text format from disk.
    ///
    /// # Errors
    /// - [`LoadError::Io`] when the file can't be opened or read.
    /// - Any parse failure from [`AugmentedMatrix::from_reader`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses the diagnostic text format:
    /// line 1 integer `n`, then `n` lines of `n + 1` float tokens.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LoadError> {
        let mut lines = reader.lines();

        let first = match lines.next() {
            Some(line) => line?,
            None => return Err(LoadError::BadEquationCount { got: String::new() }),
        };
        let n: usize = first
            .trim()
            .parse()
            .map_err(|_| LoadError::BadEquationCount { got: first.trim().to_string() })?;
        if n == 0 {
            return Err(LoadError::BadEquationCount { got: first.trim().to_string() });
        }

        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err(LoadError::UnexpectedEof { got: i, expected: n }),
            };

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != n + 1 {
                return Err(LoadError::RowWidth {
                    row: i,
                    got: tokens.len(),
                    expected: n + 1,
                });
            }

            let mut row = Vec::with_capacity(n + 1);
            for token in tokens {
                let value: f64 = token
                    .parse()
                    .map_err(|_| LoadError::BadToken { row: i, token: token.to_string() })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Number of unknowns (= number of equations).
    pub fn unknowns(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Private elimination copy; the caller's matrix is never mutated.
    pub(crate) fn to_working(&self) -> Vec<Vec<f64>> {
        self.rows.clone()
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.rows.len())?;
        for row in &self.rows {
            let mut sep = "";
            for value in row {
                write!(f, "{sep}{value}")?;
                sep = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
