//! estuary — closed-form models of a 1-D sampled series.
//!
//! Fits a sampled series `(x, y)` three ways and evaluates the resulting
//! model anywhere:
//!
//! - [`fitting::newton`]        : exact polynomial through every sample
//!   (Newton divided differences)
//! - [`fitting::spline`]        : natural cubic spline, piecewise evaluation
//! - [`fitting::least_squares`] : polynomial of chosen degree minimizing
//!   squared residuals (normal equations)
//!
//! The least-squares path is backed by [`solver`], a dense Gauss-elimination
//! engine over augmented matrices with sequential and parallel strategies.
//!
//! Timestamped series (unix seconds) are supported through each model's
//! `fit_series`; see [`fitting::series`].

pub mod fitting;
pub mod solver;

pub use fitting::traits::Model;
