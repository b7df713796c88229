pub mod errors;
pub mod gauss;
pub mod matrix;

pub use gauss::{solve, solve_lenient, PartialSolution, Strategy};
pub use matrix::AugmentedMatrix;
