pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod series;
pub mod traits;
pub use traits::Model;

pub mod least_squares;
pub mod newton;
pub mod spline;
