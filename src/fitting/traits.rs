use crate::fitting::errors::FitError;

pub trait Model {
    /// evaluates the fitted model at a single point
    /// defined separately in each method
    fn eval(&self, t: f64) -> Result<f64, FitError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, ts: &[f64]) -> Result<Vec<f64>, FitError> {
        ts.iter().map(|&t| self.eval(t)).collect()
    }
}
