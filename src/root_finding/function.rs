//! The function-evaluation capability consumed by every method.

use crate::expression::EvalError;


/// A scalar function `x -> f(x)` that may fail to evaluate.
///
/// Implemented for
/// - every `Fn(f64) -> f64` closure (never fails)
/// - [`crate::expression::Expression`] (fails on domain errors)
///
/// Implementations must be deterministic: the engine calls them
/// 1–3 times per iteration and relies on repeated calls agreeing.
pub trait Function {
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> Function for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        Ok(self(x))
    }
}
