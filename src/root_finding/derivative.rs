//! Central finite-difference derivative.

use super::function::Function;
use crate::expression::EvalError;


/// Central difference `(f(x + h) - f(x - h)) / 2h`.
///
/// Not checked for cancellation; callers apply their own near-zero test
/// to the result (see [`super::newton`]).
#[inline]
pub fn derivative<F>(func: &F, x: f64, h: f64) -> Result<f64, EvalError>
where F: Function + ?Sized {
    let fxp = func.eval(x + h)?;
    let fxm = func.eval(x - h)?;
    Ok(central_difference(fxp, fxm, h))
}

/// Slope from the samples `f(x + h)` and `f(x - h)`.
///
/// Finite samples can still give `±inf` when their difference overflows.
#[inline]
pub fn central_difference(fxp: f64, fxm: f64, h: f64) -> f64 {
    (fxp - fxm) / (2.0 * h)
}
