//! Fixed-point iteration `x <- g(x)`

use super::algorithms::Algorithm;
use super::common::{drive, Finish};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{FixedPointStep, RootFindingReport, ToleranceSatisfied};


/// Fixed-point configuration: [`CommonCfg`] only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for FixedPointCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(FixedPointCfg);


/// Iterates `x_{n+1} = g(x_n)` from `x0` until two iterates are within
/// `tolerance` of each other.
///
/// `g` must be a reformulation of `f(x) = 0` whose fixed point is the
/// sought root (e.g. `g(x) = cos(x)` for `f(x) = cos(x) - x`). Choosing a
/// `g` that contracts near the fixed point is the caller's job; nothing
/// here checks `|g'(x)| < 1`.
///
/// # Returns
/// [`RootFindingReport`] with one [`FixedPointStep`] `(i, x, g(x), |g(x) - x|)`
/// per iteration. The root of a converged run is `g(x)`.
///
/// # Failures
/// - [`RootFindingError::InvalidGuess`]        : `x0` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(x)` produced NaN/inf
/// - [`RootFindingError::Evaluation`]          : `g` failed to evaluate
///
/// # Notes
/// - Only the step `|g(x) - x|` is tested. `g` has no "zero at the root"
///   meaning, so there is no residual test; a converged report always has
///   [`ToleranceSatisfied::StepSizeReached`].
pub fn fixed_point<G>(
    g: &G,
    x0: f64,
    cfg: FixedPointCfg,
) -> RootFindingReport<FixedPointStep>
where G: Function + ?Sized {
    drive(Algorithm::FIXED_POINT, g, |eval, trace| {
        if !x0.is_finite() {
            return Err(RootFindingError::InvalidGuess { x: x0 });
        }

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();

        let mut x     = x0;
        let mut error = f64::INFINITY;
        for iter in 1..=max_iter {
            let gx = eval.eval(x)?;
            error = (gx - x).abs();

            trace.push(FixedPointStep { iteration: iter, x, gx, error });

            if error < tol {
                return Ok(Finish::converged(gx, error, iter, ToleranceSatisfied::StepSizeReached));
            }

            x = gx;
        }

        Ok(Finish::not_converged(x, error, max_iter))
    })
}
