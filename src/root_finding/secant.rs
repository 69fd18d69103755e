use super::algorithms::Algorithm;
use super::common::{drive, tolerance_met, Finish};
use super::config::{CommonCfg, impl_common_cfg, DEGENERACY_THRESHOLD};
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{RootFindingReport, SecantStep, ToleranceSatisfied};


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, f0)` and `(x1, f1)`
///
/// # Returns
/// - `Ok(x2)` if `|f1 - f0| >= 1e-12`
/// - `Err(DivisionByZero)` if the denominator is too small.
/// - `Err(NonFiniteDerivative)` if `f1 - f0` overflows.
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, f0): (f64, f64),
    (x1, f1): (f64, f64),
) -> Result<f64, RootFindingError> {
    let denom = f1 - f0;
    if !denom.is_finite() {
        return Err(RootFindingError::NonFiniteDerivative { x: x1, dfx: denom / (x1 - x0) });
    }
    if denom.abs() < DEGENERACY_THRESHOLD {
        return Err(RootFindingError::DivisionByZero { denom });
    }

    Ok(x1 - f1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite.
/// - `x1`   : Second initial guess. Must be finite.
/// - `cfg`  : [`SecantCfg`] (`tolerance`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with one [`SecantStep`] `(i, x0, x1, x2, f(x2), |x2 - x1|)`
/// per iteration.
///
/// # Failures
/// - [`RootFindingError::InvalidGuess`]        : `x0` or `x1` is NaN/inf
/// - [`RootFindingError::DivisionByZero`]      : `|f(x1) - f(x0)| < 1e-12`
/// - [`RootFindingError::NonFiniteDerivative`] : `f(x1) - f(x0)` overflowed
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::Evaluation`]          : `f` failed to evaluate
///
/// # Behavior
/// - Update: x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
/// - Converges on `|f(x2)| < tol` or `|x2 - x1| < tol`, else shifts
///   the window `(x0, x1) <- (x1, x2)`.
///
/// # Warning
/// - No bracket is kept: poor initial guesses may diverge. Divergence shows
///   up only as a degenerate denominator or the iteration limit.
pub fn secant<F>(
    func: &F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> RootFindingReport<SecantStep>
where F: Function + ?Sized {
    drive(Algorithm::SECANT, func, |eval, trace| {
        for x in [x0, x1] {
            if !x.is_finite() {
                return Err(RootFindingError::InvalidGuess { x });
            }
        }

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();

        let (mut x0, mut x1) = (x0, x1);
        let mut f0 = eval.eval(x0)?;
        let mut f1 = eval.eval(x1)?;

        let mut x2    = x1;
        let mut error = f64::INFINITY;
        for iter in 1..=max_iter {
            x2 = secant_x_intercept((x0, f0), (x1, f1))?;
            let f2 = eval.eval(x2)?;
            error = (x2 - x1).abs();

            trace.push(SecantStep { iteration: iter, x0, x1, x2, f2, error });

            if let Some(reached) = tolerance_met(f2, error, tol, ToleranceSatisfied::StepSizeReached) {
                return Ok(Finish::converged(x2, error, iter, reached));
            }

            (x0, f0) = (x1, f1);
            (x1, f1) = (x2, f2);
        }

        Ok(Finish::not_converged(x2, error, max_iter))
    })
}
