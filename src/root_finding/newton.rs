//! Newton-Raphson method with a central finite-difference derivative

use super::algorithms::Algorithm;
use super::common::{drive, tolerance_met, Finish};
use super::config::{CommonCfg, impl_common_cfg, DEFAULT_FD_STEP, DEGENERACY_THRESHOLD};
use super::errors::{ConfigError, RootFindingError};
use super::function::Function;
use super::report::{NewtonStep, RootFindingReport, ToleranceSatisfied};


/// Newton configuration.
///
/// # Fields
/// - `common`  : [`CommonCfg`] with `tolerance` and `max_iter`.
/// - `fd_step` : finite-difference step `h` of the derivative (default `1e-8`).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
/// - Set the derivative step via [`NewtonCfg::set_fd_step`] (must be finite and > 0).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
    fd_step: f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            fd_step: DEFAULT_FD_STEP,
        }
    }

    pub fn set_fd_step(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidFdStep { got: v });
        }
        self.fd_step = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn fd_step(&self) -> f64 { self.fd_step }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// estimating `f'(x)` by a central difference
/// (see [`derivative`](super::derivative::derivative)).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (`tolerance`, `max_iter`, `fd_step`)
///
/// # Returns
/// [`RootFindingReport`] with one [`NewtonStep`] `(i, x, f(x), f'(x), x_new, |x_new - x|)`
/// per iteration. The root of a converged run is `x_new`.
///
/// # Failures
/// - [`RootFindingError::InvalidGuess`]        : `x0` non-finite
/// - [`RootFindingError::DerivativeTooSmall`]  : `|f'(x)| < 1e-12`
/// - [`RootFindingError::NonFiniteDerivative`] : `f(x + h) - f(x - h)` overflowed
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` or a derivative sample produced NaN/inf
/// - [`RootFindingError::Evaluation`]          : `f` failed to evaluate
///
/// # Behavior
/// - Three evaluations per iteration: `f(x)`, `f(x + h)`, `f(x - h)`.
/// - The residual test uses `f(x)` at the point the step starts from,
///   not `f(x_new)`; this saves an evaluation per iteration, so the
///   returned root may have `|f(root)|` slightly above `tolerance`.
///
/// # Notes
/// - Convergence is *local only*: quadratic near a simple root given a good
///   `x0`; poor guesses can diverge or cycle. For guaranteed convergence
///   use a bracket method (e.g. bisection).
pub fn newton<F>(
    func: &F,
    x0: f64,
    cfg: NewtonCfg,
) -> RootFindingReport<NewtonStep>
where F: Function + ?Sized {
    drive(Algorithm::NEWTON, func, |eval, trace| {
        if !x0.is_finite() {
            return Err(RootFindingError::InvalidGuess { x: x0 });
        }

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();
        let h        = cfg.fd_step();

        let mut x     = x0;
        let mut error = f64::INFINITY;
        for iter in 1..=max_iter {
            let fx  = eval.eval(x)?;
            let fpx = eval.derivative(x, h)?;
            if !fpx.is_finite() {
                return Err(RootFindingError::NonFiniteDerivative { x, dfx: fpx });
            }
            if fpx.abs() < DEGENERACY_THRESHOLD {
                return Err(RootFindingError::DerivativeTooSmall { x, dfx: fpx });
            }

            let x_new = x - fx / fpx;
            error = (x_new - x).abs();

            trace.push(NewtonStep { iteration: iter, x, fx, fpx, x_new, error });

            if let Some(reached) = tolerance_met(fx, error, tol, ToleranceSatisfied::StepSizeReached) {
                return Ok(Finish::converged(x_new, error, iter, reached));
            }

            x = x_new;
        }

        Ok(Finish::not_converged(x, error, max_iter))
    })
}
