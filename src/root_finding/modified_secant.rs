use super::algorithms::Algorithm;
use super::common::{drive, tolerance_met, Finish};
use super::config::{CommonCfg, impl_common_cfg, DEFAULT_DELTA, DEGENERACY_THRESHOLD};
use super::errors::{ConfigError, RootFindingError};
use super::function::Function;
use super::report::{ModifiedSecantStep, RootFindingReport, ToleranceSatisfied};


/// Modified secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and `max_iter`.
/// - `delta`  : relative perturbation; the slope is taken between
///              `x` and `x + delta * x` (default `0.01`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModifiedSecantCfg {
    common: CommonCfg,
    delta: f64,
}
impl ModifiedSecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            delta: DEFAULT_DELTA,
        }
    }

    pub fn set_delta(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() {
            return Err(ConfigError::InvalidDelta { got: v });
        }
        self.delta = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn delta(&self) -> f64 { self.delta }
}
impl Default for ModifiedSecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ModifiedSecantCfg);


/// Finds a root of `func` with the modified secant method: a single-point
/// secant whose second point is the perturbation `x + delta * x`.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : finite initial guess
/// - `cfg`  : [`ModifiedSecantCfg`] (`tolerance`, `max_iter`, `delta`)
///
/// # Returns
/// [`RootFindingReport`] with one [`ModifiedSecantStep`] `(i, x, f(x), x_new, |x_new - x|)`
/// per iteration. The root of a converged run is `x_new`.
///
/// # Failures
/// - [`RootFindingError::InvalidGuess`]        : `x0` non-finite
/// - [`RootFindingError::DivisionByZero`]      : `|f(x + delta*x) - f(x)| < 1e-12`
/// - [`RootFindingError::NonFiniteDerivative`] : `f(x + delta*x) - f(x)` overflowed
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::Evaluation`]          : `f` failed to evaluate
///
/// # Behavior
/// - Update: x_new = x - f(x) * delta * x / (f(x + delta*x) - f(x))
/// - Like [`newton`](super::newton::newton), the residual test uses `f(x)`
///   before the step.
///
/// # Warning
/// - At `x == 0` the perturbation collapses and the run fails with
///   [`RootFindingError::DivisionByZero`].
pub fn modified_secant<F>(
    func: &F,
    x0: f64,
    cfg: ModifiedSecantCfg,
) -> RootFindingReport<ModifiedSecantStep>
where F: Function + ?Sized {
    drive(Algorithm::MODIFIED_SECANT, func, |eval, trace| {
        if !x0.is_finite() {
            return Err(RootFindingError::InvalidGuess { x: x0 });
        }

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();
        let delta    = cfg.delta();

        let mut x     = x0;
        let mut error = f64::INFINITY;
        for iter in 1..=max_iter {
            let fx  = eval.eval(x)?;
            let fxd = eval.eval(x + delta * x)?;

            let denom = fxd - fx;
            if !denom.is_finite() {
                return Err(RootFindingError::NonFiniteDerivative { x, dfx: denom / (delta * x) });
            }
            if denom.abs() < DEGENERACY_THRESHOLD {
                return Err(RootFindingError::DivisionByZero { denom });
            }

            let x_new = x - fx * delta * x / denom;
            error = (x_new - x).abs();

            trace.push(ModifiedSecantStep { iteration: iter, x, fx, x_new, error });

            if let Some(reached) = tolerance_met(fx, error, tol, ToleranceSatisfied::StepSizeReached) {
                return Ok(Finish::converged(x_new, error, iter, reached));
            }

            x = x_new;
        }

        Ok(Finish::not_converged(x, error, max_iter))
    })
}
