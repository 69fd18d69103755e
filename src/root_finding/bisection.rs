use super::algorithms::Algorithm;
use super::common::{drive, tolerance_met, Evaluator, Finish};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{BracketStep, RootFindingReport, ToleranceSatisfied};
use super::signs::{opposite_sign, same_sign};


/// Bisection Configuration
///
/// # Defaults
///
/// ┌ tolerance = [`DEFAULT_TOLERANCE`](super::config::DEFAULT_TOLERANCE)
/// └ max_iter  = [`DEFAULT_MAX_ITER`](super::config::DEFAULT_MAX_ITER)
///
/// # Validation:
/// └ Setters reject a non-finite or non-positive tolerance and `max_iter == 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for BisectionCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// How a bracket `[a, b]` starts out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum BracketStart {
    /// `f` is exactly zero at this endpoint.
    EndpointRoot(f64),
    /// `f(a)` and `f(b)` are nonzero with opposite signs.
    Bracket { fa: f64, fb: f64 },
}

/// Validates `[a, b]` and evaluates both endpoints.
///
/// # Errors
/// ├ [`RootFindingError::InvalidBounds`] - `a` or `b` is NaN/inf.
/// └ [`RootFindingError::NoSignChange`]  - `f(a) * f(b) > 0`.
///
/// An endpoint where `f` is exactly zero is reported as
/// [`BracketStart::EndpointRoot`] rather than bracketed.
pub(crate) fn check_bracket<F>(
    eval: &mut Evaluator<'_, F>,
    a: f64,
    b: f64,
) -> Result<BracketStart, RootFindingError>
where F: Function + ?Sized {
    if !(a.is_finite() && b.is_finite()) {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let fa = eval.eval(a)?;
    let fb = eval.eval(b)?;

    if fa == 0.0 { return Ok(BracketStart::EndpointRoot(a)); }
    if fb == 0.0 { return Ok(BracketStart::EndpointRoot(b)); }

    if same_sign(fa, fb) {
        return Err(RootFindingError::NoSignChange { a, b });
    }

    Ok(BracketStart::Bracket { fa, fb })
}


/// Calculates midpoint of [a, b]
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval. The endpoints may be given in either order.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite.
/// └ `cfg`  - [`BisectionCfg`] with `tolerance` and `max_iter`.
///
/// # Returns
///
/// A [`RootFindingReport`] whose trace holds one [`BracketStep`]
/// `(i, a, b, c, f(c), |b - a| / 2)` per iteration, where `a, b` is the
/// bracket the midpoint `c` was taken from.
///
/// ├ [`Outcome::Converged`](super::report::Outcome::Converged)       - `|f(c)| < tol` or `|b - a| / 2 < tol`
/// ├ [`Outcome::NotConverged`](super::report::Outcome::NotConverged) - `max_iter` midpoints taken
/// └ [`Outcome::Failed`](super::report::Outcome::Failed)
///     ├ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf
///     ├ [`RootFindingError::NoSignChange`]        - `f(a)` and `f(b)` share a sign; no records
///     ├ [`RootFindingError::NonFiniteEvaluation`] - `f(x)` is NaN/inf
///     └ [`RootFindingError::Evaluation`]          - `f` failed to evaluate
///
/// # Notes
/// ├ `f(a)` is carried across iterations, never re-evaluated.
/// └ If `f(a)` or `f(b)` is exactly zero, that endpoint is returned as a
///   converged root with `iterations = 0` and an empty trace.
pub fn bisection<F>(
    func: &F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> RootFindingReport<BracketStep>
where F: Function + ?Sized {
    drive(Algorithm::BISECTION, func, |eval, trace| {
        let mut fa = match check_bracket(eval, a, b)? {
            BracketStart::EndpointRoot(root) => {
                return Ok(Finish::converged(root, 0.0, 0, ToleranceSatisfied::AbsFxReached));
            }
            BracketStart::Bracket { fa, .. } => fa,
        };

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();

        let (mut a, mut b) = (a, b);
        let mut c     = a;    // gets overwritten
        let mut error = f64::INFINITY;
        for iter in 1..=max_iter {
            c = midpoint(a, b);
            let fc = eval.eval(c)?;
            error = (b - a).abs() * 0.5;

            trace.push(BracketStep { iteration: iter, a, b, c, fc, error });

            if let Some(reached) = tolerance_met(fc, error, tol, ToleranceSatisfied::WidthTolReached) {
                return Ok(Finish::converged(c, error, iter, reached));
            }

            // shrink interval
            if opposite_sign(fa, fc) {
                b = c;
            } else {
                a = c;
                fa = fc;
            }
        }

        Ok(Finish::not_converged(c, error, max_iter))
    })
}
