use super::algorithms::Algorithm;
use super::bisection::{check_bracket, BracketStart};
use super::common::{drive, tolerance_met, Finish};
use super::config::{CommonCfg, impl_common_cfg};
use super::function::Function;
use super::report::{BracketStep, RootFindingReport, ToleranceSatisfied};
use super::signs::opposite_sign;


/// RegulaFalsi Configuration
///
/// # Defaults
///
/// ┌ tolerance = [`DEFAULT_TOLERANCE`](super::config::DEFAULT_TOLERANCE)
/// └ max_iter  = [`DEFAULT_MAX_ITER`](super::config::DEFAULT_MAX_ITER)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl Default for RegulaFalsiCfg {
    fn default() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(RegulaFalsiCfg);


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// The bracket invariant keeps `fa` and `fb` nonzero with opposite
/// signs, so `fb - fa` never vanishes.
#[inline]
fn false_position(a: f64, fa: f64, b: f64, fb: f64) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}


/// Finds a root of `func` using the
/// [regula falsi (false position) method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// - `func` : function whose root is sought, continuous on `[a, b]`
/// - `a`    : one end of the bracket. Must be finite.
/// - `b`    : other end of the bracket. Must be finite.
/// - `cfg`  : [`RegulaFalsiCfg`] (`tolerance`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with one [`BracketStep`] per iteration, where
/// `error = |c - c_prev|` and `c_prev` starts at `a`.
///
/// # Failures
/// Same preconditions as [`super::bisection::bisection`]: finite bounds
/// and a sign change, with an exact zero at an endpoint returned immediately.
///
/// # Behavior
/// - `f(a)` and `f(b)` are kept across iterations and replaced by `f(c)`
///   on the side that moves; nothing is re-evaluated.
/// - Converges on `|f(c)| < tol` or `|c - c_prev| < tol`.
///
/// # Notes
/// - Pure false position: on convex/concave functions one endpoint can
///   stay fixed, making convergence linear and slow.
pub fn regula_falsi<F>(
    func: &F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
) -> RootFindingReport<BracketStep>
where F: Function + ?Sized {
    drive(Algorithm::REGULA_FALSI, func, |eval, trace| {
        let (mut fa, mut fb) = match check_bracket(eval, a, b)? {
            BracketStart::EndpointRoot(root) => {
                return Ok(Finish::converged(root, 0.0, 0, ToleranceSatisfied::AbsFxReached));
            }
            BracketStart::Bracket { fa, fb } => (fa, fb),
        };

        let tol      = cfg.tolerance();
        let max_iter = cfg.max_iter();

        let (mut a, mut b) = (a, b);
        let mut c_prev = a;
        let mut c      = a;
        let mut error  = f64::INFINITY;
        for iter in 1..=max_iter {
            c = false_position(a, fa, b, fb);
            let fc = eval.eval(c)?;
            error = (c - c_prev).abs();

            trace.push(BracketStep { iteration: iter, a, b, c, fc, error });

            if let Some(reached) = tolerance_met(fc, error, tol, ToleranceSatisfied::StepSizeReached) {
                return Ok(Finish::converged(c, error, iter, reached));
            }

            if opposite_sign(fa, fc) {
                b  = c;
                fb = fc;
            } else {
                a  = c;
                fa = fc;
            }
            c_prev = c;
        }

        Ok(Finish::not_converged(c, error, max_iter))
    })
}
