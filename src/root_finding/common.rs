//! Machinery shared by every method loop.
//!
//! - [`Evaluator`]      : wraps a [`Function`], counts calls, enforces finiteness
//! - [`tolerance_met`]  : the residual-or-step convergence test
//! - [`Finish`]         : how a loop ended when it did not fail
//! - [`drive`]          : runs a method body and assembles the [`RootFindingReport`]

use super::algorithms::Algorithm;
use super::derivative::central_difference;
use super::errors::RootFindingError;
use super::function::Function;
use super::report::{Outcome, RootFindingReport, ToleranceSatisfied};


/// Counting, finiteness-checking view of a [`Function`].
pub(crate) struct Evaluator<'f, F: ?Sized> {
    func  : &'f F,
    evals : usize,
}

impl<'f, F> Evaluator<'f, F>
where F: Function + ?Sized {
    pub(crate) fn new(func: &'f F) -> Self {
        Self { func, evals: 0 }
    }

    /// `f(x)`; evaluator failures and non-finite values end the run.
    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        let fx = { self.evals += 1; self.func.eval(x)? };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }

        Ok(fx)
    }

    /// Central-difference slope at `x` with step `h`.
    ///
    /// Both samples go through [`Evaluator::eval`], so each is counted
    /// and checked for finiteness on its own.
    #[inline]
    pub(crate) fn derivative(&mut self, x: f64, h: f64) -> Result<f64, RootFindingError> {
        let fxp = self.eval(x + h)?;
        let fxm = self.eval(x - h)?;
        Ok(central_difference(fxp, fxm, h))
    }

    pub(crate) fn evals(&self) -> usize { self.evals }
}


/// Residual-or-step convergence test shared by all methods but fixed-point.
///
/// The residual is tested first, so a step that lands on the root
/// reports [`ToleranceSatisfied::AbsFxReached`].
#[inline]
pub(crate) fn tolerance_met(
    residual : f64,
    error    : f64,
    tol      : f64,
    on_error : ToleranceSatisfied,
) -> Option<ToleranceSatisfied> {
    if residual.abs() < tol {
        Some(ToleranceSatisfied::AbsFxReached)
    } else if error < tol {
        Some(on_error)
    } else {
        None
    }
}


/// Non-failing end of a method loop.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Finish {
    outcome   : FinishKind,
    satisfied : ToleranceSatisfied,
}

#[derive(Debug, Clone, Copy)]
enum FinishKind {
    Converged    { root: f64, final_error: f64, iterations: usize },
    NotConverged { last_estimate: f64, final_error: f64, iterations: usize },
}

impl Finish {
    pub(crate) fn converged(
        root: f64, final_error: f64, iterations: usize, satisfied: ToleranceSatisfied
    ) -> Self {
        Self { outcome: FinishKind::Converged { root, final_error, iterations }, satisfied }
    }

    pub(crate) fn not_converged(last_estimate: f64, final_error: f64, iterations: usize) -> Self {
        Self {
            outcome   : FinishKind::NotConverged { last_estimate, final_error, iterations },
            satisfied : ToleranceSatisfied::ToleranceNotReached,
        }
    }
}


/// Runs `body` against a fresh [`Evaluator`] and trace, then builds the report.
///
/// `body` appends one record per completed iteration before testing
/// convergence; on `Err` the records gathered so far are kept.
pub(crate) fn drive<F, R, B>(
    algorithm : Algorithm,
    func      : &F,
    body      : B,
) -> RootFindingReport<R>
where
    F: Function + ?Sized,
    B: FnOnce(&mut Evaluator<'_, F>, &mut Vec<R>) -> Result<Finish, RootFindingError>,
{
    let mut eval  = Evaluator::new(func);
    let mut trace = Vec::new();

    let (outcome, tolerance_satisfied) = match body(&mut eval, &mut trace) {
        Ok(Finish { outcome, satisfied }) => {
            let outcome = match outcome {
                FinishKind::Converged { root, final_error, iterations }
                    => Outcome::Converged { root, final_error, iterations },
                FinishKind::NotConverged { last_estimate, final_error, iterations }
                    => Outcome::NotConverged { last_estimate, final_error, iterations },
            };
            (outcome, satisfied)
        }
        Err(reason) => (Outcome::Failed { reason }, ToleranceSatisfied::ToleranceNotReached),
    };

    RootFindingReport {
        algorithm_name : algorithm.algorithm_name(),
        iterations     : trace,
        evaluations    : eval.evals(),
        tolerance_satisfied,
        outcome,
    }
}
