//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, the per-iteration trace records and
//! the terminal [`Outcome`].

use serde::{Deserialize, Serialize};
use super::errors::RootFindingError;


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - all methods except fixed-point
///     - |f(x)| < tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - |b - a| / 2 < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - regula falsi and open methods
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - iteration limit hit, or the run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Terminal state of a run.
///
/// - [`Outcome::Converged`]    : tolerance met after `iterations` steps
/// - [`Outcome::NotConverged`] : `max_iter` exhausted; carries the best estimate
/// - [`Outcome::Failed`]       : precondition, degeneracy or evaluator failure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Converged    { root: f64, final_error: f64, iterations: usize },
    NotConverged { last_estimate: f64, final_error: f64, iterations: usize },
    Failed       { reason: RootFindingError },
}


/// Bracket-method iteration: bisection, regula falsi.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketStep {
    pub iteration : usize,
    pub a         : f64,
    pub b         : f64,
    pub c         : f64,
    pub fc        : f64,
    pub error     : f64,
}

/// Secant iteration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecantStep {
    pub iteration : usize,
    pub x0        : f64,
    pub x1        : f64,
    pub x2        : f64,
    pub f2        : f64,
    pub error     : f64,
}

/// Newton-Raphson iteration; `fpx` is the finite-difference slope.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewtonStep {
    pub iteration : usize,
    pub x         : f64,
    pub fx        : f64,
    pub fpx       : f64,
    pub x_new     : f64,
    pub error     : f64,
}

/// Fixed-point iteration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPointStep {
    pub iteration : usize,
    pub x         : f64,
    pub gx        : f64,
    pub error     : f64,
}

/// Modified secant iteration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedSecantStep {
    pub iteration : usize,
    pub x         : f64,
    pub fx        : f64,
    pub x_new     : f64,
    pub error     : f64,
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
/// - `iterations`          : trace, one record per completed iteration
/// - `evaluations`         : total function evaluations
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `outcome`             : terminal state ([`Outcome`])
///
/// A failed run keeps the records gathered before the failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootFindingReport<R> {
    pub algorithm_name      : &'static str,
    pub iterations          : Vec<R>,
    pub evaluations         : usize,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub outcome             : Outcome,
}

impl<R> RootFindingReport<R> {
    /// `true` only for [`Outcome::Converged`].
    pub fn converged(&self) -> bool {
        matches!(self.outcome, Outcome::Converged { .. })
    }

    /// Root, or last estimate when the iteration limit was hit.
    /// `None` on failure.
    pub fn root(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged { root, .. }             => Some(root),
            Outcome::NotConverged { last_estimate, .. } => Some(last_estimate),
            Outcome::Failed { .. }                      => None,
        }
    }

    /// Error estimate of the last iteration. `None` on failure.
    pub fn final_error(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged { final_error, .. }
            | Outcome::NotConverged { final_error, .. } => Some(final_error),
            Outcome::Failed { .. }                      => None,
        }
    }

    /// Failure reason, if the run failed.
    pub fn error(&self) -> Option<&RootFindingError> {
        match &self.outcome {
            Outcome::Failed { reason } => Some(reason),
            _                          => None,
        }
    }

    /// Converts the trace records, keeping everything else.
    pub fn map_records<T, M>(self, f: M) -> RootFindingReport<T>
    where M: FnMut(R) -> T {
        RootFindingReport {
            algorithm_name      : self.algorithm_name,
            iterations          : self.iterations.into_iter().map(f).collect(),
            evaluations         : self.evaluations,
            tolerance_satisfied : self.tolerance_satisfied,
            outcome             : self.outcome,
        }
    }
}
