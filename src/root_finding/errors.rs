//! Root-finding error types.
//!
//! ┌ [`ConfigError`]      : invalid method parameters
//! │   ├ tolerance not finite or <= 0
//! │   ├ max_iter == 0
//! │   └ invalid perturbation / finite-difference step
//! │
//! └ [`RootFindingError`] : failures that end a run
//!     ├ invalid precondition (no sign change, non-finite inputs)
//!     ├ numerical degeneracy (near-zero denominator or derivative)
//!     └ evaluator failure (domain error, non-finite value)
//!
//! [`ConfigError`] is returned by config setters, before any run.
//! [`RootFindingError`] is carried by [`Outcome::Failed`](super::report::Outcome::Failed);
//! it never escapes as a panic and the engine stays usable afterwards.


use serde::Serialize;
use thiserror::Error;
use crate::expression::EvalError;


/// Invalid method parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid delta: must be finite. got {got}")]
    InvalidDelta { got: f64 },

    #[error("invalid finite-difference step: must be finite and > 0. got {got}")]
    InvalidFdStep { got: f64 },
}


/// Root-finding runtime failures.
///
/// ┌ Invalid precondition  : [`RootFindingError::NoSignChange`],
/// │                         [`RootFindingError::InvalidBounds`], [`RootFindingError::InvalidGuess`]
/// ├ Numerical degeneracy  : [`RootFindingError::DivisionByZero`],
/// │                         [`RootFindingError::DerivativeTooSmall`],
/// │                         [`RootFindingError::NonFiniteDerivative`]
/// └ Evaluator failure     : [`RootFindingError::Evaluation`],
///                           [`RootFindingError::NonFiniteEvaluation`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("f(a) and f(b) must have opposite signs")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: {x} must be finite")]
    InvalidGuess { x: f64 },

    #[error("Division by zero encountered")]
    DivisionByZero { denom: f64 },

    #[error("Derivative too small")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    NonFiniteDerivative { x: f64, dfx: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

impl Serialize for RootFindingError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.collect_str(self)
    }
}
