//! JSON request/response contract for service front ends.
//!
//! A request names the method, the equation and the method's seeds:
//!
//! ```json
//! {"method": "bisection", "equation": "x**2 - 2", "a": 0, "b": 2,
//!  "tolerance": 1e-6, "maxIterations": 50}
//! ```
//!
//! `tolerance` defaults to `1e-4`, `maxIterations` to `50` and, for
//! `modifiedSecant`, `delta` to `0.01`. For `fixedPoint` the equation is `g(x)`.
//! `maxIterations` may be any non-negative number and is truncated, so
//! `50.0` reads as `50`.
//!
//! A response is exactly one of
//! - `{"iterations": [...], "root": .., "finalError": .., "converged": ..}`
//! - `{"error": "..."}`
//!
//! `root` and `finalError` are always finite; a run that ends on a
//! non-finite estimate is reported as an error.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::expression::{Expression, ParseError};
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::bisection::{bisection, BisectionCfg};
use crate::root_finding::config::{DEFAULT_DELTA, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use crate::root_finding::errors::ConfigError;
use crate::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use crate::root_finding::modified_secant::{modified_secant, ModifiedSecantCfg};
use crate::root_finding::newton::{newton, NewtonCfg};
use crate::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use crate::root_finding::report::{
    BracketStep, FixedPointStep, ModifiedSecantStep, NewtonStep, Outcome, RootFindingReport,
    SecantStep,
};
use crate::root_finding::secant::{secant, SecantCfg};


fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
fn default_max_iterations() -> usize { DEFAULT_MAX_ITER }
fn default_delta() -> f64 { DEFAULT_DELTA }

/// Reads an iteration count from any non-negative JSON number, truncating.
fn iteration_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where D: Deserializer<'de> {
    let v = f64::deserialize(deserializer)?;
    if !v.is_finite() || v < 0.0 {
        return Err(serde::de::Error::custom(format_args!(
            "maxIterations must be a non-negative number, got {v}"
        )));
    }
    Ok(v.trunc() as usize)
}


/// Errors raised before a method runs. Reported as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no finite estimate: root={root}, finalError={final_error}")]
    NonFiniteEstimate { root: f64, final_error: f64 },
}


/// Method selector and its seeds, tagged by `"method"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum MethodParams {
    Bisection      { a: f64, b: f64 },
    RegulaFalsi    { a: f64, b: f64 },
    Secant         { x0: f64, x1: f64 },
    NewtonRaphson  { x0: f64 },
    FixedPoint     { x0: f64 },
    ModifiedSecant {
        x0: f64,
        #[serde(default = "default_delta")]
        delta: f64,
    },
}

impl MethodParams {
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            MethodParams::Bisection { .. }      => Algorithm::BISECTION,
            MethodParams::RegulaFalsi { .. }    => Algorithm::REGULA_FALSI,
            MethodParams::Secant { .. }         => Algorithm::SECANT,
            MethodParams::NewtonRaphson { .. }  => Algorithm::NEWTON,
            MethodParams::FixedPoint { .. }     => Algorithm::FIXED_POINT,
            MethodParams::ModifiedSecant { .. } => Algorithm::MODIFIED_SECANT,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub equation: String,

    #[serde(flatten)]
    pub method: MethodParams,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(
        default = "default_max_iterations",
        rename = "maxIterations",
        deserialize_with = "iteration_count"
    )]
    pub max_iterations: usize,
}


/// One trace record of any method.
///
/// Variants are tried in order when deserializing; [`NewtonStep`] comes
/// before [`ModifiedSecantStep`] because its fields are a superset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IterationRecord {
    Bracket(BracketStep),
    Secant(SecantStep),
    Newton(NewtonStep),
    ModifiedSecant(ModifiedSecantStep),
    FixedPoint(FixedPointStep),
}

macro_rules! impl_from_step {
    ($($step:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$step> for IterationRecord {
                fn from(step: $step) -> Self { IterationRecord::$variant(step) }
            }
        )*
    };
}
impl_from_step!(
    BracketStep        => Bracket,
    SecantStep         => Secant,
    NewtonStep         => Newton,
    ModifiedSecantStep => ModifiedSecant,
    FixedPointStep     => FixedPoint,
);


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Solved {
        iterations: Vec<IterationRecord>,
        root: f64,
        #[serde(rename = "finalError")]
        final_error: f64,
        converged: bool,
    },
    Failed {
        error: String,
    },
}

impl SolveResponse {
    pub fn failed(error: impl std::fmt::Display) -> Self {
        SolveResponse::Failed { error: error.to_string() }
    }

    pub fn converged(&self) -> bool {
        matches!(self, SolveResponse::Solved { converged: true, .. })
    }
}

impl<R> From<RootFindingReport<R>> for SolveResponse
where R: Into<IterationRecord> {
    fn from(report: RootFindingReport<R>) -> Self {
        let (root, final_error, converged) = match report.outcome {
            Outcome::Converged { root, final_error, .. }             => (root, final_error, true),
            Outcome::NotConverged { last_estimate, final_error, .. } => (last_estimate, final_error, false),
            Outcome::Failed { reason }                               => return SolveResponse::failed(reason),
        };
        if !(root.is_finite() && final_error.is_finite()) {
            return SolveResponse::failed(SolveError::NonFiniteEstimate { root, final_error });
        }

        SolveResponse::Solved {
            iterations: report.iterations.into_iter().map(Into::into).collect(),
            root,
            final_error,
            converged,
        }
    }
}


/// Parses the equation, builds the method config and runs the method.
pub fn solve(request: &SolveRequest) -> SolveResponse {
    run(request).unwrap_or_else(SolveResponse::failed)
}

fn run(request: &SolveRequest) -> Result<SolveResponse, SolveError> {
    let func     = Expression::parse(&request.equation)?;
    let tol      = request.tolerance;
    let max_iter = request.max_iterations;

    let response = match request.method {
        MethodParams::Bisection { a, b } => {
            let cfg = BisectionCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)?;
            bisection(&func, a, b, cfg).into()
        }
        MethodParams::RegulaFalsi { a, b } => {
            let cfg = RegulaFalsiCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)?;
            regula_falsi(&func, a, b, cfg).into()
        }
        MethodParams::Secant { x0, x1 } => {
            let cfg = SecantCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)?;
            secant(&func, x0, x1, cfg).into()
        }
        MethodParams::NewtonRaphson { x0 } => {
            let cfg = NewtonCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)?;
            newton(&func, x0, cfg).into()
        }
        MethodParams::FixedPoint { x0 } => {
            let cfg = FixedPointCfg::new().set_tolerance(tol)?.set_max_iter(max_iter)?;
            fixed_point(&func, x0, cfg).into()
        }
        MethodParams::ModifiedSecant { x0, delta } => {
            let cfg = ModifiedSecantCfg::new()
                .set_tolerance(tol)?
                .set_max_iter(max_iter)?
                .set_delta(delta)?;
            modified_secant(&func, x0, cfg).into()
        }
    };

    Ok(response)
}


/// JSON in, JSON out. A malformed request or unknown method becomes
/// `{"error": ...}`; only serializing the response can fail.
pub fn solve_json(body: &str) -> Result<String, serde_json::Error> {
    let response = match serde_json::from_str::<SolveRequest>(body) {
        Ok(request) => solve(&request),
        Err(e)      => SolveResponse::failed(SolveError::Request(e)),
    };
    serde_json::to_string(&response)
}
