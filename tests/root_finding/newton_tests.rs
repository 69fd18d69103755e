//! tests for the newton-raphson root finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::errors::{ConfigError, RootFindingError};
use zof::root_finding::newton::{newton, NewtonCfg};
use zof::root_finding::report::{Outcome, ToleranceSatisfied};

type TestResult = Result<(), ConfigError>;

#[test]
fn cubic_converges_quickly() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let res = newton(&f, 1.5, cfg);

    assert!(res.converged());
    assert_eq!(res.algorithm_name, "newton_raphson");
    assert!(res.iterations.len() <= 6);
    assert_abs_diff_eq!(res.root().unwrap_or(f64::NAN), 1.521_379_7, epsilon = 1e-7);
    Ok(())
}

#[test]
fn residual_tested_before_step() {
    let x0  = 1.0 + 5e-5;
    let f   = |x: f64| x - 1.0;
    let res = newton(&f, x0, NewtonCfg::new());

    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.iterations.len(), 1);

    let step = res.iterations[0];
    assert_eq!(step.fx, f(x0));
    assert_abs_diff_eq!(step.fpx, 1.0, epsilon = 1e-6);
    // the reported root is the post-step value
    assert_eq!(res.root(), Some(step.x_new));
    assert_abs_diff_eq!(step.x_new, 1.0, epsilon = 1e-9);
}

#[test]
fn flat_derivative_fails() {
    let f   = |x: f64| x * x - 1.0;
    let res = newton(&f, 0.0, NewtonCfg::new());

    assert_eq!(res.error(), Some(&RootFindingError::DerivativeTooSmall { x: 0.0, dfx: 0.0 }));
    assert_eq!(
        res.error().map(ToString::to_string).as_deref(),
        Some("Derivative too small")
    );
    assert!(res.iterations.is_empty());
}

#[test]
fn no_root_exhausts_iterations() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = NewtonCfg::new().set_max_iter(3)?;

    let res = newton(&f, 2.0, cfg);

    assert_eq!(res.iterations.len(), 3);
    // f(x) plus two derivative samples per step
    assert_eq!(res.evaluations, 9);
    let last = res.iterations[2];
    assert_eq!(
        res.outcome,
        Outcome::NotConverged { last_estimate: last.x_new, final_error: last.error, iterations: 3 }
    );
    Ok(())
}

#[test]
fn fd_step_is_validated() {
    assert_eq!(
        NewtonCfg::new().set_fd_step(0.0).unwrap_err(),
        ConfigError::InvalidFdStep { got: 0.0 }
    );
    assert!(NewtonCfg::new().set_fd_step(f64::NAN).is_err());
}

#[test]
fn custom_fd_step() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = NewtonCfg::new().set_fd_step(1e-6)?.set_tolerance(1e-12)?;

    let res = newton(&f, 1.0, cfg);

    assert!(res.converged());
    assert_abs_diff_eq!(res.root().unwrap_or(f64::NAN), 0.739_085_133_215_160_6, epsilon = 1e-10);
    Ok(())
}

#[test]
fn infinite_derivative_sample_fails() {
    // finite at x0, blows up just above it
    let f   = |x: f64| if x > 1.0 + 5e-9 { f64::INFINITY } else { 0.5 };
    let res = newton(&f, 1.0, NewtonCfg::new());

    assert!(!res.converged());
    assert!(matches!(
        res.error(),
        Some(RootFindingError::NonFiniteEvaluation { x, fx }) if *x > 1.0 && fx.is_infinite()
    ));
    assert!(res.iterations.is_empty());
    // f(x0) and f(x0 + h); f(x0 - h) is never reached
    assert_eq!(res.evaluations, 2);
}

#[test]
fn overflowing_slope_fails() {
    let f = |x: f64| {
        if x > 1.0 { f64::MAX } else if x < 1.0 { -f64::MAX } else { 0.5 }
    };
    let res = newton(&f, 1.0, NewtonCfg::new());

    assert_eq!(
        res.error(),
        Some(&RootFindingError::NonFiniteDerivative { x: 1.0, dfx: f64::INFINITY })
    );
    assert!(res.iterations.is_empty());
    assert_eq!(res.evaluations, 3);
}
