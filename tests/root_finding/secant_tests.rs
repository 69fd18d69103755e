//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::errors::{ConfigError, RootFindingError};
use zof::root_finding::report::{Outcome, SecantStep};
use zof::root_finding::secant::{secant, SecantCfg};

type TestResult = Result<(), ConfigError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-10)?;

    let res = secant(&f, 1.0, 2.0, cfg);

    assert!(res.converged());
    assert_eq!(res.algorithm_name, "secant");
    assert_abs_diff_eq!(res.root().unwrap_or(f64::NAN), std::f64::consts::SQRT_2, epsilon = 1e-10);
    Ok(())
}

#[test]
fn symmetric_guesses_are_degenerate() {
    let f   = |x: f64| x * x;
    let res = secant(&f, -1.0, 1.0, SecantCfg::new());

    assert_eq!(res.error(), Some(&RootFindingError::DivisionByZero { denom: 0.0 }));
    assert_eq!(
        res.error().map(ToString::to_string).as_deref(),
        Some("Division by zero encountered")
    );
    assert!(res.iterations.is_empty());
}

#[test]
fn degeneracy_keeps_earlier_records() {
    // second secant lands on x = -1, where f matches f(1)
    let f   = |x: f64| x * x - 4.0;
    let res = secant(&f, -2.5, 1.0, SecantCfg::new());

    assert!(matches!(res.error(), Some(RootFindingError::DivisionByZero { .. })));
    assert_eq!(
        res.iterations,
        vec![SecantStep { iteration: 1, x0: -2.5, x1: 1.0, x2: -1.0, f2: -3.0, error: 2.0 }]
    );
}

#[test]
fn single_iteration_does_not_converge() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_max_iter(1)?;

    let res = secant(&f, 1.0, 2.0, cfg);

    assert!(!res.converged());
    assert_eq!(res.iterations.len(), 1);
    let step = res.iterations[0];
    assert!(matches!(
        res.outcome,
        Outcome::NotConverged { last_estimate, iterations: 1, .. } if last_estimate == step.x2
    ));
    Ok(())
}

#[test]
fn window_shifts() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-12)?;

    let res = secant(&f, 1.0, 2.0, cfg);

    assert!(res.converged());
    for pair in res.iterations.windows(2) {
        assert_eq!(pair[1].x0, pair[0].x1);
        assert_eq!(pair[1].x1, pair[0].x2);
    }
    Ok(())
}

#[test]
fn invalid_guess() {
    let f   = |x: f64| x;
    let res = secant(&f, 0.0, f64::INFINITY, SecantCfg::new());

    assert_eq!(res.error(), Some(&RootFindingError::InvalidGuess { x: f64::INFINITY }));
    assert_eq!(res.evaluations, 0);
}

#[test]
fn overflowing_denominator_fails() {
    let f   = |x: f64| if x > 1.0 { f64::MAX } else { -f64::MAX };
    let res = secant(&f, 0.0, 2.0, SecantCfg::new());

    assert!(!res.converged());
    assert!(matches!(res.error(), Some(RootFindingError::NonFiniteDerivative { x, .. }) if *x == 2.0));
    assert!(res.iterations.is_empty());
}
