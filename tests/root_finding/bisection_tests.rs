//! tests for the bisection root finding algorithm
use approx::{assert_abs_diff_eq, assert_relative_eq};
use zof::root_finding::bisection::{bisection, BisectionCfg};
use zof::root_finding::errors::{ConfigError, RootFindingError};
use zof::root_finding::report::{Outcome, ToleranceSatisfied};

type TestResult = Result<(), ConfigError>;

const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-6)?.set_max_iter(50)?;

    let res = bisection(&f, 0.0, 2.0, cfg);

    assert!(res.converged());
    assert_eq!(res.algorithm_name, "bisection");
    let root = res.root().unwrap_or(f64::NAN);
    assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-6);
    assert_abs_diff_eq!(root, 1.414_213_56, epsilon = 1e-6);

    // converging step is the last record
    let last = res.iterations.last().copied();
    assert!(matches!(
        res.outcome,
        Outcome::Converged { iterations, .. } if Some(iterations) == last.map(|s| s.iteration)
    ));
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-10)?.set_max_iter(60)?;

    let res = bisection(&f, -10.0, 1.0, cfg);

    assert!(res.converged());
    assert_abs_diff_eq!(res.root().unwrap_or(f64::NAN), -5.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let res = bisection(&f, -1.0, 1.0, BisectionCfg::new());

    assert_eq!(res.error(), Some(&RootFindingError::NoSignChange { a: -1.0, b: 1.0 }));
    assert_eq!(
        res.error().map(ToString::to_string).as_deref(),
        Some("f(a) and f(b) must have opposite signs")
    );
    assert!(res.iterations.is_empty());
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.root(), None);
}

#[test]
fn error_halves_every_iteration() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-12)?.set_max_iter(20)?;

    let res = bisection(&f, 1.0, 2.0, cfg);

    assert!(!res.converged());
    assert_eq!(res.iterations.len(), 20);
    let first = res.iterations[0].error;
    assert_eq!(first, 0.5);
    for (i, step) in res.iterations.iter().enumerate() {
        assert_eq!(step.iteration, i + 1);
        assert_relative_eq!(step.error, first / 2f64.powi(i as i32), max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn bracket_always_contains_root() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-9)?.set_max_iter(40)?;

    let res = bisection(&f, 2.0, 1.0, cfg);

    assert!(res.converged());
    let mut width = f64::INFINITY;
    for step in &res.iterations {
        let (lo, hi) = (step.a.min(step.b), step.a.max(step.b));
        assert!(lo < CUBIC_ROOT && CUBIC_ROOT < hi, "root left [{lo}, {hi}]");
        assert!(hi - lo < width);
        width = hi - lo;
    }
    Ok(())
}

#[test]
fn reversed_bounds_are_accepted() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-8)?;

    let res = bisection(&f, 2.0, 0.0, cfg);

    assert!(res.converged());
    assert_abs_diff_eq!(res.root().unwrap_or(f64::NAN), std::f64::consts::SQRT_2, epsilon = 1e-8);
    Ok(())
}

#[test]
fn endpoint_root_short_circuits() {
    let f = |x: f64| x;

    let res = bisection(&f, 0.0, 5.0, BisectionCfg::new());
    assert_eq!(res.outcome, Outcome::Converged { root: 0.0, final_error: 0.0, iterations: 0 });
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert!(res.iterations.is_empty());

    let res = bisection(&f, -5.0, 0.0, BisectionCfg::new());
    assert_eq!(res.root(), Some(0.0));
}

#[test]
fn single_iteration_does_not_converge() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_max_iter(1)?;

    let res = bisection(&f, 0.0, 2.0, cfg);

    assert_eq!(
        res.outcome,
        Outcome::NotConverged { last_estimate: 1.0, final_error: 1.0, iterations: 1 }
    );
    assert_eq!(res.iterations.len(), 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    Ok(())
}

#[test]
fn width_tolerance_reported() -> TestResult {
    // steep enough that |f(c)| stays above the half-width
    let f   = |x: f64| 10.0 * (x - 1.0 / 3.0);
    let cfg = BisectionCfg::new().set_tolerance(1e-3)?;

    let res = bisection(&f, 0.0, 1.0, cfg);

    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert!(res.final_error().unwrap_or(f64::NAN) < 1e-3);
    Ok(())
}

#[test]
fn invalid_bounds() {
    let f   = |x: f64| x;
    let res = bisection(&f, f64::NAN, 1.0, BisectionCfg::new());

    assert!(matches!(res.error(), Some(RootFindingError::InvalidBounds { .. })));
    assert_eq!(res.evaluations, 0);
}

#[test]
fn non_finite_eval_keeps_partial_trace() {
    let f = |x: f64| if (2.9..3.1).contains(&x) { f64::NAN } else { x - 3.5 };

    let res = bisection(&f, 0.0, 4.0, BisectionCfg::new());

    assert!(matches!(
        res.error(),
        Some(RootFindingError::NonFiniteEvaluation { x, fx }) if *x == 3.0 && fx.is_nan()
    ));
    assert_eq!(res.iterations.len(), 1);
    assert_eq!(res.iterations[0].c, 2.0);
}

#[test]
fn one_evaluation_per_iteration() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-12)?.set_max_iter(5)?;

    let res = bisection(&f, 0.0, 2.0, cfg);

    assert_eq!(res.iterations.len(), 5);
    assert_eq!(res.evaluations, 2 + 5);
    Ok(())
}
