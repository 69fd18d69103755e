//! behavior common to every method
use std::thread;

use zof::expression::{EvalError, Expression};
use zof::root_finding::bisection::{bisection, BisectionCfg};
use zof::root_finding::errors::{ConfigError, RootFindingError};
use zof::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use zof::root_finding::modified_secant::{modified_secant, ModifiedSecantCfg};
use zof::root_finding::newton::{newton, NewtonCfg};
use zof::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use zof::root_finding::secant::{secant, SecantCfg};
use zof::root_finding::Outcome;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn runs_are_deterministic() -> TestResult {
    let f = Expression::parse("x**3 - x - 2")?;
    let g = Expression::parse("(x + 2)**(1/3)")?;

    assert_eq!(bisection(&f, 1.0, 2.0, BisectionCfg::new()), bisection(&f, 1.0, 2.0, BisectionCfg::new()));
    assert_eq!(regula_falsi(&f, 1.0, 2.0, RegulaFalsiCfg::new()), regula_falsi(&f, 1.0, 2.0, RegulaFalsiCfg::new()));
    assert_eq!(secant(&f, 1.0, 2.0, SecantCfg::new()), secant(&f, 1.0, 2.0, SecantCfg::new()));
    assert_eq!(newton(&f, 1.5, NewtonCfg::new()), newton(&f, 1.5, NewtonCfg::new()));
    assert_eq!(fixed_point(&g, 1.0, FixedPointCfg::new()), fixed_point(&g, 1.0, FixedPointCfg::new()));
    assert_eq!(
        modified_secant(&f, 1.5, ModifiedSecantCfg::new()),
        modified_secant(&f, 1.5, ModifiedSecantCfg::new())
    );
    Ok(())
}

#[test]
fn one_iteration_limit_leaves_one_record() -> Result<(), ConfigError> {
    let f = |x: f64| x * x - 2.0;
    let g = |x: f64| x.cos();

    let reports = [
        bisection(&f, 0.0, 2.0, BisectionCfg::new().set_max_iter(1)?).map_records(|_| ()),
        regula_falsi(&f, 0.0, 2.0, RegulaFalsiCfg::new().set_max_iter(1)?).map_records(|_| ()),
        secant(&f, 1.0, 2.0, SecantCfg::new().set_max_iter(1)?).map_records(|_| ()),
        newton(&f, 1.0, NewtonCfg::new().set_max_iter(1)?).map_records(|_| ()),
        fixed_point(&g, 1.0, FixedPointCfg::new().set_max_iter(1)?).map_records(|_| ()),
        modified_secant(&f, 1.0, ModifiedSecantCfg::new().set_max_iter(1)?).map_records(|_| ()),
    ];

    for res in reports {
        assert!(!res.converged(), "{} converged", res.algorithm_name);
        assert_eq!(res.iterations.len(), 1, "{}", res.algorithm_name);
        assert!(matches!(res.outcome, Outcome::NotConverged { iterations: 1, .. }));
    }
    Ok(())
}

#[test]
fn evaluator_failure_is_reported() -> TestResult {
    let f   = Expression::parse("log(x)")?;
    let res = newton(&f, -1.0, NewtonCfg::new());

    let expected = RootFindingError::Evaluation(EvalError::Domain { function: "log", arg: -1.0 });
    assert_eq!(res.error(), Some(&expected));
    assert_eq!(
        expected.to_string(),
        "invalid equation: math domain error in log(-1)"
    );

    // bracket endpoints are evaluated too
    let res = bisection(&f, -1.0, 2.0, BisectionCfg::new());
    assert_eq!(res.error(), Some(&expected));
    assert!(res.iterations.is_empty());
    Ok(())
}

#[test]
fn invalid_config_is_rejected() {
    assert_eq!(
        BisectionCfg::new().set_tolerance(0.0).unwrap_err(),
        ConfigError::InvalidTolerance { got: 0.0 }
    );
    assert!(SecantCfg::new().set_tolerance(-1e-3).is_err());
    assert!(NewtonCfg::new().set_tolerance(f64::NAN).is_err());
    assert_eq!(
        FixedPointCfg::new().set_max_iter(0).unwrap_err(),
        ConfigError::InvalidMaxIter { got: 0 }
    );
}

#[test]
fn defaults() {
    let cfg = BisectionCfg::default();
    assert_eq!(cfg.tolerance(), 1e-4);
    assert_eq!(cfg.max_iter(), 50);
    assert_eq!(NewtonCfg::default().fd_step(), 1e-8);
    assert_eq!(ModifiedSecantCfg::default().delta(), 0.01);
}

#[test]
fn concurrent_runs_share_an_expression() -> TestResult {
    let f = &Expression::parse("exp(x) - 3")?;
    let expected = newton(f, 1.0, NewtonCfg::new());

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(move |_| s.spawn(move || newton(f, 1.0, NewtonCfg::new())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok().as_ref(), Some(&expected));
        }
    });
    Ok(())
}
