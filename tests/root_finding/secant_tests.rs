use std::convert::Infallible;

use approx::assert_abs_diff_eq;
use scalar_zeros::root_finding::config::OpenCfg;
use scalar_zeros::root_finding::errors::{ConvergenceFailure, ErrorKind, RootFindingError};
use scalar_zeros::root_finding::report::{Diagnostics, Status};
use scalar_zeros::root_finding::secant::secant;

type TestResult = Result<(), RootFindingError<Infallible>>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64, _: &()| x * x - 2.0;
    let mut diag = Diagnostics::default();

    let root = secant(&f, 1.0, &(), OpenCfg::new(), Some(&mut diag))?;

    assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert_eq!(diag.status, Status::Converged);
    assert_eq!(diag.algorithm, "secant");
    // both seeds in round one, then one call per round
    assert_eq!(diag.function_calls, diag.iterations + 1);
    assert_eq!(diag.stencil.stencil().len(), 2);
    Ok(())
}

#[test]
fn negative_initial_guess() -> TestResult {
    let f = |x: f64, _: &()| x * x * x + 27.0;

    let root = secant(&f, -2.0, &(), OpenCfg::new().with_tol(1e-12), None)?;

    assert_abs_diff_eq!(root, -3.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn root_at_initial_guess() -> TestResult {
    let f = |x: f64, _: &()| x - 1.0;
    let mut diag = Diagnostics::default();

    let root = secant(&f, 1.0, &(), OpenCfg::new(), Some(&mut diag))?;

    assert_eq!(root, 1.0);
    assert_eq!(diag.function_calls, 1);
    assert_eq!(diag.iterations, 1);
    Ok(())
}

#[test]
fn flat_secant_reports_midpoint() {
    let f = |_: f64, _: &()| 1.0;
    let mut diag = Diagnostics::default();

    let err = secant(&f, 1.0, &(), OpenCfg::new(), Some(&mut diag)).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::ConvergenceError { cause: ConvergenceFailure::FlatSecant, iterations: 1, .. }
    ));
    // seeds are 1 and 1.0002
    assert_abs_diff_eq!(diag.root, 1.0001, epsilon = 1e-12);
    assert_eq!(diag.function_calls, 2);
    assert_eq!(diag.status, Status::ConvergenceError);
}

#[test]
fn diverging_iterates_exhaust_the_cap() {
    // one-sided decay: the secant keeps stepping right
    let f   = |x: f64, _: &()| (-x).exp();
    let cfg = OpenCfg::new().with_max_iter(5);

    let err = secant(&f, 0.0, &(), cfg, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Convergence);
    assert!(err.root().is_some_and(|x| x > 0.0));
}
