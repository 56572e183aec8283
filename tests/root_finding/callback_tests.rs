//! context passing, fallible callbacks and config faults, across solvers
use std::cell::Cell;
use std::convert::Infallible;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use scalar_zeros::root_finding::bisection::bisection;
use scalar_zeros::root_finding::brent::{brenth, brentq};
use scalar_zeros::root_finding::callback::{with_prime, Fallible};
use scalar_zeros::root_finding::config::{BracketCfg, OpenCfg};
use scalar_zeros::root_finding::errors::{ConfigError, ErrorKind, RootFindingError};
use scalar_zeros::root_finding::newton::newton;
use scalar_zeros::root_finding::report::{Diagnostics, Status};
use scalar_zeros::root_finding::ridder::ridder;
use scalar_zeros::root_finding::secant::secant;
use thiserror::Error;

type TestResult = Result<(), RootFindingError<Infallible>>;


/// Single-diode solar cell: current `i` at which the diode equation balances.
///
/// args = [voltage, light current, dark current, series R, shunt R, thermal voltage]
fn solar_cell(i: f64, args: &[f64]) -> f64 {
    let [v, il, io, rs, rsh, vt] = [args[0], args[1], args[2], args[3], args[4], args[5]];
    let vd = v + i * rs;
    il - io * ((vd / vt).exp() - 1.0) - vd / rsh - i
}

const SOLAR_ARGS: [f64; 6] = [5.25, 6.0, 1e-09, 0.004, 10.0, 0.27456];
const SOLAR_ROOT: f64 = 5.255_231_961_257_658;


#[derive(Debug)]
struct Params {
    c0: f64,
    c1: f64,
}

#[test]
fn struct_context() -> TestResult {
    let f   = |x: f64, p: &Params| p.c0 - (-(x - p.c1)).exp();
    let cfg = BracketCfg::new().with_xtol(1e-3).with_rtol(1e-3).with_max_iter(10);
    let ctx = Params { c0: 1.0, c1: 0.7 };

    let root = brentq(&f, 0.5, 1.0, &ctx, cfg, None)?;

    assert_abs_diff_eq!(root, 0.699_994_284_823_131_4, epsilon = 1e-12);
    Ok(())
}

#[test]
fn array_context() -> TestResult {
    let f   = |i: f64, args: &[f64; 6]| solar_cell(i, args);
    let cfg = BracketCfg::new().with_xtol(1e-3).with_rtol(1e-3).with_max_iter(10);
    let mut diag = Diagnostics::default();

    let root = brentq(&f, 0.0, 6.0, &SOLAR_ARGS, cfg, Some(&mut diag))?;

    assert_relative_eq!(root, SOLAR_ROOT, max_relative = 1e-12);
    assert_eq!(diag.status, Status::Converged);
    assert_eq!(diag.function_calls, 4);
    Ok(())
}

#[test]
fn slice_context() -> TestResult {
    let cfg  = BracketCfg::new().with_xtol(1e-3).with_rtol(1e-3).with_max_iter(10);
    let args = SOLAR_ARGS.to_vec();

    let q = brentq(&solar_cell, 0.0, 6.0, args.as_slice(), cfg, None)?;
    let h = brenth(&solar_cell, 0.0, 6.0, args.as_slice(), cfg, None)?;
    let r = ridder(&solar_cell, 0.0, 6.0, args.as_slice(), cfg, None)?;

    assert_relative_eq!(q, SOLAR_ROOT, max_relative = 1e-12);
    assert_relative_eq!(h, SOLAR_ROOT, max_relative = 1e-12);
    assert_abs_diff_eq!(r, SOLAR_ROOT, epsilon = 1e-2);
    Ok(())
}

#[test]
fn context_drives_all_solver_families() -> TestResult {
    let cfg  = BracketCfg::new().with_max_iter(200);
    let args = SOLAR_ARGS.to_vec();

    let tight = brentq(&solar_cell, 0.0, 6.0, args.as_slice(), cfg, None)?;
    let bis   = bisection(&solar_cell, 0.0, 6.0, args.as_slice(), cfg, None)?;
    let sec   = secant(&solar_cell, 5.0, args.as_slice(), OpenCfg::new().with_tol(1e-12), None)?;

    assert!(solar_cell(tight, &args).abs() < 1e-9);
    assert_abs_diff_eq!(bis, tight, epsilon = 1e-10);
    assert_abs_diff_eq!(sec, tight, epsilon = 1e-10);
    Ok(())
}

#[test]
fn context_is_left_unchanged() -> TestResult {
    let calls = Cell::new(0_usize);
    let f = |x: f64, n: &Cell<usize>| {
        n.set(n.get() + 1);
        x * x - 2.0
    };
    let mut diag = Diagnostics::default();

    brentq(&f, 0.0, 2.0, &calls, BracketCfg::new(), Some(&mut diag))?;

    // the solver's count and the caller's count agree
    assert_eq!(calls.get(), diag.function_calls);
    Ok(())
}


#[derive(Debug, Error, PartialEq)]
#[error("model undefined at x={0}")]
struct Undefined(f64);

#[test]
fn fallible_callback_error_is_surfaced() {
    let f = Fallible(|x: f64, _: &()| if x > 0.9 { Err(Undefined(x)) } else { Ok(x - 0.5) });
    let mut diag = Diagnostics::default();

    let err = bisection(&f, 0.0, 1.0, &(), BracketCfg::new(), Some(&mut diag)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert!(matches!(
        err,
        RootFindingError::Evaluation { x, fault: Undefined(at) } if x == 1.0 && at == 1.0
    ));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("model undefined at x=1"));

    // evaluation faults leave the record untouched
    assert_eq!(diag.function_calls, 0);
    assert!(diag.root.is_nan());
}

#[test]
fn fallible_callback_that_succeeds() -> Result<(), RootFindingError<Undefined>> {
    let f = Fallible(|x: f64, _: &()| Ok::<_, Undefined>(x - 0.5));

    let root = bisection(&f, 0.0, 1.0, &(), BracketCfg::new(), None)?;

    assert_eq!(root, 0.5);
    Ok(())
}

#[test]
fn fallible_derivative() {
    let f = with_prime(
        Fallible(|x: f64, _: &()| Ok::<_, Undefined>(x * x - 2.0)),
        Fallible(|x: f64, _: &()| if x < 1.2 { Ok(2.0 * x) } else { Err(Undefined(x)) }),
    );

    let err = newton(&f, 1.0, &(), OpenCfg::new(), None).unwrap_err();

    assert!(matches!(err, RootFindingError::Evaluation { x, .. } if x == 1.5));
}


#[test]
fn config_errors_cost_zero_calls() {
    let calls = Cell::new(0_usize);
    let f = |x: f64, n: &Cell<usize>| {
        n.set(n.get() + 1);
        x - 0.5
    };
    let mut diag = Diagnostics::default();

    let bad = [
        BracketCfg::new().with_xtol(-1.0),
        BracketCfg::new().with_rtol(f64::NAN),
        BracketCfg::new().with_xtol(0.0).with_rtol(0.0),
        BracketCfg::new().with_max_iter(0),
    ];
    for cfg in bad {
        let err = ridder(&f, 0.0, 1.0, &calls, cfg, Some(&mut diag)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    let err = secant(&f, f64::NAN, &calls, OpenCfg::new(), Some(&mut diag)).unwrap_err();
    assert!(matches!(err, RootFindingError::Config(ConfigError::InvalidGuess { .. })));

    assert_eq!(calls.get(), 0);
    assert_eq!(diag.algorithm, "");
}

#[test]
fn errors_display() {
    let f   = |x: f64, _: &()| x * x + 1.0;
    let err = brentq(&f, -1.0, 1.0, &(), BracketCfg::new(), None).unwrap_err();
    assert_eq!(err.to_string(), "no sign change on [-1, 1]: f(xa)=2, f(xb)=2");

    let err = bisection(&f, 0.0, 1.0, &(), BracketCfg::new().with_max_iter(0), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid max_iter: must be >= 1. got max_iter=0");
}
