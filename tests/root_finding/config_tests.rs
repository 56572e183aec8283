use approx::assert_relative_eq;
use scalar_zeros::root_finding::algorithms::{Algorithm, BracketFamily, OpenFamily};
use scalar_zeros::root_finding::config::{BracketCfg, OpenCfg};
use scalar_zeros::root_finding::errors::ConfigError;
use scalar_zeros::root_finding::report::{Diagnostics, Stencil, Status};
use scalar_zeros::root_finding::tolerances::Tolerances;

#[test]
fn bracket_defaults() -> Result<(), ConfigError> {
    let cfg = BracketCfg::new();
    assert_eq!(cfg.xtol(), 2e-12);
    assert_eq!(cfg.rtol(), 4.0 * f64::EPSILON);
    assert_eq!(cfg.max_iter(), None);

    let valid = cfg.validate(BracketFamily::Brentq)?;
    assert_eq!(valid.max_iter, 100);
    assert_eq!(valid.tolerances.atol(), 2e-12);
    Ok(())
}

#[test]
fn open_defaults() -> Result<(), ConfigError> {
    let cfg = OpenCfg::default();
    assert_eq!(cfg.tol(), 1.48e-8);
    assert_eq!(cfg.rtol(), 0.0);

    let valid = cfg.validate(OpenFamily::Halley)?;
    assert_eq!(valid.max_iter, 50);
    Ok(())
}

#[test]
fn setters_override_defaults() -> Result<(), ConfigError> {
    let cfg = OpenCfg::new().with_tol(0.0).with_rtol(1e-6).with_max_iter(7);
    assert_eq!(cfg.max_iter(), Some(7));

    let valid = cfg.validate(OpenFamily::Secant)?;
    assert_eq!(valid.max_iter, 7);
    assert_eq!(valid.tolerances.rtol(), 1e-6);
    Ok(())
}

#[test]
fn invalid_tolerances() {
    assert_eq!(Tolerances::new(-1.0, 0.0), Err(ConfigError::InvalidAbsTol { got: -1.0 }));
    assert_eq!(Tolerances::new(1.0, f64::INFINITY), Err(ConfigError::InvalidRelTol { got: f64::INFINITY }));
    assert_eq!(Tolerances::new(0.0, 0.0), Err(ConfigError::ZeroTolerances { atol: 0.0, rtol: 0.0 }));
    assert!(matches!(Tolerances::new(f64::NAN, 1.0), Err(ConfigError::InvalidAbsTol { .. })));

    let err = OpenCfg::new().with_max_iter(0).validate(OpenFamily::Newton);
    assert_eq!(err, Err(ConfigError::InvalidMaxIter { got: 0 }));
}

#[test]
fn convergence_tests() -> Result<(), ConfigError> {
    let tol = Tolerances::new(1e-3, 1e-2)?;

    assert_relative_eq!(tol.step_tol(-10.0), 0.101);
    assert_relative_eq!(tol.width_tol(-10.0, 2.0), 0.101);

    assert!(tol.converged(10.0, 10.1));
    assert!(!tol.converged(10.0, 10.2));
    assert!(tol.bracket_converged(1.0, 1.01));
    assert!(!tol.bracket_converged(1.0, 1.02));
    Ok(())
}

#[test]
fn algorithm_metadata() {
    let all = [
        (Algorithm::Bracket(BracketFamily::Bisection), "bisection"),
        (Algorithm::Bracket(BracketFamily::Ridder), "ridder"),
        (Algorithm::Bracket(BracketFamily::Brenth), "brenth"),
        (Algorithm::Bracket(BracketFamily::Brentq), "brentq"),
        (Algorithm::Open(OpenFamily::Newton), "newton"),
        (Algorithm::Open(OpenFamily::Secant), "secant"),
        (Algorithm::Open(OpenFamily::Halley), "halley"),
    ];
    for (algorithm, name) in all {
        assert_eq!(algorithm.algorithm_name(), name);
        assert_eq!(algorithm.to_string(), name);
        assert_eq!(algorithm.is_bracketed(), matches!(algorithm, Algorithm::Bracket(_)));
    }
}

#[test]
fn unwritten_diagnostics() {
    let diag = Diagnostics::default();
    assert_eq!(diag.function_calls, 0);
    assert_eq!(diag.iterations, 0);
    assert_eq!(diag.status, Status::ConvergenceError);
    assert!(!diag.status.is_converged());
    assert!(diag.root.is_nan());
    assert!(diag.stencil.stencil().is_empty());
    assert_eq!(diag.stencil.width(), None);

    assert_eq!(Stencil::bracket(1.0, -2.0).width(), Some(3.0));
}
