//! Root-finding error types.
//!
//! ┌ [`ConfigError`]          : rejected before any evaluation
//! │   ├ invalid tolerances (negative, non-finite, both zero)
//! │   ├ invalid iteration budget (`max_iter == 0`)
//! │   └ invalid bracket endpoints or initial guess
//! │
//! └ [`RootFindingError`]     : everything a solver run can return
//!     ├ configuration        (wraps [`ConfigError`])
//!     ├ sign error           (bracket has no sign change)
//!     ├ convergence error    (budget exhausted, zero derivative, flat secant,
//!     │                       runaway iterate)
//!     └ evaluation fault     (callback failed or returned NaN/inf)


use thiserror::Error;


/// Configuration errors.
///
/// Always detected before the first callback invocation, so a run that
/// fails with one of these has charged zero function calls.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid absolute tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid relative tolerance: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("either the absolute or relative tolerance must be > 0. got {atol} and {rtol}")]
    ZeroTolerances { atol: f64, rtol: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bounds: xa and xb must be finite and distinct. got [{xa}, {xb}]")]
    InvalidBounds { xa: f64, xb: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}


/// Why a solver gave up without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceFailure {
    /// `max_iter` rounds ran without satisfying the tolerance.
    IterationLimit,
    /// Newton or Halley step denominator evaluated to exactly zero.
    ZeroDerivative,
    /// The two secant points have identical function values.
    FlatSecant,
    /// An open method stepped to NaN or infinity.
    NonFiniteIterate,
}
impl std::fmt::Display for ConvergenceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ConvergenceFailure::IterationLimit   => "iteration limit reached",
            ConvergenceFailure::ZeroDerivative   => "zero derivative",
            ConvergenceFailure::FlatSecant       => "flat secant",
            ConvergenceFailure::NonFiniteIterate => "iterate overflowed",
        };
        f.write_str(reason)
    }
}


/// Coarse classification of a [`RootFindingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Sign,
    Convergence,
    Evaluation,
}


/// Errors returned by every solver.
///
/// `E` is the callback's own error type; infallible closures use
/// [`std::convert::Infallible`].
#[derive(Debug, Error)]
pub enum RootFindingError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no sign change on [{xa}, {xb}]: f(xa)={fa}, f(xb)={fb}")]
    SignError { xa: f64, xb: f64, fa: f64, fb: f64 },

    #[error("{algorithm} did not converge ({cause}) after {iterations} iterations; last estimate x={root}")]
    ConvergenceError {
        algorithm  : &'static str,
        root       : f64,
        iterations : usize,
        cause      : ConvergenceFailure,
    },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("derivative of order {order} non-finite at x={x}, value={value}")]
    NonFiniteDerivative { x: f64, order: u8, value: f64 },

    #[error("callback failed at x={x}")]
    Evaluation {
        x: f64,
        #[source]
        fault: E,
    },
}

impl<E> RootFindingError<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RootFindingError::Config(_)                  => ErrorKind::Configuration,
            RootFindingError::SignError { .. }           => ErrorKind::Sign,
            RootFindingError::ConvergenceError { .. }    => ErrorKind::Convergence,
            RootFindingError::NonFiniteEvaluation { .. }
            | RootFindingError::NonFiniteDerivative { .. }
            | RootFindingError::Evaluation { .. }        => ErrorKind::Evaluation,
        }
    }

    /// Best estimate carried by a [`RootFindingError::ConvergenceError`].
    pub fn root(&self) -> Option<f64> {
        match self {
            RootFindingError::ConvergenceError { root, .. } => Some(*root),
            _ => None,
        }
    }
}
