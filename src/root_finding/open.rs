//! Shared skeleton for open (unbracketed) solvers.
//!
//! Iterate → Terminal. Each round asks the method for its next iterate and
//! applies the step test `|x_new - x_old| <= tol + rtol * |x_new|`. Nothing
//! here checks that the iterates stay near `x0`: divergence surfaces as an
//! exhausted iteration cap, or as [`ConvergenceFailure::NonFiniteIterate`]
//! once an iterate overflows.


use log::trace;

use super::algorithms::{Algorithm, OpenFamily};
use super::callback::Evaluable;
use super::common::{record, Evaluator};
use super::config::{OpenCfg, Validated};
use super::errors::{ConfigError, ConvergenceFailure, RootFindingError};
use super::report::{Diagnostics, Stencil, Status};


/// Outcome of one open-method round.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum OpenStep {
    /// A new iterate was produced from `x_old`.
    Next { x_old: f64, x_new: f64 },
    /// `f(x) == 0` exactly at the current iterate.
    Root(f64),
    /// The update formula cannot be applied at `x`.
    Stalled { x: f64, cause: ConvergenceFailure },
}


/// An open method, generic over the callback capability it needs.
pub(crate) trait OpenMethod<F, C>: Sized
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    const FAMILY: OpenFamily;

    fn start(x0: f64, eval: &mut Evaluator<'_, F, C>) -> Result<Self, RootFindingError<F::Error>>;

    fn step(&mut self, eval: &mut Evaluator<'_, F, C>) -> Result<OpenStep, RootFindingError<F::Error>>;

    /// Most recently computed iterate.
    fn current(&self) -> f64;

    fn stencil(&self) -> Stencil;
}


pub(crate) fn solve<M, F, C>(
    func: &F,
    x0: f64,
    ctx: &C,
    cfg: &OpenCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    M: OpenMethod<F, C>,
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    let algorithm = Algorithm::Open(M::FAMILY).algorithm_name();

    if !x0.is_finite() {
        return Err(ConfigError::InvalidGuess { x0 }.into());
    }
    let Validated { tolerances, max_iter } = cfg.validate(M::FAMILY)?;

    let mut eval = Evaluator::new(func, ctx);
    let mut method = M::start(x0, &mut eval)?;

    for iter in 1..=max_iter {
        match method.step(&mut eval)? {
            OpenStep::Root(x) => {
                record(diagnostics, Diagnostics {
                    function_calls : eval.calls(),
                    iterations     : iter,
                    status         : Status::Converged,
                    root           : x,
                    stencil        : method.stencil(),
                    algorithm,
                });
                return Ok(x);
            }

            OpenStep::Stalled { x, cause } => {
                record(diagnostics, Diagnostics {
                    function_calls : eval.calls(),
                    iterations     : iter,
                    status         : Status::ConvergenceError,
                    root           : x,
                    stencil        : method.stencil(),
                    algorithm,
                });
                return Err(RootFindingError::ConvergenceError {
                    algorithm,
                    root: x,
                    iterations: iter,
                    cause,
                });
            }

            OpenStep::Next { x_old, x_new } => {
                trace!("{algorithm} iter={iter} x={x_new} step={}", x_new - x_old);

                // runaway iterate: report the last finite one
                if !x_new.is_finite() {
                    record(diagnostics, Diagnostics {
                        function_calls : eval.calls(),
                        iterations     : iter,
                        status         : Status::ConvergenceError,
                        root           : x_old,
                        stencil        : Stencil::singleton(x_old),
                        algorithm,
                    });
                    return Err(RootFindingError::ConvergenceError {
                        algorithm,
                        root: x_old,
                        iterations: iter,
                        cause: ConvergenceFailure::NonFiniteIterate,
                    });
                }

                if tolerances.converged(x_new, x_old) {
                    record(diagnostics, Diagnostics {
                        function_calls : eval.calls(),
                        iterations     : iter,
                        status         : Status::Converged,
                        root           : x_new,
                        stencil        : method.stencil(),
                        algorithm,
                    });
                    return Ok(x_new);
                }
            }
        }
    }

    let root = method.current();
    record(diagnostics, Diagnostics {
        function_calls : eval.calls(),
        iterations     : max_iter,
        status         : Status::ConvergenceError,
        root,
        stencil        : method.stencil(),
        algorithm,
    });

    Err(RootFindingError::ConvergenceError {
        algorithm,
        root,
        iterations : max_iter,
        cause      : ConvergenceFailure::IterationLimit,
    })
}
