//! Shared skeleton for bracketed solvers.
//!
//! Init → Iterate → Terminal:
//! - Init    : validate config and bounds, evaluate `f(xa)` then `f(xb)`
//!   - `f(xa) == 0` returns `xa` after one call
//!   - `f(xb) == 0` returns `xb` after two calls
//!   - same strict sign at both ends is a sign error, zero iterations
//!   - a bracket already inside tolerance converges with zero iterations
//! - Iterate : one [`BracketMethod::step`] per round, then the width test
//! - Terminal: converged, or the iteration cap is exhausted and the point
//!   with the smallest |f| seen so far is reported with a convergence error


use log::trace;

use super::algorithms::{Algorithm, BracketFamily};
use super::callback::Evaluable;
use super::common::{record, Evaluator};
use super::config::{BracketCfg, Validated};
use super::errors::{ConfigError, ConvergenceFailure, RootFindingError};
use super::report::{Diagnostics, Stencil, Status};
use super::signs::same_sign;
use super::tolerances::Tolerances;


/// Outcome of one bracketed round.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Step {
    /// Bracket narrowed; the skeleton checks the width next.
    Continue,
    /// An evaluated point had `f(x) == 0` exactly.
    Root(f64),
}


/// A bracketed method: state that keeps a sign-change bracket and
/// narrows it one round at a time.
pub(crate) trait BracketMethod: Sized {
    const FAMILY: BracketFamily;

    /// Builds state from endpoints known to have strictly opposite signs.
    fn start(xa: f64, fa: f64, xb: f64, fb: f64) -> Self;

    fn step<F, C>(
        &mut self,
        eval: &mut Evaluator<'_, F, C>,
        tol: &Tolerances,
    ) -> Result<Step, RootFindingError<F::Error>>
    where
        F: Evaluable<C> + ?Sized,
        C: ?Sized;

    /// Current bracket, unordered.
    fn bracket(&self) -> (f64, f64);

    /// Root estimate reported on convergence.
    fn estimate(&self) -> f64;
}


pub(crate) fn solve<M, F, C>(
    func: &F,
    xa: f64,
    xb: f64,
    ctx: &C,
    cfg: &BracketCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    M: BracketMethod,
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    let algorithm = Algorithm::Bracket(M::FAMILY).algorithm_name();

    if !(xa.is_finite() && xb.is_finite()) || xa == xb {
        return Err(ConfigError::InvalidBounds { xa, xb }.into());
    }
    let Validated { tolerances, max_iter } = cfg.validate(M::FAMILY)?;

    let mut eval = Evaluator::new(func, ctx);

    // early exit: xa is root
    let fa = eval.value(xa)?;
    if fa == 0.0 {
        return Ok(converged(diagnostics, algorithm, &eval, xa, 0, Stencil::bracket(xa, xb)));
    }
    // early exit: xb is root
    let fb = eval.value(xb)?;
    if fb == 0.0 {
        return Ok(converged(diagnostics, algorithm, &eval, xb, 0, Stencil::bracket(xa, xb)));
    }

    if same_sign(fa, fb) {
        record(diagnostics, Diagnostics {
            function_calls : eval.calls(),
            iterations     : 0,
            status         : Status::SignError,
            root           : f64::NAN,
            stencil        : Stencil::bracket(xa, xb),
            algorithm,
        });
        return Err(RootFindingError::SignError { xa, xb, fa, fb });
    }

    let mut method = M::start(xa, fa, xb, fb);

    // early exit: bracket already within tolerance
    let (a, b) = method.bracket();
    if tolerances.bracket_converged(a, b) {
        let root = method.estimate();
        return Ok(converged(diagnostics, algorithm, &eval, root, 0, Stencil::bracket(a, b)));
    }

    for iter in 1..=max_iter {
        if let Step::Root(x) = method.step(&mut eval, &tolerances)? {
            let (a, b) = method.bracket();
            return Ok(converged(diagnostics, algorithm, &eval, x, iter, Stencil::bracket(a, b)));
        }

        let (a, b) = method.bracket();
        trace!("{algorithm} iter={iter} bracket=[{a}, {b}] estimate={}", method.estimate());

        if tolerances.bracket_converged(a, b) {
            let root = method.estimate();
            return Ok(converged(diagnostics, algorithm, &eval, root, iter, Stencil::bracket(a, b)));
        }
    }

    let (a, b) = method.bracket();
    let root = eval.best().map_or_else(|| method.estimate(), |best| best.x);
    record(diagnostics, Diagnostics {
        function_calls : eval.calls(),
        iterations     : max_iter,
        status         : Status::ConvergenceError,
        root,
        stencil        : Stencil::bracket(a, b),
        algorithm,
    });

    Err(RootFindingError::ConvergenceError {
        algorithm,
        root,
        iterations : max_iter,
        cause      : ConvergenceFailure::IterationLimit,
    })
}


fn converged<F, C>(
    slot: Option<&mut Diagnostics>,
    algorithm: &'static str,
    eval: &Evaluator<'_, F, C>,
    root: f64,
    iterations: usize,
    stencil: Stencil,
) -> f64
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    record(slot, Diagnostics {
        function_calls : eval.calls(),
        iterations,
        status         : Status::Converged,
        root,
        stencil,
        algorithm,
    });
    root
}
