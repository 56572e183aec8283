//! Newton-Raphson method

use super::algorithms::OpenFamily;
use super::callback::Differentiable1;
use super::common::Evaluator;
use super::config::OpenCfg;
use super::errors::{ConvergenceFailure, RootFindingError};
use super::open::{self, OpenMethod, OpenStep};
use super::report::{Diagnostics, Stencil};


/// Newton state: current iterate and the one before it.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Newton {
    x:    f64,
    prev: Option<f64>,
}

impl<F, C> OpenMethod<F, C> for Newton
where
    F: Differentiable1<C> + ?Sized,
    C: ?Sized,
{
    const FAMILY: OpenFamily = OpenFamily::Newton;

    fn start(x0: f64, _eval: &mut Evaluator<'_, F, C>) -> Result<Self, RootFindingError<F::Error>> {
        Ok(Self { x: x0, prev: None })
    }

    fn step(&mut self, eval: &mut Evaluator<'_, F, C>) -> Result<OpenStep, RootFindingError<F::Error>> {
        let x  = self.x;
        let fx = eval.value(x)?;
        if fx == 0.0 {
            return Ok(OpenStep::Root(x));
        }

        let dfx = eval.first_derivative(x)?;
        if dfx == 0.0 {
            return Ok(OpenStep::Stalled { x, cause: ConvergenceFailure::ZeroDerivative });
        }

        let x_new = x - fx / dfx;
        self.prev = Some(x);
        self.x = x_new;

        Ok(OpenStep::Next { x_old: x, x_new })
    }

    fn current(&self) -> f64 {
        self.x
    }

    fn stencil(&self) -> Stencil {
        match self.prev {
            Some(prev) => Stencil::doubleton(self.x, prev),
            None       => Stencil::singleton(self.x),
        }
    }
}


/// Finds a root of `f` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `f`           : function and first derivative, see [`Differentiable1`]
///                   and [`with_prime`](super::callback::with_prime)
/// - `x0`          : finite initial guess
/// - `ctx`         : opaque context passed to every callback
/// - `cfg`         : [`OpenCfg`] (tolerances, iteration cap)
/// - `diagnostics` : optional record written on termination
///
/// # Returns
/// `x_{k+1} = x_k - f(x_k) / f'(x_k)` once `|x_{k+1} - x_k| <= tol + rtol * |x_{k+1}|`,
/// or `x_k` itself if `f(x_k)` is exactly zero.
///
/// # Errors
/// - [`RootFindingError::Config`]           : invalid tolerances, cap or `x0`
/// - [`RootFindingError::ConvergenceError`] : `f'(x_k) == 0`
///   ([`ConvergenceFailure::ZeroDerivative`], root = `x_k`), the cap ran
///   out ([`ConvergenceFailure::IterationLimit`], root = last iterate) or
///   the step overflowed ([`ConvergenceFailure::NonFiniteIterate`], root =
///   last finite iterate)
/// - [`RootFindingError::Evaluation`], [`RootFindingError::NonFiniteEvaluation`],
///   [`RootFindingError::NonFiniteDerivative`] : callback failed or returned NaN/inf
///
/// # Notes
/// - Two calls per round (`f` and `f'`); quadratic convergence near simple roots.
/// - Convergence is *local only*. Poor guesses may cycle or run away, which
///   surfaces as an exhausted iteration cap or an overflowed iterate.
pub fn newton<F, C>(
    f: &F,
    x0: f64,
    ctx: &C,
    cfg: OpenCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    F: Differentiable1<C> + ?Sized,
    C: ?Sized,
{
    open::solve::<Newton, F, C>(f, x0, ctx, &cfg, diagnostics)
}
