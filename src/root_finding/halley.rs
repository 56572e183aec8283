use super::algorithms::OpenFamily;
use super::callback::Differentiable2;
use super::common::Evaluator;
use super::config::OpenCfg;
use super::errors::{ConvergenceFailure, RootFindingError};
use super::open::{self, OpenMethod, OpenStep};
use super::report::{Diagnostics, Stencil};


#[derive(Debug, Copy, Clone)]
pub(crate) struct Halley {
    x:    f64,
    prev: Option<f64>,
}

impl<F, C> OpenMethod<F, C> for Halley
where
    F: Differentiable2<C> + ?Sized,
    C: ?Sized,
{
    const FAMILY: OpenFamily = OpenFamily::Halley;

    fn start(x0: f64, _eval: &mut Evaluator<'_, F, C>) -> Result<Self, RootFindingError<F::Error>> {
        Ok(Self { x: x0, prev: None })
    }

    fn step(&mut self, eval: &mut Evaluator<'_, F, C>) -> Result<OpenStep, RootFindingError<F::Error>> {
        let x  = self.x;
        let fx = eval.value(x)?;
        if fx == 0.0 {
            return Ok(OpenStep::Root(x));
        }

        let d1 = eval.first_derivative(x)?;
        if d1 == 0.0 {
            return Ok(OpenStep::Stalled { x, cause: ConvergenceFailure::ZeroDerivative });
        }
        let d2 = eval.second_derivative(x)?;

        let denom = 2.0 * d1 * d1 - fx * d2;
        if denom == 0.0 {
            return Ok(OpenStep::Stalled { x, cause: ConvergenceFailure::ZeroDerivative });
        }

        let x_new = x - 2.0 * fx * d1 / denom;
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


/// Finds a root of `f` using
/// [Halley's method](https://en.wikipedia.org/wiki/Halley%27s_method).
///
/// `x_{k+1} = x_k - 2 f f' / (2 f'^2 - f f'')`, all evaluated at `x_k`.
///
/// Arguments, return value and errors follow [`newton`](super::newton::newton);
/// `f` must also provide a second derivative ([`Differentiable2`], see
/// [`with_primes`](super::callback::with_primes)). A zero `f'` or a zero
/// denominator stops with [`ConvergenceFailure::ZeroDerivative`]; `f''` is
/// not evaluated in the first case.
///
/// Three calls per round; cubic convergence near simple roots.
pub fn halley<F, C>(
    f: &F,
    x0: f64,
    ctx: &C,
    cfg: OpenCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    F: Differentiable2<C> + ?Sized,
    C: ?Sized,
{
    open::solve::<Halley, F, C>(f, x0, ctx, &cfg, diagnostics)
}
