use super::algorithms::BracketFamily;
use super::bracket::{self, BracketMethod, Step};
use super::callback::Evaluable;
use super::common::Evaluator;
use super::config::BracketCfg;
use super::errors::RootFindingError;
use super::report::Diagnostics;
use super::signs::same_sign;
use super::tolerances::Tolerances;


/// Midpoint of [a, b], finite for any finite endpoints
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * a + 0.5 * b
}


/// Bisection state: the bracket plus the last midpoint.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Bisection {
    xa: f64,
    fa: f64,
    xb: f64,
    xm: f64,
}

impl BracketMethod for Bisection {
    const FAMILY: BracketFamily = BracketFamily::Bisection;

    fn start(xa: f64, fa: f64, xb: f64, fb: f64) -> Self {
        let xm = if fa.abs() <= fb.abs() { xa } else { xb };
        Self { xa, fa, xb, xm }
    }

    fn step<F, C>(
        &mut self,
        eval: &mut Evaluator<'_, F, C>,
        _tol: &Tolerances,
    ) -> Result<Step, RootFindingError<F::Error>>
    where
        F: Evaluable<C> + ?Sized,
        C: ?Sized,
    {
        let xm = midpoint(self.xa, self.xb);
        let fm = eval.value(xm)?;
        self.xm = xm;

        if fm == 0.0 {
            return Ok(Step::Root(xm));
        }

        // replace the endpoint sharing the midpoint's sign
        if same_sign(fm, self.fa) {
            self.xa = xm;
            self.fa = fm;
        } else {
            self.xb = xm;
        }

        Ok(Step::Continue)
    }

    fn bracket(&self) -> (f64, f64) {
        (self.xa, self.xb)
    }

    fn estimate(&self) -> f64 {
        self.xm
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `f` is continuous on `[xa, xb]` and that `f(xa)` and `f(xb)`
/// have opposite signs. Endpoints may be given in either order.
///
/// # Arguments
///
/// ┌ `f`           - callback, see [`Evaluable`]
/// ├ `xa`, `xb`    - bracket endpoints, finite and distinct
/// ├ `ctx`         - opaque context passed to every call of `f`
/// ├ `cfg`         - tolerances and iteration cap, see [`BracketCfg`]
/// └ `diagnostics` - optional record written on termination
///
/// # Returns
///
/// The last midpoint once `|xb - xa| <= xtol + rtol * max(|xa|, |xb|)`, or
/// the first point where `f` is exactly zero.
///
/// # Errors
///
/// ┌ [`RootFindingError::Config`]           - invalid tolerances, cap or bounds
/// ├ [`RootFindingError::SignError`]        - no sign change across `[xa, xb]`
/// ├ [`RootFindingError::ConvergenceError`] - cap exhausted; carries the point
/// │                                          with the smallest |f| seen
/// └ [`RootFindingError::Evaluation`], [`RootFindingError::NonFiniteEvaluation`]
///                                           - callback failed or returned NaN/inf
///
/// # Notes
/// └ Linear convergence: each round halves the bracket and costs one call.
pub fn bisection<F, C>(
    f: &F,
    xa: f64,
    xb: f64,
    ctx: &C,
    cfg: BracketCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    bracket::solve::<Bisection, F, C>(f, xa, xb, ctx, &cfg, diagnostics)
}
