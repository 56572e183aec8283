use log::trace;

use super::algorithms::BracketFamily;
use super::bisection::midpoint;
use super::bracket::{self, BracketMethod, Step};
use super::callback::Evaluable;
use super::common::Evaluator;
use super::config::BracketCfg;
use super::errors::RootFindingError;
use super::report::Diagnostics;
use super::signs::{opposite_sign, sign};
use super::tolerances::Tolerances;


/// Ridder state: bracket endpoints with their values and the last
/// exponential-interpolation point.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Ridder {
    xa: f64,
    fa: f64,
    xb: f64,
    fb: f64,
    xn: f64,
}

impl BracketMethod for Ridder {
    const FAMILY: BracketFamily = BracketFamily::Ridder;

    fn start(xa: f64, fa: f64, xb: f64, fb: f64) -> Self {
        let xn = if fa.abs() <= fb.abs() { xa } else { xb };
        Self { xa, fa, xb, fb, xn }
    }

    fn step<F, C>(
        &mut self,
        eval: &mut Evaluator<'_, F, C>,
        tol: &Tolerances,
    ) -> Result<Step, RootFindingError<F::Error>>
    where
        F: Evaluable<C> + ?Sized,
        C: ?Sized,
    {
        let Self { xa, fa, xb, fb, .. } = *self;

        let dm = 0.5 * xb - 0.5 * xa;
        let xm = midpoint(xa, xb);
        let fm = eval.value(xm)?;
        if fm == 0.0 {
            self.xn = xm;
            return Ok(Step::Root(xm));
        }

        // fa * fb < 0, so the radicand is strictly positive
        let dn = sign(fb - fa) * dm * fm / (fm * fm - fa * fb).sqrt();

        // stay at least half a tolerance inside the bracket
        let margin = dm.abs() - 0.5 * tol.width_tol(xa, xb);
        let xn = xm - sign(dn) * dn.abs().min(margin);
        let fn_ = eval.value(xn)?;
        self.xn = xn;
        trace!("ridder midpoint={xm} f={fm} interpolated={xn} f={fn_}");

        if fn_ == 0.0 {
            return Ok(Step::Root(xn));
        }

        if opposite_sign(fn_, fm) {
            self.xa = xn;
            self.fa = fn_;
            self.xb = xm;
            self.fb = fm;
        } else if opposite_sign(fn_, fa) {
            self.xb = xn;
            self.fb = fn_;
        } else {
            self.xa = xn;
            self.fa = fn_;
        }

        Ok(Step::Continue)
    }

    fn bracket(&self) -> (f64, f64) {
        (self.xa, self.xb)
    }

    fn estimate(&self) -> f64 {
        self.xn
    }
}


/// Finds a root of a function using
/// [Ridders' method](https://en.wikipedia.org/wiki/Ridders%27_method).
///
/// Each round evaluates the midpoint, then an exponentially corrected
/// false-position point, and keeps the sub-bracket with a sign change.
///
/// # Arguments
/// - `f`           : callback, see [`Evaluable`]
/// - `xa`, `xb`    : bracket endpoints, finite and distinct, any order
/// - `ctx`         : opaque context passed to every call of `f`
/// - `cfg`         : [`BracketCfg`] (tolerances, iteration cap)
/// - `diagnostics` : optional record written on termination
///
/// # Returns
/// The last interpolated point once the bracket satisfies the width test,
/// or the first point where `f` is exactly zero.
///
/// # Errors
/// Same as [`bisection`](super::bisection::bisection).
///
/// # Notes
/// - Two calls per round, superlinear (order ~1.4 per call) without derivatives.
/// - An exact zero at the midpoint ends the round after one call; the
///   interpolated point is never evaluated.
pub fn ridder<F, C>(
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
    bracket::solve::<Ridder, F, C>(f, xa, xb, ctx, &cfg, diagnostics)
}
