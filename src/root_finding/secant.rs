use super::algorithms::OpenFamily;
use super::callback::Evaluable;
use super::common::Evaluator;
use super::config::OpenCfg;
use super::errors::{ConvergenceFailure, RootFindingError};
use super::open::{self, OpenMethod, OpenStep};
use super::report::{Diagnostics, Stencil};


/// Relative and absolute offset of the second starting point from `x0`.
pub(crate) const SECANT_SEED_OFFSET: f64 = 1e-4;

/// Second starting point derived from `x0`.
#[inline]
pub(crate) fn seed_point(x0: f64) -> f64 {
    let shift = if x0 >= 0.0 { SECANT_SEED_OFFSET } else { -SECANT_SEED_OFFSET };
    x0 * (1.0 + SECANT_SEED_OFFSET) + shift
}


/// Secant state: the two points defining the next line.
///
/// Values are filled lazily so that each call happens inside a counted
/// round; `f(p1)` of a fresh iterate is evaluated at the start of the
/// following round.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Secant {
    p0: f64,
    q0: Option<f64>,
    p1: f64,
    q1: Option<f64>,
}

impl<F, C> OpenMethod<F, C> for Secant
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    const FAMILY: OpenFamily = OpenFamily::Secant;

    fn start(x0: f64, _eval: &mut Evaluator<'_, F, C>) -> Result<Self, RootFindingError<F::Error>> {
        Ok(Self { p0: x0, q0: None, p1: seed_point(x0), q1: None })
    }

    fn step(&mut self, eval: &mut Evaluator<'_, F, C>) -> Result<OpenStep, RootFindingError<F::Error>> {
        let q0 = match self.q0 {
            Some(q0) => q0,
            None => {
                let q0 = eval.value(self.p0)?;
                if q0 == 0.0 {
                    return Ok(OpenStep::Root(self.p0));
                }
                let q1 = eval.value(self.p1)?;
                if q1 == 0.0 {
                    return Ok(OpenStep::Root(self.p1));
                }
                // p0 holds the point with the smaller residual
                let (q0, q1) = if q1.abs() < q0.abs() {
                    std::mem::swap(&mut self.p0, &mut self.p1);
                    (q1, q0)
                } else {
                    (q0, q1)
                };
                self.q1 = Some(q1);
                self.q0 = Some(q0);
                q0
            }
        };

        let q1 = match self.q1 {
            Some(q1) => q1,
            None => {
                let q1 = eval.value(self.p1)?;
                if q1 == 0.0 {
                    return Ok(OpenStep::Root(self.p1));
                }
                self.q1 = Some(q1);
                q1
            }
        };

        let (p0, p1) = (self.p0, self.p1);
        if q1 == q0 {
            return Ok(OpenStep::Stalled {
                x     : 0.5 * p0 + 0.5 * p1,
                cause : ConvergenceFailure::FlatSecant,
            });
        }

        // divide by the larger residual
        let p = if q1.abs() > q0.abs() {
            (-q0 / q1 * p1 + p0) / (1.0 - q0 / q1)
        } else {
            (-q1 / q0 * p0 + p1) / (1.0 - q1 / q0)
        };

        self.p0 = p1;
        self.q0 = Some(q1);
        self.p1 = p;
        self.q1 = None;

        Ok(OpenStep::Next { x_old: p1, x_new: p })
    }

    fn current(&self) -> f64 {
        self.p1
    }

    fn stencil(&self) -> Stencil {
        Stencil::doubleton(self.p1, self.p0)
    }
}


/// Finds a root of `f` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `f`           : callback, see [`Evaluable`]; no derivative needed
/// - `x0`          : finite initial guess
/// - `ctx`         : opaque context passed to every call of `f`
/// - `cfg`         : [`OpenCfg`] (tolerances, iteration cap)
/// - `diagnostics` : optional record written on termination
///
/// # Behavior
/// - The second starting point is `x0 * (1 + 1e-4) ± 1e-4`, sign taken
///   from `x0` (`+` for `x0 >= 0`).
/// - The first round evaluates both starting points; later rounds one new
///   point each.
/// - Exact zero at any evaluated point ends the run with that point.
/// - `f(p0) == f(p1)` stops with [`ConvergenceFailure::FlatSecant`] and
///   reports the midpoint of the two.
///
/// # Errors
/// As for [`newton`](super::newton::newton), with
/// [`ConvergenceFailure::FlatSecant`] in place of a zero derivative.
///
/// # Notes
/// - One call per round after the first; order ~1.6 near simple roots.
/// - Convergence is *local only*, as for Newton. A bracketed method is the
///   choice when a sign change is known.
pub fn secant<F, C>(
    f: &F,
    x0: f64,
    ctx: &C,
    cfg: OpenCfg,
    diagnostics: Option<&mut Diagnostics>,
) -> Result<f64, RootFindingError<F::Error>>
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    open::solve::<Secant, F, C>(f, x0, ctx, &cfg, diagnostics)
}
