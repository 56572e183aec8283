//! Brent's method, in two flavors.
//!
//! ┌ [`brentq`] : inverse quadratic extrapolation (classical Dekker-Brent)
//! └ [`brenth`] : hyperbolic extrapolation
//!
//! Both share one safeguard skeleton. With only two distinct points a
//! secant step is tried; with three, the flavor's extrapolation. A trial
//! step is accepted only if it is short compared with the step before last
//! and stays well inside the bracket, otherwise the round bisects.


use std::marker::PhantomData;

use log::trace;

use super::algorithms::BracketFamily;
use super::bracket::{self, BracketMethod, Step};
use super::callback::Evaluable;
use super::common::Evaluator;
use super::config::BracketCfg;
use super::errors::RootFindingError;
use super::report::Diagnostics;
use super::signs::opposite_sign;
use super::tolerances::Tolerances;


/// Extrapolation used once three distinct points are available.
pub(crate) trait Extrapolation {
    const FAMILY: BracketFamily;

    /// Trial step from `xcur` given the previous point and the
    /// bracket's far end, with divided differences `dpre` and `dblk`.
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64;
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct InverseQuadratic;

impl Extrapolation for InverseQuadratic {
    const FAMILY: BracketFamily = BracketFamily::Brentq;

    #[inline]
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Hyperbolic;

impl Extrapolation for Hyperbolic {
    const FAMILY: BracketFamily = BracketFamily::Brenth;

    #[inline]
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk - fpre) / (fblk * dpre - fpre * dblk)
    }
}


/// Brent state.
///
/// - `xcur` : best point so far, `|fcur| <= |fblk|`
/// - `xblk` : far end of the bracket, `f` changes sign on `[xcur, xblk]`
/// - `xpre` : previous iterate
/// - `spre`, `scur` : the step before last and the last step
#[derive(Debug, Copy, Clone)]
pub(crate) struct Brent<K> {
    xpre: f64,
    fpre: f64,
    xcur: f64,
    fcur: f64,
    xblk: f64,
    fblk: f64,
    spre: f64,
    scur: f64,
    kind: PhantomData<K>,
}

impl<K> Brent<K> {
    /// Restores the invariants after `xcur` moved.
    fn maintain(&mut self) {
        if self.fpre != 0.0 && self.fcur != 0.0 && opposite_sign(self.fpre, self.fcur) {
            self.xblk = self.xpre;
            self.fblk = self.fpre;
            self.spre = self.xcur - self.xpre;
            self.scur = self.spre;
        }

        if self.fblk.abs() < self.fcur.abs() {
            self.xpre = self.xcur;
            self.xcur = self.xblk;
            self.xblk = self.xpre;

            self.fpre = self.fcur;
            self.fcur = self.fblk;
            self.fblk = self.fpre;
        }
    }
}

impl<K: Extrapolation> BracketMethod for Brent<K> {
    const FAMILY: BracketFamily = K::FAMILY;

    fn start(xa: f64, fa: f64, xb: f64, fb: f64) -> Self {
        let mut state = Self {
            xpre: xa,
            fpre: fa,
            xcur: xb,
            fcur: fb,
            xblk: 0.0,
            fblk: 0.0,
            spre: 0.0,
            scur: 0.0,
            kind: PhantomData,
        };
        state.maintain();
        state
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
        let delta = 0.5 * tol.width_tol(self.xcur, self.xblk);
        let sbis  = 0.5 * self.xblk - 0.5 * self.xcur;

        let mut interpolated = false;
        if self.spre.abs() > delta && self.fcur.abs() < self.fpre.abs() {
            let stry = if self.xpre == self.xblk {
                // secant through the two distinct points
                -self.fcur * (self.xcur - self.xpre) / (self.fcur - self.fpre)
            } else {
                let dpre = (self.fpre - self.fcur) / (self.xpre - self.xcur);
                let dblk = (self.fblk - self.fcur) / (self.xblk - self.xcur);
                K::step(self.fcur, self.fpre, self.fblk, dpre, dblk)
            };

            // NaN/inf trial steps fail this comparison and fall back to bisection
            if 2.0 * stry.abs() < self.spre.abs().min(3.0 * sbis.abs() - delta) {
                self.spre = self.scur;
                self.scur = stry;
                interpolated = true;
            }
        }
        if !interpolated {
            self.spre = sbis;
            self.scur = sbis;
        }

        self.xpre = self.xcur;
        self.fpre = self.fcur;
        if self.scur.abs() > delta {
            self.xcur += self.scur;
        } else {
            self.xcur += if sbis > 0.0 { delta } else { -delta };
        }

        self.fcur = eval.value(self.xcur)?;
        trace!(
            "brent {} step to x={} f={}",
            if interpolated { "interpolation" } else { "bisection" },
            self.xcur,
            self.fcur,
        );
        if self.fcur == 0.0 {
            return Ok(Step::Root(self.xcur));
        }

        self.maintain();
        Ok(Step::Continue)
    }

    fn bracket(&self) -> (f64, f64) {
        (self.xcur, self.xblk)
    }

    fn estimate(&self) -> f64 {
        self.xcur
    }
}


/// Finds a root using Brent's method with inverse quadratic extrapolation.
///
/// Assumes `f` is continuous on `[xa, xb]` and that `f(xa)` and `f(xb)`
/// have opposite signs.
///
/// # Arguments
/// - `f`           : callback, see [`Evaluable`]
/// - `xa`, `xb`    : bracket endpoints, finite and distinct, any order
/// - `ctx`         : opaque context passed to every call of `f`
/// - `cfg`         : [`BracketCfg`] (tolerances, iteration cap)
/// - `diagnostics` : optional record written on termination
///
/// # Returns
/// The bracket end with the smaller |f| once
/// `|xb - xa| <= xtol + rtol * max(|xa|, |xb|)`, or the first point where
/// `f` is exactly zero.
///
/// # Errors
/// Same as [`bisection`](super::bisection::bisection).
///
/// # Notes
/// - One call per round. Superlinear near simple roots.
/// - Bisection fallback bounds the worst case to roughly twice the
///   bisection round count.
pub fn brentq<F, C>(
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
    bracket::solve::<Brent<InverseQuadratic>, F, C>(f, xa, xb, ctx, &cfg, diagnostics)
}


/// Finds a root using Brent's method with hyperbolic extrapolation.
///
/// Identical to [`brentq`] except for the three-point step, which fits a
/// hyperbola instead of an inverse quadratic.
pub fn brenth<F, C>(
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
    bracket::solve::<Brent<Hyperbolic>, F, C>(f, xa, xb, ctx, &cfg, diagnostics)
}
