//! Callback capability sets consumed by the solvers.
//!
//! ┌ [`Evaluable`]       : `f(x, ctx)`
//! ├ [`Differentiable1`] : `f(x, ctx)`, `f'(x, ctx)`
//! └ [`Differentiable2`] : `f(x, ctx)`, `f'(x, ctx)`, `f''(x, ctx)`
//!
//! `C` is an opaque, caller-owned context handed back unchanged on every
//! call. Solvers only ever borrow it immutably. It may be unsized, so a
//! struct, a fixed array or a slice of extra parameters all work:
//!
//! ```
//! use scalar_zeros::root_finding::brent::brentq;
//! use scalar_zeros::root_finding::config::BracketCfg;
//!
//! struct Params { c0: f64, c1: f64 }
//! let f = |x: f64, p: &Params| p.c0 - (-(x - p.c1)).exp();
//!
//! let root = brentq(&f, 0.5, 1.0, &Params { c0: 1.0, c1: 0.7 }, BracketCfg::new(), None)
//!     .unwrap();
//! assert!((root - 0.7).abs() < 1e-10);
//! ```
//!
//! Plain closures `Fn(f64, &C) -> f64` are [`Evaluable`] out of the box.
//! [`Fallible`] adapts closures that can fail, and [`WithPrime`] /
//! [`WithPrimes`] assemble derivative capability sets from separate
//! callbacks.

use std::convert::Infallible;


/// A scalar function of `x` parameterised by a context `C`.
pub trait Evaluable<C: ?Sized> {
    /// Failure reported by the callback itself.
    type Error;

    fn value(&self, x: f64, ctx: &C) -> Result<f64, Self::Error>;
}

/// A scalar function together with its first derivative.
pub trait Differentiable1<C: ?Sized>: Evaluable<C> {
    fn first_derivative(&self, x: f64, ctx: &C) -> Result<f64, Self::Error>;
}

/// A scalar function together with its first and second derivatives.
pub trait Differentiable2<C: ?Sized>: Differentiable1<C> {
    fn second_derivative(&self, x: f64, ctx: &C) -> Result<f64, Self::Error>;
}


impl<C, F> Evaluable<C> for F
where
    C: ?Sized,
    F: Fn(f64, &C) -> f64,
{
    type Error = Infallible;

    #[inline]
    fn value(&self, x: f64, ctx: &C) -> Result<f64, Infallible> {
        Ok(self(x, ctx))
    }
}


/// Adapts a closure returning `Result<f64, E>`.
///
/// The error is surfaced unchanged through
/// [`RootFindingError::Evaluation`](super::errors::RootFindingError::Evaluation).
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<C, F, E> Evaluable<C> for Fallible<F>
where
    C: ?Sized,
    F: Fn(f64, &C) -> Result<f64, E>,
{
    type Error = E;

    #[inline]
    fn value(&self, x: f64, ctx: &C) -> Result<f64, E> {
        (self.0)(x, ctx)
    }
}


/// Function plus first derivative, built from two callbacks that share a
/// context and error type.
#[derive(Debug, Clone, Copy)]
pub struct WithPrime<F, G> {
    pub f:      F,
    pub fprime: G,
}

/// Pairs `f` with its first derivative.
pub fn with_prime<F, G>(f: F, fprime: G) -> WithPrime<F, G> {
    WithPrime { f, fprime }
}

impl<C, F, G> Evaluable<C> for WithPrime<F, G>
where
    C: ?Sized,
    F: Evaluable<C>,
    G: Evaluable<C, Error = F::Error>,
{
    type Error = F::Error;

    #[inline]
    fn value(&self, x: f64, ctx: &C) -> Result<f64, Self::Error> {
        self.f.value(x, ctx)
    }
}

impl<C, F, G> Differentiable1<C> for WithPrime<F, G>
where
    C: ?Sized,
    F: Evaluable<C>,
    G: Evaluable<C, Error = F::Error>,
{
    #[inline]
    fn first_derivative(&self, x: f64, ctx: &C) -> Result<f64, Self::Error> {
        self.fprime.value(x, ctx)
    }
}


/// Function plus first and second derivatives.
#[derive(Debug, Clone, Copy)]
pub struct WithPrimes<F, G, H> {
    pub f:       F,
    pub fprime:  G,
    pub fprime2: H,
}

/// Pairs `f` with its first and second derivatives.
pub fn with_primes<F, G, H>(f: F, fprime: G, fprime2: H) -> WithPrimes<F, G, H> {
    WithPrimes { f, fprime, fprime2 }
}

impl<C, F, G, H> Evaluable<C> for WithPrimes<F, G, H>
where
    C: ?Sized,
    F: Evaluable<C>,
    G: Evaluable<C, Error = F::Error>,
    H: Evaluable<C, Error = F::Error>,
{
    type Error = F::Error;

    #[inline]
    fn value(&self, x: f64, ctx: &C) -> Result<f64, Self::Error> {
        self.f.value(x, ctx)
    }
}

impl<C, F, G, H> Differentiable1<C> for WithPrimes<F, G, H>
where
    C: ?Sized,
    F: Evaluable<C>,
    G: Evaluable<C, Error = F::Error>,
    H: Evaluable<C, Error = F::Error>,
{
    #[inline]
    fn first_derivative(&self, x: f64, ctx: &C) -> Result<f64, Self::Error> {
        self.fprime.value(x, ctx)
    }
}

impl<C, F, G, H> Differentiable2<C> for WithPrimes<F, G, H>
where
    C: ?Sized,
    F: Evaluable<C>,
    G: Evaluable<C, Error = F::Error>,
    H: Evaluable<C, Error = F::Error>,
{
    #[inline]
    fn second_derivative(&self, x: f64, ctx: &C) -> Result<f64, Self::Error> {
        self.fprime2.value(x, ctx)
    }
}
