//! Evaluation bookkeeping shared by all solvers.
//!
//! [`Evaluator`] wraps the caller's callback and context:
//! ├ counts every callback invocation
//! ├ maps callback failures to [`RootFindingError::Evaluation`]
//! ├ rejects NaN/inf output
//! └ remembers the evaluated point with the smallest |f(x)|
//!
//! [`record`] writes the optional [`Diagnostics`] once a run terminates.


use log::debug;

use super::callback::{Differentiable1, Differentiable2, Evaluable};
use super::errors::RootFindingError;
use super::report::Diagnostics;


/// Point with the smallest residual seen so far.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Best {
    pub x:  f64,
    pub fx: f64,
}


pub(crate) struct Evaluator<'a, F: ?Sized, C: ?Sized> {
    func:  &'a F,
    ctx:   &'a C,
    calls: usize,
    best:  Option<Best>,
}

impl<'a, F, C> Evaluator<'a, F, C>
where
    F: Evaluable<C> + ?Sized,
    C: ?Sized,
{
    pub(crate) fn new(func: &'a F, ctx: &'a C) -> Self {
        Self { func, ctx, calls: 0, best: None }
    }

    /// Total callback invocations so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    pub(crate) fn best(&self) -> Option<Best> {
        self.best
    }

    /// Evaluates `f(x)`, tracking the best point.
    pub(crate) fn value(&mut self, x: f64) -> Result<f64, RootFindingError<F::Error>> {
        self.calls += 1;
        let fx = self
            .func
            .value(x, self.ctx)
            .map_err(|fault| RootFindingError::Evaluation { x, fault })?;

        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }

        match self.best {
            Some(best) if best.fx.abs() <= fx.abs() => {}
            _ => self.best = Some(Best { x, fx }),
        }

        Ok(fx)
    }
}

impl<'a, F, C> Evaluator<'a, F, C>
where
    F: Differentiable1<C> + ?Sized,
    C: ?Sized,
{
    pub(crate) fn first_derivative(&mut self, x: f64) -> Result<f64, RootFindingError<F::Error>> {
        self.calls += 1;
        let value = self
            .func
            .first_derivative(x, self.ctx)
            .map_err(|fault| RootFindingError::Evaluation { x, fault })?;

        finite_derivative(x, 1, value)
    }
}

impl<'a, F, C> Evaluator<'a, F, C>
where
    F: Differentiable2<C> + ?Sized,
    C: ?Sized,
{
    pub(crate) fn second_derivative(&mut self, x: f64) -> Result<f64, RootFindingError<F::Error>> {
        self.calls += 1;
        let value = self
            .func
            .second_derivative(x, self.ctx)
            .map_err(|fault| RootFindingError::Evaluation { x, fault })?;

        finite_derivative(x, 2, value)
    }
}

#[inline]
fn finite_derivative<E>(x: f64, order: u8, value: f64) -> Result<f64, RootFindingError<E>> {
    if !value.is_finite() {
        return Err(RootFindingError::NonFiniteDerivative { x, order, value });
    }
    Ok(value)
}


/// Writes a finished run into the caller's record, if one was supplied.
pub(crate) fn record(slot: Option<&mut Diagnostics>, diagnostics: Diagnostics) {
    debug!(
        "{} finished: status={:?} root={} iterations={} function_calls={}",
        diagnostics.algorithm,
        diagnostics.status,
        diagnostics.root,
        diagnostics.iterations,
        diagnostics.function_calls,
    );

    if let Some(out) = slot {
        *out = diagnostics;
    }
}
