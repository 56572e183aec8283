//! Convergence policy shared by every solver.
//!
//! [`Tolerances`] pairs an absolute and a relative tolerance:
//! - open methods    : `|x_new - x_old| <= atol + rtol * |x_new|`
//! - bracket methods : `|xb - xa|       <= atol + rtol * max(|xa|, |xb|)`
//!
//! Construction validates the pair, so a [`Tolerances`] value is always usable.


use super::errors::ConfigError;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    atol: f64,
    rtol: f64,
}

impl Tolerances {
    /// # Errors
    /// - [`ConfigError::InvalidAbsTol`]  : `atol` < 0 or non-finite
    /// - [`ConfigError::InvalidRelTol`]  : `rtol` < 0 or non-finite
    /// - [`ConfigError::ZeroTolerances`] : both are zero
    pub fn new(atol: f64, rtol: f64) -> Result<Self, ConfigError> {
        if !(atol.is_finite() && atol >= 0.0) {
            return Err(ConfigError::InvalidAbsTol { got: atol });
        }
        if !(rtol.is_finite() && rtol >= 0.0) {
            return Err(ConfigError::InvalidRelTol { got: rtol });
        }
        if atol == 0.0 && rtol == 0.0 {
            return Err(ConfigError::ZeroTolerances { atol, rtol });
        }

        Ok(Self { atol, rtol })
    }

    pub fn atol(&self) -> f64 { self.atol }
    pub fn rtol(&self) -> f64 { self.rtol }

    /// Step tolerance at `x`: `atol + rtol * |x|`.
    #[inline]
    pub fn step_tol(&self, x: f64) -> f64 {
        self.atol + self.rtol * x.abs()
    }

    /// Width tolerance for `[xa, xb]`: `atol + rtol * max(|xa|, |xb|)`.
    #[inline]
    pub fn width_tol(&self, xa: f64, xb: f64) -> f64 {
        self.atol + self.rtol * xa.abs().max(xb.abs())
    }

    /// Open-method test on two successive iterates.
    #[inline]
    pub fn converged(&self, x_new: f64, x_old: f64) -> bool {
        (x_new - x_old).abs() <= self.step_tol(x_new)
    }

    /// Bracket-method test on the current bracket.
    #[inline]
    pub fn bracket_converged(&self, xa: f64, xb: f64) -> bool {
        (xb - xa).abs() <= self.width_tol(xa, xb)
    }
}
