//! Solver configuration.
//!
//! [`BracketCfg`] : bracketed methods (bisection, ridder, brenth, brentq)
//! ├ `xtol`     : absolute bracket-width tolerance
//! ├ `rtol`     : relative bracket-width tolerance
//! └ `max_iter` : iteration cap
//!
//! [`OpenCfg`] : open methods (newton, secant, halley)
//! ├ `tol`      : absolute step tolerance
//! ├ `rtol`     : relative step tolerance
//! └ `max_iter` : iteration cap
//!
//! Builders never fail. Every solver calls `validate()` before the first
//! function evaluation, so a bad configuration costs zero function calls.


use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::errors::ConfigError;
use super::tolerances::Tolerances;


pub const DEFAULT_BRACKET_XTOL : f64 = 2e-12;
pub const DEFAULT_BRACKET_RTOL : f64 = 4.0 * f64::EPSILON;
pub const DEFAULT_OPEN_TOL     : f64 = 1.48e-8;
pub const DEFAULT_OPEN_RTOL    : f64 = 0.0;


/// Fields shared by every config. Unset values fall back to the
/// per-family defaults when validated.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct CommonCfg {
    atol:     Option<f64>,
    rtol:     Option<f64>,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub(crate) fn with_atol    (&mut self, v: f64)   { self.atol     = Some(v); }
    pub(crate) fn with_rtol    (&mut self, v: f64)   { self.rtol     = Some(v); }
    pub(crate) fn with_max_iter(&mut self, v: usize) { self.max_iter = Some(v); }

    fn validate(
        &self,
        default_atol: f64,
        default_rtol: f64,
        algorithm: Algorithm,
    ) -> Result<Validated, ConfigError> {
        let tolerances = Tolerances::new(
            self.atol.unwrap_or(default_atol),
            self.rtol.unwrap_or(default_rtol),
        )?;

        let max_iter = match self.max_iter {
            Some(0) => return Err(ConfigError::InvalidMaxIter { got: 0 }),
            Some(n) => n,
            None    => algorithm.default_max_iter(),
        };

        Ok(Validated { tolerances, max_iter })
    }
}


/// Output of `validate()`: checked tolerances and a resolved iteration cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Validated {
    pub tolerances: Tolerances,
    pub max_iter:   usize,
}


macro_rules! impl_common_cfg {
    ($cfg:ty, $atol_setter:ident, $atol_getter:ident, $default_atol:expr) => {
        impl $cfg {
            #[must_use]
            pub fn new() -> Self { Self::default() }

            #[must_use]
            pub fn $atol_setter(mut self, v: f64) -> Self {
                self.common.with_atol(v);
                self
            }
            #[must_use]
            pub fn with_rtol(mut self, v: f64) -> Self {
                self.common.with_rtol(v);
                self
            }
            #[must_use]
            pub fn with_max_iter(mut self, v: usize) -> Self {
                self.common.with_max_iter(v);
                self
            }

            /// Configured absolute tolerance (or the default).
            pub fn $atol_getter(&self) -> f64 {
                self.common.atol.unwrap_or($default_atol)
            }
            /// Configured iteration cap, if set.
            pub fn max_iter(&self) -> Option<usize> {
                self.common.max_iter
            }
        }
    };
}


/// Bracketed-method configuration.
///
/// # Defaults
/// - `xtol`     = 2e-12
/// - `rtol`     = 4 * machine epsilon
/// - `max_iter` = 100
///
/// # Validation
/// Performed by each solver via [`BracketCfg::validate`]:
/// - `xtol` >= 0 and finite
/// - `rtol` >= 0 and finite
/// - `xtol` and `rtol` not both zero
/// - `max_iter` >= 1
#[derive(Debug, Copy, Clone, Default)]
pub struct BracketCfg {
    common: CommonCfg,
}
impl_common_cfg!(BracketCfg, with_xtol, xtol, DEFAULT_BRACKET_XTOL);

impl BracketCfg {
    pub fn rtol(&self) -> f64 {
        self.common.rtol.unwrap_or(DEFAULT_BRACKET_RTOL)
    }

    pub fn validate(&self, family: BracketFamily) -> Result<Validated, ConfigError> {
        self.common.validate(
            DEFAULT_BRACKET_XTOL,
            DEFAULT_BRACKET_RTOL,
            Algorithm::Bracket(family),
        )
    }
}


/// Open-method configuration.
///
/// # Defaults
/// - `tol`      = 1.48e-8
/// - `rtol`     = 0
/// - `max_iter` = 50
///
/// Setting `tol` to zero without a positive `rtol` is rejected at solve time.
#[derive(Debug, Copy, Clone, Default)]
pub struct OpenCfg {
    common: CommonCfg,
}
impl_common_cfg!(OpenCfg, with_tol, tol, DEFAULT_OPEN_TOL);

impl OpenCfg {
    pub fn rtol(&self) -> f64 {
        self.common.rtol.unwrap_or(DEFAULT_OPEN_RTOL)
    }

    pub fn validate(&self, family: OpenFamily) -> Result<Validated, ConfigError> {
        self.common.validate(
            DEFAULT_OPEN_TOL,
            DEFAULT_OPEN_RTOL,
            Algorithm::Open(family),
        )
    }
}
