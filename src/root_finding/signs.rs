//! Sign utilities for bracketed root-finding.
//! - `opposite_sign` : `true` if values have opposite sign
//! - `same_sign`     : `true` if values share the same sign

/// Returns `true` if `x` and `y` have opposite signs.
///
/// Compares sign bits, so callers must screen exact zeros first.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_negative() != y.is_sign_negative()
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    !opposite_sign(x, y)
}


/// `+1.0` for positive input, `-1.0` otherwise (zero included).
#[inline]
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { -1.0 }
}
