//! Scalar root finding.
//!
//! Locates `x` with `f(x) ≈ 0` for a caller-supplied scalar function that
//! receives an opaque, caller-owned context on every call.
//!
//! ┌ bracketed : [`bisection`], [`ridder`], [`brenth`], [`brentq`]
//! └ open      : [`newton`], [`secant`], [`halley`]
//!
//! [`bisection`]: root_finding::bisection::bisection
//! [`ridder`]:    root_finding::ridder::ridder
//! [`brenth`]:    root_finding::brent::brenth
//! [`brentq`]:    root_finding::brent::brentq
//! [`newton`]:    root_finding::newton::newton
//! [`secant`]:    root_finding::secant::secant
//! [`halley`]:    root_finding::halley::halley

pub mod root_finding;
