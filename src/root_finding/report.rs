//! Defines the [`Diagnostics`] record optionally filled by every solver.

/// Terminal state of a solver run.
///
/// [`Status::code`] gives the numeric convention: `0` on success, `-1` for a
/// sign error and `-2` for a convergence error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    SignError,
    ConvergenceError,
}
impl Status {
    pub const fn code(self) -> i32 {
        match self {
            Status::Converged        => 0,
            Status::SignError        => -1,
            Status::ConvergenceError => -2,
        }
    }

    pub const fn is_converged(self) -> bool {
        matches!(self, Status::Converged)
    }
}


/// Last set of points a solver worked with.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` = final interval, unordered
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterates, most recent first
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(xa: f64, xb: f64) -> Self {
        Stencil::Bracket { bounds: [xa, xb] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }

    /// `|xb - xa|` for a bracket, `None` for open stencils.
    pub fn width(&self) -> Option<f64> {
        match self {
            Stencil::Bracket { bounds: [a, b] } => Some((b - a).abs()),
            Stencil::Open { .. }                => None,
        }
    }
}


/// Diagnostics written by a solver run when the caller asks for them.
///
/// - `function_calls` : callback invocations, derivatives included
/// - `iterations`     : iterate rounds performed
/// - `status`         : terminal state ([`Status`])
/// - `root`           : returned root, or best estimate on failure
/// - `stencil`        : final bracket or last iterates ([`Stencil`])
/// - `algorithm`      : algorithm name (e.g. `"brentq"`)
///
/// Only the three [`Status`] outcomes write the record. A configuration
/// error or a failing callback leaves it as it was.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diagnostics {
    pub function_calls : usize,
    pub iterations     : usize,
    pub status         : Status,
    pub root           : f64,
    pub stencil        : Stencil,
    pub algorithm      : &'static str,
}

impl Default for Diagnostics {
    /// An unwritten record: no calls, not converged, `root` is NaN.
    fn default() -> Self {
        Self {
            function_calls : 0,
            iterations     : 0,
            status         : Status::ConvergenceError,
            root           : f64::NAN,
            stencil        : Stencil::Open { x: [f64::NAN, f64::NAN], len: 0 },
            algorithm      : "",
        }
    }
}
