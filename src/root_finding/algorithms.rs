//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with their default iteration budgets.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open (derivative-based) methods
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    Ridder,
    /// Brent with hyperbolic extrapolation.
    Brenth,
    /// Brent with inverse quadratic extrapolation.
    Brentq,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Newton,
    Secant,
    Halley,
}

impl Algorithm {
    /// Default iteration budget if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Bracket methods share one budget, open methods another.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(_) => 100,
            Algorithm::Open(_)    => 50,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Bracket(BracketFamily::Ridder)    => "ridder",
            Algorithm::Bracket(BracketFamily::Brenth)    => "brenth",
            Algorithm::Bracket(BracketFamily::Brentq)    => "brentq",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
            Algorithm::Open(OpenFamily::Halley)          => "halley",
        }
    }

    /// `true` for methods that keep a sign-change bracket.
    pub const fn is_bracketed(self) -> bool {
        matches!(self, Algorithm::Bracket(_))
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
