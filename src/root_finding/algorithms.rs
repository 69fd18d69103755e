//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! grouped by whether they need a sign-changing bracket or open seeds.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsi,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton,
    FixedPoint,
    ModifiedSecant,
}

impl Algorithm {
    pub const BISECTION       : Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    pub const REGULA_FALSI    : Algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);
    pub const SECANT          : Algorithm = Algorithm::Open(OpenFamily::Secant);
    pub const NEWTON          : Algorithm = Algorithm::Open(OpenFamily::Newton);
    pub const FIXED_POINT     : Algorithm = Algorithm::Open(OpenFamily::FixedPoint);
    pub const MODIFIED_SECANT : Algorithm = Algorithm::Open(OpenFamily::ModifiedSecant);

    /// Name reported in [`RootFindingReport::algorithm_name`](super::report::RootFindingReport).
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi",
            Algorithm::Open(OpenFamily::Secant)            => "secant",
            Algorithm::Open(OpenFamily::Newton)            => "newton_raphson",
            Algorithm::Open(OpenFamily::FixedPoint)        => "fixed_point",
            Algorithm::Open(OpenFamily::ModifiedSecant)    => "modified_secant",
        }
    }

    /// Method tag used by the JSON request contract (see [`crate::wire`]).
    pub const fn wire_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regulaFalsi",
            Algorithm::Open(OpenFamily::Secant)            => "secant",
            Algorithm::Open(OpenFamily::Newton)            => "newtonRaphson",
            Algorithm::Open(OpenFamily::FixedPoint)        => "fixedPoint",
            Algorithm::Open(OpenFamily::ModifiedSecant)    => "modifiedSecant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
