//! Expression error types.
//!
//! ┌ [`ParseError`] : the source text is not a valid expression
//! └ [`EvalError`]  : a valid expression has no real value at some `x`

use thiserror::Error;


/// Syntax errors. `pos` is a byte offset into the source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid equation: empty expression")]
    Empty,

    #[error("invalid equation: unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid equation: malformed number `{text}` at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("invalid equation: unknown name `{name}` at position {pos}")]
    UnknownName { name: String, pos: usize },

    #[error("invalid equation: unknown function `{name}` at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("invalid equation: expected {expected} at position {pos}")]
    Expected { expected: &'static str, pos: usize },

    #[error("invalid equation: unexpected `{found}` at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("invalid equation: nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}


/// Evaluation (domain) errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid equation: math domain error in {function}({arg})")]
    Domain { function: &'static str, arg: f64 },

    #[error("invalid equation: division by zero")]
    DivisionByZero,

    #[error("invalid equation: {base} ** {exponent} is not a real number")]
    NonRealPower { base: f64, exponent: f64 },
}
