//! Zero of a scalar function `f(x) = 0`.
//!
//! - [`root_finding`] : six iterative root-finding methods with a per-iteration trace
//! - [`expression`]   : restricted arithmetic expressions over a single variable `x`
//! - [`wire`]         : JSON request/response contract for service front ends

pub mod expression;
pub mod root_finding;
pub mod wire;
