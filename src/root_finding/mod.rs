// common helpers
pub mod algorithms;
pub mod config;
pub mod derivative;
pub mod errors;
pub mod function;
pub mod report;
pub(crate) mod common;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;
pub mod fixed_point;
pub mod modified_secant;

pub use function::Function;
pub use report::{Outcome, RootFindingReport};
