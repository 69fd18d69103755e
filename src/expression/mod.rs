//! Restricted arithmetic expressions over a single variable `x`.
//!
//! Input is parsed once into an expression tree and evaluated by walking it;
//! nothing outside the grammar below can be expressed.
//!
//! - operators : `+ - * /`, `**` (and `^` as an alias)
//! - functions : `sin cos tan exp log sqrt abs` (`log` is natural)
//! - constants : `pi e`
//! - variable  : `x`
//!
//! ```
//! use zof::expression::Expression;
//!
//! let f = Expression::parse("x**3 - x - 2").unwrap();
//! assert_eq!(f.eval(2.0), Ok(4.0));
//! ```

pub mod ast;
pub mod errors;
mod lexer;
mod parser;

pub use ast::Expr;
pub use errors::{EvalError, ParseError};
pub use parser::MAX_DEPTH;

use crate::root_finding::Function;


/// A parsed expression and the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    tree: Expr,
}

impl Expression {
    /// Parses `source`.
    ///
    /// # Errors
    /// [`ParseError`] for unknown names or functions, unbalanced parentheses,
    /// stray characters and trailing input.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tree = parser::parse(source)?;
        Ok(Self { source: source.to_owned(), tree })
    }

    pub fn source(&self) -> &str { &self.source }

    pub fn tree(&self) -> &Expr { &self.tree }

    /// Evaluates at `x`.
    ///
    /// # Errors
    /// [`EvalError`] when the expression has no real value at `x`
    /// (e.g. `log(0)`, `sqrt(-1)`, `1/0`).
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.tree.eval(x)
    }
}

impl Function for Expression {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.tree.eval(x)
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
