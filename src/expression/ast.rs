//! Expression tree and its evaluation.

use super::errors::EvalError;


/// Allow-listed unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin"  => Some(Func::Sin),
            "cos"  => Some(Func::Cos),
            "tan"  => Some(Func::Tan),
            "exp"  => Some(Func::Exp),
            "log"  => Some(Func::Log),
            "sqrt" => Some(Func::Sqrt),
            "abs"  => Some(Func::Abs),
            _      => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin  => "sin",
            Func::Cos  => "cos",
            Func::Tan  => "tan",
            Func::Exp  => "exp",
            Func::Log  => "log",
            Func::Sqrt => "sqrt",
            Func::Abs  => "abs",
        }
    }

    fn apply(self, v: f64) -> Result<f64, EvalError> {
        let domain = || EvalError::Domain { function: self.name(), arg: v };
        match self {
            Func::Sin  => Ok(v.sin()),
            Func::Cos  => Ok(v.cos()),
            Func::Tan  => Ok(v.tan()),
            Func::Exp  => Ok(v.exp()),
            Func::Abs  => Ok(v.abs()),
            // natural log
            Func::Log  => if v > 0.0 { Ok(v.ln()) } else { Err(domain()) },
            Func::Sqrt => if v >= 0.0 { Ok(v.sqrt()) } else { Err(domain()) },
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Sub => Ok(lhs - rhs),
            BinOp::Mul => Ok(lhs * rhs),
            BinOp::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            BinOp::Pow => power(lhs, rhs),
        }
    }
}

/// Real power; rejects results that are complex or a division by zero.
fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::NonRealPower { base, exponent });
    }
    Ok(base.powf(exponent))
}


/// Abstract Syntax Tree nodes. Named constants are folded to
/// [`Expr::Number`] when parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable,
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Tree-walking evaluation at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(n)            => Ok(*n),
            Expr::Variable             => Ok(x),
            Expr::Neg(inner)           => Ok(-inner.eval(x)?),
            Expr::Binary(op, lhs, rhs) => op.apply(lhs.eval(x)?, rhs.eval(x)?),
            Expr::Call(func, arg)      => func.apply(arg.eval(x)?),
        }
    }
}
