//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary (('**' | '^') unary)?
//! primary := number | 'x' | 'pi' | 'e' | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! `power` binds tighter than a leading sign and is right associative, so
//! `-x**2` is `-(x**2)` and `2**3**2` is `2**(3**2)`.
//!
//! Nesting (parentheses, signs, exponents and chained operators) is capped
//! at [`MAX_DEPTH`]; deeper input is a [`ParseError::TooDeep`], which also
//! bounds the recursion of [`Expr::eval`].

use super::ast::{BinOp, Expr, Func};
use super::errors::ParseError;
use super::lexer::{tokenize, Token, TokenKind};


/// Deepest nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 256;


/// Parses a string expression into an AST.
pub(crate) fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0, end: input.len(), depth: 0 };
    let expr = parser.parse_expr()?;

    match parser.peek() {
        None        => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken {
            found: token.kind.to_string(),
            pos: token.pos,
        }),
    }
}


struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Byte length of the source, reported for errors at end of input.
    end: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn here(&self) -> usize {
        self.peek().map_or(self.end, |t| t.pos)
    }

    /// Goes one level deeper, failing past [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { pos: self.here() });
        }
        self.depth += 1;
        Ok(())
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        if self.eat(&TokenKind::RParen) {
            Ok(())
        } else {
            Err(ParseError::Expected { expected: "`)`", pos: self.here() })
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let entry = self.depth;
        let mut left = self.parse_term()?;

        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            // each operator deepens the left spine
            self.descend()?;
            let right = self.parse_term()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        self.depth = entry;
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let entry = self.depth;
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinOp::Div
            } else {
                break;
            };
            self.descend()?;
            let right = self.parse_unary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        self.depth = entry;
        Ok(left)
    }

    /// Every recursive path of the grammar passes through here.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = if self.eat(&TokenKind::Minus) {
            Expr::Neg(Box::new(self.parse_unary()?))
        } else if self.eat(&TokenKind::Plus) {
            self.parse_unary()?
        } else {
            self.parse_power()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if self.eat(&TokenKind::Pow) {
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let pos = self.here();
        match self.consume() {
            Some(Token { kind: TokenKind::Number(n), .. }) => Ok(Expr::Number(n)),
            Some(Token { kind: TokenKind::Identifier(name), pos }) => {
                if self.eat(&TokenKind::LParen) {
                    let func = Func::from_name(&name)
                        .ok_or(ParseError::UnknownFunction { name, pos })?;
                    let arg = self.parse_expr()?;
                    self.expect_rparen()?;
                    return Ok(Expr::Call(func, Box::new(arg)));
                }
                match name.as_str() {
                    "x"  => Ok(Expr::Variable),
                    "pi" => Ok(Expr::Number(std::f64::consts::PI)),
                    "e"  => Ok(Expr::Number(std::f64::consts::E)),
                    _    => Err(ParseError::UnknownName { name, pos }),
                }
            }
            Some(Token { kind: TokenKind::LParen, .. }) => {
                let expr = self.parse_expr()?;
                self.expect_rparen()?;
                Ok(expr)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.kind.to_string(),
                pos: token.pos,
            }),
            None => Err(ParseError::Expected { expected: "an operand", pos }),
        }
    }
}
