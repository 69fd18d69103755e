//! Tokenizer for the expression grammar.

use super::errors::ParseError;


#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Identifier(String),
    Plus, Minus, Star, Slash,
    /// `**` or `^`
    Pow,
    LParen, RParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(n)     => write!(f, "{n}"),
            TokenKind::Identifier(s) => write!(f, "{s}"),
            TokenKind::Plus          => write!(f, "+"),
            TokenKind::Minus         => write!(f, "-"),
            TokenKind::Star          => write!(f, "*"),
            TokenKind::Slash         => write!(f, "/"),
            TokenKind::Pow           => write!(f, "**"),
            TokenKind::LParen        => write!(f, "("),
            TokenKind::RParen        => write!(f, ")"),
        }
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}


pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() || c == '.' {
            let mut text = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    text.push(d);
                    chars.next();
                } else {
                    break;
                }
            }

            // exponent only if digits follow, so `2*e` style input is untouched
            if let Some(&(epos, 'e' | 'E')) = chars.peek() {
                let rest = &input[epos + 1..];
                let mut rest_chars = rest.chars();
                let has_digits = match rest_chars.next() {
                    Some('+' | '-') => rest_chars.next().is_some_and(|d| d.is_ascii_digit()),
                    Some(d)         => d.is_ascii_digit(),
                    None            => false,
                };
                if has_digits {
                    text.push('e');
                    chars.next();
                    if let Some(&(_, sign @ ('+' | '-'))) = chars.peek() {
                        text.push(sign);
                        chars.next();
                    }
                    while let Some(&(_, d)) = chars.peek() {
                        if d.is_ascii_digit() {
                            text.push(d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
            }

            let value = text
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { text: text.clone(), pos })?;
            tokens.push(Token { kind: TokenKind::Number(value), pos });
        } else if c.is_alphabetic() || c == '_' {
            let mut ident = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    ident.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token { kind: TokenKind::Identifier(ident), pos });
        } else {
            chars.next();
            let kind = match c {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '/' => TokenKind::Slash,
                '^' => TokenKind::Pow,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '*' => {
                    if let Some(&(_, '*')) = chars.peek() {
                        chars.next();
                        TokenKind::Pow
                    } else {
                        TokenKind::Star
                    }
                }
                _ => return Err(ParseError::UnexpectedChar { ch: c, pos }),
            };
            tokens.push(Token { kind, pos });
        }
    }

    Ok(tokens)
}
