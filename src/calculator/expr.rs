//! Arithmetic expression evaluator for the calculator display.
//!
//! Grammar (standard precedence, left associative):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | number
//! number := digits ['.' digits] | '.' digits | digits '.'
//! ```

use thiserror::Error;

/// Reasons an expression cannot be evaluated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("Expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("Unexpected token at position {position}")]
    UnexpectedToken { position: usize },

    #[error("Malformed number {0:?}")]
    MalformedNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        match ch {
            ' ' | '\t' => pos += 1,
            '+' => {
                tokens.push(Token::Plus);
                pos += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                pos += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                pos += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let start = pos;
                while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                    pos += 1;
                }
                let literal: String = chars[start..pos].iter().collect();
                tokens.push(Token::Number(parse_number(&literal)?));
            }
            other => {
                return Err(EvalError::UnexpectedChar {
                    ch: other,
                    position: pos,
                })
            }
        }
    }

    Ok(tokens)
}

fn parse_number(literal: &str) -> Result<f64, EvalError> {
    let dots = literal.matches('.').count();
    if dots > 1 || literal == "." {
        return Err(EvalError::MalformedNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber(literal.to_string()))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                value / rhs
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Plus) => self.unary(),
            Some(Token::Minus) => Ok(-self.unary()?),
            Some(Token::Number(n)) => Ok(n),
            Some(_) => Err(EvalError::UnexpectedToken {
                position: self.pos - 1,
            }),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression over `+ - * /`.
///
/// Only malformed input is an error. Division by zero and overflow follow
/// IEEE 754 and yield infinities or NaN.
///
/// ```rust
/// use pureform::calculator::{evaluate, EvalError};
///
/// assert_eq!(evaluate("3+4*2"), Ok(11.0));
/// assert_eq!(evaluate("-3+2"), Ok(-1.0));
/// assert_eq!(evaluate("3+"), Err(EvalError::UnexpectedEnd));
/// assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
/// ```
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;

    if parser.pos < parser.tokens.len() {
        return Err(EvalError::UnexpectedToken {
            position: parser.pos,
        });
    }
    Ok(value)
}
