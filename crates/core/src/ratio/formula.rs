//! Restricted arithmetic formulas.
//!
//! Evaluation has two stages. [`substitute`] scans the formula once, turning
//! every variable name into a number token that already carries its value.
//! [`Parser`] then evaluates the purely numeric token stream by recursive
//! descent:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Nothing but decimal arithmetic is reachable from a formula.

use std::str::FromStr;

use finreport_shared::types::Period;
use rust_decimal::Decimal;

use super::error::EvaluationFailure;
use super::variables::{Variable, is_identifier_char};
use crate::reports::DerivedTotals;

/// Deepest parenthesis / unary nesting accepted.
const MAX_DEPTH: usize = 128;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal or substituted variable value.
    Number(Decimal),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// A token and its byte offset in the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Byte offset of its first character.
    pub position: usize,
}

/// Stage one: tokenizes `formula`, replacing variable names by their values.
///
/// Identifiers are matched against the variable table longest name first and
/// only on whole-identifier boundaries. Any other identifier fails with
/// [`EvaluationFailure::UnknownVariable`].
pub fn substitute(
    formula: &str,
    totals: &DerivedTotals,
    period: Period,
) -> Result<Vec<Token>, EvaluationFailure> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(c) = formula[position..].chars().next() {
        let rest = &formula[position..];
        let kind = match c {
            c if c.is_whitespace() => {
                position += c.len_utf8();
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let len = rest
                    .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                    .unwrap_or(rest.len());
                let literal = &rest[..len];
                let value = Decimal::from_str(literal).map_err(|e| {
                    if is_out_of_range(&e) {
                        EvaluationFailure::Overflow
                    } else {
                        EvaluationFailure::syntax(position, format!("invalid number '{literal}'"))
                    }
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position,
                });
                position += len;
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                if let Some((variable, len)) = Variable::match_prefix(rest) {
                    tokens.push(Token {
                        kind: TokenKind::Number(variable.value(totals, period)),
                        position,
                    });
                    position += len;
                    continue;
                }
                let len = rest
                    .find(|c: char| !is_identifier_char(c))
                    .unwrap_or(rest.len());
                return Err(EvaluationFailure::UnknownVariable {
                    name: rest[..len].to_string(),
                });
            }
            other => {
                return Err(EvaluationFailure::syntax(
                    position,
                    format!("unexpected character '{other}'"),
                ));
            }
        };
        tokens.push(Token { kind, position });
        position += c.len_utf8();
    }

    Ok(tokens)
}

/// Well-formed literals can only fail to parse by leaving the decimal range.
fn is_out_of_range(error: &rust_decimal::Error) -> bool {
    match error {
        rust_decimal::Error::ExceedsMaximumPossibleValue
        | rust_decimal::Error::LessThanMinimumPossibleValue => true,
        rust_decimal::Error::ErrorString(message) => message.contains("overflow"),
        _ => false,
    }
}

/// Stage two: recursive-descent evaluator over numeric tokens.
pub struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser; `end` is the formula length, used to locate
    /// "unexpected end" errors.
    #[must_use]
    pub const fn new(tokens: &'a [Token], end: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
            end,
        }
    }

    /// Evaluates the whole token stream.
    pub fn evaluate(mut self) -> Result<Decimal, EvaluationFailure> {
        if self.tokens.is_empty() {
            return Err(EvaluationFailure::syntax(0, "empty formula"));
        }
        let value = self.expr()?;
        match self.peek() {
            None => Ok(value),
            Some(token) => Err(EvaluationFailure::syntax(
                token.position,
                "unexpected token after expression",
            )),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    fn enter(&mut self, position: usize) -> Result<(), EvaluationFailure> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvaluationFailure::syntax(position, "expression nested too deeply"));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Decimal, EvaluationFailure> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            let op: fn(Decimal, Decimal) -> Option<Decimal> = match token.kind {
                TokenKind::Plus => Decimal::checked_add,
                TokenKind::Minus => Decimal::checked_sub,
                _ => break,
            };
            self.cursor += 1;
            let rhs = self.term()?;
            value = op(value, rhs).ok_or(EvaluationFailure::Overflow)?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<Decimal, EvaluationFailure> {
        let mut value = self.unary()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    value = value.checked_mul(rhs).ok_or(EvaluationFailure::Overflow)?;
                }
                TokenKind::Slash => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    if rhs.is_zero() {
                        return Err(EvaluationFailure::DivisionByZero);
                    }
                    value = value.checked_div(rhs).ok_or(EvaluationFailure::Overflow)?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<Decimal, EvaluationFailure> {
        match self.peek().map(|t| (t.kind, t.position)) {
            Some((TokenKind::Minus, position)) => {
                self.cursor += 1;
                self.enter(position)?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(-value)
            }
            Some((TokenKind::Plus, position)) => {
                self.cursor += 1;
                self.enter(position)?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Decimal, EvaluationFailure> {
        let Some(token) = self.next() else {
            return Err(EvaluationFailure::syntax(self.end, "unexpected end of formula"));
        };
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            TokenKind::LParen => {
                self.enter(token.position)?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(value),
                    Some(other) => Err(EvaluationFailure::syntax(other.position, "expected ')'")),
                    None => Err(EvaluationFailure::syntax(self.end, "missing ')'")),
                }
            }
            _ => Err(EvaluationFailure::syntax(
                token.position,
                "expected a number, variable or '('",
            )),
        }
    }
}
