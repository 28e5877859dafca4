use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Literal, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression, parse_precedence, power},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Builds a number literal from an already consumed `Number` token.
///
/// # Errors
/// `InvalidNumber` if the token carries no numeric payload.
pub(crate) fn parse_number(token: &Token) -> ParseResult<Expr> {
    match token.literal {
        Some(Literal::Number(value)) => Ok(Expr::Number { value,
                                                          line: token.line }),
        _ => Err(ParseError::InvalidNumber { text: token.text.clone(),
                                             line: token.line, }),
    }
}

/// Builds a string literal from an already consumed `String` token.
///
/// The payload is used when present; otherwise the token text, which already
/// holds the unescaped contents.
pub(crate) fn parse_string(token: &Token) -> Expr {
    let value = match &token.literal {
        Some(Literal::String(value)) => value.clone(),
        _ => token.text.clone(),
    };
    Expr::String { value,
                   line: token.line }
}

/// `True` and `False` are plain numbers: `1` and `0`.
pub(crate) fn parse_boolean(token: &Token) -> Expr {
    let value = if token.kind == TokenKind::True { 1.0 } else { 0.0 };
    Expr::Number { value,
                   line: token.line }
}

pub(crate) fn parse_variable(token: &Token) -> Expr {
    Expr::Variable { name: token.text.clone(),
                     line: token.line, }
}

/// Parses a parenthesized expression.
///
/// The opening parenthesis has already been consumed. Grouping produces no
/// node of its own; the inner expression is returned as is, so `(x) = 1` is
/// still an assignment to `x`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// `Expected` if the closing `)` is missing.
pub(crate) fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, line)?;
    expect(tokens, TokenKind::RParen, "')' after expression", line)?;
    Ok(expr)
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
///
/// The opening bracket has already been consumed. An empty list `[]` is
/// accepted.
///
/// Grammar: `list := "[" (expression ("," expression)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `[`.
/// - `line`: Line number of the `[` token.
///
/// # Returns
/// An `Expr::List` with its element expressions.
pub(crate) fn parse_list<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let elements = parse_comma_separated(tokens, parse_expression, TokenKind::RBracket, line)?;
    Ok(Expr::List { elements, line })
}

/// Parses a prefix operator application.
///
/// Supports:
/// - `-` (numeric negation), whose operand binds like `**`, so `-a * b` is
///   `(-a) * b` while `-a ** b` is `-(a ** b)`;
/// - `not` (logical complement), whose operand binds like `and`, so
///   `not a == b` is `not (a == b)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the operator.
/// - `operator`: The consumed operator token.
///
/// # Returns
/// An [`Expr::Unary`] node.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, operator: &Token) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (op, operand_power) = match operator.kind {
        TokenKind::Not => (UnaryOperator::Not, power::AND),
        TokenKind::Minus => (UnaryOperator::Negate, power::EXPONENT),
        _ => {
            return Err(ParseError::UnexpectedToken { token: operator.to_string(),
                                                     line:  operator.line, });
        },
    };

    let operand = parse_precedence(tokens, operand_power, operator.line)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: operator.line })
}
