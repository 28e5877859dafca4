use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression, parse_precedence, rule_for},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses the right operand of a binary operator and combines it with
/// `left`.
///
/// Left-associative operators parse their right operand one power above
/// their own, so `a - b - c` is `(a - b) - c`. Exponentiation recurses at
/// its own power instead, so `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the operator.
/// - `left`: The already parsed left operand.
/// - `operator`: The consumed operator token.
///
/// # Returns
/// An `Expr::Binary` node.
pub(crate) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                  left: Expr,
                                  operator: &Token)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = token_to_binary_operator(operator.kind).ok_or_else(|| {
                 ParseError::UnexpectedToken { token: operator.to_string(),
                                               line:  operator.line, }
             })?;

    let power = rule_for(operator.kind).power;
    let right_power = if op == BinaryOperator::Pow { power } else { power + 1 };
    let right = parse_precedence(tokens, right_power, operator.line)?;

    Ok(Expr::Binary { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line: operator.line })
}

/// Parses a call's argument list; the opening `(` has been consumed.
///
/// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                                callee: Expr,
                                line: usize)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen, line)?;

    Ok(Expr::Call { callee: Box::new(callee),
                    arguments,
                    line })
}

/// Parses a subscript; the opening `[` has been consumed.
///
/// Grammar: `index := expression "[" expression "]"`
pub(crate) fn parse_index<'a, I>(tokens: &mut Peekable<I>,
                                 collection: Expr,
                                 line: usize)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let index = parse_expression(tokens, line)?;
    expect(tokens, TokenKind::RBracket, "']' after index expression", line)?;

    Ok(Expr::Index { collection: Box::new(collection),
                     index: Box::new(index),
                     line })
}

/// Parses member access; the `.` has been consumed.
///
/// Grammar: `member := expression "." identifier`
pub(crate) fn parse_member<'a, I>(tokens: &mut Peekable<I>,
                                  object: Expr,
                                  line: usize)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let member = parse_identifier(tokens, "identifier after '.'", line)?;

    Ok(Expr::Member { object: Box::new(object),
                      member,
                      line })
}

/// Maps a token kind to its binary operator, if it has one.
///
/// # Example
/// ```
/// use pylite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Power), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Power => Some(BinaryOperator::Pow),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
