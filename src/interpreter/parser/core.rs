use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{parse_binary, parse_call, parse_index, parse_member},
            statement::parse_statement,
            unary::{parse_boolean, parse_grouping, parse_list, parse_number, parse_string,
                    parse_unary, parse_variable},
            utils::skip_separators,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding powers, from loosest to tightest.
///
/// An infix operator is only consumed while the minimum power requested by
/// the caller is less than or equal to the operator's power.
pub mod power {
    /// Tokens without an infix role.
    pub const NONE: u8 = 0;
    /// `or`
    pub const OR: u8 = 1;
    /// `and`, and the operand of prefix `not`.
    pub const AND: u8 = 2;
    /// `==` `!=`
    pub const EQUALITY: u8 = 3;
    /// `<` `<=` `>` `>=`
    pub const COMPARISON: u8 = 4;
    /// `+` `-`
    pub const TERM: u8 = 5;
    /// `*` `/` `%`
    pub const FACTOR: u8 = 6;
    /// `**`, and the operand of prefix `-`.
    pub const EXPONENT: u8 = 7;
    /// Calls, subscripts and member access.
    pub const POSTFIX: u8 = 9;
}

/// What a token does when it starts an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Number,
    String,
    Boolean,
    Variable,
    Grouping,
    List,
    Unary,
}

/// What a token does when it follows a complete operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    Binary,
    Call,
    Index,
    Member,
}

/// One row of the expression grammar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    /// Handler used when the token begins an expression.
    pub prefix: Option<Prefix>,
    /// Handler used when the token follows an operand.
    pub infix:  Option<Infix>,
    /// Binding power of the infix role.
    pub power:  u8,
}

impl ParseRule {
    const fn new(prefix: Option<Prefix>, infix: Option<Infix>, power: u8) -> Self {
        Self { prefix, infix, power }
    }
}

/// Looks up the grammar rule for a token kind.
///
/// Kinds that appear in neither role get an empty rule with power
/// [`power::NONE`], which stops any infix loop.
///
/// # Example
/// ```
/// use pylite::interpreter::{
///     lexer::TokenKind,
///     parser::core::{Infix, Prefix, power, rule_for},
/// };
///
/// let minus = rule_for(TokenKind::Minus);
/// assert_eq!(minus.prefix, Some(Prefix::Unary));
/// assert_eq!(minus.infix, Some(Infix::Binary));
/// assert_eq!(minus.power, power::TERM);
/// ```
#[must_use]
pub const fn rule_for(kind: TokenKind) -> ParseRule {
    use TokenKind as K;

    match kind {
        K::Number => ParseRule::new(Some(Prefix::Number), None, power::NONE),
        K::String => ParseRule::new(Some(Prefix::String), None, power::NONE),
        K::True | K::False => ParseRule::new(Some(Prefix::Boolean), None, power::NONE),
        K::Identifier => ParseRule::new(Some(Prefix::Variable), None, power::NONE),

        K::LParen => ParseRule::new(Some(Prefix::Grouping), Some(Infix::Call), power::POSTFIX),
        K::LBracket => ParseRule::new(Some(Prefix::List), Some(Infix::Index), power::POSTFIX),
        K::Dot => ParseRule::new(None, Some(Infix::Member), power::POSTFIX),

        K::Minus => ParseRule::new(Some(Prefix::Unary), Some(Infix::Binary), power::TERM),
        K::Not => ParseRule::new(Some(Prefix::Unary), None, power::NONE),

        K::Power => ParseRule::new(None, Some(Infix::Binary), power::EXPONENT),
        K::Star | K::Slash | K::Percent => {
            ParseRule::new(None, Some(Infix::Binary), power::FACTOR)
        },
        K::Plus => ParseRule::new(None, Some(Infix::Binary), power::TERM),
        K::Less | K::LessEqual | K::Greater | K::GreaterEqual => {
            ParseRule::new(None, Some(Infix::Binary), power::COMPARISON)
        },
        K::EqualEqual | K::BangEqual => ParseRule::new(None, Some(Infix::Binary), power::EQUALITY),
        K::And => ParseRule::new(None, Some(Infix::Binary), power::AND),
        K::Or => ParseRule::new(None, Some(Infix::Binary), power::OR),

        _ => ParseRule::new(None, None, power::NONE),
    }
}

/// Parses a whole program.
///
/// Newlines and `;` between top-level statements are skipped. Parsing is
/// fail-fast: the first malformed construct aborts with its error and no
/// statements are returned.
///
/// # Parameters
/// - `tokens`: The complete token stream, normally ending in `EndOfInput`.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Example
/// ```
/// use pylite::interpreter::{parser::core::parse_program, tokenizer::tokenize};
///
/// let tokens = tokenize("x = 1\nprint(x)\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut iter);
        match iter.peek() {
            None | Some(Token { kind: TokenKind::EndOfInput,
                                .. }) => break,
            Some(&token) => statements.push(parse_statement(&mut iter, token.line)?),
        }
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression, including a trailing assignment.
///
/// Grammar: `expression := precedence(or) ("=" expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
/// - `line`: Line of the last consumed token, reported if the stream has
///   run out.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_precedence(tokens, power::NONE, line)?;
    parse_assignment_tail(tokens, left)
}

/// Turns `name = value` into an assignment expression when the next token is
/// `=`; otherwise returns `left` untouched.
///
/// Assignment is right-associative: the value is itself a full expression,
/// so `a = b = 1` assigns `1` to `b` and then to `a`.
///
/// # Errors
/// `InvalidAssignmentTarget` when `left` is not a plain variable.
pub(in crate::interpreter::parser) fn parse_assignment_tail<'a, I>(tokens: &mut Peekable<I>,
                                                                   left: Expr)
                                                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&assign) = tokens.peek().filter(|t| t.kind == TokenKind::Assign) else {
        return Ok(left);
    };

    match left {
        Expr::Variable { name, line } => {
            tokens.next();
            let value = parse_expression(tokens, assign.line)?;
            Ok(Expr::Assign { name,
                              value: Box::new(value),
                              line })
        },
        _ => Err(ParseError::InvalidAssignmentTarget { line: assign.line }),
    }
}

/// Parses an expression whose infix operators bind at least as tightly as
/// `min_power`.
///
/// This is the precedence-climbing core: the current token's prefix handler
/// produces the left operand, then infix handlers are applied for as long as
/// the next operator's binding power is at least `min_power`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the operand.
/// - `min_power`: Loosest binding power that may still be consumed.
/// - `line`: Line of the last consumed token, reported if the stream has
///   run out.
///
/// # Errors
/// `UnexpectedToken` when the current token cannot start an expression.
pub fn parse_precedence<'a, I>(tokens: &mut Peekable<I>,
                               min_power: u8,
                               line: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = match tokens.next() {
        Some(token) => token,
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    let mut left = match rule_for(token.kind).prefix {
        Some(Prefix::Number) => parse_number(token)?,
        Some(Prefix::String) => parse_string(token),
        Some(Prefix::Boolean) => parse_boolean(token),
        Some(Prefix::Variable) => parse_variable(token),
        Some(Prefix::Grouping) => parse_grouping(tokens, token.line)?,
        Some(Prefix::List) => parse_list(tokens, token.line)?,
        Some(Prefix::Unary) => parse_unary(tokens, token)?,
        None if token.kind == TokenKind::EndOfInput => {
            return Err(ParseError::UnexpectedEndOfInput { line: token.line });
        },
        None => {
            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                     line:  token.line, });
        },
    };

    while let Some(&operator) = tokens.peek() {
        let rule = rule_for(operator.kind);
        let Some(infix) = rule.infix else { break };
        if min_power > rule.power {
            break;
        }
        tokens.next();

        left = match infix {
            Infix::Binary => parse_binary(tokens, left, operator)?,
            Infix::Call => parse_call(tokens, left, operator.line)?,
            Infix::Index => parse_index(tokens, left, operator.line)?,
            Infix::Member => parse_member(tokens, left, operator.line)?,
        };
    }

    Ok(left)
}
