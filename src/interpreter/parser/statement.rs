use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_assignment_tail, parse_expression, parse_precedence, power},
            utils::{expect, parse_comma_separated, parse_identifier, peek_kind},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a compound statement (`if`, `while`, `for`, `def`), which ends with its
///   block;
/// - `break`, `continue` or `return [expr]`;
/// - an assignment (`name = expr`, `name += expr`, `name -= expr`,
///   `target[index] = expr`);
/// - an expression used as a statement.
///
/// Simple statements must be followed by a line break, `;`, the end of the
/// enclosing block or the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   statement.
/// - `line`: Line of the last consumed token, reported if the stream has
///   run out.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// `UnexpectedToken` for a stray indentation or for trailing tokens after a
/// complete statement, plus any error of the statement itself.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };
    let line = token.line;

    match token.kind {
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        TokenKind::While => {
            tokens.next();
            parse_while(tokens, line)
        },
        TokenKind::For => {
            tokens.next();
            parse_for(tokens, line)
        },
        TokenKind::Def => {
            tokens.next();
            parse_function_definition(tokens, line)
        },
        TokenKind::Indent => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                               line }),
        _ => {
            let statement = parse_simple_statement(tokens, line)?;
            expect_terminator(tokens)?;
            Ok(statement)
        },
    }
}

fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek_kind(tokens) {
        Some(TokenKind::Break) => {
            tokens.next();
            Ok(Statement::Break { line })
        },
        Some(TokenKind::Continue) => {
            tokens.next();
            Ok(Statement::Continue { line })
        },
        Some(TokenKind::Return) => {
            tokens.next();
            let value = if at_terminator(tokens) {
                None
            } else {
                Some(parse_expression(tokens, line)?)
            };
            Ok(Statement::Return { value, line })
        },
        Some(TokenKind::Identifier) => match parse_assignment(tokens, line)? {
            Some(statement) => Ok(statement),
            None => parse_expression_statement(tokens, line),
        },
        _ => parse_expression_statement(tokens, line),
    }
}

/// Parses `name = expr`, `name += expr` or `name -= expr`.
///
/// Only applies when the identifier is immediately followed by one of the
/// assignment operators; a lookahead on a cloned iterator decides this
/// without consuming anything.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the statement is something else.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    let compound = match peek_kind(&mut lookahead) {
        Some(TokenKind::Assign) => None,
        Some(TokenKind::PlusAssign) => Some(BinaryOperator::Add),
        Some(TokenKind::MinusAssign) => Some(BinaryOperator::Sub),
        _ => return Ok(None),
    };

    let name = parse_identifier(tokens, "identifier", line)?;
    tokens.next();
    let value = parse_expression(tokens, line)?;

    Ok(Some(match compound {
                None => Statement::Assign { name, value, line },
                Some(op) => Statement::CompoundAssign { name,
                                                        op,
                                                        value,
                                                        line },
            }))
}

/// Parses an expression statement.
///
/// A subscript followed by `=` becomes an index assignment; a variable
/// followed by `=` (for instance `(x) = 1`) becomes an assignment
/// expression.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = match parse_precedence(tokens, power::NONE, line)? {
        Expr::Index { collection, index, .. } if peek_kind(tokens) == Some(TokenKind::Assign) => {
            tokens.next();
            let value = parse_expression(tokens, line)?;
            return Ok(Statement::IndexAssign { target: *collection,
                                               index: *index,
                                               value,
                                               line });
        },
        expr => parse_assignment_tail(tokens, expr)?,
    };

    Ok(Statement::Expression { expr, line })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if <condition>:
///         <block>
///     else if <condition>:
///         <block>
///     else:
///         <block>
/// ```
/// An `else if` is parsed recursively and becomes the only statement of the
/// else branch.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, line)?;
    let then_branch = parse_block(tokens, "if condition", line)?;

    let else_branch = if let Some(otherwise) = tokens.next_if(|t| t.kind == TokenKind::Else) {
        match tokens.next_if(|t| t.kind == TokenKind::If) {
            Some(nested) => vec![parse_if(tokens, nested.line)?],
            None => parse_block(tokens, "'else'", otherwise.line)?,
        }
    } else {
        Vec::new()
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, line)?;
    let body = parse_block(tokens, "while condition", line)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses `for <name> in <expression>: <block>`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let var = parse_identifier(tokens, "loop variable after 'for'", line)?;
    expect(tokens, TokenKind::In, "'in' after loop variable", line)?;
    let iterable = parse_expression(tokens, line)?;
    let body = parse_block(tokens, "for clause", line)?;

    Ok(Statement::For { var,
                        iterable,
                        body,
                        line })
}

/// Parses a function definition.
///
/// Syntax: `def <name>(<param>, ...): <block>`
///
/// The body is stored behind an `Rc` so that every function value created
/// from this definition shares it.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens, "function name after 'def'", line)?;
    expect(tokens, TokenKind::LParen, "'(' after function name", line)?;
    let parameter = |tokens: &mut Peekable<I>, line| {
        parse_identifier(tokens, "parameter name", line)
    };
    let params = parse_comma_separated(tokens, parameter, TokenKind::RParen, line)?;
    let body = parse_block(tokens, "function signature", line)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body: Rc::from(body),
                                         line }))
}

fn at_terminator<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    matches!(peek_kind(tokens),
             None
             | Some(TokenKind::Newline
                    | TokenKind::Semicolon
                    | TokenKind::Dedent
                    | TokenKind::EndOfInput))
}

/// Requires that a simple statement ends here.
///
/// A `Newline` or `;` is consumed; `Dedent` and `EndOfInput` are left for
/// the enclosing block or program.
fn expect_terminator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::Newline | TokenKind::Semicolon) => {
            tokens.next();
            Ok(())
        },
        None | Some(Token { kind: TokenKind::Dedent | TokenKind::EndOfInput,
                            .. }) => Ok(()),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         line:  token.line, }),
    }
}
