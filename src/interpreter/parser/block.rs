use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_separators},
        },
    },
};

/// Parses an indented block introduced by `:`.
///
/// The colon must be the next token. It may be followed by any number of
/// line breaks, then the block opens with `INDENT` and runs until the
/// matching `DEDENT`. Blank separators inside the block are skipped.
///
/// Grammar: `block := ":" NEWLINE* INDENT statement* DEDENT`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `:`.
/// - `after`: Names the construct that owns the block, used in errors
///   (e.g. `"if condition"`).
/// - `line`: Line of the construct, reported if the stream has run out.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// `Expected` when the `:` or the indentation is missing; any error from
/// the nested statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          after: &str,
                          line: usize)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let colon = expect(tokens, TokenKind::Colon, &format!("':' after {after}"), line)?;
    skip_separators(tokens);
    expect(tokens, TokenKind::Indent, &format!("indented block after {after}"), colon.line)?;

    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some(Token { kind: TokenKind::Dedent,
                         .. }) => {
                tokens.next();
                break;
            },
            None | Some(Token { kind: TokenKind::EndOfInput,
                                .. }) => break,
            Some(&token) => statements.push(parse_statement(tokens, token.line)?),
        }
    }

    Ok(statements)
}
