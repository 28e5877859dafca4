use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, argument lists and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list (e.g., `]` or `)`).
/// - `line`: Line of the opening delimiter.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - anything other than `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>, usize) -> ParseResult<T>,
    closing: TokenKind,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    let mut line = line;
    if tokens.next_if(|t| t.kind == closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens, line)?);
        match tokens.next() {
            Some(tok) if tok.kind == TokenKind::Comma => line = tok.line,
            Some(tok) if tok.kind == closing => break,
            Some(tok) => {
                return Err(ParseError::Expected { expected: format!("',' or {}",
                                                                    closing_text(closing)),
                                                  found:    tok.to_string(),
                                                  line:     tok.line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are separate token kinds, so they are rejected here without any
/// extra check.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `what`: Describes the expected identifier for the error message.
/// - `line`: Line of the last consumed token.
///
/// # Errors
/// `Expected` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &str,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, what, line).map(|token| token.text.clone())
}

/// Consumes the next token if it has the given kind.
///
/// `line` is the line of the last consumed token. It is reported when the
/// stream has run out.
///
/// # Errors
/// `Expected` naming `what` when the next token is anything else. The
/// offending token is consumed either way.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    what: &str,
                                                    line: usize)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(ParseError::Expected { expected: what.to_string(),
                                                  found:    token.to_string(),
                                                  line:     token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|t| t.kind)
}

/// Skips any run of `Newline` and `;` tokens.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|t| matches!(t.kind, TokenKind::Newline | TokenKind::Semicolon))
                .is_some()
    {}
}

const fn closing_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::RParen => "')'",
        TokenKind::RBracket => "']'",
        TokenKind::RBrace => "'}'",
        _ => "closing delimiter",
    }
}
