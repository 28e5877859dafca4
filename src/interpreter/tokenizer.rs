use std::collections::VecDeque;

use logos::{Lexer, Logos};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Literal, Token, TokenKind, unescape_string},
        parser::core::ParseResult,
    },
};

/// Number of columns a tab character contributes to a line's indentation.
///
/// This is a fixed policy: a tab always counts as four spaces, regardless
/// of its position in the leading whitespace.
pub const TAB_WIDTH: usize = 4;

/// Produces the token stream of a source text, synthesizing block
/// structure from indentation.
///
/// The tokenizer keeps a stack of indentation widths starting at `[0]`. At
/// the first token of every non-blank line it compares the line's width to
/// the top of the stack:
/// - deeper: push the width and emit one `Indent`;
/// - shallower: pop every deeper level, emitting one `Dedent` per pop, and
///   fail if no remaining level matches the width exactly;
/// - equal: emit nothing.
///
/// Blank and comment-only lines produce no tokens at all. Every other line
/// ends with a single `Newline`. At the end of the source one `Dedent` is
/// emitted for every level still open, followed by `EndOfInput`.
///
/// Tokens are produced on demand; [`Tokenizer::peek`] provides one token of
/// lookahead.
pub struct Tokenizer<'src> {
    lexer:        Lexer<'src, TokenKind>,
    indent_stack: Vec<usize>,
    pending:      VecDeque<Token>,
    peeked:       Option<Token>,
    /// Width of the line whose first token has not been seen yet. `None`
    /// once the current line has produced a token.
    line_width:   Option<usize>,
    finished:     bool,
    exhausted:    bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let leading = source.chars()
                            .take_while(|c| matches!(c, ' ' | '\t'))
                            .collect::<String>();

        Self { lexer:        TokenKind::lexer(source),
               indent_stack: vec![0],
               pending:      VecDeque::new(),
               peeked:       None,
               line_width:   Some(indentation_width(&leading)),
               finished:     false,
               exhausted:    false, }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until [`Tokenizer::next_token`]
    /// is called.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        if self.peeked.is_none() {
            let token = self.produce()?;
            self.peeked = Some(token);
        }
        self.peeked
            .as_ref()
            .ok_or(ParseError::UnexpectedEndOfInput { line: self.lexer.extras.line })
    }

    /// Consumes and returns the next token.
    ///
    /// After the source is exhausted this keeps returning `EndOfInput`.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.produce()
    }

    /// Returns the indentation levels currently open, innermost last.
    #[must_use]
    pub fn indent_levels(&self) -> &[usize] {
        &self.indent_stack
    }

    fn produce(&mut self) -> ParseResult<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let line = self.lexer.extras.line;
            match self.lexer.next() {
                None => {
                    self.finish(line);
                },
                Some(Err(())) => return Err(self.lex_error(line)),
                Some(Ok(TokenKind::Newline)) => {
                    let width = indentation_width(&self.lexer.slice()[1..]);
                    let line_had_tokens = self.line_width.is_none();
                    self.line_width = Some(width);

                    if line_had_tokens {
                        return Ok(Token::synthetic(TokenKind::Newline, line));
                    }
                },
                Some(Ok(kind)) => {
                    if let Some(width) = self.line_width.take() {
                        self.apply_indentation(width, line)?;
                    }
                    let token = self.make_token(kind, line)?;
                    self.pending.push_back(token);
                },
            }
        }
    }

    /// Queues the `Indent`/`Dedent` tokens for a line of the given width.
    fn apply_indentation(&mut self, width: usize, line: usize) -> ParseResult<()> {
        let top = self.indent_stack.last().copied().unwrap_or(0);

        if width > top {
            self.indent_stack.push(width);
            self.pending.push_back(Token::synthetic(TokenKind::Indent, line));
            return Ok(());
        }

        while self.indent_stack.last().is_some_and(|&level| level > width) {
            self.indent_stack.pop();
            self.pending.push_back(Token::synthetic(TokenKind::Dedent, line));
        }

        if self.indent_stack.last() != Some(&width) {
            return Err(ParseError::InconsistentIndentation { width, line });
        }

        Ok(())
    }

    /// Closes every open indentation level and queues `EndOfInput`.
    fn finish(&mut self, line: usize) {
        if self.finished {
            self.pending.push_back(Token::synthetic(TokenKind::EndOfInput, line));
            return;
        }
        self.finished = true;

        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.pending.push_back(Token::synthetic(TokenKind::Dedent, line));
        }
        self.pending.push_back(Token::synthetic(TokenKind::EndOfInput, line));
    }

    fn make_token(&self, kind: TokenKind, line: usize) -> ParseResult<Token> {
        let slice = self.lexer.slice();

        match kind {
            TokenKind::Number => {
                let value =
                    slice.parse::<f64>()
                         .map_err(|_| ParseError::InvalidNumber { text: slice.to_string(),
                                                                  line })?;
                Ok(Token { kind,
                           text: slice.to_string(),
                           literal: Some(Literal::Number(value)),
                           line })
            },
            TokenKind::String => {
                let value = unescape_string(slice);
                Ok(Token { kind,
                           text: value.clone(),
                           literal: Some(Literal::String(value)),
                           line })
            },
            _ => Ok(Token::new(kind, slice, line)),
        }
    }

    fn lex_error(&self, line: usize) -> ParseError {
        match self.lexer.slice().chars().next() {
            Some('"' | '\'') => ParseError::UnterminatedString { line },
            Some(character) => ParseError::UnknownCharacter { character, line },
            None => ParseError::UnexpectedEndOfInput { line },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Token>;

    /// Yields tokens up to and including `EndOfInput`, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.as_ref().map_or(true, |t| t.kind == TokenKind::EndOfInput) {
            self.exhausted = true;
        }
        Some(token)
    }
}

/// Computes the width of a run of leading whitespace.
///
/// A space counts as one column and a tab as [`TAB_WIDTH`] columns.
///
/// # Example
/// ```
/// use pylite::interpreter::tokenizer::indentation_width;
///
/// assert_eq!(indentation_width("    "), 4);
/// assert_eq!(indentation_width("\t  "), 6);
/// ```
#[must_use]
pub fn indentation_width(whitespace: &str) -> usize {
    whitespace.chars()
              .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
              .sum()
}

/// Tokenizes a whole source text.
///
/// Drives a [`Tokenizer`] to completion and returns every token, ending
/// with `EndOfInput`. The first lexical error aborts tokenization.
///
/// # Example
/// ```
/// use pylite::interpreter::{lexer::TokenKind, tokenizer::tokenize};
///
/// let tokens = tokenize("if x:\n    y\n").unwrap();
/// let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![TokenKind::If,
///                 TokenKind::Identifier,
///                 TokenKind::Colon,
///                 TokenKind::Newline,
///                 TokenKind::Indent,
///                 TokenKind::Identifier,
///                 TokenKind::Newline,
///                 TokenKind::Dedent,
///                 TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    Tokenizer::new(source).collect()
}
