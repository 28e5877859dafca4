use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Most kinds are recognized directly by the generated lexer. `Indent`,
/// `Dedent` and `EndOfInput` are never matched from text; the
/// [`Tokenizer`](crate::interpreter::tokenizer::Tokenizer) synthesizes them
/// from leading whitespace and the end of the source.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Decimal number literals with at most one `.`, such as `42`, `3.14`,
    /// `1.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// Single or double quoted string literals.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r#"'([^'\\\n]|\\[^\n])*'"#)]
    String,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `in`
    #[token("in")]
    In,
    /// `def`
    #[token("def")]
    Def,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// `None`
    #[token("None")]
    NoneKeyword,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    Power,
    /// `=`
    #[token("=")]
    Assign,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// A line break together with the leading whitespace of the next line.
    #[regex(r"\n[ \t]*", |lex| {
        lex.extras.line += 1;
    })]
    Newline,
    /// Spaces, tabs, carriage returns and feeds inside a line.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Start of a deeper indented block.
    Indent,
    /// End of an indented block.
    Dedent,
    /// End of the source.
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The typed payload of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The value of a number literal.
    Number(f64),
    /// The unescaped contents of a string literal.
    String(String),
}

/// A single token produced by the tokenizer.
///
/// `text` holds the lexeme: the digits of a number, the name of an
/// identifier or keyword, the unescaped contents of a string, or a fixed
/// marker such as `<INDENT>` for synthetic tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The lexeme.
    pub text:    String,
    /// Typed value for number and string literals.
    pub literal: Option<Literal>,
    /// The 1-based source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal payload.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               literal: None,
               line }
    }

    /// Creates a synthetic token (`INDENT`, `DEDENT`, `NEWLINE`,
    /// `END-OF-INPUT`) with its fixed marker text.
    #[must_use]
    pub fn synthetic(kind: TokenKind, line: usize) -> Self {
        let text = match kind {
            TokenKind::Indent => "<INDENT>",
            TokenKind::Dedent => "<DEDENT>",
            TokenKind::Newline => "\\n",
            _ => "",
        };
        Self::new(kind, text, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Indent => f.write_str("indentation"),
            TokenKind::Dedent => f.write_str("dedent"),
            TokenKind::Newline => f.write_str("end of line"),
            TokenKind::EndOfInput => f.write_str("end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Decodes the body of a quoted string literal.
///
/// The slice must include the surrounding quotes. Backslash escapes for
/// `n t r " ' \` are translated; any other escaped character passes through
/// literally.
///
/// # Example
/// ```
/// use pylite::interpreter::lexer::unescape_string;
///
/// assert_eq!(unescape_string(r#""a\tb""#), "a\tb");
/// assert_eq!(unescape_string(r"'it\'s'"), "it's");
/// assert_eq!(unescape_string(r#""\q""#), "q");
/// ```
#[must_use]
pub fn unescape_string(slice: &str) -> String {
    let body = &slice[1..slice.len() - 1];
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some(other) => value.push(other),
            None => value.push('\\'),
        }
    }

    value
}
