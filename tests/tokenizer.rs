use indoc::indoc;
use pretty_assertions::assert_eq;
use pylite::{
    error::ParseError,
    interpreter::{
        lexer::{Literal, TokenKind},
        tokenizer::{Tokenizer, tokenize},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Tokenizing failed: {e}"))
                 .iter()
                 .map(|t| t.kind)
                 .collect()
}

#[test]
fn simple_statement() {
    use TokenKind::*;

    assert_eq!(kinds("x = 1 + 2\n"),
               vec![Identifier, Assign, Number, Plus, Number, Newline, EndOfInput]);
}

#[test]
fn last_line_without_newline() {
    use TokenKind::*;

    assert_eq!(kinds("print(x)"),
               vec![Identifier, LParen, Identifier, RParen, EndOfInput]);
}

#[test]
fn nested_blocks_close_together() {
    use TokenKind::*;

    let src = indoc! {"
        if a:
            if b:
                c
        d
    "};

    assert_eq!(kinds(src),
               vec![If, Identifier, Colon, Newline, Indent, If, Identifier, Colon, Newline,
                    Indent, Identifier, Newline, Dedent, Dedent, Identifier, Newline,
                    EndOfInput]);
}

#[test]
fn open_blocks_are_closed_at_end_of_input() {
    use TokenKind::*;

    assert_eq!(kinds("while x:\n    y"),
               vec![While, Identifier, Colon, Newline, Indent, Identifier, Dedent, EndOfInput]);
}

#[test]
fn blank_and_comment_lines_produce_nothing() {
    use TokenKind::*;

    let src = "x = 1\n\n   # a note\n\t\ny = 2  # trailing\n";

    assert_eq!(kinds(src),
               vec![Identifier, Assign, Number, Newline, Identifier, Assign, Number, Newline,
                    EndOfInput]);
}

#[test]
fn comment_lines_do_not_affect_indentation() {
    use TokenKind::*;

    let src = indoc! {"
        if a:
                # deeper comment
            b
        # shallower comment
            c
    "};

    assert_eq!(kinds(src),
               vec![If, Identifier, Colon, Newline, Indent, Identifier, Newline, Identifier,
                    Newline, Dedent, EndOfInput]);
}

#[test]
fn tab_counts_as_four_spaces() {
    use TokenKind::*;

    let src = "if a:\n\tb\n    c\n";

    assert_eq!(kinds(src),
               vec![If, Identifier, Colon, Newline, Indent, Identifier, Newline, Identifier,
                    Newline, Dedent, EndOfInput]);
}

#[test]
fn indented_first_line_opens_a_block() {
    use TokenKind::*;

    assert_eq!(kinds("  x\n"), vec![Indent, Identifier, Newline, Dedent, EndOfInput]);
}

#[test]
fn keywords_and_operators() {
    use TokenKind::*;

    assert_eq!(kinds("True False None and or not in def return"),
               vec![True, False, NoneKeyword, And, Or, Not, In, Def, Return, EndOfInput]);
    assert_eq!(kinds("** * += -= == != <= >= < > ; . { }"),
               vec![Power, Star, PlusAssign, MinusAssign, EqualEqual, BangEqual, LessEqual,
                    GreaterEqual, Less, Greater, Semicolon, Dot, LBrace, RBrace, EndOfInput]);
}

#[test]
fn identifiers_that_start_with_keywords() {
    use TokenKind::*;

    assert_eq!(kinds("iffy format notable"),
               vec![Identifier, Identifier, Identifier, EndOfInput]);
}

#[test]
fn number_literals() {
    let tokens = tokenize("3 2.5 .5 7.").unwrap();
    let values = tokens.iter()
                       .filter_map(|t| match t.literal {
                           Some(Literal::Number(n)) => Some(n),
                           _ => None,
                       })
                       .collect::<Vec<_>>();

    assert_eq!(values, vec![3.0, 2.5, 0.5, 7.0]);
}

#[test]
fn string_literals_are_unescaped() {
    let tokens = tokenize(r#"'it\'s' "a\tb" "line\n""#).unwrap();
    let values = tokens.iter()
                       .filter(|t| t.kind == TokenKind::String)
                       .map(|t| t.text.as_str())
                       .collect::<Vec<_>>();

    assert_eq!(values, vec!["it's", "a\tb", "line\n"]);
}

#[test]
fn tokens_carry_their_line() {
    let src = indoc! {"
        a = 1

        # comment
        b = 2
    "};
    let lines = tokenize(src).unwrap()
                             .iter()
                             .filter(|t| t.kind == TokenKind::Identifier)
                             .map(|t| t.line)
                             .collect::<Vec<_>>();

    assert_eq!(lines, vec![1, 4]);
}

#[test]
fn inconsistent_dedent_is_an_error() {
    let src = "if a:\n    b\n  c\n";

    assert_eq!(tokenize(src),
               Err(ParseError::InconsistentIndentation { width: 2,
                                                         line:  3, }));
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(tokenize("x = 1\ny = \"abc\n"),
               Err(ParseError::UnterminatedString { line: 2 }));
}

#[test]
fn unknown_character_is_an_error() {
    assert_eq!(tokenize("x = $"),
               Err(ParseError::UnknownCharacter { character: '$',
                                                  line:      1, }));
}

#[test]
fn iterator_stops_after_end_of_input() {
    let mut tokenizer = Tokenizer::new("x");

    let collected = tokenizer.by_ref()
                             .map(|t| t.map(|t| t.kind))
                             .collect::<Result<Vec<_>, _>>();

    assert_eq!(collected, Ok(vec![TokenKind::Identifier, TokenKind::EndOfInput]));
    assert!(tokenizer.next().is_none());
}

#[test]
fn peek_does_not_consume() {
    let mut tokenizer = Tokenizer::new("a b");

    assert_eq!(tokenizer.peek().map(|t| t.text.clone()), Ok("a".to_string()));
    assert_eq!(tokenizer.next_token().map(|t| t.text), Ok("a".to_string()));
    assert_eq!(tokenizer.next_token().map(|t| t.text), Ok("b".to_string()));
    assert_eq!(tokenizer.next_token().map(|t| t.kind), Ok(TokenKind::EndOfInput));
    assert_eq!(tokenizer.next_token().map(|t| t.kind), Ok(TokenKind::EndOfInput));
}
