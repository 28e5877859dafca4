use std::rc::Rc;

use indoc::indoc;
use pretty_assertions::assert_eq;
use pylite::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_program},
        tokenizer::tokenize,
    },
};

fn try_parse(src: &str) -> ParseResult<Vec<Statement>> {
    parse_program(&tokenize(src)?)
}

fn parse(src: &str) -> Vec<Statement> {
    try_parse(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn parse_expr(src: &str) -> Expr {
    match parse(src).as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("Expected a single expression statement, got {other:?}"),
    }
}

fn num(value: f64) -> Expr {
    Expr::Number { value, line: 1 }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary { left: Box::new(left),
                   op,
                   right: Box::new(right),
                   line: 1 }
}

fn unary(op: UnaryOperator, operand: Expr) -> Expr {
    Expr::Unary { op,
                  operand: Box::new(operand),
                  line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_expr("1 + 2 * 3"),
               binary(num(1.0),
                      BinaryOperator::Add,
                      binary(num(2.0), BinaryOperator::Mul, num(3.0))));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(parse_expr("1 - 2 - 3"),
               binary(binary(num(1.0), BinaryOperator::Sub, num(2.0)),
                      BinaryOperator::Sub,
                      num(3.0)));
}

#[test]
fn exponent_is_right_associative() {
    assert_eq!(parse_expr("2 ** 3 ** 2"),
               binary(num(2.0),
                      BinaryOperator::Pow,
                      binary(num(3.0), BinaryOperator::Pow, num(2.0))));
}

#[test]
fn negation_applies_to_the_whole_power() {
    assert_eq!(parse_expr("-2 ** 2"),
               unary(UnaryOperator::Negate,
                     binary(num(2.0), BinaryOperator::Pow, num(2.0))));
}

#[test]
fn negation_binds_tighter_than_multiplication() {
    assert_eq!(parse_expr("-a * b"),
               binary(unary(UnaryOperator::Negate, var("a")),
                      BinaryOperator::Mul,
                      var("b")));
}

#[test]
fn not_covers_the_comparison() {
    assert_eq!(parse_expr("not 1 == 1"),
               unary(UnaryOperator::Not,
                     binary(num(1.0), BinaryOperator::Equal, num(1.0))));
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(parse_expr("a or b and c"),
               binary(var("a"),
                      BinaryOperator::Or,
                      binary(var("b"), BinaryOperator::And, var("c"))));
}

#[test]
fn booleans_are_numbers() {
    assert_eq!(parse_expr("True == False"),
               binary(num(1.0), BinaryOperator::Equal, num(0.0)));
}

#[test]
fn postfix_chain() {
    let call = Expr::Call { callee:    Box::new(var("f")),
                            arguments: vec![num(1.0), var("x")],
                            line:      1, };
    let index = Expr::Index { collection: Box::new(call),
                              index:      Box::new(num(0.0)),
                              line:       1, };
    let member = Expr::Member { object: Box::new(index),
                                member: "length".to_string(),
                                line:   1, };

    assert_eq!(parse_expr("f(1, x)[0].length"), member);
}

#[test]
fn list_literal() {
    assert_eq!(parse_expr("[]"),
               Expr::List { elements: vec![],
                            line:     1, });
    assert_eq!(parse_expr("[1, \"a\"]"),
               Expr::List { elements: vec![num(1.0),
                                           Expr::String { value: "a".to_string(),
                                                          line:  1, }],
                            line:     1, });
}

#[test]
fn assignment_statement_declares() {
    assert_eq!(parse("x = 1 + 2"),
               vec![Statement::Assign { name:  "x".to_string(),
                                        value: binary(num(1.0), BinaryOperator::Add, num(2.0)),
                                        line:  1, }]);
}

#[test]
fn chained_assignment_updates_the_inner_name() {
    let inner = Expr::Assign { name:  "b".to_string(),
                               value: Box::new(num(3.0)),
                               line:  1, };

    assert_eq!(parse("a = b = 3"),
               vec![Statement::Assign { name:  "a".to_string(),
                                        value: inner,
                                        line:  1, }]);
}

#[test]
fn assignment_inside_an_expression() {
    let assign = Expr::Assign { name:  "x".to_string(),
                                value: Box::new(num(5.0)),
                                line:  1, };

    assert_eq!(parse_expr("print(x = 5)"),
               Expr::Call { callee:    Box::new(var("print")),
                            arguments: vec![assign],
                            line:      1, });
}

#[test]
fn compound_assignment() {
    assert_eq!(parse("total += 2\ntotal -= 1"),
               vec![Statement::CompoundAssign { name:  "total".to_string(),
                                                op:    BinaryOperator::Add,
                                                value: num(2.0),
                                                line:  1, },
                    Statement::CompoundAssign { name:  "total".to_string(),
                                                op:    BinaryOperator::Sub,
                                                value: Expr::Number { value: 1.0,
                                                                      line:  2, },
                                                line:  2, }]);
}

#[test]
fn index_assignment() {
    assert_eq!(parse("xs[0] = 5"),
               vec![Statement::IndexAssign { target: var("xs"),
                                             index:  num(0.0),
                                             value:  num(5.0),
                                             line:   1, }]);
}

#[test]
fn semicolons_separate_statements() {
    assert_eq!(parse("a = 1; b = 2;").len(), 2);
}

#[test]
fn else_if_chain_nests() {
    let src = indoc! {"
        if a:
            x = 1
        else if b:
            x = 2
        else:
            x = 3
    "};

    let assign = |value: f64, line: usize| Statement::Assign { name: "x".to_string(),
                                                               value: Expr::Number { value,
                                                                                     line },
                                                               line };
    let nested = Statement::If { condition:   Expr::Variable { name: "b".to_string(),
                                                               line: 3, },
                                 then_branch: vec![assign(2.0, 4)],
                                 else_branch: vec![assign(3.0, 6)],
                                 line:        3, };

    assert_eq!(parse(src),
               vec![Statement::If { condition:   var("a"),
                                    then_branch: vec![assign(1.0, 2)],
                                    else_branch: vec![nested],
                                    line:        1, }]);
}

#[test]
fn function_definition_shares_its_body() {
    let src = indoc! {"
        def f(a, b):
            return
    "};

    assert_eq!(parse(src),
               vec![Statement::Function(FunctionDef { name:   "f".to_string(),
                                                      params: vec!["a".to_string(),
                                                                   "b".to_string()],
                                                      body:   Rc::from(vec![Statement::Return {
                                                          value: None,
                                                          line:  2,
                                                      }]),
                                                      line:   1, })]);
}

#[test]
fn loops() {
    let src = indoc! {"
        for i in range(3):
            continue
        while 1:
            break
    "};

    let program = parse(src);

    assert!(matches!(&program[0],
                     Statement::For { var, body, line: 1, .. }
                         if var == "i" && body == &[Statement::Continue { line: 2 }]));
    assert!(matches!(&program[1],
                     Statement::While { body, line: 3, .. }
                         if body == &[Statement::Break { line: 4 }]));
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(try_parse("(a + 1) = 2"),
               Err(ParseError::InvalidAssignmentTarget { line: 1 }));
    assert_eq!(try_parse("f() = 2"),
               Err(ParseError::InvalidAssignmentTarget { line: 1 }));
}

#[test]
fn missing_colon() {
    assert!(matches!(try_parse("if x\n    y\n"), Err(ParseError::Expected { line: 1, .. })));
}

#[test]
fn missing_block() {
    assert!(matches!(try_parse("while x:\ny\n"), Err(ParseError::Expected { line: 2, .. })));
}

#[test]
fn unexpected_indentation() {
    assert!(matches!(try_parse("x = 1\n    y = 2\n"),
                     Err(ParseError::UnexpectedToken { line: 2, .. })));
}

#[test]
fn trailing_tokens_after_a_statement() {
    assert!(matches!(try_parse("x = 1 2"), Err(ParseError::UnexpectedToken { line: 1, .. })));
}

#[test]
fn reserved_and_stray_tokens() {
    assert!(matches!(try_parse("x = None"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(try_parse("{"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(try_parse("x = )"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unclosed_call() {
    assert!(try_parse("print(1").is_err());
    assert!(try_parse("print(1 2)").is_err());
}

#[test]
fn empty_program() {
    assert_eq!(parse(""), vec![]);
    assert_eq!(parse("\n\n# nothing\n"), vec![]);
}

#[test]
fn truncated_stream_reports_the_last_line() {
    let call = [Token::new(TokenKind::Identifier, "f", 3), Token::new(TokenKind::LParen, "(", 3)];
    assert_eq!(parse_program(&call), Err(ParseError::UnexpectedEndOfInput { line: 3 }));

    let header = [Token::new(TokenKind::If, "if", 2), Token::new(TokenKind::Identifier, "x", 2)];
    assert_eq!(parse_program(&header), Err(ParseError::UnexpectedEndOfInput { line: 2 }));

    let list = [Token::new(TokenKind::LBracket, "[", 1),
                Token::new(TokenKind::Identifier, "a", 1),
                Token::new(TokenKind::Comma, ",", 4)];
    assert_eq!(parse_program(&list), Err(ParseError::UnexpectedEndOfInput { line: 4 }));
}
