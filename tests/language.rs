use std::{cell::RefCell, rc::Rc};

use indoc::indoc;
use pretty_assertions::assert_eq;
use pylite::{
    Config, Error,
    config::DEFAULT_MAX_CALL_DEPTH,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Interpreter, parser::core::parse_program, tokenizer::tokenize,
    },
    run,
};

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs `src` with the given configuration and returns everything it
/// printed.
fn run_captured_with(src: &str, config: Config) -> Result<String, Error> {
    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut interpreter = Interpreter::with_output(buffer.clone()).with_config(config);

    let program = parse_program(&tokenize(src)?)?;
    interpreter.run(&program)?;

    let bytes = buffer.borrow().clone();
    Ok(String::from_utf8(bytes).expect("print only writes UTF-8"))
}

fn run_captured(src: &str) -> Result<String, Error> {
    run_captured_with(src, Config::default())
}

fn output_of(src: &str) -> String {
    run_captured(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn runtime_error_of(src: &str) -> RuntimeError {
    match run_captured(src) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(out) => panic!("Script succeeded but was expected to fail, printed {out:?}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(output_of("print(1 + 2 * 3)"), "7\n");
    assert_eq!(output_of("print((1 + 2) * 3)"), "9\n");
    assert_eq!(output_of("print(2 ** 3 ** 2)"), "512\n");
    assert_eq!(output_of("print(-2 ** 2)"), "-4\n");
    assert_eq!(output_of("print(10 / 4, 7 % 3, -7 % 3)"), "2.5 1 -1\n");
    assert_eq!(output_of("print(10 - 2 - 3)"), "5\n");
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(output_of("print(1 < 2, 2 <= 1, 3 == 3, 3 != 3, 2 > 1, 1 >= 2)"),
               "1 0 1 0 1 0\n");
    assert_eq!(output_of("print(not 1 == 1)"), "0\n");
    assert_eq!(output_of("print(1 and 0, 1 or 0, not 0, 0 or 0)"), "0 1 1 0\n");
    assert_eq!(output_of("print(True + True, False)"), "2 0\n");
    assert_eq!(output_of("print(not \"\", not \"x\", not 0.5)"), "1 0 0\n");
}

#[test]
fn number_rendering() {
    assert_eq!(output_of("print(1 / 0, -1 / 0, 0 / 0)"), "inf -inf nan\n");
    assert_eq!(output_of("print(0.5, 0.1 + 0.2, 3.0)"), "0.5 0.30000000000000004 3\n");
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(output_of("print(5 % 0)"), "nan\n");
}

#[test]
fn print_formats_every_object() {
    let src = indoc! {"
        def f():
            return 1
        print([1, 2], range(3), f, print, \"raw text\")
        print()
    "};

    assert_eq!(output_of(src),
               "<list> <range> <function f> <function print> raw text\n\n");
}

#[test]
fn strings() {
    assert_eq!(output_of("print(\"ab\" + \"cd\", \"ab\" * 3, 2 * \"x\", \"ab\" * 0)"),
               "abcd ababab xx \n");

    let src = indoc! {"
        s = \"hello\"
        print(s[0], s[-1], s.length, len(s), len(\"\"))
    "};
    assert_eq!(output_of(src), "h o 5 5 0\n");
}

#[test]
fn list_indexing() {
    let src = indoc! {"
        xs = [10, 20, 30]
        print(xs[0], xs[-1], xs[-3], xs[1.9], xs.length, len(xs))
    "};

    assert_eq!(output_of(src), "10 30 10 20 3 3\n");
}

#[test]
fn lists_are_shared_between_aliases() {
    let src = indoc! {"
        a = [1, 2]
        b = a
        b[0] = 99
        print(a[0])

        def fill(xs):
            xs[1] = 7
        fill(b)
        print(a[1], b[1])
    "};

    assert_eq!(output_of(src), "99\n7 7\n");
}

#[test]
fn list_elements_can_be_lists() {
    let src = indoc! {"
        grid = [[1, 2], [3, 4]]
        grid[1][0] = 7
        print(grid[1][0] + grid[0][1])
    "};

    assert_eq!(output_of(src), "9\n");
}

#[test]
fn for_over_range() {
    let src = indoc! {"
        for i in range(5, 0, -1):
            print(i)
    "};
    assert_eq!(output_of(src), "5\n4\n3\n2\n1\n");

    let src = indoc! {"
        total = 0
        for i in range(4):
            total += i
        for i in range(2, 4):
            total += i
        print(total, i)
    "};
    assert_eq!(output_of(src), "11 3\n");

    assert_eq!(output_of("for i in range(0, 1, 0.25):\n    print(i)"),
               "0\n0.25\n0.5\n0.75\n");
    assert_eq!(output_of("for i in range(3, 3):\n    print(i)"), "");
}

#[test]
fn for_over_strings_and_lists() {
    let src = indoc! {"
        for c in \"abc\":
            print(c)
        for x in [1, \"two\", [3]]:
            print(x)
    "};

    assert_eq!(output_of(src), "a\nb\nc\n1\ntwo\n<list>\n");
}

#[test]
fn for_iterates_over_a_snapshot_of_the_list() {
    let src = indoc! {"
        xs = [1, 2]
        for x in xs:
            xs[1] = 5
            print(x)
        print(xs[1])
    "};

    assert_eq!(output_of(src), "1\n2\n5\n");
}

#[test]
fn while_with_break_and_continue() {
    let src = indoc! {"
        i = 0
        total = 0
        while i < 10:
            i += 1
            if i % 2 == 0:
                continue
            if i > 7:
                break
            total += i
        print(total, i)
    "};

    assert_eq!(output_of(src), "16 9\n");
}

#[test]
fn break_only_leaves_the_inner_loop() {
    let src = indoc! {"
        count = 0
        for i in range(3):
            for j in range(3):
                if j == 1:
                    break
                count += 1
        print(count)
    "};

    assert_eq!(output_of(src), "3\n");
}

#[test]
fn if_else_chains() {
    let src = indoc! {"
        def classify(n):
            if n < 0:
                return \"negative\"
            else if n == 0:
                return \"zero\"
            else:
                return \"positive\"
        print(classify(-3), classify(0), classify(8))
    "};

    assert_eq!(output_of(src), "negative zero positive\n");
}

#[test]
fn blocks_do_not_open_a_scope() {
    let src = indoc! {"
        if 1:
            inside = 42
        print(inside)
    "};

    assert_eq!(output_of(src), "42\n");
}

#[test]
fn recursion() {
    let src = indoc! {"
        def fib(n):
            if n < 2:
                return n
            return fib(n - 1) + fib(n - 2)
        print(fib(15))
    "};

    assert_eq!(output_of(src), "610\n");
}

#[test]
fn closures_capture_their_defining_scope() {
    let src = indoc! {"
        def make_adder(n):
            def add(x):
                return x + n
            return add
        add5 = make_adder(5)
        add1 = make_adder(1)
        print(add5(2), add1(2))
    "};

    assert_eq!(output_of(src), "7 3\n");
}

#[test]
fn closures_share_mutable_state() {
    let src = indoc! {"
        def counter():
            count = [0]
            def inc():
                count[0] = count[0] + 1
                return count[0]
            return inc
        c = counter()
        c()
        c()
        print(c())
    "};

    assert_eq!(output_of(src), "3\n");
}

#[test]
fn functions_without_return_value_give_zero() {
    let src = indoc! {"
        def nothing():
            x = 1
        def bare():
            return
        print(nothing(), bare(), print(\"side effect\"))
    "};

    assert_eq!(output_of(src), "side effect\n0 0 0\n");
}

#[test]
fn return_leaves_loops_inside_functions() {
    let src = indoc! {"
        def first_even(xs):
            for x in xs:
                while 1:
                    if x % 2 == 0:
                        return x
                    break
            return -1
        print(first_even([3, 5, 8, 10]), first_even([1]))
    "};

    assert_eq!(output_of(src), "8 -1\n");
}

#[test]
fn statement_assignment_declares_locally() {
    let src = indoc! {"
        x = 1
        def f():
            x = 2
            return x
        print(f(), x)
    "};

    assert_eq!(output_of(src), "2 1\n");
}

#[test]
fn expression_assignment_updates_the_existing_binding() {
    let src = indoc! {"
        x = 1
        def g():
            return (x = 5)
        print(g(), x)
    "};
    assert_eq!(output_of(src), "5 5\n");

    assert_eq!(runtime_error_of("print(y = 3)"),
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 1, });
}

#[test]
fn compound_assignment_needs_an_existing_binding() {
    assert_eq!(output_of("n = 5\nn -= 2\nn += 10\nprint(n)"), "13\n");
    assert_eq!(runtime_error_of("n += 1"),
               RuntimeError::UndefinedVariable { name: "n".to_string(),
                                                 line: 1, });
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(output_of("len = 3\nprint(len)"), "3\n");
}

#[test]
fn functions_are_values() {
    let src = indoc! {"
        def twice(f, x):
            return f(f(x))
        def inc(x):
            return x + 1
        p = print
        p(twice(inc, 1))
    "};

    assert_eq!(output_of(src), "3\n");
}

#[test]
fn semicolons_separate_statements() {
    assert_eq!(output_of("a = 1; b = 2; print(a + b)"), "3\n");
}

#[test]
fn globals_survive_between_runs() {
    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut interpreter = Interpreter::with_output(buffer.clone());

    let first = parse_program(&tokenize("x = 41").unwrap()).unwrap();
    let second = parse_program(&tokenize("print(x + 1)").unwrap()).unwrap();
    interpreter.run(&first).unwrap();
    interpreter.run(&second).unwrap();

    assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), "42\n");
}

#[test]
fn range_rejects_a_zero_step() {
    let src = indoc! {"
        for i in range(1, 10, 0):
            print(i)
    "};

    assert_eq!(run_captured(src), Err(Error::Runtime(RuntimeError::ZeroStep { line: 1 })));
}

#[test]
fn range_requires_numbers() {
    assert!(matches!(runtime_error_of("range(\"3\")"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn escaped_control_signals() {
    assert_eq!(runtime_error_of("x = 1\nbreak"), RuntimeError::BreakOutsideLoop { line: 2 });
    assert_eq!(runtime_error_of("continue"), RuntimeError::ContinueOutsideLoop { line: 1 });
    assert_eq!(runtime_error_of("return 1"), RuntimeError::ReturnOutsideFunction { line: 1 });
    assert_eq!(runtime_error_of("if 1:\n    return"),
               RuntimeError::ReturnOutsideFunction { line: 2 });

    let src = indoc! {"
        def f():
            break
        for i in range(3):
            f()
    "};
    assert_eq!(runtime_error_of(src), RuntimeError::BreakOutsideLoop { line: 2 });
}

#[test]
fn recursion_limit() {
    let src = indoc! {"
        def down(n):
            return down(n + 1)
        down(0)
    "};

    let result = run_captured_with(src, Config::default().with_max_call_depth(16));

    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 16,
                                                                 line:  2, })));
}

#[test]
fn default_recursion_limit_fits_the_stack() {
    let src = indoc! {"
        def f(n):
            return f(n + 1)
        f(0)
    "};

    assert_eq!(run(src),
               Err(Error::Runtime(RuntimeError::RecursionLimit {
                   limit: DEFAULT_MAX_CALL_DEPTH,
                   line:  2,
               })));
}

#[test]
fn scope_is_restored_after_a_failed_call() {
    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut interpreter = Interpreter::with_output(buffer.clone());

    let failing = parse_program(&tokenize("def f(a):\n    return a + \"x\"\nf(1)").unwrap()).unwrap();
    assert!(interpreter.run(&failing).is_err());

    let next = parse_program(&tokenize("print(f)").unwrap()).unwrap();
    interpreter.run(&next).unwrap();

    assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), "<function f>\n");
}

#[test]
fn argument_count_mismatch() {
    let src = indoc! {"
        def f(a):
            return a
        f(1, 2)
    "};
    assert_eq!(runtime_error_of(src),
               RuntimeError::ArgumentCountMismatch { name:     "f".to_string(),
                                                     expected: "1".to_string(),
                                                     found:    2,
                                                     line:     3, });

    assert_eq!(runtime_error_of("len(1, 2)"),
               RuntimeError::ArgumentCountMismatch { name:     "len".to_string(),
                                                     expected: "1".to_string(),
                                                     found:    2,
                                                     line:     1, });
    assert_eq!(runtime_error_of("range()"),
               RuntimeError::ArgumentCountMismatch { name:     "range".to_string(),
                                                     expected: "1, 2 or 3".to_string(),
                                                     found:    0,
                                                     line:     1, });
}

#[test]
fn type_errors() {
    assert_eq!(runtime_error_of("x = 1 + \"a\""),
               RuntimeError::UnsupportedOperands { op:    "+".to_string(),
                                                   left:  "number",
                                                   right: "string",
                                                   line:  1, });
    assert_eq!(runtime_error_of("[1] < [2]"),
               RuntimeError::UnsupportedOperands { op:    "<".to_string(),
                                                   left:  "list",
                                                   right: "list",
                                                   line:  1, });
    assert!(matches!(runtime_error_of("-\"a\""), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error_of("len(5)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error_of("\"ab\" * -1"), RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error_of("not [1]"), RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(runtime_error_of("not print"), RuntimeError::TypeError { .. }));
}

#[test]
fn logic_needs_numbers() {
    assert_eq!(runtime_error_of("print(\"a\" and 1)"),
               RuntimeError::UnsupportedOperands { op:    "and".to_string(),
                                                   left:  "string",
                                                   right: "number",
                                                   line:  1, });
    assert_eq!(runtime_error_of("print([1] or 0)"),
               RuntimeError::UnsupportedOperands { op:    "or".to_string(),
                                                   left:  "list",
                                                   right: "number",
                                                   line:  1, });
    assert_eq!(runtime_error_of("print(\"\" or \"x\")"),
               RuntimeError::UnsupportedOperands { op:    "or".to_string(),
                                                   left:  "string",
                                                   right: "string",
                                                   line:  1, });
}

#[test]
fn huge_string_repetition_fails_cleanly() {
    let src = "print(\"abcdefghijklmnopqrstuvwxyz\" * 1000000000000000000)";
    assert!(matches!(runtime_error_of(src), RuntimeError::InvalidArgument { line: 1, .. }));

    assert!(matches!(runtime_error_of("x = 1000000000 * \"ab\""),
                     RuntimeError::InvalidArgument { .. }));
}

#[test]
fn object_errors() {
    assert_eq!(runtime_error_of("5()"),
               RuntimeError::NotCallable { type_name: "number",
                                           line:      1, });
    assert_eq!(runtime_error_of("for x in 5:\n    print(x)"),
               RuntimeError::NotIterable { type_name: "number",
                                           line:      1, });
    assert_eq!(runtime_error_of("x = 3\nx[0]"),
               RuntimeError::NotSubscriptable { type_name: "number",
                                                line:      2, });
    assert_eq!(runtime_error_of("s = \"abc\"\ns[0] = \"x\""),
               RuntimeError::NotSubscriptable { type_name: "string",
                                                line:      2, });
    assert_eq!(runtime_error_of("[1, 2][2]"),
               RuntimeError::IndexOutOfRange { index:  2,
                                               length: 2,
                                               line:   1, });
    assert_eq!(runtime_error_of("[1, 2][-3]"),
               RuntimeError::IndexOutOfRange { index:  -3,
                                               length: 2,
                                               line:   1, });
    assert_eq!(runtime_error_of("[1][\"0\"]"),
               RuntimeError::IndexNotNumber { type_name: "string",
                                              line:      1, });
    assert_eq!(runtime_error_of("[1].size"),
               RuntimeError::MemberNotFound { member:    "size".to_string(),
                                              type_name: "list",
                                              line:      1, });
    assert_eq!(runtime_error_of("print(missing)"),
               RuntimeError::UndefinedVariable { name: "missing".to_string(),
                                                 line: 1, });
}

#[test]
fn errors_render_with_their_line() {
    assert_eq!(runtime_error_of("\n\nbreak").to_string(),
               "Error on line 3: 'break' outside loop.");
}

#[test]
fn top_level_entry_points() {
    assert_success("x = [1, 2, 3]\nx[0] = x[1] + x[2]");
    assert_success(indoc! {"
        def square(x):
            return x * x
        y = square(4)
    "});
    assert_failure("y = square(4)");
    assert_failure("if 1:\nprint(1)");
    assert_failure("x = \"unterminated");
}
