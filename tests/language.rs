use std::fs;

use quill::{
    Environment, RunError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "quill"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = quill::get_result(&source, false) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn run(source: &str) -> Result<String, RunError> {
    let env = Environment::new();
    run_source(source, &env).map(|value| value.to_string())
}

fn assert_value(source: &str, expected: &str) {
    match run(source) {
        Ok(rendered) => assert_eq!(rendered, expected, "source: {source}"),
        Err(e) => panic!("Script failed: {e}\nSource: {source}"),
    }
}

fn assert_error(source: &str, expected: &str) {
    match run(source) {
        Ok(rendered) => {
            panic!("Script produced {rendered} but was expected to fail\nSource: {source}")
        },
        Err(e) => assert_eq!(e.to_string(), expected, "source: {source}"),
    }
}

fn parse(source: &str) -> (quill::ast::Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(ToString::to_string).collect();
    (program, errors)
}

fn assert_parses_to(source: &str, expected: &str) {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(),
            "unexpected parse errors for {source}: {errors:?}");
    assert_eq!(program.to_string(), expected, "source: {source}");
}

// ------------------------------- lexer ---------------------------------

#[test]
fn lexer_produces_expected_token_stream() {
    let source = "let five = 5;\n\
                  let add = fn(x, y) { x + y; };\n\
                  \"hello\";\n\
                  [1, 2];\n\
                  {\"key\": true};\n\
                  10 == 10; 9 != 8;";

    let expected = [(TokenKind::Let, "let"),
                    (TokenKind::Ident, "five"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Int, "5"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Ident, "add"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Function, "fn"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Ident, "x"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Ident, "y"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Ident, "x"),
                    (TokenKind::Plus, "+"),
                    (TokenKind::Ident, "y"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Str, "hello"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::LBracket, "["),
                    (TokenKind::Int, "1"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Int, "2"),
                    (TokenKind::RBracket, "]"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Str, "key"),
                    (TokenKind::Colon, ":"),
                    (TokenKind::True, "true"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Int, "10"),
                    (TokenKind::Eq, "=="),
                    (TokenKind::Int, "10"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Int, "9"),
                    (TokenKind::NotEq, "!="),
                    (TokenKind::Int, "8"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Eof, "")];

    let mut lexer = Lexer::new(source);
    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn lexer_terminates_and_stays_legal_on_supported_bytes() {
    let source = "abc _under score9 123 \t\r\n + - * / < > = ! ( ) { } [ ] , ; \"str\"";
    let mut lexer = Lexer::new(source);

    for _ in 0..100 {
        let token = lexer.next_token();
        assert_ne!(token.kind, TokenKind::Illegal, "literal: {}", token.literal);
        if token.kind == TokenKind::Eof {
            return;
        }
    }
    panic!("lexer did not reach EOF within the token budget");
}

#[test]
fn lexer_marks_unknown_bytes_illegal() {
    let mut lexer = Lexer::new("1 @ 2");

    assert_eq!(lexer.next_token().kind, TokenKind::Int);

    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.literal, "@");

    assert_eq!(lexer.next_token().kind, TokenKind::Int);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn lexer_reads_strings_without_escape_processing() {
    let mut lexer = Lexer::new(r#""a\nb""#);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.literal, r"a\nb");

    // An unterminated string collapses to an empty literal.
    let mut lexer = Lexer::new(r#""abc"#);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.literal, "");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

// ------------------------------- parser --------------------------------

#[test]
fn let_and_return_statements_parse() {
    assert_parses_to("let x = 5;", "let x = 5;");
    assert_parses_to("let y = true;", "let y = true;");
    assert_parses_to("let foobar = y;", "let foobar = y;");
    assert_parses_to("return 5;", "return 5;");
    assert_parses_to("return x + y", "return (x + y);");
}

#[test]
fn operator_precedence_is_resolved() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_parses_to(source, expected);
    }
}

#[test]
fn parenthesized_reprinting_round_trips() {
    let sources = ["a + b * c - d / e",
                   "!-a == b < c",
                   "add(a, b, fn(x) { x * 2; }(3))",
                   "if (x < y) { x } else { y }",
                   "let grid = [[1, 2], [3, 4]]; grid[1][0]"];

    for source in sources {
        let (first, errors) = parse(source);
        assert!(errors.is_empty(), "{source}: {errors:?}");

        let reprinted = first.to_string();
        let (second, errors) = parse(&reprinted);
        assert!(errors.is_empty(), "{reprinted}: {errors:?}");

        assert_eq!(second.to_string(), reprinted, "source: {source}");
    }
}

#[test]
fn conditional_and_function_parsing() {
    assert_parses_to("if (x < y) { x }", "if(x < y) x");
    assert_parses_to("if (x < y) { x } else { y }", "if(x < y) x else y");
    assert_parses_to("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
    assert_parses_to("fn() { 5 }", "fn() 5");
    assert_parses_to("my[0]", "(my[0])");
    assert_parses_to("{\"a\": 1, 2: b}", "{a: 1, 2: b}");
    assert_parses_to("[]", "[]");
    assert_parses_to("{}", "{}");
}

#[test]
fn parse_errors_accumulate_without_stopping() {
    let (_, errors) = parse("let x 5; let = 10; let 838383;");

    assert!(errors.len() >= 3, "errors: {errors:?}");
    assert!(errors.contains(&"expected next token to be =, got INT instead".to_string()),
            "errors: {errors:?}");
    assert!(errors.contains(&"expected next token to be IDENT, got = instead".to_string()),
            "errors: {errors:?}");
    assert!(errors.contains(&"expected next token to be IDENT, got INT instead".to_string()),
            "errors: {errors:?}");
}

#[test]
fn missing_prefix_rule_is_reported() {
    let (_, errors) = parse("+5");
    assert!(errors.contains(&"no prefix parse function for + found".to_string()),
            "errors: {errors:?}");
}

#[test]
fn oversized_integer_literal_is_a_parse_error() {
    let (_, errors) = parse("9223372036854775808");
    assert!(errors.contains(&"could not parse \"9223372036854775808\" as integer".to_string()),
            "errors: {errors:?}");
}

// ------------------------------ evaluator ------------------------------

#[test]
fn integer_arithmetic() {
    assert_value("5", "5");
    assert_value("-10", "-10");
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("2 * 2 * 2 * 2 * 2", "32");
    assert_value("-50 + 100 + -50", "0");
    assert_value("50 / 2 * 2 + 10", "60");
    assert_value("3 * (3 * 3) + 10", "37");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
    assert_value("5 + 5 * 2", "15");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_value("7 / 2", "3");
    assert_value("-7 / 2", "-3");
    assert_value("7 / -2", "-3");
}

#[test]
fn integer_overflow_wraps() {
    assert_value("9223372036854775807 + 1", "-9223372036854775808");
    assert_value("-(-9223372036854775807 - 1)", "-9223372036854775808");
}

#[test]
fn division_by_zero_is_reported() {
    assert_error("5 / 0", "ERROR: division by zero");
    assert_error("let x = 10; x / (5 - 5)", "ERROR: division by zero");
}

#[test]
fn boolean_operators() {
    assert_value("true", "true");
    assert_value("false", "false");
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 1", "false");
    assert_value("1 != 2", "true");
    assert_value("true == true", "true");
    assert_value("false == false", "true");
    assert_value("true != false", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) == true", "false");
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!5", "false");
    assert_value("!!true", "true");
    assert_value("!!5", "true");
    assert_value("!0", "false");
    assert_value("!\"\"", "false");
}

#[test]
fn conditionals_follow_truthiness() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (false) { 10 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (1 < 2) { 10 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
    // Zero, the empty string and the empty array are all truthy.
    assert_value("if (0) { 1 } else { 2 }", "1");
    assert_value("if (\"\") { 1 } else { 2 }", "1");
    assert_value("if ([]) { 1 } else { 2 }", "1");
}

#[test]
fn return_statements_unwind() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("return 2 * 5; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
}

#[test]
fn return_escapes_nested_blocks() {
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_value("let f = fn() { if (true) { if (true) { return 3; } return 2; } return 1; }; f()",
                 "3");
}

#[test]
fn return_stops_at_the_call_boundary() {
    assert_value("let f = fn() { return 7; 100; }; f() + 1", "8");
}

#[test]
fn let_bindings() {
    assert_value("let a = 5; a;", "5");
    assert_value("let a = 5 * 5; a;", "25");
    assert_value("let a = 5; let b = a; b;", "5");
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    assert_value("let x = 5; let y = 10; x + y;", "15");
    // A trailing let yields no printable value.
    assert_value("let a = 5;", "null");
}

#[test]
fn inner_bindings_shadow_outer_ones() {
    assert_value("let x = 5; let f = fn() { let x = 10; x }; f() + x", "15");
}

#[test]
fn runtime_errors_carry_their_taxonomy_messages() {
    assert_error("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "ERROR: unknown operator: -BOOLEAN");
    assert_error("true + false;", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }",
                 "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foo", "ERROR: identifier not found: foo");
    assert_error("\"Hello\" - \"World\"", "ERROR: unknown operator: STRING - STRING");
}

#[test]
fn errors_short_circuit_sibling_evaluation() {
    // The failing left operand is reported, not the one that would fail on
    // the right.
    assert_error("foo + bar", "ERROR: identifier not found: foo");
    assert_error("[1, foo, bar]", "ERROR: identifier not found: foo");
    assert_error("len(foo, bar)", "ERROR: identifier not found: foo");
    assert_error("{foo: 1}", "ERROR: identifier not found: foo");
}

#[test]
fn string_concatenation() {
    assert_value("\"Hello\" + \" \" + \"World\"", "Hello World");
    assert_value("let greet = fn(name) { \"hi, \" + name }; greet(\"quill\")",
                 "hi, quill");
    assert_error("\"a\" == \"a\"", "ERROR: unknown operator: STRING == STRING");
    assert_error("\"a\" != \"b\"", "ERROR: unknown operator: STRING != STRING");
}

#[test]
fn function_values_render_with_their_body() {
    assert_value("fn(x) { x + 2; }", "fn(x) {\n(x + 2)\n}");
    assert_value("len", "builtin function");
}

#[test]
fn function_application() {
    assert_value("let identity = fn(x) { x; }; identity(5);", "5");
    assert_value("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_value("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_value("fn(x) { x; }(5)", "5");
    assert_value("let f = fn(x, y){ x + y; }; f(2, 3)", "5");
}

#[test]
fn arity_mismatches_are_reported() {
    assert_value("let f = fn() { 1 }; f()", "1");
    assert_error("fn(x) { x; }(1, 2)", "ERROR: wrong number of arguments. got=2, want=1");
    assert_error("let f = fn(x, y) { x + y }; f(1)",
                 "ERROR: wrong number of arguments. got=1, want=2");
}

#[test]
fn call_targets_must_be_callable() {
    assert_error("5(1)", "ERROR: not a function: INTEGER");
    assert_error("let x = true; x()", "ERROR: not a function: BOOLEAN");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_value("let newAdder = fn(x){ fn(y){ x + y } }; let addTwo = newAdder(2); addTwo(3)",
                 "5");
    assert_value("let compose = fn(f, g) { fn(x) { g(f(x)) } }; \
                  let inc = fn(x) { x + 1 }; \
                  let double = fn(x) { x * 2 }; \
                  compose(inc, double)(10)",
                 "22");
    // The captured environment is shared, not copied: later rebindings in
    // the defining scope are visible at call time.
    assert_value("let x = 5; let f = fn() { x }; let x = 10; f()", "10");
}

#[test]
fn higher_order_functions_and_recursion() {
    assert_value("let apply = fn(f, a, b) { f(a, b) }; \
                  let add = fn(a, b) { a + b }; \
                  apply(add, 2, 3)",
                 "5");
    assert_value("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10)",
                 "55");
    assert_value("let fact = fn(n) { if (n == 0) { 1 } else { n * fact(n - 1) } }; fact(10)",
                 "3628800");
}

#[test]
fn array_literals_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[1, 2, 3][0]", "1");
    assert_value("[1, 2, 3][1 + 1]", "3");
    assert_value("let i = 0; [1][i];", "1");
    assert_value("let myArray = [1, 2, 3]; myArray[2];", "3");
    assert_value("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6");
    assert_value("let a = [1, 2, 3]; a[1] + a[2]", "5");
    assert_value("[[1, 2], [3, 4]][1][0]", "3");
}

#[test]
fn out_of_range_array_indices_yield_null() {
    assert_value("[1, 2, 3][3]", "null");
    assert_value("[1, 2, 3][-1]", "null");
    assert_value("[][0]", "null");
}

#[test]
fn index_operator_type_errors() {
    assert_error("5[0]", "ERROR: index operator not supported: INTEGER");
    assert_error("\"abc\"[0]", "ERROR: index operator not supported: STRING");
    assert_error("[1, 2][true]", "ERROR: index operator not supported: ARRAY");
}

#[test]
fn hash_literals_and_lookup() {
    assert_value("let h = {\"k\": 1, true: 2, 3: \"v\"}; h[\"k\"] + h[true]", "3");
    assert_value("let h = {\"k\": 1, true: 2, 3: \"v\"}; h[3]", "v");
    assert_value("{\"one\": 1}", "{one: 1}");
    assert_value("{}", "{}");
    assert_value("{true: 5}[true]", "5");
    assert_value("{5: 5}[5]", "5");
    assert_value("{\"foo\": 5}[\"bar\"]", "null");
    assert_value("{}[\"anything\"]", "null");
    // Keys are compared by value, not by spelling position.
    assert_value("let key = \"k\"; {\"k\": 5}[key]", "5");
    // Duplicate keys resolve last-writer-wins.
    assert_value("{\"a\": 1, \"a\": 2}[\"a\"]", "2");
}

#[test]
fn unusable_hash_keys_are_reported() {
    assert_error("{\"name\": \"quill\"}[fn(x) { x }]",
                 "ERROR: unusable as hash key: FUNCTION");
    assert_error("{[1, 2]: \"two\"}", "ERROR: unusable as hash key: ARRAY");
    assert_error("{{}: 1}", "ERROR: unusable as hash key: HASH");
}

#[test]
fn equality_on_composites_is_by_identity() {
    assert_value("[1, 2] == [1, 2]", "false");
    assert_value("let a = [1, 2]; a == a", "true");
    assert_value("let a = [1, 2]; let b = a; a == b", "true");
    assert_value("{\"a\": 1} == {\"a\": 1}", "false");
    assert_value("let f = fn(x) { x }; f == f", "true");
    // Mismatched scalar kinds compare unequal instead of failing.
    assert_value("5 == true", "false");
    assert_value("5 != true", "true");
    // Null only has one identity.
    assert_value("if (false) { 1 } == if (false) { 2 }", "true");
}

#[test]
fn len_builtin() {
    assert_value("len(\"\")", "0");
    assert_value("len(\"four\")", "4");
    assert_value("len(\"hello world\")", "11");
    assert_value("len([1, 2, 3])", "3");
    assert_value("len([])", "0");
    assert_error("len(1)", "ERROR: argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "ERROR: wrong number of arguments. got=2, want=1");
}

#[test]
fn array_builtins() {
    assert_value("first([1, 2, 3])", "1");
    assert_value("first([])", "null");
    assert_value("last([1, 2, 3])", "3");
    assert_value("last([])", "null");
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest(rest([1, 2, 3]))", "[3]");
    assert_value("rest([1])", "[]");
    assert_value("rest([])", "null");
    assert_value("push([], 1)", "[1]");
    assert_value("push([1], 2)", "[1, 2]");
    // push is persistent: the original array is untouched.
    assert_value("let a = [1]; let b = push(a, 2); len(a)", "1");
    assert_error("first(1)", "ERROR: argument to `first` must be ARRAY, got INTEGER");
    assert_error("last(\"abc\")", "ERROR: argument to `last` must be ARRAY, got STRING");
    assert_error("rest(1)", "ERROR: argument to `rest` must be ARRAY, got INTEGER");
    assert_error("push(1, 1)", "ERROR: argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "ERROR: wrong number of arguments. got=1, want=2");
}

#[test]
fn every_declared_builtin_resolves() {
    use quill::interpreter::evaluator::builtin::{BUILTIN_FUNCTIONS, lookup};

    for name in BUILTIN_FUNCTIONS {
        assert!(lookup(name).is_some(), "builtin {name} missing from table");
    }
    assert!(lookup("missing").is_none());
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_value("let len = 5; len", "5");
    assert_error("let len = 5; len([1])", "ERROR: not a function: INTEGER");
}

#[test]
fn parse_errors_abort_before_evaluation() {
    let env = Environment::new();
    match run_source("let x 5;", &env) {
        Err(RunError::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected a parse failure, got {other:?}"),
    }
    // Nothing from the broken line leaked into the environment.
    assert!(env.borrow().get("x").is_none());
}
