use std::fs;

use pretty_assertions::assert_eq;
use reckon::{
    Options,
    error::{EvalError, Expected, LexError, ParseError, RuntimeError},
    evaluate, evaluate_with,
    interpreter::{lexer::TokenKind, value::Number},
    parse,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let cases = extract_cases(&content);
        count += cases.len();

        let expected: Vec<String> =
            cases.iter().map(|(source, outcome)| format!("{source} => {outcome}")).collect();
        let actual: Vec<String> =
            cases.iter().map(|(source, _)| format!("{source} => {}", outcome(source))).collect();
        assert_eq!(expected, actual, "case file {path:?}");
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits `expression => outcome` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|line| {
               let (source, outcome) =
                   line.split_once("=>").unwrap_or_else(|| panic!("Malformed case: {line:?}"));
               (source.to_string(), outcome.trim().to_string())
           })
           .collect()
}

fn outcome(source: &str) -> String {
    match evaluate(source) {
        Ok(n) => n.to_string(),
        Err(EvalError::Lexical(_)) => "error: lexical".to_string(),
        Err(EvalError::Syntax(_)) => "error: syntax".to_string(),
        Err(EvalError::Runtime(_)) => "error: runtime".to_string(),
    }
}

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(n) => assert_eq!(n, expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(n) => panic!("Expression {src:?} evaluated to {n} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn concrete_scenarios() {
    assert_value("2+3*4", Number::Integer(14));
    assert_value("(2+3)*4", Number::Integer(20));
    assert_value("10-2-3", Number::Integer(5));
    assert_value("7/2", Number::Real(3.5));
    assert_value("-(3+4)", Number::Integer(-7));
}

#[test]
fn division_is_always_real() {
    assert_value("8 / 2", Number::Real(4.0));
    assert_value("0 / 5", Number::Real(0.0));
    assert_eq!(evaluate("8 / 2").unwrap().to_string(), "4.0");
    assert_eq!(evaluate("8 * 2").unwrap().to_string(), "16");
}

#[test]
fn redundant_parentheses_do_not_change_the_result() {
    assert_eq!(evaluate("(((2)))"), evaluate("2"));
    assert_eq!(evaluate("((1 + 2)) * (3)"), evaluate("(1 + 2) * 3"));
}

#[test]
fn repeated_signs_flip_by_count() {
    assert_value("--5", Number::Integer(5));
    assert_value("-+-5", Number::Integer(5));
    assert_value("+-5", Number::Integer(-5));
    assert_value("----5", Number::Integer(5));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate(" 1 +   2 "), evaluate("1+2"));
    assert_value("\t1\n+\r\n2 ", Number::Integer(3));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1/0"),
               EvalError::Runtime(RuntimeError::DivisionByZero { offset: 1 }));
    assert_eq!(assert_failure("1 / (3 - 3)"),
               EvalError::Runtime(RuntimeError::DivisionByZero { offset: 2 }));
}

#[test]
fn missing_closing_paren_is_syntax_error() {
    assert_eq!(assert_failure("(1+2"),
               EvalError::Syntax(ParseError::UnexpectedEndOfInput { expected:
                                                                        Expected::Token(TokenKind::RParen),
                                                                    offset:   4, }));
    assert_eq!(assert_failure("(1+2 3"),
               EvalError::Syntax(ParseError::UnexpectedToken { expected:
                                                                   Expected::Token(TokenKind::RParen),
                                                               found:    TokenKind::Integer,
                                                               offset:   5, }));
}

#[test]
fn premature_end_of_input_is_syntax_error() {
    assert_eq!(assert_failure("1+"),
               EvalError::Syntax(ParseError::UnexpectedEndOfInput { expected: Expected::Factor,
                                                                    offset:   2, }));
    assert_eq!(assert_failure(""),
               EvalError::Syntax(ParseError::UnexpectedEndOfInput { expected: Expected::Factor,
                                                                    offset:   0, }));
    assert!(matches!(assert_failure("   "), EvalError::Syntax(_)));
}

#[test]
fn trailing_input_is_syntax_error() {
    assert_eq!(assert_failure("1 2"),
               EvalError::Syntax(ParseError::UnexpectedTrailingTokens { found:  TokenKind::Integer,
                                                                        offset: 2, }));
    assert_eq!(assert_failure("(1))"),
               EvalError::Syntax(ParseError::UnexpectedTrailingTokens { found:  TokenKind::RParen,
                                                                        offset: 3, }));
}

#[test]
fn invalid_character_is_lexical_error() {
    let error = assert_failure("1+@");
    assert_eq!(error,
               EvalError::Lexical(LexError::InvalidCharacter { character: '@',
                                                               offset:    2, }));
    assert_eq!(error.to_string(), "Error at offset 2: Invalid character '@'.");
}

#[test]
fn lexical_error_wins_over_later_syntax_error() {
    // `@` is reached before the parser could notice the unbalanced paren.
    assert!(matches!(assert_failure("(1 + @"), EvalError::Lexical(_)));
}

#[test]
fn oversized_literal_is_lexical_error() {
    assert_value("9223372036854775807", Number::Integer(i64::MAX));
    assert_eq!(assert_failure("1 + 9223372036854775808"),
               EvalError::Lexical(LexError::LiteralTooLarge { literal:
                                                                  "9223372036854775808".to_string(),
                                                              offset:  4, }));
}

#[test]
fn integer_overflow_is_runtime_error() {
    assert_eq!(assert_failure("9223372036854775807 + 1"),
               EvalError::Runtime(RuntimeError::Overflow { offset: 20 }));
    assert_eq!(assert_failure("3037000500 * 3037000500"),
               EvalError::Runtime(RuntimeError::Overflow { offset: 11 }));
    assert_value("-9223372036854775807 - 1", Number::Integer(i64::MIN));
    assert!(matches!(assert_failure("-(-9223372036854775807 - 1)"),
                     EvalError::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn real_operands_promote_the_result() {
    assert_value("1 / 2 + 1", Number::Real(1.5));
    assert_value("-(1 / 4)", Number::Real(-0.25));
    assert_value("3 * (1 / 2)", Number::Real(1.5));
}

#[test]
fn nesting_deeper_than_the_limit_is_rejected() {
    let options = Options { max_depth: 3 };
    assert_eq!(evaluate_with("-((1))", &options), Ok(Number::Integer(-1)));
    assert_eq!(evaluate_with("-(((1)))", &options),
               Err(EvalError::Syntax(ParseError::NestingTooDeep { limit: 3, offset: 3 })));

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(evaluate(&deep),
                     Err(EvalError::Syntax(ParseError::NestingTooDeep { limit: 256, .. }))));
    assert!(matches!(evaluate(&"-".repeat(10_000)),
                     Err(EvalError::Syntax(ParseError::NestingTooDeep { .. }))));
}

#[test]
fn nesting_within_the_limit_is_accepted() {
    let source = format!("{}7{}", "(".repeat(200), ")".repeat(200));
    assert_value(&source, Number::Integer(7));
    assert_value(&format!("{}7", "--".repeat(100)), Number::Integer(7));
}

#[test]
fn long_operator_chains_do_not_overflow_the_stack() {
    let source = vec!["1"; 20_000].join(" + ");
    assert_value(&source, Number::Integer(20_000));

    let source = vec!["1"; 20_000].join(" / ");
    assert_value(&source, Number::Real(1.0));
}

#[test]
fn failed_evaluation_does_not_affect_the_next() {
    assert!(evaluate("1 / 0").is_err());
    assert!(evaluate("(1").is_err());
    assert_value("1 + 1", Number::Integer(2));
}

#[test]
fn parse_exposes_left_associative_tree() {
    assert_eq!(parse("1 - 2 - 3").unwrap().to_string(), "((1 - 2) - 3)");
    assert_eq!(parse("1 / 2 * 3").unwrap().to_string(), "((1 / 2) * 3)");
    assert_eq!(parse("1 + 2 * 3").unwrap().to_string(),
               parse("1 + (2 * 3)").unwrap().to_string());
    assert_ne!(parse("(1 + 2) * 3").unwrap().to_string(),
               parse("1 + 2 * 3").unwrap().to_string());
    assert_eq!(parse("-+-5").unwrap().to_string(), "(-(+(-5)))");
}

#[test]
fn independent_evaluations_run_on_separate_threads() {
    let handles: Vec<_> = (0..8_i64).map(|i| std::thread::spawn(move || evaluate(&format!("{i} * {i}"))))
                                    .collect();
    for (i, handle) in (0..8_i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(Number::Integer(i * i)));
    }
}
