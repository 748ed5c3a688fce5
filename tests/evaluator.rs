use std::{error::Error, fs, thread};

use exprfuse::{
    error::{EvalError, FormatError, SyntaxError},
    evaluate,
    interpreter::evaluator::core::Evaluator,
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

        for (line_no, line) in content.lines().enumerate() {
            let Some((source, expected)) = parse_case(line) else {
                continue;
            };
            count += 1;
            match (evaluate(source), expected) {
                (Ok(value), Some(want)) => {
                    assert!((value - want).abs() <= 1e-9 * want.abs().max(1.0),
                            "{path:?}:{}: '{source}' gave {value}, expected {want}",
                            line_no + 1);
                },
                (Err(_), None) => {},
                (result, want) => panic!("{path:?}:{}: '{source}' gave {result:?}, expected {want:?}",
                                         line_no + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a case line of the form `<expression> => <value | error>`.
///
/// Blank lines and lines starting with `#` are skipped.
fn parse_case(line: &str) -> Option<(&str, Option<f64>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (source, expected) = trimmed.rsplit_once("=>")
                                    .unwrap_or_else(|| panic!("Malformed case line: {line}"));
    let expected = match expected.trim() {
        "error" => None,
        text => Some(text.parse::<f64>()
                         .unwrap_or_else(|e| panic!("Bad expected value in '{line}': {e}"))),
    };
    Some((source.trim(), expected))
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn syntax_error(src: &str) -> SyntaxError {
    match evaluate(src) {
        Err(EvalError::Syntax(e)) => e,
        other => panic!("'{src}' should fail with a syntax error, got {other:?}"),
    }
}

fn format_error(src: &str) -> FormatError {
    match evaluate(src) {
        Err(EvalError::Format(e)) => e,
        other => panic!("'{src}' should fail with a format error, got {other:?}"),
    }
}

#[test]
fn single_literals() {
    assert_value("42", 42.0);
    assert_value("3.75", 3.75);
    assert_value("007", 7.0);
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("0", 0.0);
}

#[test]
fn left_associative_operators() {
    assert_value("2+3+4", 9.0);
    assert_value("2*3*4", 24.0);
}

#[test]
fn multiplication_binds_tighter() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2 + 3 * (4 + 5)", 29.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("((7))", 7.0);
    assert_value("2*(3+4)*(5+6)", 154.0);
    assert_value("((1+2)*(3+(4*5)))", 69.0);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_value("2 + 3", 5.0);
    assert_value("2+3", 5.0);
    assert_value("  ( 2 + 3 ) * 4  ", 20.0);
    assert_value("2\t+\n3", 5.0);
    assert_value("2 * ( 3 + 4 ) * ( 5 + 6 )", 154.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5*3", 9.0);
    assert_value("0.25 * 4", 1.0);
}

#[test]
fn missing_closing_paren_is_error() {
    let err = syntax_error("(2+3");
    assert_eq!(err,
               SyntaxError::ExpectedClosingParen { found:    None,
                                                   position: 4, });
    assert_eq!(err.to_string(), "Expected closing parenthesis at position 4");
}

#[test]
fn empty_input_expects_number() {
    assert_eq!(syntax_error(""),
               SyntaxError::ExpectedNumber { found:    None,
                                             position: 0, });
    assert_eq!(syntax_error("   "),
               SyntaxError::ExpectedNumber { found:    None,
                                             position: 3, });
    assert_eq!(syntax_error("()"),
               SyntaxError::ExpectedNumber { found:    Some(')'),
                                             position: 1, });
    assert_eq!(syntax_error("-1"),
               SyntaxError::ExpectedNumber { found:    Some('-'),
                                             position: 0, });
}

#[test]
fn unrecognized_character_is_reported() {
    let err = syntax_error("2+$3");
    assert_eq!(err.character(), Some('$'));
    assert_eq!(err.position(), 2);
    assert_eq!(err.to_string(), "Expected number at position 2, found $");

    assert_eq!(syntax_error("2$"),
               SyntaxError::UnexpectedCharacter { character: '$',
                                                  position:  1, });
    assert_eq!(syntax_error("2 3"),
               SyntaxError::UnexpectedCharacter { character: '3',
                                                  position:  2, });
    assert_eq!(syntax_error("(2+3]"),
               SyntaxError::UnexpectedCharacter { character: ']',
                                                  position:  4, });
    assert_eq!(syntax_error("2-1").to_string(), "Unexpected character: - at position 1");
}

#[test]
fn positions_count_characters_not_bytes() {
    assert_eq!(syntax_error("(1+2) é"),
               SyntaxError::UnexpectedCharacter { character: 'é',
                                                  position:  6, });
    assert_eq!(syntax_error("é"),
               SyntaxError::ExpectedNumber { found:    Some('é'),
                                             position: 0, });
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(syntax_error("2+"),
               SyntaxError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(syntax_error("2 * "),
               SyntaxError::UnexpectedEndOfInput { position: 4 });
    assert_eq!(syntax_error("("),
               SyntaxError::UnexpectedEndOfInput { position: 1 });
}

#[test]
fn stray_closing_paren_is_error() {
    assert_eq!(syntax_error("2)"),
               SyntaxError::UnexpectedCharacter { character: ')',
                                                  position:  1, });
    assert_eq!(syntax_error("(1+2))*3"),
               SyntaxError::UnexpectedCharacter { character: ')',
                                                  position:  5, });
}

#[test]
fn malformed_literal_fails_at_conversion() {
    let err = format_error("1.2.3");
    assert_eq!(err.literal, "1.2.3");
    assert_eq!(err.position, 0);
    assert!(err.source().is_some());

    let err = format_error("2 * .");
    assert_eq!(err.literal, ".");
    assert_eq!(err.position, 4);
    assert!(err.to_string().starts_with("Invalid number '.' at position 4"));

    // The whole literal is consumed before conversion, so the error is about
    // the literal rather than the second dot.
    let err = format_error("1+2..5*3");
    assert_eq!(err.literal, "2..5");
    assert_eq!(err.position, 2);
}

#[test]
fn first_error_wins() {
    // The malformed literal is reached before the stray character.
    assert!(matches!(evaluate("1.2.3 + $"), Err(EvalError::Format(_))));
    // The stray character is reached before the malformed literal.
    assert!(matches!(evaluate("$ + 1.2.3"), Err(EvalError::Syntax(_))));
}

#[test]
fn rules_leave_stop_characters_for_the_caller() {
    let mut evaluator = Evaluator::new("2*3+4)");
    assert_eq!(evaluator.parse_term().unwrap(), 6.0);
    assert_eq!(evaluator.peek(), Some('+'));
    assert_eq!(evaluator.position(), 3);

    let mut evaluator = Evaluator::new("1+2)");
    assert_eq!(evaluator.parse_expression().unwrap(), 3.0);
    assert_eq!(evaluator.peek(), Some(')'));
}

#[test]
fn fresh_instances_are_deterministic() {
    let sources = ["2 + 3 * (4 + 5)", "1.5 + 2.5 * 3", "(2+3", "1.2.3"];
    for source in sources {
        assert_eq!(Evaluator::new(source).evaluate(), Evaluator::new(source).evaluate());
        assert_eq!(evaluate(source), Evaluator::new(source).evaluate());
    }
}

#[test]
fn independent_instances_run_on_separate_threads() {
    let sources = ["2 + 3 * (4 + 5)",
                   "2 + 3 * 4",
                   "(2 + 3) * 4",
                   "2 * (3 + 4) * (5 + 6)",
                   "1.5 + 2.5 * 3"];
    let expected = [29.0, 14.0, 20.0, 154.0, 9.0];

    let results: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> =
            sources.iter()
                   .map(|source| scope.spawn(move || Evaluator::new(source).evaluate()))
                   .collect();
        handles.into_iter()
               .map(|h| h.join().expect("evaluator thread panicked").expect("evaluation failed"))
               .collect()
    });

    assert_eq!(results, expected);
}
