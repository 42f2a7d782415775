use std::fs::{self};

use reckon::{
    error::{Error, LexError, ParseError},
    evaluate, evaluate_all,
    interpreter::{
        evaluator::Evaluator,
        token::{Token, TokenKind},
    },
    util::num::format_number,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_reckon_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut stripped = String::new();

            for line in code.lines() {
                let (source, expected) = match line.split_once("# =>") {
                    Some((source, expected)) => (source, Some(expected.trim())),
                    None => (line, None),
                };
                stripped.push_str(source);
                stripped.push('\n');

                if let Some(expected) = expected {
                    let results = evaluate_all(source).unwrap_or_else(|e| {
                                                          panic!("Example {} in {path:?} failed on {source:?}: {e}",
                                                                 i + 1)
                                                      });
                    let printed = results.into_iter().map(format_number).collect::<Vec<_>>();
                    assert_eq!(printed,
                               [expected],
                               "Example {} in {path:?}: {source:?}",
                               i + 1);
                }
            }

            if let Err(e) = evaluate_all(&stripped) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No reckon examples found in book/src");
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "{src}"),
        Ok(None) => panic!("No expression in {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_nan(src: &str) {
    match evaluate(src) {
        Ok(Some(value)) => assert!(value.is_nan(), "{src} gave {value}"),
        other => panic!("Expression {src:?} did not produce a number: {other:?}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate_all(src) {
        panic!("Expression {src:?} succeeded with {value:?} but was expected to fail")
    }
}

fn assert_single_failure(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("Expression {src:?} succeeded with {value:?} but was expected to fail")
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    assert_value("0", 0.0);
    assert_value("42", 42.0);
    assert_value("007", 7.0);
    assert_value("9007199254740993", 9_007_199_254_740_992.0);
}

#[test]
fn float_literals() {
    assert_value("3.25", 3.25);
    assert_value("0.5 + 0.25", 0.75);
    assert_value("10.0 / 4", 2.5);
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("10 % 4", 2.0);
    assert_value("2 ^ 10", 1024.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("1 + 6 / 2 - 3", 1.0);
    assert_value("((((1))))", 1.0);
    assert_value("2 * (3 + (4 - 1)) ^ 2", 72.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("100 % 7 % 3", 2.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("(2 ^ 3) ^ 2", 64.0);
}

#[test]
fn unary_signs() {
    assert_value("-2 ^ 2", -4.0);
    assert_value("(-2) ^ 2", 4.0);
    assert_value("+5", 5.0);
    assert_value("-3 * -2", 6.0);
    assert_value("2 - -3", 5.0);
    assert_value("-(1 + 2)", -3.0);
    assert_value("-(-3)", 3.0);
}

#[test]
fn remainder_follows_dividend_sign() {
    assert_value("-7 % 3", -1.0);
    assert_value("7 % -3", 1.0);
    assert_value("5.5 % 2", 1.5);
}

#[test]
fn fractional_and_negative_powers() {
    assert_value("4 ^ 0.5", 2.0);
    assert_value("2 ^ (-2)", 0.25);
    assert_nan("(-8) ^ 0.5");
}

#[test]
fn ieee_special_values() {
    assert_nan("NaN + 1");
    assert_nan("Infinity - Infinity");
    assert_nan("0 / 0");
    assert_nan("1 % 0");
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert_value("Infinity", f64::INFINITY);
    assert_value("-Infinity", f64::NEG_INFINITY);
    assert_value("1 / Infinity", 0.0);
}

#[test]
fn keywords_ignore_case() {
    assert_nan("nan");
    assert_nan("NAN");
    assert_value("infinity", f64::INFINITY);
    assert_value("INFINITY", f64::INFINITY);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  1+2*3  ", 7.0);
    assert_value("\t(1\n+\r\n2)\n", 3.0);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(evaluate("").unwrap(), None);
    assert_eq!(evaluate(" \n\t ").unwrap(), None);
    assert_eq!(evaluate_all("").unwrap(), Vec::<f64>::new());
}

#[test]
fn end_of_input_is_idempotent() {
    let mut evaluator = Evaluator::new("1 + 1");
    assert_eq!(evaluator.run().unwrap(), Some(2.0));
    for _ in 0..3 {
        assert_eq!(evaluator.run().unwrap(), None);
    }
}

#[test]
fn consecutive_expressions() {
    let mut evaluator = Evaluator::new("1 + 2\n3 * 4\n(5)");
    assert_eq!(evaluator.run().unwrap(), Some(3.0));
    assert_eq!(evaluator.run().unwrap(), Some(12.0));
    assert_eq!(evaluator.run().unwrap(), Some(5.0));
    assert_eq!(evaluator.run().unwrap(), None);
}

#[test]
fn evaluators_are_independent() {
    let mut first = Evaluator::new("1 2");
    let mut second = Evaluator::new("3");
    assert_eq!(first.run().unwrap(), Some(1.0));
    assert_eq!(second.run().unwrap(), Some(3.0));
    assert_eq!(second.run().unwrap(), None);
    assert_eq!(first.run().unwrap(), Some(2.0));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.math").expect("missing file");
    let results = evaluate_all(&script).unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert_eq!(results, vec![-4.0, 14.0, 20.0, 512.0, 2.5, 1.0]);
}

#[test]
fn malformed_input_is_error() {
    assert_failure("2 +");
    assert_failure("(2");
    assert_failure("2 $ 3");
    assert_failure("2 )");
    assert_failure(")");
    assert_failure("()");
    assert_failure("* 2");
    assert_failure("--2");
    assert_failure("2 ^ -1");
    assert_failure("1.");
    assert_failure(".5");
    assert_failure("1e5");
    assert_failure("inf");
}

#[test]
fn unrecognized_character_is_lex_error() {
    let err = evaluate("2 $ 3").unwrap_err();
    assert_eq!(err,
               Error::Lex(LexError::UnrecognizedCharacter { character: '$',
                                                            position:  2, }));
    assert_eq!(err.to_string(),
               "Error at position 2: Unrecognized character '$'.");
}

#[test]
fn missing_operand_is_parse_error() {
    let err = evaluate("2 +").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: "a number or '('",
                                                               position: 3, }));
}

#[test]
fn missing_closing_paren_is_parse_error() {
    let err = evaluate("(2").unwrap_err();
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedEndOfInput { expected: "')'", .. })),
            "{err:?}");
}

#[test]
fn trailing_token_is_parse_error() {
    let err = evaluate("2 )").unwrap_err();
    match err {
        Error::Parse(ParseError::UnexpectedToken { expected, found }) => {
            assert_eq!(expected, "an operator or end of input");
            assert_eq!(found.position(), 2);
            assert_eq!(err_message("2 )"),
                       "Error at position 2: Expected an operator or end of input, found ')'.");
        },
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn error_aborts_before_later_expressions() {
    let mut evaluator = Evaluator::new("1 + # 2");
    assert!(evaluator.run().is_err());
    assert!(evaluate_all("1 2 $").is_err());
}

#[test]
fn single_expression_rejects_anything_after_it() {
    assert_single_failure("2 3 )");
    assert_single_failure("2 3 $");
    assert_single_failure("2 3");
    assert_single_failure("(1) (2)");
    assert_value("2 + 3 ", 5.0);

    let err = evaluate("2 3 )").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { expected: "end of input",
                                                          found:    Token::new(TokenKind::Integer,
                                                                               "3",
                                                                               2), }));
    assert_eq!(err.to_string(),
               "Error at position 2: Expected end of input, found integer '3'.");
}

#[test]
fn evaluator_stops_after_first_error() {
    let mut evaluator = Evaluator::new("1 $ 2");
    assert!(matches!(evaluator.run(),
                     Err(Error::Lex(LexError::UnrecognizedCharacter { character: '$', .. }))));
    assert_eq!(evaluator.run().unwrap(), None);
    assert_eq!(evaluator.run().unwrap(), None);

    let results = Evaluator::new("1 $ 2").filter_map(Result::ok)
                                         .collect::<Vec<_>>();
    assert_eq!(results, Vec::<f64>::new());
    assert_eq!(Evaluator::new("3 4 )").count(), 2);
}

#[test]
fn newline_before_sign_continues_expression() {
    assert_eq!(evaluate_all("1\n-1").unwrap(), vec![0.0]);
    assert_eq!(evaluate_all("1\n(-1)").unwrap(), vec![1.0, -1.0]);
    assert_eq!(evaluate_all("1\n2").unwrap(), vec![1.0, 2.0]);
}

fn err_message(src: &str) -> String {
    evaluate(src).unwrap_err().to_string()
}
