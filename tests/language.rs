use approx::assert_relative_eq;
use mathcheck::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::{Evaluator, Limits},
        parser::core::parse,
    },
    safe_eval,
};

fn assert_value(src: &str, expected: f64) {
    match safe_eval(src) {
        Ok(v) => assert_relative_eq!(v, expected, max_relative = 1e-12),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) {
    match safe_eval(src) {
        Err(EvalError::Syntax(_)) => {},
        other => panic!("{src:?} should be a syntax error, got {other:?}"),
    }
}

fn assert_unsupported(src: &str) {
    match safe_eval(src) {
        Err(EvalError::UnsupportedConstruct { .. }) => {},
        other => panic!("{src:?} should be unsupported, got {other:?}"),
    }
}

fn assert_tree(src: &str, rendered: &str) {
    let tree = parse(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"));
    assert_eq!(tree.to_string(), rendered, "tree of {src:?}");
}

#[test]
fn basic_arithmetic() {
    assert_value("2+2", 4.0);
    assert_value("3*(4-1)/2", 4.5);
    assert_value("5**2", 25.0);
    assert_value("10//3", 3.0);
    assert_value("7 % 3", 1.0);
    assert_value("1/4", 0.25);
    assert_value("  8 - 10  ", -2.0);
    assert_value("1\t+\n2\x0c*\r3", 7.0);
}

#[test]
fn precedence_and_associativity() {
    assert_tree("1 + 2 * 3", "(1 + (2 * 3))");
    assert_tree("1 - 2 - 3", "((1 - 2) - 3)");
    assert_tree("8 / 4 // 2", "((8 / 4) // 2)");
    assert_tree("2 ** 3 ** 2", "(2 ** (3 ** 2))");
    assert_tree("-2 ** 2", "(-(2 ** 2))");
    assert_tree("2 ** -1", "(2 ** (-1))");
    assert_tree("--2", "(-(-2))");
    assert_tree("(1 + 2) * 3", "((1 + 2) * 3)");

    assert_value("2 ** 3 ** 2", 512.0);
    assert_value("-2 ** 2", -4.0);
    assert_value("(-2) ** 2", 4.0);
    assert_value("2 ** -1", 0.5);
    assert_value("-+-3", 3.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value(".5 + 5.", 5.5);
    assert_value("1e3", 1000.0);
    assert_value("2.5E-1", 0.25);
    assert_value("1_000 + 0x1F + 0o17 + 0b101", 1051.0);
    assert_value("0", 0.0);
    assert_value("00 + 0_0", 0.0);
    assert_value("01.5 + 0e3", 1.5);
    assert_value("True + True", 2.0);
    assert_value("False * 3", 0.0);
}

#[test]
fn floored_division_and_modulo() {
    assert_value("-7 % 3", 2.0);
    assert_value("7 % -3", -2.0);
    assert_value("7 // -2", -4.0);
    assert_value("-7 // 2", -4.0);
    assert_value("7.5 // 2", 3.0);
    assert_value("5.5 % 2", 1.5);
}

#[test]
fn division_by_zero_is_error() {
    for src in ["1/0", "5//0", "5%0", "1/(2-2)", "0**-1", "0.0 ** -2"] {
        assert_eq!(safe_eval(src), Err(EvalError::DivisionByZero), "{src}");
    }
}

#[test]
fn power_guards() {
    assert!(matches!(safe_eval("2**20"), Err(EvalError::ExponentTooLarge { .. })));
    assert!(matches!(safe_eval("2**-11"), Err(EvalError::ExponentTooLarge { .. })));
    assert!(matches!(safe_eval("1e7**2"), Err(EvalError::BaseTooLarge { .. })));
    // The exponent is checked before the base.
    assert!(matches!(safe_eval("1e7**20"), Err(EvalError::ExponentTooLarge { .. })));
    assert_value("2**10", 1024.0);
    assert_value("1e6**2", 1e12);
}

#[test]
fn results_must_stay_in_range() {
    for src in ["1e6**3", "1e12 + 1", "-1e12 * 2", "5e12", "1e400", "(-8) ** 0.5"] {
        assert!(matches!(safe_eval(src), Err(EvalError::ResultOutOfRange { .. })),
                "{src} should be out of range");
    }
    assert_value("1e12", 1e12);
    assert_value("-1e12", -1e12);
}

#[test]
fn intermediate_results_are_checked() {
    assert!(matches!(safe_eval("(1e6 * 1e7) / 1e7"),
                     Err(EvalError::ResultOutOfRange { .. })));
}

#[test]
fn empty_expression() {
    assert_eq!(safe_eval(""), Err(EvalError::EmptyExpression));
    assert_eq!(safe_eval("   "), Err(EvalError::EmptyExpression));
    assert_eq!(safe_eval("\t\n"), Err(EvalError::EmptyExpression));
}

#[test]
fn malformed_input_is_syntax_error() {
    assert_syntax_error("2+");
    assert_syntax_error("(2+3");
    assert_syntax_error("2+3)");
    assert_syntax_error("()");
    assert_syntax_error("2 3");
    assert_syntax_error("2 = 3");
    assert_syntax_error("2 $ 3");
    assert_syntax_error("*2");
    assert_syntax_error("2 ***3");
    assert_syntax_error("(2).real");
    assert_syntax_error("2; 3");
}

#[test]
fn integers_reject_leading_zeros() {
    for src in ["01", "007", "0_1", "09 + 1", "2 * 010"] {
        assert_syntax_error(src);
    }
}

#[test]
fn syntax_errors_carry_positions() {
    assert_eq!(parse("(2+3"), Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse("2 $ 3"),
               Err(ParseError::InvalidCharacter { text:     "$".to_string(),
                                                  position: 2, }));
    assert_eq!(parse("2+"), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn recognised_constructs_are_unsupported() {
    assert_unsupported("import os");
    assert_unsupported("x + 1");
    assert_unsupported("abs(-2)");
    assert_unsupported("__import__('os')");
    assert_unsupported("2 < 3");
    assert_unsupported("(1 == 1)");
    assert_unsupported("6 & 3");
    assert_unsupported("1 << 40");
    assert_unsupported("~5");
    assert_unsupported("2 (3)");
    assert_unsupported("not 1");
}

#[test]
fn non_numeric_literals_are_rejected() {
    for src in ["'abc'", "\"a\" \"b\"", "2j", "None", "1 + 1.5J"] {
        assert!(matches!(safe_eval(src), Err(EvalError::NonNumericConstant { .. })),
                "{src} should be rejected as non-numeric");
    }
}

#[test]
fn input_limits() {
    let long = "1+".repeat(3000) + "1";
    assert!(matches!(safe_eval(&long),
                     Err(EvalError::Syntax(ParseError::TooLong { .. }))));

    let deep = "(".repeat(250) + "1" + &")".repeat(250);
    assert!(matches!(safe_eval(&deep),
                     Err(EvalError::Syntax(ParseError::TooDeeplyNested { .. }))));

    let shallow = "(".repeat(150) + "1" + &")".repeat(150);
    assert_value(&shallow, 1.0);
}

#[test]
fn prefix_signs_and_exponents_count_as_nesting() {
    let signs = "-".repeat(4000) + "1";
    assert!(matches!(safe_eval(&signs),
                     Err(EvalError::Syntax(ParseError::TooDeeplyNested { max: 200 }))));

    let tower = "1**".repeat(1000) + "1";
    assert!(matches!(safe_eval(&tower),
                     Err(EvalError::Syntax(ParseError::TooDeeplyNested { .. }))));

    let mixed = "(-".repeat(150) + "1" + &")".repeat(150);
    assert!(matches!(safe_eval(&mixed),
                     Err(EvalError::Syntax(ParseError::TooDeeplyNested { .. }))));

    assert_value(&("-".repeat(200) + "1"), 1.0);
    assert_value(&("1**".repeat(100) + "1"), 1.0);

    let strict = Evaluator::new(Limits { max_nesting: 3,
                                         ..Limits::default() });
    assert!(matches!(strict.safe_eval("---1"), Ok(v) if v == -1.0));
    assert!(matches!(strict.safe_eval("----1"),
                     Err(EvalError::Syntax(ParseError::TooDeeplyNested { max: 3 }))));
}

#[test]
fn custom_limits() {
    let evaluator = Evaluator::new(Limits { max_abs_exponent: 20.0,
                                            ..Limits::default() });
    assert_eq!(evaluator.safe_eval("2**20"), Ok(1_048_576.0));

    let strict = Evaluator::new(Limits { max_abs_result: 100.0,
                                         ..Limits::default() });
    assert!(matches!(strict.safe_eval("10*11"), Err(EvalError::ResultOutOfRange { .. })));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(safe_eval("1/0").unwrap_err().to_string(), "Division by zero.");
    assert_eq!(safe_eval("").unwrap_err().to_string(), "Empty expression.");
    assert_eq!(safe_eval("2**20").unwrap_err().to_string(),
               "Exponent too large (abs > 10).");
    assert_eq!(safe_eval("x").unwrap_err().to_string(),
               "Unsupported element: name 'x'.");
    assert!(safe_eval("(2+3").unwrap_err().to_string().starts_with("Syntax error: "));
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["3*(4-1)/2", "1/0", "0.1 + 0.2", "import os"] {
        assert_eq!(safe_eval(src), safe_eval(src));
    }
}
