use mathcheck::{
    error::EvalError,
    generator::{MAX_OPERAND, MIN_OPERAND, generate_easy_problem},
    interpreter::{compare::Verdict, evaluator::core::Evaluator},
    quiz::{AnswerError, EquationError, Quiz, parse_answer},
    safe_eval,
};
use rand::{SeedableRng, rngs::StdRng};

fn quiz_with(equation: &str) -> Quiz {
    let mut quiz = Quiz::default();
    quiz.set_equation(equation)
        .unwrap_or_else(|e| panic!("{equation:?} should lock: {e}"));
    quiz
}

#[test]
fn locking_an_equation() {
    let mut quiz = Quiz::default();
    let locked = quiz.set_equation("  3*(2+1)/4 ").unwrap();
    assert_eq!(locked.text, "3*(2+1)/4");
    assert_eq!(locked.value, 2.25);
    assert_eq!(quiz.reveal().as_deref(), Some("2.25"));
}

#[test]
fn blank_equation_keeps_the_lock() {
    let mut quiz = quiz_with("2+2");
    assert_eq!(quiz.set_equation("   ").unwrap_err(), EquationError::Blank);
    assert_eq!(quiz.locked().map(|l| l.value), Some(4.0));
}

#[test]
fn invalid_equation_clears_the_lock() {
    let mut quiz = quiz_with("2+2");
    assert_eq!(quiz.set_equation("1/0").unwrap_err(),
               EquationError::Invalid(EvalError::DivisionByZero));
    assert!(quiz.locked().is_none());
    assert_eq!(quiz.check_answer("4"), Err(AnswerError::NoEquation));
    assert_eq!(quiz.reveal(), None);
}

#[test]
fn invalid_equation_message() {
    let mut quiz = Quiz::default();
    let error = quiz.set_equation("2**20").unwrap_err();
    assert_eq!(error.to_string(), "Invalid equation: Exponent too large (abs > 10).");
}

#[test]
fn answers_may_be_expressions() {
    let quiz = quiz_with("3/4");
    assert_eq!(quiz.check_answer("0.75"), Ok(Verdict::CorrectWithinTolerance));
    assert_eq!(quiz.check_answer("3/4"), Ok(Verdict::CorrectWithinTolerance));
    assert_eq!(quiz.check_answer("1 - 1/4"), Ok(Verdict::CorrectWithinTolerance));
}

#[test]
fn integer_equations() {
    let quiz = quiz_with("10//3");
    assert_eq!(quiz.check_answer(" 3 "), Ok(Verdict::Correct));
    assert_eq!(quiz.check_answer("3.0000000001"), Ok(Verdict::Correct));
    assert_eq!(quiz.check_answer("3.3"),
               Ok(Verdict::Incorrect { expected: "3".to_string() }));
    assert_eq!(quiz.reveal().as_deref(), Some("3"));
}

#[test]
fn answers_fall_back_to_plain_numbers() {
    let evaluator = Evaluator::default();
    assert!(parse_answer(&evaluator, "x").is_err());
    assert_eq!(parse_answer(&evaluator, "5e12"), Ok(5e12));
    assert!(parse_answer(&evaluator, "-inf").is_ok_and(|v| v == f64::NEG_INFINITY));
    assert!(parse_answer(&evaluator, "nan").is_ok_and(f64::is_nan));

    let quiz = quiz_with("2+2");
    assert_eq!(quiz.check_answer("inf"),
               Ok(Verdict::Incorrect { expected: "4".to_string() }));
}

#[test]
fn unreadable_answers() {
    let quiz = quiz_with("2+2");
    assert_eq!(quiz.check_answer(""), Err(AnswerError::Blank));
    assert_eq!(quiz.check_answer("  "), Err(AnswerError::Blank));
    assert_eq!(quiz.check_answer("four"), Err(AnswerError::Unparseable));
    assert_eq!(quiz.check_answer("1/0"), Err(AnswerError::Unparseable));
    assert_eq!(AnswerError::Unparseable.to_string(),
               "Could not parse your answer as a number. Try `1.5` or `3/4`.");
}

#[test]
fn blank_answer_is_reported_before_missing_equation() {
    let quiz = Quiz::default();
    assert_eq!(quiz.check_answer(""), Err(AnswerError::Blank));
    assert_eq!(quiz.check_answer("4"), Err(AnswerError::NoEquation));
}

#[test]
fn generated_problems_have_whole_answers() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen_division = false;

    for _ in 0..500 {
        let problem = generate_easy_problem(&mut rng);
        let value = safe_eval(&problem).unwrap_or_else(|e| panic!("{problem:?}: {e}"));
        assert_eq!(value.fract(), 0.0, "{problem} = {value}");

        if let Some((dividend, divisor)) = problem.split_once('/') {
            seen_division = true;
            let divisor: u32 = divisor.parse().unwrap();
            let dividend: u32 = dividend.parse().unwrap();
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&divisor));
            assert_eq!(dividend % divisor, 0);
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&(dividend / divisor)));
        }
    }

    assert!(seen_division);
}

#[test]
fn generated_problems_lock_in() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quiz = Quiz::default();
    for _ in 0..50 {
        let problem = generate_easy_problem(&mut rng);
        let value = quiz.set_equation(&problem).unwrap().value;
        assert_eq!(quiz.check_answer(&value.to_string()), Ok(Verdict::Correct));
    }
}
