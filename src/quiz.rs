use log::{debug, info};
use thiserror::Error;

use crate::{
    error::EvalError,
    interpreter::{
        compare::{Verdict, compare, display_expected},
        evaluator::core::Evaluator,
    },
};

/// Failures while reading or judging a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// Nothing was typed.
    #[error("Please type an answer first.")]
    Blank,
    /// The answer is neither an accepted expression nor a plain number.
    #[error("Could not parse your answer as a number. Try `1.5` or `3/4`.")]
    Unparseable,
    /// No equation has been locked in.
    #[error("No valid equation is set.")]
    NoEquation,
}

/// Failures while locking in an equation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    /// Nothing was typed.
    #[error("Please enter an equation first.")]
    Blank,
    /// The equation did not evaluate.
    #[error("Invalid equation: {0}")]
    Invalid(#[from] EvalError),
}

/// Reads a submitted answer.
///
/// The answer is first evaluated as an expression, so `3/4` is accepted. If
/// that fails it is read as a plain float, which also admits forms such as
/// `inf` or `nan` that the evaluator rejects.
///
/// # Errors
/// [`AnswerError::Blank`] for blank input, [`AnswerError::Unparseable`] when
/// both readings fail.
///
/// # Example
/// ```
/// use mathcheck::{
///     interpreter::evaluator::core::Evaluator,
///     quiz::{AnswerError, parse_answer},
/// };
///
/// let evaluator = Evaluator::default();
/// assert_eq!(parse_answer(&evaluator, "3/4"), Ok(0.75));
/// assert!(parse_answer(&evaluator, " inf ").is_ok_and(f64::is_infinite));
/// assert_eq!(parse_answer(&evaluator, "three"), Err(AnswerError::Unparseable));
/// ```
pub fn parse_answer(evaluator: &Evaluator, text: &str) -> Result<f64, AnswerError> {
    if text.trim().is_empty() {
        return Err(AnswerError::Blank);
    }
    match evaluator.safe_eval(text) {
        Ok(value) => Ok(value),
        Err(error) => {
            debug!("answer {text:?} is not an expression ({error}), trying a plain number");
            text.trim().parse().map_err(|_| AnswerError::Unparseable)
        },
    }
}

/// An equation together with its evaluated result.
#[derive(Debug, Clone, PartialEq)]
pub struct LockedEquation {
    /// The equation as entered, trimmed.
    pub text:  String,
    /// Its evaluated result.
    pub value: f64,
}

/// A checking session: holds at most one locked equation until it is
/// replaced.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    evaluator: Evaluator,
    locked:    Option<LockedEquation>,
}

impl Quiz {
    /// Creates a session with no equation locked in.
    #[must_use]
    pub const fn new(evaluator: Evaluator) -> Self {
        Self { evaluator,
               locked: None }
    }

    /// The currently locked equation, if any.
    #[must_use]
    pub const fn locked(&self) -> Option<&LockedEquation> {
        self.locked.as_ref()
    }

    /// Evaluates `text` and locks it in as the equation to answer.
    ///
    /// A failed attempt clears any previously locked equation. A blank
    /// attempt leaves it untouched.
    ///
    /// # Errors
    /// [`EquationError::Blank`] for blank input, [`EquationError::Invalid`]
    /// when evaluation fails.
    pub fn set_equation(&mut self, text: &str) -> Result<&LockedEquation, EquationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EquationError::Blank);
        }

        match self.evaluator.safe_eval(text) {
            Ok(value) => {
                info!("locked equation {text:?} = {value}");
                Ok(&*self.locked.insert(LockedEquation { text: text.to_string(),
                                                         value }))
            },
            Err(error) => {
                self.locked = None;
                Err(EquationError::Invalid(error))
            },
        }
    }

    /// Judges a submitted answer against the locked equation.
    ///
    /// # Errors
    /// [`AnswerError::Blank`] and [`AnswerError::Unparseable`] as in
    /// [`parse_answer`], and [`AnswerError::NoEquation`] when nothing is
    /// locked in.
    pub fn check_answer(&self, text: &str) -> Result<Verdict, AnswerError> {
        let actual = parse_answer(&self.evaluator, text)?;
        let locked = self.locked.as_ref().ok_or(AnswerError::NoEquation)?;
        let verdict = compare(locked.value, actual);
        debug!("answer {actual} for {:?}: {verdict:?}", locked.text);
        Ok(verdict)
    }

    /// The locked equation's answer as shown to the user.
    #[must_use]
    pub fn reveal(&self) -> Option<String> {
        self.locked.as_ref().map(|locked| display_expected(locked.value))
    }
}
