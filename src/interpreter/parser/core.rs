use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::Limits,
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses source text into a syntax tree using the default [`Limits`].
///
/// # Errors
/// See [`parse_with_limits`].
///
/// # Example
/// ```
/// use mathcheck::interpreter::parser::core::parse;
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with_limits(source, &Limits::default())
}

/// Parses source text into a syntax tree.
///
/// The whole input must form exactly one expression of the arithmetic
/// grammar:
///
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/" | "%" | "//") factor)*
///     factor := ("+" | "-") factor | power
///     power  := atom ("**" factor)?
///     atom   := literal | "(" expr ")"
/// ```
///
/// # Errors
/// - [`ParseError::EmptyExpression`] for blank input.
/// - [`ParseError::TooLong`] and [`ParseError::TooDeeplyNested`] when the
///   input exceeds `limits`. Parentheses, prefix signs and `**` exponents all
///   count towards the nesting depth.
/// - [`ParseError::UnsupportedConstruct`] for names, calls, comparisons and
///   other recognised constructs outside the grammar.
/// - Any other variant for malformed input.
pub fn parse_with_limits(source: &str, limits: &Limits) -> ParseResult<Expr> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let length = source.chars().count();
    if length > limits.max_input_len {
        return Err(ParseError::TooLong { length,
                                         max: limits.max_input_len });
    }

    let tokens = tokenize(source)?;
    trace!("tokenized {} tokens", tokens.len());

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, Depth::new(limits.max_nesting))?;

    match iter.next() {
        None => Ok(expr),
        Some((token, position)) => Err(reject_after_operand(token, *position).unwrap_or_else(|| {
                                           ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                                                  position: *position, }
                                       })),
    }
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// How many right-nested constructs enclose the current position.
///
/// Every parenthesis, prefix sign and `**` exponent adds one level, because
/// each of them recurses in the parser and in the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    max:     usize,
}

impl Depth {
    /// The outermost level, allowing `max` levels of nesting.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { current: 0,
               max }
    }

    /// The next level in.
    ///
    /// # Errors
    /// [`ParseError::TooDeeplyNested`] once `max` levels are exceeded.
    pub const fn deeper(self) -> ParseResult<Self> {
        if self.current >= self.max {
            return Err(ParseError::TooDeeplyNested { max: self.max });
        }
        Ok(Self { current: self.current + 1,
                  max:     self.max, })
    }
}

/// Classifies a token found directly after a complete operand.
///
/// Comparison, bitwise and matrix operators and call parentheses are
/// recognised constructs and yield [`ParseError::UnsupportedConstruct`].
/// Returns `None` for tokens the caller should report as plain syntax errors.
pub(in crate::interpreter::parser) fn reject_after_operand(token: &Token,
                                                           position: usize)
                                                           -> Option<ParseError> {
    let construct = match token {
        Token::Forbidden(op) => format!("operator '{op}'"),
        Token::LParen => "call".to_string(),
        _ => return None,
    };
    Some(ParseError::UnsupportedConstruct { construct,
                                            position })
}
