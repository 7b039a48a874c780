use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Constant, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Depth, ParseResult, parse_expression, reject_after_operand},
    },
};

/// Parses a factor: a prefix operator applied to a factor, or a power.
///
/// Prefix operators may repeat, so `--2` parses as `-(-2)`. Bitwise `~` is
/// recognised and rejected.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | power
/// ```
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Pos,
        Some((Token::Minus, _)) => UnaryOperator::Neg,
        Some((Token::Tilde, position)) => {
            return Err(ParseError::UnsupportedConstruct { construct: "unary operator '~'".to_string(),
                                                          position:  *position, });
        },
        _ => return parse_power(tokens, depth),
    };

    let position = tokens.next().map_or(0, |(_, position)| *position);
    let expr = parse_factor(tokens, depth.deeper()?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses exponentiation.
///
/// The exponent is itself a factor, which makes `**` right-associative and
/// lets it bind tighter than a prefix minus on its left but accept one on its
/// right: `2 ** 3 ** 2` is `2 ** (3 ** 2)`, `-2 ** 2` is `-(2 ** 2)` and
/// `2 ** -1` is `2 ** (-1)`.
///
/// The rule is: `power := primary ("**" factor)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;
    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_factor(tokens, depth.deeper()?)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent, *position));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression: a literal or a parenthesised group.
///
/// Names are recognised here and rejected as unsupported, which covers
/// variables, function calls and keywords alike.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(_)
         | Token::Imaginary(_)
         | Token::Str(_)
         | Token::True
         | Token::False
         | Token::None,
         _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(name), position) => {
            Err(ParseError::UnsupportedConstruct { construct: format!("name '{name}'"),
                                                   position:  *position, })
        },
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a literal constant.
///
/// Adjacent string literals are concatenated into one constant.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    let value = match token {
        Token::Number(n) => Constant::Number(*n),
        Token::Imaginary(n) => Constant::Imaginary(*n),
        Token::True => Constant::Bool(true),
        Token::False => Constant::Bool(false),
        Token::None => Constant::None,
        Token::Str(s) => {
            let mut text = s.clone();
            while let Some((Token::Str(next), _)) = tokens.peek() {
                text.push_str(next);
                tokens.next();
            }
            Constant::Str(text)
        },
        other => {
            return Err(ParseError::UnexpectedToken { token:    other.to_string(),
                                                     position: *position, });
        },
    };

    Ok(Expr::Literal { value,
                       position: *position })
}

/// Parses a parenthesised expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let open = tokens.next().map_or(0, |(_, position)| *position);
    let expr = parse_expression(tokens, depth.deeper()?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(reject_after_operand(tok, *position).unwrap_or_else(|| {
                                         ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                       position: *position, }
                                     })),
        None => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
