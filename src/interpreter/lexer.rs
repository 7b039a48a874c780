use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// The token set is deliberately wider than the arithmetic grammar: names,
/// strings, imaginary literals and non-arithmetic operators are recognised so
/// that the parser can classify them as unsupported instead of reporting them
/// as unreadable input.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real number literals such as `42`, `1_000`, `3.14`, `.5`, `5.` or
    /// `2.1e-10`.
    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?",
            parse_decimal)]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?", parse_decimal)]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*", parse_decimal)]
    #[regex(r"[1-9](_?[0-9])*", parse_decimal)]
    #[regex(r"0(_?0)*", parse_decimal)]
    #[regex(r"0[xX](_?[0-9a-fA-F])+", |lex| parse_radix(lex, 16))]
    #[regex(r"0[oO](_?[0-7])+", |lex| parse_radix(lex, 8))]
    #[regex(r"0[bB](_?[01])+", |lex| parse_radix(lex, 2))]
    Number(f64),
    /// Imaginary literals such as `2j` or `1.5e3J`.
    #[regex(r"([0-9](_?[0-9])*(\.([0-9](_?[0-9])*)?)?|\.[0-9](_?[0-9])*)([eE][+-]?[0-9](_?[0-9])*)?[jJ]",
            parse_imaginary)]
    Imaginary(f64),
    /// Quoted string literals.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    #[regex(r"'([^'\\\n]|\\.)*'", parse_string)]
    Str(String),
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// `None`
    #[token("None")]
    None,
    /// Names such as `x`, `abs` or `import`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Comparison, bitwise and matrix operators, none of which are allowed.
    #[regex(r"<<|>>|<=|>=|==|!=|[<>&|^@]", |lex| lex.slice().to_string())]
    Forbidden(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Imaginary(n) => write!(f, "imaginary number {n}j"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::True => write!(f, "'True'"),
            Self::False => write!(f, "'False'"),
            Self::None => write!(f, "'None'"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::Star => write!(f, "'*'"),
            Self::DoubleSlash => write!(f, "'//'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Tilde => write!(f, "'~'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Forbidden(op) => write!(f, "'{op}'"),
        }
    }
}

/// Splits source text into tokens paired with their byte offsets.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first slice that does not
/// start any token.
///
/// # Example
/// ```
/// use mathcheck::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** -1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Minus, 5),
///                 (Token::Number(1.0), 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::InvalidCharacter { text: lexer.slice().to_string(),
                                                          position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a decimal literal, ignoring `_` separators.
///
/// Integers may not carry leading zeros (`007`), though floats may (`01.5`)
/// and zero itself may repeat (`00`).
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    let is_integer = !slice.contains(['.', 'e', 'E']);
    if is_integer && slice.starts_with('0') && slice.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return None;
    }
    slice.replace('_', "").parse().ok()
}

/// Parses a `0x`, `0o` or `0b` literal. Arbitrarily long literals are folded
/// into the nearest `f64` rather than overflowing.
fn parse_radix(lex: &logos::Lexer<Token>, radix: u32) -> Option<f64> {
    lex.slice()[2..].chars()
                    .filter(|c| *c != '_')
                    .try_fold(0.0_f64, |acc, c| {
                        c.to_digit(radix)
                         .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
                    })
}

/// Parses an imaginary literal; the trailing `j` is dropped.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].replace('_', "").parse().ok()
}

/// Strips the quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
