use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// The input exceeded the configured length limit.
    #[error("Expression is too long ({length} characters, maximum is {max}).")]
    TooLong {
        /// Number of characters in the input.
        length: usize,
        /// The configured maximum.
        max:    usize,
    },
    /// Parentheses, prefix signs or `**` exponents were nested deeper than the
    /// configured limit.
    #[error("Expression is nested too deeply (maximum is {max}).")]
    TooDeeplyNested {
        /// The configured maximum.
        max: usize,
    },
    /// A character that does not start any token.
    #[error("Invalid character {text:?} at position {position}.")]
    InvalidCharacter {
        /// The offending slice.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Found a token that cannot appear here.
    #[error("Unexpected token {token} at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A `(` was never closed.
    #[error("'(' at position {position} was never closed.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Unexpected {token} at position {position} after the end of the expression.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A recognised construct that the arithmetic grammar does not allow,
    /// such as a name, a call or a comparison.
    #[error("Unsupported element: {construct} at position {position}.")]
    UnsupportedConstruct {
        /// Description of the construct.
        construct: String,
        /// Byte offset in the source.
        position:  usize,
    },
}
