use std::fmt;

/// A constant that appears directly in source text.
///
/// Only [`Constant::Number`] and [`Constant::Bool`] have a numeric value. The
/// other kinds are kept so that the evaluator can reject them with a precise
/// error instead of the parser reporting them as garbage.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// A real number literal such as `42`, `0x1F` or `2.5e-3`.
    Number(f64),
    /// `True` or `False`.
    Bool(bool),
    /// An imaginary literal such as `2j`.
    Imaginary(f64),
    /// A (possibly concatenated) string literal.
    Str(String),
    /// `None`.
    None,
}

impl Constant {
    /// Short name of the constant kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Imaginary(_) => "imaginary number",
            Self::Str(_) => "string",
            Self::None => "None",
        }
    }
}

/// An abstract syntax tree node.
///
/// The tree is closed over exactly three node kinds. The parser owns the tree
/// it returns and the evaluator only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Literal {
        /// The constant value.
        value:    Constant,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// An arithmetic operation on two operands.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source text.
        position: usize,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Pos,
    /// `-x`
    Neg,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `//`
    FloorDiv,
    /// `**`
    Pow,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Pos => "+",
            Self::Neg => "-",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::FloorDiv => "//",
            Self::Pow => "**",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesised.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => match value {
                Constant::Number(n) => write!(f, "{n}"),
                Constant::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
                Constant::Imaginary(n) => write!(f, "{n}j"),
                Constant::Str(s) => write!(f, "{s:?}"),
                Constant::None => write!(f, "None"),
            },
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
