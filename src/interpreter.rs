/// The comparator used to judge submitted answers.
///
/// Compares a value against an expected result with combined relative and
/// absolute tolerance, snapping integer-like results to integers.
pub mod compare;
/// The evaluator module reduces syntax trees to numbers.
///
/// It walks the tree produced by the parser, applies the arithmetic operators
/// and enforces the magnitude bounds that keep evaluation cheap and results
/// sane.
///
/// # Responsibilities
/// - Evaluates the closed set of node kinds, rejecting non-numeric literals.
/// - Guards `**` against oversized bases and exponents.
/// - Reports division by zero and out-of-range results.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// # Responsibilities
/// - Converts the input into tokens paired with byte offsets.
/// - Reads every numeric literal form into an `f64`.
/// - Recognises disallowed constructs so they can be classified later.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Rejects anything outside the arithmetic grammar with a classified error
///   carrying the position of the problem.
pub mod parser;
