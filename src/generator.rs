use rand::Rng;

/// Smallest operand of a generated problem.
pub const MIN_OPERAND: u32 = 1;
/// Largest operand of a generated problem.
pub const MAX_OPERAND: u32 = 12;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Generates an easy arithmetic problem such as `7*3` or `36/4`.
///
/// The operator is one of `+ - * /` and both operands lie in
/// [`MIN_OPERAND`]`..=`[`MAX_OPERAND`]. Divisions are built from
/// `divisor * quotient` so that their result is always a whole number.
///
/// # Example
/// ```
/// use mathcheck::{generator::generate_easy_problem, safe_eval};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let problem = generate_easy_problem(&mut rng);
/// assert!(safe_eval(&problem).is_ok_and(|v| v.fract() == 0.0));
/// ```
pub fn generate_easy_problem<R: Rng + ?Sized>(rng: &mut R) -> String {
    let op = OPERATORS[rng.random_range(0..OPERATORS.len())];
    if op == '/' {
        let divisor = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        let quotient = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        format!("{}/{divisor}", divisor * quotient)
    } else {
        let a = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        let b = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        format!("{a}{op}{b}")
    }
}
