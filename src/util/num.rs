/// Floored remainder: the result takes the sign of the divisor.
///
/// Returns `None` when `divisor` is zero.
///
/// ## Example
/// ```
/// use mathcheck::util::num::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), Some(1.0));
/// assert_eq!(floored_mod(-7.0, 3.0), Some(2.0));
/// assert_eq!(floored_mod(7.0, -3.0), Some(-2.0));
/// assert_eq!(floored_mod(5.0, 0.0), None);
/// ```
#[must_use]
pub fn floored_mod(dividend: f64, divisor: f64) -> Option<f64> {
    if divisor == 0.0 {
        return None;
    }
    let rem = dividend % divisor;
    if rem == 0.0 {
        return Some(0.0_f64.copysign(divisor));
    }
    if (divisor < 0.0) != (rem < 0.0) {
        return Some(rem + divisor);
    }
    Some(rem)
}

/// Floored division, consistent with [`floored_mod`] so that
/// `floor_div(a, b) * b + floored_mod(a, b) == a` up to rounding.
///
/// Returns `None` when `divisor` is zero.
///
/// ## Example
/// ```
/// use mathcheck::util::num::floor_div;
///
/// assert_eq!(floor_div(10.0, 3.0), Some(3.0));
/// assert_eq!(floor_div(7.0, -2.0), Some(-4.0));
/// assert_eq!(floor_div(1.0, 0.0), None);
/// ```
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> Option<f64> {
    if divisor == 0.0 {
        return None;
    }
    let rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;
    if rem != 0.0 && (divisor < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Some(0.0_f64.copysign(dividend / divisor));
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Some(floored)
}

/// Raises `base` to `exponent`.
///
/// Returns `None` for zero raised to a negative power. A negative base with a
/// fractional exponent yields NaN, which callers reject as out of range.
///
/// ## Example
/// ```
/// use mathcheck::util::num::checked_pow;
///
/// assert_eq!(checked_pow(5.0, 2.0), Some(25.0));
/// assert_eq!(checked_pow(2.0, -1.0), Some(0.5));
/// assert_eq!(checked_pow(0.0, -1.0), None);
/// assert!(checked_pow(-8.0, 0.5).is_some_and(f64::is_nan));
/// ```
#[must_use]
pub fn checked_pow(base: f64, exponent: f64) -> Option<f64> {
    if base == 0.0 && exponent < 0.0 {
        return None;
    }
    Some(base.powf(exponent))
}

/// Returns whether `a` and `b` are close under a combined relative and
/// absolute tolerance:
/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
///
/// Equal values are always close, infinities are close only to themselves,
/// and NaN is never close to anything.
///
/// ## Example
/// ```
/// use mathcheck::util::num::is_close;
///
/// assert!(is_close(4.0, 4.000_000_001, 1e-9, 1e-9));
/// assert!(!is_close(4.0, 3.9, 1e-9, 1e-9));
/// assert!(!is_close(f64::NAN, f64::NAN, 1e-9, 1e-9));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (rel_tol * b).abs() || diff <= (rel_tol * a).abs() || diff <= abs_tol
}

/// Formats a float the way it is shown to users: shortest round-trip digits,
/// always with a fractional part or exponent, and scientific notation when the
/// decimal exponent is below -4 or at least 16.
///
/// ## Example
/// ```
/// use mathcheck::util::num::format_float;
///
/// assert_eq!(format_float(4.5), "4.5");
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(0.000_01), "1e-05");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = exponent.strip_prefix('-')
                                             .map_or(("+", exponent), |d| ("-", d));
                format!("{mantissa}e{sign}{digits:0>2}")
            },
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{formatted}.0")
    }
}

/// Formats an integer-valued float without a fractional part. Negative zero is
/// shown as `0`.
///
/// ## Example
/// ```
/// use mathcheck::util::num::format_integer;
///
/// assert_eq!(format_integer(4.0), "4");
/// assert_eq!(format_integer(-0.0), "0");
/// assert_eq!(format_integer(-12.0), "-12");
/// ```
#[must_use]
pub fn format_integer(value: f64) -> String {
    format!("{:.0}", value.round() + 0.0)
}
