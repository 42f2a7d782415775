/// Formats a result using the spelling the lexer accepts.
///
/// Finite values use Rust's shortest round-trip formatting. The special
/// values print as `NaN`, `Infinity` and `-Infinity` instead of Rust's `NaN`,
/// `inf` and `-inf`, so any output can be fed back in as an expression
/// (negative results parse as a signed literal).
///
/// ## Example
/// ```
/// use reckon::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}
