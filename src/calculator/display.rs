//! Formatting helpers for the calculator display.

const SIGNIFICANT_DIGITS: usize = 9;

/// Round to 9 significant digits and format without float artifacts.
///
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN`.
///
/// ```rust
/// use pureform::calculator::fix_float;
///
/// assert_eq!(fix_float(0.1 + 0.2), "0.3");
/// assert_eq!(fix_float(7.0), "7");
/// assert_eq!(fix_float(2.0 / 3.0), "0.666666667");
/// assert_eq!(fix_float(f64::INFINITY), "Infinity");
/// ```
pub fn fix_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let rounded = scientific.parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        // Also folds -0 into 0.
        return "0".to_string();
    }
    rounded.to_string()
}

/// Replace ASCII operators with display glyphs.
///
/// With `spaced`, each operator is surrounded by single spaces, which is
/// how the previous expression line is rendered.
///
/// ```rust
/// use pureform::calculator::prettify_display;
///
/// assert_eq!(prettify_display("6*7-2/1", false), "6×7−2÷1");
/// assert_eq!(prettify_display("1+2", true), "1 + 2");
/// ```
pub fn prettify_display(input: &str, spaced: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        let glyph = match ch {
            '*' => '×',
            '/' => '÷',
            '-' => '−',
            '+' => '+',
            other => {
                out.push(other);
                continue;
            }
        };
        if spaced {
            out.push(' ');
            out.push(glyph);
            out.push(' ');
        } else {
            out.push(glyph);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_float_suppresses_binary_artifacts() {
        assert_eq!(fix_float(0.1 + 0.2), "0.3");
        assert_eq!(fix_float(1.1 * 3.0), "3.3");
        assert_eq!(fix_float(0.7 - 0.4), "0.3");
    }

    #[test]
    fn fix_float_keeps_integers_plain() {
        assert_eq!(fix_float(12.0), "12");
        assert_eq!(fix_float(-4.0), "-4");
        assert_eq!(fix_float(1_000_000.0), "1000000");
    }

    #[test]
    fn fix_float_rounds_to_nine_significant_digits() {
        assert_eq!(fix_float(1.0 / 3.0), "0.333333333");
        assert_eq!(fix_float(123_456_789_123.0), "123456789000");
    }

    #[test]
    fn fix_float_normalizes_negative_zero() {
        assert_eq!(fix_float(-0.0), "0");
    }

    #[test]
    fn fix_float_names_non_finite_values() {
        assert_eq!(fix_float(f64::INFINITY), "Infinity");
        assert_eq!(fix_float(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fix_float(f64::NAN), "NaN");
    }

    #[test]
    fn prettify_leaves_digits_alone() {
        assert_eq!(prettify_display("123.45", true), "123.45");
        assert_eq!(prettify_display("", false), "");
    }

    #[test]
    fn previous_line_is_spaced_and_entry_line_is_not() {
        assert_eq!(prettify_display("3*4", true), "3 × 4");
        assert_eq!(prettify_display("3*4", false), "3×4");
    }

    #[test]
    fn prettify_spaces_every_operator() {
        assert_eq!(prettify_display("8/2*3-1", true), "8 ÷ 2 × 3 − 1");
    }
}
