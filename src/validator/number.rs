//! Numeric predicates.

/// Inclusive range check: `floor <= input <= ceil`.
///
/// ```rust
/// use pureform::validator::is_between;
///
/// assert!(is_between(6, 6, 8));
/// assert!(is_between(7.5, 6.0, 8.0));
/// assert!(!is_between(9, 6, 8));
/// ```
pub fn is_between<T: PartialOrd>(input: T, floor: T, ceil: T) -> bool {
    input >= floor && input <= ceil
}

/// Check whether a string holds a finite number.
pub fn is_number(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Check whether a string starts with an integer, the way form fields such
/// as zip codes are read (`"12345-678"` counts, `"abc"` does not).
pub fn is_integer_prefix(input: &str) -> bool {
    let trimmed = input.trim_start();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}
