//! CSS color notation predicates.

const HUE_MAX: f64 = 360.0;

/// Body of a functional notation such as `rgb(...)`, split on commas.
fn functional_args(input: &str, name: &str) -> Option<Vec<String>> {
    let lower = input.trim().to_lowercase();
    let inner = lower
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(|part| part.trim().to_string()).collect())
}

fn channel(part: &str) -> Option<u8> {
    part.parse::<u8>().ok()
}

fn unit_range(part: &str, max: f64) -> bool {
    part.parse::<f64>()
        .is_ok_and(|value| (0.0..=max).contains(&value))
}

/// Check for a CSS hexadecimal color: `#` followed by 3 or 6 hex digits.
///
/// ```rust
/// use pureform::validator::is_hex;
///
/// assert!(is_hex("#fff"));
/// assert!(is_hex("#00FFaa"));
/// assert!(!is_hex("fff"));
/// assert!(!is_hex("#ffff"));
/// assert!(!is_hex("#ggg"));
/// ```
pub fn is_hex(input: &str) -> bool {
    let Some(body) = input.strip_prefix('#') else {
        return false;
    };
    matches!(body.chars().count(), 3 | 6) && body.chars().all(|c| c.is_ascii_hexdigit())
}

/// Check for a CSS `rgb(r, g, b)` color with channels in 0..=255.
///
/// ```rust
/// use pureform::validator::is_rgb;
///
/// assert!(is_rgb("rgb(255,0,0)"));
/// assert!(is_rgb("RGB(12, 34, 56)"));
/// assert!(!is_rgb("rgb(256,0,0)"));
/// assert!(!is_rgb("rgba(0,0,0)"));
/// ```
pub fn is_rgb(input: &str) -> bool {
    match functional_args(input, "rgb") {
        Some(parts) => parts.len() == 3 && parts.iter().all(|part| channel(part).is_some()),
        None => false,
    }
}

/// Check for a CSS `hsl(h, s, l)` color.
///
/// Hue must lie in 0..=360; saturation and lightness are fractions in
/// 0..=1.
///
/// ```rust
/// use pureform::validator::is_hsl;
///
/// assert!(is_hsl("hsl(120, 0.5, 1)"));
/// assert!(!is_hsl("hsl(361, 0.5, 0.5)"));
/// assert!(!is_hsl("hsl(120, 50, 0.5)"));
/// ```
pub fn is_hsl(input: &str) -> bool {
    let Some(parts) = functional_args(input, "hsl") else {
        return false;
    };
    let [hue, saturation, lightness] = parts.as_slice() else {
        return false;
    };
    unit_range(hue, HUE_MAX) && unit_range(saturation, 1.0) && unit_range(lightness, 1.0)
}

/// Any of the supported CSS color notations.
pub fn is_color(input: &str) -> bool {
    is_hex(input) || is_rgb(input) || is_hsl(input)
}

/// Convert `rgb(r,g,b)` or `rgba(r,g,b,a)` to `#rrggbb`.
///
/// Input that already contains a `#` is returned unchanged. The alpha
/// channel is dropped.
///
/// ```rust
/// use pureform::validator::rgba_to_hex;
///
/// assert_eq!(rgba_to_hex("rgba(255, 128, 0, 0.5)").as_deref(), Some("#ff8000"));
/// assert_eq!(rgba_to_hex("#abc").as_deref(), Some("#abc"));
/// assert_eq!(rgba_to_hex("rgb(300,0,0)"), None);
/// ```
pub fn rgba_to_hex(input: &str) -> Option<String> {
    if input.contains('#') {
        return Some(input.to_string());
    }

    let parts = match functional_args(input, "rgba") {
        Some(parts) if parts.len() == 4 && unit_range(&parts[3], 1.0) => parts,
        Some(_) => return None,
        None => functional_args(input, "rgb").filter(|parts| parts.len() == 3)?,
    };

    let r = channel(&parts[0])?;
    let g = channel(&parts[1])?;
    let b = channel(&parts[2])?;
    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_short_and_long_forms() {
        assert!(is_hex("#abc"));
        assert!(is_hex("#ABCDEF"));
        assert!(is_hex("#012345"));
    }

    #[test]
    fn hex_rejects_other_lengths_and_digits() {
        assert!(!is_hex("#"));
        assert!(!is_hex("#ab"));
        assert!(!is_hex("#abcd"));
        assert!(!is_hex("#abcdefa"));
        assert!(!is_hex("#abz"));
        assert!(!is_hex("#a#b"));
        assert!(!is_hex("abc#"));
    }

    #[test]
    fn hex_body_may_not_contain_another_hash() {
        assert!(!is_hex("#ab#c"));
        assert!(!is_hex("##abc"));
        assert!(!is_hex("#abc#"));
    }

    #[test]
    fn rgb_requires_three_channels_in_range() {
        assert!(is_rgb("rgb(0,0,0)"));
        assert!(is_rgb("rgb( 255 , 255 , 255 )"));
        assert!(!is_rgb("rgb(0,0)"));
        assert!(!is_rgb("rgb(0,0,0,0)"));
        assert!(!is_rgb("rgb(-1,0,0)"));
        assert!(!is_rgb("rgb(a,0,0)"));
    }

    #[test]
    fn rgb_requires_exact_function_syntax() {
        assert!(!is_rgb("rgba(0,0,0)"));
        assert!(!is_rgb("rgb(0,0,0"));
        assert!(!is_rgb("0,0,0"));
        assert!(!is_rgb("hsl(0,0,0)"));
    }

    #[test]
    fn hsl_checks_each_component_range() {
        assert!(is_hsl("hsl(0,0,0)"));
        assert!(is_hsl("hsl(360, 1, 1)"));
        assert!(is_hsl("HSL(180, 0.25, 0.75)"));
        assert!(!is_hsl("hsl(-1, 0, 0)"));
        assert!(!is_hsl("hsl(0, 1.5, 0)"));
        assert!(!is_hsl("hsl(0, 0, 2)"));
        assert!(!is_hsl("hsl(0, 0)"));
        assert!(!is_hsl("hsla(0, 0, 0)"));
    }

    #[test]
    fn color_accepts_any_notation() {
        assert!(is_color("#fff"));
        assert!(is_color("rgb(1,2,3)"));
        assert!(is_color("hsl(1,0.2,0.3)"));
        assert!(!is_color("red"));
        assert!(!is_color(""));
    }

    #[test]
    fn rgba_to_hex_converts_rgb_and_rgba() {
        assert_eq!(rgba_to_hex("rgb(0,0,0)").as_deref(), Some("#000000"));
        assert_eq!(rgba_to_hex("rgb(255,255,255)").as_deref(), Some("#ffffff"));
        assert_eq!(rgba_to_hex("rgba(16,32,48,1)").as_deref(), Some("#102030"));
    }

    #[test]
    fn rgba_to_hex_rejects_malformed_input() {
        assert_eq!(rgba_to_hex("rgba(1,2,3)"), None);
        assert_eq!(rgba_to_hex("rgba(1,2,3,7)"), None);
        assert_eq!(rgba_to_hex("rgb(1,2)"), None);
        assert_eq!(rgba_to_hex("blue"), None);
    }
}
