//! String predicates: email, phone, length, word and token checks.

/// Characters removed by [`without_symbols`].
const SYMBOLS: &[char] = &[
    '&', '/', '\\', '#', ',', '+', '(', ')', '$', '~', '%', '.', '!', '^', '\'', '"', ';', ':',
    '*', '?', '[', ']', '<', '>', '{', '}', '@',
];

/// Characters that separate words in [`count_words`].
const WORD_SEPARATORS: &[char] = &[
    '\'', '(', ')', ':', ',', '!', '.', '-', '?', ';', '"', ' ',
];

/// Characters ignored when reading a phone number.
const PHONE_SEPARATORS: &[char] = &['+', '(', ')', '-', ' '];

const CREDIT_CARD_MAX_LEN: usize = 19;
const CREDIT_CARD_DIGITS: usize = 16;
const PHONE_DIGITS: usize = 10;

/// Check whether the input looks like an email address.
///
/// Requires exactly one `@` past the first character, a `.` somewhere
/// after it (but not immediately), no spaces and no `..`.
///
/// ```rust
/// use pureform::validator::is_email_address;
///
/// assert!(is_email_address("jane.doe@example.com"));
/// assert!(!is_email_address("@example.com"));
/// assert!(!is_email_address("jane@.example.com"));
/// assert!(!is_email_address("jane@@example.com"));
/// ```
pub fn is_email_address(input: &str) -> bool {
    let mut ats = input.match_indices('@');
    let Some((at, _)) = ats.next() else {
        return false;
    };
    if ats.next().is_some() {
        return false;
    }

    let domain = &input[at + 1..];
    at > 0
        && domain.contains('.')
        && !domain.starts_with('.')
        && !input.contains(' ')
        && !input.contains("..")
}

/// Check whether the input is a Malaysian phone number.
///
/// `+ ( ) -` and spaces are ignored; what remains must be ten digits.
/// Numbers starting with `1` must be `1-800`/`1-300` lines, numbers
/// starting with `0` must continue with `3` or `1`.
///
/// ```rust
/// use pureform::validator::is_phone_number;
///
/// assert!(is_phone_number("(03) 2345-6789"));
/// assert!(is_phone_number("1-800-123-456"));
/// assert!(!is_phone_number("1-900-123-456"));
/// assert!(!is_phone_number("0523456789"));
/// ```
pub fn is_phone_number(input: &str) -> bool {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .collect();

    if digits.len() != PHONE_DIGITS || !digits.iter().all(char::is_ascii_digit) {
        return false;
    }

    match digits[0] {
        '1' => matches!(&digits[1..4], ['8', '0', '0'] | ['3', '0', '0']),
        '0' => matches!(digits[1], '3' | '1'),
        _ => false,
    }
}

/// Check whether a string is empty.
///
/// A missing value (`None`) is deliberately *not* empty. Whitespace-only
/// strings are empty.
///
/// ```rust
/// use pureform::validator::is_empty;
///
/// assert!(is_empty(Some("")));
/// assert!(is_empty(Some("   ")));
/// assert!(!is_empty(Some(" a ")));
/// assert!(!is_empty(None));
/// ```
pub fn is_empty(input: Option<&str>) -> bool {
    match input {
        None => false,
        Some(s) => s.trim().is_empty() || s == " ",
    }
}

/// Check that the input has at least `n` characters.
pub fn is_of_length(input: &str, n: usize) -> bool {
    input.chars().count() >= n
}

/// Check that the input has at most `n` characters.
pub fn is_length(input: &str, n: usize) -> bool {
    input.chars().count() <= n
}

/// Count words, treating common punctuation and spaces as separators.
///
/// ```rust
/// use pureform::validator::count_words;
///
/// assert_eq!(count_words("Hello, world!"), 2);
/// assert_eq!(count_words("well-known (and loved)"), 4);
/// assert_eq!(count_words("   "), 0);
/// ```
pub fn count_words(input: &str) -> usize {
    input
        .split(|c| WORD_SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty())
        .count()
}

/// Word count is at most `n`.
pub fn less_words_than(input: &str, n: usize) -> bool {
    count_words(input) <= n
}

/// Word count is at least `n`.
pub fn more_words_than(input: &str, n: usize) -> bool {
    count_words(input) >= n
}

/// Every character is an ASCII letter or digit.
pub fn is_alphanumeric(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check whether the input is a credit card or bank number.
///
/// At most 19 characters; after removing hyphens exactly 16 alphanumeric
/// characters must remain.
///
/// ```rust
/// use pureform::validator::is_credit_card;
///
/// assert!(is_credit_card("4111-1111-1111-1111"));
/// assert!(!is_credit_card("4111-1111-1111-111"));
/// ```
pub fn is_credit_card(input: &str) -> bool {
    if input.chars().count() > CREDIT_CARD_MAX_LEN {
        return false;
    }
    let stripped: String = input.chars().filter(|&c| c != '-').collect();
    stripped.chars().count() == CREDIT_CARD_DIGITS && is_alphanumeric(&stripped)
}

/// Remove symbols and punctuation (hyphens are kept).
///
/// ```rust
/// use pureform::validator::without_symbols;
///
/// assert_eq!(without_symbols("Hello, (world)!"), "Hello world");
/// assert_eq!(without_symbols("re-use"), "re-use");
/// ```
pub fn without_symbols(input: &str) -> String {
    input.chars().filter(|c| !SYMBOLS.contains(c)).collect()
}

fn dash_to_space(input: &str) -> String {
    input.replace('-', " ")
}

/// Lowercased, symbol-free words of the input.
fn normalized_words(input: &str) -> Vec<String> {
    dash_to_space(input)
        .split(' ')
        .map(|word| without_symbols(word).to_lowercase())
        .collect()
}

/// Check whether the input contains at least one of `words`.
///
/// Matching is case-insensitive and ignores punctuation; hyphenated
/// words are split.
///
/// ```rust
/// use pureform::validator::contains;
///
/// assert!(contains("The quick-brown fox.", &["BROWN"]));
/// assert!(!contains("The quick-brown fox.", &["dog", "cat"]));
/// ```
pub fn contains<S: AsRef<str>>(input: &str, words: &[S]) -> bool {
    let tokens = normalized_words(input);
    words
        .iter()
        .any(|word| tokens.contains(&word.as_ref().to_lowercase()))
}

/// The inverse of [`contains`].
pub fn lacks<S: AsRef<str>>(input: &str, words: &[S]) -> bool {
    !contains(input, words)
}

/// Check whether the input is made up of the given tokens.
///
/// With several space-separated words, every word must be one of
/// `tokens` (case-sensitive). A single word passes when it is a
/// concatenation of tokens taken in their given order, each at most once.
/// Failing that, the word is read as a string over a one-character
/// alphabet, and only its first character decides the outcome.
///
/// ```rust
/// use pureform::validator::is_composed_of;
///
/// assert!(is_composed_of("foo bar", &["foo", "bar"]));
/// assert!(!is_composed_of("foo baz", &["foo", "bar"]));
/// assert!(is_composed_of("foobar", &["foo", "bar"]));
/// assert!(!is_composed_of("barfoo", &["foo", "bar"]));
/// ```
pub fn is_composed_of<S: AsRef<str>>(input: &str, tokens: &[S]) -> bool {
    let norm = dash_to_space(&without_symbols(input));
    let words: Vec<&str> = norm.split(' ').collect();

    if words.len() > 1 {
        return words
            .iter()
            .all(|word| tokens.iter().any(|token| token.as_ref() == *word));
    }

    if is_ordered_concatenation(&norm, tokens) {
        return true;
    }

    // Decided by the first character alone; later characters are not read.
    match norm.chars().next() {
        Some(first) => {
            let mut buf = [0u8; 4];
            let first: &str = first.encode_utf8(&mut buf);
            tokens.iter().any(|token| token.as_ref() == first)
        }
        None => false,
    }
}

/// `rest` is a concatenation of a non-empty, ordered subsequence of `tokens`.
fn is_ordered_concatenation<S: AsRef<str>>(rest: &str, tokens: &[S]) -> bool {
    tokens.iter().enumerate().any(|(i, token)| {
        let token = token.as_ref();
        if token.is_empty() {
            return false;
        }
        match rest.strip_prefix(token) {
            Some("") => true,
            Some(remaining) => is_ordered_concatenation(remaining, &tokens[i + 1..]),
            None => false,
        }
    })
}

/// False iff two adjacent characters are both spaces.
///
/// Single leading or trailing spaces are not detected.
pub fn is_trimmed(input: &str) -> bool {
    !input.contains("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_past_first_char() {
        assert!(is_email_address("a@b.co"));
        assert!(!is_email_address("@b.co"));
        assert!(!is_email_address("ab.co"));
    }

    #[test]
    fn email_rejects_spaces_and_double_dots() {
        assert!(!is_email_address("jane doe@example.com"));
        assert!(!is_email_address("jane@example..com"));
        assert!(!is_email_address("jane..doe@example.com"));
    }

    #[test]
    fn email_requires_dot_after_at() {
        assert!(!is_email_address("jane.doe@example"));
        assert!(!is_email_address("jane@.com"));
        assert!(is_email_address("jane@mail.example.com"));
    }

    #[test]
    fn email_rejects_multiple_ats() {
        assert!(!is_email_address("jane@doe@example.com"));
    }

    #[test]
    fn phone_accepts_landline_and_mobile_prefixes() {
        assert!(is_phone_number("0312345678"));
        assert!(is_phone_number("+0112345678"));
        assert!(is_phone_number("1300 123 456"));
        assert!(is_phone_number("1-800-12-3456"));
    }

    #[test]
    fn phone_rejects_wrong_length_or_prefix() {
        assert!(!is_phone_number("031234567"));
        assert!(!is_phone_number("03123456789"));
        assert!(!is_phone_number("1900123456"));
        assert!(!is_phone_number("0212345678"));
        assert!(!is_phone_number("5312345678"));
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(!is_phone_number("03123x5678"));
        assert!(!is_phone_number("03.12345678"));
        assert!(!is_phone_number(""));
    }

    #[test]
    fn empty_treats_none_as_not_empty() {
        assert!(!is_empty(None));
    }

    #[test]
    fn empty_detects_whitespace_only() {
        assert!(is_empty(Some("")));
        assert!(is_empty(Some(" ")));
        assert!(is_empty(Some("\t\n ")));
        assert!(!is_empty(Some("x")));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(is_of_length("ab", 2));
        assert!(!is_of_length("a", 2));
        assert!(is_length("ab", 2));
        assert!(!is_length("abc", 2));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(is_length("héllo", 5));
        assert!(is_of_length("日本", 2));
        assert!(!is_of_length("日本", 3));
    }

    #[test]
    fn count_words_splits_on_punctuation() {
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("one,two;three"), 3);
        assert_eq!(count_words("\"quoted\" (words)"), 2);
        assert_eq!(count_words("don't"), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn word_count_bounds() {
        assert!(less_words_than("a b c", 3));
        assert!(!less_words_than("a b c d", 3));
        assert!(more_words_than("a b c", 3));
        assert!(!more_words_than("a b", 3));
    }

    #[test]
    fn alphanumeric_rejects_symbols_and_spaces() {
        assert!(is_alphanumeric("abcXYZ019"));
        assert!(is_alphanumeric(""));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc_123"));
        assert!(!is_alphanumeric("café"));
    }

    #[test]
    fn credit_card_strips_hyphens() {
        assert!(is_credit_card("4111111111111111"));
        assert!(is_credit_card("4111-1111-1111-1111"));
        assert!(!is_credit_card("4111-1111-1111-111"));
    }

    #[test]
    fn credit_card_rejects_long_raw_input() {
        assert!(!is_credit_card("4111--1111-1111-1111"));
        assert!(!is_credit_card("4111 1111 1111 1111"));
    }

    #[test]
    fn without_symbols_keeps_letters_digits_and_hyphens() {
        assert_eq!(without_symbols("a&b/c\\d#e"), "abcde");
        assert_eq!(without_symbols("{x}[y]<z>"), "xyz");
        assert_eq!(without_symbols("e-mail@host"), "e-mailhost");
    }

    #[test]
    fn contains_is_case_and_punctuation_insensitive() {
        assert!(contains("Hello, World!", &["world"]));
        assert!(contains("state-of-the-art", &["ART"]));
        assert!(!contains("Hello, World!", &["hell"]));
    }

    #[test]
    fn lacks_negates_contains() {
        assert!(lacks("Hello, World!", &["goodbye"]));
        assert!(!lacks("Hello, World!", &["hello"]));
    }

    #[test]
    fn composed_of_multiple_words_requires_every_word() {
        assert!(is_composed_of("one two one", &["one", "two"]));
        assert!(!is_composed_of("one Two", &["one", "two"]));
        assert!(is_composed_of("one-two", &["one", "two"]));
    }

    #[test]
    fn composed_of_single_word_uses_ordered_concatenation() {
        assert!(is_composed_of("ab", &["a", "b"]));
        assert!(is_composed_of("b", &["a", "b"]));
        assert!(is_composed_of("foobarbaz", &["foo", "bar", "baz"]));
        assert!(is_composed_of("foobaz", &["foo", "bar", "baz"]));
    }

    #[test]
    fn composed_of_single_word_alphabet_mode_checks_only_first_char() {
        assert!(is_composed_of("abq", &["a", "b"]));
        assert!(is_composed_of("aaaz", &["a"]));
        assert!(!is_composed_of("qab", &["a", "b"]));
    }

    #[test]
    fn composed_of_empty_input_is_false() {
        assert!(!is_composed_of("", &["a"]));
        assert!(!is_composed_of("!!", &["a"]));
    }

    #[test]
    fn trimmed_detects_double_spaces_only() {
        assert!(is_trimmed("a b c"));
        assert!(is_trimmed(" a "));
        assert!(!is_trimmed("a  b"));
        assert!(!is_trimmed("  a"));
    }
}
