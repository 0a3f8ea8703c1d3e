//! Token substitution into pattern templates.
//!
//! A pattern is caller-supplied text containing zero or more occurrences of a
//! token. [`apply_pattern`] injects a value at every occurrence:
//!
//! ```rust
//! use parser_power::pattern::apply_pattern;
//!
//! assert_eq!(apply_pattern("cat", "x", "I have a x."), "I have a cat.");
//! assert_eq!(apply_pattern("cat", "x", "no placeholder here"), "no placeholder here");
//! ```
//!
//! Substitution is a single scan over the original pattern. Text inserted for one
//! occurrence is never searched again, so a value that itself contains the token
//! does not recurse.

/// Token used when the caller does not supply one.
pub const DEFAULT_TOKEN: &str = "x";

/// Pattern used when the caller does not supply one. With the default token this
/// yields the value itself.
pub const DEFAULT_PATTERN: &str = "x";

/// Replaces every occurrence of `token` in `pattern` with `value`.
///
/// An empty token leaves the pattern untouched, as does a pattern without any
/// occurrence of the token.
///
/// # Examples
///
/// ```rust
/// use parser_power::pattern::apply_pattern;
///
/// assert_eq!(apply_pattern("ab", "@", "@-@"), "ab-ab");
/// assert_eq!(apply_pattern("@", "@", "[@]"), "[@]");
/// assert_eq!(apply_pattern("v", "", "keep"), "keep");
/// ```
#[must_use]
pub fn apply_pattern(value: &str, token: &str, pattern: &str) -> String {
    if token.is_empty() || !pattern.contains(token) {
        return pattern.to_string();
    }
    pattern.replace(token, value)
}

/// Like [`apply_pattern`], but first replaces every occurrence of `index_token`
/// with the decimal form of `index`.
///
/// The index is substituted before the value, so a value containing the index
/// token is left alone. An empty index token skips the index step.
///
/// # Examples
///
/// ```rust
/// use parser_power::pattern::apply_pattern_with_index;
///
/// let row = apply_pattern_with_index("Apple", "#", 3, "x", "#. x");
/// assert_eq!(row, "3. Apple");
///
/// let no_index = apply_pattern_with_index("Apple", "", 3, "x", "#. x");
/// assert_eq!(no_index, "#. Apple");
/// ```
#[must_use]
pub fn apply_pattern_with_index(
    value: &str,
    index_token: &str,
    index: usize,
    token: &str,
    pattern: &str,
) -> String {
    if index_token.is_empty() || !pattern.contains(index_token) {
        return apply_pattern(value, token, pattern);
    }
    let indexed = pattern.replace(index_token, &index.to_string());
    apply_pattern(value, token, &indexed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occurrence() {
        assert_eq!(apply_pattern("cat", "x", "I have a x."), "I have a cat.");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        assert_eq!(apply_pattern("1", "$", "$+$=$$"), "1+1=11");
    }

    #[test]
    fn test_no_occurrence_returns_pattern() {
        assert_eq!(
            apply_pattern("cat", "x", "no placeholder here"),
            "no placeholder here"
        );
    }

    #[test]
    fn test_empty_token_is_noop() {
        assert_eq!(apply_pattern("cat", "", "abc"), "abc");
        assert_eq!(apply_pattern("cat", "", ""), "");
    }

    #[test]
    fn test_value_containing_token_not_rescanned() {
        assert_eq!(apply_pattern("xx", "x", "<x>"), "<xx>");
        assert_eq!(apply_pattern("{tok}", "{tok}", "a{tok}b"), "a{tok}b");
    }

    #[test]
    fn test_multi_char_token_non_overlapping() {
        // "aaa" holds one non-overlapping "aa" starting at 0
        assert_eq!(apply_pattern("B", "aa", "aaa"), "Ba");
        assert_eq!(apply_pattern("B", "aa", "aaaa"), "BB");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(apply_pattern("", "x", "axbxc"), "abc");
    }

    #[test]
    fn test_defaults_yield_value() {
        assert_eq!(apply_pattern("value", DEFAULT_TOKEN, DEFAULT_PATTERN), "value");
    }

    #[test]
    fn test_index_then_value() {
        assert_eq!(
            apply_pattern_with_index("Pear", "#", 12, "x", "(#) x #"),
            "(12) Pear 12"
        );
    }

    #[test]
    fn test_index_token_inside_value_untouched() {
        assert_eq!(apply_pattern_with_index("#1", "#", 2, "x", "#:x"), "2:#1");
    }
}
