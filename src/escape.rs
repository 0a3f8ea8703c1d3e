//! Delimiter escaping for list items.
//!
//! List-oriented wiki functions split their input on delimiters such as `,`, `=`
//! and `|`, and template syntax reacts to `{`, `}`, `[` and `]`. This module hides
//! those characters behind two-character escape sequences so they can travel
//! through a list item literally, and restores them afterwards.
//!
//! ## Escape sequences
//!
//! | Sequence | Character |
//! |----------|-----------|
//! | `\\`     | `\`       |
//! | `\n`     | newline   |
//! | `\_`     | space     |
//! | `\{`     | `{`       |
//! | `\}`     | `}`       |
//! | `\(`     | `[`       |
//! | `\)`     | `]`       |
//! | `\:`     | `:`       |
//! | `\!`     | `\|`      |
//! | `\=`     | `=`       |
//! | `\<`     | `<`       |
//! | `\>`     | `>`       |
//!
//! [`escape`] never produces `\n` or `\_`: whitespace is only escaped by authors who
//! need it to survive trimming. [`unescape`] understands every sequence above.
//!
//! ## Examples
//!
//! ```rust
//! use parser_power::escape::{escape, unescape};
//!
//! let escaped = escape("a|b=c");
//! assert_eq!(escaped, "a\\!b\\=c");
//! assert_eq!(unescape(&escaped), "a|b=c");
//!
//! // Authored whitespace
//! assert_eq!(unescape("\\_padded\\_"), " padded ");
//! ```

/// The escape marker that introduces every sequence.
pub const ESCAPE_MARKER: char = '\\';

/// Returns the literal character a designator stands for, if it is recognised.
#[inline]
fn literal_for(designator: char) -> Option<char> {
    match designator {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        '_' => Some(' '),
        '{' => Some('{'),
        '}' => Some('}'),
        '(' => Some('['),
        ')' => Some(']'),
        ':' => Some(':'),
        '!' => Some('|'),
        '=' => Some('='),
        '<' => Some('<'),
        '>' => Some('>'),
        _ => None,
    }
}

/// Returns the escape sequence [`escape`] emits for `ch`, or `None` if `ch` passes
/// through unchanged.
///
/// # Examples
///
/// ```rust
/// use parser_power::escape::escaped;
///
/// assert_eq!(escaped('|'), Some("\\!"));
/// assert_eq!(escaped('a'), None);
/// ```
#[must_use]
pub const fn escaped(ch: char) -> Option<&'static str> {
    match ch {
        '\\' => Some("\\\\"),
        '{' => Some("\\{"),
        '}' => Some("\\}"),
        '[' => Some("\\("),
        ']' => Some("\\)"),
        ':' => Some("\\:"),
        '|' => Some("\\!"),
        '=' => Some("\\="),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        _ => None,
    }
}

/// Whether `ch` is recognised by [`unescape`] when it follows the escape marker.
#[must_use]
pub fn is_escape_designator(ch: char) -> bool {
    literal_for(ch).is_some()
}

/// Replaces every significant character in `text` with its escape sequence.
///
/// The marker itself is escaped too, so the result can always be inverted with
/// [`unescape`]. Escaping twice yields a different text than escaping once.
///
/// # Examples
///
/// ```rust
/// use parser_power::escape::escape;
///
/// assert_eq!(escape("{{tl}}"), "\\{\\{tl\\}\\}");
/// assert_eq!(escape("\\!"), "\\\\!");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match escaped(ch) {
            Some(sequence) => output.push_str(sequence),
            None => output.push(ch),
        }
    }
    output
}

/// Replaces every recognised escape sequence in `text` with its literal character.
///
/// The scan runs once, left to right; characters produced by a replacement are
/// never examined again, so `\\!` becomes `\!` rather than `|`. A marker followed
/// by an unknown designator, or ending the text, is kept as written.
///
/// # Examples
///
/// ```rust
/// use parser_power::escape::unescape;
///
/// assert_eq!(unescape("a\\=b"), "a=b");
/// assert_eq!(unescape("\\\\!"), "\\!");
/// assert_eq!(unescape("C:\\q"), "C:\\q");
/// assert_eq!(unescape("end\\"), "end\\");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    if !text.contains(ESCAPE_MARKER) {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE_MARKER {
            output.push(ch);
            continue;
        }
        match chars.peek().copied().and_then(literal_for) {
            Some(literal) => {
                chars.next();
                output.push(literal);
            }
            // Unknown designator - the marker stays, the next char is handled normally
            None => output.push(ESCAPE_MARKER),
        }
    }

    output
}

/// Byte index of the first `target` in `text` that is not part of an escape
/// sequence.
///
/// A marker only hides the character after it when that character is a
/// recognised designator, matching what [`unescape`] would consume.
///
/// # Examples
///
/// ```rust
/// use parser_power::escape::find_unescaped;
///
/// assert_eq!(find_unescaped("a\\=b=c", '='), Some(4));
/// assert_eq!(find_unescaped("a\\\\=b", '='), Some(3));
/// assert_eq!(find_unescaped("a\\=b", '|'), None);
/// ```
#[must_use]
pub fn find_unescaped(text: &str, target: char) -> Option<usize> {
    let mut chars = text.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if ch == ESCAPE_MARKER {
            if chars.peek().is_some_and(|&(_, next)| is_escape_designator(next)) {
                chars.next();
            }
            continue;
        }
        if ch == target {
            return Some(index);
        }
    }
    None
}

/// Splits `text` at the first unescaped `separator`.
#[must_use]
pub fn split_unescaped_once(text: &str, separator: char) -> Option<(&str, &str)> {
    find_unescaped(text, separator)
        .map(|index| (&text[..index], &text[index + separator.len_utf8()..]))
}
