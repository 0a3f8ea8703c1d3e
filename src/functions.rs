//! Wiki functions built on the escape codec and the pattern applier.
//!
//! Each function receives its arguments raw, exactly as written in the calling
//! page, and expands them through the host's [`Expander`]. Parser functions take
//! positional arguments; tag functions (`esc`, `linkpage`, `linktext`) take the
//! text between their tags. Every function returns a [`Rendered`] value whose text
//! the host parses again as markup.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`trim`] | argument with surrounding whitespace removed |
//! | [`uesc`] | trimmed, then unescaped |
//! | [`uescnowiki`] | as [`uesc`], wrapped in `<nowiki>` |
//! | [`trimuesc`] | unescaped, then trimmed |
//! | [`esc`] | tag content escaped, then expanded |
//! | [`linkpage`] | links replaced by their target page |
//! | [`linktext`] | links replaced by their display text |
//! | [`ueif`] | second or third argument, by emptiness of the first |
//! | [`or`] | first non-empty argument |
//! | [`ueifeq`] | third or fourth argument, by equality of the first two |
//! | [`token`] | value substituted into a pattern |
//! | [`tokenif`] | as [`token`], or a default for an empty value |
//! | [`ueswitch`] | value of the case matching a key |
//! | [`follow`] | redirect target of a page, or the page itself |
//!
//! Missing arguments count as empty, except the token and pattern of [`token`]
//! and [`tokenif`], which default to [`DEFAULT_TOKEN`] and [`DEFAULT_PATTERN`].
//! Trimming removes ASCII blanks only (space, `\t`, `\n`, `\r`, NUL, vertical tab);
//! a no-break space survives. Tag content of exactly `0` renders as nothing.
//!
//! ## Examples
//!
//! ```rust
//! use parser_power::functions::{token, ueswitch};
//! use parser_power::host::Verbatim;
//!
//! let out = token(&Verbatim, &[" cat ", "@", "I have a @."]);
//! assert_eq!(out.text, "I have a cat.");
//!
//! let out = ueswitch(&Verbatim, &["b", "a=1", "b=2", "none"]);
//! assert_eq!(out.text, "2");
//! ```

use crate::escape::{escape, unescape};
use crate::host::{ExpandFlags, Expander, RedirectResolver};
use crate::pattern::{apply_pattern, DEFAULT_PATTERN, DEFAULT_TOKEN};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Internal link syntax, `[[target]]` or `[[target|text]]`.
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

/// Output of a wiki function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub text: String,
    /// When `false` the host must parse `text` again as markup.
    pub noparse: bool,
}

impl Rendered {
    /// Output the host should parse as markup.
    pub fn markup(text: impl Into<String>) -> Self {
        Rendered {
            text: text.into(),
            noparse: false,
        }
    }

    fn empty() -> Self {
        Rendered::markup(String::new())
    }
}

/// Whitespace stripped from the ends of arguments: space, tab, newline, carriage
/// return, NUL and vertical tab. Other Unicode whitespace such as U+00A0 is kept.
const BLANKS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

fn trim_blanks(text: &str) -> &str {
    text.trim_matches(BLANKS)
}

/// Expands the argument at `index` and trims it; a missing argument is empty.
fn expand_trimmed(expander: &dyn Expander, args: &[&str], index: usize) -> String {
    args.get(index)
        .map(|raw| trim_blanks(&expander.expand(raw, ExpandFlags::FULL)).to_string())
        .unwrap_or_default()
}

/// Expands the argument at `index` without trimming; a missing argument is empty.
fn expand_raw(expander: &dyn Expander, args: &[&str], index: usize) -> String {
    args.get(index)
        .map(|raw| expander.expand(raw, ExpandFlags::FULL))
        .unwrap_or_default()
}

/// `trim`: the first argument, expanded and trimmed.
pub fn trim(expander: &dyn Expander, args: &[&str]) -> Rendered {
    Rendered::markup(expand_trimmed(expander, args, 0))
}

/// `uesc`: the first argument trimmed and then unescaped, so escaped whitespace
/// at either end survives.
pub fn uesc(expander: &dyn Expander, args: &[&str]) -> Rendered {
    Rendered::markup(unescape(&expand_trimmed(expander, args, 0)))
}

/// `uescnowiki`: as [`uesc`], wrapped in `<nowiki>` so the host leaves it as text.
pub fn uescnowiki(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let text = unescape(&expand_trimmed(expander, args, 0));
    Rendered::markup(format!("<nowiki>{text}</nowiki>"))
}

/// `trimuesc`: the first argument unescaped and then trimmed, so no whitespace
/// survives at either end.
pub fn trimuesc(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let text = args
        .first()
        .map(|raw| trim_blanks(&unescape(&expander.expand(raw, ExpandFlags::FULL))).to_string())
        .unwrap_or_default();
    Rendered::markup(text)
}

/// `<esc>` (and `<esc1>` through `<esc9>`, which allow nesting): escapes the tag
/// content, then expands it. Escaping first keeps template syntax in the content
/// from being expanded.
pub fn esc(expander: &dyn Expander, content: &str) -> Rendered {
    Rendered::markup(expander.expand(&escape(content), ExpandFlags::FULL))
}

fn replace_links(expander: &dyn Expander, content: &str, link: fn(&str) -> &str) -> Rendered {
    let text = expander.expand(content, ExpandFlags::FULL);
    // "0" counts as no content, like an empty tag
    if text.is_empty() || text == "0" {
        return Rendered::empty();
    }
    let replaced = LINK_REGEX.replace_all(&text, |caps: &Captures<'_>| link(&caps[1]).to_string());
    Rendered::markup(replaced.into_owned())
}

/// `<linkpage>`: replaces each internal link in the expanded content with the
/// page it points to.
///
/// ```rust
/// use parser_power::functions::linkpage;
/// use parser_power::host::Verbatim;
///
/// let out = linkpage(&Verbatim, "see [[Main Page|home]] and [[Help]]");
/// assert_eq!(out.text, "see Main Page and Help");
/// ```
pub fn linkpage(expander: &dyn Expander, content: &str) -> Rendered {
    replace_links(expander, content, |inner| {
        inner.split_once('|').map_or(inner, |(page, _)| page)
    })
}

/// `<linktext>`: replaces each internal link in the expanded content with the
/// text it would display.
pub fn linktext(expander: &dyn Expander, content: &str) -> Rendered {
    replace_links(expander, content, |inner| {
        inner.split_once('|').map_or(inner, |(_, text)| text)
    })
}

/// `ueif`: the unescaped second argument when the first is non-empty after
/// trimming, otherwise the unescaped third argument.
pub fn ueif(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let condition = expand_trimmed(expander, args, 0);
    let chosen = if condition.is_empty() { 2 } else { 1 };
    Rendered::markup(unescape(&expand_raw(expander, args, chosen)))
}

/// `or`: the first argument that is non-empty after trimming, unescaped.
pub fn or(expander: &dyn Expander, args: &[&str]) -> Rendered {
    args.iter()
        .map(|raw| trim_blanks(&expander.expand(raw, ExpandFlags::FULL)).to_string())
        .find(|value| !value.is_empty())
        .map(|value| Rendered::markup(unescape(&value)))
        .unwrap_or_else(Rendered::empty)
}

/// `ueifeq`: the unescaped third argument when the first two are equal after
/// trimming and unescaping, otherwise the unescaped fourth argument.
pub fn ueifeq(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let left = unescape(&expand_trimmed(expander, args, 0));
    let right = unescape(&expand_trimmed(expander, args, 1));
    let chosen = if left == right { 2 } else { 3 };
    Rendered::markup(unescape(&expand_raw(expander, args, chosen)))
}

/// Reads the token argument literally: nothing in it is expanded, so it matches
/// the unexpanded pattern text.
fn literal_token(expander: &dyn Expander, args: &[&str], index: usize) -> String {
    args.get(index)
        .map(|raw| unescape(trim_blanks(&expander.expand(raw, ExpandFlags::LITERAL))))
        .unwrap_or_else(|| DEFAULT_TOKEN.to_string())
}

/// Substitutes `value` into the literal pattern, then expands and unescapes the
/// result.
fn render_pattern(expander: &dyn Expander, value: &str, token: &str, pattern: &str) -> Rendered {
    let literal = expander.expand(pattern, ExpandFlags::LITERAL);
    let substituted = apply_pattern(value, token, &literal);
    trace!("substituted {value:?} for {token:?}: {substituted:?}");
    let expanded = expander.expand(&substituted, ExpandFlags::FULL);
    Rendered::markup(unescape(trim_blanks(&expanded)))
}

/// `token`: arguments are value, token and pattern. Every occurrence of the token
/// in the pattern is replaced by the trimmed value, and the result is expanded.
///
/// The token and pattern are compared before expansion, so a pattern such as
/// `{{tl|x}}` receives the value as the template's argument.
pub fn token(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let value = expand_trimmed(expander, args, 0);
    let token = literal_token(expander, args, 1);
    let pattern = args.get(2).copied().unwrap_or(DEFAULT_PATTERN);
    render_pattern(expander, &value, &token, pattern)
}

/// `tokenif`: as [`token`] when the value is non-empty; otherwise the unescaped
/// fourth argument.
pub fn tokenif(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let value = expand_trimmed(expander, args, 0);
    if value.is_empty() {
        let default = expand_trimmed(expander, args, 3);
        return Rendered::markup(unescape(&default));
    }
    let token = literal_token(expander, args, 1);
    let pattern = args.get(2).copied().unwrap_or(DEFAULT_PATTERN);
    render_pattern(expander, &value, &token, pattern)
}

/// `ueswitch`: the first argument is the key, the rest are `case=value` pairs.
///
/// A final argument without `=` is the default. A case without `=` that matches
/// the key falls through to the next case that has a value. Each case is trimmed
/// and split at its first `=`, escaped or not; the label is then unescaped and
/// compared with the trimmed, unescaped key. Space around the `=` is part of the
/// label, so `b = 2` does not match the key `b`.
pub fn ueswitch(expander: &dyn Expander, args: &[&str]) -> Rendered {
    let Some((raw_key, cases)) = args.split_first() else {
        return Rendered::empty();
    };
    if cases.is_empty() {
        return Rendered::empty();
    }
    let key = unescape(trim_blanks(&expander.expand(raw_key, ExpandFlags::FULL)));

    let mut cases: Vec<String> = cases
        .iter()
        .map(|raw| expander.expand(raw, ExpandFlags::FULL))
        .collect();
    let has_default = cases.last().is_some_and(|last| !last.contains('='));
    let default = if has_default {
        cases.pop().unwrap_or_default()
    } else {
        String::new()
    };

    let mut found = false;
    for case in &cases {
        let case = trim_blanks(case);
        let (label, value) = match case.split_once('=') {
            Some((label, value)) => (label, Some(value)),
            None => (case, None),
        };
        if !found && unescape(label) == key {
            found = true;
        }
        if let (true, Some(value)) = (found, value) {
            return Rendered::markup(unescape(trim_blanks(value)));
        }
    }

    debug!("ueswitch: no case for key {key:?}, using default");
    Rendered::markup(unescape(trim_blanks(&default)))
}

/// `follow`: the page the first argument redirects to, or the argument itself
/// when it is not a redirect.
pub fn follow(expander: &dyn Expander, resolver: &dyn RedirectResolver, args: &[&str]) -> Rendered {
    let page = args
        .first()
        .map(|raw| trim_blanks(&unescape(&expander.expand(raw, ExpandFlags::FULL))).to_string())
        .unwrap_or_default();
    match resolver.redirect_target(&page) {
        Some(target) => {
            debug!("follow: {page:?} redirects to {target:?}");
            Rendered::markup(target)
        }
        None => Rendered::markup(page),
    }
}
