use parser_power::functions::{
    esc, follow, linkpage, linktext, or, token, tokenif, trim, trimuesc, uesc, uescnowiki, ueif,
    ueifeq, ueswitch,
};
use parser_power::host::{NoRedirects, Verbatim};
use parser_power::{
    apply_pattern, escape, sort_pairs, unescape, ExpandFlags, Expander, RedirectResolver,
    SortKeyValueComparator, SortOptions,
};
use std::collections::HashMap;

/// A tiny host: `{{name}}` expands to a template body, `{{{n}}}` to a frame argument.
struct MockHost {
    templates: HashMap<&'static str, &'static str>,
    frame_args: Vec<&'static str>,
}

impl MockHost {
    fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert("fruit", "apple");
        templates.insert("blank", "   ");
        templates.insert("pipe", "|");
        MockHost {
            templates,
            frame_args: vec!["first", "second"],
        }
    }
}

impl Expander for MockHost {
    fn expand(&self, raw: &str, flags: ExpandFlags) -> String {
        let mut text = raw.to_string();
        if !flags.no_args {
            for (i, value) in self.frame_args.iter().enumerate() {
                text = text.replace(&format!("{{{{{{{}}}}}}}", i + 1), value);
            }
        }
        if !flags.no_templates {
            for (name, body) in &self.templates {
                text = text.replace(&format!("{{{{{name}}}}}"), body);
            }
        }
        text
    }
}

struct Redirects;

impl RedirectResolver for Redirects {
    fn redirect_target(&self, page: &str) -> Option<String> {
        (page == "Colour").then(|| "Color".to_string())
    }
}

#[test]
fn test_mock_host_expansion() {
    let host = MockHost::new();
    assert_eq!(host.expand("{{fruit}}/{{{2}}}", ExpandFlags::FULL), "apple/second");
    assert_eq!(
        host.expand("{{fruit}}/{{{2}}}", ExpandFlags::LITERAL),
        "{{fruit}}/{{{2}}}"
    );
}

#[test]
fn test_trim_expands_first() {
    let host = MockHost::new();
    assert_eq!(trim(&host, &[" {{fruit}} "]).text, "apple");
    assert_eq!(trim(&host, &["{{blank}}"]).text, "");
}

#[test]
fn test_unescape_functions_differ_in_trim_order() {
    let host = MockHost::new();
    assert_eq!(uesc(&host, &["\\_{{fruit}}\\_"]).text, " apple ");
    assert_eq!(trimuesc(&host, &["\\_{{fruit}}\\_"]).text, "apple");
    assert_eq!(uescnowiki(&host, &["{{fruit}}\\!"]).text, "<nowiki>apple|</nowiki>");
}

#[test]
fn test_conditionals_use_expanded_condition() {
    let host = MockHost::new();
    assert_eq!(ueif(&host, &["{{blank}}", "yes", "no"]).text, "no");
    assert_eq!(ueif(&host, &["{{{1}}}", "yes\\!", "no"]).text, "yes|");
    assert_eq!(or(&host, &["{{blank}}", "", "{{fruit}}"]).text, "apple");
    assert_eq!(
        ueifeq(&host, &["{{pipe}}", "\\!", "equal", "different"]).text,
        "equal"
    );
}

#[test]
fn test_token_substitutes_before_expansion() {
    let host = MockHost::new();
    // The token "{{{1}}}" is read literally, so it matches the literal pattern
    let out = token(&host, &["{{fruit}}", "{{{1}}}", "<{{{1}}}>"]);
    assert_eq!(out.text, "<apple>");
}

#[test]
fn test_token_pattern_expanded_after_substitution() {
    let host = MockHost::new();
    let out = token(&host, &["fru", "@", "{{@it}}"]);
    assert_eq!(out.text, "apple");
}

#[test]
fn test_tokenif_empty_value_uses_default() {
    let host = MockHost::new();
    assert_eq!(
        tokenif(&host, &["{{blank}}", "x", "[x]", " {{fruit}}\\! "]).text,
        "apple|"
    );
    assert_eq!(tokenif(&host, &["{{fruit}}", "x", "[x]", "none"]).text, "[apple]");
}

#[test]
fn test_ueswitch_with_expanded_cases() {
    let host = MockHost::new();
    let args = ["{{fruit}}", "pear=green", "apple={{{2}}}", "unknown"];
    assert_eq!(ueswitch(&host, &args).text, "second");

    let args = ["fig", "pear=green", "apple=red", "{{fruit}}"];
    assert_eq!(ueswitch(&host, &args).text, "apple");
}

#[test]
fn test_esc_round_trip_through_uesc() {
    let host = MockHost::new();
    let escaped = esc(&host, "{{fruit}}|a=b");
    assert_eq!(escaped.text, "\\{\\{fruit\\}\\}\\!a\\=b");
    assert_eq!(uesc(&Verbatim, &[escaped.text.as_str()]).text, "{{fruit}}|a=b");
}

#[test]
fn test_links_after_expansion() {
    let host = MockHost::new();
    assert_eq!(
        linkpage(&host, "[[{{fruit}}|tasty]] [[Pear]]").text,
        "apple Pear"
    );
    assert_eq!(
        linktext(&host, "[[{{fruit}}|tasty]] [[Pear]]").text,
        "tasty Pear"
    );
}

#[test]
fn test_follow_resolves_redirects() {
    let host = MockHost::new();
    assert_eq!(follow(&host, &Redirects, &["Colour"]).text, "Color");
    assert_eq!(follow(&host, &Redirects, &["Special:Random"]).text, "Special:Random");
    assert_eq!(follow(&host, &NoRedirects, &["Colour"]).text, "Colour");
}

#[test]
fn test_every_function_requests_reparse() {
    let outputs = [
        trim(&Verbatim, &["a"]),
        uesc(&Verbatim, &["a"]),
        ueif(&Verbatim, &["a", "b"]),
        ueswitch(&Verbatim, &["a", "a=b"]),
        esc(&Verbatim, "a"),
        follow(&Verbatim, &NoRedirects, &["a"]),
    ];
    assert!(outputs.iter().all(|out| !out.noparse));
}

#[test]
fn test_escaped_list_items_sort_and_render() {
    // A list whose items hold "=" and "|" in escaped form
    let list = format!("{},{},{}", escape("b=2"), escape("A|1"), escape("c"));
    let mut pairs: Vec<(String, String)> = list
        .split(',')
        .map(|item| {
            let plain = unescape(item);
            (plain.to_lowercase(), plain)
        })
        .collect();

    sort_pairs(&mut pairs, SortOptions::new(), None);
    let rendered: Vec<String> = pairs
        .iter()
        .map(|(_, value)| apply_pattern(value, "x", "<x>"))
        .collect();
    assert_eq!(rendered, vec!["<A|1>", "<b=2>", "<c>"]);
}

#[test]
fn test_comparator_reused_with_same_options() {
    let comparator = SortKeyValueComparator::new(
        SortOptions::NUMERIC | SortOptions::DESCENDING,
        Some(SortOptions::CASE_SENSITIVE | SortOptions::DESCENDING),
    );

    let mut first = vec![("1", "a"), ("3", "b"), ("3", "c")];
    comparator.sort(&mut first);
    assert_eq!(first, vec![("3", "c"), ("3", "b"), ("1", "a")]);

    let mut second = vec![("2.5", "x"), ("10", "y"), ("abc", "z")];
    comparator.sort(&mut second);
    // Non-numbers sort last ascending, so first when descending
    assert_eq!(second, vec![("abc", "z"), ("10", "y"), ("2.5", "x")]);
}

#[test]
fn test_keyword_options_drive_sort() {
    let mut pairs = vec![("b", "1"), ("B", "2"), ("a", "3")];
    let key: SortOptions = "alpha cs".parse().unwrap();
    sort_pairs(&mut pairs, key, None);
    assert_eq!(pairs, vec![("B", "2"), ("a", "3"), ("b", "1")]);

    let key = SortOptions::parse_lenient("ncs desc bogus");
    sort_pairs(&mut pairs, key, None);
    assert_eq!(pairs, vec![("B", "2"), ("b", "1"), ("a", "3")]);
}
