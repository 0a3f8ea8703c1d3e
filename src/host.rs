//! Services supplied by the host templating runtime.
//!
//! The functions in [`crate::functions`] receive their arguments raw and rely on
//! the host to expand template and argument references in them. The host also
//! knows which pages are redirects. Both services are passed in as trait objects
//! so the text utilities stay independent of any particular runtime.
//!
//! Two trivial implementations are provided: [`Verbatim`], which treats every
//! argument as already expanded, and [`NoRedirects`].

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Which parts of a raw argument the host should expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExpandFlags {
    /// Leave argument references (`{{{1}}}`) unexpanded.
    pub no_args: bool,
    /// Leave template calls (`{{name}}`) unexpanded.
    pub no_templates: bool,
}

impl ExpandFlags {
    /// Expand everything.
    pub const FULL: ExpandFlags = ExpandFlags {
        no_args: false,
        no_templates: false,
    };

    /// Expand neither arguments nor templates, so the text is taken literally.
    /// Tokens and patterns are read this way to be compared before any expansion.
    pub const LITERAL: ExpandFlags = ExpandFlags {
        no_args: true,
        no_templates: true,
    };
}

impl Default for ExpandFlags {
    fn default() -> Self {
        ExpandFlags::FULL
    }
}

/// Expands raw wiki text in the caller's frame.
pub trait Expander {
    fn expand(&self, raw: &str, flags: ExpandFlags) -> String;
}

/// Resolves wiki page redirects.
pub trait RedirectResolver {
    /// Returns the canonical title `page` redirects to.
    ///
    /// `None` when the title is invalid, lies in a namespace that cannot redirect
    /// (media or special pages), or is not a redirect.
    fn redirect_target(&self, page: &str) -> Option<String>;
}

/// An [`Expander`] for arguments that are already plain text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl Expander for Verbatim {
    fn expand(&self, raw: &str, _flags: ExpandFlags) -> String {
        raw.to_string()
    }
}

/// A [`RedirectResolver`] for hosts without redirects.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRedirects;

impl RedirectResolver for NoRedirects {
    fn redirect_target(&self, _page: &str) -> Option<String> {
        None
    }
}

impl<F> Expander for F
where
    F: Fn(&str, ExpandFlags) -> String,
{
    fn expand(&self, raw: &str, flags: ExpandFlags) -> String {
        self(raw, flags)
    }
}

/// Redirect table keyed by source title.
impl<S: BuildHasher> RedirectResolver for HashMap<String, String, S> {
    fn redirect_target(&self, page: &str) -> Option<String> {
        self.get(page).cloned()
    }
}
