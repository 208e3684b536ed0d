//! Message template rendering.
//!
//! Grammar: literal text with `{Identifier}` placeholders, where an
//! identifier is `[A-Za-z_][A-Za-z0-9_]*`. A placeholder naming a fact in the
//! context is replaced by the fact's text. Anything else, including unknown
//! placeholders and stray braces, is copied through verbatim.

use crate::context::FailureContext;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex must compile")
    })
}

/// Substitute every known placeholder in `template` from `context`.
pub fn render(template: &str, context: &FailureContext) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures<'_>| {
            context
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Placeholder names referenced by `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_re()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|name| name.as_str()))
        .collect()
}
