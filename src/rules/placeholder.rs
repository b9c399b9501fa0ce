//! Placeholder mismatch detection rule.
//!
//! Qt substitutes `%1`..`%99` (and the localized `%L1` variants) with
//! `QString::arg()` values. A translation that drops or invents one shows the
//! wrong value or a raw `%3` at runtime. `%n` is handled by numerus lookup and
//! is not treated as an argument.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{
    core::Catalog,
    issues::PlaceholderMismatchIssue,
    rules::helpers::{message_context, sort_by_location},
};

static ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?)").expect("valid placeholder regex"));

/// Argument numbers referenced by `text`.
pub fn placeholders(text: &str) -> BTreeSet<u32> {
    ARG_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

fn format_args(args: &BTreeSet<u32>) -> Vec<String> {
    args.iter().map(|n| format!("%{n}")).collect()
}

/// Compare each finished, non-empty translation (every plural form) with its
/// source and report the arguments that differ.
pub fn check_placeholders(catalogs: &[Catalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for (context_name, message) in catalog.messages() {
            if !message.is_finished() {
                continue;
            }
            let expected = placeholders(&message.source);
            let mut missing = BTreeSet::new();
            let mut unexpected = BTreeSet::new();

            for form in message.translation.forms() {
                if form.is_empty() {
                    continue;
                }
                let actual = placeholders(form);
                missing.extend(expected.difference(&actual).copied());
                unexpected.extend(actual.difference(&expected).copied());
            }

            if !missing.is_empty() || !unexpected.is_empty() {
                issues.push(PlaceholderMismatchIssue {
                    context: message_context(catalog, context_name, message),
                    missing: format_args(&missing),
                    unexpected: format_args(&unexpected),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
