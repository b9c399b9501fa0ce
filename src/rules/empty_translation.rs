//! Empty translation detection rule.
//!
//! A finished message with no text would display nothing at runtime, since
//! only unfinished messages fall back to the source.

use crate::{
    core::Catalog,
    issues::EmptyTranslationIssue,
    rules::helpers::{message_context, sort_by_location},
};

/// Report finished messages whose translation (or any plural form) is empty.
pub fn check_empty_translations(catalogs: &[Catalog]) -> Vec<EmptyTranslationIssue> {
    let mut issues: Vec<EmptyTranslationIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(_, m)| m.is_finished() && m.translation.has_empty_form())
                .map(move |(context_name, m)| EmptyTranslationIssue {
                    context: message_context(catalog, context_name, m),
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
