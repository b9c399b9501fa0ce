use crate::{
    core::{Catalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::{message_context, sort_by_location},
};

/// Report messages still marked `type="unfinished"`.
pub fn check_unfinished(catalogs: &[Catalog]) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .messages()
                .filter(|(_, m)| m.status == TranslationStatus::Unfinished)
                .map(move |(context_name, m)| UnfinishedIssue {
                    context: message_context(catalog, context_name, m),
                })
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
