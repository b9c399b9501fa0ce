use crate::{core::Catalog, issues::UnknownLanguageIssue};

/// Report catalogs whose `language` is missing or has no plural rule.
///
/// Such catalogs cannot be negotiated or used for numerus lookups.
pub fn check_unknown_languages(catalogs: &[Catalog]) -> Vec<UnknownLanguageIssue> {
    let mut issues: Vec<UnknownLanguageIssue> = catalogs
        .iter()
        .filter(|catalog| catalog.plural_rule().is_none())
        .map(|catalog| UnknownLanguageIssue {
            file_path: catalog.display_path().to_string(),
            language: catalog.language.clone().filter(|l| !l.is_empty()),
        })
        .collect();

    issues.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    issues
}
