//! Numerus form count detection rule.
//!
//! A numerus message needs exactly one `<numerusform>` per plural category of
//! the catalog's language. Too few forms make some counts fall back to the
//! last form; too many are never selected.

use crate::{
    core::{Catalog, Translation, TranslationStatus},
    issues::NumerusCountIssue,
    rules::helpers::{active_messages, message_context, sort_by_location},
};

/// Check numerus messages against the form count of each catalog's plural rule.
///
/// Catalogs with an unknown language are skipped (`unknown-language` reports
/// them). An unfinished message with no `<numerusform>` at all is skipped
/// too: lupdate writes an empty `<translation>` for translators to fill in.
pub fn check_numerus_count(catalogs: &[Catalog]) -> Vec<NumerusCountIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let Some(rule) = catalog.plural_rule() else {
            continue;
        };
        let expected = rule.form_count();
        let language = catalog.language.clone().unwrap_or_default();

        for (context_name, message) in active_messages(catalog) {
            if !message.numerus {
                continue;
            }
            let Translation::Plural(forms) = &message.translation else {
                continue;
            };
            if message.status == TranslationStatus::Unfinished && forms.is_empty() {
                continue;
            }
            if forms.len() != expected {
                issues.push(NumerusCountIssue {
                    context: message_context(catalog, context_name, message),
                    language: language.clone(),
                    expected,
                    actual: forms.len(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
