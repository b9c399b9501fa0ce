//! Duplicate message detection rule.
//!
//! Lookups are keyed by (source, comment) within a context, so a second entry
//! with the same key is unreachable: the first one always wins.

use std::collections::HashMap;

use crate::{
    core::{Catalog, MessageKey},
    issues::DuplicateMessageIssue,
    rules::helpers::{active_messages, message_context, sort_by_location},
};

/// Report every active message whose key already appeared earlier in the
/// same context. Obsolete and vanished entries are ignored.
pub fn check_duplicate_messages(catalogs: &[Catalog]) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        let mut seen: HashMap<(&str, MessageKey), usize> = HashMap::new();
        for (context_name, message) in active_messages(catalog) {
            let context = message_context(catalog, context_name, message);
            match seen.get(&(context_name, message.key())) {
                Some(&first_line) => issues.push(DuplicateMessageIssue {
                    context,
                    first_line,
                }),
                None => {
                    seen.insert((context_name, message.key()), context.line());
                }
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
