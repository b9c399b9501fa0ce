//! Helpers shared by rule implementations.

use crate::core::{Catalog, Message, MessageContext};

/// Diagnostic context for a message of `catalog`.
pub fn message_context(catalog: &Catalog, context_name: &str, message: &Message) -> MessageContext {
    MessageContext::for_message(catalog.display_path(), context_name, message)
}

/// Sort by file path, then line, then source text for deterministic output.
pub fn sort_by_location<T>(issues: &mut [T], context: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context(a), context(b));
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| a.source.cmp(&b.source))
    });
}

/// Messages that take part in runtime lookups.
pub fn active_messages(catalog: &Catalog) -> impl Iterator<Item = (&str, &Message)> {
    catalog.messages().filter(|(_, m)| !m.status.is_retired())
}
