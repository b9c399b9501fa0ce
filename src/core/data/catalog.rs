use std::collections::BTreeSet;

use serde::Serialize;

use super::message::{Message, TranslationStatus};
use crate::core::{locale::Locale, plural::PluralRule};

/// Format version written by current lupdate releases.
pub const TS_VERSION: &str = "2.1";

/// A named group of messages, one per UI component (e.g. `BluetoothManagement`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// All translated strings for one locale, as stored in a single `.ts` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub version: String,
    /// Target locale (`language` attribute), e.g. `nl_NL`.
    pub language: Option<String>,
    /// Locale of the source strings (`sourcelanguage` attribute), e.g. `en_AU`.
    pub source_language: Option<String>,
    /// File the catalog was loaded from, if any.
    pub file_path: Option<String>,
    pub contexts: Vec<Context>,
    /// Elements (`<extra-po-flags>`) and attributes (`message@id`) the
    /// reader skipped. Writing the catalog back would drop them.
    pub unmodelled: BTreeSet<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: TS_VERSION.to_string(),
            language: None,
            source_language: None,
            file_path: None,
            contexts: Vec::new(),
            unmodelled: BTreeSet::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// Path used in diagnostics; `<memory>` for catalogs built in code.
    pub fn display_path(&self) -> &str {
        self.file_path.as_deref().unwrap_or("<memory>")
    }

    /// Parsed target locale, `None` when the attribute is missing or malformed.
    pub fn locale(&self) -> Option<Locale> {
        self.language
            .as_deref()
            .and_then(|language| Locale::parse(language).ok())
    }

    /// Plural rule of the target language, `None` when the language is unknown.
    pub fn plural_rule(&self) -> Option<PluralRule> {
        self.locale().as_ref().and_then(PluralRule::for_locale)
    }

    /// True when [`write_ts`](crate::core::writer::write_ts) reproduces everything that was read.
    pub fn round_trips(&self) -> bool {
        self.unmodelled.is_empty()
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over every message together with its context name.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Remove obsolete and vanished messages, returning how many were dropped.
    pub fn retain_active(&mut self) -> usize {
        let before = self.message_count();
        for context in &mut self.contexts {
            context.messages.retain(|m| !m.status.is_retired());
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        before - self.message_count()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            file_path: self.display_path().to_string(),
            language: self.language.clone().unwrap_or_default(),
            contexts: self.contexts.len(),
            ..Default::default()
        };
        for (_, message) in self.messages() {
            stats.messages += 1;
            if message.numerus {
                stats.numerus += 1;
            }
            match message.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.retired += 1,
            }
        }
        stats
    }
}

/// Translation progress counters for one catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file_path: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished messages.
    pub retired: usize,
    pub numerus: usize,
}

impl CatalogStats {
    /// Percentage of active (non-retired) messages that are finished.
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new("nl_NL")
            .with_context(
                Context::new("AppsListModel")
                    .with_message(Message::new("Reboot", "Herstarten"))
                    .with_message(
                        Message::new("System Configuration", "")
                            .with_status(TranslationStatus::Unfinished),
                    ),
            )
            .with_context(
                Context::new("InfoPaneDropdown")
                    .with_message(Message::plural(
                        "%n days",
                        vec!["%n dag".to_string(), "%n dagen".to_string()],
                    ))
                    .with_message(
                        Message::new("Old string", "Oude tekst")
                            .with_status(TranslationStatus::Vanished),
                    ),
            )
    }

    #[test]
    fn test_stats_counts() {
        let stats = sample().stats();
        assert_eq!(stats.language, "nl_NL");
        assert_eq!(stats.contexts, 2);
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.finished, 2);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.retired, 1);
        assert_eq!(stats.numerus, 1);
        assert!((stats.completion() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_empty_catalog_is_complete() {
        assert_eq!(Catalog::new("vi_VN").stats().completion(), 100.0);
    }

    #[test]
    fn test_retain_active_drops_retired_and_empty_contexts() {
        let mut catalog = Catalog::new("nl_NL").with_context(
            Context::new("Gone").with_message(
                Message::new("Old", "Oud").with_status(TranslationStatus::Obsolete),
            ),
        );
        catalog.contexts.extend(sample().contexts);

        assert_eq!(catalog.retain_active(), 2);
        assert_eq!(catalog.message_count(), 3);
        assert!(catalog.context("Gone").is_none());
    }

    #[test]
    fn test_plural_rule_follows_language() {
        assert_eq!(sample().plural_rule(), Some(PluralRule::English));
        assert_eq!(Catalog::new("vi_VN").plural_rule(), Some(PluralRule::OneForm));
        assert_eq!(Catalog::new("xx_YY").plural_rule(), None);
        assert_eq!(Catalog::default().plural_rule(), None);
    }
}
