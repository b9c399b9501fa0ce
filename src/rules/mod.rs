//! Rule implementations for tscat.
//!
//! Each rule is a pure function over the loaded catalogs that returns its own
//! issue type. Rules never read files or print anything.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (message contexts, sorting)
//! - `numerus_count`: Plural form count vs. the language's plural rule
//! - `empty_translation`: Finished messages without text
//! - `unknown_language`: Catalogs whose language has no plural rule
//! - `duplicate_message`: Same source and comment twice in a context
//! - `placeholder`: `%1`..`%99` arguments differing between source and translation
//! - `unfinished`: Messages still marked unfinished

pub mod duplicate_message;
pub mod empty_translation;
pub mod helpers;
pub mod numerus_count;
pub mod placeholder;
pub mod unfinished;
pub mod unknown_language;

use clap::ValueEnum;

use crate::{core::Catalog, issues::Issue};

pub use duplicate_message::check_duplicate_messages;
pub use empty_translation::check_empty_translations;
pub use numerus_count::check_numerus_count;
pub use placeholder::check_placeholders;
pub use unfinished::check_unfinished;
pub use unknown_language::check_unknown_languages;

/// Selectable rule, as named on the command line and in `disabledRules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum CheckRule {
    NumerusCount,
    EmptyTranslation,
    UnknownLanguage,
    DuplicateMessage,
    PlaceholderMismatch,
    Unfinished,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::NumerusCount,
            CheckRule::EmptyTranslation,
            CheckRule::UnknownLanguage,
            CheckRule::DuplicateMessage,
            CheckRule::PlaceholderMismatch,
            CheckRule::Unfinished,
        ]
    }

    /// Kebab-case identifier used in config files and reports.
    pub fn id(self) -> &'static str {
        match self {
            CheckRule::NumerusCount => "numerus-count",
            CheckRule::EmptyTranslation => "empty-translation",
            CheckRule::UnknownLanguage => "unknown-language",
            CheckRule::DuplicateMessage => "duplicate-message",
            CheckRule::PlaceholderMismatch => "placeholder-mismatch",
            CheckRule::Unfinished => "unfinished",
        }
    }

    pub fn from_id(id: &str) -> Option<CheckRule> {
        Self::all().into_iter().find(|rule| rule.id() == id)
    }

    /// Run this rule and wrap its findings as `Issue`s.
    pub fn run(self, catalogs: &[Catalog]) -> Vec<Issue> {
        match self {
            CheckRule::NumerusCount => check_numerus_count(catalogs)
                .into_iter()
                .map(Issue::NumerusCount)
                .collect(),
            CheckRule::EmptyTranslation => check_empty_translations(catalogs)
                .into_iter()
                .map(Issue::EmptyTranslation)
                .collect(),
            CheckRule::UnknownLanguage => check_unknown_languages(catalogs)
                .into_iter()
                .map(Issue::UnknownLanguage)
                .collect(),
            CheckRule::DuplicateMessage => check_duplicate_messages(catalogs)
                .into_iter()
                .map(Issue::DuplicateMessage)
                .collect(),
            CheckRule::PlaceholderMismatch => check_placeholders(catalogs)
                .into_iter()
                .map(Issue::PlaceholderMismatch)
                .collect(),
            CheckRule::Unfinished => check_unfinished(catalogs)
                .into_iter()
                .map(Issue::Unfinished)
                .collect(),
        }
    }
}

impl std::fmt::Display for CheckRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
