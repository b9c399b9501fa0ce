//! Issue types for catalog checks.
//!
//! Each issue is self-contained: it carries everything the reporter needs to
//! print it (file, line, context name, source text) so rules never talk to the
//! output layer directly.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::core::{CatalogError, MessageContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NumerusCount,
    EmptyTranslation,
    UnknownLanguage,
    DuplicateMessage,
    PlaceholderMismatch,
    Unfinished,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NumerusCount => write!(f, "numerus-count"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::UnknownLanguage => write!(f, "unknown-language"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Numerus message whose form count does not match the catalog's plural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusCountIssue {
    pub context: MessageContext,
    /// Catalog language (e.g., "nl_NL").
    pub language: String,
    /// Forms required by the language's plural rule.
    pub expected: usize,
    /// Forms present in the translation.
    pub actual: usize,
}

impl NumerusCountIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusCount
    }
}

/// Finished translation that is empty, or has an empty plural form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Same (source, comment) pair declared twice in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    /// The later, shadowed occurrence.
    pub context: MessageContext,
    /// Line of the occurrence that wins lookups.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Translation does not use the same `%1`..`%99` arguments as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// Placeholders in the source but not in the translation.
    pub missing: Vec<String>,
    /// Placeholders in the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Message still marked `type="unfinished"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

// ============================================================
// Issue Types - Whole Files
// ============================================================

/// Catalog language missing or without a known plural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguageIssue {
    pub file_path: String,
    /// The `language` attribute as written, if any.
    pub language: Option<String>,
}

impl UnknownLanguageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnknownLanguage
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }

    pub fn from_error(path: &Path, err: &CatalogError) -> Self {
        let file_path = path.to_string_lossy().to_string();
        match err {
            CatalogError::Xml { line, message, .. } => Self {
                file_path,
                line: Some(*line),
                error: format!("malformed XML: {message}"),
            },
            CatalogError::Format { line, message, .. } => Self {
                file_path,
                line: Some(*line),
                error: message.clone(),
            },
            other => Self {
                file_path,
                line: None,
                error: other.to_string(),
            },
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking catalogs.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NumerusCount(NumerusCountIssue),
    EmptyTranslation(EmptyTranslationIssue),
    UnknownLanguage(UnknownLanguageIssue),
    DuplicateMessage(DuplicateMessageIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Unfinished(UnfinishedIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level, with an optional line.
    File { path: &'a str, line: Option<usize> },
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by every issue type; `enum_dispatch` forwards calls on
/// `Issue` without a manual match.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn quoted_source(context: &MessageContext) -> String {
    match &context.comment {
        Some(comment) if !comment.is_empty() => {
            format!("{}: \"{}\" ({})", context.context_name, context.source, comment)
        }
        _ => format!("{}: \"{}\"", context.context_name, context.source),
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for NumerusCountIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        quoted_source(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects {} numerus form(s), found {}",
            self.language, self.expected, self.actual
        ))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        quoted_source(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("translate the message or mark it type=\"unfinished\"".to_string())
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        quoted_source(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "first defined at line {}, which wins lookups",
            self.first_line
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        quoted_source(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        quoted_source(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("falls back to the source text at runtime".to_string())
    }
}

impl Report for UnknownLanguageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: None,
        }
    }

    fn message(&self) -> String {
        match &self.language {
            Some(language) => format!("catalog language '{language}' is not recognized"),
            None => "catalog has no language attribute".to_string(),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("set <TS language=\"..\"> to a locale such as nl_NL".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path, .. } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { line, .. } => line.unwrap_or(0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // file path, line, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
