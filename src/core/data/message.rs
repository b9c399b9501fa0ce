use std::fmt;

/// Position information in a catalog file (`.ts`).
///
/// Points at the `<message>` element a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./translations/nl_NL.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A `<location filename=".." line=".."/>` provenance record.
///
/// Informational only: it tells translators where the string came from and
/// never takes part in lookup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceReference {
    pub filename: String,
    pub line: Option<u32>,
}

impl SourceReference {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Review state of a translation, taken from `<translation type="..">`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslationStatus {
    /// No `type` attribute: the translation is approved.
    #[default]
    Finished,
    /// `type="unfinished"`: consumers fall back to the source text.
    Unfinished,
    /// `type="obsolete"`: the string no longer exists in the sources.
    Obsolete,
    /// `type="vanished"`: lupdate's newer spelling of obsolete.
    Vanished,
}

impl TranslationStatus {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("unfinished") => Self::Unfinished,
            Some("obsolete") => Self::Obsolete,
            Some("vanished") => Self::Vanished,
            _ => Self::Finished,
        }
    }

    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished messages are kept for translator memory only.
    pub fn is_retired(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr().unwrap_or("finished"))
    }
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Plain `<translation>text</translation>`.
    Singular(String),
    /// One `<numerusform>` per plural category of the target language.
    Plural(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Singular(String::new())
    }
}

impl Translation {
    /// All translated variants in order (a single one for singular messages).
    pub fn forms(&self) -> Vec<&str> {
        match self {
            Translation::Singular(text) => vec![text.as_str()],
            Translation::Plural(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// True when there is no translated text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Singular(text) => text.is_empty(),
            Translation::Plural(forms) => forms.iter().all(String::is_empty),
        }
    }

    /// True when at least one variant is missing its text.
    pub fn has_empty_form(&self) -> bool {
        match self {
            Translation::Singular(text) => text.is_empty(),
            Translation::Plural(forms) => forms.is_empty() || forms.iter().any(String::is_empty),
        }
    }
}

/// Identity of a message inside its context: source text plus disambiguating comment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageKey {
    pub source: String,
    /// Empty when the message has no `<comment>`.
    pub comment: String,
}

/// One translatable unit of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub source: String,
    pub comment: Option<String>,
    pub old_source: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub locations: Vec<SourceReference>,
    pub numerus: bool,
    pub translation: Translation,
    /// Shorter `<lengthvariant>` alternatives after the primary text, one list
    /// per translation slot (the singular text, or each numerus form).
    /// Empty when no slot has variants.
    pub length_variants: Vec<Vec<String>>,
    pub status: TranslationStatus,
    /// Line of the `<message>` element in the catalog file, 0 when built in memory.
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Singular(translation.into()),
            ..Default::default()
        }
    }

    pub fn plural(source: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            source: source.into(),
            numerus: true,
            translation: Translation::Plural(forms),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn key(&self) -> MessageKey {
        MessageKey {
            source: self.source.clone(),
            comment: self.comment_or_empty().to_string(),
        }
    }

    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Alternatives of one translation slot, in file order.
    pub fn short_variants(&self, slot: usize) -> &[String] {
        self.length_variants
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Approved and still present in the sources.
    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }
}

/// Diagnostic context for a message: where it is and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the `<context>` the message belongs to.
    pub context_name: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            comment,
        }
    }

    pub fn for_message(file_path: &str, context_name: &str, message: &Message) -> Self {
        Self::new(
            MessageLocation::with_line(file_path, message.line.max(1)),
            context_name,
            message.source.clone(),
            message.comment.clone(),
        )
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_location_with_line() {
        let loc = MessageLocation::with_line("./translations/nl_NL.ts", 5);
        assert_eq!(loc.file_path, "./translations/nl_NL.ts");
        assert_eq!(loc.line, 5);
        assert_eq!(loc.col, 1);
    }

    #[test]
    fn test_status_from_attr() {
        assert_eq!(TranslationStatus::from_attr(None), TranslationStatus::Finished);
        assert_eq!(
            TranslationStatus::from_attr(Some("unfinished")),
            TranslationStatus::Unfinished
        );
        assert_eq!(
            TranslationStatus::from_attr(Some("vanished")),
            TranslationStatus::Vanished
        );
        assert!(TranslationStatus::Obsolete.is_retired());
        assert!(!TranslationStatus::Unfinished.is_retired());
    }

    #[test]
    fn test_translation_emptiness() {
        assert!(Translation::Singular(String::new()).is_empty());
        let partial = Translation::Plural(vec!["%n melding".to_string(), String::new()]);
        assert!(!partial.is_empty());
        assert!(partial.has_empty_form());
        assert!(Translation::Plural(Vec::new()).has_empty_form());
    }

    #[test]
    fn test_short_variants_by_slot() {
        let mut message = Message::plural(
            "%n file(s)",
            vec!["%n bestand".to_string(), "%n bestanden".to_string()],
        );
        assert!(message.short_variants(0).is_empty());

        message.length_variants = vec![Vec::new(), vec!["%n best.".to_string()]];
        assert!(message.short_variants(0).is_empty());
        assert_eq!(message.short_variants(1), ["%n best.".to_string()]);
        assert!(message.short_variants(5).is_empty());
    }

    #[test]
    fn test_message_key_uses_comment() {
        let plain = Message::new("Portal", "Portaal");
        let commented = Message::new("Portal", "Portaal").with_comment("Network Portal");
        assert_ne!(plain.key(), commented.key());
        assert_eq!(plain.key().comment, "");
        assert_eq!(commented.key().comment, "Network Portal");
    }

    #[test]
    fn test_message_context_for_message() {
        let mut message = Message::new("Reboot", "Herstarten");
        message.line = 22;
        let ctx = MessageContext::for_message("nl_NL.ts", "AppsListModel", &message);
        assert_eq!(ctx.file_path(), "nl_NL.ts");
        assert_eq!(ctx.line(), 22);
        assert_eq!(ctx.context_name, "AppsListModel");
        assert_eq!(ctx.source, "Reboot");
    }
}
