use crate::{
    core::{CatalogStats, MessageContext, TranslationStatus},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatsSummary {
    pub stats: Vec<CatalogStats>,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Locales tried, in order of preference.
    pub requested: Vec<String>,
    /// Language and path of the catalog used, `None` for source fallback.
    pub matched: Option<(String, String)>,
    pub text: String,
}

/// A message that `clean` drops.
#[derive(Debug)]
pub struct RetiredMessage {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

#[derive(Debug)]
pub struct CleanedFile {
    pub file_path: String,
    pub removed: Vec<RetiredMessage>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub files: Vec<CleanedFile>,
    pub is_apply: bool,
}

impl CleanSummary {
    pub fn removed_count(&self) -> usize {
        self.files.iter().map(|f| f.removed.len()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Issues found while running the command, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs examined (parsed or not).
    pub catalogs_checked: usize,
}
