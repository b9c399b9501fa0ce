//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the commands so
//! that tscat can be used as a library without any terminal output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);
    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            catalogs,
            plural(catalogs, "catalog", "catalogs")
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let location = match issue.location() {
        ReportLocation::Message(ctx) => {
            format!("{}:{}:{}", ctx.file_path(), ctx.line(), ctx.col())
        }
        ReportLocation::File {
            path,
            line: Some(line),
        } => format!("{}:{}", path, line),
        ReportLocation::File { path, line: None } => path.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { line, .. } => line,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(result.catalogs_checked, &mut stdout);
            } else {
                report_to(&result.issues, &mut stdout);
            }
        }
        CommandSummary::Stats(summary) => {
            if summary.json {
                print_stats_json(summary, &mut stdout)?;
                // Keep stdout valid JSON.
                report_to(&result.issues, &mut stderr);
            } else {
                print_stats_table(summary, &mut stdout);
                report_to(&result.issues, &mut stdout);
            }
        }
        CommandSummary::Lookup(summary) => {
            print_lookup(summary, verbose, &mut stdout, &mut stderr);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary, &mut stdout);
            report_to(&result.issues, &mut stdout);
        }
        CommandSummary::Init(summary) => {
            print_init(summary, &mut stdout, &mut stderr);
        }
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsRow<'a> {
    #[serde(flatten)]
    stats: &'a CatalogStats,
    completion: f64,
}

fn print_stats_json<W: Write>(summary: &StatsSummary, writer: &mut W) -> Result<()> {
    let rows: Vec<StatsRow> = summary
        .stats
        .iter()
        .map(|stats| StatsRow {
            stats,
            completion: (stats.completion() * 10.0).round() / 10.0,
        })
        .collect();
    let json = serde_json::to_string_pretty(&rows)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Left-align `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn print_stats_table<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.stats.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    const HEADERS: [&str; 8] = [
        "Catalog",
        "Language",
        "Messages",
        "Finished",
        "Unfinished",
        "Retired",
        "Numerus",
        "Done",
    ];

    let rows: Vec<[String; 8]> = summary
        .stats
        .iter()
        .map(|s| {
            [
                s.file_path.clone(),
                s.language.clone(),
                s.messages.to_string(),
                s.finished.to_string(),
                s.unfinished.to_string(),
                s.retired.to_string(),
                s.numerus.to_string(),
                format!("{:.1}%", s.completion()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect();
    let _ = writeln!(writer, "{}", header.join("  ").trim_end().bold());

    for row in &rows {
        let cells: Vec<String> = row.iter().zip(widths).map(|(c, w)| pad(c, w)).collect();
        let _ = writeln!(writer, "{}", cells.join("  ").trim_end());
    }
}

fn print_lookup<W: Write, E: Write>(
    summary: &LookupSummary,
    verbose: bool,
    writer: &mut W,
    notes: &mut E,
) {
    let _ = writeln!(writer, "{}", summary.text);

    if verbose {
        let note = match &summary.matched {
            Some((language, path)) => format!("resolved with {} ({})", language, path),
            None if summary.requested.is_empty() => {
                "no locale requested, using source text".to_string()
            }
            None => format!(
                "no catalog for {}, using source text",
                summary.requested.join(", ")
            ),
        };
        let _ = writeln!(notes, "{} {}", "note:".bold(), note);
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let total = summary.removed_count();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No obsolete or vanished messages found".green()
        );
        return;
    }

    if !summary.is_apply {
        for file in &summary.files {
            for retired in &file.removed {
                let ctx = &retired.context;
                let _ = writeln!(
                    writer,
                    "  {} {}:{}  {}: \"{}\" ({})",
                    "-".red(),
                    ctx.file_path(),
                    ctx.line(),
                    ctx.context_name,
                    ctx.source,
                    retired.status
                );
            }
        }
        let _ = writeln!(writer);
    }

    let file_count = summary.files.len();
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {}.",
            "Removed".green().bold(),
            total,
            plural(total, "message", "messages"),
            file_count,
            plural(file_count, "file", "files")
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {}.",
            "Would remove".yellow().bold(),
            total,
            plural(total, "message", "messages"),
            file_count,
            plural(file_count, "file", "files")
        );
        let _ = writeln!(writer, "Run with {} to remove them.", "--apply".cyan());
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, writer: &mut W, errors: &mut E) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        let _ = writeln!(errors, "Error: {}", error);
    }
}

// ============================================================
// Tests
// ============================================================
