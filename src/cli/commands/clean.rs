use std::path::Path;

use anyhow::{Context, Result, bail};

use super::super::args::CleanCommand;
use super::{
    CleanSummary, CleanedFile, CommandResult, CommandSummary, RetiredMessage, helper::finish,
};

use crate::{
    core::{Catalog, CheckContext, MessageContext, writer::write_ts_file},
    issues::Issue,
};

/// Obsolete and vanished messages of `catalog`, in file order.
fn retired_messages(catalog: &Catalog) -> Vec<RetiredMessage> {
    catalog
        .messages()
        .filter(|(_, m)| m.status.is_retired())
        .map(|(context_name, m)| RetiredMessage {
            context: MessageContext::for_message(catalog.display_path(), context_name, m),
            status: m.status,
        })
        .collect()
}

/// Fail before anything is written if a catalog holds content the writer would drop.
fn ensure_round_trips<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Result<()> {
    for catalog in catalogs {
        if !catalog.round_trips() {
            let lost: Vec<&str> = catalog.unmodelled.iter().map(String::as_str).collect();
            bail!(
                "Refusing to rewrite {}: it contains content that would be lost ({})",
                catalog.display_path(),
                lost.join(", ")
            );
        }
    }
    Ok(())
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let mut files = Vec::new();
    let mut rewrites = Vec::new();

    for catalog in ctx.catalogs() {
        let removed = retired_messages(catalog);
        if removed.is_empty() {
            continue;
        }
        let Some(file_path) = catalog.file_path.clone() else {
            continue;
        };

        rewrites.push(catalog);
        files.push(CleanedFile { file_path, removed });
    }

    if cmd.apply {
        ensure_round_trips(rewrites.iter().copied())?;
        for catalog in rewrites {
            let mut cleaned = catalog.clone();
            let count = cleaned.retain_active();
            let file_path = catalog.display_path();
            write_ts_file(&cleaned, Path::new(file_path))
                .with_context(|| format!("Failed to rewrite {}", file_path))?;
            tracing::debug!(path = %file_path, removed = count, "rewrote catalog");
        }
    }

    let parse_errors = ctx.parse_errors();
    let issues = parse_errors.iter().cloned().map(Issue::ParseError).collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            files,
            is_apply: cmd.apply,
        }),
        issues,
        ctx.catalogs().len() + parse_errors.len(),
        true,
    ))
}
