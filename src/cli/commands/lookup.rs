use anyhow::{Context, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};

use crate::core::{CheckContext, Locale, Translator, locale::system_locales};

/// Locales to try, most preferred first.
///
/// An explicit `--locale` is used alone. Otherwise the environment's locales
/// are tried, then `fallbackLocale` from the config file.
fn preferred_locales(
    explicit: Option<&str>,
    fallback: Option<&str>,
    system: impl FnOnce() -> Vec<Locale>,
) -> Result<Vec<Locale>> {
    if let Some(explicit) = explicit {
        let locale = Locale::parse(explicit).context("Invalid --locale")?;
        return Ok(vec![locale]);
    }

    let mut locales = system();
    if let Some(fallback) = fallback {
        let locale = Locale::parse(fallback).context("Invalid 'fallbackLocale' in config")?;
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    Ok(locales)
}

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let preferred = preferred_locales(
        cmd.locale.as_deref(),
        ctx.config.fallback_locale.as_deref(),
        system_locales,
    )?;

    let set = ctx.catalog_set();
    let translator = match set.negotiate(&preferred) {
        Some(catalog) => Translator::new(catalog)?,
        None => Translator::empty(),
    };

    let text = translator
        .translate(&cmd.context, &cmd.source, cmd.comment.as_deref(), cmd.count)
        .into_owned();

    let matched = translator.catalog().map(|catalog| {
        (
            catalog.language.clone().unwrap_or_default(),
            catalog.display_path().to_string(),
        )
    });

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            requested: preferred.iter().map(Locale::name).collect(),
            matched,
            text,
        }),
        Vec::new(),
        ctx.catalogs().len(),
        true,
    ))
}
