use anyhow::Result;

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, StatsSummary, helper::finish};

use crate::{
    core::{Catalog, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let stats = ctx.catalogs().iter().map(Catalog::stats).collect();

    let parse_errors = ctx.parse_errors();
    let issues = parse_errors.iter().cloned().map(Issue::ParseError).collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            stats,
            json: cmd.json,
        }),
        issues,
        ctx.catalogs().len() + parse_errors.len(),
        true,
    ))
}
