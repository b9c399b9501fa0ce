use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{core::CheckContext, issues::Issue, rules::CheckRule};

/// Rules explicitly named on the command line win over `disabledRules`.
fn selected_rules(requested: &[CheckRule], is_disabled: impl Fn(CheckRule) -> bool) -> Vec<CheckRule> {
    let mut rules = if requested.is_empty() {
        CheckRule::all()
            .into_iter()
            .filter(|rule| !is_disabled(*rule))
            .collect()
    } else {
        requested.to_vec()
    };
    rules.sort();
    rules.dedup();
    rules
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let rules = selected_rules(&cmd.rules, |rule| ctx.config.is_disabled(rule));
    tracing::debug!(rules = ?rules, "running rules");

    let catalogs = ctx.catalogs();
    let mut all_issues: Vec<Issue> = rules.iter().flat_map(|rule| rule.run(catalogs)).collect();

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        catalogs.len() + parse_errors.len(),
        true,
    ))
}
