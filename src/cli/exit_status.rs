use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed, no errors found
/// - `Failure` (1): Command completed but found errors
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, no errors found.
    Success,
    /// Command completed but found errors.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::CommandSummary;

    fn result(error_count: usize, exit_on_errors: bool) -> CommandResult {
        CommandResult {
            summary: CommandSummary::Check,
            error_count,
            warning_count: 3,
            exit_on_errors,
            issues: Vec::new(),
            parse_error_count: 0,
            catalogs_checked: 1,
        }
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn warnings_alone_succeed() {
        assert_eq!(ExitStatus::from_result(&result(0, true)), ExitStatus::Success);
        assert_eq!(ExitStatus::from_result(&result(2, true)), ExitStatus::Failure);
        assert_eq!(ExitStatus::from_result(&result(2, false)), ExitStatus::Success);
    }
}
