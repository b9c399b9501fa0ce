//! Diagnostic logging setup.
//!
//! Logs go to stderr so that report output on stdout stays machine-stable.
//! `TSCAT_LOG` takes a `tracing_subscriber::EnvFilter` directive such as
//! `tscat=debug`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TSCAT_LOG";

/// Filter used when `TSCAT_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
