//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so stdout stays reserved for command output (and for the
//! single JSON document in `--json` mode).

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `mvmctl_cli=debug`.
pub const LOG_ENV: &str = "MVMCTL_LOG";

/// Filter used when `--verbose` is not given and `MVMCTL_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter: `--verbose` wins, then `MVMCTL_LOG`, then warnings only.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("warn,mvmctl_cli=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose);

    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(filter(verbose)))
        .try_init();
}
