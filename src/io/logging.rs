//! Tracing subscriber setup for command-line runs

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Build the event filter, preferring `RUST_LOG` over the command-line default
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install a stderr fmt subscriber as the global default
///
/// Returns `false` when a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
