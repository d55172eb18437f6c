//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with menu output on stdout.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Name of the binary target, used in the default filter
const BIN_NAME: &str = "expenses";

/// Pick the log level from the `--verbose` flag
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise `level` for this crate only
pub fn build_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            BIN_NAME,
            level
        )),
    }
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logger(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
